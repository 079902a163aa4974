//! Identifier → seed. Sum of the character codes (UTF-16 units) of the
//! identifier. Not a cryptographic hash; collisions are expected
//! (`F1.T10` and `F10.T1` share a seed) and are harmless for ranking.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::SpotlightError;

fn identifier_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$").expect("identifier regex"))
}

/// True for identifiers shaped `<FocusCode>.<TopicCode>`.
pub fn is_well_formed(identifier: &str) -> bool {
    identifier_re().is_match(identifier)
}

/// Seed for `identifier`. Fails loudly on malformed input instead of hashing to 0.
pub fn seed_for(identifier: &str) -> Result<u32, SpotlightError> {
    if !is_well_formed(identifier) {
        return Err(SpotlightError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(identifier
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit))))
}
