//! # Spotlight Navigator
//! Ranked entries (fixed at construction) plus a wrapping cursor. The cursor
//! is the only mutable field. Actions return the side effect to perform; the
//! navigator never performs or awaits it.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::SpotlightError;
use crate::rank::{self, RankedEntry};

/// Cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

impl Step {
    /// `+1` / `-1` as used by hosts; anything else is rejected.
    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset {
            1 => Some(Step::Forward),
            -1 => Some(Step::Back),
            _ => None,
        }
    }
}

/// Side effect requested by the navigator (fire-and-forget).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpotlightEffect {
    NavigateToDetail { identifier: String },
    CopyToClipboard { identifier: String, confirmation: String },
}

impl SpotlightEffect {
    pub fn identifier(&self) -> &str {
        match self {
            SpotlightEffect::NavigateToDetail { identifier }
            | SpotlightEffect::CopyToClipboard { identifier, .. } => identifier,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpotlightEffect::NavigateToDetail { .. } => "navigate",
            SpotlightEffect::CopyToClipboard { .. } => "copy",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spotlight {
    entries: Vec<RankedEntry>,
    cursor: usize,
}

impl Spotlight {
    /// Rank `catalog` once and start at the top entry.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, SpotlightError> {
        Ok(Self::from_entries(rank::rank(catalog)?))
    }

    /// Use an already-ranked list as-is.
    pub fn from_entries(entries: Vec<RankedEntry>) -> Self {
        Self { entries, cursor: 0 }
    }

    /// False when there is nothing to show; all input is then a no-op.
    pub fn is_active(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor, or `None` while inactive.
    pub fn cursor(&self) -> Option<usize> {
        self.is_active().then_some(self.cursor)
    }

    /// `(cursor + 1, total)` for display.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor().map(|c| (c + 1, self.entries.len()))
    }

    pub fn current(&self) -> Result<&RankedEntry, SpotlightError> {
        self.entries.get(self.cursor).ok_or(SpotlightError::EmptyCatalog)
    }

    /// Move the cursor one step, wrapping at both ends. Returns the new cursor.
    pub fn advance(&mut self, step: Step) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        self.cursor = match step {
            Step::Forward => (self.cursor + 1) % len,
            Step::Back => (self.cursor + len - 1) % len,
        };
        debug!(target: "spotlight", cursor = self.cursor, len, "cursor moved");
        Some(self.cursor)
    }

    /// Request the detail view for the current entry.
    pub fn activate(&self) -> Option<SpotlightEffect> {
        let current = self.current().ok()?;
        Some(SpotlightEffect::NavigateToDetail {
            identifier: current.identifier.clone(),
        })
    }

    /// Request a clipboard copy of the current identifier.
    pub fn copy_identifier(&self) -> Option<SpotlightEffect> {
        let current = self.current().ok()?;
        Some(SpotlightEffect::CopyToClipboard {
            identifier: current.identifier.clone(),
            confirmation: format!("Copied {} to clipboard", current.identifier),
        })
    }
}
