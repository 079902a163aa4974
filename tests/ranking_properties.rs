// tests/ranking_properties.rs
//
// Totality, uniqueness and ordering of the momentum ranking.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::BTreeSet;

use focus_spotlight::catalog::Catalog;
use focus_spotlight::rank::{rank, rank_entries, RankedEntry, NEAR_TIE};
use focus_spotlight::synth::ScoreSeries;

fn entry(id: &str, delta: f64) -> RankedEntry {
    RankedEntry {
        identifier: id.to_string(),
        focus_code: String::new(),
        focus_title: String::new(),
        topic_code: String::new(),
        topic_title: String::new(),
        current_score: 0,
        series: ScoreSeries([0; 8]),
        week_over_week_delta: delta,
    }
}

#[test]
fn ranking_covers_catalog_exactly_once() {
    let catalog = Catalog::builtin();
    let ranked = rank(&catalog).unwrap();
    assert_eq!(ranked.len(), 100);

    let ids: BTreeSet<String> = ranked.iter().map(|e| e.identifier.clone()).collect();
    let expected: BTreeSet<String> = catalog.entries().map(|e| e.identifier()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn adjacent_pairs_respect_comparator() {
    let ranked = rank(&Catalog::builtin()).unwrap();
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let gap = a.week_over_week_delta - b.week_over_week_delta;
        assert!(
            gap >= NEAR_TIE || (gap.abs() < NEAR_TIE && a.identifier <= b.identifier),
            "{} ({}) before {} ({})",
            a.identifier,
            a.week_over_week_delta,
            b.identifier,
            b.week_over_week_delta
        );
    }
}

#[test]
fn entries_carry_consistent_derived_fields() {
    for e in rank(&Catalog::builtin()).unwrap() {
        assert_eq!(e.identifier, format!("{}.{}", e.focus_code, e.topic_code));
        assert_eq!(e.current_score, e.series.current());
        assert_eq!(
            e.week_over_week_delta,
            f64::from(e.series.current() - e.series.previous())
        );
    }
}

#[test]
fn golden_head_and_tail() {
    let ranked = rank(&Catalog::builtin()).unwrap();
    let head: Vec<&str> = ranked.iter().take(5).map(|e| e.identifier.as_str()).collect();
    assert_eq!(head, vec!["F10.T2", "F10.T5", "F10.T6", "F2.T10", "F5.T10"]);
    assert!(ranked[..5].iter().all(|e| e.week_over_week_delta == 6.0));

    let last = ranked.last().unwrap();
    assert_eq!(last.identifier, "F10.T10");
    assert_eq!(last.week_over_week_delta, -6.0);
}

#[test]
fn input_order_does_not_change_result() {
    let ranked = rank(&Catalog::builtin()).unwrap();
    let mut rng = StdRng::seed_from_u64(0xF0C5);
    for _ in 0..5 {
        let mut shuffled = ranked.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(rank_entries(shuffled), ranked);
    }
}

#[test]
fn near_tie_uses_identifier_not_magnitude() {
    let out = rank_entries(vec![entry("F9.T9", 5.005), entry("F1.T1", 5.0)]);
    let ids: Vec<&str> = out.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(ids, vec!["F1.T1", "F9.T9"]);
}

#[test]
fn duplicate_identifiers_are_rejected() {
    use focus_spotlight::catalog::{Focus, Topic};
    use focus_spotlight::SpotlightError;

    let focus = |title: &str| Focus {
        code: "F1".into(),
        title: title.into(),
        topics: vec![Topic {
            code: "T1".into(),
            title: "Shared".into(),
        }],
    };
    let catalog = Catalog::new(vec![focus("A"), focus("B")]);
    assert_eq!(
        rank(&catalog),
        Err(SpotlightError::DuplicateIdentifier("F1.T1".into()))
    );
}

#[test]
fn chained_fractional_near_ties_hold_pairwise() {
    let ranked = rank_entries(vec![entry("Y.1", 1.0), entry("Z.1", 0.991), entry("A.1", 0.990)]);
    let ids: Vec<&str> = ranked.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(ids, vec!["Y.1", "A.1", "Z.1"]);
    for pair in ranked.windows(2) {
        let gap = pair[0].week_over_week_delta - pair[1].week_over_week_delta;
        assert!(gap >= NEAR_TIE || (gap.abs() < NEAR_TIE && pair[0].identifier <= pair[1].identifier));
    }
}
