//! # Catalog
//! Fixed Focus → Topic framework. Immutable once built; every derived score
//! is computed from `"<FocusCode>.<TopicCode>"` identifiers of this catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::SpotlightError;
use crate::hasher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub focuses: Vec<Focus>,
}

/// One leaf of the catalog, borrowed in definition order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub focus: &'a Focus,
    pub topic: &'a Topic,
}

impl CatalogEntry<'_> {
    pub fn identifier(&self) -> String {
        identifier(&self.focus.code, &self.topic.code)
    }
}

/// Composite key `"<FocusCode>.<TopicCode>"`.
pub fn identifier(focus_code: &str, topic_code: &str) -> String {
    format!("{focus_code}.{topic_code}")
}

impl Catalog {
    pub fn new(focuses: Vec<Focus>) -> Self {
        Self { focuses }
    }

    /// The built-in 10 x 10 framework.
    pub fn builtin() -> Self {
        let focuses = BUILTIN
            .iter()
            .map(|(code, title, topics)| Focus {
                code: (*code).to_string(),
                title: (*title).to_string(),
                topics: topics
                    .iter()
                    .enumerate()
                    .map(|(i, t)| Topic {
                        code: format!("T{}", i + 1),
                        title: (*t).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { focuses }
    }

    /// Leaves in definition order: Focus, then Topic.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> + '_ {
        self.focuses
            .iter()
            .flat_map(|focus| focus.topics.iter().map(move |topic| CatalogEntry { focus, topic }))
    }

    pub fn len(&self) -> usize {
        self.focuses.iter().map(|f| f.topics.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lookup(&self, id: &str) -> Option<CatalogEntry<'_>> {
        let (focus_code, topic_code) = id.split_once('.')?;
        let focus = self.focuses.iter().find(|f| f.code == focus_code)?;
        let topic = focus.topics.iter().find(|t| t.code == topic_code)?;
        Some(CatalogEntry { focus, topic })
    }

    /// Every identifier must be well formed and unique.
    pub fn validate(&self) -> Result<(), SpotlightError> {
        let mut seen = BTreeSet::new();
        for entry in self.entries() {
            let id = entry.identifier();
            if !hasher::is_well_formed(&id) {
                return Err(SpotlightError::InvalidIdentifier(id));
            }
            if !seen.insert(id.clone()) {
                return Err(SpotlightError::DuplicateIdentifier(id));
            }
        }
        Ok(())
    }
}

type FocusRow = (&'static str, &'static str, [&'static str; 10]);

const BUILTIN: [FocusRow; 10] = [
    (
        "F1",
        "Family",
        [
            "Health & Wellness",
            "Quality Time",
            "Communication",
            "Financial Security",
            "Education",
            "Legacy Planning",
            "Traditions",
            "Conflict Resolution",
            "Shared Goals",
            "Emotional Support",
        ],
    ),
    (
        "F2",
        "Finance",
        [
            "Cash Flow Management",
            "Investment Portfolio",
            "Tax Strategy",
            "Risk Management",
            "Debt Optimization",
            "Estate Planning",
            "Retirement Planning",
            "Wealth Preservation",
            "Diversification",
            "Financial Goals",
        ],
    ),
    (
        "F3",
        "Fitness",
        [
            "Cardiovascular Health",
            "Strength Training",
            "Flexibility & Mobility",
            "Nutrition & Diet",
            "Sleep Quality",
            "Stress Management",
            "Preventive Care",
            "Mental Wellness",
            "Recovery & Rest",
            "Longevity Goals",
        ],
    ),
    (
        "F4",
        "Faith",
        [
            "Spiritual Practice",
            "Moral Compass",
            "Community Engagement",
            "Charitable Giving",
            "Purpose & Meaning",
            "Reflection & Meditation",
            "Values Alignment",
            "Service to Others",
            "Gratitude Practice",
            "Inner Peace",
        ],
    ),
    (
        "F5",
        "Friends",
        [
            "Social Network",
            "Trust Building",
            "Quality Connections",
            "Mutual Support",
            "Shared Experiences",
            "Boundaries",
            "Communication",
            "Loyalty & Commitment",
            "Fun & Recreation",
            "Growth Together",
        ],
    ),
    (
        "F6",
        "Freedom",
        [
            "Time Autonomy",
            "Location Independence",
            "Financial Independence",
            "Decision Authority",
            "Creative Expression",
            "Personal Boundaries",
            "Work-Life Balance",
            "Self-Determination",
            "Flexibility",
            "Choice & Options",
        ],
    ),
    (
        "F7",
        "Fun",
        [
            "Hobbies & Interests",
            "Travel & Adventure",
            "Entertainment",
            "Sports & Games",
            "Creative Pursuits",
            "Social Events",
            "Relaxation",
            "Exploration",
            "Spontaneity",
            "Joy & Laughter",
        ],
    ),
    (
        "F8",
        "Fulfillment",
        [
            "Life Purpose",
            "Achievement",
            "Contribution",
            "Personal Growth",
            "Impact & Legacy",
            "Satisfaction",
            "Mastery",
            "Meaning",
            "Self-Actualization",
            "Contentment",
        ],
    ),
    (
        "F9",
        "Focus",
        [
            "Concentration",
            "Priority Setting",
            "Time Management",
            "Distraction Control",
            "Deep Work",
            "Goal Clarity",
            "Task Completion",
            "Energy Management",
            "Mindfulness",
            "Strategic Thinking",
        ],
    ),
    (
        "F10",
        "Future",
        [
            "Vision Setting",
            "Long-term Planning",
            "Innovation",
            "Risk Assessment",
            "Opportunity Scanning",
            "Succession Planning",
            "Technology Adoption",
            "Market Positioning",
            "Scenario Planning",
            "Legacy Building",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_ten_by_ten() {
        let c = Catalog::builtin();
        assert_eq!(c.focuses.len(), 10);
        assert!(c.focuses.iter().all(|f| f.topics.len() == 10));
        assert_eq!(c.len(), 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn entries_follow_definition_order() {
        let c = Catalog::builtin();
        let ids: Vec<String> = c.entries().map(|e| e.identifier()).collect();
        assert_eq!(ids[0], "F1.T1");
        assert_eq!(ids[9], "F1.T10");
        assert_eq!(ids[10], "F2.T1");
        assert_eq!(ids[99], "F10.T10");
    }

    #[test]
    fn lookup_resolves_titles() {
        let c = Catalog::builtin();
        let e = c.lookup("F3.T7").expect("F3.T7 exists");
        assert_eq!(e.focus.title, "Fitness");
        assert_eq!(e.topic.title, "Preventive Care");
        assert!(c.lookup("F11.T1").is_none());
        assert!(c.lookup("garbage").is_none());
    }

    #[test]
    fn validate_flags_duplicates() {
        let topic = Topic {
            code: "T1".into(),
            title: "x".into(),
        };
        let c = Catalog::new(vec![
            Focus {
                code: "F1".into(),
                title: "A".into(),
                topics: vec![topic.clone()],
            },
            Focus {
                code: "F1".into(),
                title: "B".into(),
                topics: vec![topic],
            },
        ]);
        assert_eq!(
            c.validate(),
            Err(SpotlightError::DuplicateIdentifier("F1.T1".into()))
        );
    }

    #[test]
    fn validate_flags_blank_codes() {
        let c = Catalog::new(vec![Focus {
            code: "F1".into(),
            title: "A".into(),
            topics: vec![Topic {
                code: String::new(),
                title: "x".into(),
            }],
        }]);
        assert_eq!(
            c.validate(),
            Err(SpotlightError::InvalidIdentifier("F1.".into()))
        );
    }
}
