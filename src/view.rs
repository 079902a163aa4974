//! Read-only presentation output for the spotlight card: the focused entry,
//! its ordinal, a signed delta label and sparkline geometry.

use serde::Serialize;

use crate::error::SpotlightError;
use crate::rank::RankedEntry;
use crate::spotlight::Spotlight;

pub const SPARK_WIDTH: f64 = 100.0;
pub const SPARK_HEIGHT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sparkline {
    /// `(x, y)` per point in a `SPARK_WIDTH x SPARK_HEIGHT` box, y growing down.
    pub points: Vec<(f64, f64)>,
    pub line_path: String,
    pub area_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotlightView {
    pub identifier: String,
    pub focus_code: String,
    pub focus_title: String,
    pub topic_code: String,
    pub topic_title: String,
    pub score: i32,
    pub series: Vec<i32>,
    pub delta: f64,
    pub delta_label: String,
    pub trend: Trend,
    pub ordinal: usize,
    pub total: usize,
    pub sparkline: Sparkline,
}

impl SpotlightView {
    pub fn of(spotlight: &Spotlight) -> Result<Self, SpotlightError> {
        let entry = spotlight.current()?;
        let (ordinal, total) = spotlight.position().ok_or(SpotlightError::EmptyCatalog)?;
        Ok(Self::for_entry(entry, ordinal, total))
    }

    pub fn for_entry(entry: &RankedEntry, ordinal: usize, total: usize) -> Self {
        let delta = entry.week_over_week_delta;
        Self {
            identifier: entry.identifier.clone(),
            focus_code: entry.focus_code.clone(),
            focus_title: entry.focus_title.clone(),
            topic_code: entry.topic_code.clone(),
            topic_title: entry.topic_title.clone(),
            score: entry.current_score,
            series: entry.series.points().to_vec(),
            delta,
            delta_label: delta_label(delta),
            trend: if delta >= 0.0 { Trend::Up } else { Trend::Down },
            ordinal,
            total,
            sparkline: sparkline(entry.series.points()),
        }
    }
}

/// `"+2.0 WoW"`, `"-3.0 WoW"`; zero counts as non-negative.
pub fn delta_label(delta: f64) -> String {
    let sign = if delta >= 0.0 { "+" } else { "" };
    format!("{sign}{delta:.1} WoW")
}

pub fn sparkline(values: &[i32]) -> Sparkline {
    if values.is_empty() {
        return Sparkline {
            points: Vec::new(),
            line_path: String::new(),
            area_path: String::new(),
        };
    }

    let max = values.iter().copied().max().unwrap_or_default();
    let min = values.iter().copied().min().unwrap_or_default();
    let range = match max - min {
        0 => 1.0,
        r => f64::from(r),
    };
    let step = if values.len() > 1 {
        SPARK_WIDTH / (values.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = i as f64 * step;
            let y = SPARK_HEIGHT - f64::from(v - min) / range * SPARK_HEIGHT;
            (x, y)
        })
        .collect();

    let line_path = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{} {} {}", if i == 0 { "M" } else { "L" }, x, y))
        .collect::<Vec<_>>()
        .join(" ");
    let area_path = format!("{line_path} L {SPARK_WIDTH} {SPARK_HEIGHT} L 0 {SPARK_HEIGHT} Z");

    Sparkline {
        points,
        line_path,
        area_path,
    }
}
