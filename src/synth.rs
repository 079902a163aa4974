//! # Score Synthesizer
//! Baseline score and 8-week series for one identifier, derived only from the
//! identifier's seed. Calling these in any order, any number of times, yields
//! the same values.
//!
//! Scaling (kept as-is for reproducibility):
//! - baseline: `70 + floor(v * 30)`
//! - trend:    `(v - 0.5) * 10`, spread linearly over the 8 points
//! - variance: `(v - 0.5) * 8` per point

use serde::{Deserialize, Serialize};

use crate::error::SpotlightError;
use crate::hasher::seed_for;
use crate::stream::SeededStream;

pub const SERIES_LEN: usize = 8;

const BASELINE_FLOOR: i32 = 70;
const BASELINE_SPAN: f64 = 30.0;
const TREND_SPAN: f64 = 10.0;
const VARIANCE_SPAN: f64 = 8.0;

/// Eight weekly observations in `[0, 100]`, oldest first; the last is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSeries(pub [i32; SERIES_LEN]);

impl ScoreSeries {
    pub fn current(&self) -> i32 {
        self.0[SERIES_LEN - 1]
    }

    pub fn previous(&self) -> i32 {
        self.0[SERIES_LEN - 2]
    }

    /// Momentum: last point minus the prior week.
    pub fn week_over_week_delta(&self) -> f64 {
        f64::from(self.current() - self.previous())
    }

    pub fn points(&self) -> &[i32] {
        &self.0
    }
}

/// Baseline score in `[70, 100)`, from the first draw of a fresh stream.
pub fn baseline_score(identifier: &str) -> Result<i32, SpotlightError> {
    let mut stream = SeededStream::new(seed_for(identifier)?);
    Ok(baseline_from(&mut stream))
}

fn baseline_from(stream: &mut SeededStream) -> i32 {
    BASELINE_FLOOR + (stream.next_value() * BASELINE_SPAN).floor() as i32
}

/// Eight-point series for `identifier`.
///
/// The baseline comes from its own stream; the series stream is a second
/// stream with the same seed whose first draw is the trend.
pub fn series(identifier: &str) -> Result<ScoreSeries, SpotlightError> {
    let seed = seed_for(identifier)?;
    let baseline = f64::from(baseline_from(&mut SeededStream::new(seed)));

    let mut stream = SeededStream::new(seed);
    let trend = (stream.next_value() - 0.5) * TREND_SPAN;

    let mut points = [0i32; SERIES_LEN];
    for (i, point) in points.iter_mut().enumerate() {
        let variance = (stream.next_value() - 0.5) * VARIANCE_SPAN;
        let raw = baseline + trend * i as f64 / (SERIES_LEN - 1) as f64 + variance;
        *point = raw.clamp(0.0, 100.0).round() as i32;
    }
    Ok(ScoreSeries(points))
}

/// `series[7] - series[6]`.
pub fn week_over_week_delta(series: &ScoreSeries) -> f64 {
    series.week_over_week_delta()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_f1_t1() {
        assert_eq!(baseline_score("F1.T1").unwrap(), 84);
        assert_eq!(
            series("F1.T1").unwrap(),
            ScoreSeries([84, 81, 85, 86, 80, 85, 82, 82])
        );
    }

    #[test]
    fn golden_f3_t7() {
        let s = series("F3.T7").unwrap();
        assert_eq!(s, ScoreSeries([85, 86, 86, 87, 86, 91, 92, 90]));
        assert_eq!(s.current(), 90);
        assert_eq!(week_over_week_delta(&s), -2.0);
    }

    #[test]
    fn order_of_calls_does_not_matter() {
        let s1 = series("F7.T4").unwrap();
        let b1 = baseline_score("F7.T4").unwrap();
        let s2 = series("F7.T4").unwrap();
        let b2 = baseline_score("F7.T4").unwrap();
        assert_eq!(s1, s2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn invalid_identifier_propagates() {
        assert!(series("").is_err());
        assert!(baseline_score("nope").is_err());
    }
}
