use chrono::NaiveDate;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Days of history in the tracker dashboard.
pub const TREND_DAYS: i64 = 30;

const WATER_SAMPLE_MIN: u32 = 4;
const WATER_SAMPLE_MAX: u32 = 10;
const PAIN_SAMPLE_MAX: u32 = 7;
const RISK_JITTER: i32 = 5;
const RISK_TREND_MIN: i32 = 10;
const RISK_TREND_MAX: i32 = 90;

/// Horizontal guide lines drawn over the trend charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReferenceLines {
    pub hydration_target_glasses: u32,
    pub pain_concern_level: u32,
    pub risk_low_percent: u8,
    pub risk_medium_percent: u8,
    pub risk_high_percent: u8,
}

impl Default for TrendReferenceLines {
    fn default() -> Self {
        Self {
            hydration_target_glasses: 8,
            pain_concern_level: 3,
            risk_low_percent: 30,
            risk_medium_percent: 50,
            risk_high_percent: 70,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub water_glasses: u32,
    pub pain_level: u32,
    pub risk_percent: u8,
}

/// Simulated 30-day tracker history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTrends {
    pub points: Vec<TrendPoint>,
    pub reference_lines: TrendReferenceLines,
}

/// Mock daily history ending at `end_date`. The risk series wanders
/// within ±5 of `recurrence_risk_percent`, clamped to 10..=90.
pub fn health_trends(
    rng: &mut dyn RngCore,
    recurrence_risk_percent: u8,
    end_date: NaiveDate,
) -> HealthTrends {
    let base_risk = i32::from(recurrence_risk_percent);

    let points = (0..TREND_DAYS)
        .map(|offset| {
            let date = end_date - chrono::Duration::days(TREND_DAYS - 1 - offset);
            let water_glasses = rng.gen_range(WATER_SAMPLE_MIN..=WATER_SAMPLE_MAX);
            let pain_level = rng.gen_range(0..=PAIN_SAMPLE_MAX);
            let risk = (base_risk + rng.gen_range(-RISK_JITTER..=RISK_JITTER))
                .clamp(RISK_TREND_MIN, RISK_TREND_MAX);
            TrendPoint {
                date,
                water_glasses,
                pain_level,
                risk_percent: risk as u8,
            }
        })
        .collect();

    HealthTrends {
        points,
        reference_lines: TrendReferenceLines::default(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn thirty_consecutive_days_ending_today() {
        let mut rng = StdRng::seed_from_u64(1);
        let trends = health_trends(&mut rng, 45, end());

        assert_eq!(trends.points.len(), 30);
        assert_eq!(trends.points.last().unwrap().date, end());
        assert_eq!(
            trends.points[0].date,
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
        );
        for pair in trends.points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
        }
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for risk in [30u8, 45, 60, 75, 90] {
            let trends = health_trends(&mut rng, risk, end());
            for point in &trends.points {
                assert!((4..=10).contains(&point.water_glasses));
                assert!(point.pain_level <= 7);
                assert!((10..=90).contains(&point.risk_percent));
                assert!(
                    (i32::from(point.risk_percent) - i32::from(risk)).abs() <= 5,
                    "{} drifted from {risk}",
                    point.risk_percent
                );
            }
        }
    }

    #[test]
    fn max_risk_never_exceeds_ninety() {
        let mut rng = StdRng::seed_from_u64(8);
        let trends = health_trends(&mut rng, 90, end());
        assert!(trends.points.iter().all(|p| p.risk_percent <= 90));
    }

    #[test]
    fn reference_lines_match_dashboard() {
        let lines = TrendReferenceLines::default();
        assert_eq!(lines.hydration_target_glasses, 8);
        assert_eq!(lines.pain_concern_level, 3);
        assert_eq!(
            (lines.risk_low_percent, lines.risk_medium_percent, lines.risk_high_percent),
            (30, 50, 70)
        );
    }
}
