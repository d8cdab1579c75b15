use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::plant::{Plant, PlantCategory};

/// Default growing season used to size a succession plan.
pub const DEFAULT_SEASON_LENGTH_DAYS: u32 = 120;

const MIN_SUCCESSIONS: u32 = 2;
const MAX_SUCCESSIONS: u32 = 10;

const FAST_GREENS: [&str; 5] = ["lettuce", "arugula", "spinach", "mesclun", "microgreen"];
const CUT_AND_COME_AGAIN_HERBS: [&str; 4] = ["basil", "cilantro", "dill", "parsley"];

/// Suggested spacing between successive sowings of one crop, in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSuggestion {
    pub min: u32,
    pub max: u32,
    /// `None` when succession planting is not worth it for this crop.
    pub recommended: Option<u32>,
    pub reasoning: String,
}

impl IntervalSuggestion {
    fn range(min: u32, max: u32, recommended: u32, reasoning: impl Into<String>) -> Self {
        Self {
            min,
            max,
            recommended: Some(recommended),
            reasoning: reasoning.into(),
        }
    }

    fn not_recommended(reasoning: impl Into<String>) -> Self {
        Self {
            min: 0,
            max: 0,
            recommended: None,
            reasoning: reasoning.into(),
        }
    }
}

fn name_matches(plant: &Plant, family: &[&str]) -> bool {
    let id = plant.id.to_lowercase();
    let name = plant.name.to_lowercase();
    family.iter().any(|f| id.contains(f) || name.contains(f))
}

/// Succession interval for `plant`. The first matching rule wins:
/// fast greens, cut-and-come-again herbs, then days-to-maturity buckets.
pub fn suggest_interval(plant: &Plant) -> IntervalSuggestion {
    if name_matches(plant, &FAST_GREENS) {
        return IntervalSuggestion::range(
            10,
            14,
            10,
            format!("{} is a fast green: sow every 10-14 days for a steady harvest", plant.name),
        );
    }
    if plant.category == PlantCategory::Herb && name_matches(plant, &CUT_AND_COME_AGAIN_HERBS) {
        return IntervalSuggestion::range(
            14,
            21,
            14,
            format!("{} is a cut-and-come-again herb: resow every 14-21 days", plant.name),
        );
    }

    let dtm = match plant.days_to_maturity {
        Some(dtm) if dtm > 0 => dtm,
        _ => {
            return IntervalSuggestion::not_recommended(format!(
                "{} has no days-to-maturity, succession cannot be planned",
                plant.name
            ))
        }
    };

    match dtm {
        0..=49 => {
            let min = (dtm * 2 / 5).max(7);
            let max = dtm.div_ceil(2).max(min);
            let recommended = (min + max).div_ceil(2);
            IntervalSuggestion::range(
                min,
                max,
                recommended,
                format!("Quick crop ({dtm} days): sow every {min}-{max} days"),
            )
        }
        50..=79 => IntervalSuggestion::range(
            14,
            21,
            14,
            format!("Mid-season crop ({dtm} days): sow every 14-21 days"),
        ),
        80..=119 => IntervalSuggestion::range(
            21,
            28,
            21,
            format!("Long-season crop ({dtm} days): sow every 21-28 days"),
        ),
        120..=199 => IntervalSuggestion::range(
            30,
            45,
            30,
            format!("Slow crop ({dtm} days): at most a second sowing 30-45 days later"),
        ),
        _ => IntervalSuggestion::not_recommended(format!(
            "{} takes {dtm} days to mature, plant once per season",
            plant.name
        )),
    }
}

/// How many sowings fit a season at `interval_days` apart, clamped to 2..=10.
pub fn suggested_count(interval_days: u32, season_length_days: u32) -> u32 {
    if interval_days == 0 {
        return MIN_SUCCESSIONS;
    }
    (season_length_days / interval_days).clamp(MIN_SUCCESSIONS, MAX_SUCCESSIONS)
}

/// `count` sowing dates starting at `first_sowing`, `interval_days` apart.
/// Dates past the end of the calendar are dropped.
pub fn succession_dates(first_sowing: NaiveDate, interval_days: u32, count: u32) -> Vec<NaiveDate> {
    if count == 0 {
        return Vec::new();
    }
    if interval_days == 0 {
        return vec![first_sowing];
    }
    (0..count)
        .map_while(|i| first_sowing.checked_add_days(Days::new(u64::from(i) * u64::from(interval_days))))
        .collect()
}

/// A complete succession plan for one crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessionPlan {
    pub interval: IntervalSuggestion,
    pub count: u32,
    pub sowing_dates: Vec<NaiveDate>,
}

/// Interval, sowing count and dates for `plant` over a season, or `None`
/// when succession planting is not recommended.
pub fn plan_successions(
    plant: &Plant,
    first_sowing: NaiveDate,
    season_length_days: u32,
) -> Option<SuccessionPlan> {
    let interval = suggest_interval(plant);
    let every = interval.recommended?;
    let count = suggested_count(every, season_length_days);
    Some(SuccessionPlan {
        sowing_dates: succession_dates(first_sowing, every, count),
        count,
        interval,
    })
}
