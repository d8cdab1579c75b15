use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::error::{AllocationError, Result};

/// MIGardener spacing for one crop. `row_spacing` is absent (or zero) for
/// crops broadcast without rows.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiGardenerSpacing {
    pub row_spacing: Option<f64>,
    pub plant_spacing: f64,
}

/// Per-method spacing overrides, keyed by plant id.
///
/// These are read-only inputs handed to [`SpacingRule`](crate::logic::spacing::SpacingRule);
/// the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTables {
    /// Square-Foot-Gardening cell count per plant.
    #[serde(default)]
    pub square_foot: HashMap<String, u32>,
    #[serde(default)]
    pub migardener: HashMap<String, MiGardenerSpacing>,
    /// On-center spacing in inches for hexagonal packing.
    #[serde(default)]
    pub intensive: HashMap<String, f64>,
}

impl Default for SpacingTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpacingTables {
    pub fn empty() -> Self {
        Self {
            square_foot: HashMap::new(),
            migardener: HashMap::new(),
            intensive: HashMap::new(),
        }
    }

    /// Tables for common crops.
    pub fn builtin() -> Self {
        let square_foot = [
            ("tomato", 1),
            ("pepper", 1),
            ("eggplant", 1),
            ("broccoli", 1),
            ("cabbage", 1),
            ("cauliflower", 1),
            ("kale", 1),
            ("lettuce", 1),
            ("spinach", 1),
            ("beet", 1),
            ("carrot", 1),
            ("radish", 1),
            ("onion", 1),
            ("garlic", 1),
            ("bean-bush", 1),
            ("pea", 1),
            ("basil", 1),
            ("parsley", 1),
            ("cucumber", 2),
            ("zucchini", 4),
            ("winter-squash", 4),
            ("pumpkin", 9),
            ("watermelon", 4),
        ];
        let migardener = [
            ("lettuce", None, 4.0),
            ("arugula", None, 2.0),
            ("spinach", None, 3.0),
            ("radish", None, 2.0),
            ("carrot", Some(4.0), 1.5),
            ("beet", Some(12.0), 4.0),
            ("onion", Some(4.0), 4.0),
            ("garlic", Some(6.0), 4.0),
            ("pea", Some(4.0), 2.0),
            ("bean-bush", Some(18.0), 4.0),
            ("tomato", Some(36.0), 24.0),
            ("pepper", Some(24.0), 12.0),
            ("kale", Some(18.0), 12.0),
        ];
        let intensive = [
            ("tomato", 18.0),
            ("pepper", 12.0),
            ("eggplant", 18.0),
            ("broccoli", 15.0),
            ("cabbage", 15.0),
            ("kale", 15.0),
            ("lettuce", 8.0),
            ("spinach", 6.0),
            ("carrot", 3.0),
            ("beet", 4.0),
            ("onion", 4.0),
            ("garlic", 4.0),
            ("basil", 10.0),
            ("cucumber", 12.0),
            ("zucchini", 24.0),
        ];

        Self {
            square_foot: square_foot
                .into_iter()
                .map(|(id, cells)| (id.to_string(), cells))
                .collect(),
            migardener: migardener
                .into_iter()
                .map(|(id, row_spacing, plant_spacing)| {
                    (
                        id.to_string(),
                        MiGardenerSpacing {
                            row_spacing,
                            plant_spacing,
                        },
                    )
                })
                .collect(),
            intensive: intensive
                .into_iter()
                .map(|(id, on_center)| (id.to_string(), on_center))
                .collect(),
        }
    }

    /// Parses and validates tables from JSON. Tables missing from the
    /// document are empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Rejects entries that cannot describe a real planting: zero cell
    /// counts and non-positive or non-finite spacings.
    pub fn validate(&self) -> Result<()> {
        if let Some((id, _)) = self.square_foot.iter().find(|(_, cells)| **cells == 0) {
            return Err(AllocationError::InvalidConfig(format!(
                "square-foot cell count for '{id}' must be at least 1"
            )));
        }
        for (id, spacing) in &self.migardener {
            if !is_positive(spacing.plant_spacing) {
                return Err(AllocationError::InvalidConfig(format!(
                    "migardener plant spacing for '{id}' must be positive"
                )));
            }
            if let Some(row) = spacing.row_spacing {
                // Zero is allowed and means "no rows".
                if !row.is_finite() || row < 0.0 {
                    return Err(AllocationError::InvalidConfig(format!(
                        "migardener row spacing for '{id}' must not be negative"
                    )));
                }
            }
        }
        if let Some((id, _)) = self.intensive.iter().find(|(_, s)| !is_positive(**s)) {
            return Err(AllocationError::InvalidConfig(format!(
                "intensive on-center spacing for '{id}' must be positive"
            )));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
