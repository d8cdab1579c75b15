use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantCategory {
    Vegetable,
    Herb,
    Fruit,
    Flower,
    CoverCrop,
}

/// Plant reference record, owned by the external plant catalog.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// On-center spacing in inches.
    pub spacing: f64,
    /// Row spacing in inches. Absent for crops grown without rows.
    pub row_spacing: Option<f64>,
    pub days_to_maturity: Option<u32>,
    pub category: PlantCategory,
}
