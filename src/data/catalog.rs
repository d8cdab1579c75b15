use std::collections::HashMap;

use crate::models::plant::{Plant, PlantCategory};

/// Read access to the external plant catalog.
pub trait PlantCatalog {
    fn plant(&self, id: &str) -> Option<Plant>;
}

/// Catalog backed by a plain list of plant records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    plants: HashMap<String, Plant>,
}

impl InMemoryCatalog {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self {
            plants: plants.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// A handful of common crops, matching the built-in override tables.
    pub fn builtin() -> Self {
        use PlantCategory::*;
        let rows: [(&str, &str, f64, Option<f64>, u32, PlantCategory); 14] = [
            ("tomato", "Tomato", 24.0, Some(36.0), 75, Vegetable),
            ("pepper", "Pepper", 18.0, Some(24.0), 70, Vegetable),
            ("lettuce", "Lettuce", 8.0, None, 45, Vegetable),
            ("arugula", "Arugula", 4.0, None, 40, Vegetable),
            ("spinach", "Spinach", 6.0, None, 40, Vegetable),
            ("radish", "Radish", 2.0, None, 25, Vegetable),
            ("carrot", "Carrot", 3.0, Some(12.0), 70, Vegetable),
            ("beet", "Beet", 4.0, Some(12.0), 55, Vegetable),
            ("bean-bush", "Bush Bean", 6.0, Some(18.0), 55, Vegetable),
            ("zucchini", "Zucchini", 36.0, Some(48.0), 50, Vegetable),
            ("winter-squash", "Winter Squash", 48.0, Some(72.0), 100, Vegetable),
            ("basil", "Basil", 12.0, None, 60, Herb),
            ("garlic", "Garlic", 6.0, Some(12.0), 240, Vegetable),
            ("strawberry", "Strawberry", 12.0, Some(36.0), 120, Fruit),
        ];
        Self::new(
            rows.into_iter()
                .map(|(id, name, spacing, row_spacing, dtm, category)| Plant {
                    id: id.into(),
                    name: name.into(),
                    spacing,
                    row_spacing,
                    days_to_maturity: Some(dtm),
                    category,
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl PlantCatalog for InMemoryCatalog {
    fn plant(&self, id: &str) -> Option<Plant> {
        self.plants.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = InMemoryCatalog::builtin();
        let tomato = catalog.plant("tomato").expect("tomato must be in the catalog");
        assert_eq!(tomato.name, "Tomato");
        assert_eq!(tomato.category, PlantCategory::Vegetable);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(InMemoryCatalog::builtin().plant("dragon-fruit").is_none());
    }

    #[test]
    fn test_later_duplicate_replaces_earlier() {
        let base = InMemoryCatalog::builtin().plant("basil").unwrap();
        let catalog = InMemoryCatalog::new(vec![
            base.clone(),
            Plant {
                spacing: 6.0,
                ..base
            },
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.plant("basil").map(|p| p.spacing), Some(6.0));
    }
}
