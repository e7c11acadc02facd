//! Frontend Models
//!
//! Data structures matching the `/foods` REST resource.

use serde::{Deserialize, Serialize};

/// Food item as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Decimal amount kept as text, exactly as the backend sends it
    pub price: String,
    pub available: bool,
    pub image: String,
}

impl Food {
    /// Copy of this record with every present field of `edits` applied on top
    pub fn merged_with(&self, edits: &FoodEdits) -> Food {
        let mut merged = self.clone();
        if let Some(name) = &edits.name {
            merged.name = name.clone();
        }
        if let Some(description) = &edits.description {
            merged.description = description.clone();
        }
        if let Some(price) = &edits.price {
            merged.price = price.clone();
        }
        if let Some(available) = edits.available {
            merged.available = available;
        }
        if let Some(image) = &edits.image {
            merged.image = image.clone();
        }
        merged
    }
}

/// Fields collected by the add modal (no id, no availability)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// POST body: the submitted fields with `available` forced on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFood {
    #[serde(flatten)]
    pub food: NewFood,
    pub available: bool,
}

impl From<NewFood> for CreateFood {
    fn from(food: NewFood) -> Self {
        Self { food, available: true }
    }
}

/// Partial edits collected by the edit modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEdits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
pub(crate) fn make_food(id: u32, name: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: "19.90".to_string(),
        available: true,
        image: format!("https://img.example/{}.png", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_forces_available() {
        let body = CreateFood::from(NewFood {
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: "19.90".to_string(),
            image: "http://img/1.png".to_string(),
        });

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ao molho",
                "description": "Macarrão ao molho branco",
                "price": "19.90",
                "image": "http://img/1.png",
                "available": true,
            })
        );
    }

    #[test]
    fn test_merge_overrides_only_present_fields() {
        let food = make_food(3, "Veggie");
        let edits = FoodEdits {
            price: Some("9.90".to_string()),
            ..Default::default()
        };

        let merged = food.merged_with(&edits);
        assert_eq!(merged.price, "9.90");
        assert_eq!(merged.id, 3);
        assert_eq!(merged.name, food.name);
        assert_eq!(merged.image, food.image);
        assert!(merged.available);
    }

    #[test]
    fn test_edits_skip_missing_fields() {
        let edits = FoodEdits {
            name: Some("A la Camarón".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&edits).unwrap(), json!({ "name": "A la Camarón" }));
    }

    #[test]
    fn test_food_from_backend_json() {
        let food: Food = serde_json::from_value(json!({
            "id": 1,
            "name": "Ao molho",
            "description": "Macarrão",
            "price": "19.90",
            "available": false,
            "image": "http://img/1.png",
        }))
        .unwrap();

        assert_eq!(food.id, 1);
        assert_eq!(food.price, "19.90");
        assert!(!food.available);
    }
}
