//! Meal Plan Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Meal plan entity (RO, BB, HB, FB...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    /// Short board code referenced by rooms
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_per_person: Decimal,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create meal plan payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanCreate {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_per_person: Decimal,
}

/// Update meal plan payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_person: Option<Decimal>,
    pub is_active: Option<bool>,
}
