//! Room View Type Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Surcharge type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurchargeType {
    FixedAmount,
    Percentage,
}

/// Surcharge rule applied to the nightly price of rooms with this view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub surcharge_type: SurchargeType,
    /// Surcharge value (percentage: 15 = 15%, fixed: 10.00 = 10 per night)
    pub value: Decimal,
}

impl Surcharge {
    pub fn fixed(value: Decimal) -> Self {
        Self {
            surcharge_type: SurchargeType::FixedAmount,
            value,
        }
    }

    pub fn percentage(value: Decimal) -> Self {
        Self {
            surcharge_type: SurchargeType::Percentage,
            value,
        }
    }

    /// Zero surcharge
    pub fn none() -> Self {
        Self::fixed(Decimal::ZERO)
    }

    /// Amount added on top of `base`
    pub fn amount_for(&self, base: Decimal) -> Decimal {
        match self.surcharge_type {
            SurchargeType::FixedAmount => self.value,
            SurchargeType::Percentage => (base * self.value / Decimal::ONE_HUNDRED).round_dp(2),
        }
    }

    /// `base` with the surcharge applied
    pub fn apply_to(&self, base: Decimal) -> Decimal {
        base + self.amount_for(base)
    }
}

impl Default for Surcharge {
    fn default() -> Self {
        Self::none()
    }
}

/// Room view type entity (sea view, city view...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomViewType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub surcharge: Surcharge,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create view type payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomViewTypeCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub surcharge: Surcharge,
}

/// Update view type payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomViewTypeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub surcharge: Option<Surcharge>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_surcharge() {
        let s = Surcharge::fixed(Decimal::new(10, 0));
        assert_eq!(s.apply_to(Decimal::new(100, 0)), Decimal::new(110, 0));
        assert_eq!(s.amount_for(Decimal::ZERO), Decimal::new(10, 0));
    }

    #[test]
    fn test_percentage_surcharge_rounds_to_cents() {
        let s = Surcharge::percentage(Decimal::new(15, 0));
        // 15% of 99.99 = 14.9985 -> 15.00
        assert_eq!(s.amount_for(Decimal::new(9999, 2)), Decimal::new(1500, 2));
        assert_eq!(s.apply_to(Decimal::new(200, 0)), Decimal::new(230, 0));
    }

    #[test]
    fn test_default_is_no_surcharge() {
        let base = Decimal::new(8050, 2);
        assert_eq!(Surcharge::default().apply_to(base), base);
    }
}
