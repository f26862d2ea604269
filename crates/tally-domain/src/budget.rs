//! Domain model for per-category monthly spending caps.

use serde::{Deserialize, Serialize};

use crate::common::NamedEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A monthly spending cap for one category. The category is the unique key.
pub struct Budget {
    pub category: String,
    pub monthly_limit: f64,
    pub alert_threshold: u8,
    #[serde(default = "Budget::default_active")]
    pub active: bool,
}

impl Budget {
    pub const DEFAULT_ALERT_THRESHOLD: u8 = 80;

    pub fn new(category: impl Into<String>, monthly_limit: f64, alert_threshold: u8) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
            alert_threshold,
            active: true,
        }
    }

    pub fn default_active() -> bool {
        true
    }

    /// Percentage of the limit consumed by `spent`. Zero-limit budgets report 0.
    pub fn percentage_used(&self, spent: f64) -> f64 {
        if self.monthly_limit > 0.0 {
            spent / self.monthly_limit * 100.0
        } else {
            0.0
        }
    }

    pub fn remaining(&self, spent: f64) -> f64 {
        self.monthly_limit - spent
    }
}

impl NamedEntity for Budget {
    fn name(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_used_is_spend_over_limit() {
        let budget = Budget::new("Food", 5000.0, 80);
        assert_eq!(budget.percentage_used(4600.0), 92.0);
        assert_eq!(budget.remaining(4600.0), 400.0);
    }

    #[test]
    fn zero_limit_budgets_report_zero_usage() {
        let budget = Budget::new("Misc", 0.0, 80);
        assert_eq!(budget.percentage_used(123.0), 0.0);
    }

    #[test]
    fn missing_active_flag_defaults_to_true() {
        let json = r#"{"category": "Food", "monthly_limit": 5000.0, "alert_threshold": 80}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert!(budget.active);
    }
}
