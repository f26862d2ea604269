//! Static investment records carried through the document untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, NamedEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A raw investment entry. Persisted and displayed as-is; no logic operates
/// on these records.
pub struct InvestmentEntry {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount_invested: f64,
    pub current_value: f64,
    pub start_date: NaiveDate,
    pub monthly_contribution: f64,
}

impl Identifiable for InvestmentEntry {
    fn id(&self) -> u64 {
        self.id
    }
}

impl NamedEntity for InvestmentEntry {
    fn name(&self) -> &str {
        &self.name
    }
}
