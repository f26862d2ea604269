//! Domain model for savings goals and their lifecycle.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Displayable, Identifiable, NamedEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A target amount with a deadline, funded by incremental deposits.
pub struct SavingsGoal {
    pub id: u64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub priority: GoalPriority,
    pub status: GoalStatus,
}

impl SavingsGoal {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        target_amount: f64,
        deadline: NaiveDate,
        priority: GoalPriority,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            deadline,
            priority,
            status: GoalStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_amount
    }

    /// Percentage of the target already saved. Zero-target goals report 0.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount * 100.0
        } else {
            0.0
        }
    }

    /// Adds a deposit and flips the goal to completed once the target is
    /// reached. Completion is permanent; callers must not deposit into a
    /// completed goal. Returns `true` when this deposit completed the goal.
    pub fn record_deposit(&mut self, amount: f64) -> bool {
        self.current_amount += amount;
        if self.current_amount >= self.target_amount {
            self.status = GoalStatus::Completed;
            true
        } else {
            false
        }
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> u64 {
        self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for SavingsGoal {
    fn display_label(&self) -> String {
        format!("goal:{} {} [{}]", self.id, self.name, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Relative importance of a goal, used only for display ordering cues.
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    /// Parses a user-supplied priority label, ignoring case and whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(GoalPriority::High),
            "medium" => Some(GoalPriority::Medium),
            "low" => Some(GoalPriority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalPriority::High => "high",
            GoalPriority::Medium => "medium",
            GoalPriority::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Lifecycle state of a goal. Completed goals are never reopened.
pub enum GoalStatus {
    Active,
    Completed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: f64) -> SavingsGoal {
        SavingsGoal::new(
            1,
            "Emergency Fund",
            target,
            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            GoalPriority::High,
        )
    }

    #[test]
    fn completes_exactly_when_target_reached() {
        let mut goal = goal(1000.0);
        assert!(!goal.record_deposit(999.99));
        assert_eq!(goal.status, GoalStatus::Active);
        assert!(goal.record_deposit(0.01));
        assert_eq!(goal.status, GoalStatus::Completed);
    }

    #[test]
    fn progress_tracks_current_over_target() {
        let mut goal = goal(50000.0);
        goal.record_deposit(15000.0);
        assert_eq!(goal.progress_percent(), 30.0);
        assert_eq!(goal.remaining(), 35000.0);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!(GoalPriority::parse(" HIGH "), Some(GoalPriority::High));
        assert_eq!(GoalPriority::parse("medium"), Some(GoalPriority::Medium));
        assert_eq!(GoalPriority::parse("urgent"), None);
    }

    #[test]
    fn priority_and_status_serialize_lowercase() {
        let json = serde_json::to_value(goal(100.0)).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["status"], "active");
    }
}
