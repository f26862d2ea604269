//! Savings goal creation, deposits, and progress projections.

use chrono::NaiveDate;

use tally_domain::{GoalPriority, Ledger, SavingsGoal};

use crate::{transaction_service::round_cents, CoreError};

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a deposit into an active goal.
pub struct GoalDeposit {
    pub goal_id: u64,
    pub name: String,
    pub amount: f64,
    pub completed: bool,
    pub progress_percent: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// Projection of one active goal against its deadline.
pub struct GoalProgress {
    pub id: u64,
    pub name: String,
    pub priority: GoalPriority,
    pub target_amount: f64,
    pub current_amount: f64,
    pub progress_percent: f64,
    pub remaining: f64,
    pub deadline: NaiveDate,
    /// Negative when the deadline has passed.
    pub days_left: i64,
    pub required_monthly: f64,
}

/// Stateless savings-goal operations over [`Ledger`] snapshots.
pub struct GoalService;

impl GoalService {
    /// Appends a new active goal with the next sequential id.
    pub fn add(
        ledger: &mut Ledger,
        name: impl Into<String>,
        target_amount: f64,
        deadline: NaiveDate,
        priority: GoalPriority,
    ) -> Result<u64, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation("goal name must not be empty".into()));
        }
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(CoreError::Validation(
                "target amount must be a positive number".into(),
            ));
        }
        let id = ledger.next_goal_id();
        ledger
            .savings_goals
            .push(SavingsGoal::new(id, name, target_amount, deadline, priority));
        Ok(id)
    }

    /// Deposits into an active goal, completing it when the target is
    /// reached. Missing or already-completed goals report `GoalNotFound`; the
    /// caller treats that as a no-op, not a fault.
    pub fn deposit(ledger: &mut Ledger, goal_id: u64, amount: f64) -> Result<GoalDeposit, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(
                "deposit amount must be a positive number".into(),
            ));
        }
        let goal = ledger
            .goal_mut(goal_id)
            .filter(|g| g.is_active())
            .ok_or(CoreError::GoalNotFound(goal_id))?;
        let completed = goal.record_deposit(round_cents(amount));
        Ok(GoalDeposit {
            goal_id,
            name: goal.name.clone(),
            amount,
            completed,
            progress_percent: goal.progress_percent(),
            remaining: goal.remaining().max(0.0),
        })
    }

    /// Projections for every active goal, in registration order.
    pub fn progress(ledger: &Ledger, today: NaiveDate) -> Vec<GoalProgress> {
        ledger
            .active_goals()
            .map(|goal| {
                let days_left = (goal.deadline - today).num_days();
                GoalProgress {
                    id: goal.id,
                    name: goal.name.clone(),
                    priority: goal.priority,
                    target_amount: goal.target_amount,
                    current_amount: goal.current_amount,
                    progress_percent: goal.progress_percent(),
                    remaining: goal.remaining(),
                    deadline: goal.deadline,
                    days_left,
                    required_monthly: required_monthly(goal.remaining(), days_left),
                }
            })
            .collect()
    }
}

/// Remaining amount spread over the months until the deadline, clamped to at
/// least one month so overdue goals still get a finite figure.
pub(crate) fn required_monthly(remaining: f64, days_left: i64) -> f64 {
    let months_left = (days_left as f64 / 30.0).max(1.0);
    remaining / months_left
}
