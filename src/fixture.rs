//! Demo-data fixture loader.
//!
//! Seeds the store with sample content the first time the application runs
//! and finds no ledger document. Kept apart from the services on purpose:
//! nothing in the core layer knows this data exists.

use chrono::NaiveDate;

use tally_domain::{
    Budget, GoalPriority, InvestmentEntry, Ledger, SavingsGoal, Transaction, TransactionKind,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn txn(
    id: u64,
    kind: TransactionKind,
    amount: f64,
    category: &str,
    description: &str,
    date: NaiveDate,
    payment_method: &str,
    recurring: bool,
    tags: &[&str],
) -> Transaction {
    Transaction {
        id,
        kind,
        amount,
        category: category.into(),
        description: description.into(),
        date,
        payment_method: payment_method.into(),
        recurring,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Builds the demonstration ledger: ten transactions, four budgets, three
/// savings goals, and one investment entry.
pub fn demo_ledger() -> Ledger {
    use TransactionKind::{Expense, Income};

    let mut ledger = Ledger::new();

    ledger.transactions = vec![
        txn(
            1,
            Income,
            25000.00,
            "Salary",
            "Monthly internship stipend",
            day(2025, 11, 1),
            "Bank Transfer",
            true,
            &["work", "monthly"],
        ),
        txn(
            2,
            Expense,
            3500.00,
            "Education",
            "Online course subscription - Python & ML",
            day(2025, 11, 2),
            "Credit Card",
            false,
            &["learning", "investment"],
        ),
        txn(
            3,
            Expense,
            1200.00,
            "Food",
            "Groceries for the month",
            day(2025, 11, 5),
            "Cash",
            false,
            &["groceries", "essential"],
        ),
        txn(
            4,
            Expense,
            500.00,
            "Transport",
            "Auto rickshaw and local bus fares",
            day(2025, 11, 8),
            "Cash",
            false,
            &["commute"],
        ),
        txn(
            5,
            Expense,
            800.00,
            "Entertainment",
            "Movie tickets and dinner with friends",
            day(2025, 11, 10),
            "UPI",
            false,
            &["social", "weekend"],
        ),
        txn(
            6,
            Income,
            5000.00,
            "Freelance",
            "Web development project payment",
            day(2025, 11, 12),
            "Bank Transfer",
            false,
            &["freelance", "side-hustle"],
        ),
        txn(
            7,
            Expense,
            2500.00,
            "Shopping",
            "New laptop accessories and books",
            day(2025, 11, 15),
            "Debit Card",
            false,
            &["tech", "books"],
        ),
        txn(
            8,
            Expense,
            1800.00,
            "Bills",
            "Mobile recharge and internet bill",
            day(2025, 11, 18),
            "UPI",
            true,
            &["utility", "monthly"],
        ),
        txn(
            9,
            Expense,
            600.00,
            "Food",
            "Restaurant dining - birthday celebration",
            day(2025, 11, 20),
            "Credit Card",
            false,
            &["dining", "celebration"],
        ),
        txn(
            10,
            Expense,
            350.00,
            "Transport",
            "Weekly fuel for bike",
            day(2025, 11, 21),
            "Cash",
            false,
            &["fuel", "vehicle"],
        ),
    ];

    ledger.budgets = vec![
        Budget::new("Food", 5000.00, 80),
        Budget::new("Transport", 2000.00, 80),
        Budget::new("Entertainment", 3000.00, 75),
        Budget::new("Shopping", 5000.00, 80),
    ];

    ledger.savings_goals = vec![
        seeded_goal(1, "Emergency Fund", 50000.00, 15000.00, day(2026, 3, 31), GoalPriority::High),
        seeded_goal(2, "Laptop Upgrade", 80000.00, 25000.00, day(2026, 6, 30), GoalPriority::Medium),
        seeded_goal(3, "Vacation Trip", 30000.00, 8000.00, day(2026, 1, 15), GoalPriority::Low),
    ];

    ledger.investment_tracker = vec![InvestmentEntry {
        id: 1,
        name: "Mutual Fund SIP".into(),
        kind: "Mutual Fund".into(),
        amount_invested: 10000.00,
        current_value: 10500.00,
        start_date: day(2025, 8, 1),
        monthly_contribution: 2000.00,
    }];

    ledger
}

fn seeded_goal(
    id: u64,
    name: &str,
    target: f64,
    saved: f64,
    deadline: NaiveDate,
    priority: GoalPriority,
) -> SavingsGoal {
    let mut goal = SavingsGoal::new(id, name, target, deadline, priority);
    goal.current_amount = saved;
    goal
}
