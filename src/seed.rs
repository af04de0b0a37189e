//! The built-in seeded dataset.
//!
//! Used on first run (no durable data yet), after a schema-version
//! mismatch, and by the store's full reset. Seed overrides can be supplied
//! through a TOML file, see [`crate::config::seed`].

use chrono::Utc;

use crate::models::{
    ChecklistItem, Expense, ExpenseCategory, ExpenseKind, ExpenseSource, Income, ItemCategory,
    ItemStatus, Mode, Phase, Priority, Settings, ShoppingItem, Visibility,
};
use crate::store::AppState;

/// Builds the full seeded dataset: expense categories with starter expenses,
/// a shopping list for both phases, a move-readiness checklist, one income
/// record per mode, and default settings. Scenarios and the timeline start
/// empty.
#[must_use]
pub fn initial_state() -> AppState {
    let reference_month = Utc::now().format("%Y-%m").to_string();

    AppState {
        items: seed_items(),
        expenses: seed_expenses(),
        categories: seed_categories(),
        incomes: vec![
            Income {
                id: 1,
                mode: Mode::Preparation,
                salary: 2200.0,
                benefit: 0.0,
                extras: 150.0,
                reference_month: reference_month.clone(),
            },
            Income {
                id: 2,
                mode: Mode::Living,
                salary: 2200.0,
                benefit: 350.0,
                extras: 0.0,
                reference_month,
            },
        ],
        checklist: seed_checklist(),
        scenarios: Vec::new(),
        settings: Settings::default(),
        timeline: Vec::new(),
    }
}

/// The seed expense categories with their icon glyphs.
#[must_use]
pub fn seed_categories() -> Vec<ExpenseCategory> {
    let glyphs = [
        ("Housing", "🏠"),
        ("Utilities", "💡"),
        ("Groceries", "🛒"),
        ("Transport", "🚌"),
        ("Leisure", "🎮"),
        ("Savings", "💰"),
    ];
    glyphs
        .iter()
        .enumerate()
        .map(|(idx, (name, icon))| ExpenseCategory {
            id: idx as i64 + 1,
            name: (*name).to_string(),
            icon: (*icon).to_string(),
            sort_order: idx as i32 + 1,
        })
        .collect()
}

fn seed_expenses() -> Vec<Expense> {
    struct Row(
        &'static str,
        i64,
        Option<f64>,
        Option<f64>,
        f64,
        ExpenseKind,
        ExpenseSource,
        Visibility,
    );

    let rows = [
        Row(
            "Rent",
            1,
            Some(850.0),
            Some(850.0),
            850.0,
            ExpenseKind::Fixed,
            ExpenseSource::Salary,
            Visibility::Living,
        ),
        Row(
            "Electricity",
            2,
            Some(60.0),
            Some(110.0),
            85.0,
            ExpenseKind::Variable,
            ExpenseSource::Salary,
            Visibility::Living,
        ),
        Row(
            "Internet",
            2,
            Some(45.0),
            Some(45.0),
            45.0,
            ExpenseKind::Fixed,
            ExpenseSource::Salary,
            Visibility::Living,
        ),
        Row(
            "Groceries",
            3,
            Some(250.0),
            Some(400.0),
            320.0,
            ExpenseKind::Variable,
            ExpenseSource::Benefit,
            Visibility::Both,
        ),
        Row(
            "Transit pass",
            4,
            Some(60.0),
            Some(60.0),
            60.0,
            ExpenseKind::Fixed,
            ExpenseSource::Salary,
            Visibility::Both,
        ),
        Row(
            "Streaming",
            5,
            Some(15.0),
            Some(30.0),
            25.0,
            ExpenseKind::Variable,
            ExpenseSource::Salary,
            Visibility::Both,
        ),
        Row(
            "Move fund",
            6,
            Some(400.0),
            Some(400.0),
            400.0,
            ExpenseKind::Fixed,
            ExpenseSource::Salary,
            Visibility::Preparation,
        ),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(idx, Row(name, category_id, min, max, value, kind, source, visibility))| Expense {
                id: idx as i64 + 1,
                category_id: *category_id,
                name: (*name).to_string(),
                min_price: *min,
                max_price: *max,
                current_value: *value,
                kind: *kind,
                source: *source,
                active: true,
                visibility: *visibility,
                note: None,
                sort_order: idx as i32 + 1,
            },
        )
        .collect()
}

fn seed_items() -> Vec<ShoppingItem> {
    struct Row(
        &'static str,
        ItemCategory,
        Phase,
        Priority,
        Option<f64>,
        Option<f64>,
    );

    let rows = [
        Row(
            "Bed and mattress",
            ItemCategory::Bedroom,
            Phase::PreMove,
            Priority::Essential,
            Some(500.0),
            Some(800.0),
        ),
        Row(
            "Refrigerator",
            ItemCategory::Kitchen,
            Phase::PreMove,
            Priority::Essential,
            Some(450.0),
            Some(700.0),
        ),
        Row(
            "Washing machine",
            ItemCategory::House,
            Phase::PreMove,
            Priority::High,
            Some(350.0),
            Some(550.0),
        ),
        Row(
            "Shower set",
            ItemCategory::Bathroom,
            Phase::PreMove,
            Priority::High,
            Some(40.0),
            Some(90.0),
        ),
        Row(
            "Microwave",
            ItemCategory::Kitchen,
            Phase::PostMove,
            Priority::Medium,
            Some(80.0),
            Some(150.0),
        ),
        Row(
            "Desk",
            ItemCategory::Bedroom,
            Phase::PostMove,
            Priority::Medium,
            Some(120.0),
            Some(250.0),
        ),
        Row(
            "Decor",
            ItemCategory::House,
            Phase::PostMove,
            Priority::Low,
            None,
            None,
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(idx, Row(name, category, phase, priority, min, max))| ShoppingItem {
            id: idx as i64 + 1,
            name: (*name).to_string(),
            category: *category,
            phase: *phase,
            priority: *priority,
            min_price: *min,
            max_price: *max,
            actual_price: None,
            amount_saved: 0.0,
            status: ItemStatus::Pending,
            purchase_date: None,
            note: None,
            sort_order: idx as i32 + 1,
        })
        .collect()
}

fn seed_checklist() -> Vec<ChecklistItem> {
    [
        "Set a moving budget",
        "Shortlist neighborhoods",
        "Visit apartments",
        "Sign the rental contract",
        "Arrange utility contracts",
        "Register the address change",
    ]
    .iter()
    .enumerate()
    .map(|(idx, description)| ChecklistItem {
        id: idx as i64 + 1,
        description: (*description).to_string(),
        target_date: None,
        completed: false,
        note: None,
        sort_order: idx as i32 + 1,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_one_income_record_per_mode() {
        let state = initial_state();
        assert!(state.income_for_mode(Mode::Preparation).is_some());
        assert!(state.income_for_mode(Mode::Living).is_some());
        assert_eq!(state.incomes.len(), 2);
    }

    #[test]
    fn test_seed_expense_category_references_resolve() {
        let state = initial_state();
        for expense in &state.expenses {
            assert!(
                state.categories.iter().any(|c| c.id == expense.category_id),
                "dangling category reference in seed expense {:?}",
                expense.name
            );
        }
    }

    #[test]
    fn test_seed_fixed_expenses_have_collapsed_bounds() {
        let state = initial_state();
        for expense in &state.expenses {
            if expense.kind == ExpenseKind::Fixed {
                assert_eq!(expense.min_price, expense.max_price);
            }
        }
    }

    #[test]
    fn test_seed_starts_with_empty_timeline_and_scenarios() {
        let state = initial_state();
        assert!(state.timeline.is_empty());
        assert!(state.scenarios.is_empty());
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn test_seed_items_cover_both_phases() {
        let state = initial_state();
        assert!(state.items.iter().any(|i| i.phase == Phase::PreMove));
        assert!(state.items.iter().any(|i| i.phase == Phase::PostMove));
        assert!(state.items.iter().all(|i| i.status == ItemStatus::Pending));
    }
}
