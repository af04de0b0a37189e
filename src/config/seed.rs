//! Seed-override loading from a TOML file.
//!
//! The built-in seed in [`crate::seed`] covers first runs out of the box;
//! a seed file lets the user start from their own expense categories and
//! monthly costs instead. The rest of the dataset (shopping list,
//! checklist, income records) keeps the built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::errors::{Error, Result};
use crate::models::{Expense, ExpenseCategory, ExpenseKind, ExpenseSource, Visibility};
use crate::seed;
use crate::store::AppState;

/// Configuration structure representing the entire seed file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Expense categories to seed, in display order
    pub categories: Vec<CategorySeed>,
    /// Expenses to seed, referencing categories by name
    pub expenses: Vec<ExpenseSeed>,
}

/// Seed configuration for a single expense category
#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    /// Display name
    pub name: String,
    /// Icon glyph
    pub icon: String,
}

/// Seed configuration for a single expense
#[derive(Debug, Deserialize, Clone)]
pub struct ExpenseSeed {
    /// Display name
    pub name: String,
    /// Name of the category this expense belongs to
    pub category: String,
    /// Advisory lower bound
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Advisory upper bound
    #[serde(default)]
    pub max_price: Option<f64>,
    /// Amount counted toward totals
    pub current_value: f64,
    /// fixed or variable
    pub kind: ExpenseKind,
    /// salary or benefit
    pub source: ExpenseSource,
    /// preparation, living, or both
    pub visibility: Visibility,
}

/// Loads a seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML does not match
/// the expected structure.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("failed to parse seed file: {e}"),
    })
}

impl SeedConfig {
    /// Builds a full seed dataset: the configured categories and expenses
    /// on top of the built-in defaults for everything else. An expense
    /// naming an unknown category is a configuration error, not a silent
    /// fallback.
    pub fn build_state(&self) -> Result<AppState> {
        let categories: Vec<ExpenseCategory> = self
            .categories
            .iter()
            .enumerate()
            .map(|(idx, c)| ExpenseCategory {
                id: idx as i64 + 1,
                name: c.name.clone(),
                icon: c.icon.clone(),
                sort_order: idx as i32 + 1,
            })
            .collect();

        let expenses = self
            .expenses
            .iter()
            .enumerate()
            .map(|(idx, e)| {
                let category_id = categories
                    .iter()
                    .find(|c| c.name == e.category)
                    .map(|c| c.id)
                    .ok_or_else(|| Error::Config {
                        message: format!(
                            "seed expense {:?} references unknown category {:?}",
                            e.name, e.category
                        ),
                    })?;

                // fixed expenses carry a single suggestion
                let (min_price, max_price) = if e.kind == ExpenseKind::Fixed {
                    let suggestion = e.min_price.or(e.max_price);
                    (suggestion, suggestion)
                } else {
                    (e.min_price, e.max_price)
                };

                Ok(Expense {
                    id: idx as i64 + 1,
                    category_id,
                    name: e.name.clone(),
                    min_price,
                    max_price,
                    current_value: e.current_value,
                    kind: e.kind,
                    source: e.source,
                    active: true,
                    visibility: e.visibility,
                    note: None,
                    sort_order: idx as i32 + 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut state = seed::initial_state();
        state.categories = categories;
        state.expenses = expenses;
        Ok(state)
    }
}
