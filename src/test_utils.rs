//! Shared test utilities for `Homebound`.
//!
//! This module provides common helper functions for setting up test
//! backends and creating argument structs with sensible defaults.

use sea_orm::DatabaseConnection;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use crate::config::storage;
use crate::errors::Result;
use crate::models::{
    ExpenseKind, ExpenseSource, ItemCategory, NewChecklistItem, NewExpense, NewItem, Phase,
    Priority, Visibility,
};
use crate::persist::{LocalStore, PersistenceAdapter, RemoteStore};
use crate::policy::TimelinePolicy;
use crate::store::Store;

/// Initializes test tracing once; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory database with all tables initialized. This is the
/// standard setup for remote-backend tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    storage::create_tables(&db).await?;
    Ok(db)
}

/// Builds a store over a local JSON document in a fresh temporary
/// directory. The directory handle must stay alive for the store's
/// lifetime.
pub async fn seeded_local_store() -> (Store, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let local = LocalStore::new(dir.path().join("state.json"));
    let store = Store::load(PersistenceAdapter::Local(local), TimelinePolicy::default()).await;
    (store, dir)
}

/// Builds a store over an in-memory remote backend, returning the shared
/// connection so tests can reach behind the store's back.
pub async fn seeded_remote_store() -> Result<(Store, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let remote = RemoteStore::new(db.clone());
    let store = Store::load(PersistenceAdapter::Remote(remote), TimelinePolicy::default()).await;
    Ok((store, db))
}

/// A pre-move shopping item with no researched prices.
pub fn new_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: ItemCategory::House,
        phase: Phase::PreMove,
        priority: Priority::Medium,
        min_price: None,
        max_price: None,
        note: None,
        sort_order: 1,
    }
}

/// A variable expense visible in both modes, in the first seed category.
pub fn new_expense(name: &str, current_value: f64) -> NewExpense {
    NewExpense {
        category_id: 1,
        name: name.to_string(),
        min_price: None,
        max_price: None,
        current_value,
        kind: ExpenseKind::Variable,
        source: ExpenseSource::Salary,
        visibility: Visibility::Both,
        note: None,
        sort_order: 1,
    }
}

/// A checklist task with no deadline.
pub fn new_checklist_item(description: &str) -> NewChecklistItem {
    NewChecklistItem {
        description: description.to_string(),
        target_date: None,
        note: None,
    }
}
