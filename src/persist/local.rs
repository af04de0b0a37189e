//! Local durable storage.
//!
//! The entire state is one versioned JSON document, rewritten whole after
//! every mutation (no incremental diff). On load, an absent file means
//! first run, a malformed file is treated as absent, and a schema-version
//! mismatch triggers migration-via-reseed: the stored data is discarded and
//! the seeded dataset takes its place. That trade-off is deliberate for
//! this single-user, low-stakes dataset.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, warn};

use super::LoadOutcome;
use crate::errors::Result;
use crate::seed;
use crate::store::AppState;

/// Current schema version of the durable document. Any stored document with
/// a different tag is discarded and reseeded on load.
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Serialize, Deserialize)]
struct StateDocument {
    schema_version: u32,
    #[serde(flatten)]
    state: AppState,
}

#[derive(Serialize)]
struct StateDocumentRef<'a> {
    schema_version: u32,
    #[serde(flatten)]
    state: &'a AppState,
}

/// The local JSON-document backend.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    seed: AppState,
}

impl LocalStore {
    /// Creates a store over the document at `path`, falling back to the
    /// built-in seed dataset. Nothing is read until [`LocalStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, seed::initial_state())
    }

    /// Like [`LocalStore::new`] with a custom seed dataset, e.g. one built
    /// from a seed-override file.
    pub fn with_seed(path: impl Into<PathBuf>, seed: AppState) -> Self {
        Self {
            path: path.into(),
            seed,
        }
    }

    /// The document path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored state, falling back to the seeded dataset when the
    /// document is absent, malformed, or carries a different schema version.
    /// Never fails: every fallback is logged and produces usable state.
    pub async fn load(&self) -> LoadOutcome {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no stored data, starting from seed");
                return LoadOutcome {
                    state: self.seed.clone(),
                    error: None,
                };
            }
            Err(e) => {
                warn!(path = %self.path.display(), "failed to read stored data, starting from seed: {e}");
                return LoadOutcome {
                    state: self.seed.clone(),
                    error: None,
                };
            }
        };

        match serde_json::from_slice::<StateDocument>(&bytes) {
            Ok(doc) if doc.schema_version == SCHEMA_VERSION => LoadOutcome {
                state: doc.state,
                error: None,
            },
            Ok(doc) => {
                info!(
                    stored = doc.schema_version,
                    expected = SCHEMA_VERSION,
                    "schema version mismatch, discarding stored data and reseeding"
                );
                let state = self.seed.clone();
                if let Err(e) = self.write_state(&state).await {
                    warn!("failed to persist reseeded data: {e}");
                }
                LoadOutcome { state, error: None }
            }
            Err(e) => {
                warn!(path = %self.path.display(), "malformed stored data, starting from seed: {e}");
                LoadOutcome {
                    state: self.seed.clone(),
                    error: None,
                }
            }
        }
    }

    /// Rewrites the whole document to reflect `snapshot`.
    pub async fn apply(&self, snapshot: &AppState) -> Result<()> {
        self.write_state(snapshot).await
    }

    /// Removes the stored document and hands back the seed; the next load
    /// starts fresh as well.
    pub async fn reset(&self) -> Result<AppState> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(self.seed.clone()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.seed.clone()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_state(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let doc = StateDocumentRef {
            schema_version: SCHEMA_VERSION,
            state,
        };
        let bytes = serde_json::to_vec_pretty(&doc)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
