//! Bulk parameter operations
//!
//! All three use cases operate on a hierarchy path with the trailing slash
//! removed up front. The service returns typed outcomes; printing is the
//! CLI layer's job.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{parse_var_lines, trim_path, ParamState, ParameterKind, StoredParameter};
use crate::infrastructure::ParameterStore;

/// What happened to a single parameter during `create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    /// Parameter did not exist and was written
    Added,
    /// Parameter exists with the same value; nothing written
    Unchanged,
    /// Parameter existed with a different value and was overwritten
    Updated,
}

/// Per-parameter outcome of a `create` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Full parameter name (path + short name)
    pub name: String,
    pub action: CreateAction,
}

/// Service for bulk create/get/delete against the parameter store.
pub struct ParamService {
    store: Arc<dyn ParameterStore>,
}

impl ParamService {
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    /// Create or update parameters under `path` from a NAME=VALUE file.
    ///
    /// Each valid line yields one outcome. The current value is fetched
    /// with decryption enabled so the comparison sees plaintext; a
    /// not-found lookup selects `Added`. Writes always carry the overwrite
    /// flag. An empty result means the file had no valid lines.
    pub async fn create_from_file(
        &self,
        path: &str,
        file: &Path,
        kind: ParameterKind,
    ) -> ApplicationResult<Vec<CreateOutcome>> {
        if !file.is_file() {
            return Err(ApplicationError::FileNotFound(file.to_path_buf()));
        }
        let base = trim_path(path);
        let content = std::fs::read_to_string(file)?;
        let entries = parse_var_lines(&content);
        debug!("create: {} entries from {}", entries.len(), file.display());

        let mut outcomes = Vec::new();
        for entry in entries {
            let full_name = format!("{}/{}", base, entry.name);
            let current = self.store.fetch(&full_name, true).await?;
            let state = ParamState::of(current.as_ref().map(|p| p.value.as_str()), &entry.value);

            let action = match state {
                ParamState::Absent => {
                    self.store.put(&full_name, &entry.value, kind).await?;
                    CreateAction::Added
                }
                ParamState::Unchanged => CreateAction::Unchanged,
                ParamState::Stale => {
                    self.store.put(&full_name, &entry.value, kind).await?;
                    CreateAction::Updated
                }
            };
            outcomes.push(CreateOutcome {
                name: full_name,
                action,
            });
        }
        Ok(outcomes)
    }

    /// List all parameters under `path`, recursively.
    ///
    /// Decryption is the caller's choice: the ECS output mode only needs
    /// ARNs, so it skips decryption entirely.
    pub async fn list(&self, path: &str, decrypt: bool) -> ApplicationResult<Vec<StoredParameter>> {
        let base = trim_path(path);
        Ok(self.store.list(base, decrypt).await?)
    }

    /// Delete every parameter under `path`. Returns the number removed.
    pub async fn delete_tree(&self, path: &str) -> ApplicationResult<usize> {
        let base = trim_path(path);
        let parameters = self.store.list(base, false).await?;
        if parameters.is_empty() {
            return Ok(0);
        }
        let names: Vec<String> = parameters.into_iter().map(|p| p.name).collect();
        let count = names.len();
        self.store.delete_batch(&names).await?;
        debug!("delete: removed {} parameters under {}", count, base);
        Ok(count)
    }
}
