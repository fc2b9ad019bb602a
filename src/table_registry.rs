use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide record of tables this instance has declared, keyed by
/// sanitized table name. The database catalog remains the source of truth;
/// this exists so repeat uploads skip redundant DDL and so a re-upload with
/// a different shape can be reported (columns are never migrated).
#[derive(Clone, Default)]
pub struct TableRegistry {
    inner: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl TableRegistry {
    /// Record a declaration, returning the previously registered column set
    /// if this table name was already declared by this process.
    pub async fn record(&self, table: &str, columns: &[String]) -> Option<Vec<String>> {
        let mut guard = self.inner.write().await;
        guard.insert(table.to_string(), columns.to_vec())
    }

    pub async fn get(&self, table: &str) -> Option<Vec<String>> {
        let guard = self.inner.read().await;
        guard.get(table).cloned()
    }
}
