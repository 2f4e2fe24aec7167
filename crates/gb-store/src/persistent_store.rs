use crate::StoreResult;

use std::collections::HashMap;

use async_trait::async_trait;

/// Async key-value storage.
///
/// `set_many` and `remove_many` are all-or-nothing: an implementation either
/// applies every entry or reports an error having applied none.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    /// Every requested key appears in the result, mapped to `None` when absent.
    async fn get_many(&self, keys: &[&str]) -> StoreResult<HashMap<String, Option<String>>>;

    async fn set_many(&self, entries: &[(&str, &str)]) -> StoreResult<()>;

    async fn remove_many(&self, keys: &[&str]) -> StoreResult<()>;
}
