use crate::utils::error::Result;
use serde_json::Value;

/// Opaque key/value persistence boundary. Implementations hold JSON-like
/// snapshots; the core never assumes the stored shape matches the in-memory
/// shape and normalizes everything it reads back.
pub trait StateStore {
    /// Read the value stored under `key`; `None` when absent.
    fn load(&self, key: &str) -> Result<Option<Value>>;

    /// Write `value` under `key`.
    fn save(&self, key: &str, value: &Value) -> Result<()>;
}
