//! Storage key namespacing.
//!
//! Every external key is stored as `prefix + key`. The prefix is chosen once per
//! process: either installed explicitly (usually from configuration) before the
//! first dictionary operation, or fixed to [`DEFAULT_PREFIX`] on first use.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::errors::DictError;

pub const DEFAULT_PREFIX: &str = "string-dict_";

static PREFIX: OnceCell<String> = OnceCell::new();

/// The process-wide prefix. Fixes it to the default if nothing was installed.
pub fn prefix() -> &'static str {
    PREFIX.get_or_init(|| DEFAULT_PREFIX.to_string()).as_str()
}

/// Install the prefix for this process.
///
/// Re-installing the prefix already in effect is a no-op; installing a
/// different one after it has been fixed fails with [`DictError::NamespaceLocked`].
pub fn install_prefix(requested: &str) -> Result<(), DictError> {
    if requested.is_empty() {
        return Err(DictError::InvalidKey(requested.to_string()));
    }
    let current = PREFIX.get_or_init(|| requested.to_string());
    if current != requested {
        return Err(DictError::NamespaceLocked { current: current.clone(), requested: requested.to_string() });
    }
    debug!(prefix = %current, "dict namespace prefix fixed");
    Ok(())
}

/// Storage key for an external key.
pub fn make_key(key: &str) -> String {
    let prefix = prefix();
    let mut out = String::with_capacity(prefix.len() + key.len());
    out.push_str(prefix);
    out.push_str(key);
    out
}

/// External key for a storage key produced by [`make_key`].
pub fn revoke_key(storage_key: &str) -> &str {
    storage_key.strip_prefix(prefix()).unwrap_or(storage_key)
}
