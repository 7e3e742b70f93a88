//! Common test utilities for integration tests.

use std::env;

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be serialized (`#[serial]`): environment
/// variables are process-global, so concurrent mutation would race.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `value`, restoring the previous state on drop.
    #[allow(dead_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` from the environment, restoring it on drop.
    #[allow(dead_code)]
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
