//! Common filesystem paths used by folio.

use std::path::PathBuf;

/// Base directory for folio state (config, log).
///
/// Defaults to `~/.config/folio`, but can be overridden via `FOLIO_DIR`
/// for testing or multi-profile setups.
pub fn folio_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FOLIO_DIR") {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".config").join("folio")
}

/// Path to the folio configuration file.
pub fn config_path() -> PathBuf {
    folio_dir().join("config.toml")
}

/// Path to the terminal UI log file.
pub fn log_path() -> PathBuf {
    folio_dir().join("folio.log")
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folio_dir_honors_override() {
        let _guard = test_env_lock();
        let previous = std::env::var("FOLIO_DIR").ok();

        std::env::set_var("FOLIO_DIR", "/tmp/folio-test-profile");
        assert_eq!(folio_dir(), PathBuf::from("/tmp/folio-test-profile"));
        assert_eq!(
            config_path(),
            PathBuf::from("/tmp/folio-test-profile/config.toml")
        );
        assert_eq!(log_path(), PathBuf::from("/tmp/folio-test-profile/folio.log"));

        match previous {
            Some(dir) => std::env::set_var("FOLIO_DIR", dir),
            None => std::env::remove_var("FOLIO_DIR"),
        }
    }
}
