//! Application configuration loaded from environment variables.
//!
//! - `MOCKEX_PAIR`: pair opened on the Trade tab at startup (`BTC_USDT`).
//! - `MOCKEX_CATALOG`: path to a JSON file replacing the built-in sample data.
//! - `MOCKEX_TICK_MS`: UI tick interval in milliseconds (250).
//! - `MOCKEX_LOG_FILE`: where tracing output goes. Unset means no logging,
//!   since the TUI owns stdout and stderr.
//!
//! Empty values are treated as absent.

use std::path::PathBuf;

use crate::models::pair::TradingPair;

/// Pair used when `MOCKEX_PAIR` is not set.
pub const DEFAULT_PAIR: &str = "BTC_USDT";

/// Tick interval used when `MOCKEX_TICK_MS` is not set.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub initial_pair: TradingPair,
    pub catalog_path: Option<PathBuf>,
    pub tick_ms: u64,
    pub log_file: Option<PathBuf>,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`MockexError::Pair`](crate::MockexError::Pair) if `MOCKEX_PAIR`
/// does not parse, and [`MockexError::Config`](crate::MockexError::Config)
/// if `MOCKEX_TICK_MS` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let pair_raw = non_empty_var("MOCKEX_PAIR").unwrap_or_else(|| DEFAULT_PAIR.to_string());
    let initial_pair: TradingPair = pair_raw.parse()?;

    let tick_ms = match non_empty_var("MOCKEX_TICK_MS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(0) | Err(_) => {
                return Err(crate::MockexError::Config(format!(
                    "MOCKEX_TICK_MS must be a positive integer, got {raw:?}"
                )));
            }
            Ok(ms) => ms,
        },
        None => DEFAULT_TICK_MS,
    };

    Ok(AppConfig {
        initial_pair,
        catalog_path: non_empty_var("MOCKEX_CATALOG").map(PathBuf::from),
        tick_ms,
        log_file: non_empty_var("MOCKEX_LOG_FILE").map(PathBuf::from),
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Temporarily sets env vars, runs `f`, then restores the originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: every env-mutating test holds ENV_LOCK.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    const ALL_VARS: [&str; 4] = [
        "MOCKEX_PAIR",
        "MOCKEX_CATALOG",
        "MOCKEX_TICK_MS",
        "MOCKEX_LOG_FILE",
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&cleared(), || {
            let config = fetch_config().unwrap();
            assert_eq!(config.initial_pair.base(), "BTC");
            assert_eq!(config.initial_pair.quote(), "USDT");
            assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
            assert!(config.catalog_path.is_none());
            assert!(config.log_file.is_none());
        });
    }

    #[test]
    fn pair_from_env_accepts_slash_form() {
        let mut vars = cleared();
        vars[0] = ("MOCKEX_PAIR", Some("eth/usdt"));
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.initial_pair.to_string(), "ETH/USDT");
        });
    }

    #[test]
    fn rejects_malformed_pair() {
        let mut vars = cleared();
        vars[0] = ("MOCKEX_PAIR", Some("BTC"));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(matches!(err, crate::MockexError::Pair(_)));
        });
    }

    #[test]
    fn rejects_zero_tick() {
        let mut vars = cleared();
        vars[2] = ("MOCKEX_TICK_MS", Some("0"));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("MOCKEX_TICK_MS"));
        });
    }

    #[test]
    fn rejects_non_numeric_tick() {
        let mut vars = cleared();
        vars[2] = ("MOCKEX_TICK_MS", Some("fast"));
        with_env(&vars, || {
            assert!(fetch_config().is_err());
        });
    }

    #[test]
    fn paths_and_tick_from_env() {
        let vars = vec![
            ("MOCKEX_PAIR", None),
            ("MOCKEX_CATALOG", Some("/tmp/catalog.json")),
            ("MOCKEX_TICK_MS", Some("100")),
            ("MOCKEX_LOG_FILE", Some("/tmp/mockex.log")),
        ];
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.tick_ms, 100);
            assert_eq!(
                config.catalog_path.as_deref(),
                Some(std::path::Path::new("/tmp/catalog.json"))
            );
            assert_eq!(
                config.log_file.as_deref(),
                Some(std::path::Path::new("/tmp/mockex.log"))
            );
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        let vars: Vec<_> = ALL_VARS.iter().map(|k| (*k, Some(""))).collect();
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.initial_pair.to_string(), "BTC/USDT");
            assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
            assert!(config.catalog_path.is_none());
        });
    }
}
