// globals.rs
//
// stores lazily initialized globals

use std::{process::exit, sync::LazyLock};

use tracing::error;

use crate::config::Config;

/// Process-wide configuration, loaded on first access.
///
/// LazyLock runs the load at most once even when several threads race the
/// first dereference, and every caller sees the fully populated value. A
/// load failure here is fatal; the daemon must not start on a bad config.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        error!("Failed to load config: {e:#}");
        exit(1)
    })
});
