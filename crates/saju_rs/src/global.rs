//! Process-wide engine, configured once.

use std::sync::OnceLock;

use saju_base::SajuConfig;

use crate::engine::SajuEngine;
use crate::error::SajuError;

static ENGINE: OnceLock<SajuEngine> = OnceLock::new();

/// Install the global engine with `config`.
///
/// Fails if the config is invalid or an engine is already installed
/// (including one lazily created by [`engine`]).
pub fn init(config: SajuConfig) -> Result<(), SajuError> {
    let engine = SajuEngine::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| SajuError::Config("global engine already initialized".into()))
}

/// Whether the global engine exists.
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// The global engine, created with the default config on first use.
pub fn engine() -> &'static SajuEngine {
    ENGINE.get_or_init(SajuEngine::default)
}
