//! Process-wide initialization
//!
//! The host loads the library once and every exported entry point goes
//! through [`service`]. The first caller initializes; a failed
//! initialization is remembered and every later call resolves to its
//! fallback with [`CoreError::Uninitialized`].

use std::path::Path;
use std::sync::OnceLock;

use crate::config::{self, Config, LoggingConfig};
use crate::error::{CoreError, CoreResult};
use crate::service::{guard, ComputationService};

static RUNTIME: OnceLock<CoreResult<ComputationService>> = OnceLock::new();

/// Initialize from a config file, or from defaults when `path` is `None`.
///
/// Only the first call has any effect; later calls report the state the
/// first one left behind.
pub fn init(path: Option<&Path>) -> CoreResult<()> {
    let state = RUNTIME.get_or_init(|| {
        let config = match path {
            Some(path) => config::load_config(path),
            None => Ok(Config::default()),
        };
        start(config)
    });
    status(state)
}

/// Initialize from an already loaded config.
pub fn init_with(config: Config) -> CoreResult<()> {
    let state = RUNTIME.get_or_init(|| start(Ok(config)));
    status(state)
}

/// The shared service, initializing with defaults on first use.
pub fn service() -> CoreResult<&'static ComputationService> {
    RUNTIME
        .get_or_init(|| start(Ok(Config::default())))
        .as_ref()
        .map_err(Clone::clone)
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

/// The service holds no resources; this only marks the host's teardown in the log.
pub fn shutdown() {
    log::info!("mobilecore shutting down");
}

fn status(state: &CoreResult<ComputationService>) -> CoreResult<()> {
    state.as_ref().map(|_| ()).map_err(Clone::clone)
}

fn start(config: anyhow::Result<Config>) -> CoreResult<ComputationService> {
    launch(|| {
        let config = config.map_err(|e| CoreError::Uninitialized(format!("{:#}", e)))?;
        install_platform_logger(&config.logging);
        ComputationService::native(config.limits)
    })
}

/// Run startup under the boundary guard. Any failure, panics included, is
/// reported as [`CoreError::Uninitialized`].
fn launch(boot: impl FnOnce() -> CoreResult<ComputationService>) -> CoreResult<ComputationService> {
    let result = guard(boot).map_err(|e| match e {
        CoreError::Uninitialized(_) => e,
        other => CoreError::Uninitialized(other.to_string()),
    });

    match &result {
        Ok(_) => log::info!("mobilecore {} initialized", crate::kernel::info::VERSION),
        Err(e) => log::error!("mobilecore failed to initialize: {}", e),
    }
    result
}

#[cfg(target_os = "android")]
fn install_platform_logger(logging: &LoggingConfig) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(logging.level_filter())
            .with_tag(logging.tag.clone()),
    );
}

#[cfg(not(target_os = "android"))]
fn install_platform_logger(logging: &LoggingConfig) {
    // The embedding host owns the logger; only narrow the level it sees.
    if logging.level_filter() < log::max_level() {
        log::set_max_level(logging.level_filter());
    }
}
