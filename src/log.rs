use log::LevelFilter;

/// Environment variable that turns on debug output in the CLI.
pub const DEBUG_ENV_VAR: &str = "CRYPTOGRAM_DEBUG";

/// Level used when nothing overrides it: solver passes and per-seed scores
/// are only shown at `Debug`.
#[must_use]
pub fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging for the cryptogram solver.
///
/// - **Native:** plain `LEVEL message` lines on stderr; `RUST_LOG` wins over
///   `debug_enabled` when set.
/// - **WASM:** browser console, at the level chosen by `debug_enabled`.
///
/// Calling it more than once keeps the first logger.
pub fn init_logger(debug_enabled: bool) {
    let level = default_level(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    init_console(level);

    #[cfg(not(target_arch = "wasm32"))]
    init_stderr(level);
}

#[cfg(target_arch = "wasm32")]
fn init_console(level: LevelFilter) {
    let level = level.to_level().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        let msg = format!("cryptogram: console logging unavailable ({e})");
        web_sys::console::error_1(&msg.into());
        return;
    }
    log::debug!("cryptogram console logging at {level}");
}

#[cfg(not(target_arch = "wasm32"))]
fn init_stderr(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    let overridden = match std::env::var("RUST_LOG") {
        Ok(spec) => {
            builder.parse_filters(&spec);
            true
        }
        Err(_) => false,
    };

    if builder.try_init().is_ok() {
        if overridden {
            log::debug!("cryptogram logging configured from RUST_LOG");
        } else {
            log::debug!("cryptogram logging at {level} (unset {DEBUG_ENV_VAR} for less output)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
        log::info!("still logging after a second init");
    }
}
