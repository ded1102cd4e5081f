use env_logger::{Builder, Env};

use crate::config::ModalConfig;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs `env_logger`; `RUST_LOG` wins over `filter`. Calling it twice is harmless.
pub fn init(filter: Option<&str>) {
    let env = Env::default().default_filter_or(filter.unwrap_or(DEFAULT_LOG_FILTER));
    if Builder::from_env(env)
        .format_timestamp_micros()
        .try_init()
        .is_ok()
    {
        log::debug!("logging initialised");
    }
}

pub fn init_from_config(config: &ModalConfig) {
    init(config.log_filter.as_deref());
}
