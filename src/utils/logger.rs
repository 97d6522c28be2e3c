use crate::config::toml_config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Covers both the library target and
/// the `reservations` binary target.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "hotel_reservations=debug,reservations=debug,info"
    } else {
        "hotel_reservations=info,reservations=info,warn"
    }
}

/// 初始化日誌；`RUST_LOG` 優先於預設過濾條件
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // stdout carries command output, logs go to stderr
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).init(),
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_binary_target() {
        assert!(default_directives(true).contains("reservations=debug"));
        assert!(default_directives(false).contains("reservations=info"));
        assert!(default_directives(false).contains("hotel_reservations=info"));
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
    }
}
