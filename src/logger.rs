//! Журнал диагностики. Пишет в stderr, чтобы stdout оставался за
//! приглашением и результатами.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Подключает журнал. `RUST_LOG` имеет приоритет над `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "roman_calculator=debug"
    } else {
        "roman_calculator=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
