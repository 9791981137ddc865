use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LIB_TARGET: &str = "secret_event_lambda";
/// Targets of the `secret-event` and `lambda` binaries.
const CLI_BIN_TARGET: &str = "secret_event";
const LAMBDA_BIN_TARGET: &str = "lambda";

/// `RUST_LOG` wins over the built-in directives.
fn env_filter_or(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn cli_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!(
        "{lib}={level},{bin}={level},warn",
        lib = LIB_TARGET,
        bin = CLI_BIN_TARGET,
        level = level
    )
}

pub fn lambda_directives() -> String {
    format!(
        "{}=info,{}=info,lambda_runtime=info,warn",
        LIB_TARGET, LAMBDA_BIN_TARGET
    )
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter_or(&cli_directives(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON lines for CloudWatch. Lambda already stamps each line with a time.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter_or(&lambda_directives()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .with_current_span(false),
        )
        .init();
}
