//! ridgeway — command-line front end: argument handling, logging setup and
//! route presentation around `ridgeway-paths`.

pub mod cli;
pub mod present;

pub use cli::{Cli, run};

/// Install the `env_logger` backend. `RUST_LOG` takes precedence; otherwise
/// only warnings are shown, or everything from `debug` up when `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
