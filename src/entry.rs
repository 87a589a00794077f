use clap::{CommandFactory, FromArgMatches};

use crate::app::{SessionOptions, run_session};
use crate::args::PodiumArgs;
use crate::error::AppResult;

/// Parses the CLI, layers file configuration underneath it, and runs the
/// interactive session on a fresh runtime.
///
/// # Errors
///
/// Returns an error for invalid CLI/config input or a failed session.
pub fn run() -> AppResult<()> {
    let matches = PodiumArgs::command().get_matches();
    let mut args = PodiumArgs::from_arg_matches(&matches)?;

    crate::logger::init_logging(args.verbose);

    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, &matches, &config)?;
        tracing::debug!("file configuration applied");
    }

    let options = SessionOptions::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_session(options))
}
