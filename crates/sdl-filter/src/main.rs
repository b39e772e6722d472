mod cli;
mod filter_cmd;
mod report;

use clap::CommandFactory;
use clap::Parser;
pub(crate) use cli::Cli;
use cli::Command;
pub(crate) use report::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    match cli.cmd.take() {
        Some(Command::Filter(cmd)) => cmd.run().emit(),
        None => match Cli::command().print_help() {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => Report::Failed(err.into()).emit(),
        },
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) = cli.log_level();

    // Logs go to stderr so that `--dry-run` output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
