mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, locate, trace};
use geotrace_common::config::Config;
use terminal::{print, spinner};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    spinner::init_logging();

    match run(commands).await {
        Ok(()) => {
            print::end_of_program();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(commands: CommandLine) -> anyhow::Result<()> {
    let mut cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Trace(args) => {
            args.apply(&mut cfg);
            print::header("getting ready to trace", cfg.quiet);
            trace::trace(args.host, &cfg).await
        }
        Commands::Locate { ip } => {
            print::header("locating address", cfg.quiet);
            locate::locate(ip, &cfg).await
        }
    }
}
