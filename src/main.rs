use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jwtgen::{Cli, Config};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let result = Config::try_from(cli).and_then(|config| {
        let stdout = io::stdout();
        jwtgen::run(&config, &mut stdout.lock())
    });

    match result {
        Ok(token) => {
            tracing::debug!(length = token.compact().len(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "failed to generate token");
            eprintln!("{}", Cli::command().render_help());
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
