mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands, Effective};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let eff = match Effective::new(&cli.args) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Columns => cmd::columns::run(&eff),
        Commands::Avro(args) => cmd::avro::run(&eff, &args),
        Commands::Rpath => cmd::rpath::run(&eff),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
