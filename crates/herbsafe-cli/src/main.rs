//! HerbSafe CLI - main entry point

use clap::Parser;
use herbsafe_catalog::ProductCatalog;
use herbsafe_cli::commands;
use herbsafe_cli::{logging, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> herbsafe_cli::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref())?;
        }
        Command::Evidence(args) => {
            let service = config.evidence_service()?;
            commands::execute_evidence(args, &service, &formatter)?;
        }
        Command::Products => {
            let catalog = ProductCatalog::load(config.catalog_path(cli.catalog.as_deref()))?;
            commands::execute_products(&catalog, &formatter)?;
        }
        Command::Assess(args) => {
            let catalog = ProductCatalog::load(config.catalog_path(cli.catalog.as_deref()))?;
            commands::execute_assess(args, &catalog, || config.evidence_service(), &formatter)?;
        }
    }

    Ok(())
}
