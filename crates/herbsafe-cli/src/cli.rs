//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// HerbSafe - Personalised liver-injury risk check for herbal products.
#[derive(Debug, Parser)]
#[command(name = "herbsafe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HERBSAFE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Product catalog path (overrides the configured one)
    #[arg(long, global = true, env = "HERBSAFE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text and tables (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalogued products
    Products,

    /// Assess liver-injury risk of a product for a user profile
    Assess(AssessArgs),

    /// Look up live literature evidence for an ingredient
    Evidence(EvidenceArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

/// Arguments for the assess command.
#[derive(Debug, Parser)]
pub struct AssessArgs {
    /// Product name, exactly as listed by `herbsafe products`
    pub product: String,

    /// Age in years
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub age: u32,

    /// Body weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimetres
    #[arg(long)]
    pub height: Option<f64>,

    /// Known liver condition
    #[arg(long)]
    pub liver_disease: bool,

    /// Regular alcohol consumption
    #[arg(long)]
    pub alcohol: bool,

    /// Skip the live literature lookup
    #[arg(long)]
    pub no_evidence: bool,
}

/// Arguments for the evidence command.
#[derive(Debug, Parser)]
pub struct EvidenceArgs {
    /// Ingredient name (scientific or common)
    pub ingredient: String,
}

/// Arguments for configuration inspection.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_command() {
        let cli = Cli::parse_from([
            "herbsafe",
            "assess",
            "Zandu Giloy Tablets",
            "--age",
            "70",
            "--weight",
            "50",
            "--height",
            "180",
            "--liver-disease",
        ]);
        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.product, "Zandu Giloy Tablets");
                assert_eq!(args.age, 70);
                assert_eq!(args.weight, Some(50.0));
                assert_eq!(args.height, Some(180.0));
                assert!(args.liver_disease);
                assert!(!args.alcohol);
                assert!(!args.no_evidence);
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_assess_defaults() {
        let cli = Cli::parse_from(["herbsafe", "assess", "Amla Juice"]);
        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.age, 30);
                assert!(args.weight.is_none());
                assert!(args.height.is_none());
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["herbsafe", "assess", "x", "--age", "0"]).is_err());
        assert!(Cli::try_parse_from(["herbsafe", "assess", "x", "--age", "121"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["herbsafe", "products", "--format", "json", "-vv", "--no-color"]);
        assert!(matches!(cli.command, Command::Products));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert!(matches!(format, crate::config::OutputFormat::Json));
    }
}
