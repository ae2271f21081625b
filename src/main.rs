//! Diamond price prediction CLI
//!
//! Collects diamond attributes, prices them with a pre-trained model,
//! and prints the estimate.

use clap::{Parser, Subcommand};
use diamond::{Clarity, Color, Config, Cut, Result};

#[derive(Parser)]
#[command(name = "diamond")]
#[command(about = "Diamond price prediction from a pre-trained model", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the price of a single diamond
    Predict {
        /// Carat weight
        #[arg(long)]
        carat: f64,
        /// Total depth percentage
        #[arg(long)]
        depth: f64,
        /// Table width as a percentage of the widest point
        #[arg(long)]
        table: f64,
        /// Length in mm
        #[arg(long)]
        x: f64,
        /// Width in mm
        #[arg(long)]
        y: f64,
        /// Depth in mm
        #[arg(long)]
        z: f64,
        /// Cut grade (Fair, Good, "Very Good", Premium, Ideal)
        #[arg(long)]
        cut: Cut,
        /// Color grade (D through J)
        #[arg(long)]
        color: Color,
        /// Clarity grade (I1, SI2, SI1, VS2, VS1, VVS2, VVS1, IF)
        #[arg(long)]
        clarity: Clarity,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Model management commands
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Subcommand)]
enum ModelCommands {
    /// Show model artifact status
    Info,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Predict {
            carat,
            depth,
            table,
            x,
            y,
            z,
            cut,
            color,
            clarity,
            format,
        } => {
            let input = diamond::DiamondInput {
                carat,
                depth,
                table,
                x,
                y,
                z,
                cut,
                color,
                clarity,
            };
            commands::predict(&config, &input, format)
        }
        Commands::Model { action } => match action {
            ModelCommands::Info => commands::model_info(&config),
        },
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use diamond::model::ModelProvider;
    use diamond::predict::{format_prediction, Predictor};
    use diamond::DiamondInput;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("model")?;
        println!("Created model/ directory");

        println!("\nNext steps:");
        println!(
            "  1. Export your trained regressor to ONNX and place it at {}",
            config.model.path
        );
        println!("  2. Run 'diamond model info' to check the artifact loads");
        println!("  3. Run 'diamond predict --carat 1.0 --depth 61.5 --table 55 \\");
        println!("         --x 6.3 --y 6.2 --z 3.9 --cut Ideal --color E --clarity VS1'");

        Ok(())
    }

    pub fn predict(config: &Config, input: &DiamondInput, format: OutputFormat) -> Result<()> {
        let provider = ModelProvider::from_config(&config.model);
        let predictor = Predictor::new(provider);

        let result = predictor.predict(input)?;

        match format {
            OutputFormat::Table => println!("{}", format_prediction(&result)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }

        Ok(())
    }

    pub fn model_info(config: &Config) -> Result<()> {
        let path = &config.model.path;
        println!("Model artifact: {}", path);

        if !std::path::Path::new(path).exists() {
            println!("Status: missing");
            println!("Export a trained model to this path, or edit the config.");
            return Ok(());
        }

        let provider = ModelProvider::from_config(&config.model);
        provider.get()?;
        println!("Status: loads OK");

        Ok(())
    }
}
