//! redfish-codegen CLI - naming and module planning for Redfish OpenAPI documents
//!
//! Prints the plan a code emitter would follow: model types, endpoint
//! traits and the module declarations connecting them.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use redfish_codegen::codegen::plan_from_files;
use redfish_codegen::{GeneratorConfig, ModelResolver};

#[derive(Parser)]
#[command(name = "redfish-codegen")]
#[command(version, about = "Naming and module planning for Redfish OpenAPI documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the generated crate for an OpenAPI document
    Plan {
        /// Directory containing openapi.yaml
        #[arg(short, long, default_value = "api")]
        api_directory: PathBuf,

        /// Generator configuration (YAML); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Show the model type each schema name resolves to
    Resolve {
        /// Schema names, e.g. Chassis_v1_0_0_Chassis
        #[arg(required = true)]
        names: Vec<String>,

        /// Generator configuration (YAML); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan { api_directory, config, format } => plan(api_directory, config, format),
        Commands::Resolve { names, config } => resolve(names, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(config: Option<PathBuf>) -> Result<GeneratorConfig, String> {
    match config {
        Some(path) => GeneratorConfig::from_file(&path).map_err(|e| e.to_string()),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Plan the crate and print it to stdout
fn plan(api_directory: PathBuf, config: Option<PathBuf>, format: Format) -> Result<(), String> {
    let document = api_directory.join("openapi.yaml");
    if !document.exists() {
        return Err(format!("OpenAPI document not found: {}", document.display()));
    }

    let plan = plan_from_files(&document, config).map_err(|e| e.to_string())?;

    let output = match format {
        Format::Json => serde_json::to_string_pretty(&plan).map_err(|e| e.to_string())?,
        Format::Yaml => serde_yaml::to_string(&plan).map_err(|e| e.to_string())?,
    };
    println!("{}", output);

    Ok(())
}

/// Print `name -> type` for each schema name
fn resolve(names: Vec<String>, config: Option<PathBuf>) -> Result<(), String> {
    let config = load_config(config)?;
    let resolver = ModelResolver::from_config(&config).map_err(|e| e.to_string())?;

    for name in &names {
        match resolver.resolve(name) {
            Some(result) => {
                let rust_type = resolver.rust_type(&result).map_err(|e| e.to_string())?;
                println!("{} -> {}", name, rust_type);
            }
            None => println!("{} -> unresolved", name),
        }
    }

    Ok(())
}
