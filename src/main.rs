//! Command-line entry point for the documentation generator.

use std::path::PathBuf;

use clap::Parser;

use fidldoc::config::Config;
use fidldoc::docs::DocsGenerator;
use fidldoc::model::Model;

#[derive(Parser)]
#[command(name = "fidldoc")]
#[command(about = "Generate AsciiDoc documentation from Franca IDL models")]
struct Cli {
    /// Resolved model files (JSON interchange), documented in order
    #[arg(short, long = "input", required = true)]
    input: Vec<PathBuf>,

    /// Output document path
    #[arg(short, long)]
    output: PathBuf,

    /// Optional TOML file with render options
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fidldoc::tracing_config::init()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let model = Model::load_merged(&cli.input)?;

    let generator = DocsGenerator::new().with_config(config);
    generator.generate_to_file(&model, &cli.output)?;

    println!("Generated {}", cli.output.display());
    Ok(())
}
