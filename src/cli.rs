use clap::{Parser, Subcommand};
use patrol::application::dto::ReportFormat;
use std::path::PathBuf;

/// Inspect the dependencies of Composer projects
#[derive(Parser, Debug)]
#[command(name = "patrol")]
#[command(version)]
#[command(about = "Score outdated and vulnerable Composer dependencies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect the dependencies of a Composer project
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Minimum acceptable score, in percent [default: 0]
    #[arg(long, value_name = "FLOAT", value_parser = parse_min)]
    pub min: Option<f64>,

    /// Report format: LIST or TABLE [default: LIST]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Path to a config file (defaults to patrol.config.yml in the project directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Composer executable to run [default: composer]
    #[arg(long, value_name = "BINARY")]
    pub composer: Option<String>,

    /// Never truncate lines, and show what blocks each upgrade
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the report and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_min(value: &str) -> Result<f64, String> {
    let min: f64 = value
        .parse()
        .map_err(|_| format!("Invalid minimum score: {}", value))?;
    if !min.is_finite() || min < 0.0 {
        return Err(format!(
            "Invalid minimum score: {}. Please specify a non-negative number",
            value
        ));
    }
    Ok(min)
}
