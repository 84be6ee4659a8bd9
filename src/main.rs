mod cli;

use clap::Parser;
use cli::{Cli, Command, InspectArgs};
use patrol::adapters::outbound::console::StderrProgressReporter;
use patrol::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use patrol::adapters::outbound::network::PackagistAdvisoryFeed;
use patrol::adapters::outbound::process::{
    CachingCommandRunner, ComposerBinary, ProcessCommandRunner,
};
use patrol::application::dto::{InspectRequest, RenderOptions, ReportFormat};
use patrol::application::factories::FormatterFactory;
use patrol::application::use_cases::InspectDependenciesUseCase;
use patrol::config::{discover_config, load_config_from_path, ConfigFile};
use patrol::ports::outbound::{OutputPresenter, ProgressReporter};
use patrol::shared::error::ExitCode;
use patrol::shared::security::validate_project_directory;
use patrol::shared::Result;
use std::io::{stdout, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use terminal_size::{terminal_size, Width};

const DEFAULT_COMPOSER: &str = "composer";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are printed to stdout and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let Command::Inspect(args) = cli.command;

    let project_path = args
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    validate_project_directory(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let settings = Settings::resolve(&args, config.as_ref());

    let progress_reporter = StderrProgressReporter::new(args.quiet);
    if let Some(config) = config.as_ref() {
        for warning in config.unknown_field_warnings() {
            progress_reporter.report_error(&warning);
        }
    }

    // Create adapters (Dependency Injection)
    let runner = CachingCommandRunner::new(ProcessCommandRunner::new(
        settings.composer.clone(),
        project_path.clone(),
    ));
    let package_manager = ComposerBinary::new(runner);
    let advisory_feed = PackagistAdvisoryFeed::from_env()?;

    let use_case = InspectDependenciesUseCase::new(
        FileSystemReader::new(),
        package_manager,
        advisory_feed,
        &progress_reporter,
    );

    let request = InspectRequest::new(project_path, settings.min, settings.exclude_packages);
    let response = use_case.execute(request)?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let options = RenderOptions::new(colors_enabled(args.no_color), terminal_width(), args.verbose);
    let formatter = FormatterFactory::create(settings.format, options);
    let output = formatter.format(&response.report)?;

    StdoutPresenter::new().present(&output)?;

    if response.failed {
        Ok(ExitCode::InspectionFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

/// An explicit `--config` must exist; otherwise the project directory is searched.
fn load_config(args: &InspectArgs, project_path: &Path) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(project_path),
    }
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq)]
struct Settings {
    min: f64,
    format: ReportFormat,
    composer: String,
    exclude_packages: Vec<String>,
}

impl Settings {
    fn resolve(args: &InspectArgs, config: Option<&ConfigFile>) -> Self {
        Self {
            min: args
                .min
                .or_else(|| config.and_then(|c| c.min))
                .unwrap_or(0.0),
            format: args
                .format
                .or_else(|| config.and_then(ConfigFile::report_format))
                .unwrap_or_default(),
            composer: args
                .composer
                .clone()
                .or_else(|| config.and_then(|c| c.composer.clone()))
                .unwrap_or_else(|| DEFAULT_COMPOSER.to_string()),
            exclude_packages: config
                .and_then(|c| c.exclude_packages.clone())
                .unwrap_or_default(),
        }
    }
}

fn colors_enabled(no_color: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    !no_color && !no_color_env && stdout().is_terminal()
}

fn terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(RenderOptions::DEFAULT_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        RenderOptions::DEFAULT_WIDTH
    }
}
