mod cli;

use cli::{Args, CatalogArgs, Command, ReportArgs, RigArgs};
use rigscore::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use rigscore::prelude::*;
use rigscore::shared::error::ExitCode;
use std::process;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
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

fn init_tracing(verbose: bool) {
    let mut env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    if verbose {
        if let Ok(directive) = "rigscore=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            match discover_config(&cwd)? {
                Some(config) => {
                    eprintln!("📋 Auto-discovered config file: {}", CONFIG_FILENAME);
                    Ok(config)
                }
                None => Ok(ConfigFile::default()),
            }
        }
    }
}

fn build_use_case(
    config: &ConfigFile,
) -> Result<HardwareAnalysisUseCase<FileSystemReader, FileSystemReader, StderrProgressReporter>> {
    let use_case = HardwareAnalysisUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    )
    .with_analyzer(config.system_analyzer())
    .with_scorer(config.compatibility_scorer()?);
    Ok(use_case)
}

/// CLI flag first, then the config file, then Markdown
fn resolve_format(report: &ReportArgs, config: &ConfigFile) -> Result<OutputFormat> {
    match report.format {
        Some(format) => Ok(format),
        None => Ok(config.output_format()?.unwrap_or_default()),
    }
}

fn present(report: ReportArgs, content: &str) -> Result<()> {
    let presenter = PresenterFactory::create(PresenterFactory::for_output(report.output));
    presenter.present(content)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let use_case = build_use_case(&config)?;

    match args.command {
        Command::Analyze(CatalogArgs {
            rig,
            catalog,
            report,
        }) => {
            let format = resolve_format(&report, &config)?;
            let response = use_case.analyze_system(AnalysisRequest::new(rig, catalog))?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            let output = FormatterFactory::create(format).format_system_report(&response)?;
            present(report, &output)?;
            Ok(ExitCode::Success)
        }
        Command::Compat(CatalogArgs {
            rig,
            catalog,
            report,
        }) => {
            let format = resolve_format(&report, &config)?;
            let response = use_case.check_compatibility(AnalysisRequest::new(rig, catalog))?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            let output = FormatterFactory::create(format).format_compatibility_report(&response)?;
            present(report, &output)?;

            if response.is_compatible() {
                Ok(ExitCode::Success)
            } else {
                Ok(ExitCode::IncompatibleHardware)
            }
        }
        Command::Bottleneck(RigArgs { rig, report }) => {
            let format = resolve_format(&report, &config)?;
            let response = use_case.detect_bottleneck(BottleneckRequest::new(rig))?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            let output = FormatterFactory::create(format).format_bottleneck_report(&response)?;
            present(report, &output)?;
            Ok(ExitCode::Success)
        }
    }
}
