// ABOUTME: Main entry point for the termpix terminal image viewer
// ABOUTME: Wires decoding, terminal geometry and config into a single rendering pass

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;
use termpix_cli::cli::Cli;
use termpix_cli::cli_output::CliOutput;
use termpix_cli::completions::CompletionGenerator;
use termpix_cli::config::Config;
use termpix_cli::constants::{env, messages};
use termpix_cli::decode::load_image;
use termpix_cli::terminal::{self, CrosstermGeometry, GeometryTracker};
use termpix_core::{framing_lines, render_pass, RenderError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let allow_color = !cli.no_color && std::env::var_os(env::NO_COLOR).is_none();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => return report_error(&CliOutput::new(allow_color), &e),
    };
    let output = CliOutput::new(allow_color && config.color_enabled());

    match run(&cli, &config, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&output, &e),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli, config: &Config, output: &CliOutput) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        return CompletionGenerator::new().generate(shell, &mut cmd, &mut io::stdout());
    }

    let path = cli
        .image
        .as_deref()
        .ok_or_else(|| anyhow!("No image file given"))?;
    let image = load_image(path)?;

    let mut geometry = GeometryTracker::new(CrosstermGeometry, config.fallback_size());
    let mut size = terminal::usable(geometry.current(), config.reserve_rows());
    if let Some(columns) = cli.columns {
        size.columns = columns;
    }
    let height = cli.height.or(config.height);

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());

    if let (Some(height), true) = (cli.height, is_terminal) {
        let lines = u16::try_from(framing_lines(height)).unwrap_or(u16::MAX);
        terminal::reserve_framing(&mut out, lines.min(size.rows))?;
    }

    let report = render_pass(&image.as_raw(), size, height, &mut out)?;
    out.flush()?;

    if cli.verbose {
        output.info(&format!(
            "Rendered {}x{} image as {}x{} cells",
            report.source_width, report.source_height, report.target.width, report.target.height
        ));
    }

    Ok(())
}

fn report_error(output: &CliOutput, error: &anyhow::Error) -> ExitCode {
    output.error(&format!("{:#}", error));
    if let Some(help) = error
        .downcast_ref::<RenderError>()
        .and_then(RenderError::help_text)
    {
        output.hint(help);
    }
    output.hint(messages::HELP_HINT);
    ExitCode::FAILURE
}
