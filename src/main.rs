use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::to_string_pretty;
use std::error::Error;
use std::fs;
use std::path::Path;

use goldrun::cli::Cli;
use goldrun::models::{Output, RunInfo, Summary};
use goldrun::suite::{SuiteConfig, copy_corpus, default_input_dir, discover, run_suite};
use goldrun::utils::progress_log::ProgressLogger;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32, Box<dyn Error>> {
    let cli = Cli::parse();
    let progress_bar = create_progress_bar();
    init_logging(progress_bar.clone())?;
    let start_time = Utc::now();

    let mut input_dir = cli.input_dir.clone().unwrap_or_else(default_input_dir);
    if let Some(dest_root) = &cli.copy_to {
        input_dir = copy_corpus(&input_dir, dest_root)?;
    }

    let config = SuiteConfig {
        executable: cli.executable.clone(),
        input_dir,
        with_json_checker: cli.with_json_checker,
        memory_check: cli.valgrind,
        json_writer: cli.json_writer.clone(),
    };

    let cases = discover(&config.input_dir, config.with_json_checker)?;
    progress_bar.set_length(cases.len() as u64);
    let summary = run_suite(&config, &cases, &progress_bar);
    progress_bar.finish_and_clear();

    println!("{}", summary.render());

    if let Some(report_path) = &cli.json_report {
        let end_time = Utc::now();
        let output = create_output(start_time, end_time, &config, &summary);
        write_output(report_path, &output)?;
        println!("JSON report written to {}", report_path.display());
    }

    Ok(summary.exit_code())
}

fn init_logging(progress_bar: ProgressBar) -> Result<(), Box<dyn Error>> {
    let logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .build();
    ProgressLogger::new(logger, progress_bar).try_init()?;
    Ok(())
}

fn create_progress_bar() -> ProgressBar {
    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cases run ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress_bar
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    config: &SuiteConfig,
    summary: &Summary,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let run = RunInfo {
        executable: config.executable.display().to_string(),
        json_writer: config.json_writer.clone(),
        input_dir: config.input_dir.display().to_string(),
        with_json_checker: config.with_json_checker,
        memory_check: config.memory_check,
    };

    Output::new(
        start_time.to_rfc3339(),
        end_time.to_rfc3339(),
        duration,
        run,
        summary,
    )
}

fn write_output(report_path: &Path, output: &Output) -> anyhow::Result<()> {
    let json_output = to_string_pretty(output)?;
    fs::write(report_path, json_output)
        .with_context(|| format!("Failed to write JSON report to {:?}", report_path))
}
