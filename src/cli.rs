use clap::Parser;
use std::path::PathBuf;

use crate::suite::DEFAULT_JSON_WRITER;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Executable under test
    pub executable: PathBuf,

    /// Golden corpus directory (defaults to ./data)
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Also run the conformance corpus in ../jsonchecker
    #[arg(long)]
    pub with_json_checker: bool,

    /// Run every invocation under valgrind memcheck
    #[arg(long)]
    pub valgrind: bool,

    /// Writer mode requested from the executable
    #[arg(short = 'w', long, default_value = DEFAULT_JSON_WRITER)]
    pub json_writer: String,

    /// Copy the corpus into this directory and run there
    #[arg(long)]
    pub copy_to: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(long)]
    pub json_report: Option<PathBuf>,
}
