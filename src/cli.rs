//! CLI argument definitions for fixlint.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fixlint")]
#[command(version)]
#[command(about = "Validate learning-portal test fixture data", long_about = None)]
#[command(
    after_help = "EXIT CODES:\n    0    all entities valid\n    1    any entity invalid, or the fixture could not be loaded"
)]
pub struct Cli {
    /// Fixture file to validate (JSON with Members/Courses/Students arrays)
    pub file: PathBuf,

    /// Print only the per-entity summary
    #[arg(short, long)]
    pub quiet: bool,
}
