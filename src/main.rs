//! CLI entry point for fixlint.

use anyhow::Result;
use clap::Parser;

use fixlint::cli::Cli;
use fixlint::dataset;
use fixlint::loader;
use fixlint::report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Plain output when piped into a file or another tool.
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let ext = cli
        .file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if !ext.eq_ignore_ascii_case("json") {
        anyhow::bail!(
            "Unsupported fixture format '{}' for {}. Expected a .json file.",
            ext,
            cli.file.display()
        );
    }

    let fixture = loader::load_fixture(&cli.file)?;
    let result = dataset::validate_all(&fixture.members, &fixture.courses, &fixture.students);

    if cli.quiet {
        println!("{}", report::render_summary(&result));
    } else {
        println!("{}", report::render(&result));
    }

    if !result.all_valid() {
        std::process::exit(1);
    }
    Ok(())
}
