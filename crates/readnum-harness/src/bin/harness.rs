//! CLI entrypoint for the readnum conformance harness.

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use readnum_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for readnum.
#[derive(Debug, Parser)]
#[command(name = "readnum-harness")]
#[command(about = "Conformance testing harness for readnum")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the implementation against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a .json sibling is also written).
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Interactively read one value of the given kind from stdin.
    Demo {
        /// Numeric kind (i16, u16, i32, u32, i64, u64, i128, u128, f32, f64).
        #[arg(long, default_value = "i32")]
        kind: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify { fixture, report } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let mut fixture_sets = Vec::new();
            let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(&fixture)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect();
            fixture_paths.sort();

            for path in fixture_paths {
                match FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let runner = TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(runner.run(set));
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("readnum Conformance Report"),
                campaign: runner.campaign.clone(),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Demo { kind } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let value = read_demo_value(&kind, &mut input)
                .ok_or_else(|| format!("Unsupported kind '{kind}'"))?;
            println!("{value}");
        }
    }

    Ok(())
}

fn read_demo_value<R: BufRead>(kind: &str, input: &mut R) -> Option<String> {
    let value = match kind {
        "i16" => readnum_core::read_scalar::<i16, _>(input).to_string(),
        "u16" => readnum_core::read_scalar::<u16, _>(input).to_string(),
        "i32" => readnum_core::read_scalar::<i32, _>(input).to_string(),
        "u32" => readnum_core::read_scalar::<u32, _>(input).to_string(),
        "i64" => readnum_core::read_scalar::<i64, _>(input).to_string(),
        "u64" => readnum_core::read_scalar::<u64, _>(input).to_string(),
        "i128" => readnum_core::read_scalar::<i128, _>(input).to_string(),
        "u128" => readnum_core::read_scalar::<u128, _>(input).to_string(),
        "f32" => readnum_core::read_scalar::<f32, _>(input).to_string(),
        "f64" => readnum_core::read_scalar::<f64, _>(input).to_string(),
        _ => return None,
    };
    Some(value)
}
