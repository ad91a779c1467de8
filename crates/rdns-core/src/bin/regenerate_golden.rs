//! Rewrites `tests/golden/*/expected.json` from each set's `cases.json`.
//!
//! Run from the workspace root after an intentional change to parser output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rdns_core::GoldenCases;

const GOLDEN_ROOT: &str = "tests/golden";
const CASES_FILE: &str = "cases.json";
const EXPECTED_FILE: &str = "expected.json";

fn main() -> ExitCode {
    let sets = match fixture_sets(Path::new(GOLDEN_ROOT)) {
        Ok(sets) => sets,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    let mut failed = false;
    for set in &sets {
        if let Err(err) = regenerate(set) {
            eprintln!("error: {err}");
            failed = true;
        }
    }
    eprintln!("regenerated {} fixture set(s)", sets.len());

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Fixture directories holding a case file, in name order.
fn fixture_sets(root: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(root).map_err(|err| format!("{}: {err}", root.display()))?;
    let mut sets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.join(CASES_FILE).is_file())
        .collect();
    sets.sort();
    Ok(sets)
}

fn regenerate(set: &Path) -> Result<(), String> {
    let cases_path = set.join(CASES_FILE);
    let raw = fs::read_to_string(&cases_path)
        .map_err(|err| format!("{}: {err}", cases_path.display()))?;
    let cases: GoldenCases = serde_json::from_str(&raw)
        .map_err(|err| format!("{}: invalid case file: {err}", cases_path.display()))?;

    let json = serde_json::to_string_pretty(&cases.outcomes())
        .map_err(|err| format!("{}: {err}", set.display()))?;
    let expected_path = set.join(EXPECTED_FILE);
    fs::write(&expected_path, json + "\n")
        .map_err(|err| format!("{}: {err}", expected_path.display()))
}
