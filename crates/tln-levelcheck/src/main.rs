mod cli;

use std::path::Path;
use std::process::ExitCode;

use tln_levels::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("levelcheck=warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "levelcheck=warn".parse().unwrap()),
            ),
        )
        .init();

    let mut failures = 0usize;
    for path in &args.paths {
        tracing::debug!("checking {}", path.display());
        if !check_file(path) {
            failures += 1;
        }
    }

    if failures > 0 {
        tracing::warn!(
            "{failures} of {} level file(s) failed validation",
            args.paths.len()
        );
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Check one level file, printing a line per problem. Returns true when valid.
///
/// Parse-level problems (unreadable file, malformed JSON, top-level value not
/// an object) are reported as such; schema violations are printed one per
/// line with the offending field name.
fn check_file(path: &Path) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            println!("{}: cannot read: {e}", path.display());
            return false;
        }
    };

    let record: serde_json::Value = match serde_json::from_str(&content) {
        Ok(record) => record,
        Err(e) => {
            println!("{}: malformed JSON: {e}", path.display());
            return false;
        }
    };

    let report = match tln_levels::validate(&record) {
        Ok(report) => report,
        Err(e) => {
            println!("{}: {e}", path.display());
            return false;
        }
    };

    if !report.is_valid() {
        for violation in report.violations() {
            println!(
                "{}: {}: {}",
                path.display(),
                violation.field,
                violation.message
            );
        }
        return false;
    }

    match serde_json::from_value::<Level>(record) {
        Ok(level) => {
            println!("{}: ok ({})", path.display(), level.name);
            true
        }
        Err(e) => {
            println!("{}: {e}", path.display());
            false
        }
    }
}
