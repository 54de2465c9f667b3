use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::Error;
use crate::scenario::load_scenario;
use crate::validation::{validate_scenario, Severity, ValidationIssue};

pub struct ValidateConfig {
    pub scenario: PathBuf,
    pub strict: bool,
    pub json: bool,
}

/// Errors always fail validation; warnings only fail in strict mode
pub fn is_failure(issues: &[ValidationIssue], strict: bool) -> bool {
    issues
        .iter()
        .any(|issue| strict || issue.severity == Severity::Error)
}

pub fn validate_scenario_file(config: ValidateConfig) -> Result<()> {
    let scenario = load_scenario(&config.scenario)
        .with_context(|| format!("Failed to load scenario {}", config.scenario.display()))?;
    let issues = validate_scenario(&scenario);
    log::debug!(
        "{} issue(s) in {}",
        issues.len(),
        config.scenario.display()
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        print_issues(&issues);
    }

    if is_failure(&issues, config.strict) {
        return Err(Error::Validation(format!(
            "{} issue(s) in {}",
            issues.len(),
            config.scenario.display()
        ))
        .into());
    }
    Ok(())
}

fn print_issues(issues: &[ValidationIssue]) {
    if issues.is_empty() {
        println!("[OK] Scenario looks plausible");
        return;
    }
    for issue in issues {
        println!("{issue}");
    }
}
