use anyhow::{Context, Result};
use ruleval_core::Strategy;
use ruleval_parser::{parse_file, parse_record_file};
use ruleval_validator::{EngineError, ValidatorFactory};
use std::path::Path;
use tracing::{debug, info};

use crate::output::{self, ValidationReport};

pub fn execute(
    rules_path: &str,
    data_path: &str,
    strategy: Option<Strategy>,
    format: &str,
) -> Result<()> {
    info!("Validating {} against {}", data_path, rules_path);

    let document = parse_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rule document: {}", rules_path))?;
    let record = parse_record_file(Path::new(data_path))
        .with_context(|| format!("Failed to parse data document: {}", data_path))?;

    // The command line wins over the document
    let strategy = strategy.or(document.strategy).unwrap_or_default();
    debug!("Using strategy {}", strategy);

    if format != "json" {
        output::print_info(&format!(
            "Loaded {} rules, {} properties in data",
            document.rules.len(),
            record.len()
        ));
    }

    let validator = ValidatorFactory
        .create_validator(None, strategy)
        .context("Failed to build validator")?;

    let failures = match validator.validate(&record, &document.rules) {
        Ok(()) => None,
        Err(EngineError::Invalid(chain)) => Some(chain),
        Err(other) => {
            return Err(other).with_context(|| {
                format!("Rule document {} could not be applied", rules_path)
            });
        }
    };

    let report = ValidationReport::new(strategy, document.rules.len(), failures.as_ref());
    output::print_validation_report(&report, format)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
