use anyhow::Result;
use colored::*;
use ruleval_core::{Strategy, ValidatorError};
use serde_json::json;

/// Outcome of one `validate` run, ready for printing.
pub struct ValidationReport {
    pub strategy: Strategy,
    pub rule_count: usize,
    /// Failure messages per property, in the order reported by the chain.
    pub errors: Vec<(String, Vec<String>)>,
}

impl ValidationReport {
    pub fn new(strategy: Strategy, rule_count: usize, failures: Option<&ValidatorError>) -> Self {
        let errors = failures
            .map(|chain| chain.errors().into_iter().collect())
            .unwrap_or_default();

        Self {
            strategy,
            rule_count,
            errors,
        }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|(_, messages)| messages.len()).sum()
    }
}

pub fn print_validation_report(report: &ValidationReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (property, messages) in &report.errors {
            println!("  {}:", property.bold());
            for message in messages {
                println!("    - {}", message.red());
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Strategy:       {}", report.strategy);
    println!("  Rules:          {}", report.rule_count);
    println!("  Invalid fields: {}", report.errors.len());
    println!("  Total errors:   {}", report.error_count());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    let errors: serde_json::Map<String, serde_json::Value> = report
        .errors
        .iter()
        .map(|(property, messages)| (property.clone(), json!(messages)))
        .collect();

    let output = json!({
        "passed": report.passed(),
        "strategy": report.strategy,
        "errors": errors,
        "summary": {
            "rule_count": report.rule_count,
            "invalid_fields": report.errors.len(),
            "error_count": report.error_count(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
