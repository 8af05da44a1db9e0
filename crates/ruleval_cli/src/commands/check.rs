use anyhow::{Context, Result, bail};
use ruleval_parser::{parse_file, parse_rule};
use ruleval_validator::ValidatorFactory;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

/// An identifier that neither `present` nor the catalogue provides.
struct UnknownIdentifier {
    property: String,
    identifier: String,
}

pub fn execute(rules_path: &str, format: &str) -> Result<()> {
    info!("Checking rule document: {}", rules_path);

    let path = Path::new(rules_path);
    let document = parse_file(path)
        .with_context(|| format!("Failed to parse rule document: {}", rules_path))?;

    let available = ValidatorFactory::available();
    let mut summary = Vec::new();
    let mut unknown = Vec::new();

    for (property, spec) in document.rules.iter() {
        let invocations = parse_rule(spec);
        for invocation in &invocations {
            if !invocation.is_presence() && !available.contains(&invocation.identifier()) {
                unknown.push(UnknownIdentifier {
                    property: property.to_string(),
                    identifier: invocation.identifier().to_string(),
                });
            }
        }

        let identifiers: Vec<&str> = invocations.iter().map(|i| i.identifier()).collect();
        summary.push((property, identifiers.join(", ")));
    }

    if format == "json" {
        let rules: serde_json::Map<String, serde_json::Value> = summary
            .iter()
            .map(|(property, identifiers)| (property.to_string(), json!(identifiers)))
            .collect();
        let output = json!({
            "valid": unknown.is_empty(),
            "strategy": document.strategy.unwrap_or_default(),
            "rules": rules,
            "unknown": unknown
                .iter()
                .map(|u| json!({"property": u.property, "identifier": u.identifier}))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\nRule Document Summary:");
        println!(
            "  Strategy: {}",
            document
                .strategy
                .map(|s| s.to_string())
                .unwrap_or_else(|| "default (RUN_ALL_VALIDATIONS)".to_string())
        );
        println!("  Rules:    {}", document.rules.len());
        for (property, identifiers) in &summary {
            println!("    {}: {}", property, identifiers);
        }
        println!();

        for u in &unknown {
            output::print_error(&format!(
                "Unrecognized validation identifier '{}' on property '{}'",
                u.identifier, u.property
            ));
        }
    }

    if !unknown.is_empty() {
        bail!(
            "Rule document {} uses {} unrecognized identifier(s)",
            rules_path,
            unknown.len()
        );
    }

    if format != "json" {
        output::print_success("Rule document is valid");
    }

    Ok(())
}
