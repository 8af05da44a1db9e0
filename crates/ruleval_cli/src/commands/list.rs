use anyhow::Result;
use colored::*;
use ruleval_parser::PRESENT;
use ruleval_validator::ValidatorFactory;

pub fn execute(format: &str) -> Result<()> {
    let available = ValidatorFactory::available();

    if format == "json" {
        let mut identifiers = vec![PRESENT];
        identifiers.extend_from_slice(available);
        println!("{}", serde_json::to_string_pretty(&identifiers)?);
        return Ok(());
    }

    println!("{}", "Validation identifiers:".bold());
    println!("  {} (built in)", PRESENT);
    for identifier in available {
        println!("  {}", identifier);
    }

    Ok(())
}
