//! Parser for ruleval rule specs and rule documents.
//!
//! Two layers live here:
//!
//! - the rule mini-language (`"present|between:1,10"`), see [`parse_rule`];
//! - rule documents and data documents stored as YAML, TOML or JSON files.
//!
//! # Example
//!
//! ```rust
//! use ruleval_core::Strategy;
//! use ruleval_parser::parse_yaml;
//!
//! let yaml = r#"
//! strategy: STOP_AT_FIRST_INVALID_PROPERTY
//! rules:
//!   name: present|not_empty
//!   age: numeric|min:0
//! "#;
//!
//! let document = parse_yaml(yaml).expect("Failed to parse rule document");
//! assert_eq!(document.strategy, Some(Strategy::StopAtFirstInvalidProperty));
//! assert_eq!(document.rules.get("age"), Some("numeric|min:0"));
//! ```

mod rule;

pub use rule::*;

use ruleval_core::{NotAnObject, Record, RuleDocument};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading documents.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// A data document is not an object
    #[error("Invalid data document: {0}")]
    NotAnObject(#[from] NotAnObject),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a rule document from a YAML string.
pub fn parse_yaml(content: &str) -> Result<RuleDocument> {
    let document: RuleDocument = serde_yaml_ng::from_str(content)?;
    Ok(document)
}

/// Parse a rule document from a TOML string.
///
/// # Example
///
/// ```rust
/// use ruleval_parser::parse_toml;
///
/// let toml = r#"
/// [rules]
/// id = "present|numeric"
/// "#;
///
/// let document = parse_toml(toml).unwrap();
/// assert!(document.strategy.is_none());
/// assert_eq!(document.rules.get("id"), Some("present|numeric"));
/// ```
pub fn parse_toml(content: &str) -> Result<RuleDocument> {
    let document: RuleDocument =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(document)
}

/// Parse a rule document from a JSON string.
pub fn parse_json(content: &str) -> Result<RuleDocument> {
    let document: RuleDocument = serde_json::from_str(content)?;
    Ok(document)
}

/// Detect the document format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `DocumentFormat::Yaml`
/// * `.toml` → `DocumentFormat::Toml`
/// * `.json` → `DocumentFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(DocumentFormat::Yaml),
        "toml" => Ok(DocumentFormat::Toml),
        "json" => Ok(DocumentFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule document from a file with automatic format detection.
///
/// ```no_run
/// use ruleval_parser::parse_file;
/// use std::path::Path;
///
/// let document = parse_file(Path::new("rules/user.yml")).unwrap();
/// println!("Loaded {} rules", document.rules.len());
/// ```
pub fn parse_file(path: &Path) -> Result<RuleDocument> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        DocumentFormat::Yaml => parse_yaml(&content),
        DocumentFormat::Toml => parse_toml(&content),
        DocumentFormat::Json => parse_json(&content),
    }
}

/// Parse a data document (the object to validate) in the given format.
pub fn parse_record(content: &str, format: DocumentFormat) -> Result<Record> {
    let value: serde_json::Value = match format {
        DocumentFormat::Yaml => serde_yaml_ng::from_str(content)?,
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?
        }
        DocumentFormat::Json => serde_json::from_str(content)?,
    };

    Ok(Record::try_from(value)?)
}

/// Parse a data document from a file with automatic format detection.
pub fn parse_record_file(path: &Path) -> Result<Record> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_record(&content, format)
}
