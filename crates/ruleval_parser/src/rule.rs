//! The rule mini-language.
//!
//! ```text
//! rule       := invocation ("|" invocation)*
//! invocation := identifier (":" params)?
//! params     := value ("," value)*
//! ```
//!
//! Parameter values are trimmed and empty ones are dropped. Parsing never fails:
//! whether an identifier exists is decided by the engine when it dispatches.

/// Identifier of the reserved presence rule. Never looked up in a registry.
pub const PRESENT: &str = "present";

/// One parsed check from a rule spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    identifier: String,
    parameters: Vec<String>,
}

impl Invocation {
    /// Creates an invocation.
    pub fn new(identifier: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            parameters,
        }
    }

    /// Identifier of the predicate to run.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Parameters in rule order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Returns true for the reserved `present` rule.
    pub fn is_presence(&self) -> bool {
        self.identifier == PRESENT
    }
}

/// Parses a rule spec into its invocations, in order.
///
/// Whitespace-only segments between `|` separators are skipped, so an empty
/// spec yields no invocations.
///
/// # Example
///
/// ```rust
/// use ruleval_parser::parse_rule;
///
/// let invocations = parse_rule("present|between: 1, 10|numeric");
///
/// assert_eq!(invocations.len(), 3);
/// assert!(invocations[0].is_presence());
/// assert_eq!(invocations[1].identifier(), "between");
/// assert_eq!(invocations[1].parameters(), ["1", "10"]);
/// assert!(invocations[2].parameters().is_empty());
/// ```
pub fn parse_rule(spec: &str) -> Vec<Invocation> {
    spec.split('|')
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_invocation)
        .collect()
}

/// Parses a single `identifier(:params)?` segment.
fn parse_invocation(segment: &str) -> Invocation {
    let (identifier, parameters) = match segment.split_once(':') {
        Some((identifier, raw)) => (identifier, parse_parameters(raw)),
        None => (segment, Vec::new()),
    };

    Invocation::new(identifier.trim(), parameters)
}

fn parse_parameters(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|parameter| !parameter.is_empty())
        .map(str::to_string)
        .collect()
}
