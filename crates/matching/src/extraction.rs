//! Requirement extraction from unstructured document text.
//!
//! Three steps, each able to stop the analysis:
//! 1. Gatekeeper: the lower-cased text must mention at least one domain keyword.
//! 2. Numeric search: per field, the leftmost anchor token followed within
//!    `window` characters (line breaks included) by a decimal integer.
//! 3. Completeness: at least one field must have been found.
//!
//! Patterns are compiled once from [`MatchingConfig`] and reused for every
//! request; the extractor holds no per-request state.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::config::{ConfigError, MatchingConfig};
use crate::requirements::{RequirementField, RequirementSet};

/// Why a document was not turned into a requirement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No gatekeeper keyword present.
    #[error("document lacks technical vocabulary")]
    NotASpecDocument,

    /// Keywords present, but no field-anchored number found.
    #[error("no numeric requirements found")]
    NoNumericRequirements,
}

impl Rejection {
    pub fn reason(self) -> &'static str {
        match self {
            Rejection::NotASpecDocument => "not-a-spec-document",
            Rejection::NoNumericRequirements => "no-numeric-requirements",
        }
    }
}

#[derive(Debug, Clone)]
struct FieldPattern {
    field: RequirementField,
    regex: Regex,
}

#[derive(Debug, Clone)]
pub struct RequirementExtractor {
    keywords: Vec<String>,
    patterns: Vec<FieldPattern>,
}

impl RequirementExtractor {
    pub fn new(config: &MatchingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let keywords = config
            .gatekeeper_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let patterns = RequirementField::ALL
            .into_iter()
            .map(|field| {
                compile_field_pattern(
                    config.anchors.for_field(field),
                    config.window,
                    config.case_insensitive,
                )
                .map(|regex| FieldPattern { field, regex })
                .map_err(|source| ConfigError::Pattern {
                    field: field.key(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { keywords, patterns })
    }

    pub fn extract(&self, text: &str) -> Result<RequirementSet, Rejection> {
        if !self.passes_gatekeeper(text) {
            return Err(Rejection::NotASpecDocument);
        }

        let mut req = RequirementSet::default();
        for pattern in &self.patterns {
            if let Some(value) = find_anchored_number(&pattern.regex, text) {
                req.set(pattern.field, value);
            }
        }

        if req.is_empty() {
            return Err(Rejection::NoNumericRequirements);
        }
        Ok(req)
    }

    pub fn passes_gatekeeper(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// `(?:a|b|...)` then a lazy window of at most `window` characters, then the
/// first run of ASCII digits.
fn compile_field_pattern(
    anchors: &[String],
    window: usize,
    case_insensitive: bool,
) -> Result<Regex, regex::Error> {
    let alternation = anchors
        .iter()
        .filter(|a| !a.is_empty())
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&format!("(?:{alternation}).{{0,{window}}}?([0-9]+)"))
        .case_insensitive(case_insensitive)
        .dot_matches_new_line(true)
        .build()
}

fn find_anchored_number(regex: &Regex, text: &str) -> Option<u64> {
    let digits = regex.captures(text)?.get(1)?.as_str();
    // Digit runs too long for u64 read as an unattainable requirement.
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}
