//! Matching engine configuration.
//!
//! Every tunable of the engine lives here: the gatekeeper vocabulary, the
//! anchor tokens and lookahead window used for numeric extraction, the
//! pass/fail score weight, and the match scores reported per outcome.
//! `MatchingConfig::default()` reproduces the stock behaviour; a JSON file may
//! override any subset of fields.
//!
//! ```json
//! {
//!   "window": 30,
//!   "anchors": { "viscosity": ["viscosity", "cp", "mpa"] },
//!   "score_weight": 50
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::requirements::RequirementField;

/// Keywords whose presence marks a document as a technical specification.
pub const DEFAULT_GATEKEEPER_KEYWORDS: &[&str] = &[
    "viscosity",
    "salt spray",
    "corrosion",
    "coating",
    "paint",
    "epoxy",
    "technical specifications",
];

pub const DEFAULT_VISCOSITY_ANCHORS: &[&str] = &["viscosity", "cp"];

pub const DEFAULT_SALT_SPRAY_ANCHORS: &[&str] = &["salt", "spray", "corrosion", "hours"];

/// Characters allowed between an anchor token and its number.
pub const DEFAULT_WINDOW: usize = 20;

/// Upper bound on the window; keeps compiled patterns small.
pub const MAX_WINDOW: usize = 1_000;

/// Points added per satisfied field and subtracted per violated one.
pub const DEFAULT_SCORE_WEIGHT: i64 = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read matching config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed matching config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid matching config: {0}")]
    Invalid(String),

    #[error("invalid extraction pattern for {field}: {source}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Anchor tokens per requirement field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAnchors {
    pub viscosity: Vec<String>,
    pub salt_spray_hours: Vec<String>,
}

impl FieldAnchors {
    pub fn for_field(&self, field: RequirementField) -> &[String] {
        match field {
            RequirementField::Viscosity => &self.viscosity,
            RequirementField::SaltSprayHours => &self.salt_spray_hours,
        }
    }
}

impl Default for FieldAnchors {
    fn default() -> Self {
        Self {
            viscosity: to_owned(DEFAULT_VISCOSITY_ANCHORS),
            salt_spray_hours: to_owned(DEFAULT_SALT_SPRAY_ANCHORS),
        }
    }
}

/// Match score reported for each decision outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchScores {
    pub success: i64,
    pub partial: i64,
    pub rejected: i64,
}

impl Default for MatchScores {
    fn default() -> Self {
        Self {
            success: 100,
            partial: 50,
            rejected: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub gatekeeper_keywords: Vec<String>,
    pub anchors: FieldAnchors,
    pub window: usize,
    pub case_insensitive: bool,
    pub score_weight: i64,
    pub match_scores: MatchScores,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            gatekeeper_keywords: to_owned(DEFAULT_GATEKEEPER_KEYWORDS),
            anchors: FieldAnchors::default(),
            window: DEFAULT_WINDOW,
            case_insensitive: true,
            score_weight: DEFAULT_SCORE_WEIGHT,
            match_scores: MatchScores::default(),
        }
    }
}

impl MatchingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_score_weight(mut self, score_weight: i64) -> Self {
        self.score_weight = score_weight;
        self
    }

    pub fn with_gatekeeper_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gatekeeper_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_anchors(mut self, anchors: FieldAnchors) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gatekeeper_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "gatekeeper_keywords must contain at least one non-empty keyword".to_string(),
            ));
        }

        for field in RequirementField::ALL {
            if self.anchors.for_field(field).iter().all(|a| a.is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "anchors.{} must contain at least one non-empty token",
                    field.key()
                )));
            }
        }

        if self.window > MAX_WINDOW {
            return Err(ConfigError::Invalid(format!(
                "window must be <= {MAX_WINDOW}, got {}",
                self.window
            )));
        }

        if self.score_weight <= 0 {
            return Err(ConfigError::Invalid(
                "score_weight must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
