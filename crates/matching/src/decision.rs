//! The analysis response: one `DecisionRecord` per document.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "status": "success",
//!   "match_score": 100,
//!   "recommended_product": { "name": "...", "description": "...", "price_per_liter": 10.0, "specs": { ... } },
//!   "financial_impact": "Best market price.",
//!   "reasoning": [{ "status": "pass", "msg": "Viscosity: 120 >= 100" }]
//! }
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use rfpmatch_catalog::Product;

use crate::config::MatchScores;
use crate::extraction::Rejection;
use crate::ranking::{MatchOutcome, Selection};
use crate::scoring::ReasonEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Success,
    Partial,
    Rejected,
    Error,
}

/// Stand-in shown when there is no catalog product to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    InvalidDocument,
    DataMissing,
    NoCatalog,
    UnreadableDocument,
}

impl Placeholder {
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::InvalidDocument => "Invalid Document",
            Placeholder::DataMissing => "Data Missing",
            Placeholder::NoCatalog => "No Catalog",
            Placeholder::UnreadableDocument => "Unreadable Document",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Placeholder::InvalidDocument => {
                "This file does not appear to be a valid technical RFP. No technical keywords found."
            }
            Placeholder::DataMissing => {
                "Technical terms found, but no numeric requirements extracted."
            }
            Placeholder::NoCatalog => "The product catalog is empty or failed to load.",
            Placeholder::UnreadableDocument => "The uploaded file could not be read as text.",
        }
    }
}

/// What the record recommends: a real catalog product or a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendedProduct {
    Catalog(Product),
    Placeholder(Placeholder),
}

impl RecommendedProduct {
    pub fn name(&self) -> &str {
        match self {
            RecommendedProduct::Catalog(p) => p.name(),
            RecommendedProduct::Placeholder(p) => p.name(),
        }
    }
}

impl Serialize for RecommendedProduct {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecommendedProduct::Catalog(product) => product.serialize(serializer),
            RecommendedProduct::Placeholder(placeholder) => {
                let mut s = serializer.serialize_struct("Placeholder", 3)?;
                s.serialize_field("name", placeholder.name())?;
                s.serialize_field("description", placeholder.description())?;
                s.serialize_field("price_per_liter", &0)?;
                s.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecord {
    pub status: DecisionStatus,
    pub match_score: i64,
    pub recommended_product: RecommendedProduct,
    pub financial_impact: String,
    pub reasoning: Vec<ReasonEntry>,
}

impl DecisionRecord {
    pub fn from_selection(selection: Selection<'_>, scores: &MatchScores) -> Self {
        let (status, match_score) = match selection.outcome {
            MatchOutcome::Full => (DecisionStatus::Success, scores.success),
            MatchOutcome::Partial => (DecisionStatus::Partial, scores.partial),
        };

        Self {
            status,
            match_score,
            recommended_product: RecommendedProduct::Catalog(selection.winner.product.clone()),
            financial_impact: selection.financial_impact,
            reasoning: selection.reasoning,
        }
    }

    pub fn rejected(rejection: Rejection, scores: &MatchScores) -> Self {
        let (placeholder, impact, reason) = match rejection {
            Rejection::NotASpecDocument => (
                Placeholder::InvalidDocument,
                "Analysis Aborted",
                "Document lacks required technical keywords (e.g., Viscosity, Coating).",
            ),
            Rejection::NoNumericRequirements => (
                Placeholder::DataMissing,
                "Analysis Failed",
                "Found keywords but could not extract numeric values.",
            ),
        };

        Self {
            status: DecisionStatus::Rejected,
            match_score: scores.rejected,
            recommended_product: RecommendedProduct::Placeholder(placeholder),
            financial_impact: impact.to_string(),
            reasoning: vec![ReasonEntry::fail(reason)],
        }
    }

    pub fn empty_catalog(scores: &MatchScores) -> Self {
        Self::error(
            Placeholder::NoCatalog,
            "No product catalog available to match against.",
            scores,
        )
    }

    pub fn unreadable(detail: impl core::fmt::Display, scores: &MatchScores) -> Self {
        Self::error(
            Placeholder::UnreadableDocument,
            format!("File Read Failed: {detail}"),
            scores,
        )
    }

    fn error(placeholder: Placeholder, reason: impl Into<String>, scores: &MatchScores) -> Self {
        Self {
            status: DecisionStatus::Error,
            match_score: scores.rejected,
            recommended_product: RecommendedProduct::Placeholder(placeholder),
            financial_impact: "Analysis Aborted".to_string(),
            reasoning: vec![ReasonEntry::fail(reason)],
        }
    }
}
