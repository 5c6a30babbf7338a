//! `rfpmatch-matching`
//!
//! **Responsibility:** turn an RFP document into a product recommendation.
//!
//! - [`extraction`]: gatekeeper + anchored numeric search → [`RequirementSet`].
//! - [`scoring`]: one product against one requirement set → [`ScoredCandidate`].
//! - [`ranking`]: order all candidates, pick a winner, explain the price.
//! - [`pipeline`]: orchestration over an injected [`rfpmatch_catalog::Catalog`],
//!   always ending in a [`DecisionRecord`].
//!
//! Nothing here performs IO beyond optional config-file loading; catalog and
//! transport concerns belong to the callers.

pub mod config;
pub mod decision;
pub mod document;
pub mod extraction;
pub mod pipeline;
pub mod ranking;
pub mod requirements;
pub mod scoring;

pub use config::{ConfigError, FieldAnchors, MatchScores, MatchingConfig};
pub use decision::{DecisionRecord, DecisionStatus, Placeholder, RecommendedProduct};
pub use document::{DefaultTextExtractor, Document, DocumentReadError, TextExtractor};
pub use extraction::{Rejection, RequirementExtractor};
pub use pipeline::AnalysisPipeline;
pub use ranking::{MatchOutcome, RankingEngine, Selection};
pub use requirements::{RequirementField, RequirementSet};
pub use scoring::{ComplianceScorer, ReasonEntry, ReasonStatus, ScoredCandidate};
