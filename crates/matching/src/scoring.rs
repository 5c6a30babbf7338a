use serde::{Deserialize, Serialize};

use rfpmatch_catalog::Product;

use crate::config::DEFAULT_SCORE_WEIGHT;
use crate::requirements::RequirementSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonStatus {
    Pass,
    Fail,
}

/// One line of the audit trail attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonEntry {
    pub status: ReasonStatus,
    pub msg: String,
}

impl ReasonEntry {
    pub fn pass(msg: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::Pass,
            msg: msg.into(),
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::Fail,
            msg: msg.into(),
        }
    }

    pub fn is_fail(&self) -> bool {
        self.status == ReasonStatus::Fail
    }
}

/// A catalog product evaluated against one requirement set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: i64,
    pub compliant: bool,
    pub reasons: Vec<ReasonEntry>,
}

/// Scores products field by field: `+weight` when the product meets the
/// requirement, `-weight` (and non-compliance) when it does not. Fields the
/// document does not state are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceScorer {
    weight: i64,
}

impl ComplianceScorer {
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn score<'a>(&self, product: &'a Product, req: &RequirementSet) -> ScoredCandidate<'a> {
        let mut score = 0;
        let mut compliant = true;
        let mut reasons = Vec::new();

        for (field, required) in req.stated() {
            let actual = field.spec_value(product.specs());
            if actual >= required as f64 {
                score += self.weight;
                reasons.push(ReasonEntry::pass(format!(
                    "{}: {actual} >= {required}",
                    field.label()
                )));
            } else {
                score -= self.weight;
                compliant = false;
                reasons.push(ReasonEntry::fail(format!(
                    "{}: {actual} < {required}",
                    field.label()
                )));
            }
        }

        ScoredCandidate {
            product,
            score,
            compliant,
            reasons,
        }
    }
}

impl Default for ComplianceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_WEIGHT)
    }
}
