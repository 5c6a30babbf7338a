use rfpmatch_catalog::Catalog;
use rfpmatch_core::AnalysisId;

use crate::config::{ConfigError, MatchScores, MatchingConfig};
use crate::decision::DecisionRecord;
use crate::document::{Document, TextExtractor};
use crate::extraction::RequirementExtractor;
use crate::ranking::RankingEngine;
use crate::scoring::ComplianceScorer;

/// End-to-end analysis over an injected, read-only catalog.
///
/// Stateless between requests: `analyze` only reads `self`, so one pipeline can
/// be shared (e.g. behind an `Arc`) by any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    catalog: Catalog,
    extractor: RequirementExtractor,
    ranking: RankingEngine,
    scores: MatchScores,
}

impl AnalysisPipeline {
    pub fn new(catalog: Catalog, config: &MatchingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            catalog,
            extractor: RequirementExtractor::new(config)?,
            ranking: RankingEngine::new(ComplianceScorer::new(config.score_weight)),
            scores: config.match_scores,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scores(&self) -> &MatchScores {
        &self.scores
    }

    /// Analyze already-extracted document text.
    pub fn analyze(&self, text: &str) -> DecisionRecord {
        let id = AnalysisId::new();
        tracing::info!(analysis_id = %id, chars = text.len(), "analysis started");
        self.analyze_text(id, text)
    }

    /// Decode `document` with `reader` and analyze it. Decode failures become an
    /// `error` record before extraction is attempted.
    pub fn analyze_document(
        &self,
        id: AnalysisId,
        document: &Document,
        reader: &dyn TextExtractor,
    ) -> DecisionRecord {
        tracing::info!(
            analysis_id = %id,
            document = document.name(),
            bytes = document.bytes().len(),
            "analysis started"
        );

        match reader.extract_text(document) {
            Ok(text) => self.analyze_text(id, &text),
            Err(e) => {
                tracing::warn!(analysis_id = %id, error = %e, "document read failed");
                DecisionRecord::unreadable(e, &self.scores)
            }
        }
    }

    fn analyze_text(&self, id: AnalysisId, text: &str) -> DecisionRecord {
        let req = match self.extractor.extract(text) {
            Ok(req) => req,
            Err(rejection) => {
                tracing::info!(analysis_id = %id, reason = rejection.reason(), "document rejected");
                return DecisionRecord::rejected(rejection, &self.scores);
            }
        };

        tracing::info!(
            analysis_id = %id,
            requirements = %serde_json::to_string(&req).unwrap_or_default(),
            "requirements extracted"
        );

        if self.catalog.is_empty() {
            tracing::warn!(analysis_id = %id, "catalog is empty; cannot recommend a product");
            return DecisionRecord::empty_catalog(&self.scores);
        }

        let ranked = self.ranking.rank(self.catalog.products(), &req);
        let Some(selection) = self.ranking.select_winner(&ranked) else {
            return DecisionRecord::empty_catalog(&self.scores);
        };

        let record = DecisionRecord::from_selection(selection, &self.scores);
        tracing::info!(
            analysis_id = %id,
            winner = record.recommended_product.name(),
            status = ?record.status,
            match_score = record.match_score,
            "analysis complete"
        );
        record
    }
}
