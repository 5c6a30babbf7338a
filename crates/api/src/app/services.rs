use rfpmatch_catalog::Catalog;
use rfpmatch_core::AnalysisId;
use rfpmatch_matching::{
    AnalysisPipeline, ConfigError, DecisionRecord, DefaultTextExtractor, Document, MatchingConfig,
    TextExtractor,
};

use crate::config::ApiConfig;

/// Long-lived, read-only services shared by all requests.
pub struct AppServices {
    pipeline: AnalysisPipeline,
    reader: Box<dyn TextExtractor>,
}

impl AppServices {
    pub fn new(pipeline: AnalysisPipeline, reader: Box<dyn TextExtractor>) -> Self {
        Self { pipeline, reader }
    }

    /// Load the catalog (degrading to empty) and the matching config.
    ///
    /// A broken matching config is a startup failure; a broken catalog is not.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        let matching = match &config.matching_config_path {
            Some(path) => MatchingConfig::from_json_file(path)?,
            None => MatchingConfig::default(),
        };
        let catalog = Catalog::load_or_empty(&config.catalog_path);
        Self::with_catalog(catalog, &matching)
    }

    pub fn with_catalog(catalog: Catalog, matching: &MatchingConfig) -> Result<Self, ConfigError> {
        let pipeline = AnalysisPipeline::new(catalog, matching)?;
        Ok(Self::new(pipeline, Box::new(DefaultTextExtractor)))
    }

    pub fn pipeline(&self) -> &AnalysisPipeline {
        &self.pipeline
    }

    pub fn catalog(&self) -> &Catalog {
        self.pipeline.catalog()
    }

    pub fn analyze(&self, id: AnalysisId, document: &Document) -> DecisionRecord {
        self.pipeline.analyze_document(id, document, self.reader.as_ref())
    }

    /// Record returned when the analysis task itself died.
    pub fn aborted(&self, detail: impl std::fmt::Display) -> DecisionRecord {
        DecisionRecord::unreadable(detail, self.pipeline.scores())
    }

    /// Record returned when the upload carried no document at all.
    pub fn missing_document(&self) -> DecisionRecord {
        DecisionRecord::unreadable("no `file` field in upload", self.pipeline.scores())
    }
}
