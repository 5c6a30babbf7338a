use rfpmatch_core::AnalysisId;

/// Per-request analysis context.
///
/// Inserted by [`crate::middleware::analysis_context_middleware`]; immutable for
/// the lifetime of the request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnalysisContext {
    analysis_id: AnalysisId,
}

impl AnalysisContext {
    pub fn new(analysis_id: AnalysisId) -> Self {
        Self { analysis_id }
    }

    pub fn analysis_id(&self) -> AnalysisId {
        self.analysis_id
    }
}
