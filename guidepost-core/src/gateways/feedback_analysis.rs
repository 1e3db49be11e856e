use guidepost_entities::rating::SentimentScore;
use thiserror::Error;

/// Feedback document image passed through to the analysis provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub base64_data: String,
    pub media_type: String,
}

/// Collected feedback material for one completed tour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub texts: Vec<String>,
    pub images: Vec<InlineImage>,
}

impl AnalysisRequest {
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.images.is_empty()
    }
}

/// Structured result of the generative-model feedback analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackAnalysis {
    pub summary: String,
    pub sentiment_score: SentimentScore,
    pub strengths: Vec<String>,
    pub improvements: String,
    pub red_flags: bool,
}

/// Terminal for the current request. Never retried automatically;
/// the caller has to re-trigger the analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("The analysis provider could not be reached: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("The analysis response is not valid JSON: {0}")]
    MalformedResponse(#[source] anyhow::Error),
}

/// Stateless, idempotent (modulo model nondeterminism) outbound call
/// to the analysis provider.
pub trait FeedbackAnalysisGateway {
    fn analyze(&self, request: &AnalysisRequest) -> Result<FeedbackAnalysis, AnalysisError>;
}
