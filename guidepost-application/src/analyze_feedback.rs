use guidepost_core::gateways::feedback_analysis::{
    FeedbackAnalysis, FeedbackAnalysisGateway, InlineImage,
};

use super::*;

/// Read-only flow: the analysis result is returned to the caller and
/// only persisted later if the organization pushes it as a performance
/// review.
pub fn analyze_previous_tour_feedback(
    connections: &sqlite::Connections,
    gateway: &dyn FeedbackAnalysisGateway,
    org: &Organization,
    previous_tour_id: &str,
    extra_texts: Vec<String>,
    images: Vec<InlineImage>,
) -> Result<FeedbackAnalysis> {
    let db = connections.shared()?;
    Ok(usecases::analyze_previous_tour_feedback(
        &db,
        gateway,
        org,
        previous_tour_id,
        extra_texts,
        images,
    )?)
}
