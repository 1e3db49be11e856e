use super::*;

pub fn push_performance_review(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    org: &Organization,
    review: usecases::NewPerformanceReview,
) -> Result<GuidePerformanceReview> {
    let review = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| {
            usecases::push_performance_review(conn, org, review).map_err(|err| {
                warn!("Failed to push performance review: {}", err);
                err
            })
        })
    }?;
    let guide_email = {
        let db = connections.shared()?;
        db.get_guide(review.guide_id.as_str())?.user_email
    };
    notify.notify(NotificationEvent::PerformanceReviewPublished {
        review: &review,
        guide_email: &guide_email,
    });
    Ok(review)
}
