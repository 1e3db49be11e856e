use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone)]
pub struct NewPerformanceReview {
    pub previous_tour_id: String,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: String,
    pub sentiment_score: i64,
    pub red_flags: bool,
}

/// Publishes the performance review for a completed tour and rolls the
/// result up onto the guide's public profile.
///
/// The guide aggregates are recomputed from all stored reviews instead
/// of being maintained incrementally. Review counts per guide stay
/// small, so the O(n) reload is acceptable.
pub fn push_performance_review<R>(
    repo: &R,
    org: &Organization,
    r: NewPerformanceReview,
) -> Result<GuidePerformanceReview>
where
    R: PerformanceReviewRepo + PreviousTourRepo + GuideRepo,
{
    let previous_tour = repo.get_previous_tour(&r.previous_tour_id)?;
    super::authorize_org_owns_previous_tour(org, &previous_tour)?;
    let mut guide = repo.get_guide(previous_tour.guide_id.as_str())?;

    if repo
        .try_get_performance_review_of_previous_tour(previous_tour.id.as_str())?
        .is_some()
    {
        return Err(Error::DuplicatePerformanceReview);
    }

    let sentiment_score = SentimentScore::clamped(r.sentiment_score);
    let review = GuidePerformanceReview {
        id: Id::new(),
        previous_tour_id: previous_tour.id.clone(),
        guide_id: guide.id.clone(),
        summary: r.summary,
        strengths: r.strengths,
        improvements: r.improvements,
        sentiment_score,
        rating: sentiment_score.into(),
        red_flags: r.red_flags,
        tour_name: previous_tour.tour_name.clone(),
        tour_location: previous_tour.tour_location.clone(),
        tour_date: previous_tour.tour_date,
        created_at: Timestamp::now(),
    };
    // The unique index on the previous tour backs up the existence
    // check above against concurrent pushes.
    repo.create_performance_review(&review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::DuplicatePerformanceReview,
        err => Error::Repo(err),
    })?;

    let reviews = repo.performance_reviews_of_guide(guide.id.as_str())?;
    guide.avg_rating = guide.avg_rating(&reviews);
    guide.total_reviews = reviews.len() as u64;
    repo.update_guide(&guide)?;
    log::info!(
        "Published performance review {} for guide {} (avg rating now {:?})",
        review.id,
        guide.id,
        guide.avg_rating
    );
    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};

    fn new_review(previous_tour_id: &str, sentiment_score: i64) -> NewPerformanceReview {
        NewPerformanceReview {
            previous_tour_id: previous_tour_id.into(),
            summary: "Knowledgeable and punctual".into(),
            strengths: vec![
                "local knowledge".into(),
                "punctuality".into(),
                "storytelling".into(),
            ],
            improvements: "Could pace the walking sections better".into(),
            sentiment_score,
            red_flags: false,
        }
    }

    #[test]
    fn push_review_rolls_up_guide_aggregates() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        for (i, score) in [80, 100, 60].into_iter().enumerate() {
            let previous = fixtures::previous_tour(&db, &org, &guide, &format!("p{i}"));
            push_performance_review(&db, &org, new_review(previous.id.as_str(), score)).unwrap();
        }
        let guide = db.get_guide(guide.id.as_str()).unwrap();
        // Ratings 4.0, 5.0, 3.0 -> average 4.0
        assert_eq!(guide.avg_rating, Some(4.0.into()));
        assert_eq!(guide.total_reviews, 3);
    }

    #[test]
    fn rating_is_derived_from_sentiment_score() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let review =
            push_performance_review(&db, &org, new_review(previous.id.as_str(), 87)).unwrap();
        assert_eq!(f64::from(review.rating), 4.4);
    }

    #[test]
    fn out_of_range_sentiment_score_is_clamped() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let review =
            push_performance_review(&db, &org, new_review(previous.id.as_str(), 150)).unwrap();
        assert_eq!(u8::from(review.sentiment_score), 100);
        assert_eq!(f64::from(review.rating), 5.0);
    }

    #[test]
    fn second_review_for_same_previous_tour_conflicts() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        push_performance_review(&db, &org, new_review(previous.id.as_str(), 80)).unwrap();
        let guide_before = db.get_guide(guide.id.as_str()).unwrap();
        assert!(matches!(
            push_performance_review(&db, &org, new_review(previous.id.as_str(), 40)),
            Err(Error::DuplicatePerformanceReview)
        ));
        let guide_after = db.get_guide(guide.id.as_str()).unwrap();
        assert_eq!(guide_before.avg_rating, guide_after.avg_rating);
        assert_eq!(guide_before.total_reviews, guide_after.total_reviews);
    }

    #[test]
    fn foreign_previous_tour_is_forbidden() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let other = fixtures::organization(&db, "other@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        assert!(matches!(
            push_performance_review(&db, &other, new_review(previous.id.as_str(), 80)),
            Err(Error::Forbidden)
        ));
    }
}
