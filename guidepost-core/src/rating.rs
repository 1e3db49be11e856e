use guidepost_entities::{guide::*, previous_tour::*, rating::*, review::*};

pub trait Rated {
    type Rating;

    fn avg_rating(&self, _: &[Self::Rating]) -> Option<AvgRating>;
}

/// A guide's public average: mean of all performance-review ratings,
/// rounded to one decimal place, minus the accumulated criticism
/// penalty, never below 1.0.
impl Rated for Guide {
    type Rating = GuidePerformanceReview;

    fn avg_rating(&self, reviews: &[GuidePerformanceReview]) -> Option<AvgRating> {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.guide_id == self.id).count()
        );
        let avg = reviews
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, r| {
                acc += r.rating;
                acc
            })
            .build()?;
        Some(apply_penalty(avg, self.rating_penalty))
    }
}

impl Rated for PreviousTour {
    type Rating = PreviousTourFeedback;

    fn avg_rating(&self, feedback: &[PreviousTourFeedback]) -> Option<AvgRating> {
        debug_assert_eq!(
            feedback.len(),
            feedback
                .iter()
                .filter(|f| f.previous_tour_id == self.id)
                .count()
        );
        feedback
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, f| {
                acc += f.rating;
                acc
            })
            .build()
    }
}

pub fn apply_penalty(avg: AvgRating, penalty: RatingPenalty) -> AvgRating {
    StarRating::new(f64::from(avg) - penalty.as_stars())
        .rounded()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidepost_entities::{builders::*, email::EmailAddress, id::Id, time::Timestamp};

    fn new_review(id: &str, guide_id: &str, rating: f64) -> GuidePerformanceReview {
        let rating = StarRating::new(rating);
        GuidePerformanceReview {
            id: id.into(),
            previous_tour_id: Id::new(),
            guide_id: guide_id.into(),
            summary: "solid work".into(),
            strengths: vec![],
            improvements: "".into(),
            sentiment_score: rating.into(),
            rating,
            red_flags: false,
            tour_name: "Old Town Walk".into(),
            tour_location: "Lisbon".into(),
            tour_date: Timestamp::from_secs(0),
            created_at: Timestamp::from_secs(0),
        }
    }

    fn new_feedback(id: &str, previous_tour_id: &str, rating: f64) -> PreviousTourFeedback {
        PreviousTourFeedback {
            id: id.into(),
            previous_tour_id: previous_tour_id.into(),
            author_email: EmailAddress::new_unchecked("traveler@example.com".into()),
            rating: StarRating::new(rating),
            text: "blubb".into(),
            created_at: Timestamp::from_secs(0),
        }
    }

    #[test]
    fn guide_avg_rating() {
        let guide = Guide::build().id("g").finish();
        let reviews = [
            new_review("1", "g", 4.0),
            new_review("2", "g", 5.0),
            new_review("3", "g", 3.0),
        ];
        assert_eq!(guide.avg_rating(&reviews), Some(4.0.into()));
        assert_eq!(guide.avg_rating(&[]), None);
    }

    #[test]
    fn guide_avg_rating_with_penalty() {
        let guide = Guide::build().id("g").rating_penalty(0.3).finish();
        let reviews = [new_review("1", "g", 4.0), new_review("2", "g", 5.0)];
        // (4.0 + 5.0) / 2 = 4.5, minus 0.3
        assert_eq!(guide.avg_rating(&reviews), Some(4.2.into()));
    }

    #[test]
    fn guide_avg_rating_never_below_one() {
        let guide = Guide::build().id("g").rating_penalty(2.5).finish();
        let reviews = [new_review("1", "g", 1.0), new_review("2", "g", 2.0)];
        assert_eq!(guide.avg_rating(&reviews), Some(1.0.into()));
    }

    #[test]
    fn previous_tour_avg_rating() {
        let previous_tour = PreviousTour::build().id("p").finish();
        let feedback = [
            new_feedback("1", "p", 5.0),
            new_feedback("2", "p", 4.0),
            new_feedback("3", "p", 4.0),
        ];
        // 13 / 3 = 4.333... -> 4.3
        assert_eq!(previous_tour.avg_rating(&feedback), Some(4.3.into()));
        assert_eq!(previous_tour.avg_rating(&[]), None);
    }
}
