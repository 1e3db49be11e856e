use crate::{email::*, id::*, rating::*, time::*};

/// Organization-authored, AI-assisted assessment of a guide's conduct on
/// one completed tour. At most one exists per previous tour.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct GuidePerformanceReview {
    pub id               : Id,
    pub previous_tour_id : Id,
    pub guide_id         : Id,
    pub summary          : String,
    pub strengths        : Vec<String>,
    pub improvements     : String,
    pub sentiment_score  : SentimentScore,
    /// Derived from the sentiment score (score / 20), one decimal place.
    pub rating           : StarRating,
    pub red_flags        : bool,
    // Denormalized tour metadata for display without joins.
    pub tour_name        : String,
    pub tour_location    : String,
    pub tour_date        : Timestamp,
    pub created_at       : Timestamp,
}

/// User-to-user review. One per (author, subject) pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PeerReview {
    pub id            : Id,
    pub author_email  : EmailAddress,
    pub subject_email : EmailAddress,
    pub rating        : StarRating,
    pub text          : String,
    pub created_at    : Timestamp,
}

/// Traveler review of a published tour. One per (author, tour) pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct TourReview {
    pub id           : Id,
    pub author_email : EmailAddress,
    pub tour_id      : Id,
    pub rating       : StarRating,
    pub text         : String,
    pub created_at   : Timestamp,
}
