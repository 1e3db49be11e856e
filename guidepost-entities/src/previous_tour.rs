use crate::{email::*, id::*, rating::*, time::*};

/// Immutable snapshot of a completed tour, the anchor for feedback
/// collection and guide performance reviews.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousTour {
    pub id                  : Id,
    pub organization_id     : Id,
    pub guide_id            : Id,
    // Denormalized from the tour for display without joins.
    pub tour_name           : String,
    pub tour_location       : String,
    pub tour_date           : Timestamp,
    pub completed_at        : Timestamp,
    /// Recomputed on every feedback insert/delete; `None` without feedback.
    pub avg_feedback_rating : Option<AvgRating>,
    pub total_travelers     : u32,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousTourFeedback {
    pub id               : Id,
    pub previous_tour_id : Id,
    pub author_email     : EmailAddress,
    pub rating           : StarRating,
    pub text             : String,
    pub created_at       : Timestamp,
}
