use crate::{email::*, id::*, rating::*};
use url::Url;

/// Public profile of a tourism student offering guiding services.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub id              : Id,
    pub user_email      : EmailAddress,
    pub school          : String,
    pub description     : String,
    pub certificates    : Vec<String>,
    pub work_experience : Vec<String>,
    pub cv_url          : Option<Url>,
    // Aggregates maintained by the performance-review pipeline.
    pub avg_rating      : Option<AvgRating>,
    pub total_reviews   : u64,
    pub rating_penalty  : RatingPenalty,
}
