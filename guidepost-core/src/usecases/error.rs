use crate::{
    gateways::feedback_analysis::AnalysisError,
    repositories,
    util::validate::{GuideProfileInvalidation, TourInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Validation (schema-level, mapped to a field -> message entry)
    #[error("The name is invalid")]
    Name,
    #[error("The school is invalid")]
    School,
    #[error("The group size is invalid")]
    GroupSize,
    #[error("Duplicate itinerary sequence index")]
    ItinerarySequence,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid tax id")]
    TaxId,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Severity out of range")]
    Severity,
    #[error("Empty feedback text")]
    EmptyFeedback,
    #[error("Empty post body")]
    EmptyPost,
    #[error("Empty comment")]
    EmptyComment,
    #[error("The reason is too short")]
    ReasonTooShort,
    #[error("The response is too short")]
    ResponseTooShort,
    #[error("The criticism reason is too short")]
    CriticismReasonTooShort,
    #[error("There is no feedback to analyze")]
    NothingToAnalyze,

    // Conflicts (uniqueness or state-machine violations)
    #[error("The user already exists")]
    UserExists,
    #[error("The guide profile already exists")]
    GuideProfileExists,
    #[error("The organization profile already exists")]
    OrganizationProfileExists,
    #[error("A performance review for this tour already exists")]
    DuplicatePerformanceReview,
    #[error("A pending leave request for this tour already exists")]
    DuplicatePendingLeaveRequest,
    #[error("Already reviewed")]
    AlreadyReviewed,
    #[error("The leave request has already been resolved")]
    LeaveRequestNotPending,
    #[error("The guide is not assigned to this tour")]
    GuideNotAssigned,
    #[error("The tour is not in a bookable state")]
    TourNotCurrent,

    // Authorization
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// The offending input field for validation errors, used to build
    /// the field -> message map at the API boundary.
    pub const fn field(&self) -> Option<&'static str> {
        use Error::*;
        match self {
            Name => Some("name"),
            School => Some("school"),
            GroupSize => Some("max_group_size"),
            ItinerarySequence => Some("itinerary"),
            EmailAddress => Some("email"),
            Url => Some("url"),
            TaxId => Some("tax_id"),
            RatingValue => Some("rating"),
            Severity => Some("severity"),
            EmptyFeedback | EmptyComment => Some("text"),
            EmptyPost => Some("body"),
            ReasonTooShort | CriticismReasonTooShort => Some("reason"),
            ResponseTooShort => Some("response"),
            _ => None,
        }
    }
}

impl From<guidepost_entities::organization::InvalidTaxId> for Error {
    fn from(_: guidepost_entities::organization::InvalidTaxId) -> Self {
        Self::TaxId
    }
}

impl From<guidepost_entities::leave::InvalidSeverity> for Error {
    fn from(_: guidepost_entities::leave::InvalidSeverity) -> Self {
        Self::Severity
    }
}

impl From<guidepost_entities::email::EmailAddressParseError> for Error {
    fn from(_: guidepost_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<guidepost_entities::url::ParseError> for Error {
    fn from(_: guidepost_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<TourInvalidation> for Error {
    fn from(err: TourInvalidation) -> Self {
        match err {
            TourInvalidation::Name => Self::Name,
            TourInvalidation::GroupSize => Self::GroupSize,
            TourInvalidation::ItinerarySequence => Self::ItinerarySequence,
        }
    }
}

impl From<GuideProfileInvalidation> for Error {
    fn from(err: GuideProfileInvalidation) -> Self {
        match err {
            GuideProfileInvalidation::School => Self::School,
        }
    }
}
