use crate::repositories::*;

/// Aggregate trait for connections that provide access to
/// all repositories within a single transaction scope.
pub trait Db:
    UserRepo
    + GuideRepo
    + OrganizationRepo
    + TourRepo
    + PreviousTourRepo
    + FeedbackRepo
    + PerformanceReviewRepo
    + LeaveRequestRepo
    + ReviewRepo
    + PostRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + GuideRepo
        + OrganizationRepo
        + TourRepo
        + PreviousTourRepo
        + FeedbackRepo
        + PerformanceReviewRepo
        + LeaveRequestRepo
        + ReviewRepo
        + PostRepo
{
}
