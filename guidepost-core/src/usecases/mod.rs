mod analyze_feedback;
mod authorize;
mod complete_tour;
mod create_guide_profile;
mod create_organization;
mod create_tour;
mod create_user;
mod error;
mod leave_requests;
mod previous_tour_feedback;
mod push_performance_review;
mod reviews;
mod social;


pub use self::{
    analyze_feedback::*, authorize::*, complete_tour::*, create_guide_profile::*,
    create_organization::*, create_tour::*, create_user::*, error::Error, leave_requests::*,
    previous_tour_feedback::*, push_performance_review::*, reviews::*, social::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

pub fn get_user<R>(
    repo: &R,
    logged_in_email: &EmailAddress,
    requested_email: &EmailAddress,
) -> Result<User>
where
    R: UserRepo,
{
    if logged_in_email != requested_email {
        return Err(Error::Forbidden);
    }
    Ok(repo.get_user_by_email(requested_email)?)
}

pub fn delete_user<R>(repo: &R, login_email: &EmailAddress, email: &EmailAddress) -> Result<()>
where
    R: UserRepo,
{
    if login_email != email {
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_user_by_email(email)?)
}

pub fn get_guide<R: GuideRepo>(repo: &R, id: &str) -> Result<Guide> {
    Ok(repo.get_guide(id)?)
}

pub fn get_organization<R: OrganizationRepo>(repo: &R, id: &str) -> Result<Organization> {
    Ok(repo.get_org(id)?)
}

pub fn get_tour<R: TourRepo>(repo: &R, id: &str) -> Result<Tour> {
    Ok(repo.get_tour(id)?)
}

pub fn get_previous_tour<R: PreviousTourRepo>(repo: &R, id: &str) -> Result<PreviousTour> {
    Ok(repo.get_previous_tour(id)?)
}

pub fn load_tours<R: TourRepo>(repo: &R, pagination: &Pagination) -> Result<Vec<Tour>> {
    Ok(repo.all_tours(pagination)?)
}

pub fn load_feedback_of_previous_tour<R: FeedbackRepo>(
    repo: &R,
    previous_tour_id: &str,
) -> Result<Vec<PreviousTourFeedback>> {
    Ok(repo.feedback_of_previous_tour(previous_tour_id)?)
}

pub fn load_performance_reviews_of_guide<R: PerformanceReviewRepo>(
    repo: &R,
    guide_id: &str,
) -> Result<Vec<GuidePerformanceReview>> {
    Ok(repo.performance_reviews_of_guide(guide_id)?)
}
