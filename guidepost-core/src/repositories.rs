// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait GuideRepo {
    fn create_guide(&self, guide: &Guide) -> Result<()>;
    fn update_guide(&self, guide: &Guide) -> Result<()>;

    fn get_guide(&self, id: &str) -> Result<Guide>;
    fn try_get_guide_by_user_email(&self, email: &EmailAddress) -> Result<Option<Guide>>;
    fn count_guides(&self) -> Result<usize>;
}

pub trait OrganizationRepo {
    fn create_org(&self, org: &Organization) -> Result<()>;
    fn update_org(&self, org: &Organization) -> Result<()>;

    fn get_org(&self, id: &str) -> Result<Organization>;
    fn try_get_org_by_user_email(&self, email: &EmailAddress) -> Result<Option<Organization>>;
}

pub trait TourRepo {
    fn create_tour(&self, tour: &Tour) -> Result<()>;
    fn update_tour(&self, tour: &Tour) -> Result<()>;

    fn get_tour(&self, id: &str) -> Result<Tour>;
    fn all_tours(&self, pagination: &Pagination) -> Result<Vec<Tour>>;
    fn count_tours(&self) -> Result<usize>;
}

pub trait PreviousTourRepo {
    fn create_previous_tour(&self, previous_tour: &PreviousTour) -> Result<()>;
    fn update_previous_tour(&self, previous_tour: &PreviousTour) -> Result<()>;

    fn get_previous_tour(&self, id: &str) -> Result<PreviousTour>;
    fn previous_tours_of_guide(&self, guide_id: &str) -> Result<Vec<PreviousTour>>;
}

pub trait FeedbackRepo {
    fn create_feedback(&self, feedback: &PreviousTourFeedback) -> Result<()>;
    fn delete_feedback(&self, id: &str) -> Result<()>;

    fn get_feedback(&self, id: &str) -> Result<PreviousTourFeedback>;
    fn feedback_of_previous_tour(&self, previous_tour_id: &str)
        -> Result<Vec<PreviousTourFeedback>>;
}

pub trait PerformanceReviewRepo {
    fn create_performance_review(&self, review: &GuidePerformanceReview) -> Result<()>;

    fn performance_reviews_of_guide(&self, guide_id: &str) -> Result<Vec<GuidePerformanceReview>>;
    fn try_get_performance_review_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Option<GuidePerformanceReview>>;
}

pub trait LeaveRequestRepo {
    fn create_leave_request(&self, request: &LeaveRequest) -> Result<()>;
    fn update_leave_request(&self, request: &LeaveRequest) -> Result<()>;
    fn delete_leave_request(&self, id: &str) -> Result<()>;

    fn get_leave_request(&self, id: &str) -> Result<LeaveRequest>;
    fn try_get_pending_leave_request(
        &self,
        tour_id: &str,
        guide_id: &str,
    ) -> Result<Option<LeaveRequest>>;
    fn leave_requests_of_tour(&self, tour_id: &str) -> Result<Vec<LeaveRequest>>;
    fn leave_requests_of_guide(&self, guide_id: &str) -> Result<Vec<LeaveRequest>>;
}

pub trait ReviewRepo {
    fn create_peer_review(&self, review: &PeerReview) -> Result<()>;
    fn peer_reviews_of_user(&self, subject_email: &EmailAddress) -> Result<Vec<PeerReview>>;

    fn create_tour_review(&self, review: &TourReview) -> Result<()>;
    fn tour_reviews_of_tour(&self, tour_id: &str) -> Result<Vec<TourReview>>;
}

pub trait PostRepo {
    fn create_post(&self, post: &Post) -> Result<()>;
    fn get_post(&self, id: &str) -> Result<Post>;
    fn recent_posts(&self, pagination: &Pagination) -> Result<Vec<Post>>;

    fn create_post_comment(&self, comment: &PostComment) -> Result<()>;
    fn comments_of_post(&self, post_id: &str) -> Result<Vec<PostComment>>;

    // A like is the existence of a (post, user) row.
    fn is_post_liked_by(&self, post_id: &str, user_email: &EmailAddress) -> Result<bool>;
    fn create_post_like(&self, post_id: &str, user_email: &EmailAddress) -> Result<()>;
    fn delete_post_like(&self, post_id: &str, user_email: &EmailAddress) -> Result<()>;
    fn count_post_likes(&self, post_id: &str) -> Result<u64>;
}
