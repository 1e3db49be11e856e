use guidepost_entities::{email::*, leave::*, review::*, user::*};

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    UserRegistered {
        user: &'a User,
    },
    LeaveRequestResolved {
        request: &'a LeaveRequest,
        guide_email: &'a EmailAddress,
    },
    PerformanceReviewPublished {
        review: &'a GuidePerformanceReview,
        guide_email: &'a EmailAddress,
    },
}

/// Fire-and-forget notifications. Implementations log failures and
/// never fail the triggering request.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}

pub trait EmailGateway {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent);
}
