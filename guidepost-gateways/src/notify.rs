use std::sync::Arc;

use guidepost_core::gateways::notify::{NotificationEvent, NotificationGateway};
use guidepost_entities::email::*;

use crate::{email::EmailGateway, user_communication};

#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
        }
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        match event {
            E::UserRegistered { user } => {
                let content = user_communication::user_registered_email(user);
                log::info!("Sending welcome e-mail to user {}", user.email);
                self.email_gw
                    .compose_and_send(&[user.email.clone()], &content);
            }
            E::LeaveRequestResolved {
                request,
                guide_email,
            } => {
                let content = user_communication::leave_request_resolved_email(request);
                log::info!(
                    "Sending e-mail to {} after leave request {} was resolved",
                    guide_email,
                    request.id
                );
                self.email_gw
                    .compose_and_send(&[guide_email.clone()], &content);
            }
            E::PerformanceReviewPublished {
                review,
                guide_email,
            } => {
                let content = user_communication::performance_review_published_email(review);
                log::info!(
                    "Sending e-mail to {} after performance review {} was published",
                    guide_email,
                    review.id
                );
                self.email_gw
                    .compose_and_send(&[guide_email.clone()], &content);
            }
        }
    }
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyNotifyGW;

impl NotificationGateway for DummyNotifyGW {
    fn notify(&self, _: NotificationEvent) {}
}
