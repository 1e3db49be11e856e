//! Texts of outgoing notification emails.

use guidepost_entities::{email::EmailContent, leave::*, review::GuidePerformanceReview, user::User};

pub fn user_registered_email(user: &User) -> EmailContent {
    let subject = "Welcome to Guidepost".to_string();
    let body = format!(
        "Hi {name},\n\n\
         your Guidepost account has been created.\n\n\
         You can now browse tours, connect with organizations and\n\
         build your public profile.\n\n\
         kind regards,\nthe Guidepost team",
        name = user.display_name,
    );
    EmailContent { subject, body }
}

pub fn leave_request_resolved_email(request: &LeaveRequest) -> EmailContent {
    let subject = format!("Your leave request has been {}", status_label(request.status));
    let mut body = format!(
        "Hi,\n\n\
         the organization has reviewed your request to leave the tour.\n\
         Outcome: {}.\n",
        status_label(request.status),
    );
    if let Some(response) = &request.organization_response {
        body.push_str(&format!("\nResponse from the organization:\n{response}\n"));
    }
    if let Some(Criticism { severity, reason }) = &request.criticism {
        body.push_str(&format!(
            "\nThe organization has criticized the request (severity {} of 5):\n{reason}\n\n\
             This criticism affects your public rating.\n",
            severity.get(),
        ));
    }
    body.push_str("\nkind regards,\nthe Guidepost team");
    EmailContent { subject, body }
}

pub fn performance_review_published_email(review: &GuidePerformanceReview) -> EmailContent {
    let subject = format!("New performance review for \"{}\"", review.tour_name);
    let body = format!(
        "Hi,\n\n\
         the organization has published a performance review for your\n\
         tour \"{tour}\" in {location}.\n\n\
         Summary:\n{summary}\n\n\
         The review contributes to your public rating.\n\n\
         kind regards,\nthe Guidepost team",
        tour = review.tour_name,
        location = review.tour_location,
        summary = review.summary,
    );
    EmailContent { subject, body }
}

fn status_label(status: LeaveRequestStatus) -> &'static str {
    match status {
        LeaveRequestStatus::Pending => "pending",
        LeaveRequestStatus::Approved => "approved",
        LeaveRequestStatus::Rejected => "rejected",
        LeaveRequestStatus::Criticized => "criticized",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidepost_entities::{builders::*, time::Timestamp};

    #[test]
    fn criticism_is_mentioned_in_the_email() {
        let mut request = LeaveRequest::build().id("r").finish();
        request.status = LeaveRequestStatus::Criticized;
        request.criticism = Some(Criticism {
            severity: Severity::try_from(4).unwrap(),
            reason: "left the group without notice".into(),
        });
        request.reviewed_at = Some(Timestamp::from_secs(0));
        let content = leave_request_resolved_email(&request);
        assert!(content.subject.contains("criticized"));
        assert!(content.body.contains("severity 4 of 5"));
        assert!(content.body.contains("left the group without notice"));
    }
}
