//! Entity -> JSON conversions.

use guidepost_entities as e;

use super::*;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => Self::Guest,
            Traveler => Self::Traveler,
            Guide => Self::Guide,
            Organization => Self::Organization,
            Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use UserRole::*;
        match from {
            Guest => Self::Guest,
            Traveler => Self::Traveler,
            Guide => Self::Guide,
            Organization => Self::Organization,
            Admin => Self::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            email,
            display_name,
            role,
        } = from;
        Self {
            email: email.into_string(),
            display_name,
            role: role.into(),
        }
    }
}

impl From<e::guide::Guide> for Guide {
    fn from(from: e::guide::Guide) -> Self {
        let e::guide::Guide {
            id,
            user_email,
            school,
            description,
            certificates,
            work_experience,
            cv_url,
            avg_rating,
            total_reviews,
            rating_penalty: _,
        } = from;
        Self {
            id: id.into(),
            email: user_email.into_string(),
            school,
            description,
            certificates,
            work_experience,
            cv_url: cv_url.map(Into::into),
            avg_rating: avg_rating.map(Into::into),
            total_reviews,
        }
    }
}

impl From<e::organization::Organization> for Organization {
    fn from(from: e::organization::Organization) -> Self {
        let e::organization::Organization {
            id,
            user_email,
            name,
            tax_id,
            website,
            slogan,
        } = from;
        Self {
            id: id.into(),
            email: user_email.into_string(),
            name,
            tax_id: tax_id.into(),
            website: website.map(Into::into),
            slogan,
        }
    }
}

impl From<e::tour::TourStatus> for TourStatus {
    fn from(from: e::tour::TourStatus) -> Self {
        use e::tour::TourStatus::*;
        match from {
            Draft => Self::Draft,
            Current => Self::Current,
            Completed => Self::Completed,
            Cancelled => Self::Cancelled,
        }
    }
}

impl From<e::tour::ItineraryStop> for ItineraryStop {
    fn from(from: e::tour::ItineraryStop) -> Self {
        let e::tour::ItineraryStop {
            sequence,
            title,
            location,
            duration_minutes,
            description,
            time,
        } = from;
        Self {
            sequence,
            title,
            location,
            duration_minutes,
            description,
            time,
        }
    }
}

impl From<e::tour::Tour> for Tour {
    fn from(from: e::tour::Tour) -> Self {
        let e::tour::Tour {
            id,
            organization_id,
            guide_id,
            name,
            description,
            price,
            location,
            date,
            status,
            itinerary,
            tags,
            languages,
            max_group_size,
            inclusions,
        } = from;
        Self {
            id: id.into(),
            organization_id: organization_id.into(),
            guide_id: guide_id.map(Into::into),
            name,
            description,
            price,
            location,
            date: date.as_secs(),
            status: status.into(),
            itinerary: itinerary.into_iter().map(Into::into).collect(),
            tags,
            languages,
            max_group_size,
            inclusions,
        }
    }
}

impl From<e::previous_tour::PreviousTour> for PreviousTour {
    fn from(from: e::previous_tour::PreviousTour) -> Self {
        let e::previous_tour::PreviousTour {
            id,
            organization_id,
            guide_id,
            tour_name,
            tour_location,
            tour_date,
            completed_at,
            avg_feedback_rating,
            total_travelers,
        } = from;
        Self {
            id: id.into(),
            organization_id: organization_id.into(),
            guide_id: guide_id.into(),
            tour_name,
            tour_location,
            tour_date: tour_date.as_secs(),
            completed_at: completed_at.as_secs(),
            avg_feedback_rating: avg_feedback_rating.map(Into::into),
            total_travelers,
        }
    }
}

impl From<e::previous_tour::PreviousTourFeedback> for PreviousTourFeedback {
    fn from(from: e::previous_tour::PreviousTourFeedback) -> Self {
        let e::previous_tour::PreviousTourFeedback {
            id,
            previous_tour_id,
            author_email,
            rating,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            previous_tour_id: previous_tour_id.into(),
            author_email: author_email.into_string(),
            rating: f64::from(rating) as i64,
            text,
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::review::GuidePerformanceReview> for PerformanceReview {
    fn from(from: e::review::GuidePerformanceReview) -> Self {
        let e::review::GuidePerformanceReview {
            id,
            previous_tour_id,
            guide_id,
            summary,
            strengths,
            improvements,
            sentiment_score,
            rating,
            red_flags,
            tour_name,
            tour_location,
            tour_date,
            created_at,
        } = from;
        Self {
            id: id.into(),
            previous_tour_id: previous_tour_id.into(),
            guide_id: guide_id.into(),
            summary,
            strengths,
            improvements,
            sentiment_score: sentiment_score.into(),
            rating: rating.into(),
            red_flags,
            tour_name,
            tour_location,
            tour_date: tour_date.as_secs(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::leave::LeaveRequestStatus> for LeaveRequestStatus {
    fn from(from: e::leave::LeaveRequestStatus) -> Self {
        use e::leave::LeaveRequestStatus::*;
        match from {
            Pending => Self::Pending,
            Approved => Self::Approved,
            Rejected => Self::Rejected,
            Criticized => Self::Criticized,
        }
    }
}

impl From<e::leave::LeaveRequest> for LeaveRequest {
    fn from(from: e::leave::LeaveRequest) -> Self {
        let e::leave::LeaveRequest {
            id,
            tour_id,
            guide_id,
            reason,
            status,
            organization_response,
            criticism,
            created_at,
            reviewed_at,
        } = from;
        let (criticism_severity, criticism_reason) = match criticism {
            Some(e::leave::Criticism { severity, reason }) => {
                (Some(severity.get()), Some(reason))
            }
            None => (None, None),
        };
        Self {
            id: id.into(),
            tour_id: tour_id.into(),
            guide_id: guide_id.into(),
            reason,
            status: status.into(),
            organization_response,
            criticism_severity,
            criticism_reason,
            created_at: created_at.as_secs(),
            reviewed_at: reviewed_at.map(e::time::Timestamp::as_secs),
        }
    }
}

impl From<e::review::PeerReview> for PeerReview {
    fn from(from: e::review::PeerReview) -> Self {
        let e::review::PeerReview {
            id,
            author_email,
            subject_email,
            rating,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            author_email: author_email.into_string(),
            subject_email: subject_email.into_string(),
            rating: rating.into(),
            text,
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::review::TourReview> for TourReview {
    fn from(from: e::review::TourReview) -> Self {
        let e::review::TourReview {
            id,
            author_email,
            tour_id,
            rating,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            author_email: author_email.into_string(),
            tour_id: tour_id.into(),
            rating: rating.into(),
            text,
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::post::Post> for Post {
    fn from(from: e::post::Post) -> Self {
        let e::post::Post {
            id,
            author_email,
            body,
            created_at,
        } = from;
        Self {
            id: id.into(),
            author_email: author_email.into_string(),
            body,
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::post::PostComment> for PostComment {
    fn from(from: e::post::PostComment) -> Self {
        let e::post::PostComment {
            id,
            post_id,
            author_email,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            post_id: post_id.into(),
            author_email: author_email.into_string(),
            text,
            created_at: created_at.as_secs(),
        }
    }
}
