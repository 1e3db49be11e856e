pub use guidepost_boundary::*;

use guidepost_core::{
    entities as e,
    gateways::feedback_analysis as analysis,
    usecases,
};

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both live outside this crate.

    pub fn new_guide_profile(p: NewGuideProfile) -> usecases::NewGuideProfile {
        let NewGuideProfile {
            school,
            description,
            certificates,
            work_experience,
            cv_url,
        } = p;
        usecases::NewGuideProfile {
            school,
            description,
            certificates,
            work_experience,
            cv_url,
        }
    }

    pub fn new_organization(o: NewOrganization) -> usecases::NewOrganization {
        let NewOrganization {
            name,
            tax_id,
            website,
            slogan,
        } = o;
        usecases::NewOrganization {
            name,
            tax_id,
            website,
            slogan,
        }
    }

    pub fn new_itinerary_stop(stop: ItineraryStop) -> usecases::NewItineraryStop {
        let ItineraryStop {
            sequence,
            title,
            location,
            duration_minutes,
            description,
            time,
        } = stop;
        usecases::NewItineraryStop {
            sequence,
            title,
            location,
            duration_minutes,
            description,
            time,
        }
    }

    pub fn new_tour(t: NewTour) -> usecases::NewTour {
        let NewTour {
            name,
            description,
            price,
            location,
            date,
            itinerary,
            tags,
            languages,
            max_group_size,
            inclusions,
        } = t;
        usecases::NewTour {
            name,
            description,
            price,
            location,
            date: e::Timestamp::from_secs(date),
            itinerary: itinerary.into_iter().map(new_itinerary_stop).collect(),
            tags,
            languages,
            max_group_size,
            inclusions,
        }
    }

    pub fn new_performance_review(
        previous_tour_id: &str,
        r: NewPerformanceReview,
    ) -> usecases::NewPerformanceReview {
        let NewPerformanceReview {
            summary,
            strengths,
            improvements,
            sentiment_score,
            red_flags,
        } = r;
        usecases::NewPerformanceReview {
            previous_tour_id: previous_tour_id.to_owned(),
            summary,
            strengths,
            improvements,
            sentiment_score,
            red_flags,
        }
    }

    pub fn new_feedback(f: NewFeedback) -> usecases::NewFeedback {
        let NewFeedback { rating, text } = f;
        usecases::NewFeedback { rating, text }
    }

    pub fn new_review(r: NewReview) -> usecases::NewReview {
        let NewReview { rating, text } = r;
        usecases::NewReview { rating, text }
    }

    pub fn inline_image(image: InlineImage) -> analysis::InlineImage {
        let InlineImage {
            base64_data,
            media_type,
        } = image;
        analysis::InlineImage {
            base64_data,
            media_type,
        }
    }
}

pub fn to_json_analysis(from: analysis::FeedbackAnalysis) -> FeedbackAnalysis {
    let analysis::FeedbackAnalysis {
        summary,
        sentiment_score,
        strengths,
        improvements,
        red_flags,
    } = from;
    FeedbackAnalysis {
        summary,
        sentiment_score: sentiment_score.into(),
        strengths,
        improvements,
        red_flags,
    }
}
