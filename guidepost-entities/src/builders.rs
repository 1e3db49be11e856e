pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    guide_builder::*, leave_request_builder::*, previous_tour_builder::*, tour_builder::*,
};

pub mod guide_builder {

    use super::*;
    use crate::{email::*, guide::*, rating::*};

    #[derive(Debug)]
    pub struct GuideBuild {
        guide: Guide,
    }

    impl GuideBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.guide.id = id.into();
            self
        }
        pub fn user_email(mut self, email: &str) -> Self {
            self.guide.user_email = EmailAddress::new_unchecked(email.to_string());
            self
        }
        pub fn school(mut self, school: &str) -> Self {
            self.guide.school = school.into();
            self
        }
        pub fn avg_rating(mut self, avg: Option<f64>) -> Self {
            self.guide.avg_rating = avg.map(AvgRating::from);
            self
        }
        pub fn total_reviews(mut self, count: u64) -> Self {
            self.guide.total_reviews = count;
            self
        }
        pub fn rating_penalty(mut self, stars: f64) -> Self {
            self.guide.rating_penalty = RatingPenalty::from_stars(stars);
            self
        }
        pub fn finish(self) -> Guide {
            self.guide
        }
    }

    impl Builder for Guide {
        type Build = GuideBuild;
        fn build() -> Self::Build {
            Self::Build {
                guide: Guide {
                    id: Default::default(),
                    user_email: EmailAddress::new_unchecked("guide@example.com".to_string()),
                    school: "".into(),
                    description: "".into(),
                    certificates: vec![],
                    work_experience: vec![],
                    cv_url: None,
                    avg_rating: None,
                    total_reviews: 0,
                    rating_penalty: RatingPenalty::none(),
                },
            }
        }
    }
}

pub mod tour_builder {

    use super::*;
    use crate::{time::*, tour::*};

    #[derive(Debug)]
    pub struct TourBuild {
        tour: Tour,
    }

    impl TourBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tour.id = id.into();
            self
        }
        pub fn organization_id(mut self, id: &str) -> Self {
            self.tour.organization_id = id.into();
            self
        }
        pub fn guide_id(mut self, id: Option<&str>) -> Self {
            self.tour.guide_id = id.map(Into::into);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.tour.name = name.into();
            self
        }
        pub fn status(mut self, status: TourStatus) -> Self {
            self.tour.status = status;
            self
        }
        pub fn finish(self) -> Tour {
            self.tour
        }
    }

    impl Builder for Tour {
        type Build = TourBuild;
        fn build() -> Self::Build {
            Self::Build {
                tour: Tour {
                    id: Default::default(),
                    organization_id: Default::default(),
                    guide_id: None,
                    name: "".into(),
                    description: "".into(),
                    price: 0,
                    location: "".into(),
                    date: Timestamp::from_secs(0),
                    status: TourStatus::default(),
                    itinerary: vec![],
                    tags: vec![],
                    languages: vec![],
                    max_group_size: 0,
                    inclusions: vec![],
                },
            }
        }
    }
}

pub mod previous_tour_builder {

    use super::*;
    use crate::{previous_tour::*, time::*};

    #[derive(Debug)]
    pub struct PreviousTourBuild {
        previous_tour: PreviousTour,
    }

    impl PreviousTourBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.previous_tour.id = id.into();
            self
        }
        pub fn organization_id(mut self, id: &str) -> Self {
            self.previous_tour.organization_id = id.into();
            self
        }
        pub fn guide_id(mut self, id: &str) -> Self {
            self.previous_tour.guide_id = id.into();
            self
        }
        pub fn tour_name(mut self, name: &str) -> Self {
            self.previous_tour.tour_name = name.into();
            self
        }
        pub fn finish(self) -> PreviousTour {
            self.previous_tour
        }
    }

    impl Builder for PreviousTour {
        type Build = PreviousTourBuild;
        fn build() -> Self::Build {
            Self::Build {
                previous_tour: PreviousTour {
                    id: Default::default(),
                    organization_id: Default::default(),
                    guide_id: Default::default(),
                    tour_name: "".into(),
                    tour_location: "".into(),
                    tour_date: Timestamp::from_secs(0),
                    completed_at: Timestamp::from_secs(0),
                    avg_feedback_rating: None,
                    total_travelers: 0,
                },
            }
        }
    }
}

pub mod leave_request_builder {

    use super::*;
    use crate::{leave::*, time::*};

    #[derive(Debug)]
    pub struct LeaveRequestBuild {
        request: LeaveRequest,
    }

    impl LeaveRequestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.request.id = id.into();
            self
        }
        pub fn tour_id(mut self, id: &str) -> Self {
            self.request.tour_id = id.into();
            self
        }
        pub fn guide_id(mut self, id: &str) -> Self {
            self.request.guide_id = id.into();
            self
        }
        pub fn reason(mut self, reason: &str) -> Self {
            self.request.reason = reason.into();
            self
        }
        pub fn status(mut self, status: LeaveRequestStatus) -> Self {
            self.request.status = status;
            self
        }
        pub fn finish(self) -> LeaveRequest {
            self.request
        }
    }

    impl Builder for LeaveRequest {
        type Build = LeaveRequestBuild;
        fn build() -> Self::Build {
            Self::Build {
                request: LeaveRequest {
                    id: Default::default(),
                    tour_id: Default::default(),
                    guide_id: Default::default(),
                    reason: "family circumstances require me at home".into(),
                    status: LeaveRequestStatus::default(),
                    organization_response: None,
                    criticism: None,
                    created_at: Timestamp::from_secs(0),
                    reviewed_at: None,
                },
            }
        }
    }
}
