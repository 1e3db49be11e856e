mod fixture;

pub mod prelude {
    pub use super::fixture::*;

    pub use guidepost_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use guidepost_db_sqlite::Connections;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };
}

use self::prelude::*;

fn new_tour(name: &str) -> usecases::NewTour {
    usecases::NewTour {
        name: name.into(),
        description: "A walk through the old town".into(),
        price: 2_500,
        location: "Lisbon".into(),
        date: Timestamp::from_secs(1_900_000_000),
        itinerary: vec![],
        tags: vec!["walking".into()],
        languages: vec!["en".into()],
        max_group_size: 12,
        inclusions: vec![],
    }
}

fn new_performance_review(sentiment_score: i64, previous_tour_id: &str) -> usecases::NewPerformanceReview {
    usecases::NewPerformanceReview {
        previous_tour_id: previous_tour_id.into(),
        summary: "Knowledgeable and punctual".into(),
        strengths: vec!["local knowledge".into(), "punctuality".into()],
        improvements: "".into(),
        sentiment_score,
        red_flags: false,
    }
}

#[test]
fn register_and_onboard_guide() {
    let fixture = BackendFixture::new();
    let user = fixture.register_user("guide@example.com");
    assert_eq!(user.role, Role::Traveler);
    let guide = flows::create_guide_profile(
        &fixture.db_connections,
        &user,
        usecases::NewGuideProfile {
            school: "Tourism College".into(),
            description: "Licensed city guide".into(),
            certificates: vec!["First Aid".into()],
            work_experience: vec!["Museum docent".into()],
            cv_url: None,
        },
    )
    .unwrap();
    let stored = fixture.try_get_guide(guide.id.as_str()).unwrap();
    assert_eq!(stored.certificates, vec!["First Aid".to_string()]);
    assert_eq!(stored.total_reviews, 0);
    assert!(stored.avg_rating.is_none());
    // The role has been upgraded.
    assert_eq!(fixture.try_get_user("guide@example.com").unwrap().role, Role::Guide);
}

#[test]
fn full_performance_review_pipeline() {
    let fixture = BackendFixture::new();
    let org = fixture.create_organization("biz@example.com");
    let guide = fixture.create_guide("guide@example.com");

    // Three completed tours, three reviews.
    for (i, score) in [80, 100, 60].into_iter().enumerate() {
        let tour = flows::create_tour(
            &fixture.db_connections,
            &org,
            new_tour(&format!("Tour {i}")),
        )
        .unwrap();
        flows::assign_guide(
            &fixture.db_connections,
            &org,
            tour.id.as_str(),
            guide.id.as_str(),
        )
        .unwrap();
        let previous =
            flows::complete_tour(&fixture.db_connections, &org, tour.id.as_str(), 10).unwrap();
        flows::push_performance_review(
            &fixture.db_connections,
            &fixture.notify,
            &org,
            new_performance_review(score, previous.id.as_str()),
        )
        .unwrap();
    }

    let guide = fixture.try_get_guide(guide.id.as_str()).unwrap();
    // Scores 80/100/60 -> ratings 4.0/5.0/3.0 -> average 4.0
    assert_eq!(guide.avg_rating, Some(4.0.into()));
    assert_eq!(guide.total_reviews, 3);
}

#[test]
fn duplicate_performance_review_is_rejected_by_the_database() {
    let fixture = BackendFixture::new();
    let org = fixture.create_organization("biz@example.com");
    let guide = fixture.create_guide("guide@example.com");
    let tour = flows::create_tour(&fixture.db_connections, &org, new_tour("Tour")).unwrap();
    flows::assign_guide(&fixture.db_connections, &org, tour.id.as_str(), guide.id.as_str())
        .unwrap();
    let previous =
        flows::complete_tour(&fixture.db_connections, &org, tour.id.as_str(), 10).unwrap();

    flows::push_performance_review(
        &fixture.db_connections,
        &fixture.notify,
        &org,
        new_performance_review(80, previous.id.as_str()),
    )
    .unwrap();
    let before = fixture.try_get_guide(guide.id.as_str()).unwrap();

    let err = flows::push_performance_review(
        &fixture.db_connections,
        &fixture.notify,
        &org,
        new_performance_review(20, previous.id.as_str()),
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(
            usecases::Error::DuplicatePerformanceReview
        ))
    ));

    // The failed push must not have changed the aggregates.
    let after = fixture.try_get_guide(guide.id.as_str()).unwrap();
    assert_eq!(before.avg_rating, after.avg_rating);
    assert_eq!(before.total_reviews, after.total_reviews);
}

#[test]
fn feedback_avg_follows_inserts_and_deletes() {
    let fixture = BackendFixture::new();
    let org = fixture.create_organization("biz@example.com");
    let guide = fixture.create_guide("guide@example.com");
    let tour = flows::create_tour(&fixture.db_connections, &org, new_tour("Tour")).unwrap();
    flows::assign_guide(&fixture.db_connections, &org, tour.id.as_str(), guide.id.as_str())
        .unwrap();
    let previous =
        flows::complete_tour(&fixture.db_connections, &org, tour.id.as_str(), 10).unwrap();

    let traveler = fixture.register_user("traveler@example.com");
    let other = fixture.register_user("other@example.com");
    let first = flows::add_feedback(
        &fixture.db_connections,
        &traveler,
        previous.id.as_str(),
        usecases::NewFeedback {
            rating: 5,
            text: "wonderful".into(),
        },
    )
    .unwrap();
    let second = flows::add_feedback(
        &fixture.db_connections,
        &other,
        previous.id.as_str(),
        usecases::NewFeedback {
            rating: 4,
            text: "pretty good".into(),
        },
    )
    .unwrap();
    assert_eq!(
        fixture.try_get_previous_tour(previous.id.as_str()).unwrap().avg_feedback_rating,
        Some(4.5.into())
    );

    flows::delete_feedback(&fixture.db_connections, &other, second.id.as_str()).unwrap();
    assert_eq!(
        fixture.try_get_previous_tour(previous.id.as_str()).unwrap().avg_feedback_rating,
        Some(5.0.into())
    );

    flows::delete_feedback(&fixture.db_connections, &traveler, first.id.as_str()).unwrap();
    assert_eq!(
        fixture.try_get_previous_tour(previous.id.as_str()).unwrap().avg_feedback_rating,
        None
    );
}

#[test]
fn leave_request_lifecycle_against_the_database() {
    let fixture = BackendFixture::new();
    let org = fixture.create_organization("biz@example.com");
    let guide = fixture.create_guide("guide@example.com");
    let guide_user = fixture.try_get_user("guide@example.com").unwrap();
    let tour = flows::create_tour(&fixture.db_connections, &org, new_tour("Tour")).unwrap();
    flows::assign_guide(&fixture.db_connections, &org, tour.id.as_str(), guide.id.as_str())
        .unwrap();

    let reason = "family circumstances require me at home".to_string();
    let request = flows::create_leave_request(
        &fixture.db_connections,
        &guide_user,
        tour.id.as_str(),
        reason.clone(),
    )
    .unwrap();

    // The partial unique index blocks a second pending request.
    let err = flows::create_leave_request(
        &fixture.db_connections,
        &guide_user,
        tour.id.as_str(),
        reason.clone(),
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(
            usecases::Error::DuplicatePendingLeaveRequest
        ))
    ));

    let resolved = flows::resolve_leave_request(
        &fixture.db_connections,
        &fixture.notify,
        &org,
        request.id.as_str(),
        usecases::LeaveResolution::Criticize {
            severity: 3,
            reason: "abandoned the group mid-season".into(),
        },
    )
    .unwrap();
    assert_eq!(resolved.status, LeaveRequestStatus::Criticized);
    assert!(resolved.reviewed_at.is_some());

    // The guide has been unassigned and penalized.
    let tour = fixture.try_get_tour(tour.id.as_str()).unwrap();
    assert_eq!(tour.guide_id, None);
    let guide = fixture.try_get_guide(guide.id.as_str()).unwrap();
    assert_eq!(guide.rating_penalty.as_stars(), 0.3);

    // Terminal: a second resolution attempt fails.
    let err = flows::resolve_leave_request(
        &fixture.db_connections,
        &fixture.notify,
        &org,
        request.id.as_str(),
        usecases::LeaveResolution::Approve { response: None },
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::LeaveRequestNotPending))
    ));
}

#[test]
fn peer_review_uniqueness_is_enforced() {
    let fixture = BackendFixture::new();
    let author = fixture.register_user("author@example.com");
    let subject = fixture.register_user("subject@example.com");
    flows::create_peer_review(
        &fixture.db_connections,
        &author,
        &subject.email,
        usecases::NewReview {
            rating: 5,
            text: "great to work with".into(),
        },
    )
    .unwrap();
    let err = flows::create_peer_review(
        &fixture.db_connections,
        &author,
        &subject.email,
        usecases::NewReview {
            rating: 4,
            text: "second thoughts".into(),
        },
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AlreadyReviewed))
    ));
}

#[test]
fn like_toggle_round_trip() {
    let fixture = BackendFixture::new();
    let author = fixture.register_user("author@example.com");
    let liker = fixture.register_user("liker@example.com");
    let post = flows::create_post(
        &fixture.db_connections,
        &author,
        "First tour done!".into(),
    )
    .unwrap();
    assert!(flows::toggle_post_like(&fixture.db_connections, &liker, post.id.as_str()).unwrap());
    assert!(!flows::toggle_post_like(&fixture.db_connections, &liker, post.id.as_str()).unwrap());
}
