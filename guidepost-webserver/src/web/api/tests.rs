use super::*;
use crate::web::tests::prelude::*;

pub mod prelude {
    pub use super::super::super::tests::prelude::*;

    use super::super::routes;
    use crate::web::sqlite;

    pub fn setup() -> (Client, sqlite::Connections) {
        rocket_test_setup(vec![("/", routes())])
    }
}

use self::prelude::setup;
use guidepost_application::prelude as flows;
use guidepost_core::usecases;

fn create_session(client: &Client, email: &str) {
    let res = client
        .post("/session")
        .header(ContentType::JSON)
        .body(format!(r#"{{"email":"{email}"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
}

fn seed_organization(pool: &crate::web::sqlite::Connections, email: &str) -> Organization {
    register_user(pool, email);
    let user = pool
        .shared()
        .unwrap()
        .get_user_by_email(&email.parse().unwrap())
        .unwrap();
    flows::create_organization(
        pool,
        &user,
        usecases::NewOrganization {
            name: "City Tours Ltd.".into(),
            tax_id: 123_456,
            website: None,
            slogan: None,
        },
    )
    .unwrap()
}

fn seed_guide(pool: &crate::web::sqlite::Connections, email: &str) -> Guide {
    register_user(pool, email);
    let user = pool
        .shared()
        .unwrap()
        .get_user_by_email(&email.parse().unwrap())
        .unwrap();
    flows::create_guide_profile(
        pool,
        &user,
        usecases::NewGuideProfile {
            school: "Tourism College".into(),
            description: "Licensed city guide".into(),
            certificates: vec![],
            work_experience: vec![],
            cv_url: None,
        },
    )
    .unwrap()
}

fn seed_tour_with_guide(
    pool: &crate::web::sqlite::Connections,
    org: &Organization,
    guide: &Guide,
) -> Tour {
    let tour = flows::create_tour(
        pool,
        org,
        usecases::NewTour {
            name: "Old Town Walk".into(),
            description: "Three hours through the historic center".into(),
            price: 2_500,
            location: "Lisbon".into(),
            date: Timestamp::from_secs(1_900_000_000),
            itinerary: vec![],
            tags: vec![],
            languages: vec!["en".into()],
            max_group_size: 12,
            inclusions: vec![],
        },
    )
    .unwrap();
    flows::assign_guide(pool, org, tour.id.as_str(), guide.id.as_str()).unwrap()
}

fn seed_previous_tour(
    pool: &crate::web::sqlite::Connections,
    org: &Organization,
    guide: &Guide,
) -> PreviousTour {
    let tour = seed_tour_with_guide(pool, org, guide);
    flows::complete_tour(pool, org, tour.id.as_str(), 10).unwrap()
}

#[test]
fn register_and_open_session() {
    let (client, db) = setup();

    // Unknown identities cannot open a session.
    let res = client
        .post("/session")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post("/users")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","display_name":"User"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    create_session(&client, "user@example.com");

    let res = client
        .get("/users/current")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let current_user: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(current_user.email, "user@example.com");
    assert!(matches!(current_user.role, json::UserRole::Traveler));

    // The user has been persisted.
    assert!(db
        .shared()
        .unwrap()
        .try_get_user_by_email(&"user@example.com".parse().unwrap())
        .unwrap()
        .is_some());
}

#[test]
fn duplicate_registration_conflicts() {
    let (client, _db) = setup();
    let body = r#"{"email":"user@example.com","display_name":"User"}"#;
    let res = client
        .post("/users")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client
        .post("/users")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Conflict);
}

#[test]
fn onboard_guide_via_api() {
    let (client, db) = setup();
    register_user(&db, "guide@example.com");
    create_session(&client, "guide@example.com");

    let res = client
        .post("/guides")
        .header(ContentType::JSON)
        .body(r#"{"school":"Tourism College","description":"Licensed city guide"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let guide: json::Guide = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(guide.total_reviews, 0);
    assert!(guide.avg_rating.is_none());

    // Public profile is readable without a session.
    let res = client.get(format!("/guides/{}", guide.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);

    // Validation failures come back as a field map.
    let res = client
        .post("/guides")
        .header(ContentType::JSON)
        .body(r#"{"school":"  "}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Conflict); // profile already exists

    register_user(&db, "second@example.com");
    create_session(&client, "second@example.com");
    let res = client
        .post("/guides")
        .header(ContentType::JSON)
        .body(r#"{"school":"  "}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(err.fields.unwrap().contains_key("school"));
}

#[test]
fn mutating_requests_without_session_are_unauthorized() {
    let (client, _db) = setup();
    let res = client
        .post("/tours")
        .header(ContentType::JSON)
        .body(r#"{"name":"Tour","price":1000,"location":"Lisbon","date":0,"max_group_size":10}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn push_performance_review_via_api() {
    let (client, db) = setup();
    let org = seed_organization(&db, "biz@example.com");
    let guide = seed_guide(&db, "guide@example.com");
    let previous = seed_previous_tour(&db, &org, &guide);
    create_session(&client, "biz@example.com");

    let body = r#"{
        "summary": "Knowledgeable and punctual",
        "strengths": ["local knowledge", "punctuality", "storytelling"],
        "improvements": "Pace the walking sections better",
        "sentiment_score": 80,
        "red_flags": false
    }"#;
    let res = client
        .post(format!("/previous-tours/{}/performance-review", previous.id))
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let review: json::PerformanceReview =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(review.rating, 4.0);
    assert_eq!(review.sentiment_score, 80);

    // The guide aggregates are rolled up.
    let res = client.get(format!("/guides/{}", guide.id)).dispatch();
    let guide: json::Guide = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(guide.avg_rating, Some(4.0));
    assert_eq!(guide.total_reviews, 1);

    // A second review for the same previous tour conflicts.
    let res = client
        .post(format!("/previous-tours/{}/performance-review", previous.id))
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Conflict);
}

#[test]
fn performance_review_requires_ownership() {
    let (client, db) = setup();
    let org = seed_organization(&db, "biz@example.com");
    let guide = seed_guide(&db, "guide@example.com");
    let previous = seed_previous_tour(&db, &org, &guide);
    seed_organization(&db, "other@example.com");
    create_session(&client, "other@example.com");

    let res = client
        .post(format!("/previous-tours/{}/performance-review", previous.id))
        .header(ContentType::JSON)
        .body(r#"{"summary":"s","sentiment_score":80}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
}

#[test]
fn analyze_feedback_via_api() {
    let (client, db) = setup();
    let org = seed_organization(&db, "biz@example.com");
    let guide = seed_guide(&db, "guide@example.com");
    let previous = seed_previous_tour(&db, &org, &guide);
    create_session(&client, "biz@example.com");

    // Nothing to analyze yet.
    let res = client
        .post(format!("/previous-tours/{}/analysis", previous.id))
        .header(ContentType::JSON)
        .body(r#"{}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    // With extracted document texts the analysis succeeds.
    let res = client
        .post(format!("/previous-tours/{}/analysis", previous.id))
        .header(ContentType::JSON)
        .body(r#"{"texts":["The guide was wonderful"]}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let analysis: json::FeedbackAnalysis =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(analysis.sentiment_score, 80);
    assert_eq!(analysis.strengths.len(), 3);
}

#[test]
fn feedback_recomputes_previous_tour_average() {
    let (client, db) = setup();
    let org = seed_organization(&db, "biz@example.com");
    let guide = seed_guide(&db, "guide@example.com");
    let previous = seed_previous_tour(&db, &org, &guide);

    register_user(&db, "traveler@example.com");
    create_session(&client, "traveler@example.com");
    let res = client
        .post(format!("/previous-tours/{}/feedback", previous.id))
        .header(ContentType::JSON)
        .body(r#"{"rating":5,"text":"wonderful"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let feedback: json::PreviousTourFeedback =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();

    let res = client.get(format!("/previous-tours/{}", previous.id)).dispatch();
    let previous_json: json::PreviousTour =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(previous_json.avg_feedback_rating, Some(5.0));

    // Deleting the only feedback resets the average.
    let res = client
        .delete(format!("/previous-tours/feedback/{}", feedback.id))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get(format!("/previous-tours/{}", previous.id)).dispatch();
    let previous_json: json::PreviousTour =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(previous_json.avg_feedback_rating, None);
}

#[test]
fn leave_request_lifecycle_via_api() {
    let (client, db) = setup();
    let org = seed_organization(&db, "biz@example.com");
    let guide = seed_guide(&db, "guide@example.com");
    let tour = seed_tour_with_guide(&db, &org, &guide);

    create_session(&client, "guide@example.com");
    let body = format!(
        r#"{{"tour_id":"{}","reason":"family circumstances require me at home"}}"#,
        tour.id
    );
    let res = client
        .post("/leave-requests")
        .header(ContentType::JSON)
        .body(&body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let request: json::LeaveRequest = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(matches!(request.status, json::LeaveRequestStatus::Pending));

    // Only one pending request per tour and guide.
    let res = client
        .post("/leave-requests")
        .header(ContentType::JSON)
        .body(&body)
        .dispatch();
    assert_eq!(res.status(), Status::Conflict);

    // A too short reason is a validation failure.
    let res = client
        .post("/leave-requests")
        .header(ContentType::JSON)
        .body(format!(r#"{{"tour_id":"{}","reason":"too short"}}"#, tour.id))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(err.fields.unwrap().contains_key("reason"));

    // The organization rejects with a mandatory response.
    create_session(&client, "biz@example.com");
    let res = client
        .post(format!("/leave-requests/{}/reject", request.id))
        .header(ContentType::JSON)
        .body(r#"{"response":"no"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let res = client
        .post(format!("/leave-requests/{}/reject", request.id))
        .header(ContentType::JSON)
        .body(r#"{"response":"peak season, please stay"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let request: json::LeaveRequest = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(matches!(request.status, json::LeaveRequestStatus::Rejected));

    // Terminal once resolved.
    let res = client
        .post(format!("/leave-requests/{}/approve", request.id))
        .header(ContentType::JSON)
        .body(r#"{}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Conflict);

    // Rejection keeps the guide assigned, so a new request is allowed.
    create_session(&client, "guide@example.com");
    let res = client
        .post("/leave-requests")
        .header(ContentType::JSON)
        .body(&body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn criticize_requires_reason_and_severity() {
    let (client, db) = setup();
    let org = seed_organization(&db, "biz@example.com");
    let guide = seed_guide(&db, "guide@example.com");
    let tour = seed_tour_with_guide(&db, &org, &guide);
    let guide_user = db
        .shared()
        .unwrap()
        .get_user_by_email(&"guide@example.com".parse().unwrap())
        .unwrap();
    let request = flows::create_leave_request(
        &db,
        &guide_user,
        tour.id.as_str(),
        "family circumstances require me at home".into(),
    )
    .unwrap();

    create_session(&client, "biz@example.com");
    let res = client
        .post(format!("/leave-requests/{}/criticize", request.id))
        .header(ContentType::JSON)
        .body(r#"{"severity":3,"reason":"bad"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let res = client
        .post(format!("/leave-requests/{}/criticize", request.id))
        .header(ContentType::JSON)
        .body(r#"{"severity":7,"reason":"abandoned the group mid-season"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    let res = client
        .post(format!("/leave-requests/{}/criticize", request.id))
        .header(ContentType::JSON)
        .body(r#"{"severity":3,"reason":"abandoned the group mid-season"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let request: json::LeaveRequest = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(matches!(
        request.status,
        json::LeaveRequestStatus::Criticized
    ));
    assert_eq!(request.criticism_severity, Some(3));

    // The guide has been removed from the tour.
    let res = client.get(format!("/tours/{}", tour.id)).dispatch();
    let tour_json: json::Tour = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(tour_json.guide_id, None);
}

#[test]
fn review_uniqueness_via_api() {
    let (client, db) = setup();
    register_user(&db, "author@example.com");
    register_user(&db, "subject@example.com");
    create_session(&client, "author@example.com");

    let res = client
        .post("/users/subject@example.com/reviews")
        .header(ContentType::JSON)
        .body(r#"{"rating":5,"text":"great to work with"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client
        .post("/users/subject@example.com/reviews")
        .header(ContentType::JSON)
        .body(r#"{"rating":4,"text":"on second thought"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Conflict);
}

#[test]
fn social_feed_round_trip() {
    let (client, db) = setup();
    register_user(&db, "author@example.com");
    register_user(&db, "liker@example.com");
    create_session(&client, "author@example.com");

    let res = client
        .post("/posts")
        .header(ContentType::JSON)
        .body(r#"{"body":"First tour done!"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let post: json::Post = serde_json::from_str(&res.into_string().unwrap()).unwrap();

    create_session(&client, "liker@example.com");
    let res = client.post(format!("/posts/{}/like", post.id)).dispatch();
    let like: json::LikeState = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(like.liked);
    let res = client.post(format!("/posts/{}/like", post.id)).dispatch();
    let like: json::LikeState = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(!like.liked);

    let res = client
        .post(format!("/posts/{}/comments", post.id))
        .header(ContentType::JSON)
        .body(r#"{"text":"Congratulations!"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/posts").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let posts: Vec<json::Post> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(posts.len(), 1);
}
