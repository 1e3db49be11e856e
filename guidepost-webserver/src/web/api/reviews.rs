use super::*;

#[post("/users/<email>/reviews", format = "application/json", data = "<review>")]
pub fn post_peer_review(
    db: sqlite::Connections,
    auth: Auth,
    email: String,
    review: JsonResult<json::NewReview>,
) -> Result<json::PeerReview> {
    let review = from_json::new_review(review?.into_inner());
    let subject_email: EmailAddress = email.parse()?;
    let author = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let review = flows::create_peer_review(&db, &author, &subject_email, review)?;
    Ok(Json(review.into()))
}

#[get("/users/<email>/reviews")]
pub fn get_peer_reviews(db: sqlite::Connections, email: String) -> Result<Vec<json::PeerReview>> {
    let subject_email: EmailAddress = email.parse()?;
    let reviews = {
        let db = db.shared()?;
        db.peer_reviews_of_user(&subject_email)?
    };
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[post("/tours/<id>/reviews", format = "application/json", data = "<review>")]
pub fn post_tour_review(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    review: JsonResult<json::NewReview>,
) -> Result<json::TourReview> {
    let review = from_json::new_review(review?.into_inner());
    let author = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let review = flows::create_tour_review(&db, &author, &id, review)?;
    Ok(Json(review.into()))
}

#[get("/tours/<id>/reviews")]
pub fn get_tour_reviews(db: sqlite::Connections, id: String) -> Result<Vec<json::TourReview>> {
    let reviews = {
        let db = db.shared()?;
        db.tour_reviews_of_tour(&id)?
    };
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
