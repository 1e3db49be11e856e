use super::*;

#[post("/guides", format = "application/json", data = "<profile>")]
pub fn post_guide(
    db: sqlite::Connections,
    auth: Auth,
    profile: JsonResult<json::NewGuideProfile>,
) -> Result<json::Guide> {
    let profile = from_json::new_guide_profile(profile?.into_inner());
    let user = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let guide = flows::create_guide_profile(&db, &user, profile)?;
    Ok(Json(guide.into()))
}

#[get("/guides/<id>")]
pub fn get_guide(db: sqlite::Connections, id: String) -> Result<json::Guide> {
    let guide = {
        let db = db.shared()?;
        usecases::get_guide(&db, &id)?
    };
    Ok(Json(guide.into()))
}

#[put("/guides/<id>", format = "application/json", data = "<profile>")]
pub fn put_guide(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    profile: JsonResult<json::NewGuideProfile>,
) -> Result<json::Guide> {
    let profile = from_json::new_guide_profile(profile?.into_inner());
    let user = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Guide)?
    };
    let guide = flows::update_guide_profile(&db, &user, &id, profile)?;
    Ok(Json(guide.into()))
}

#[get("/guides/<id>/performance-reviews")]
pub fn get_guide_performance_reviews(
    db: sqlite::Connections,
    id: String,
) -> Result<Vec<json::PerformanceReview>> {
    let reviews = {
        let db = db.shared()?;
        usecases::load_performance_reviews_of_guide(&db, &id)?
    };
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
