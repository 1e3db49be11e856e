use super::*;

#[get("/previous-tours/<id>")]
pub fn get_previous_tour(db: sqlite::Connections, id: String) -> Result<json::PreviousTour> {
    let previous_tour = {
        let db = db.shared()?;
        usecases::get_previous_tour(&db, &id)?
    };
    Ok(Json(previous_tour.into()))
}

#[get("/previous-tours/<id>/feedback")]
pub fn get_feedback(
    db: sqlite::Connections,
    id: String,
) -> Result<Vec<json::PreviousTourFeedback>> {
    let feedback = {
        let db = db.shared()?;
        usecases::load_feedback_of_previous_tour(&db, &id)?
    };
    Ok(Json(feedback.into_iter().map(Into::into).collect()))
}

#[post("/previous-tours/<id>/feedback", format = "application/json", data = "<feedback>")]
pub fn post_feedback(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    feedback: JsonResult<json::NewFeedback>,
) -> Result<json::PreviousTourFeedback> {
    let feedback = from_json::new_feedback(feedback?.into_inner());
    let author = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let feedback = flows::add_feedback(&db, &author, &id, feedback)?;
    Ok(Json(feedback.into()))
}

#[delete("/previous-tours/feedback/<id>")]
pub fn delete_feedback(db: sqlite::Connections, auth: Auth, id: String) -> Result<()> {
    let caller = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    flows::delete_feedback(&db, &caller, &id)?;
    Ok(Json(()))
}

/// Runs the model analysis over the collected feedback. The result is
/// returned to the organization for inspection and only persisted when
/// it is pushed as a performance review afterwards. A failed analysis
/// has to be re-triggered explicitly ("Redo").
#[post("/previous-tours/<id>/analysis", format = "application/json", data = "<request>")]
pub fn post_analysis(
    db: sqlite::Connections,
    auth: Auth,
    analysis: &State<Analysis>,
    id: String,
    request: JsonResult<json::AnalyzeFeedback>,
) -> Result<json::FeedbackAnalysis> {
    let json::AnalyzeFeedback { texts, images } = request?.into_inner();
    let images = images.into_iter().map(from_json::inline_image).collect();
    let org = auth.organization(&db.shared()?)?;
    let analysis = flows::analyze_previous_tour_feedback(&db, &*analysis.0, &org, &id, texts, images)
        .map_err(|err| {
            log::warn!("Feedback analysis for previous tour {} failed: {}", id, err);
            err
        })?;
    Ok(Json(to_json_analysis(analysis)))
}

#[post(
    "/previous-tours/<id>/performance-review",
    format = "application/json",
    data = "<review>"
)]
pub fn post_performance_review(
    db: sqlite::Connections,
    auth: Auth,
    notify: &State<Notify>,
    id: String,
    review: JsonResult<json::NewPerformanceReview>,
) -> Result<json::PerformanceReview> {
    let review = from_json::new_performance_review(&id, review?.into_inner());
    let org = auth.organization(&db.shared()?)?;
    let review = flows::push_performance_review(&db, &*notify.0, &org, review)?;
    Ok(Json(review.into()))
}
