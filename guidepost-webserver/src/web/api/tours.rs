use super::*;

#[post("/tours", format = "application/json", data = "<new_tour>")]
pub fn post_tour(
    db: sqlite::Connections,
    auth: Auth,
    new_tour: JsonResult<json::NewTour>,
) -> Result<json::Tour> {
    let new_tour = from_json::new_tour(new_tour?.into_inner());
    let org = auth.organization(&db.shared()?)?;
    let tour = flows::create_tour(&db, &org, new_tour)?;
    Ok(Json(tour.into()))
}

#[get("/tours?<offset>&<limit>")]
pub fn get_tours(
    db: sqlite::Connections,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Tour>> {
    let pagination = Pagination { offset, limit };
    let tours = {
        let db = db.shared()?;
        usecases::load_tours(&db, &pagination)?
    };
    Ok(Json(tours.into_iter().map(Into::into).collect()))
}

#[get("/tours/<id>")]
pub fn get_tour(db: sqlite::Connections, id: String) -> Result<json::Tour> {
    let tour = {
        let db = db.shared()?;
        usecases::get_tour(&db, &id)?
    };
    Ok(Json(tour.into()))
}

#[put("/tours/<id>", format = "application/json", data = "<tour>")]
pub fn put_tour(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    tour: JsonResult<json::NewTour>,
) -> Result<json::Tour> {
    let tour = from_json::new_tour(tour?.into_inner());
    let org = auth.organization(&db.shared()?)?;
    let tour = flows::update_tour(&db, &org, &id, tour)?;
    Ok(Json(tour.into()))
}

#[post("/tours/<id>/assign-guide", format = "application/json", data = "<assign>")]
pub fn post_assign_guide(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    assign: JsonResult<json::AssignGuide>,
) -> Result<json::Tour> {
    let json::AssignGuide { guide_id } = assign?.into_inner();
    let org = auth.organization(&db.shared()?)?;
    let tour = flows::assign_guide(&db, &org, &id, &guide_id)?;
    Ok(Json(tour.into()))
}

#[post("/tours/<id>/complete", format = "application/json", data = "<complete>")]
pub fn post_complete_tour(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    complete: JsonResult<json::CompleteTour>,
) -> Result<json::PreviousTour> {
    let json::CompleteTour { total_travelers } = complete?.into_inner();
    let org = auth.organization(&db.shared()?)?;
    let previous_tour = flows::complete_tour(&db, &org, &id, total_travelers)?;
    Ok(Json(previous_tour.into()))
}
