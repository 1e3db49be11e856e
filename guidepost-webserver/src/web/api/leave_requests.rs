use super::*;

#[post("/leave-requests", format = "application/json", data = "<request>")]
pub fn post_leave_request(
    db: sqlite::Connections,
    auth: Auth,
    request: JsonResult<json::NewLeaveRequest>,
) -> Result<json::LeaveRequest> {
    let json::NewLeaveRequest { tour_id, reason } = request?.into_inner();
    let caller = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Guide)?
    };
    let request = flows::create_leave_request(&db, &caller, &tour_id, reason)?;
    Ok(Json(request.into()))
}

#[delete("/leave-requests/<id>")]
pub fn delete_leave_request(db: sqlite::Connections, auth: Auth, id: String) -> Result<()> {
    let caller = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Guide)?
    };
    flows::cancel_leave_request(&db, &caller, &id)?;
    Ok(Json(()))
}

#[post("/leave-requests/<id>/approve", format = "application/json", data = "<approve>")]
pub fn post_approve(
    db: sqlite::Connections,
    auth: Auth,
    notify: &State<Notify>,
    id: String,
    approve: JsonResult<json::ApproveLeaveRequest>,
) -> Result<json::LeaveRequest> {
    let json::ApproveLeaveRequest { response } = approve?.into_inner();
    let org = auth.organization(&db.shared()?)?;
    let resolution = usecases::LeaveResolution::Approve { response };
    let request = flows::resolve_leave_request(&db, &*notify.0, &org, &id, resolution)?;
    Ok(Json(request.into()))
}

#[post("/leave-requests/<id>/reject", format = "application/json", data = "<reject>")]
pub fn post_reject(
    db: sqlite::Connections,
    auth: Auth,
    notify: &State<Notify>,
    id: String,
    reject: JsonResult<json::RejectLeaveRequest>,
) -> Result<json::LeaveRequest> {
    let json::RejectLeaveRequest { response } = reject?.into_inner();
    let org = auth.organization(&db.shared()?)?;
    let resolution = usecases::LeaveResolution::Reject { response };
    let request = flows::resolve_leave_request(&db, &*notify.0, &org, &id, resolution)?;
    Ok(Json(request.into()))
}

#[post("/leave-requests/<id>/criticize", format = "application/json", data = "<criticize>")]
pub fn post_criticize(
    db: sqlite::Connections,
    auth: Auth,
    notify: &State<Notify>,
    id: String,
    criticize: JsonResult<json::CriticizeLeaveRequest>,
) -> Result<json::LeaveRequest> {
    let json::CriticizeLeaveRequest { severity, reason } = criticize?.into_inner();
    let org = auth.organization(&db.shared()?)?;
    let resolution = usecases::LeaveResolution::Criticize { severity, reason };
    let request = flows::resolve_leave_request(&db, &*notify.0, &org, &id, resolution)?;
    Ok(Json(request.into()))
}

#[get("/leave-requests?<tour>")]
pub fn get_leave_requests_of_tour(
    db: sqlite::Connections,
    auth: Auth,
    tour: String,
) -> Result<Vec<json::LeaveRequest>> {
    let requests = {
        let db = db.shared()?;
        let org = auth.organization(&db)?;
        let tour = usecases::get_tour(&db, &tour)?;
        usecases::authorize_org_owns_tour(&org, &tour)?;
        db.leave_requests_of_tour(tour.id.as_str())?
    };
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}
