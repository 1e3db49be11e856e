use super::*;

pub fn create_leave_request(
    connections: &sqlite::Connections,
    caller: &User,
    tour_id: &str,
    reason: String,
) -> Result<LeaveRequest> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::create_leave_request(conn, caller, tour_id, reason))?)
}

pub fn cancel_leave_request(
    connections: &sqlite::Connections,
    caller: &User,
    request_id: &str,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::cancel_leave_request(conn, caller, request_id))?)
}

pub fn resolve_leave_request(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    org: &Organization,
    request_id: &str,
    resolution: usecases::LeaveResolution,
) -> Result<LeaveRequest> {
    let request = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| {
            usecases::resolve_leave_request(conn, org, request_id, resolution).map_err(|err| {
                warn!("Failed to resolve leave request {}: {}", request_id, err);
                err
            })
        })
    }?;
    let guide_email = {
        let db = connections.shared()?;
        db.get_guide(request.guide_id.as_str())?.user_email
    };
    notify.notify(NotificationEvent::LeaveRequestResolved {
        request: &request,
        guide_email: &guide_email,
    });
    Ok(request)
}
