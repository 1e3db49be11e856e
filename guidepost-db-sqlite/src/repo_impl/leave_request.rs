use super::*;

impl<'a> LeaveRequestRepo for DbReadWrite<'a> {
    fn create_leave_request(&self, request: &LeaveRequest) -> Result<()> {
        create_leave_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_leave_request(&self, request: &LeaveRequest) -> Result<()> {
        update_leave_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_leave_request(&self, id: &str) -> Result<()> {
        delete_leave_request(&mut self.conn.borrow_mut(), id)
    }
    fn get_leave_request(&self, id: &str) -> Result<LeaveRequest> {
        get_leave_request(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_pending_leave_request(
        &self,
        tour_id: &str,
        guide_id: &str,
    ) -> Result<Option<LeaveRequest>> {
        try_get_pending_leave_request(&mut self.conn.borrow_mut(), tour_id, guide_id)
    }
    fn leave_requests_of_tour(&self, tour_id: &str) -> Result<Vec<LeaveRequest>> {
        leave_requests_of_tour(&mut self.conn.borrow_mut(), tour_id)
    }
    fn leave_requests_of_guide(&self, guide_id: &str) -> Result<Vec<LeaveRequest>> {
        leave_requests_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
}

impl<'a> LeaveRequestRepo for DbConnection<'a> {
    fn create_leave_request(&self, request: &LeaveRequest) -> Result<()> {
        create_leave_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_leave_request(&self, request: &LeaveRequest) -> Result<()> {
        update_leave_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_leave_request(&self, id: &str) -> Result<()> {
        delete_leave_request(&mut self.conn.borrow_mut(), id)
    }
    fn get_leave_request(&self, id: &str) -> Result<LeaveRequest> {
        get_leave_request(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_pending_leave_request(
        &self,
        tour_id: &str,
        guide_id: &str,
    ) -> Result<Option<LeaveRequest>> {
        try_get_pending_leave_request(&mut self.conn.borrow_mut(), tour_id, guide_id)
    }
    fn leave_requests_of_tour(&self, tour_id: &str) -> Result<Vec<LeaveRequest>> {
        leave_requests_of_tour(&mut self.conn.borrow_mut(), tour_id)
    }
    fn leave_requests_of_guide(&self, guide_id: &str) -> Result<Vec<LeaveRequest>> {
        leave_requests_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
}

impl<'a> LeaveRequestRepo for DbReadOnly<'a> {
    fn create_leave_request(&self, _request: &LeaveRequest) -> Result<()> {
        unreachable!();
    }
    fn update_leave_request(&self, _request: &LeaveRequest) -> Result<()> {
        unreachable!();
    }
    fn delete_leave_request(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn get_leave_request(&self, id: &str) -> Result<LeaveRequest> {
        get_leave_request(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_pending_leave_request(
        &self,
        tour_id: &str,
        guide_id: &str,
    ) -> Result<Option<LeaveRequest>> {
        try_get_pending_leave_request(&mut self.conn.borrow_mut(), tour_id, guide_id)
    }
    fn leave_requests_of_tour(&self, tour_id: &str) -> Result<Vec<LeaveRequest>> {
        leave_requests_of_tour(&mut self.conn.borrow_mut(), tour_id)
    }
    fn leave_requests_of_guide(&self, guide_id: &str) -> Result<Vec<LeaveRequest>> {
        leave_requests_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
}

fn into_leave_request(
    conn: &mut SqliteConnection,
    row: models::LeaveRequestRow,
) -> Result<LeaveRequest> {
    let models::LeaveRequestRow {
        rowid: _,
        id,
        tour_rowid,
        guide_rowid,
        reason,
        status,
        organization_response,
        criticism_severity,
        criticism_reason,
        created_at,
        reviewed_at,
    } = row;
    let tour_id = load_tour_id(conn, tour_rowid)?;
    let guide_id = load_guide_id(conn, guide_rowid)?;
    let criticism = match (criticism_severity, criticism_reason) {
        (Some(severity), Some(reason)) => {
            let severity = Severity::try_from(i64::from(severity))
                .map_err(|err| anyhow!("Failed to load criticism severity: {err}"))?;
            Some(Criticism { severity, reason })
        }
        (None, None) => None,
        _ => {
            return Err(anyhow!("Inconsistent criticism columns on leave request {id}").into());
        }
    };
    Ok(LeaveRequest {
        id: id.into(),
        tour_id: tour_id.into(),
        guide_id: guide_id.into(),
        reason,
        status: load_leave_request_status(status)?,
        organization_response,
        criticism,
        created_at: Timestamp::from_secs(created_at),
        reviewed_at: reviewed_at.map(Timestamp::from_secs),
    })
}

fn create_leave_request(conn: &mut SqliteConnection, request: &LeaveRequest) -> Result<()> {
    let tour_rowid = resolve_tour_rowid(conn, request.tour_id.as_str())?;
    let guide_rowid = resolve_guide_rowid(conn, request.guide_id.as_str())?;
    let (criticism_severity, criticism_reason) = match &request.criticism {
        Some(Criticism { severity, reason }) => {
            (Some(i64::from(*severity) as i16), Some(reason.as_str()))
        }
        None => (None, None),
    };
    let new_request = models::NewLeaveRequest {
        id: request.id.as_str(),
        tour_rowid,
        guide_rowid,
        reason: &request.reason,
        status: LeaveRequestStatusPrimitive::from(request.status),
        organization_response: request.organization_response.as_deref(),
        criticism_severity,
        criticism_reason,
        created_at: request.created_at.as_secs(),
        reviewed_at: request.reviewed_at.map(Timestamp::as_secs),
    };
    let _count = diesel::insert_into(schema::leave_request::table)
        .values(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_leave_request(conn: &mut SqliteConnection, request: &LeaveRequest) -> Result<()> {
    use schema::leave_request::dsl;
    let (criticism_severity, criticism_reason) = match &request.criticism {
        Some(Criticism { severity, reason }) => {
            (Some(i64::from(*severity) as i16), Some(reason.as_str()))
        }
        None => (None, None),
    };
    let count = diesel::update(
        schema::leave_request::table.filter(dsl::id.eq(request.id.as_str())),
    )
    .set((
        dsl::status.eq(LeaveRequestStatusPrimitive::from(request.status)),
        dsl::organization_response.eq(request.organization_response.as_deref()),
        dsl::criticism_severity.eq(criticism_severity),
        dsl::criticism_reason.eq(criticism_reason),
        dsl::reviewed_at.eq(request.reviewed_at.map(Timestamp::as_secs)),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_leave_request(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::leave_request::dsl;
    let count = diesel::delete(schema::leave_request::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_leave_request(conn: &mut SqliteConnection, id: &str) -> Result<LeaveRequest> {
    use schema::leave_request::dsl;
    let row = schema::leave_request::table
        .filter(dsl::id.eq(id))
        .first::<models::LeaveRequestRow>(conn)
        .map_err(from_diesel_err)?;
    into_leave_request(conn, row)
}

fn try_get_pending_leave_request(
    conn: &mut SqliteConnection,
    tour_id: &str,
    guide_id: &str,
) -> Result<Option<LeaveRequest>> {
    use schema::leave_request::dsl;
    let tour_rowid = resolve_tour_rowid(conn, tour_id)?;
    let guide_rowid = resolve_guide_rowid(conn, guide_id)?;
    schema::leave_request::table
        .filter(dsl::tour_rowid.eq(tour_rowid))
        .filter(dsl::guide_rowid.eq(guide_rowid))
        .filter(dsl::status.eq(LeaveRequestStatusPrimitive::from(LeaveRequestStatus::Pending)))
        .first::<models::LeaveRequestRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|row| into_leave_request(conn, row))
        .transpose()
}

fn leave_requests_of_tour(conn: &mut SqliteConnection, tour_id: &str) -> Result<Vec<LeaveRequest>> {
    use schema::leave_request::dsl;
    let tour_rowid = resolve_tour_rowid(conn, tour_id)?;
    let rows = schema::leave_request::table
        .filter(dsl::tour_rowid.eq(tour_rowid))
        .order_by(dsl::created_at.desc())
        .load::<models::LeaveRequestRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| into_leave_request(conn, row))
        .collect()
}

fn leave_requests_of_guide(
    conn: &mut SqliteConnection,
    guide_id: &str,
) -> Result<Vec<LeaveRequest>> {
    use schema::leave_request::dsl;
    let guide_rowid = resolve_guide_rowid(conn, guide_id)?;
    let rows = schema::leave_request::table
        .filter(dsl::guide_rowid.eq(guide_rowid))
        .order_by(dsl::created_at.desc())
        .load::<models::LeaveRequestRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| into_leave_request(conn, row))
        .collect()
}
