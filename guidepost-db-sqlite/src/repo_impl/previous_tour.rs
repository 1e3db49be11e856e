use super::*;

impl<'a> PreviousTourRepo for DbReadWrite<'a> {
    fn create_previous_tour(&self, previous_tour: &PreviousTour) -> Result<()> {
        create_previous_tour(&mut self.conn.borrow_mut(), previous_tour)
    }
    fn update_previous_tour(&self, previous_tour: &PreviousTour) -> Result<()> {
        update_previous_tour(&mut self.conn.borrow_mut(), previous_tour)
    }
    fn get_previous_tour(&self, id: &str) -> Result<PreviousTour> {
        get_previous_tour(&mut self.conn.borrow_mut(), id)
    }
    fn previous_tours_of_guide(&self, guide_id: &str) -> Result<Vec<PreviousTour>> {
        previous_tours_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
}

impl<'a> PreviousTourRepo for DbConnection<'a> {
    fn create_previous_tour(&self, previous_tour: &PreviousTour) -> Result<()> {
        create_previous_tour(&mut self.conn.borrow_mut(), previous_tour)
    }
    fn update_previous_tour(&self, previous_tour: &PreviousTour) -> Result<()> {
        update_previous_tour(&mut self.conn.borrow_mut(), previous_tour)
    }
    fn get_previous_tour(&self, id: &str) -> Result<PreviousTour> {
        get_previous_tour(&mut self.conn.borrow_mut(), id)
    }
    fn previous_tours_of_guide(&self, guide_id: &str) -> Result<Vec<PreviousTour>> {
        previous_tours_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
}

impl<'a> PreviousTourRepo for DbReadOnly<'a> {
    fn create_previous_tour(&self, _previous_tour: &PreviousTour) -> Result<()> {
        unreachable!();
    }
    fn update_previous_tour(&self, _previous_tour: &PreviousTour) -> Result<()> {
        unreachable!();
    }
    fn get_previous_tour(&self, id: &str) -> Result<PreviousTour> {
        get_previous_tour(&mut self.conn.borrow_mut(), id)
    }
    fn previous_tours_of_guide(&self, guide_id: &str) -> Result<Vec<PreviousTour>> {
        previous_tours_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
}

impl<'a> FeedbackRepo for DbReadWrite<'a> {
    fn create_feedback(&self, feedback: &PreviousTourFeedback) -> Result<()> {
        create_feedback(&mut self.conn.borrow_mut(), feedback)
    }
    fn delete_feedback(&self, id: &str) -> Result<()> {
        delete_feedback(&mut self.conn.borrow_mut(), id)
    }
    fn get_feedback(&self, id: &str) -> Result<PreviousTourFeedback> {
        get_feedback(&mut self.conn.borrow_mut(), id)
    }
    fn feedback_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Vec<PreviousTourFeedback>> {
        feedback_of_previous_tour(&mut self.conn.borrow_mut(), previous_tour_id)
    }
}

impl<'a> FeedbackRepo for DbConnection<'a> {
    fn create_feedback(&self, feedback: &PreviousTourFeedback) -> Result<()> {
        create_feedback(&mut self.conn.borrow_mut(), feedback)
    }
    fn delete_feedback(&self, id: &str) -> Result<()> {
        delete_feedback(&mut self.conn.borrow_mut(), id)
    }
    fn get_feedback(&self, id: &str) -> Result<PreviousTourFeedback> {
        get_feedback(&mut self.conn.borrow_mut(), id)
    }
    fn feedback_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Vec<PreviousTourFeedback>> {
        feedback_of_previous_tour(&mut self.conn.borrow_mut(), previous_tour_id)
    }
}

impl<'a> FeedbackRepo for DbReadOnly<'a> {
    fn create_feedback(&self, _feedback: &PreviousTourFeedback) -> Result<()> {
        unreachable!();
    }
    fn delete_feedback(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn get_feedback(&self, id: &str) -> Result<PreviousTourFeedback> {
        get_feedback(&mut self.conn.borrow_mut(), id)
    }
    fn feedback_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Vec<PreviousTourFeedback>> {
        feedback_of_previous_tour(&mut self.conn.borrow_mut(), previous_tour_id)
    }
}

fn into_previous_tour(
    conn: &mut SqliteConnection,
    row: models::PreviousTourRow,
) -> Result<PreviousTour> {
    let models::PreviousTourRow {
        rowid: _,
        id,
        org_rowid,
        guide_rowid,
        tour_name,
        tour_location,
        tour_date,
        completed_at,
        avg_feedback_rating,
        total_travelers,
    } = row;
    let organization_id = load_organization_id(conn, org_rowid)?;
    let guide_id = load_guide_id(conn, guide_rowid)?;
    Ok(PreviousTour {
        id: id.into(),
        organization_id: organization_id.into(),
        guide_id: guide_id.into(),
        tour_name,
        tour_location,
        tour_date: Timestamp::from_secs(tour_date),
        completed_at: Timestamp::from_secs(completed_at),
        avg_feedback_rating: avg_feedback_rating.map(Into::into),
        total_travelers: total_travelers as u32,
    })
}

fn create_previous_tour(conn: &mut SqliteConnection, previous_tour: &PreviousTour) -> Result<()> {
    let org_rowid = resolve_organization_rowid(conn, previous_tour.organization_id.as_str())?;
    let guide_rowid = resolve_guide_rowid(conn, previous_tour.guide_id.as_str())?;
    let new_previous_tour = models::NewPreviousTour {
        id: previous_tour.id.as_str(),
        org_rowid,
        guide_rowid,
        tour_name: &previous_tour.tour_name,
        tour_location: &previous_tour.tour_location,
        tour_date: previous_tour.tour_date.as_secs(),
        completed_at: previous_tour.completed_at.as_secs(),
        avg_feedback_rating: previous_tour.avg_feedback_rating.map(Into::into),
        total_travelers: i64::from(previous_tour.total_travelers),
    };
    let _count = diesel::insert_into(schema::previous_tours::table)
        .values(&new_previous_tour)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_previous_tour(conn: &mut SqliteConnection, previous_tour: &PreviousTour) -> Result<()> {
    use schema::previous_tours::dsl;
    let count = diesel::update(
        schema::previous_tours::table.filter(dsl::id.eq(previous_tour.id.as_str())),
    )
    .set((
        dsl::avg_feedback_rating.eq(previous_tour.avg_feedback_rating.map(f64::from)),
        dsl::total_travelers.eq(i64::from(previous_tour.total_travelers)),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_previous_tour(conn: &mut SqliteConnection, id: &str) -> Result<PreviousTour> {
    use schema::previous_tours::dsl;
    let row = schema::previous_tours::table
        .filter(dsl::id.eq(id))
        .first::<models::PreviousTourRow>(conn)
        .map_err(from_diesel_err)?;
    into_previous_tour(conn, row)
}

fn previous_tours_of_guide(
    conn: &mut SqliteConnection,
    guide_id: &str,
) -> Result<Vec<PreviousTour>> {
    use schema::previous_tours::dsl;
    let guide_rowid = resolve_guide_rowid(conn, guide_id)?;
    let rows = schema::previous_tours::table
        .filter(dsl::guide_rowid.eq(guide_rowid))
        .order_by(dsl::completed_at.desc())
        .load::<models::PreviousTourRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| into_previous_tour(conn, row))
        .collect()
}

fn into_feedback(
    conn: &mut SqliteConnection,
    row: models::PreviousTourFeedbackRow,
) -> Result<PreviousTourFeedback> {
    let models::PreviousTourFeedbackRow {
        rowid: _,
        id,
        parent_rowid,
        author_rowid,
        rating,
        text,
        created_at,
    } = row;
    let previous_tour_id = load_previous_tour_id(conn, parent_rowid)?;
    let author_email = load_user_email(conn, author_rowid)?;
    Ok(PreviousTourFeedback {
        id: id.into(),
        previous_tour_id: previous_tour_id.into(),
        author_email: EmailAddress::new_unchecked(author_email),
        rating: StarRating::new(f64::from(rating)),
        text,
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_feedback(conn: &mut SqliteConnection, feedback: &PreviousTourFeedback) -> Result<()> {
    let parent_rowid = resolve_previous_tour_rowid(conn, feedback.previous_tour_id.as_str())?;
    let author_rowid = resolve_user_rowid(conn, feedback.author_email.as_str())?;
    let new_feedback = models::NewPreviousTourFeedback {
        id: feedback.id.as_str(),
        parent_rowid,
        author_rowid,
        rating: f64::from(feedback.rating) as i16,
        text: &feedback.text,
        created_at: feedback.created_at.as_secs(),
    };
    let _count = diesel::insert_into(schema::previous_tour_feedback::table)
        .values(&new_feedback)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn delete_feedback(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::previous_tour_feedback::dsl;
    let count =
        diesel::delete(schema::previous_tour_feedback::table.filter(dsl::id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_feedback(conn: &mut SqliteConnection, id: &str) -> Result<PreviousTourFeedback> {
    use schema::previous_tour_feedback::dsl;
    let row = schema::previous_tour_feedback::table
        .filter(dsl::id.eq(id))
        .first::<models::PreviousTourFeedbackRow>(conn)
        .map_err(from_diesel_err)?;
    into_feedback(conn, row)
}

fn feedback_of_previous_tour(
    conn: &mut SqliteConnection,
    previous_tour_id: &str,
) -> Result<Vec<PreviousTourFeedback>> {
    use schema::previous_tour_feedback::dsl;
    let parent_rowid = resolve_previous_tour_rowid(conn, previous_tour_id)?;
    let rows = schema::previous_tour_feedback::table
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .order_by(dsl::created_at.desc())
        .load::<models::PreviousTourFeedbackRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter().map(|row| into_feedback(conn, row)).collect()
}
