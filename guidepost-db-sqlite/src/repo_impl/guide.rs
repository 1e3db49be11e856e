use super::*;

impl<'a> GuideRepo for DbReadWrite<'a> {
    fn create_guide(&self, guide: &Guide) -> Result<()> {
        create_guide(&mut self.conn.borrow_mut(), guide)
    }
    fn update_guide(&self, guide: &Guide) -> Result<()> {
        update_guide(&mut self.conn.borrow_mut(), guide)
    }
    fn get_guide(&self, id: &str) -> Result<Guide> {
        get_guide(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_guide_by_user_email(&self, email: &EmailAddress) -> Result<Option<Guide>> {
        try_get_guide_by_user_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_guides(&self) -> Result<usize> {
        count_guides(&mut self.conn.borrow_mut())
    }
}

impl<'a> GuideRepo for DbConnection<'a> {
    fn create_guide(&self, guide: &Guide) -> Result<()> {
        create_guide(&mut self.conn.borrow_mut(), guide)
    }
    fn update_guide(&self, guide: &Guide) -> Result<()> {
        update_guide(&mut self.conn.borrow_mut(), guide)
    }
    fn get_guide(&self, id: &str) -> Result<Guide> {
        get_guide(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_guide_by_user_email(&self, email: &EmailAddress) -> Result<Option<Guide>> {
        try_get_guide_by_user_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_guides(&self) -> Result<usize> {
        count_guides(&mut self.conn.borrow_mut())
    }
}

impl<'a> GuideRepo for DbReadOnly<'a> {
    fn create_guide(&self, _guide: &Guide) -> Result<()> {
        unreachable!();
    }
    fn update_guide(&self, _guide: &Guide) -> Result<()> {
        unreachable!();
    }
    fn get_guide(&self, id: &str) -> Result<Guide> {
        get_guide(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_guide_by_user_email(&self, email: &EmailAddress) -> Result<Option<Guide>> {
        try_get_guide_by_user_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_guides(&self) -> Result<usize> {
        count_guides(&mut self.conn.borrow_mut())
    }
}

fn load_certificates(conn: &mut SqliteConnection, guide_rowid: i64) -> Result<Vec<String>> {
    use schema::tour_guide_certificate::dsl;
    schema::tour_guide_certificate::table
        .select(dsl::certificate)
        .filter(dsl::parent_rowid.eq(&guide_rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_work_experience(conn: &mut SqliteConnection, guide_rowid: i64) -> Result<Vec<String>> {
    use schema::tour_guide_work_experience::dsl;
    schema::tour_guide_work_experience::table
        .select(dsl::experience)
        .filter(dsl::parent_rowid.eq(&guide_rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn replace_string_lists(conn: &mut SqliteConnection, guide_rowid: i64, guide: &Guide) -> Result<()> {
    use schema::{tour_guide_certificate::dsl as cert_dsl, tour_guide_work_experience::dsl as exp_dsl};
    diesel::delete(
        schema::tour_guide_certificate::table.filter(cert_dsl::parent_rowid.eq(guide_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(
        schema::tour_guide_work_experience::table.filter(exp_dsl::parent_rowid.eq(guide_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    for certificate in &guide.certificates {
        let new_row = models::NewTourGuideCertificate {
            parent_rowid: guide_rowid,
            certificate,
        };
        diesel::insert_into(schema::tour_guide_certificate::table)
            .values(&new_row)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for experience in &guide.work_experience {
        let new_row = models::NewTourGuideWorkExperience {
            parent_rowid: guide_rowid,
            experience,
        };
        diesel::insert_into(schema::tour_guide_work_experience::table)
            .values(&new_row)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn into_guide(conn: &mut SqliteConnection, row: models::TourGuideRow) -> Result<Guide> {
    let models::TourGuideRow {
        rowid,
        id,
        user_rowid,
        school,
        description,
        cv_url,
        avg_rating,
        total_reviews,
        rating_penalty,
    } = row;
    let user_email = load_user_email(conn, user_rowid)?;
    let certificates = load_certificates(conn, rowid)?;
    let work_experience = load_work_experience(conn, rowid)?;
    Ok(Guide {
        id: id.into(),
        user_email: EmailAddress::new_unchecked(user_email),
        school,
        description,
        certificates,
        work_experience,
        cv_url: cv_url.and_then(load_url),
        avg_rating: avg_rating.map(Into::into),
        total_reviews: total_reviews as u64,
        rating_penalty: RatingPenalty::from_stars(rating_penalty),
    })
}

fn create_guide(conn: &mut SqliteConnection, guide: &Guide) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, guide.user_email.as_str())?;
    let cv_url = guide.cv_url.as_ref().map(url::Url::as_str);
    let new_guide = models::NewTourGuide {
        id: guide.id.as_str(),
        user_rowid,
        school: &guide.school,
        description: &guide.description,
        cv_url,
        avg_rating: guide.avg_rating.map(Into::into),
        total_reviews: guide.total_reviews as i64,
        rating_penalty: guide.rating_penalty.as_stars(),
    };
    run_in_transaction(conn, |conn| {
        diesel::insert_into(schema::tour_guide::table)
            .values(&new_guide)
            .execute(conn)
            .map_err(from_diesel_err)?;
        let guide_rowid = resolve_guide_rowid(conn, guide.id.as_str())?;
        replace_string_lists(conn, guide_rowid, guide)
    })
}

fn update_guide(conn: &mut SqliteConnection, guide: &Guide) -> Result<()> {
    use schema::tour_guide::dsl;
    let guide_rowid = resolve_guide_rowid(conn, guide.id.as_str())?;
    let cv_url = guide.cv_url.as_ref().map(url::Url::as_str);
    run_in_transaction(conn, |conn| {
        let _count = diesel::update(schema::tour_guide::table.filter(dsl::rowid.eq(guide_rowid)))
            .set((
                dsl::school.eq(&guide.school),
                dsl::description.eq(&guide.description),
                dsl::cv_url.eq(cv_url),
                dsl::avg_rating.eq(guide.avg_rating.map(f64::from)),
                dsl::total_reviews.eq(guide.total_reviews as i64),
                dsl::rating_penalty.eq(guide.rating_penalty.as_stars()),
            ))
            .execute(conn)
            .map_err(from_diesel_err)?;
        debug_assert_eq!(1, _count);
        replace_string_lists(conn, guide_rowid, guide)
    })
}

fn get_guide(conn: &mut SqliteConnection, id: &str) -> Result<Guide> {
    use schema::tour_guide::dsl;
    let row = schema::tour_guide::table
        .filter(dsl::id.eq(id))
        .first::<models::TourGuideRow>(conn)
        .map_err(from_diesel_err)?;
    into_guide(conn, row)
}

fn try_get_guide_by_user_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<Guide>> {
    use schema::{tour_guide::dsl, users::dsl as user_dsl};
    schema::tour_guide::table
        .inner_join(schema::users::table)
        .select((
            dsl::rowid,
            dsl::id,
            dsl::user_rowid,
            dsl::school,
            dsl::description,
            dsl::cv_url,
            dsl::avg_rating,
            dsl::total_reviews,
            dsl::rating_penalty,
        ))
        .filter(user_dsl::email.eq(email.as_str()))
        .first::<models::TourGuideRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|row| into_guide(conn, row))
        .transpose()
}

fn count_guides(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::tour_guide::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
