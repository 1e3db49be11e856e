use super::*;

impl<'a> PerformanceReviewRepo for DbReadWrite<'a> {
    fn create_performance_review(&self, review: &GuidePerformanceReview) -> Result<()> {
        create_performance_review(&mut self.conn.borrow_mut(), review)
    }
    fn performance_reviews_of_guide(&self, guide_id: &str) -> Result<Vec<GuidePerformanceReview>> {
        performance_reviews_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
    fn try_get_performance_review_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Option<GuidePerformanceReview>> {
        try_get_performance_review_of_previous_tour(&mut self.conn.borrow_mut(), previous_tour_id)
    }
}

impl<'a> PerformanceReviewRepo for DbConnection<'a> {
    fn create_performance_review(&self, review: &GuidePerformanceReview) -> Result<()> {
        create_performance_review(&mut self.conn.borrow_mut(), review)
    }
    fn performance_reviews_of_guide(&self, guide_id: &str) -> Result<Vec<GuidePerformanceReview>> {
        performance_reviews_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
    fn try_get_performance_review_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Option<GuidePerformanceReview>> {
        try_get_performance_review_of_previous_tour(&mut self.conn.borrow_mut(), previous_tour_id)
    }
}

impl<'a> PerformanceReviewRepo for DbReadOnly<'a> {
    fn create_performance_review(&self, _review: &GuidePerformanceReview) -> Result<()> {
        unreachable!();
    }
    fn performance_reviews_of_guide(&self, guide_id: &str) -> Result<Vec<GuidePerformanceReview>> {
        performance_reviews_of_guide(&mut self.conn.borrow_mut(), guide_id)
    }
    fn try_get_performance_review_of_previous_tour(
        &self,
        previous_tour_id: &str,
    ) -> Result<Option<GuidePerformanceReview>> {
        try_get_performance_review_of_previous_tour(&mut self.conn.borrow_mut(), previous_tour_id)
    }
}

fn load_strengths(conn: &mut SqliteConnection, review_rowid: i64) -> Result<Vec<String>> {
    use schema::guide_performance_review_strength::dsl;
    schema::guide_performance_review_strength::table
        .select(dsl::strength)
        .filter(dsl::parent_rowid.eq(&review_rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn into_review(
    conn: &mut SqliteConnection,
    row: models::GuidePerformanceReviewRow,
) -> Result<GuidePerformanceReview> {
    let models::GuidePerformanceReviewRow {
        rowid,
        id,
        previous_tour_rowid,
        guide_rowid,
        summary,
        improvements,
        sentiment_score,
        rating,
        red_flags,
        tour_name,
        tour_location,
        tour_date,
        created_at,
    } = row;
    let previous_tour_id = load_previous_tour_id(conn, previous_tour_rowid)?;
    let guide_id = load_guide_id(conn, guide_rowid)?;
    let strengths = load_strengths(conn, rowid)?;
    Ok(GuidePerformanceReview {
        id: id.into(),
        previous_tour_id: previous_tour_id.into(),
        guide_id: guide_id.into(),
        summary,
        strengths,
        improvements,
        sentiment_score: SentimentScore::clamped(i64::from(sentiment_score)),
        rating: StarRating::new(rating),
        red_flags: red_flags != 0,
        tour_name,
        tour_location,
        tour_date: Timestamp::from_secs(tour_date),
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_performance_review(
    conn: &mut SqliteConnection,
    review: &GuidePerformanceReview,
) -> Result<()> {
    let previous_tour_rowid =
        resolve_previous_tour_rowid(conn, review.previous_tour_id.as_str())?;
    let guide_rowid = resolve_guide_rowid(conn, review.guide_id.as_str())?;
    let new_review = models::NewGuidePerformanceReview {
        id: review.id.as_str(),
        previous_tour_rowid,
        guide_rowid,
        summary: &review.summary,
        improvements: &review.improvements,
        sentiment_score: i64::from(review.sentiment_score) as i16,
        rating: review.rating.into(),
        red_flags: i16::from(review.red_flags),
        tour_name: &review.tour_name,
        tour_location: &review.tour_location,
        tour_date: review.tour_date.as_secs(),
        created_at: review.created_at.as_secs(),
    };
    run_in_transaction(conn, |conn| {
        diesel::insert_into(schema::guide_performance_review::table)
            .values(&new_review)
            .execute(conn)
            .map_err(from_diesel_err)?;
        let review_rowid = resolve_review_rowid(conn, review.id.as_str())?;
        for strength in &review.strengths {
            let new_strength = models::NewGuidePerformanceReviewStrength {
                parent_rowid: review_rowid,
                strength,
            };
            diesel::insert_into(schema::guide_performance_review_strength::table)
                .values(&new_strength)
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        Ok(())
    })
}

fn resolve_review_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::guide_performance_review::dsl;
    schema::guide_performance_review::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn performance_reviews_of_guide(
    conn: &mut SqliteConnection,
    guide_id: &str,
) -> Result<Vec<GuidePerformanceReview>> {
    use schema::guide_performance_review::dsl;
    let guide_rowid = resolve_guide_rowid(conn, guide_id)?;
    let rows = schema::guide_performance_review::table
        .filter(dsl::guide_rowid.eq(guide_rowid))
        .order_by(dsl::created_at.desc())
        .load::<models::GuidePerformanceReviewRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter().map(|row| into_review(conn, row)).collect()
}

fn try_get_performance_review_of_previous_tour(
    conn: &mut SqliteConnection,
    previous_tour_id: &str,
) -> Result<Option<GuidePerformanceReview>> {
    use schema::guide_performance_review::dsl;
    let previous_tour_rowid = resolve_previous_tour_rowid(conn, previous_tour_id)?;
    schema::guide_performance_review::table
        .filter(dsl::previous_tour_rowid.eq(previous_tour_rowid))
        .first::<models::GuidePerformanceReviewRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|row| into_review(conn, row))
        .transpose()
}
