use super::*;

impl<'a> ReviewRepo for DbReadWrite<'a> {
    fn create_peer_review(&self, review: &PeerReview) -> Result<()> {
        create_peer_review(&mut self.conn.borrow_mut(), review)
    }
    fn peer_reviews_of_user(&self, subject_email: &EmailAddress) -> Result<Vec<PeerReview>> {
        peer_reviews_of_user(&mut self.conn.borrow_mut(), subject_email)
    }
    fn create_tour_review(&self, review: &TourReview) -> Result<()> {
        create_tour_review(&mut self.conn.borrow_mut(), review)
    }
    fn tour_reviews_of_tour(&self, tour_id: &str) -> Result<Vec<TourReview>> {
        tour_reviews_of_tour(&mut self.conn.borrow_mut(), tour_id)
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_peer_review(&self, review: &PeerReview) -> Result<()> {
        create_peer_review(&mut self.conn.borrow_mut(), review)
    }
    fn peer_reviews_of_user(&self, subject_email: &EmailAddress) -> Result<Vec<PeerReview>> {
        peer_reviews_of_user(&mut self.conn.borrow_mut(), subject_email)
    }
    fn create_tour_review(&self, review: &TourReview) -> Result<()> {
        create_tour_review(&mut self.conn.borrow_mut(), review)
    }
    fn tour_reviews_of_tour(&self, tour_id: &str) -> Result<Vec<TourReview>> {
        tour_reviews_of_tour(&mut self.conn.borrow_mut(), tour_id)
    }
}

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_peer_review(&self, _review: &PeerReview) -> Result<()> {
        unreachable!();
    }
    fn peer_reviews_of_user(&self, subject_email: &EmailAddress) -> Result<Vec<PeerReview>> {
        peer_reviews_of_user(&mut self.conn.borrow_mut(), subject_email)
    }
    fn create_tour_review(&self, _review: &TourReview) -> Result<()> {
        unreachable!();
    }
    fn tour_reviews_of_tour(&self, tour_id: &str) -> Result<Vec<TourReview>> {
        tour_reviews_of_tour(&mut self.conn.borrow_mut(), tour_id)
    }
}

fn into_peer_review(conn: &mut SqliteConnection, row: models::PeerReviewRow) -> Result<PeerReview> {
    let models::PeerReviewRow {
        rowid: _,
        id,
        author_rowid,
        subject_rowid,
        rating,
        text,
        created_at,
    } = row;
    let author_email = load_user_email(conn, author_rowid)?;
    let subject_email = load_user_email(conn, subject_rowid)?;
    Ok(PeerReview {
        id: id.into(),
        author_email: EmailAddress::new_unchecked(author_email),
        subject_email: EmailAddress::new_unchecked(subject_email),
        rating: StarRating::new(f64::from(rating)),
        text,
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_peer_review(conn: &mut SqliteConnection, review: &PeerReview) -> Result<()> {
    let author_rowid = resolve_user_rowid(conn, review.author_email.as_str())?;
    let subject_rowid = resolve_user_rowid(conn, review.subject_email.as_str())?;
    let new_review = models::NewPeerReview {
        id: review.id.as_str(),
        author_rowid,
        subject_rowid,
        rating: f64::from(review.rating) as i16,
        text: &review.text,
        created_at: review.created_at.as_secs(),
    };
    let _count = diesel::insert_into(schema::peer_review::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn peer_reviews_of_user(
    conn: &mut SqliteConnection,
    subject_email: &EmailAddress,
) -> Result<Vec<PeerReview>> {
    use schema::peer_review::dsl;
    let subject_rowid = resolve_user_rowid(conn, subject_email.as_str())?;
    let rows = schema::peer_review::table
        .filter(dsl::subject_rowid.eq(subject_rowid))
        .order_by(dsl::created_at.desc())
        .load::<models::PeerReviewRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| into_peer_review(conn, row))
        .collect()
}

fn into_tour_review(conn: &mut SqliteConnection, row: models::TourReviewRow) -> Result<TourReview> {
    let models::TourReviewRow {
        rowid: _,
        id,
        author_rowid,
        tour_rowid,
        rating,
        text,
        created_at,
    } = row;
    let author_email = load_user_email(conn, author_rowid)?;
    let tour_id = load_tour_id(conn, tour_rowid)?;
    Ok(TourReview {
        id: id.into(),
        author_email: EmailAddress::new_unchecked(author_email),
        tour_id: tour_id.into(),
        rating: StarRating::new(f64::from(rating)),
        text,
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_tour_review(conn: &mut SqliteConnection, review: &TourReview) -> Result<()> {
    let author_rowid = resolve_user_rowid(conn, review.author_email.as_str())?;
    let tour_rowid = resolve_tour_rowid(conn, review.tour_id.as_str())?;
    let new_review = models::NewTourReview {
        id: review.id.as_str(),
        author_rowid,
        tour_rowid,
        rating: f64::from(review.rating) as i16,
        text: &review.text,
        created_at: review.created_at.as_secs(),
    };
    let _count = diesel::insert_into(schema::tour_review::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn tour_reviews_of_tour(conn: &mut SqliteConnection, tour_id: &str) -> Result<Vec<TourReview>> {
    use schema::tour_review::dsl;
    let tour_rowid = resolve_tour_rowid(conn, tour_id)?;
    let rows = schema::tour_review::table
        .filter(dsl::tour_rowid.eq(tour_rowid))
        .order_by(dsl::created_at.desc())
        .load::<models::TourReviewRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| into_tour_review(conn, row))
        .collect()
}
