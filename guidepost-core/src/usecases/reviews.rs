use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i64,
    pub text: String,
}

fn parse_rating(rating: i64) -> Result<StarRating> {
    if !(1..=5).contains(&rating) {
        return Err(Error::RatingValue);
    }
    Ok(StarRating::new(rating as f64))
}

/// One review per (author, subject) pair; reviewing yourself is not
/// allowed.
pub fn create_peer_review<R>(
    repo: &R,
    author: &User,
    subject_email: &EmailAddress,
    r: NewReview,
) -> Result<PeerReview>
where
    R: ReviewRepo + UserRepo,
{
    if author.email == *subject_email {
        return Err(Error::Forbidden);
    }
    let rating = parse_rating(r.rating)?;
    let subject = repo.get_user_by_email(subject_email)?;
    let review = PeerReview {
        id: Id::new(),
        author_email: author.email.clone(),
        subject_email: subject.email,
        rating,
        text: r.text,
        created_at: Timestamp::now(),
    };
    repo.create_peer_review(&review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyReviewed,
        err => Error::Repo(err),
    })?;
    Ok(review)
}

/// One review per (author, tour) pair.
pub fn create_tour_review<R>(
    repo: &R,
    author: &User,
    tour_id: &str,
    r: NewReview,
) -> Result<TourReview>
where
    R: ReviewRepo + TourRepo,
{
    let rating = parse_rating(r.rating)?;
    let tour = repo.get_tour(tour_id)?;
    let review = TourReview {
        id: Id::new(),
        author_email: author.email.clone(),
        tour_id: tour.id,
        rating,
        text: r.text,
        created_at: Timestamp::now(),
    };
    repo.create_tour_review(&review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyReviewed,
        err => Error::Repo(err),
    })?;
    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};

    fn review(rating: i64) -> NewReview {
        NewReview {
            rating,
            text: "great to work with".into(),
        }
    }

    #[test]
    fn one_peer_review_per_pair() {
        let db = MockDb::default();
        let author = fixtures::traveler(&db, "author@example.com");
        let subject = fixtures::traveler(&db, "subject@example.com");
        assert!(create_peer_review(&db, &author, &subject.email, review(5)).is_ok());
        assert!(matches!(
            create_peer_review(&db, &author, &subject.email, review(4)),
            Err(Error::AlreadyReviewed)
        ));
        // The same author may still review somebody else.
        let third = fixtures::traveler(&db, "third@example.com");
        assert!(create_peer_review(&db, &author, &third.email, review(4)).is_ok());
    }

    #[test]
    fn self_review_is_forbidden() {
        let db = MockDb::default();
        let author = fixtures::traveler(&db, "author@example.com");
        assert!(matches!(
            create_peer_review(&db, &author, &author.email.clone(), review(5)),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn one_tour_review_per_author() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let tour = fixtures::tour(&db, &org);
        let author = fixtures::traveler(&db, "author@example.com");
        assert!(create_tour_review(&db, &author, tour.id.as_str(), review(4)).is_ok());
        assert!(matches!(
            create_tour_review(&db, &author, tour.id.as_str(), review(2)),
            Err(Error::AlreadyReviewed)
        ));
    }

    #[test]
    fn rating_range_is_validated() {
        let db = MockDb::default();
        let author = fixtures::traveler(&db, "author@example.com");
        let subject = fixtures::traveler(&db, "subject@example.com");
        assert!(matches!(
            create_peer_review(&db, &author, &subject.email, review(0)),
            Err(Error::RatingValue)
        ));
    }
}
