use super::*;

pub fn create_peer_review(
    connections: &sqlite::Connections,
    author: &User,
    subject_email: &EmailAddress,
    review: usecases::NewReview,
) -> Result<PeerReview> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| {
        usecases::create_peer_review(conn, author, subject_email, review)
    })?)
}

pub fn create_tour_review(
    connections: &sqlite::Connections,
    author: &User,
    tour_id: &str,
    review: usecases::NewReview,
) -> Result<TourReview> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::create_tour_review(conn, author, tour_id, review))?)
}
