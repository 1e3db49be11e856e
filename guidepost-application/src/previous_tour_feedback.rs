use super::*;

pub fn add_feedback(
    connections: &sqlite::Connections,
    author: &User,
    previous_tour_id: &str,
    feedback: usecases::NewFeedback,
) -> Result<PreviousTourFeedback> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| {
        usecases::add_feedback(conn, author, previous_tour_id, feedback)
    })?)
}

pub fn delete_feedback(
    connections: &sqlite::Connections,
    caller: &User,
    feedback_id: &str,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::delete_feedback(conn, caller, feedback_id))?)
}
