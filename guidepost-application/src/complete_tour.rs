use super::*;

pub fn complete_tour(
    connections: &sqlite::Connections,
    org: &Organization,
    tour_id: &str,
    total_travelers: u32,
) -> Result<PreviousTour> {
    let previous_tour = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| usecases::complete_tour(conn, org, tour_id, total_travelers))
    }?;
    info!(
        "Tour {} completed as previous tour {}",
        tour_id, previous_tour.id
    );
    Ok(previous_tour)
}
