use super::*;

pub fn create_tour(
    connections: &sqlite::Connections,
    org: &Organization,
    tour: usecases::NewTour,
) -> Result<Tour> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::create_tour(conn, org, tour))?)
}

pub fn update_tour(
    connections: &sqlite::Connections,
    org: &Organization,
    tour_id: &str,
    tour: usecases::NewTour,
) -> Result<Tour> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::update_tour(conn, org, tour_id, tour))?)
}

pub fn assign_guide(
    connections: &sqlite::Connections,
    org: &Organization,
    tour_id: &str,
    guide_id: &str,
) -> Result<Tour> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::assign_guide(conn, org, tour_id, guide_id))?)
}
