use super::*;

pub fn create_guide_profile(
    connections: &sqlite::Connections,
    user: &User,
    profile: usecases::NewGuideProfile,
) -> Result<Guide> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::create_guide_profile(conn, user, profile))?)
}

pub fn update_guide_profile(
    connections: &sqlite::Connections,
    user: &User,
    guide_id: &str,
    profile: usecases::NewGuideProfile,
) -> Result<Guide> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::update_guide_profile(conn, user, guide_id, profile))?)
}
