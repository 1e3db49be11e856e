use super::*;

pub fn create_organization(
    connections: &sqlite::Connections,
    user: &User,
    org: usecases::NewOrganization,
) -> Result<Organization> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::create_organization(conn, user, org))?)
}
