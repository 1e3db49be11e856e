use super::*;

pub fn create_post(
    connections: &sqlite::Connections,
    author: &User,
    body: String,
) -> Result<Post> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::create_post(conn, author, body))?)
}

pub fn comment_post(
    connections: &sqlite::Connections,
    author: &User,
    post_id: &str,
    text: String,
) -> Result<PostComment> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::comment_post(conn, author, post_id, text))?)
}

pub fn toggle_post_like(
    connections: &sqlite::Connections,
    user: &User,
    post_id: &str,
) -> Result<bool> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::toggle_post_like(conn, user, post_id))?)
}
