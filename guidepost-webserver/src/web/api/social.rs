use super::*;

#[post("/posts", format = "application/json", data = "<new_post>")]
pub fn post_post(
    db: sqlite::Connections,
    auth: Auth,
    new_post: JsonResult<json::NewPost>,
) -> Result<json::Post> {
    let json::NewPost { body } = new_post?.into_inner();
    let author = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let post = flows::create_post(&db, &author, body)?;
    Ok(Json(post.into()))
}

#[get("/posts?<offset>&<limit>")]
pub fn get_posts(
    db: sqlite::Connections,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Post>> {
    let pagination = Pagination { offset, limit };
    let posts = {
        let db = db.shared()?;
        usecases::recent_posts(&db, &pagination)?
    };
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[post("/posts/<id>/like")]
pub fn post_like(db: sqlite::Connections, auth: Auth, id: String) -> Result<json::LikeState> {
    let user = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let liked = flows::toggle_post_like(&db, &user, &id)?;
    Ok(Json(json::LikeState { liked }))
}

#[post("/posts/<id>/comments", format = "application/json", data = "<comment>")]
pub fn post_comment(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    comment: JsonResult<json::NewPostComment>,
) -> Result<json::PostComment> {
    let json::NewPostComment { text } = comment?.into_inner();
    let author = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Traveler)?
    };
    let comment = flows::comment_post(&db, &author, &id, text)?;
    Ok(Json(comment.into()))
}

#[get("/posts/<id>/comments")]
pub fn get_comments(db: sqlite::Connections, id: String) -> Result<Vec<json::PostComment>> {
    let comments = {
        let db = db.shared()?;
        usecases::comments_of_post(&db, &id)?
    };
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}
