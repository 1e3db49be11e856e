use super::prelude::*;

pub fn create_post<R: PostRepo>(repo: &R, author: &User, body: String) -> Result<Post> {
    if body.trim().is_empty() {
        return Err(Error::EmptyPost);
    }
    let post = Post {
        id: Id::new(),
        author_email: author.email.clone(),
        body,
        created_at: Timestamp::now(),
    };
    repo.create_post(&post)?;
    Ok(post)
}

pub fn comment_post<R: PostRepo>(
    repo: &R,
    author: &User,
    post_id: &str,
    text: String,
) -> Result<PostComment> {
    if text.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    let post = repo.get_post(post_id)?;
    let comment = PostComment {
        id: Id::new(),
        post_id: post.id,
        author_email: author.email.clone(),
        text,
        created_at: Timestamp::now(),
    };
    repo.create_post_comment(&comment)?;
    Ok(comment)
}

/// A like is the existence of a (post, user) row; liking again removes
/// it. Returns whether the post is liked afterwards.
pub fn toggle_post_like<R: PostRepo>(repo: &R, user: &User, post_id: &str) -> Result<bool> {
    let post = repo.get_post(post_id)?;
    if repo.is_post_liked_by(post.id.as_str(), &user.email)? {
        repo.delete_post_like(post.id.as_str(), &user.email)?;
        Ok(false)
    } else {
        repo.create_post_like(post.id.as_str(), &user.email)?;
        Ok(true)
    }
}

pub fn recent_posts<R: PostRepo>(repo: &R, pagination: &Pagination) -> Result<Vec<Post>> {
    Ok(repo.recent_posts(pagination)?)
}

pub fn comments_of_post<R: PostRepo>(repo: &R, post_id: &str) -> Result<Vec<PostComment>> {
    Ok(repo.comments_of_post(post_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};

    #[test]
    fn like_is_a_toggle() {
        let db = MockDb::default();
        let author = fixtures::traveler(&db, "author@example.com");
        let liker = fixtures::traveler(&db, "liker@example.com");
        let post = create_post(&db, &author, "First tour done!".into()).unwrap();
        assert!(toggle_post_like(&db, &liker, post.id.as_str()).unwrap());
        assert_eq!(db.count_post_likes(post.id.as_str()).unwrap(), 1);
        assert!(!toggle_post_like(&db, &liker, post.id.as_str()).unwrap());
        assert_eq!(db.count_post_likes(post.id.as_str()).unwrap(), 0);
    }

    #[test]
    fn empty_post_body_is_invalid() {
        let db = MockDb::default();
        let author = fixtures::traveler(&db, "author@example.com");
        assert!(matches!(
            create_post(&db, &author, "   ".into()),
            Err(Error::EmptyPost)
        ));
    }

    #[test]
    fn comments_require_an_existing_post() {
        let db = MockDb::default();
        let author = fixtures::traveler(&db, "author@example.com");
        assert!(matches!(
            comment_post(&db, &author, "missing", "hello".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
