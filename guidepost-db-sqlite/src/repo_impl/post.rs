use super::*;

impl<'a> PostRepo for DbReadWrite<'a> {
    fn create_post(&self, post: &Post) -> Result<()> {
        create_post(&mut self.conn.borrow_mut(), post)
    }
    fn get_post(&self, id: &str) -> Result<Post> {
        get_post(&mut self.conn.borrow_mut(), id)
    }
    fn recent_posts(&self, pagination: &Pagination) -> Result<Vec<Post>> {
        recent_posts(&mut self.conn.borrow_mut(), pagination)
    }
    fn create_post_comment(&self, comment: &PostComment) -> Result<()> {
        create_post_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn comments_of_post(&self, post_id: &str) -> Result<Vec<PostComment>> {
        comments_of_post(&mut self.conn.borrow_mut(), post_id)
    }
    fn is_post_liked_by(&self, post_id: &str, user_email: &EmailAddress) -> Result<bool> {
        is_post_liked_by(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn create_post_like(&self, post_id: &str, user_email: &EmailAddress) -> Result<()> {
        create_post_like(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn delete_post_like(&self, post_id: &str, user_email: &EmailAddress) -> Result<()> {
        delete_post_like(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn count_post_likes(&self, post_id: &str) -> Result<u64> {
        count_post_likes(&mut self.conn.borrow_mut(), post_id)
    }
}

impl<'a> PostRepo for DbConnection<'a> {
    fn create_post(&self, post: &Post) -> Result<()> {
        create_post(&mut self.conn.borrow_mut(), post)
    }
    fn get_post(&self, id: &str) -> Result<Post> {
        get_post(&mut self.conn.borrow_mut(), id)
    }
    fn recent_posts(&self, pagination: &Pagination) -> Result<Vec<Post>> {
        recent_posts(&mut self.conn.borrow_mut(), pagination)
    }
    fn create_post_comment(&self, comment: &PostComment) -> Result<()> {
        create_post_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn comments_of_post(&self, post_id: &str) -> Result<Vec<PostComment>> {
        comments_of_post(&mut self.conn.borrow_mut(), post_id)
    }
    fn is_post_liked_by(&self, post_id: &str, user_email: &EmailAddress) -> Result<bool> {
        is_post_liked_by(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn create_post_like(&self, post_id: &str, user_email: &EmailAddress) -> Result<()> {
        create_post_like(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn delete_post_like(&self, post_id: &str, user_email: &EmailAddress) -> Result<()> {
        delete_post_like(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn count_post_likes(&self, post_id: &str) -> Result<u64> {
        count_post_likes(&mut self.conn.borrow_mut(), post_id)
    }
}

impl<'a> PostRepo for DbReadOnly<'a> {
    fn create_post(&self, _post: &Post) -> Result<()> {
        unreachable!();
    }
    fn get_post(&self, id: &str) -> Result<Post> {
        get_post(&mut self.conn.borrow_mut(), id)
    }
    fn recent_posts(&self, pagination: &Pagination) -> Result<Vec<Post>> {
        recent_posts(&mut self.conn.borrow_mut(), pagination)
    }
    fn create_post_comment(&self, _comment: &PostComment) -> Result<()> {
        unreachable!();
    }
    fn comments_of_post(&self, post_id: &str) -> Result<Vec<PostComment>> {
        comments_of_post(&mut self.conn.borrow_mut(), post_id)
    }
    fn is_post_liked_by(&self, post_id: &str, user_email: &EmailAddress) -> Result<bool> {
        is_post_liked_by(&mut self.conn.borrow_mut(), post_id, user_email)
    }
    fn create_post_like(&self, _post_id: &str, _user_email: &EmailAddress) -> Result<()> {
        unreachable!();
    }
    fn delete_post_like(&self, _post_id: &str, _user_email: &EmailAddress) -> Result<()> {
        unreachable!();
    }
    fn count_post_likes(&self, post_id: &str) -> Result<u64> {
        count_post_likes(&mut self.conn.borrow_mut(), post_id)
    }
}

fn resolve_post_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::posts::dsl;
    schema::posts::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn into_post(conn: &mut SqliteConnection, row: models::PostRow) -> Result<Post> {
    let models::PostRow {
        rowid: _,
        id,
        author_rowid,
        body,
        created_at,
    } = row;
    let author_email = load_user_email(conn, author_rowid)?;
    Ok(Post {
        id: id.into(),
        author_email: EmailAddress::new_unchecked(author_email),
        body,
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_post(conn: &mut SqliteConnection, post: &Post) -> Result<()> {
    let author_rowid = resolve_user_rowid(conn, post.author_email.as_str())?;
    let new_post = models::NewPost {
        id: post.id.as_str(),
        author_rowid,
        body: &post.body,
        created_at: post.created_at.as_secs(),
    };
    let _count = diesel::insert_into(schema::posts::table)
        .values(&new_post)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_post(conn: &mut SqliteConnection, id: &str) -> Result<Post> {
    use schema::posts::dsl;
    let row = schema::posts::table
        .filter(dsl::id.eq(id))
        .first::<models::PostRow>(conn)
        .map_err(from_diesel_err)?;
    into_post(conn, row)
}

fn recent_posts(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<Post>> {
    use schema::posts::dsl;
    let mut query = schema::posts::table
        .order_by(dsl::created_at.desc())
        .into_boxed();
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    let rows = query
        .load::<models::PostRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter().map(|row| into_post(conn, row)).collect()
}

fn create_post_comment(conn: &mut SqliteConnection, comment: &PostComment) -> Result<()> {
    let post_rowid = resolve_post_rowid(conn, comment.post_id.as_str())?;
    let author_rowid = resolve_user_rowid(conn, comment.author_email.as_str())?;
    let new_comment = models::NewPostComment {
        id: comment.id.as_str(),
        post_rowid,
        author_rowid,
        text: &comment.text,
        created_at: comment.created_at.as_secs(),
    };
    let _count = diesel::insert_into(schema::post_comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn comments_of_post(conn: &mut SqliteConnection, post_id: &str) -> Result<Vec<PostComment>> {
    use schema::post_comment::dsl;
    let post_rowid = resolve_post_rowid(conn, post_id)?;
    let rows = schema::post_comment::table
        .filter(dsl::post_rowid.eq(post_rowid))
        .order_by(dsl::created_at.asc())
        .load::<models::PostCommentRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| {
            let models::PostCommentRow {
                rowid: _,
                id,
                post_rowid: _,
                author_rowid,
                text,
                created_at,
            } = row;
            let author_email = load_user_email(conn, author_rowid)?;
            Ok(PostComment {
                id: id.into(),
                post_id: post_id.into(),
                author_email: EmailAddress::new_unchecked(author_email),
                text,
                created_at: Timestamp::from_secs(created_at),
            })
        })
        .collect()
}

fn is_post_liked_by(
    conn: &mut SqliteConnection,
    post_id: &str,
    user_email: &EmailAddress,
) -> Result<bool> {
    use schema::post_like::dsl;
    let post_rowid = resolve_post_rowid(conn, post_id)?;
    let user_rowid = resolve_user_rowid(conn, user_email.as_str())?;
    let count = schema::post_like::table
        .filter(dsl::post_rowid.eq(post_rowid))
        .filter(dsl::user_rowid.eq(user_rowid))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn create_post_like(
    conn: &mut SqliteConnection,
    post_id: &str,
    user_email: &EmailAddress,
) -> Result<()> {
    let post_rowid = resolve_post_rowid(conn, post_id)?;
    let user_rowid = resolve_user_rowid(conn, user_email.as_str())?;
    let new_like = models::NewPostLike {
        post_rowid,
        user_rowid,
    };
    let _count = diesel::insert_into(schema::post_like::table)
        .values(&new_like)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn delete_post_like(
    conn: &mut SqliteConnection,
    post_id: &str,
    user_email: &EmailAddress,
) -> Result<()> {
    use schema::post_like::dsl;
    let post_rowid = resolve_post_rowid(conn, post_id)?;
    let user_rowid = resolve_user_rowid(conn, user_email.as_str())?;
    let count = diesel::delete(
        schema::post_like::table
            .filter(dsl::post_rowid.eq(post_rowid))
            .filter(dsl::user_rowid.eq(user_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn count_post_likes(conn: &mut SqliteConnection, post_id: &str) -> Result<u64> {
    use schema::post_like::dsl;
    let post_rowid = resolve_post_rowid(conn, post_id)?;
    Ok(schema::post_like::table
        .filter(dsl::post_rowid.eq(post_rowid))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}
