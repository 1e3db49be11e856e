use crate::{email::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id           : Id,
    pub author_email : EmailAddress,
    pub body         : String,
    pub created_at   : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostComment {
    pub id           : Id,
    pub post_id      : Id,
    pub author_email : EmailAddress,
    pub text         : String,
    pub created_at   : Timestamp,
}
