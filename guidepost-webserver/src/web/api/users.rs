use super::*;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let json::NewUser {
        email,
        display_name,
    } = new_user?.into_inner();
    let new_user = usecases::NewUser {
        email: email.parse()?,
        display_name,
    };
    let user = flows::register_user(&db, &*notify.0, new_user)?;
    Ok(Json(user.into()))
}

/// Issues the session cookie for an identity that the external auth
/// provider has already verified. Unknown identities are rejected.
#[post("/session", format = "application/json", data = "<credentials>")]
pub fn post_session(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    credentials: JsonResult<json::Credentials>,
) -> Result<()> {
    let credentials = credentials?.into_inner();
    let email: EmailAddress = credentials.email.parse()?;
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, &email, Role::Guest).map_err(|err| {
            log::debug!("Session for unknown identity '{}' refused", email);
            err
        })?;
    }
    cookies.add_private(Cookie::new(COOKIE_EMAIL_KEY, email.into_string()));
    Ok(Json(()))
}

#[delete("/session")]
pub fn delete_session(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(Cookie::from(COOKIE_EMAIL_KEY));
    Json(())
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.email(), account.email())?;
    Ok(Json(user.into()))
}

#[delete("/users/<email>")]
pub fn delete_user(db: sqlite::Connections, account: Account, email: String) -> Result<()> {
    usecases::delete_user(&db.exclusive()?, account.email(), &email.parse()?)?;
    Ok(Json(()))
}
