use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub display_name: String,
}

/// Registers the account behind an externally authenticated identity.
/// Credentials never reach this system.
pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if u.display_name.trim().is_empty() {
        return Err(Error::Name);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        email: u.email,
        display_name: u.display_name,
        role: Role::Traveler,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.parse().unwrap(),
            display_name: "Somebody".into(),
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de")).is_ok());
        assert!(create_new_user(&db, new_user("baz@bar.de")).is_ok());
        assert!(db
            .get_user_by_email(&"foo@bar.de".parse().unwrap())
            .is_ok());
        assert!(db
            .get_user_by_email(&"baz@bar.de".parse().unwrap())
            .is_ok());
    }

    #[test]
    fn new_users_start_as_travelers() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("foo@bar.de")).unwrap();
        assert_eq!(user.role, Role::Traveler);
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("baz@foo.bar")).is_ok());
        match create_new_user(&db, new_user("baz@foo.bar")).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }
}
