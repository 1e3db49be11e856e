use super::prelude::*;
use ::url::Url;

#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
    pub tax_id: i64,
    pub website: Option<String>,
    pub slogan: Option<String>,
}

pub fn create_organization<R>(repo: &R, user: &User, o: NewOrganization) -> Result<Organization>
where
    R: OrganizationRepo + UserRepo,
{
    if user.role == Role::Admin {
        return Err(Error::Forbidden);
    }
    if repo.try_get_org_by_user_email(&user.email)?.is_some() {
        return Err(Error::OrganizationProfileExists);
    }
    let NewOrganization {
        name,
        tax_id,
        website,
        slogan,
    } = o;
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    let tax_id = TaxId::try_from(tax_id)?;
    let website = website
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.parse::<Url>())
        .transpose()?;
    let org = Organization {
        id: Id::new(),
        user_email: user.email.clone(),
        name,
        tax_id,
        website,
        slogan: slogan.filter(|s| !s.trim().is_empty()),
    };
    repo.create_org(&org)?;
    if user.role != Role::Organization {
        let user = User {
            role: Role::Organization,
            ..user.clone()
        };
        repo.update_user(&user)?;
    }
    log::info!("Created organization {} for {}", org.id, org.user_email);
    Ok(org)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn traveler(db: &MockDb, email: &str) -> User {
        let user = User {
            email: email.parse().unwrap(),
            display_name: "Somebody".into(),
            role: Role::Traveler,
        };
        db.create_user(&user).unwrap();
        user
    }

    fn new_org() -> NewOrganization {
        NewOrganization {
            name: "City Tours Ltd.".into(),
            tax_id: 987_654,
            website: Some("https://citytours.example.com".into()),
            slogan: None,
        }
    }

    #[test]
    fn create_and_upgrade_role() {
        let db = MockDb::default();
        let user = traveler(&db, "biz@example.com");
        let org = create_organization(&db, &user, new_org()).unwrap();
        assert_eq!(org.tax_id.get(), 987_654);
        assert_eq!(
            db.get_user_by_email(&user.email).unwrap().role,
            Role::Organization
        );
    }

    #[test]
    fn non_positive_tax_id_is_rejected() {
        let db = MockDb::default();
        let user = traveler(&db, "biz@example.com");
        let org = NewOrganization {
            tax_id: 0,
            ..new_org()
        };
        assert!(matches!(
            create_organization(&db, &user, org),
            Err(Error::TaxId)
        ));
    }

    #[test]
    fn one_organization_per_user() {
        let db = MockDb::default();
        let user = traveler(&db, "biz@example.com");
        assert!(create_organization(&db, &user, new_org()).is_ok());
        assert!(matches!(
            create_organization(&db, &user, new_org()),
            Err(Error::OrganizationProfileExists)
        ));
    }
}
