use super::prelude::*;
use crate::util::validate::Validate;
use ::url::Url;

#[derive(Debug, Clone, Default)]
pub struct NewGuideProfile {
    pub school: String,
    pub description: String,
    pub certificates: Vec<String>,
    pub work_experience: Vec<String>,
    pub cv_url: Option<String>,
}

/// Onboards the calling user as a guide. Organizations cannot double
/// as guides.
pub fn create_guide_profile<R>(repo: &R, user: &User, p: NewGuideProfile) -> Result<Guide>
where
    R: GuideRepo + UserRepo,
{
    if user.role >= Role::Organization {
        return Err(Error::Forbidden);
    }
    if repo.try_get_guide_by_user_email(&user.email)?.is_some() {
        return Err(Error::GuideProfileExists);
    }
    let guide = prepare_guide(Id::new(), user.email.clone(), p)?;
    repo.create_guide(&guide)?;
    if user.role < Role::Guide {
        let user = User {
            role: Role::Guide,
            ..user.clone()
        };
        repo.update_user(&user)?;
    }
    log::info!("Created guide profile {} for {}", guide.id, guide.user_email);
    Ok(guide)
}

pub fn update_guide_profile<R>(
    repo: &R,
    user: &User,
    guide_id: &str,
    p: NewGuideProfile,
) -> Result<Guide>
where
    R: GuideRepo,
{
    let old = repo.get_guide(guide_id)?;
    if old.user_email != user.email {
        return Err(Error::Forbidden);
    }
    let updated = prepare_guide(old.id.clone(), old.user_email.clone(), p)?;
    // Aggregates are maintained by the review pipeline, not by
    // profile edits.
    let updated = Guide {
        avg_rating: old.avg_rating,
        total_reviews: old.total_reviews,
        rating_penalty: old.rating_penalty,
        ..updated
    };
    repo.update_guide(&updated)?;
    Ok(updated)
}

fn prepare_guide(id: Id, user_email: EmailAddress, p: NewGuideProfile) -> Result<Guide> {
    let NewGuideProfile {
        school,
        description,
        certificates,
        work_experience,
        cv_url,
    } = p;
    let cv_url = cv_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.parse::<Url>())
        .transpose()?;
    let guide = Guide {
        id,
        user_email,
        school,
        description,
        certificates,
        work_experience,
        cv_url,
        avg_rating: None,
        total_reviews: 0,
        rating_penalty: RatingPenalty::none(),
    };
    guide.validate()?;
    Ok(guide)
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

    fn new_profile() -> NewGuideProfile {
        NewGuideProfile {
            school: "Tourism College".into(),
            description: "Licensed city guide".into(),
            ..Default::default()
        }
    }

    #[test]
    fn onboarding_upgrades_the_role() {
        let db = MockDb::default();
        let user = traveler(&db, "guide@example.com");
        let guide = create_guide_profile(&db, &user, new_profile()).unwrap();
        assert_eq!(guide.total_reviews, 0);
        assert!(guide.avg_rating.is_none());
        let user = db.get_user_by_email(&user.email).unwrap();
        assert_eq!(user.role, Role::Guide);
    }

    #[test]
    fn only_one_profile_per_user() {
        let db = MockDb::default();
        let user = traveler(&db, "guide@example.com");
        assert!(create_guide_profile(&db, &user, new_profile()).is_ok());
        assert!(matches!(
            create_guide_profile(&db, &user, new_profile()),
            Err(Error::GuideProfileExists)
        ));
    }

    #[test]
    fn school_is_mandatory() {
        let db = MockDb::default();
        let user = traveler(&db, "guide@example.com");
        let profile = NewGuideProfile {
            school: "  ".into(),
            ..new_profile()
        };
        assert!(matches!(
            create_guide_profile(&db, &user, profile),
            Err(Error::School)
        ));
    }

    #[test]
    fn invalid_cv_url_is_rejected() {
        let db = MockDb::default();
        let user = traveler(&db, "guide@example.com");
        let profile = NewGuideProfile {
            cv_url: Some("not a url".into()),
            ..new_profile()
        };
        assert!(matches!(
            create_guide_profile(&db, &user, profile),
            Err(Error::Url)
        ));
    }

    #[test]
    fn profile_edits_keep_aggregates() {
        let db = MockDb::default();
        let user = traveler(&db, "guide@example.com");
        let guide = create_guide_profile(&db, &user, new_profile()).unwrap();
        {
            let mut guides = db.guides.borrow_mut();
            let g = guides.iter_mut().find(|g| g.id == guide.id).unwrap();
            g.avg_rating = Some(4.5.into());
            g.total_reviews = 7;
        }
        let updated = update_guide_profile(
            &db,
            &user,
            guide.id.as_str(),
            NewGuideProfile {
                school: "Another School".into(),
                ..new_profile()
            },
        )
        .unwrap();
        assert_eq!(updated.school, "Another School");
        assert_eq!(updated.avg_rating, Some(4.5.into()));
        assert_eq!(updated.total_reviews, 7);
    }
}
