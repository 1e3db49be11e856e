use super::prelude::*;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Re-derives the caller from the session identity. The role is always
/// read back from the database, never taken from the client.
pub fn authorize_user_by_email<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User> {
    if let Some(user) = repo.try_get_user_by_email(email)? {
        return authorize_role(&user, min_required_role)
            .map(|()| user)
            .map_err(|_| Error::Unauthorized);
    }
    Err(Error::Unauthorized)
}

/// The organization profile owned by the calling user.
pub fn authorize_organization_of_user<R: OrganizationRepo>(
    repo: &R,
    user: &User,
) -> Result<Organization> {
    if user.role != Role::Organization {
        return Err(Error::Forbidden);
    }
    repo.try_get_org_by_user_email(&user.email)?
        .ok_or(Error::Forbidden)
}

/// The guide profile owned by the calling user.
pub fn authorize_guide_of_user<R: GuideRepo>(repo: &R, user: &User) -> Result<Guide> {
    repo.try_get_guide_by_user_email(&user.email)?
        .ok_or(Error::Forbidden)
}

pub fn authorize_org_owns_tour(org: &Organization, tour: &Tour) -> Result<()> {
    if tour.organization_id != org.id {
        return Err(Error::Forbidden);
    }
    Ok(())
}

pub fn authorize_org_owns_previous_tour(
    org: &Organization,
    previous_tour: &PreviousTour,
) -> Result<()> {
    if previous_tour.organization_id != org.id {
        return Err(Error::Forbidden);
    }
    Ok(())
}
