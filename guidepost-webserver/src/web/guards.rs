use core::ops::Deref;

use rocket::{
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use guidepost_application::error::AppError;
use guidepost_core::{
    entities::*,
    gateways::{feedback_analysis::FeedbackAnalysisGateway, notify::NotificationGateway},
    repositories::{GuideRepo, OrganizationRepo, UserRepo},
    usecases,
};

pub const COOKIE_EMAIL_KEY: &str = "guidepost-user-email";

type Result<T> = std::result::Result<T, AppError>;

/// Caller identity as asserted by the session cookie. The cookie is
/// issued after the external auth provider has verified the identity;
/// role and ownership are always re-derived from the database.
#[derive(Debug)]
pub struct Auth {
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| usecases::Error::Unauthorized.into())
    }

    pub fn user_with_min_role<R>(&self, repo: &R, min_required_role: Role) -> Result<User>
    where
        R: UserRepo,
    {
        Ok(usecases::authorize_user_by_email(
            repo,
            self.account_email()?,
            min_required_role,
        )?)
    }

    /// The organization profile behind the calling account.
    pub fn organization<R>(&self, repo: &R) -> Result<Organization>
    where
        R: OrganizationRepo + UserRepo,
    {
        let user = self.user_with_min_role(repo, Role::Guest)?;
        Ok(usecases::authorize_organization_of_user(repo, &user)?)
    }

    /// The guide profile behind the calling account.
    pub fn guide<R>(&self, repo: &R) -> Result<Guide>
    where
        R: GuideRepo + UserRepo,
    {
        let user = self.user_with_min_role(repo, Role::Guest)?;
        Ok(usecases::authorize_guide_of_user(repo, &user)?)
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_email = Self::account_email_from_cookie(request);
        Outcome::Success(Self { account_email })
    }
}

#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Analysis(pub Box<dyn FeedbackAnalysisGateway + Send + Sync>);

impl Deref for Analysis {
    type Target = dyn FeedbackAnalysisGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
