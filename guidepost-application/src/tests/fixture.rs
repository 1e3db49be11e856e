use guidepost_core::{
    entities::*,
    gateways::notify::{NotificationEvent, NotificationGateway},
    repositories::{Error as RepoError, *},
    usecases,
};

use crate::prelude as flows;

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyNotifyGW;

impl NotificationGateway for DummyNotifyGW {
    fn notify(&self, _: NotificationEvent) {}
}

pub struct BackendFixture {
    pub db_connections: super::prelude::sqlite::Connections,
    pub notify: DummyNotifyGW,
}

impl BackendFixture {
    pub fn new() -> Self {
        let db_connections = super::prelude::sqlite::Connections::init(":memory:", 1).unwrap();
        guidepost_db_sqlite::run_embedded_database_migrations(
            db_connections.exclusive().unwrap(),
        );
        Self {
            db_connections,
            notify: DummyNotifyGW,
        }
    }

    pub fn register_user(&self, email: &str) -> User {
        flows::register_user(
            &self.db_connections,
            &self.notify,
            usecases::NewUser {
                email: email.parse().unwrap(),
                display_name: "Somebody".into(),
            },
        )
        .unwrap()
    }

    pub fn create_organization(&self, email: &str) -> Organization {
        let user = self.register_user(email);
        flows::create_organization(
            &self.db_connections,
            &user,
            usecases::NewOrganization {
                name: "City Tours Ltd.".into(),
                tax_id: 123_456,
                website: None,
                slogan: None,
            },
        )
        .unwrap()
    }

    pub fn create_guide(&self, email: &str) -> Guide {
        let user = self.register_user(email);
        flows::create_guide_profile(
            &self.db_connections,
            &user,
            usecases::NewGuideProfile {
                school: "Tourism College".into(),
                description: "Licensed city guide".into(),
                certificates: vec![],
                work_experience: vec![],
                cv_url: None,
            },
        )
        .unwrap()
    }

    pub fn try_get_user(&self, email: &str) -> Option<User> {
        self.db_connections
            .shared()
            .unwrap()
            .try_get_user_by_email(&email.parse().unwrap())
            .unwrap()
    }

    pub fn try_get_guide(&self, id: &str) -> Option<Guide> {
        match self.db_connections.shared().unwrap().get_guide(id) {
            Ok(guide) => Some(guide),
            Err(RepoError::NotFound) => None,
            Err(err) => panic!("Failed to load guide: {err}"),
        }
    }

    pub fn try_get_tour(&self, id: &str) -> Option<Tour> {
        match self.db_connections.shared().unwrap().get_tour(id) {
            Ok(tour) => Some(tour),
            Err(RepoError::NotFound) => None,
            Err(err) => panic!("Failed to load tour: {err}"),
        }
    }

    pub fn try_get_previous_tour(&self, id: &str) -> Option<PreviousTour> {
        match self.db_connections.shared().unwrap().get_previous_tour(id) {
            Ok(previous_tour) => Some(previous_tour),
            Err(RepoError::NotFound) => None,
            Err(err) => panic!("Failed to load previous tour: {err}"),
        }
    }
}
