#[macro_use]
extern crate log;

mod analyze_feedback;
mod complete_tour;
mod create_guide_profile;
mod create_organization;
mod create_tour;
mod leave_requests;
mod previous_tour_feedback;
mod push_performance_review;
mod register_user;
mod reviews;
mod social;

pub mod prelude {
    pub use super::{
        analyze_feedback::*, complete_tour::*, create_guide_profile::*, create_organization::*,
        create_tour::*, leave_requests::*, previous_tour_feedback::*, push_performance_review::*,
        register_user::*, reviews::*, social::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use guidepost_core::{
    entities::*,
    gateways::notify::{NotificationEvent, NotificationGateway},
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use guidepost_db_sqlite::Connections;
}
