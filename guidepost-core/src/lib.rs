pub mod db;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use guidepost_entities::{
        activity::*, email::*, guide::*, id::*, leave::*, organization::*, post::*,
        previous_tour::*, rating::*, review::*, time::*, tour::*, url, user::*,
    };
}
