use guidepost_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use guidepost_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<guidepost_core::usecases::Error> for AppError {
    fn from(err: guidepost_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<guidepost_entities::email::EmailAddressParseError> for AppError {
    fn from(_: guidepost_entities::email::EmailAddressParseError) -> Self {
        BError::from(ParameterError::EmailAddress).into()
    }
}

impl From<guidepost_entities::url::ParseError> for AppError {
    fn from(_: guidepost_entities::url::ParseError) -> Self {
        BError::from(ParameterError::Url).into()
    }
}
