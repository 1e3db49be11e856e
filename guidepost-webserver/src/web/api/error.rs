use super::json_error_response;
use anyhow::anyhow;
use guidepost_application::error::{AppError, BError};
pub use guidepost_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use std::{collections::BTreeMap, io};
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

fn is_conflict(err: &ParameterError) -> bool {
    matches!(
        err,
        ParameterError::UserExists
            | ParameterError::GuideProfileExists
            | ParameterError::OrganizationProfileExists
            | ParameterError::DuplicatePerformanceReview
            | ParameterError::DuplicatePendingLeaveRequest
            | ParameterError::AlreadyReviewed
            | ParameterError::LeaveRequestNotPending
            | ParameterError::GuideNotAssigned
            | ParameterError::TourNotCurrent
    )
}

fn field_map(err: &ParameterError) -> Option<BTreeMap<String, String>> {
    err.field().map(|field| {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), err.to_string());
        fields
    })
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            return match *err {
                                ParameterError::Unauthorized => {
                                    json_error_response(req, err, Status::Unauthorized, None)
                                }
                                ParameterError::Forbidden => {
                                    json_error_response(req, err, Status::Forbidden, None)
                                }
                                ParameterError::Analysis(_) => {
                                    json_error_response(req, err, Status::BadGateway, None)
                                }
                                ParameterError::Repo(RepoError::NotFound) => {
                                    json_error_response(req, err, Status::NotFound, None)
                                }
                                ParameterError::Repo(RepoError::AlreadyExists) => {
                                    json_error_response(req, err, Status::Conflict, None)
                                }
                                ParameterError::Repo(ref err) => {
                                    error!("Repository error: {err}");
                                    Err(Status::InternalServerError)
                                }
                                ref err if is_conflict(err) => {
                                    json_error_response(req, err, Status::Conflict, None)
                                }
                                ref err => json_error_response(
                                    req,
                                    err,
                                    Status::BadRequest,
                                    field_map(err),
                                ),
                            };
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound, None);
                        }
                        BError::Repo(RepoError::AlreadyExists) => {
                            return json_error_response(req, err, Status::Conflict, None);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status, None),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<guidepost_core::usecases::Error> for Error {
    fn from(err: guidepost_core::usecases::Error) -> Self {
        Self::App(err.into())
    }
}

impl From<guidepost_entities::email::EmailAddressParseError> for Error {
    fn from(err: guidepost_entities::email::EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}
