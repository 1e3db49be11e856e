use std::{collections::BTreeMap, fmt::Display, result};

use guidepost_boundary::Error as JsonErrorResponse;
use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json, to_json_analysis};
use guidepost_application::prelude as flows;
use guidepost_core::{entities::*, repositories::*, usecases};

mod error;
mod guides;
mod leave_requests;
mod organizations;
mod previous_tours;
mod reviews;
mod social;
mod tours;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_session,
        users::delete_session,
        users::get_current_user,
        users::delete_user,
        // ---   guides   --- //
        guides::post_guide,
        guides::get_guide,
        guides::put_guide,
        guides::get_guide_performance_reviews,
        // ---   organizations   --- //
        organizations::post_organization,
        organizations::get_organization,
        // ---   tours   --- //
        tours::post_tour,
        tours::get_tours,
        tours::get_tour,
        tours::put_tour,
        tours::post_assign_guide,
        tours::post_complete_tour,
        // ---   previous tours   --- //
        previous_tours::get_previous_tour,
        previous_tours::get_feedback,
        previous_tours::post_feedback,
        previous_tours::delete_feedback,
        previous_tours::post_analysis,
        previous_tours::post_performance_review,
        // ---   leave requests   --- //
        leave_requests::post_leave_request,
        leave_requests::delete_leave_request,
        leave_requests::post_approve,
        leave_requests::post_reject,
        leave_requests::post_criticize,
        leave_requests::get_leave_requests_of_tour,
        // ---   reviews   --- //
        reviews::post_peer_review,
        reviews::get_peer_reviews,
        reviews::post_tour_review,
        reviews::get_tour_reviews,
        // ---   social   --- //
        social::post_post,
        social::get_posts,
        social::post_like,
        social::post_comment,
        social::get_comments,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
    fields: Option<BTreeMap<String, String>>,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
        fields,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
