// NOTE:
// All timestamps with the `_at` / `_date` postfix are stored
// as unix timestamps in **seconds**.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use guidepost_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod guide;
mod leave_request;
mod org;
mod performance_review;
mod post;
mod previous_tour;
mod review;
mod tour;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Runs multiple statements atomically, e.g. a parent row insert
// together with its child list rows.
fn run_in_transaction<T>(
    conn: &mut SqliteConnection,
    f: impl FnOnce(&mut SqliteConnection) -> Result<T>,
) -> Result<T> {
    let mut repo_err = None;
    conn.transaction::<_, DieselError, _>(|conn| {
        f(conn).map_err(|err| {
            repo_err = Some(err);
            DieselError::RollbackTransaction
        })
    })
    .map_err(|err| match repo_err.take() {
        Some(repo_err) => repo_err,
        None => from_diesel_err(err),
    })
}

fn resolve_user_rowid(conn: &mut SqliteConnection, email: &str) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::rowid)
        .filter(dsl::email.eq(email))
        .first(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve user by e-mail '{}': {}", email, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_user_email(conn: &mut SqliteConnection, user_rowid: i64) -> Result<String> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::email)
        .filter(dsl::rowid.eq(&user_rowid))
        .first::<String>(conn)
        .map_err(|e| {
            log::warn!(
                "Referential integrity violation: user with rowid = {} not found",
                user_rowid
            );
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_guide_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::tour_guide::dsl;
    schema::tour_guide::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve guide id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_guide_id(conn: &mut SqliteConnection, guide_rowid: i64) -> Result<String> {
    use schema::tour_guide::dsl;
    schema::tour_guide::table
        .select(dsl::id)
        .filter(dsl::rowid.eq(&guide_rowid))
        .first::<String>(conn)
        .map_err(from_diesel_err)
}

fn resolve_organization_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::organizations::dsl;
    schema::organizations::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve organization id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_organization_id(conn: &mut SqliteConnection, org_rowid: i64) -> Result<String> {
    use schema::organizations::dsl;
    schema::organizations::table
        .select(dsl::id)
        .filter(dsl::rowid.eq(&org_rowid))
        .first::<String>(conn)
        .map_err(from_diesel_err)
}

fn resolve_tour_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::tours::dsl;
    schema::tours::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve tour id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_tour_id(conn: &mut SqliteConnection, tour_rowid: i64) -> Result<String> {
    use schema::tours::dsl;
    schema::tours::table
        .select(dsl::id)
        .filter(dsl::rowid.eq(&tour_rowid))
        .first::<String>(conn)
        .map_err(from_diesel_err)
}

fn resolve_previous_tour_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::previous_tours::dsl;
    schema::previous_tours::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve previous tour id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_previous_tour_id(conn: &mut SqliteConnection, previous_tour_rowid: i64) -> Result<String> {
    use schema::previous_tours::dsl;
    schema::previous_tours::table
        .select(dsl::id)
        .filter(dsl::rowid.eq(&previous_tour_rowid))
        .first::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_role(role: RolePrimitive) -> Result<Role> {
    Role::try_from(role).map_err(|_| anyhow!("Invalid role: {}", role).into())
}

fn load_tour_status(status: TourStatusPrimitive) -> Result<TourStatus> {
    TourStatus::try_from(status).map_err(|_| anyhow!("Invalid tour status: {}", status).into())
}

fn load_leave_request_status(status: LeaveRequestStatusPrimitive) -> Result<LeaveRequestStatus> {
    LeaveRequestStatus::try_from(status)
        .map_err(|_| anyhow!("Invalid leave request status: {}", status).into())
}

fn load_url(from: String) -> Option<url::Url> {
    from.parse()
        .map_err(|err| {
            // URLs have been validated before they were stored.
            log::error!("Failed to load invalid URL '{}': {}", from, err);
            err
        })
        .ok()
}
