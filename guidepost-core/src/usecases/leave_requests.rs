use super::prelude::*;
use crate::{rating::Rated, util::validate::is_long_enough};

pub const MIN_REASON_LEN: usize = 20;
pub const MIN_RESPONSE_LEN: usize = 10;

/// Penalty in tenths of a star per severity step of a criticized
/// leave request.
const PENALTY_TENTHS_PER_SEVERITY: u8 = 1;

/// Files a request to be unassigned from a tour before completion.
pub fn create_leave_request<R>(
    repo: &R,
    caller: &User,
    tour_id: &str,
    reason: String,
) -> Result<LeaveRequest>
where
    R: LeaveRequestRepo + TourRepo + GuideRepo,
{
    let guide = super::authorize_guide_of_user(repo, caller)?;
    let tour = repo.get_tour(tour_id)?;
    if tour.guide_id.as_ref() != Some(&guide.id) {
        return Err(Error::GuideNotAssigned);
    }
    if !is_long_enough(&reason, MIN_REASON_LEN) {
        return Err(Error::ReasonTooShort);
    }
    if repo
        .try_get_pending_leave_request(tour.id.as_str(), guide.id.as_str())?
        .is_some()
    {
        return Err(Error::DuplicatePendingLeaveRequest);
    }
    let request = LeaveRequest {
        id: Id::new(),
        tour_id: tour.id,
        guide_id: guide.id,
        reason,
        status: LeaveRequestStatus::default(),
        organization_response: None,
        criticism: None,
        created_at: Timestamp::now(),
        reviewed_at: None,
    };
    // The partial unique index on pending requests backs up the
    // existence check above against concurrent submissions.
    repo.create_leave_request(&request).map_err(|err| match err {
        RepoError::AlreadyExists => Error::DuplicatePendingLeaveRequest,
        err => Error::Repo(err),
    })?;
    log::info!(
        "Guide {} requested to leave tour {}",
        request.guide_id,
        request.tour_id
    );
    Ok(request)
}

/// A guide may withdraw their own request while it is still pending.
/// The request is deleted outright, no status transition is retained.
pub fn cancel_leave_request<R>(repo: &R, caller: &User, request_id: &str) -> Result<()>
where
    R: LeaveRequestRepo + GuideRepo,
{
    let guide = super::authorize_guide_of_user(repo, caller)?;
    let request = repo.get_leave_request(request_id)?;
    if request.guide_id != guide.id {
        return Err(Error::Forbidden);
    }
    if !request.status.is_pending() {
        return Err(Error::LeaveRequestNotPending);
    }
    repo.delete_leave_request(request_id)?;
    Ok(())
}

#[derive(Debug, Clone)]
pub enum LeaveResolution {
    Approve { response: Option<String> },
    Reject { response: String },
    Criticize { severity: i64, reason: String },
}

/// Resolves a pending request on behalf of the organization owning the
/// tour. All outcomes are terminal.
pub fn resolve_leave_request<R>(
    repo: &R,
    org: &Organization,
    request_id: &str,
    resolution: LeaveResolution,
) -> Result<LeaveRequest>
where
    R: LeaveRequestRepo + TourRepo + GuideRepo + PerformanceReviewRepo,
{
    let mut request = repo.get_leave_request(request_id)?;
    let mut tour = repo.get_tour(request.tour_id.as_str())?;
    super::authorize_org_owns_tour(org, &tour)?;
    if !request.status.is_pending() {
        return Err(Error::LeaveRequestNotPending);
    }

    match resolution {
        LeaveResolution::Approve { response } => {
            request.status = LeaveRequestStatus::Approved;
            request.organization_response = response.filter(|r| !r.trim().is_empty());
            unassign_guide(repo, &mut tour, &request)?;
        }
        LeaveResolution::Reject { response } => {
            if !is_long_enough(&response, MIN_RESPONSE_LEN) {
                return Err(Error::ResponseTooShort);
            }
            request.status = LeaveRequestStatus::Rejected;
            request.organization_response = Some(response);
            // The guide stays assigned to the tour.
        }
        LeaveResolution::Criticize { severity, reason } => {
            if !is_long_enough(&reason, MIN_RESPONSE_LEN) {
                return Err(Error::CriticismReasonTooShort);
            }
            let severity = Severity::try_from(severity)?;
            request.status = LeaveRequestStatus::Criticized;
            request.criticism = Some(Criticism { severity, reason });
            unassign_guide(repo, &mut tour, &request)?;
            apply_reputation_penalty(repo, &request, severity)?;
        }
    }
    request.reviewed_at = Some(Timestamp::now());
    repo.update_leave_request(&request)?;
    log::info!(
        "Leave request {} resolved as {:?}",
        request.id,
        request.status
    );
    Ok(request)
}

fn unassign_guide<R: TourRepo>(repo: &R, tour: &mut Tour, request: &LeaveRequest) -> Result<()> {
    debug_assert_eq!(tour.id, request.tour_id);
    if tour.guide_id.as_ref() == Some(&request.guide_id) {
        tour.guide_id = None;
        repo.update_tour(tour)?;
    }
    Ok(())
}

fn apply_reputation_penalty<R>(repo: &R, request: &LeaveRequest, severity: Severity) -> Result<()>
where
    R: GuideRepo + PerformanceReviewRepo,
{
    let mut guide = repo.get_guide(request.guide_id.as_str())?;
    let penalty_tenths = u32::from(severity.get()) * u32::from(PENALTY_TENTHS_PER_SEVERITY);
    guide.rating_penalty += RatingPenalty::from_stars(f64::from(penalty_tenths) / 10.0);
    let reviews = repo.performance_reviews_of_guide(guide.id.as_str())?;
    guide.avg_rating = guide.avg_rating(&reviews);
    repo.update_guide(&guide)?;
    log::info!(
        "Applied reputation penalty (severity {}) to guide {}",
        severity.get(),
        guide.id
    );
    Ok(())
}
