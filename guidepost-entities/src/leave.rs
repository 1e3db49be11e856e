use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::{id::*, time::*};

pub type LeaveRequestStatusPrimitive = i16;

/// Lifecycle of a guide's request to be unassigned from a tour.
/// `Pending` is the only non-terminal state.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LeaveRequestStatus {
    Pending    = 0,
    Approved   = 1,
    Rejected   = 2,
    Criticized = 3,
}

impl LeaveRequestStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    pub fn is_terminal(self) -> bool {
        !self.is_pending()
    }
}

#[derive(Debug, Error)]
#[error("Invalid leave request status primitive: {0}")]
pub struct InvalidLeaveRequestStatusPrimitive(LeaveRequestStatusPrimitive);

impl TryFrom<LeaveRequestStatusPrimitive> for LeaveRequestStatus {
    type Error = InvalidLeaveRequestStatusPrimitive;
    fn try_from(from: LeaveRequestStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidLeaveRequestStatusPrimitive(from))
    }
}

impl From<LeaveRequestStatus> for LeaveRequestStatusPrimitive {
    fn from(from: LeaveRequestStatus) -> Self {
        from.to_i16().expect("leave request status primitive")
    }
}

/// Severity of a criticism on the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(u8);

impl Severity {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Error)]
#[error("Severity out of range: {0}")]
pub struct InvalidSeverity(i64);

impl TryFrom<i64> for Severity {
    type Error = InvalidSeverity;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if from < i64::from(Self::min().0) || from > i64::from(Self::max().0) {
            return Err(InvalidSeverity(from));
        }
        Ok(Self(from as u8))
    }
}

impl From<Severity> for i64 {
    fn from(from: Severity) -> Self {
        i64::from(from.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criticism {
    pub severity: Severity,
    pub reason: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id                    : Id,
    pub tour_id               : Id,
    pub guide_id              : Id,
    pub reason                : String,
    pub status                : LeaveRequestStatus,
    pub organization_response : Option<String>,
    pub criticism             : Option<Criticism>,
    pub created_at            : Timestamp,
    pub reviewed_at           : Option<Timestamp>,
}
