use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::{id::*, time::*};

pub type TourStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TourStatus {
    Draft     = 0,
    Current   = 1,
    Completed = 2,
    Cancelled = 3,
}

impl TourStatus {
    pub const fn default() -> Self {
        Self::Current
    }

    pub fn is_bookable(self) -> bool {
        self == Self::Current
    }
}

#[derive(Debug, Error)]
#[error("Invalid tour status primitive: {0}")]
pub struct InvalidTourStatusPrimitive(TourStatusPrimitive);

impl TryFrom<TourStatusPrimitive> for TourStatus {
    type Error = InvalidTourStatusPrimitive;
    fn try_from(from: TourStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidTourStatusPrimitive(from))
    }
}

impl From<TourStatus> for TourStatusPrimitive {
    fn from(from: TourStatus) -> Self {
        from.to_i16().expect("tour status primitive")
    }
}

/// One stop of a tour itinerary. The `sequence` index determines the
/// order in which stops are visited.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStop {
    pub sequence         : u16,
    pub title            : String,
    pub location         : String,
    pub duration_minutes : u32,
    pub description      : String,
    pub time             : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id              : Id,
    pub organization_id : Id,
    pub guide_id        : Option<Id>,
    pub name            : String,
    pub description     : String,
    /// Price in minor currency units.
    pub price           : u64,
    pub location        : String,
    pub date            : Timestamp,
    pub status          : TourStatus,
    pub itinerary       : Vec<ItineraryStop>,
    pub tags            : Vec<String>,
    pub languages       : Vec<String>,
    pub max_group_size  : u32,
    pub inclusions      : Vec<String>,
}
