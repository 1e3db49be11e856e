use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::email::EmailAddress;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email        : EmailAddress,
    pub display_name : String,
    pub role         : Role,
}

pub type RolePrimitive = i16;

/// Closed set of account roles, ordered by privilege for
/// minimum-role checks.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Guest        = 0,
    Traveler     = 1,
    Guide        = 2,
    Organization = 3,
    Admin        = 4,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("role primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ordering() {
        assert!(Role::Guest < Role::Traveler);
        assert!(Role::Traveler < Role::Guide);
        assert!(Role::Guide < Role::Organization);
        assert!(Role::Organization < Role::Admin);
    }

    #[test]
    fn role_primitive_round_trip() {
        for role in [
            Role::Guest,
            Role::Traveler,
            Role::Guide,
            Role::Organization,
            Role::Admin,
        ] {
            assert_eq!(Role::try_from(RolePrimitive::from(role)).unwrap(), role);
        }
        assert!(Role::try_from(99).is_err());
    }
}
