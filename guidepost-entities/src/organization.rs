use std::fmt;

use thiserror::Error;
use url::Url;

use crate::{email::*, id::*};

/// Tax identification number, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxId(u64);

impl TaxId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid tax id: {0}")]
pub struct InvalidTaxId(i64);

impl TryFrom<i64> for TaxId {
    type Error = InvalidTaxId;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if from <= 0 {
            return Err(InvalidTaxId(from));
        }
        Ok(Self(from as u64))
    }
}

impl From<TaxId> for i64 {
    fn from(from: TaxId) -> Self {
        from.0 as i64
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A business account that owns and publishes tours.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id         : Id,
    pub user_email : EmailAddress,
    pub name       : String,
    pub tax_id     : TaxId,
    pub website    : Option<Url>,
    pub slogan     : Option<String>,
}
