use crate::{email::*, time::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: TimestampMs,
    pub by: Option<EmailAddress>,
}

impl Activity {
    pub fn now(by: Option<EmailAddress>) -> Self {
        Self {
            at: TimestampMs::now(),
            by,
        }
    }
}
