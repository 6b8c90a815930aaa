//! Gate Check
//!
//! Shared-secret comparison in front of posting and deleting notes. A UX
//! deterrent only: no hashing, rate limiting or lockout.

pub const SHARED_SECRET: &str = "1212";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    Denied,
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    secret: String,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(SHARED_SECRET)
    }
}

impl Gate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verbatim comparison, no trimming
    pub fn check(&self, attempt: &str) -> GateDecision {
        if attempt == self.secret {
            GateDecision::Allowed
        } else {
            GateDecision::Denied
        }
    }
}
