use std::time::{Duration, Instant};

/// Per-call deadline supplied by the caller.
///
/// The gateway never invents a deadline of its own; a background context
/// waits as long as the backend does. Dropping the call future cancels it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    deadline: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Unbounded,
    Remaining(Duration),
    Expired,
}

impl CallContext {
    pub fn background() -> Self {
        Self { deadline: None }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn budget(&self) -> Budget {
        match self.deadline {
            None => Budget::Unbounded,
            Some(deadline) => match deadline.checked_duration_since(Instant::now()) {
                Some(remaining) if !remaining.is_zero() => Budget::Remaining(remaining),
                _ => Budget::Expired,
            },
        }
    }
}
