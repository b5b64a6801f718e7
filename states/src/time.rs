use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Wall-clock state. The frame loop stamps it once per frame so everything
/// below reads one consistent `now`, and tests can set an arbitrary time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time(DateTime<Utc>);

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.0 = now;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}
