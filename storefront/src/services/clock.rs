//! System wall-clock

use chrono::{DateTime, Local};

use crate::traits::Clock;

/// Clock reading the local system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
