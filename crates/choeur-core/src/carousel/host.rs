//! Facilities a carousel needs from its host environment.

use std::fmt;
use std::time::Duration;

use crate::error::CarouselError;

/// Identifier of a timer scheduled on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Timer scheduling and media preferences provided by the host.
///
/// A host reports a fired timer back to the carousel by calling
/// [`Carousel::on_timer`](super::Carousel::on_timer) with the returned id.
/// Cancelling an id that already fired, or was never issued, is a no-op.
pub trait CarouselHost {
    /// Schedules a single firing after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> Result<TimerId, CarouselError>;

    /// Schedules a firing every `period`, the first one `period` from now.
    fn schedule_repeating(&mut self, period: Duration) -> Result<TimerId, CarouselError>;

    /// Cancels a timer so it never fires again.
    fn cancel(&mut self, id: TimerId);

    /// Whether the user asked for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;
}
