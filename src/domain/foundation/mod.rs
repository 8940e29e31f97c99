//! Foundation module - Shared domain primitives.
//!
//! Contains the temporal primitives (validated UTC timestamps and
//! injectable clocks) and the error taxonomy used by every other module.

mod clock;
mod errors;
mod timestamp;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use errors::{DomainError, ErrorCode};
pub use timestamp::Timestamp;
