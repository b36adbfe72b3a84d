#![forbid(unsafe_code)]

//! Session-scoped runtime state for Propdeck.
//!
//! One [`DisplaySession`] per physical display: the fixed page-root table,
//! the active page, the font table the attribute codec resolves ids against,
//! and the idle [`SleepStateMachine`].

pub mod session;
pub mod sleep;

pub use session::{DisplaySession, PAGE_COUNT, PAGE_SYS, PAGE_TOP};
pub use sleep::{SleepState, SleepStateMachine};
