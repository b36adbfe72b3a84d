#![forbid(unsafe_code)]

//! Attribute Dispatch & Addressing Engine.
//!
//! External actors address widgets with `(attribute, payload)` string pairs;
//! this crate resolves the attribute to a typed operation on the widget's
//! capability surface and, for reads, re-emits the result through the
//! outbound report trait. Malformed input never propagates an error to the
//! caller: every failure is logged and the call degrades to a no-op (or a
//! documented best-effort default such as black for unparseable colors).

pub mod codec;
pub mod error;
pub mod hash;
pub mod names;
pub mod report;
pub mod resolve;
pub mod router;

pub use error::AttrError;
pub use hash::sdbm16;
pub use report::AttributeReport;
#[cfg(any(test, feature = "test-helpers"))]
pub use report::{RecordingReport, ReportEvent};
pub use resolve::{Resolved, resolve};
pub use router::{Access, route};
