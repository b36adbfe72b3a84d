#![forbid(unsafe_code)]

//! Outbound value reporting.
//!
//! A read re-emits the current value through this trait; the host wires it
//! to whatever transport announces state (MQTT publisher, test recorder).
//! Dispatch only ever borrows the reporter for the duration of one call.

use propdeck_style::Rgb;

/// Sink for values read back out of a widget.
pub trait AttributeReport {
    /// Report an integer-valued attribute.
    fn report_int(&mut self, attr: &str, value: i32);
    /// Report a text-valued attribute.
    fn report_str(&mut self, attr: &str, value: &str);
    /// Report a color-valued attribute.
    fn report_color(&mut self, attr: &str, color: Rgb);
}

/// One recorded report, for asserting read-back behavior in tests.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// `report_int` was called.
    Int(String, i32),
    /// `report_str` was called.
    Str(String, String),
    /// `report_color` was called.
    Color(String, Rgb),
}

/// Reporter that records every call in order.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
pub struct RecordingReport {
    /// Every report in call order.
    pub events: Vec<ReportEvent>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingReport {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The single recorded event; panics unless exactly one was recorded.
    #[must_use]
    pub fn only(&self) -> &ReportEvent {
        assert_eq!(self.events.len(), 1, "expected exactly one report: {:?}", self.events);
        &self.events[0]
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl AttributeReport for RecordingReport {
    fn report_int(&mut self, attr: &str, value: i32) {
        self.events.push(ReportEvent::Int(attr.to_owned(), value));
    }

    fn report_str(&mut self, attr: &str, value: &str) {
        self.events
            .push(ReportEvent::Str(attr.to_owned(), value.to_owned()));
    }

    fn report_color(&mut self, attr: &str, color: Rgb) {
        self.events.push(ReportEvent::Color(attr.to_owned(), color));
    }
}
