//! Event Sinks
//!
//! The engine decides; sinks deliver. Anything that implements
//! [`EventSink`] can receive events as they are produced, which keeps the
//! decision logic free of any output transport and lets tests inspect
//! events directly instead of capturing stdout.
//!
//! Provided sinks:
//! - `heapless::Vec<Event, N>`: collect into fixed storage (drops on overflow)
//! - [`FnSink`]: wrap any `FnMut(&Event)`
//! - [`LogSink`]: forward to the `log` facade (`log` feature)
//! - [`NullSink`]: discard everything
//!
//! ```rust
//! use cellguard_core::{BatterySnapshot, LimitEngine};
//! use cellguard_core::sink::FnSink;
//!
//! let engine = LimitEngine::default();
//! let mut warnings = 0;
//! let ok = engine.evaluate_into(
//!     &BatterySnapshot::new(45.0, 80.0, 0.8),
//!     &mut FnSink(|event: &cellguard_core::Event| if event.is_warning() { warnings += 1 }),
//! );
//! assert!(ok);
//! assert_eq!(warnings, 3);
//! ```

use crate::events::Event;

/// Receiver for events produced during an evaluation
pub trait EventSink {
    /// Accept one event
    fn emit(&mut self, event: &Event);
}

impl<const N: usize> EventSink for heapless::Vec<Event, N> {
    fn emit(&mut self, event: &Event) {
        // Full buffer: the event is dropped. Size N for the worst case.
        let _ = self.push(*event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &Event) {
        (**self).emit(event);
    }
}

/// Adapter turning a closure into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(&Event)> EventSink for FnSink<F> {
    fn emit(&mut self, event: &Event) {
        (self.0)(event);
    }
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &Event) {}
}

/// Sink that renders events through the `log` facade
///
/// Violations go out at `error`, warnings at `warn`, both under the
/// `cellguard` target.
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[cfg(feature = "log")]
impl EventSink for LogSink {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::Violation { .. } => log::error!(target: "cellguard", "{}", event),
            Event::Warning { .. } => log::warn!(target: "cellguard", "{}", event),
        }
    }
}
