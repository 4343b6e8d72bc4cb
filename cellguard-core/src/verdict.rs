//! Evaluation results

use heapless::Vec;

use crate::{
    constants::MAX_EVENTS,
    events::{BoundKind, Event, WarningZone},
    parameter::Parameter,
};

/// Fixed-capacity event list held by a [`Verdict`]
pub type EventList = Vec<Event, MAX_EVENTS>;

/// Result of one evaluation
///
/// `ok` depends only on hard limits. Warnings are informational: a battery
/// sitting right at its limits is still `ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    ok: bool,
    events: EventList,
}

impl Verdict {
    pub(crate) fn new(ok: bool, events: EventList) -> Self {
        Self { ok, events }
    }

    /// True iff every parameter is within its hard range
    pub const fn ok(&self) -> bool {
        self.ok
    }

    /// All events, in evaluation order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Hard-limit violations only
    pub fn violations(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_violation())
    }

    /// Early warnings only
    pub fn warnings(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_warning())
    }

    /// True if any warning fired
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// First violated bound for `parameter`, if any
    pub fn violation_for(&self, parameter: Parameter) -> Option<BoundKind> {
        self.events.iter().find_map(|e| match e {
            Event::Violation { parameter: p, bound_kind, .. } if *p == parameter => Some(*bound_kind),
            _ => None,
        })
    }

    /// Warning zone reported for `parameter`, if any
    pub fn warning_for(&self, parameter: Parameter) -> Option<WarningZone> {
        self.events.iter().find_map(|e| match e {
            Event::Warning { parameter: p, zone, .. } if *p == parameter => Some(*zone),
            _ => None,
        })
    }

    /// Consume the verdict, keeping only its events
    pub fn into_events(self) -> EventList {
        self.events
    }
}
