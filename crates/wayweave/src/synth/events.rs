//! Event types and sinks for observing synthesis runs.
//!
//! This module defines [`SynthesisEvent`] and a set of sinks to emit, collect, or forward
//! events while [`crate::synth::Synthesizer::run_with_events`] expands and culls
//! connections.
use crate::synth::SynthesisReport;

/// Describes events emitted during synthesis.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SynthesisEvent {
    /// Emitted before the first radius pass.
    Started {
        /// Requested average connections per building.
        target: f64,
        /// Number of buildings in the container.
        building_count: usize,
        /// Number of road nodes in the container.
        road_count: usize,
    },

    /// Emitted after each radius pass.
    PassFinished {
        /// Zero-based pass index.
        pass: usize,
        /// Connect distance used by this pass.
        threshold: u64,
        /// Connections added by this pass.
        added: usize,
        /// Average connections per building after this pass.
        average: f64,
    },

    /// Emitted after the culling step.
    Culled {
        /// Connections the target asked to remove.
        requested: usize,
        /// Connections actually removed.
        removed: usize,
    },

    /// Emitted when synthesis completes successfully.
    Finished {
        /// Final summary.
        report: SynthesisReport,
    },

    /// Non-fatal warning generated during synthesis.
    Warning {
        /// Context string, such as the building id.
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`SynthesisEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SynthesisEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = SynthesisEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SynthesisEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SynthesisEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SynthesisEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SynthesisEvent),
{
    #[inline]
    fn send(&mut self, event: SynthesisEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SynthesisEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SynthesisEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SynthesisEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SynthesisEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self { sinks: Vec::new() }
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SynthesisEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> SynthesisEvent {
        SynthesisEvent::Warning {
            context: context.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send_many([warning("a"), warning("b")]);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.into_inner().len(), 2);
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(warning("ctx"));
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
        matches!(multi.sinks[1].as_slice()[0], SynthesisEvent::Warning { .. })
            .then_some(())
            .expect("event captured");
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("ctx"));
        drop(sink);
        assert_eq!(count, 1);
    }
}
