//! Event types and sinks for observing grid generation.
//!
//! This module defines [`GridEvent`] and a set of sinks to collect or forward events while
//! running [`crate::grid::generator::generate_shapes_with_events`] or
//! [`crate::grid::generator::GridGenerator::generate_with_events`].
use crate::grid::bounds::GridBounds;
use crate::grid::config::GridConfig;
use crate::grid::PlacementRecord;

/// Describes events emitted while generating a grid.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GridEvent {
    /// Emitted after validation, before any cell is generated.
    GenerationStarted {
        /// The configuration being generated.
        config: GridConfig,
        /// Number of cells that will be produced.
        cell_count: usize,
        /// Variant count in effect, if variants are randomized.
        variant_count: Option<usize>,
    },

    /// Emitted once per cell, in row-major order.
    CellPlaced {
        /// Row-major index of the cell.
        index: usize,
        /// The finished placement record.
        record: PlacementRecord,
    },

    /// Emitted when a jittered dimension fell below the minimum and was clamped.
    SizeClamped {
        /// Row-major index of the cell.
        index: usize,
        /// Dimension before clamping.
        raw: f32,
        /// Dimension after clamping.
        clamped: f32,
    },

    /// Emitted when generation finishes.
    GenerationFinished {
        /// Aggregated counters for the run.
        summary: GenerationSummary,
    },

    /// Non-fatal warning generated during generation.
    Warning {
        /// Context string (e.g. cell name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl GridEvent {
    /// The discriminant of this event, used for filtering.
    pub fn kind(&self) -> GridEventKind {
        match self {
            GridEvent::GenerationStarted { .. } => GridEventKind::GenerationStarted,
            GridEvent::CellPlaced { .. } => GridEventKind::CellPlaced,
            GridEvent::SizeClamped { .. } => GridEventKind::SizeClamped,
            GridEvent::GenerationFinished { .. } => GridEventKind::GenerationFinished,
            GridEvent::Warning { .. } => GridEventKind::Warning,
        }
    }
}

/// Payload-free discriminant of [`GridEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridEventKind {
    GenerationStarted,
    CellPlaced,
    SizeClamped,
    GenerationFinished,
    Warning,
}

/// Counters reported when a generation run finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    /// Records produced.
    pub cell_count: usize,
    /// Records whose dimension was clamped.
    pub clamped_count: usize,
    /// Bounds of the unperturbed grid.
    pub bounds: GridBounds,
}

/// A generic event sink that accepts [`GridEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GridEvent);

    /// Whether this sink wants events of `kind`. Producers skip building unwanted events.
    fn wants(&self, _kind: GridEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = GridEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GridEvent) {}

    #[inline]
    fn wants(&self, _kind: GridEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GridEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GridEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GridEvent),
{
    #[inline]
    fn send(&mut self, event: GridEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GridEvent>,
    only: Option<Vec<GridEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect only events of the listed kinds.
    pub fn only(kinds: impl IntoIterator<Item = GridEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<GridEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GridEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
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
    fn send(&mut self, event: GridEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: GridEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: GridEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for i in 0..last_idx {
            if self.sinks[i].wants(kind) {
                self.sinks[i].send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: GridEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> GridEvent {
        GridEvent::Warning {
            context: context.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!().wants(GridEventKind::CellPlaced));
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(warning("b"));
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn filtered_vec_sink_drops_other_kinds() {
        let mut sink = VecSink::only([GridEventKind::SizeClamped]);
        assert!(!sink.wants(GridEventKind::Warning));
        sink.send(warning("a"));
        sink.send(GridEvent::SizeClamped {
            index: 0,
            raw: -1.0,
            clamped: 0.5,
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.as_slice()[0].kind(), GridEventKind::SizeClamped);
    }

    #[test]
    fn multi_sink_fans_out_to_interested_sinks() {
        let mut multi = MultiSink::with_sinks(vec![
            VecSink::new(),
            VecSink::only([GridEventKind::CellPlaced]),
            VecSink::new(),
        ]);
        assert!(multi.wants(GridEventKind::Warning));
        multi.send(warning("ctx"));
        assert_eq!(multi.len(), 3);
        assert_eq!(multi.sinks()[0].len(), 1);
        assert_eq!(multi.sinks()[1].len(), 0);
        assert_eq!(multi.sinks()[2].len(), 1);
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send_many([warning("a"), warning("b")]);
        drop(sink);
        assert_eq!(count, 2);
    }
}
