//! Event plumbing between the host, the UI and the plugin.
use crossbeam_channel::{Receiver, Sender};
use organic_grid::prelude::{EventSink, GridEvent, GridEventKind};
use tracing::debug;

use crate::messages::{PluginMessage, UiMessage};

/// Inbound events, handled strictly in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The user changed the selection.
    SelectionChanged,
    /// The document changed. `by_plugin` is set for changes the plugin itself made.
    DocumentChanged { by_plugin: bool },
    /// A message from the UI.
    Ui(UiMessage),
}

/// Queue of [`HostEvent`]s feeding the plugin.
pub struct HostBus {
    tx: Sender<HostEvent>,
    rx: Receiver<HostEvent>,
}

impl Default for HostBus {
    fn default() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }
}

impl HostBus {
    pub fn sender(&self) -> &Sender<HostEvent> {
        &self.tx
    }

    pub fn receiver(&self) -> &Receiver<HostEvent> {
        &self.rx
    }
}

/// Queue `message` for the UI. A closed channel means the UI is gone and the message is dropped.
pub(crate) fn deliver(tx: &Sender<PluginMessage>, message: PluginMessage) {
    if tx.send(message).is_err() {
        debug!("UI channel closed; dropping message.");
    }
}

/// Queue of [`PluginMessage`]s for the UI.
pub struct Outbox {
    tx: Sender<PluginMessage>,
    rx: Receiver<PluginMessage>,
}

impl Default for Outbox {
    fn default() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }
}

impl Outbox {
    pub fn sender(&self) -> &Sender<PluginMessage> {
        &self.tx
    }

    pub fn receiver(&self) -> &Receiver<PluginMessage> {
        &self.rx
    }

    pub fn send(&self, message: PluginMessage) {
        deliver(&self.tx, message);
    }
}

/// Event sink that turns core generation warnings into UI notices.
pub struct NoticeSink {
    pub tx: Sender<PluginMessage>,
}

impl EventSink for NoticeSink {
    fn send(&mut self, event: GridEvent) {
        let message = match event {
            GridEvent::Warning { message, .. } => message,
            GridEvent::GenerationFinished { summary } if summary.clamped_count > 0 => format!(
                "{} of {} elements were too small and were clamped",
                summary.clamped_count, summary.cell_count
            ),
            _ => return,
        };
        deliver(&self.tx, PluginMessage::Notice { message });
    }

    fn wants(&self, kind: GridEventKind) -> bool {
        matches!(
            kind,
            GridEventKind::Warning | GridEventKind::GenerationFinished
        )
    }
}
