//! Host-integration layer for `organic_grid`: selection dispatch, previews and commits.
//!
//! [`GridPlugin`] owns a [`HostDocument`], an explicit [`Session`] and two queues. Hosts push
//! [`HostEvent`]s (selection changes, document changes, UI messages) and call
//! [`GridPlugin::pump`]; replies for the UI arrive on [`GridPlugin::messages`].
#![forbid(unsafe_code)]

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

pub use bus::{HostBus, HostEvent, NoticeSink, Outbox};
pub use document::{
    dot_fill_for, HostDocument, MemoryDocument, MemoryNode, MemoryNodeKind, NodeId, Rgb,
};
pub use error::{PluginError, Result};
pub use materialize::materialize;
pub use messages::{seed_from_number, GridInput, PluginMessage, UiMessage};
pub use presets::GridPresets;
pub use selection::{ComponentRef, ComponentSource, SelectedNode, SelectionKind};
pub use session::{HandlerContext, Session, GROUP_NAME};

mod bus;
mod document;
mod error;
mod materialize;
mod messages;
mod presets;
mod selection;
mod session;

/// Convenient re-exports for common types. Import with `use organic_grid_host::prelude::*;`.
pub mod prelude {
    pub use organic_grid::prelude::*;

    pub use crate::{
        ComponentRef, ComponentSource, GridInput, GridPlugin, GridPresets, HostDocument,
        HostEvent, MemoryDocument, NodeId, PluginError, PluginMessage, Rgb, SelectedNode,
        SelectionKind, Session, UiMessage,
    };
}

/// Drives grid previews and commits for one open plugin window.
pub struct GridPlugin<D: HostDocument> {
    document: D,
    session: Session,
    bus: HostBus,
    outbox: Outbox,
}

impl<D: HostDocument> GridPlugin<D> {
    /// Create the plugin and report the initial selection to the UI.
    pub fn new(document: D) -> Self {
        let mut plugin = Self {
            document,
            session: Session::default(),
            bus: HostBus::default(),
            outbox: Outbox::default(),
        };
        plugin.session.update_selection(plugin.document.selection());
        plugin.outbox.send(plugin.session.selection_message());
        plugin
    }

    /// Sender for inbound host and UI events.
    pub fn events(&self) -> Sender<HostEvent> {
        self.bus.sender().clone()
    }

    /// Receiver for messages addressed to the UI.
    pub fn messages(&self) -> Receiver<PluginMessage> {
        self.outbox.receiver().clone()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_closed(&self) -> bool {
        self.session.closed
    }

    /// Handle queued events one at a time, in order, until the queue is empty or the plugin
    /// closes. Failures are reported to the UI as [`PluginMessage::Error`]. Returns the number of
    /// events handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while !self.session.closed {
            let Ok(event) = self.bus.receiver().try_recv() else {
                break;
            };
            if let Err(err) = self.handle(event) {
                warn!("Event failed: {err}.");
                self.outbox.send(PluginMessage::Error {
                    message: err.to_string(),
                });
            }
            handled += 1;
        }
        handled
    }

    /// Handle a single event to completion.
    pub fn handle(&mut self, event: HostEvent) -> Result<()> {
        if self.session.closed {
            debug!("Ignoring {event:?}; plugin is closed.");
            return Ok(());
        }

        let mut ctx = HandlerContext {
            session: &mut self.session,
            document: &mut self.document,
            outbox: self.outbox.sender(),
        };
        match event {
            HostEvent::SelectionChanged => ctx.refresh_selection(true),
            HostEvent::DocumentChanged { by_plugin: true } => {
                debug!("Ignoring document change made by the plugin.");
                Ok(())
            }
            HostEvent::DocumentChanged { by_plugin: false } => ctx.refresh_selection(false),
            HostEvent::Ui(UiMessage::Preview {
                config,
                randomize_variants,
            }) => ctx.preview(&config, randomize_variants),
            HostEvent::Ui(UiMessage::Create {
                config,
                randomize_variants,
            }) => ctx.create(&config, randomize_variants),
            HostEvent::Ui(UiMessage::Cancel) => {
                ctx.close();
                Ok(())
            }
        }
    }
}
