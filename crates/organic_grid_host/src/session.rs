//! Explicit per-plugin session state and the handlers that operate on it.
//!
//! Handlers receive the session, the document and the outbound channel by reference; there is
//! no ambient state. Each handler runs to completion before the next event is looked at, so a
//! preview can never be overtaken by one computed for an older selection.
use crossbeam_channel::Sender;
use glam::Vec2;
use organic_grid::prelude::*;
use tracing::{debug, info};

use crate::bus::{deliver, NoticeSink};
use crate::document::{dot_fill_for, HostDocument};
use crate::error::{PluginError, Result};
use crate::materialize::{materialize, rollback};
use crate::messages::{GridInput, PluginMessage};
use crate::selection::{ComponentSource, SelectedNode};

/// Name given to the group created on commit.
pub const GROUP_NAME: &str = "Organic Grid";

/// State carried between events.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Last selection reported by the host.
    pub selection: Option<SelectedNode>,
    /// Component the selection resolves to, if any.
    pub source: Option<ComponentSource>,
    /// Last configuration previewed, re-rendered when the selection changes.
    pub last_preview: Option<(GridConfig, bool)>,
    /// Incremented for every preview sent.
    pub preview_generation: u64,
    /// Set once the UI asked to close; no further events are handled.
    pub closed: bool,
}

impl Session {
    /// Variant count to randomize over, or `None` when variants are not randomized.
    pub fn variant_count(&self, randomize_variants: bool) -> Option<usize> {
        if !randomize_variants {
            return None;
        }
        self.source.as_ref().map(ComponentSource::variant_count)
    }

    /// Replace the selection, returning whether it changed.
    pub fn update_selection(&mut self, selection: Option<SelectedNode>) -> bool {
        if self.selection == selection {
            return false;
        }
        self.source = selection.as_ref().and_then(SelectedNode::resolve_component);
        self.selection = selection;
        true
    }

    pub fn selection_message(&self) -> PluginMessage {
        PluginMessage::Selection {
            kind: self.selection.as_ref().map(SelectedNode::kind),
            name: self.selection.as_ref().map(|s| s.name().to_owned()),
            variant_count: self.source.as_ref().map_or(0, ComponentSource::variant_count),
        }
    }
}

/// Borrowed view handed to each handler.
pub struct HandlerContext<'a, D: HostDocument + ?Sized> {
    pub session: &'a mut Session,
    pub document: &'a mut D,
    pub outbox: &'a Sender<PluginMessage>,
}

impl<D: HostDocument + ?Sized> HandlerContext<'_, D> {
    fn send(&self, message: PluginMessage) {
        deliver(self.outbox, message);
    }

    fn generate(
        &self,
        config: &GridConfig,
        randomize_variants: bool,
    ) -> Result<Vec<PlacementRecord>> {
        let variant_count = self.session.variant_count(randomize_variants);
        let mut sink = NoticeSink {
            tx: self.outbox.clone(),
        };
        Ok(generate_shapes_with_events(config, variant_count, &mut sink)?)
    }

    /// Re-read the selection. Always reports it when `force` is set, otherwise only on change.
    /// Re-renders the last preview when the selection changed.
    pub fn refresh_selection(&mut self, force: bool) -> Result<()> {
        let changed = self.session.update_selection(self.document.selection());
        if changed || force {
            debug!("Selection now {:?}.", self.session.selection);
            self.send(self.session.selection_message());
        }
        if changed {
            if let Some((config, randomize)) = self.session.last_preview.clone() {
                self.preview_config(&config, randomize)?;
            }
        }
        Ok(())
    }

    pub fn preview(&mut self, input: &GridInput, randomize_variants: bool) -> Result<()> {
        let config = input.to_config()?;
        self.preview_config(&config, randomize_variants)
    }

    /// Materialize the grid temporarily, export it, and remove it again.
    pub fn preview_config(&mut self, config: &GridConfig, randomize_variants: bool) -> Result<()> {
        let records = self.generate(config, randomize_variants)?;
        let fill = dot_fill_for(self.document.background());
        let nodes = materialize(
            &mut *self.document,
            &records,
            self.session.source.as_ref(),
            fill,
        )?;

        let image = self.document.export_preview(&nodes);
        let removed = self.document.remove(&nodes);
        let image = image.map_err(PluginError::Document)?;
        removed.map_err(PluginError::Document)?;

        self.session.last_preview = Some((config.clone(), randomize_variants));
        self.session.preview_generation += 1;
        self.send(PluginMessage::Preview {
            generation: self.session.preview_generation,
            count: records.len(),
            image,
        });
        Ok(())
    }

    /// Commit the grid: centered on the viewport and grouped under [`GROUP_NAME`].
    pub fn create(&mut self, input: &GridInput, randomize_variants: bool) -> Result<()> {
        let config = input.to_config()?;
        let mut records = self.generate(&config, randomize_variants)?;
        center_on(
            &mut records,
            &config,
            Vec2::from(self.document.viewport_center()),
        );

        let fill = dot_fill_for(self.document.background());
        let nodes = materialize(
            &mut *self.document,
            &records,
            self.session.source.as_ref(),
            fill,
        )?;
        let group = match self.document.group(&nodes, GROUP_NAME) {
            Ok(group) => group,
            Err(err) => {
                rollback(&mut *self.document, &nodes);
                return Err(PluginError::Document(err));
            }
        };

        info!("Created {} elements in group {:?}.", nodes.len(), group);
        self.send(PluginMessage::Created {
            count: nodes.len(),
            group,
        });
        Ok(())
    }

    pub fn close(&mut self) {
        self.session.closed = true;
        self.send(PluginMessage::Closed);
    }
}
