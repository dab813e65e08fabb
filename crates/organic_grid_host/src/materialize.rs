//! Turning placement records into document nodes.
use organic_grid::prelude::PlacementRecord;
use tracing::warn;

use crate::document::{HostDocument, NodeId, Rgb};
use crate::error::{PluginError, Result};
use crate::selection::ComponentSource;

/// Create one node per record: an instance of `source` when given, otherwise a `fill` ellipse.
///
/// If any creation fails, nodes created so far are removed before the error is returned.
pub fn materialize<D: HostDocument + ?Sized>(
    document: &mut D,
    records: &[PlacementRecord],
    source: Option<&ComponentSource>,
    fill: Rgb,
) -> Result<Vec<NodeId>> {
    let mut created = Vec::with_capacity(records.len());
    for record in records {
        let top_left = record.top_left().into();
        let result = match source {
            Some(source) => document.create_instance(
                source.component_for(record.variant_index),
                &record.name,
                top_left,
                record.dimension,
                record.rotation,
            ),
            None => document.create_ellipse(&record.name, top_left, record.dimension, fill),
        };

        match result {
            Ok(id) => created.push(id),
            Err(err) => {
                warn!(
                    "Creating '{}' failed after {} nodes; rolling back.",
                    record.name,
                    created.len()
                );
                rollback(document, &created);
                return Err(PluginError::Document(err));
            }
        }
    }

    Ok(created)
}

/// Remove `nodes` after a failed operation. A failed cleanup is logged; returns whether the
/// nodes were removed.
pub(crate) fn rollback<D: HostDocument + ?Sized>(document: &mut D, nodes: &[NodeId]) -> bool {
    match document.remove(nodes) {
        Ok(()) => true,
        Err(cleanup) => {
            warn!("Rollback of {} nodes failed: {cleanup:#}.", nodes.len());
            false
        }
    }
}
