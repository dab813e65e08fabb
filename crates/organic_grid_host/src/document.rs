//! Host document boundary and an in-memory implementation.
//!
//! [`HostDocument`] is the only surface the plugin uses to touch the design tool. Positions cross
//! it as [`mint::Vector2`] so host adapters do not need to depend on `glam`.
use std::collections::BTreeMap;

use anyhow::{anyhow, bail};
use mint::Vector2;
use serde::{Deserialize, Serialize};

use crate::selection::{ComponentRef, SelectedNode};

/// Opaque host node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance (Rec. 709 weights).
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// Dot fill that contrasts with the page background; unknown backgrounds are treated as light.
pub fn dot_fill_for(background: Option<Rgb>) -> Rgb {
    match background {
        Some(bg) if bg.luminance() < 0.5 => Rgb::WHITE,
        _ => Rgb::BLACK,
    }
}

/// Operations the plugin needs from the host design tool.
///
/// Node geometry is given as the top-left corner of the element's bounding square plus its side
/// length; rotation is in degrees, positive counter-clockwise.
pub trait HostDocument {
    /// The current single selection, if any.
    fn selection(&self) -> Option<SelectedNode>;

    /// Center of the visible viewport in canvas coordinates.
    fn viewport_center(&self) -> Vector2<f32>;

    /// Background color of the current page, if it has a solid one.
    fn background(&self) -> Option<Rgb>;

    fn create_ellipse(
        &mut self,
        name: &str,
        top_left: Vector2<f32>,
        diameter: f32,
        fill: Rgb,
    ) -> anyhow::Result<NodeId>;

    fn create_instance(
        &mut self,
        component: &ComponentRef,
        name: &str,
        top_left: Vector2<f32>,
        size: f32,
        rotation: f32,
    ) -> anyhow::Result<NodeId>;

    /// Group `nodes` under a new parent named `name`.
    fn group(&mut self, nodes: &[NodeId], name: &str) -> anyhow::Result<NodeId>;

    /// Delete `nodes` (and their children) from the document.
    fn remove(&mut self, nodes: &[NodeId]) -> anyhow::Result<()>;

    /// Export `nodes` as a preview image.
    fn export_preview(&mut self, nodes: &[NodeId]) -> anyhow::Result<Vec<u8>>;
}

/// Kind-specific payload of a [`MemoryNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MemoryNodeKind {
    Ellipse { fill: Rgb },
    Instance { component: NodeId },
    Group { children: Vec<NodeId> },
}

/// A node stored by [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryNode {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
    pub kind: MemoryNodeKind,
}

/// In-memory [`HostDocument`] used by tests and demos.
///
/// `export_preview` encodes the exported nodes as JSON instead of rendering an image.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: BTreeMap<NodeId, MemoryNode>,
    next_id: u64,
    selection: Option<SelectedNode>,
    viewport_center: Vector2<f32>,
    background: Option<Rgb>,
    /// Remaining node creations before the document starts refusing them.
    create_budget: Option<usize>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_id: 1000,
            selection: None,
            viewport_center: Vector2 { x: 0.0, y: 0.0 },
            background: Some(Rgb::WHITE),
            create_budget: None,
        }
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_center(mut self, center: impl Into<Vector2<f32>>) -> Self {
        self.viewport_center = center.into();
        self
    }

    pub fn with_background(mut self, background: Option<Rgb>) -> Self {
        self.background = background;
        self
    }

    /// Refuse node creation after `count` more nodes, simulating a host-side failure.
    pub fn with_create_budget(mut self, count: usize) -> Self {
        self.create_budget = Some(count);
        self
    }

    pub fn set_selection(&mut self, selection: Option<SelectedNode>) {
        self.selection = selection;
    }

    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &MemoryNode)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, node: MemoryNode) -> anyhow::Result<NodeId> {
        if let Some(budget) = self.create_budget.as_mut() {
            if *budget == 0 {
                bail!("node limit reached");
            }
            *budget -= 1;
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        Ok(id)
    }

    fn remove_recursive(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            if let MemoryNodeKind::Group { children } = node.kind {
                for child in children {
                    self.remove_recursive(child);
                }
            }
        }
    }
}

impl HostDocument for MemoryDocument {
    fn selection(&self) -> Option<SelectedNode> {
        self.selection.clone()
    }

    fn viewport_center(&self) -> Vector2<f32> {
        self.viewport_center
    }

    fn background(&self) -> Option<Rgb> {
        self.background
    }

    fn create_ellipse(
        &mut self,
        name: &str,
        top_left: Vector2<f32>,
        diameter: f32,
        fill: Rgb,
    ) -> anyhow::Result<NodeId> {
        self.insert(MemoryNode {
            name: name.to_owned(),
            x: top_left.x,
            y: top_left.y,
            size: diameter,
            rotation: 0.0,
            kind: MemoryNodeKind::Ellipse { fill },
        })
    }

    fn create_instance(
        &mut self,
        component: &ComponentRef,
        name: &str,
        top_left: Vector2<f32>,
        size: f32,
        rotation: f32,
    ) -> anyhow::Result<NodeId> {
        self.insert(MemoryNode {
            name: name.to_owned(),
            x: top_left.x,
            y: top_left.y,
            size,
            rotation,
            kind: MemoryNodeKind::Instance {
                component: component.id,
            },
        })
    }

    fn group(&mut self, nodes: &[NodeId], name: &str) -> anyhow::Result<NodeId> {
        if nodes.is_empty() {
            bail!("cannot group an empty node list");
        }
        if let Some(missing) = nodes.iter().find(|id| !self.nodes.contains_key(id)) {
            return Err(anyhow!("unknown node {missing:?}"));
        }
        self.insert(MemoryNode {
            name: name.to_owned(),
            x: 0.0,
            y: 0.0,
            size: 0.0,
            rotation: 0.0,
            kind: MemoryNodeKind::Group {
                children: nodes.to_vec(),
            },
        })
    }

    fn remove(&mut self, nodes: &[NodeId]) -> anyhow::Result<()> {
        for &id in nodes {
            self.remove_recursive(id);
        }
        Ok(())
    }

    fn export_preview(&mut self, nodes: &[NodeId]) -> anyhow::Result<Vec<u8>> {
        let exported = nodes
            .iter()
            .map(|id| {
                self.nodes
                    .get(id)
                    .ok_or_else(|| anyhow!("unknown node {id:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(serde_json::to_vec(&exported)?)
    }
}
