//! Selection dispatch: what the user has selected and which component it instantiates.
//!
//! Hosts report the selection as one of a small closed set of node kinds. Each kind knows how
//! to resolve itself into a [`ComponentSource`], the component (and its interchangeable variants)
//! that grid cells should instantiate. Plain nodes resolve to nothing and the grid falls back to
//! dots.
use serde::{Deserialize, Serialize};

use crate::document::NodeId;

/// Reference to a component that can be instantiated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub id: NodeId,
    pub name: String,
}

impl ComponentRef {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The current selection, as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SelectedNode {
    /// Any node that is not component-backed.
    Plain { id: NodeId, name: String },
    /// A main component. `siblings` lists the variants of its component set, if any.
    Component {
        component: ComponentRef,
        siblings: Vec<ComponentRef>,
    },
    /// An instance. `main_component` is `None` when the host cannot reach it.
    Instance {
        id: NodeId,
        main_component: Option<ComponentRef>,
        siblings: Vec<ComponentRef>,
    },
    /// A component set; its first variant is the default.
    ComponentSet {
        id: NodeId,
        name: String,
        variants: Vec<ComponentRef>,
    },
}

/// Payload-free discriminant of [`SelectedNode`], reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKind {
    Plain,
    Component,
    Instance,
    ComponentSet,
}

impl SelectedNode {
    pub fn kind(&self) -> SelectionKind {
        match self {
            SelectedNode::Plain { .. } => SelectionKind::Plain,
            SelectedNode::Component { .. } => SelectionKind::Component,
            SelectedNode::Instance { .. } => SelectionKind::Instance,
            SelectedNode::ComponentSet { .. } => SelectionKind::ComponentSet,
        }
    }

    /// Display name of the selected node.
    pub fn name(&self) -> &str {
        match self {
            SelectedNode::Plain { name, .. } | SelectedNode::ComponentSet { name, .. } => {
                name.as_str()
            }
            SelectedNode::Component { component, .. } => component.name.as_str(),
            SelectedNode::Instance {
                main_component: Some(component),
                ..
            } => component.name.as_str(),
            SelectedNode::Instance { .. } => "",
        }
    }

    /// Resolve the selection into the component grid cells should instantiate.
    pub fn resolve_component(&self) -> Option<ComponentSource> {
        match self {
            SelectedNode::Plain { .. } => None,
            SelectedNode::Component {
                component,
                siblings,
            } => Some(ComponentSource::new(component.clone(), siblings.clone())),
            SelectedNode::Instance {
                main_component,
                siblings,
                ..
            } => main_component
                .as_ref()
                .map(|c| ComponentSource::new(c.clone(), siblings.clone())),
            SelectedNode::ComponentSet { variants, .. } => variants
                .first()
                .map(|first| ComponentSource::new(first.clone(), variants.clone())),
        }
    }
}

/// A component together with the family of variants it can be swapped for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    pub primary: ComponentRef,
    /// Interchangeable variants, always containing at least `primary`.
    pub variants: Vec<ComponentRef>,
}

impl ComponentSource {
    /// Build a source; an empty variant list collapses to just `primary`.
    pub fn new(primary: ComponentRef, variants: Vec<ComponentRef>) -> Self {
        let variants = if variants.is_empty() {
            vec![primary.clone()]
        } else {
            variants
        };
        Self { primary, variants }
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Component for a record's variant choice; `None` or out-of-range picks `primary`.
    pub fn component_for(&self, variant_index: Option<usize>) -> &ComponentRef {
        variant_index
            .and_then(|i| self.variants.get(i))
            .unwrap_or(&self.primary)
    }
}
