use glam::Vec2;
use organic_grid_host::prelude::*;
use organic_grid_host::{MemoryNodeKind, GROUP_NAME};

fn input(columns: f64, rows: f64) -> GridInput {
    GridInput {
        columns,
        rows,
        gap: 10.0,
        size: 5.0,
        displacement: 1.0,
        smoothness: 1.0,
        size_jitter: None,
        max_rotation: None,
        seed: 1.0,
    }
}

fn shapes() -> SelectedNode {
    SelectedNode::ComponentSet {
        id: NodeId(1),
        name: "Shapes".into(),
        variants: vec![
            ComponentRef::new(NodeId(2), "Circle"),
            ComponentRef::new(NodeId(3), "Square"),
            ComponentRef::new(NodeId(4), "Triangle"),
        ],
    }
}

fn drain(plugin: &GridPlugin<MemoryDocument>) -> Vec<PluginMessage> {
    plugin.messages().try_iter().collect()
}

#[test]
fn initial_selection_is_reported() {
    let mut doc = MemoryDocument::new();
    doc.set_selection(Some(shapes()));
    let plugin = GridPlugin::new(doc);

    assert_eq!(
        drain(&plugin),
        vec![PluginMessage::Selection {
            kind: Some(SelectionKind::ComponentSet),
            name: Some("Shapes".into()),
            variant_count: 3,
        }]
    );
}

#[test]
fn preview_leaves_document_untouched() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    drain(&plugin);

    plugin
        .events()
        .send(HostEvent::Ui(UiMessage::Preview {
            config: input(3.0, 3.0),
            randomize_variants: false,
        }))
        .unwrap();
    assert_eq!(plugin.pump(), 1);

    match drain(&plugin).as_slice() {
        [PluginMessage::Preview {
            generation: 1,
            count: 9,
            image,
        }] => assert!(!image.is_empty()),
        other => panic!("unexpected messages {other:?}"),
    }
    assert!(plugin.document().is_empty());
}

#[test]
fn create_groups_dots_around_viewport_center() {
    let doc = MemoryDocument::new().with_viewport_center(Vec2::new(500.0, 300.0));
    let mut plugin = GridPlugin::new(doc);
    drain(&plugin);

    let mut flat = input(3.0, 3.0);
    flat.displacement = 0.0;
    flat.size_jitter = Some(0.0);
    plugin
        .handle(HostEvent::Ui(UiMessage::Create {
            config: flat,
            randomize_variants: false,
        }))
        .unwrap();

    let group = match drain(&plugin).as_slice() {
        [PluginMessage::Created { count: 9, group }] => *group,
        other => panic!("unexpected messages {other:?}"),
    };
    let group_node = plugin.document().node(group).unwrap();
    assert_eq!(group_node.name, GROUP_NAME);

    // The middle dot of a 3x3 grid lands on the viewport center.
    let middle = plugin
        .document()
        .nodes()
        .find(|(_, n)| n.name == "dot-1-1")
        .map(|(_, n)| n.clone())
        .unwrap();
    assert_eq!(middle.x + middle.size * 0.5, 500.0);
    assert_eq!(middle.y + middle.size * 0.5, 300.0);
    assert!(matches!(middle.kind, MemoryNodeKind::Ellipse { fill } if fill == Rgb::BLACK));
}

#[test]
fn dark_backgrounds_get_white_dots() {
    let doc = MemoryDocument::new().with_background(Some(Rgb::new(0.05, 0.05, 0.05)));
    let mut plugin = GridPlugin::new(doc);
    plugin
        .handle(HostEvent::Ui(UiMessage::Create {
            config: input(2.0, 1.0),
            randomize_variants: false,
        }))
        .unwrap();

    let fills: Vec<_> = plugin
        .document()
        .nodes()
        .filter_map(|(_, n)| match n.kind {
            MemoryNodeKind::Ellipse { fill } => Some(fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![Rgb::WHITE, Rgb::WHITE]);
}

#[test]
fn component_sets_are_instantiated_with_random_variants() {
    let mut doc = MemoryDocument::new();
    doc.set_selection(Some(shapes()));
    let mut plugin = GridPlugin::new(doc);
    plugin
        .handle(HostEvent::Ui(UiMessage::Create {
            config: input(6.0, 6.0),
            randomize_variants: true,
        }))
        .unwrap();

    let mut components: Vec<_> = plugin
        .document()
        .nodes()
        .filter_map(|(_, n)| match n.kind {
            MemoryNodeKind::Instance { component } => Some(component),
            _ => None,
        })
        .collect();
    assert_eq!(components.len(), 36);
    components.sort();
    components.dedup();
    assert!(components.len() > 1, "expected several variants");
    assert!(components
        .iter()
        .all(|c| [NodeId(2), NodeId(3), NodeId(4)].contains(c)));
}

#[test]
fn without_randomization_only_the_primary_variant_is_used() {
    let mut doc = MemoryDocument::new();
    doc.set_selection(Some(shapes()));
    let mut plugin = GridPlugin::new(doc);
    plugin
        .handle(HostEvent::Ui(UiMessage::Create {
            config: input(4.0, 4.0),
            randomize_variants: false,
        }))
        .unwrap();

    assert!(plugin.document().nodes().all(|(_, n)| match n.kind {
        MemoryNodeKind::Instance { component } => component == NodeId(2),
        _ => true,
    }));
}

#[test]
fn invalid_config_reports_error_and_creates_nothing() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    drain(&plugin);

    plugin
        .events()
        .send(HostEvent::Ui(UiMessage::Create {
            config: input(0.0, 3.0),
            randomize_variants: false,
        }))
        .unwrap();
    plugin.pump();

    match drain(&plugin).as_slice() {
        [PluginMessage::Error { message }] => assert!(message.contains("columns")),
        other => panic!("unexpected messages {other:?}"),
    }
    assert!(plugin.document().is_empty());
}

#[test]
fn huge_ui_counts_report_error_instead_of_panicking() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    drain(&plugin);

    plugin
        .events()
        .send(HostEvent::Ui(UiMessage::Preview {
            config: input(1e12, 1e12),
            randomize_variants: false,
        }))
        .unwrap();
    assert_eq!(plugin.pump(), 1);

    match drain(&plugin).as_slice() {
        [PluginMessage::Error { message }] => assert!(message.contains("cells"), "{message}"),
        other => panic!("unexpected messages {other:?}"),
    }
    assert!(plugin.document().is_empty());
}

#[test]
fn selection_change_rerenders_last_preview_in_order() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    drain(&plugin);

    let events = plugin.events();
    events
        .send(HostEvent::Ui(UiMessage::Preview {
            config: input(2.0, 2.0),
            randomize_variants: true,
        }))
        .unwrap();
    plugin.pump();

    plugin.document_mut().set_selection(Some(shapes()));
    events.send(HostEvent::SelectionChanged).unwrap();
    events
        .send(HostEvent::DocumentChanged { by_plugin: true })
        .unwrap();
    assert_eq!(plugin.pump(), 2);

    let messages = drain(&plugin);
    let generations: Vec<_> = messages
        .iter()
        .filter_map(|m| match m {
            PluginMessage::Preview { generation, .. } => Some(*generation),
            _ => None,
        })
        .collect();
    assert_eq!(generations, vec![1, 2]);
    assert!(matches!(
        messages.iter().find(|m| matches!(m, PluginMessage::Selection { .. })),
        Some(PluginMessage::Selection {
            variant_count: 3,
            ..
        })
    ));
    assert!(plugin.document().is_empty());
}

#[test]
fn unchanged_document_does_not_rerender() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    plugin
        .handle(HostEvent::Ui(UiMessage::Preview {
            config: input(2.0, 2.0),
            randomize_variants: false,
        }))
        .unwrap();
    drain(&plugin);

    plugin
        .handle(HostEvent::DocumentChanged { by_plugin: false })
        .unwrap();
    assert!(drain(&plugin).is_empty());
    assert_eq!(plugin.session().preview_generation, 1);
}

#[test]
fn cancel_closes_and_stops_processing() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    drain(&plugin);

    let events = plugin.events();
    events.send(HostEvent::Ui(UiMessage::Cancel)).unwrap();
    events
        .send(HostEvent::Ui(UiMessage::Create {
            config: input(2.0, 2.0),
            randomize_variants: false,
        }))
        .unwrap();

    assert_eq!(plugin.pump(), 1);
    assert!(plugin.is_closed());
    assert_eq!(drain(&plugin), vec![PluginMessage::Closed]);
    assert!(plugin.document().is_empty());
}

#[test]
fn failed_commit_rolls_back() {
    let doc = MemoryDocument::new().with_create_budget(4);
    let mut plugin = GridPlugin::new(doc);
    let err = plugin
        .handle(HostEvent::Ui(UiMessage::Create {
            config: input(3.0, 3.0),
            randomize_variants: false,
        }))
        .unwrap_err();
    assert!(matches!(err, PluginError::Document(_)));
    assert!(plugin.document().is_empty());
}

#[test]
fn ui_json_drives_the_plugin() {
    let mut plugin = GridPlugin::new(MemoryDocument::new());
    drain(&plugin);

    let message = UiMessage::from_json(
        r#"{"type":"create","config":{"columns":2,"rows":2,"gap":4,"size":4,
            "displacement":0,"smoothness":0.1,"seed":3}}"#,
    )
    .unwrap();
    plugin.events().send(HostEvent::Ui(message)).unwrap();
    plugin.pump();

    let reply = drain(&plugin).pop().unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(value["type"], "created");
    assert_eq!(value["count"], 4);
}
