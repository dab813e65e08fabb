//! Drives the plugin against an in-memory document with JSON messages, the way a UI would.

use organic_grid_host::prelude::*;
use tracing::info;

fn main() -> anyhow::Result<()> {
    organic_grid_examples::init_tracing();

    let mut document = MemoryDocument::new()
        .with_viewport_center([400.0, 300.0])
        .with_background(Some(Rgb::new(0.1, 0.1, 0.12)));
    document.set_selection(Some(SelectedNode::ComponentSet {
        id: NodeId(1),
        name: "Leaf".into(),
        variants: vec![
            ComponentRef::new(NodeId(2), "Leaf/Small"),
            ComponentRef::new(NodeId(3), "Leaf/Large"),
        ],
    }));

    let mut plugin = GridPlugin::new(document);
    let events = plugin.events();
    let messages = plugin.messages();

    let config = r#"{"columns":6,"rows":4,"gap":12,"size":16,"displacement":5,"smoothness":0.1,"seed":3}"#;
    for text in [
        format!(r#"{{"type":"preview","config":{config},"randomizeVariants":true}}"#),
        format!(r#"{{"type":"create","config":{config},"randomizeVariants":true}}"#),
        r#"{"type":"cancel"}"#.to_string(),
    ] {
        events.send(HostEvent::Ui(UiMessage::from_json(&text)?))?;
    }

    let handled = plugin.pump();
    info!("handled {handled} events; document holds {} nodes", plugin.document().len());

    for message in messages.try_iter() {
        let json = match &message {
            PluginMessage::Preview { generation, count, image } => format!(
                "preview #{generation}: {count} shapes, {} byte image",
                image.len()
            ),
            other => other.to_json()?,
        };
        println!("{json}");
    }
    Ok(())
}
