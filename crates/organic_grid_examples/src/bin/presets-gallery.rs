use organic_grid::prelude::*;
use organic_grid_examples::{init_tracing, render_records_to_png, RenderConfig};
use organic_grid_host::GridPresets;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let presets = GridPresets::builtin()?;
    let render = RenderConfig::new((640, 640));
    for name in presets.names() {
        let config = presets.get(name)?;
        let records = generate_shapes(config, Some(3))?;
        render_records_to_png(&records, &render, format!("organic_grid_preset_{name}.png"))?;
    }
    Ok(())
}
