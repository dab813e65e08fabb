use organic_grid::prelude::*;
use organic_grid_examples::{init_tracing, render_records_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GridConfig::new(24, 24, 12.0)
        .with_gap(6.0)
        .with_displacement(8.0)
        .with_smoothness(0.08)
        .with_seed(7);

    let records = generate_shapes(&config, None)?;
    render_records_to_png(
        &records,
        &RenderConfig::new((800, 800)),
        "organic_grid_dots_basic.png",
    )?;
    Ok(())
}
