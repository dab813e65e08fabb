use organic_grid::prelude::*;
use organic_grid_examples::{init_tracing, render_records_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let base = GridConfig::new(20, 20, 10.0)
        .with_gap(8.0)
        .with_displacement(10.0)
        .with_seed(42);
    let render = RenderConfig::new((640, 640));

    for smoothness in [0.01_f32, 0.05, 0.2, 0.8] {
        let config = base.clone().with_smoothness(smoothness);
        let records = generate_shapes(&config, None)?;
        let mean_offset = records.iter().map(|r| r.offset().length()).sum::<f32>()
            / records.len() as f32;
        info!("smoothness {smoothness}: mean offset {mean_offset:.2}");
        render_records_to_png(
            &records,
            &render,
            format!("organic_grid_smoothness_{smoothness}.png"),
        )?;
    }
    Ok(())
}
