use organic_grid::prelude::*;
use organic_grid_examples::{init_tracing, render_records_to_png, RenderConfig};
use tracing::info;

const VARIANTS: usize = 4;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GridConfig::new(32, 32, 14.0)
        .with_gap(4.0)
        .with_displacement(3.0)
        .with_smoothness(0.03)
        .with_max_rotation(30.0)
        .with_seed(2024);

    let mut sink = VecSink::only([GridEventKind::GenerationFinished, GridEventKind::Warning]);
    let records = generate_shapes_with_events(&config, Some(VARIANTS), &mut sink)?;

    let mut histogram = [0usize; VARIANTS];
    for index in records.iter().filter_map(|r| r.variant_index) {
        histogram[index] += 1;
    }
    info!("variant histogram: {histogram:?}");
    for event in sink.into_inner() {
        info!("{event:?}");
    }

    render_records_to_png(
        &records,
        &RenderConfig::new((900, 900)).with_background([20, 22, 28]),
        "organic_grid_variants.png",
    )?;
    Ok(())
}
