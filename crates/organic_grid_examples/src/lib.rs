#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_records_to_png, RenderConfig, PALETTE};
