use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use organic_grid::prelude::PlacementRecord;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Colors used for variant indices; dots without a variant use `RenderConfig::color`.
pub const PALETTE: [[u8; 3]; 6] = [
    [231, 76, 60],
    [46, 134, 193],
    [39, 174, 96],
    [241, 196, 15],
    [142, 68, 173],
    [230, 126, 34],
];

/// Install a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub color: [u8; 3],
    /// Margin around the grid in pixels.
    pub padding: u32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [250, 248, 242],
            color: [30, 30, 30],
            padding: 24,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }
}

/// Draw dots as circles and variant records as rotated squares, scaled to fit the image.
pub fn render_records_to_png(
    records: &[PlacementRecord],
    rc: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));

    if let Some((min, max)) = extent(records) {
        let avail = Vec2::new(
            w.saturating_sub(2 * rc.padding).max(1) as f32,
            h.saturating_sub(2 * rc.padding).max(1) as f32,
        );
        let span = (max - min).max(Vec2::splat(f32::EPSILON));
        let scale = (avail.x / span.x).min(avail.y / span.y);
        let origin = Vec2::splat(rc.padding as f32) + (avail - span * scale) * 0.5;

        for record in records {
            let center = origin + (record.position - min) * scale;
            let half = record.dimension * scale * 0.5;
            match record.variant_index {
                Some(i) => {
                    let color = PALETTE[i % PALETTE.len()];
                    fill_rotated_square(&mut img, center, half, record.rotation, color);
                }
                None => fill_circle(&mut img, center, half, rc.color),
            }
        }
    }

    let out_path = out_path.as_ref();
    img.save(out_path)?;
    info!("Wrote {} elements to {}.", records.len(), out_path.display());
    Ok(())
}

fn extent(records: &[PlacementRecord]) -> Option<(Vec2, Vec2)> {
    records.iter().fold(None, |acc, r| {
        let half = Vec2::splat(r.dimension * 0.5);
        let (lo, hi) = (r.position - half, r.position + half);
        Some(match acc {
            Some((min, max)) => (lo.min(min), hi.max(max)),
            None => (lo, hi),
        })
    })
}

fn pixel_bounds(img: &RgbImage, center: Vec2, reach: f32) -> (u32, u32, u32, u32) {
    let x0 = (center.x - reach).floor().max(0.0) as u32;
    let y0 = (center.y - reach).floor().max(0.0) as u32;
    let x1 = ((center.x + reach).ceil().max(0.0) as u32).min(img.width());
    let y1 = ((center.y + reach).ceil().max(0.0) as u32).min(img.height());
    (x0, y0, x1, y1)
}

fn fill_circle(img: &mut RgbImage, center: Vec2, radius: f32, color: [u8; 3]) {
    let (x0, y0, x1, y1) = pixel_bounds(img, center, radius);
    let r2 = radius * radius;
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= r2 {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}

fn fill_rotated_square(
    img: &mut RgbImage,
    center: Vec2,
    half: f32,
    rotation_deg: f32,
    color: [u8; 3],
) {
    // With y pointing down, rotating by +angle maps a pixel into the square's local frame.
    let rot = Vec2::from_angle(rotation_deg.to_radians());
    let (x0, y0, x1, y1) = pixel_bounds(img, center, half * std::f32::consts::SQRT_2);
    for y in y0..y1 {
        for x in x0..x1 {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            let local = rot.rotate(d);
            if local.x.abs() <= half && local.y.abs() <= half {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}
