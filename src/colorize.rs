use crate::{
    model::FlowField,
    wheel::{ColorWheel, NCOLS},
};

/// Packed RGB8 frame, `width*height*3` bytes in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Largest valid vector magnitude in the field, floored at 1.0.
///
/// Invalid vectors (the format's missing-value sentinel) are skipped, so a
/// single garbage pixel cannot wash out the normalization of the rest of the
/// field. The floor keeps near-zero fields from dividing by a tiny number.
pub fn max_radius(field: &FlowField) -> f32 {
    let mut max_sq = 0.0f32;
    for v in field.vectors() {
        if !v.is_valid() {
            continue;
        }
        max_sq = max_sq.max(v.magnitude_sq());
    }
    max_sq.sqrt().max(1.0)
}

/// Colorize a flow field with the process-wide wheel.
pub fn colorize(field: &FlowField) -> FrameRgb {
    colorize_with(field, ColorWheel::shared())
}

/// Map every flow vector to an RGB pixel.
///
/// Direction selects a hue from the wheel (with linear interpolation between
/// adjacent entries); magnitude, normalized against [`max_radius`], drives
/// saturation: zero-length vectors render near-white, vectors at the field
/// maximum render the pure wheel hue. Invalid vectors render black.
pub fn colorize_with(field: &FlowField, wheel: &ColorWheel) -> FrameRgb {
    let maxrad = max_radius(field);
    tracing::debug!(maxrad, "normalizing flow field");

    let mut data = vec![0u8; (field.width() as usize) * (field.height() as usize) * 3];
    for (i, v) in field.vectors().iter().enumerate() {
        if !v.is_valid() {
            continue; // stays background black
        }
        let pixel = compute_color(v.dx / maxrad, v.dy / maxrad, wheel);
        data[i * 3..i * 3 + 3].copy_from_slice(&pixel);
    }

    FrameRgb {
        width: field.width(),
        height: field.height(),
        data,
    }
}

/// Color for one normalized vector, from the OpenCV optical-flow sample
/// mapping.
fn compute_color(nx: f32, ny: f32, wheel: &ColorWheel) -> [u8; 3] {
    let rad = (nx * nx + ny * ny).sqrt();
    let angle = (-ny).atan2(-nx) / std::f32::consts::PI;

    let fk = (angle + 1.0) / 2.0 * (NCOLS as f32 - 1.0);
    let k0 = fk as usize;
    let k1 = (k0 + 1) % NCOLS;
    let frac = fk - k0 as f32;

    let mut pixel = [0u8; 3];
    for ch in 0..3 {
        let col0 = f32::from(wheel.entry(k0)[ch]) / 255.0;
        let col1 = f32::from(wheel.entry(k1)[ch]) / 255.0;
        let mut col = (1.0 - frac) * col0 + frac * col1;

        if rad <= 1.0 {
            col = 1.0 - rad * (1.0 - col); // saturation grows with radius
        } else {
            col *= 0.75; // out of range
        }

        // The wheel is authored in one channel order; the emitted pixel uses
        // the reverse, matching the reference framebuffer layout.
        pixel[2 - ch] = (255.0 * col).round().clamp(0.0, 255.0) as u8;
    }
    pixel
}
