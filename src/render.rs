//! Density-to-pixel mapping for whatever display drives the solver.

use crate::Field2;

const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// `min(density * 255, 255)`, with negative or NaN input mapped to 0.
pub fn density_to_intensity(density: f32) -> u8 {
    (density * 255.0).clamp(0.0, 255.0) as u8
}

pub fn density_to_luma(density: &Field2, out: &mut Vec<u8>) {
    out.clear();
    out.extend(density.as_slice().iter().map(|value| density_to_intensity(*value)));
}

/// Packs the intensity into the blue channel of `0x00RRGGBB` pixels.
pub fn density_to_rgb(density: &Field2, out: &mut Vec<u32>) {
    out.clear();
    out.extend(
        density
            .as_slice()
            .iter()
            .map(|value| u32::from(density_to_intensity(*value))),
    );
}

/// One character per cell, one line per row, darkest to brightest.
pub fn ascii_frame(density: &Field2) -> String {
    let n = density.grid().n();
    let mut frame = String::with_capacity(n * (n + 1));
    for row in 0..n {
        for col in 0..n {
            let level = usize::from(density_to_intensity(density.get(row, col)));
            let idx = level * (ASCII_RAMP.len() - 1) / 255;
            frame.push(char::from(ASCII_RAMP[idx]));
        }
        frame.push('\n');
    }
    frame
}
