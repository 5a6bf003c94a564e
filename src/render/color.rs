//! Mapping from accumulated elevation to a display color

use image::Rgb;

use crate::io::configuration::{ELEVATION_SCALE, MAX_CHANNEL};

/// Signed intensity in `[-255, 255]`, truncated toward zero
///
/// Saturates smoothly through `tanh`; NaN elevations yield 0.
pub fn intensity(elevation: f64) -> i32 {
    let mu = f64::from(MAX_CHANNEL) * (elevation / ELEVATION_SCALE).tanh();
    // `as` truncates toward zero and saturates, NaN becomes 0
    (mu as i32).clamp(-MAX_CHANNEL, MAX_CHANNEL)
}

fn channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL) as u8
}

/// Color for a pixel with the given elevation, `None` when it is neutral
///
/// Raised ground fades from white to green, lowered ground from white to
/// blue. An elevation whose intensity truncates to zero leaves the base
/// pixel untouched rather than painting it white, so a raise cancelled by an
/// equal lower restores the original map.
pub fn elevation_color(elevation: f64) -> Option<Rgb<u8>> {
    let mu = intensity(elevation);
    if mu == 0 {
        return None;
    }

    let max = MAX_CHANNEL;
    let [r, g, b] = if elevation > 0.0 {
        [max - mu, max, max - mu]
    } else {
        [max + mu, max + mu, max]
    };

    Some(Rgb([channel(r), channel(g), channel(b)]))
}
