//! Pure per-channel calculations for the darkening transforms.
//!
//! All functions here are pure and testable without any I/O or images. They
//! are generic over [`Channel`] so the same math serves 8-bit, 16-bit and
//! floating-point buffers.

/// A single color channel value in one of the sample formats we transform.
pub trait Channel: Copy {
    /// Largest valid value (255 for `u8`, 65535 for `u16`, 1.0 for `f32`).
    const MAX: f32;
    /// Integral channels are rounded to the nearest value after scaling.
    const INTEGRAL: bool;

    fn to_f32(self) -> f32;

    /// Convert back from an already clamped value.
    fn from_f32(value: f32) -> Self;
}

impl Channel for u8 {
    const MAX: f32 = u8::MAX as f32;
    const INTEGRAL: bool = true;

    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value as u8
    }
}

impl Channel for u16 {
    const MAX: f32 = u16::MAX as f32;
    const INTEGRAL: bool = true;

    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value as u16
    }
}

impl Channel for f32 {
    const MAX: f32 = 1.0;
    const INTEGRAL: bool = false;

    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

/// Scale a channel by `factor`, rounding to nearest and clamping to the valid range.
///
/// Rounding is half away from zero, so `255 * 0.3 = 76.5` becomes `77`.
///
/// # Examples
/// ```
/// # use dark_variant::imaging::scale_channel;
/// assert_eq!(scale_channel(255u8, 0.3), 77);
/// assert_eq!(scale_channel(200u8, 2.0), 255);
/// ```
pub fn scale_channel<C: Channel>(value: C, factor: f32) -> C {
    let scaled = value.to_f32() * factor;
    let scaled = if C::INTEGRAL { scaled.round() } else { scaled };
    C::from_f32(scaled.clamp(0.0, C::MAX))
}

/// Scale every color channel in place. Alpha must not be part of `color`.
pub fn scale_color<C: Channel>(color: &mut [C], factor: f32) {
    for channel in color.iter_mut() {
        *channel = scale_channel(*channel, factor);
    }
}

/// Invert a pixel's color channels, keeping strongly blue pixels blue.
///
/// For RGB: when blue exceeds 150 (on the 8-bit scale) the red and green
/// channels are halved and blue becomes `max - blue / 2`. Otherwise every
/// channel is complemented. Any other channel count (grayscale) is simply
/// complemented. Alpha must not be part of `color`.
pub fn invert_color<C: Channel>(color: &mut [C]) {
    match color {
        [r, g, b] => {
            let blue_threshold = 150.0 * C::MAX / 255.0;
            if b.to_f32() > blue_threshold {
                *r = half(*r);
                *g = half(*g);
                *b = complement(half(*b));
            } else {
                *r = complement(*r);
                *g = complement(*g);
                *b = complement(*b);
            }
        }
        other => {
            for channel in other.iter_mut() {
                *channel = complement(*channel);
            }
        }
    }
}

/// Integer channels use floor division, matching `v / 2` on integers.
fn half<C: Channel>(value: C) -> C {
    let halved = value.to_f32() / 2.0;
    C::from_f32(if C::INTEGRAL { halved.floor() } else { halved })
}

fn complement<C: Channel>(value: C) -> C {
    C::from_f32((C::MAX - value.to_f32()).clamp(0.0, C::MAX))
}
