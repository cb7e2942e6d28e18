//! Colours with fractional opacity and the compositing operators that combine them
//!
//! Blending works on premultiplied `[r, g, b, a]` channels in `0.0..=1.0`.

/// Premultiplied RGBA sample
pub type Premultiplied = [f32; 4];

/// Flat fill colour with 8-bit channels and fractional opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub alpha: f32,
}

impl Color {
    /// Create a colour, clamping opacity into range
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Black at the given opacity
    pub const fn black(alpha: f32) -> Self {
        Self::rgba(0, 0, 0, alpha)
    }

    /// White at the given opacity
    pub const fn white(alpha: f32) -> Self {
        Self::rgba(255, 255, 255, alpha)
    }

    /// Premultiplied channels of this colour
    pub fn premultiplied(self) -> Premultiplied {
        [
            channel_to_unit(self.r) * self.alpha,
            channel_to_unit(self.g) * self.alpha,
            channel_to_unit(self.b) * self.alpha,
            self.alpha,
        ]
    }
}

/// How a new draw combines with pixels already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Standard alpha blending over existing content
    #[default]
    SourceOver,
    /// Draw only where the destination already has coverage, keeping its opacity
    SourceAtop,
}

impl CompositeMode {
    /// Combine a source sample over a destination sample
    pub fn blend(self, dst: Premultiplied, src: Premultiplied) -> Premultiplied {
        let [sr, sg, sb, sa] = src;
        let [dr, dg, db, da] = dst;
        match self {
            Self::SourceOver => {
                let keep = 1.0 - sa;
                [
                    dr.mul_add(keep, sr),
                    dg.mul_add(keep, sg),
                    db.mul_add(keep, sb),
                    da.mul_add(keep, sa),
                ]
            }
            Self::SourceAtop => {
                let keep = 1.0 - sa;
                [
                    sr.mul_add(da, dr * keep),
                    sg.mul_add(da, dg * keep),
                    sb.mul_add(da, db * keep),
                    da,
                ]
            }
        }
    }
}

/// Convert an 8-bit straight RGBA pixel to premultiplied channels
pub fn premultiply(pixel: [u8; 4]) -> Premultiplied {
    let [r, g, b, a] = pixel;
    let alpha = channel_to_unit(a);
    [
        channel_to_unit(r) * alpha,
        channel_to_unit(g) * alpha,
        channel_to_unit(b) * alpha,
        alpha,
    ]
}

/// Convert premultiplied channels back to an 8-bit straight RGBA pixel
///
/// Fully transparent samples collapse to `[0, 0, 0, 0]`.
pub fn unpremultiply(sample: Premultiplied) -> [u8; 4] {
    let [r, g, b, a] = sample;
    let alpha = a.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return [0, 0, 0, 0];
    }
    [
        unit_to_channel(r / alpha),
        unit_to_channel(g / alpha),
        unit_to_channel(b / alpha),
        unit_to_channel(alpha),
    ]
}

fn channel_to_unit(value: u8) -> f32 {
    f32::from(value) / 255.0
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
