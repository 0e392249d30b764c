//! Drawing primitives the game needs from a display backend.

use std::io;

/// Linear RGB, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Channels scaled to bytes, rounded and clamped.
    pub fn to_bytes(self) -> (u8, u8, u8) {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (byte(self.r), byte(self.g), byte(self.b))
    }
}

/// 8-bit RGBA, used for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// A display surface.
///
/// Rectangles are unit quads centered on the origin, scaled by
/// `(scale_x, scale_y)` and then moved by `(offset_x, offset_y)`, in
/// normalized device coordinates (`[-1, 1]` on both axes, y up). Text is
/// positioned in screen pixels from the top-left corner of an 800×600 surface.
pub trait Renderer {
    /// Start a frame. Backends that need setup per frame hook in here.
    fn begin_frame(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    fn draw_rect(&mut self, offset_x: f64, offset_y: f64, scale_x: f64, scale_y: f64, color: Rgb);

    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Rgba);

    /// Present the finished frame.
    fn end_frame(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes() {
        assert_eq!(Rgb::new(0.0, 1.0, 0.5).to_bytes(), (0, 255, 128));
        assert_eq!(Rgb::gray(0.15).to_bytes(), (38, 38, 38));
    }

    #[test]
    fn test_to_bytes_clamps() {
        assert_eq!(Rgb::new(-1.0, 2.0, 1.0).to_bytes(), (0, 255, 255));
    }
}
