//! Log-backed stand-ins for a real font and texture renderer

use menu_engine::prelude::*;

/// Approximate glyph width as a fraction of the font size
const GLYPH_ASPECT: f32 = 0.55;

/// Font that writes every printed line to the trace log
#[derive(Debug, Default)]
pub struct TerminalFont {
    lines: u64,
}

impl Font for TerminalFont {
    fn measure(&self, text: &str, size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * size * GLYPH_ASPECT, size)
    }

    fn print_line(&mut self, text: &str, align: TextAlign, position: Vec2, size: f32, color: Rgba) {
        self.lines += 1;
        log::trace!(
            "text #{} {:?} at ({:.0}, {:.0}) size {:.1} alpha {}: {}",
            self.lines,
            align,
            position.x,
            position.y,
            size,
            color.alpha(),
            text
        );
    }
}

/// Texture that logs its draws instead of sampling pixels
#[derive(Debug)]
pub struct TerminalTexture {
    id: TextureId,
    region: Option<DrawRegion>,
}

impl TerminalTexture {
    /// Texture standing in for `id`
    pub fn new(id: TextureId) -> Self {
        Self { id, region: None }
    }
}

impl Texture for TerminalTexture {
    fn set_draw_region(&mut self, region: DrawRegion) {
        self.region = Some(region);
    }

    fn draw(&mut self, color: Rgba) {
        match self.region {
            Some(region) => log::trace!(
                "texture {:?} at ({:.0}, {:.0}) {:.0}x{:.0} alpha {}",
                self.id,
                region.location.x,
                region.location.y,
                region.dimension.x,
                region.dimension.y,
                color.alpha()
            ),
            None => log::trace!("texture {:?} without region, alpha {}", self.id, color.alpha()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_scales_with_length() {
        let font = TerminalFont::default();
        let short = font.measure("ab", 10.0);
        let long = font.measure("abcd", 10.0);
        assert!((long.x - 2.0 * short.x).abs() < 1e-4);
        assert_eq!(short.y, 10.0);
    }
}
