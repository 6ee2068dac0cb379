//! Math utilities and types
//!
//! Menu layout works in screen space, so only the 2D types are exposed.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Convert a location given as a fraction of the screen into pixels
pub fn to_screen(normalized: Vec2, screen: Vec2) -> Vec2 {
    normalized.component_mul(&screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_screen_scales_each_axis() {
        let screen = Vec2::new(1280.0, 720.0);
        let p = to_screen(Vec2::new(0.5, 0.25), screen);
        assert_relative_eq!(p.x, 640.0);
        assert_relative_eq!(p.y, 180.0);
    }
}
