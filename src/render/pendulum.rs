use crate::render::canvas::Canvas;
use crate::render::viewport::Viewport;
use image::Rgba;

/// World-space geometry of the drawn pendulum.
const PIVOT: (f64, f64) = (0.0, 0.5);
const BAR_LENGTH: f64 = 1.5;
const BAR_WIDTH: f64 = 0.05;
const BOB_RADIUS: f64 = 0.2;

/// Draws the swinging pendulum: a bar hinged above centre with a round bob.
pub struct PendulumView {
    viewport: Viewport,
    color: Rgba<u8>,
}

impl PendulumView {
    pub fn new(viewport: Viewport, color: Rgba<u8>) -> Self {
        Self { viewport, color }
    }

    /// Bob centre in world coordinates for angle `sigma` from vertical.
    pub fn bob_center(sigma: f64) -> (f64, f64) {
        (
            PIVOT.0 + BAR_LENGTH * sigma.sin(),
            PIVOT.1 - BAR_LENGTH * sigma.cos(),
        )
    }

    pub fn draw(&self, canvas: &mut Canvas, sigma: f64) {
        let scale = self.viewport.scale();
        let tip = Self::bob_center(sigma);

        let pivot_px = self.viewport.to_px(PIVOT.0, PIVOT.1);
        let tip_px = self.viewport.to_px(tip.0, tip.1);

        canvas.stroke_line(pivot_px, tip_px, BAR_WIDTH * scale, self.color);
        canvas.fill_circle(tip_px.0, tip_px.1, BOB_RADIUS * scale, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::{parse_hex, BACKGROUND, PENDULUM_PINK};
    use crate::render::viewport::WORLD_HALF;

    #[test]
    fn test_bob_hangs_straight_down_at_zero_angle() {
        let (x, y) = PendulumView::bob_center(0.0);
        assert!(x.abs() < 1e-12);
        assert!((y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bob_swings_right_for_positive_angle() {
        let (x, y) = PendulumView::bob_center(std::f64::consts::FRAC_PI_2);
        assert!((x - 1.5).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_draw_paints_bob_pixels() {
        let size = 100;
        let viewport = Viewport::square(WORLD_HALF, size);
        let color = parse_hex(PENDULUM_PINK).unwrap();
        let view = PendulumView::new(viewport, color);

        let mut canvas = Canvas::new(size, size, BACKGROUND);
        view.draw(&mut canvas, 0.0);

        // Bob centre (0, -1) maps to pixel (50, 83.33)
        assert_eq!(canvas.get(50, 83), color);
        // Top corners stay background
        assert_eq!(canvas.get(0, 0), BACKGROUND);
        assert_eq!(canvas.get(99, 0), BACKGROUND);
    }
}
