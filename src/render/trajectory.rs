use crate::domain::model::{Solution, State};
use crate::render::canvas::Canvas;
use crate::render::color::{AXIS, BACKGROUND};
use crate::render::viewport::Viewport;
use image::{Rgba, RgbaImage};

const MARKER_RADIUS: f64 = 0.1;
const PATH_WIDTH: f64 = 0.02;
const ARROW_WIDTH: f64 = 0.02;
const ARROW_LENGTH: f64 = 0.3;
const ARROW_CORNER: (f64, f64) = (-1.3, -1.3);

/// Draws the phase-space trajectory `(σ, σ̇)` with a moving state marker.
///
/// The whole path and the axis arrows are static across frames, so they
/// are rendered once into a background image and only the marker is
/// drawn per frame.
pub struct TrajectoryView {
    viewport: Viewport,
    color: Rgba<u8>,
}

impl TrajectoryView {
    pub fn new(viewport: Viewport, color: Rgba<u8>) -> Self {
        Self { viewport, color }
    }

    pub fn background(&self, solution: &Solution) -> RgbaImage {
        let size = self.viewport.size();
        let mut canvas = Canvas::new(size, size, BACKGROUND);
        self.draw_axes(&mut canvas);
        self.draw_path(&mut canvas, solution);
        canvas.into_image()
    }

    /// Small arrows in the lower-left corner marking the σ and σ̇ directions.
    pub fn draw_axes(&self, canvas: &mut Canvas) {
        let scale = self.viewport.scale();
        let width = ARROW_WIDTH * scale;
        let (cx, cy) = ARROW_CORNER;

        let x_from = self.viewport.to_px(cx - 0.01, cy);
        let x_to = self.viewport.to_px(cx - 0.01 + ARROW_LENGTH, cy);
        canvas.draw_arrow(x_from, x_to, width, AXIS);

        let y_from = self.viewport.to_px(cx, cy - 0.01);
        let y_to = self.viewport.to_px(cx, cy - 0.01 + ARROW_LENGTH);
        canvas.draw_arrow(y_from, y_to, width, AXIS);
    }

    pub fn draw_path(&self, canvas: &mut Canvas, solution: &Solution) {
        let points: Vec<(f64, f64)> = solution
            .states
            .iter()
            .map(|s| self.viewport.to_px(s.sigma, s.dsigma))
            .collect();
        canvas.stroke_polyline(&points, PATH_WIDTH * self.viewport.scale(), self.color);
    }

    pub fn draw_marker(&self, canvas: &mut Canvas, state: State) {
        let (px, py) = self.viewport.to_px(state.sigma, state.dsigma);
        canvas.fill_circle(px, py, MARKER_RADIUS * self.viewport.scale(), self.color);
    }
}
