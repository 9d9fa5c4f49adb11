use crate::core::oscillator::Escapement;
use crate::render::canvas::Canvas;
use crate::render::color::diverging;
use crate::render::viewport::Viewport;
use image::RgbaImage;

/// Renders the escapement acceleration field as a diverging heatmap.
///
/// The field only depends on the phase-space point, so the heatmap is
/// computed once per animation and frames differ only by the trajectory
/// marker drawn on top.
pub struct SurfaceView {
    viewport: Viewport,
    model: Escapement,
}

impl SurfaceView {
    pub fn new(viewport: Viewport, model: Escapement) -> Self {
        Self { viewport, model }
    }

    /// Acceleration normalised to [-1, 1] for color mapping.
    fn normalized_field(&self, sigma: f64, dsigma: f64) -> f64 {
        if self.model.kick.abs() < f64::EPSILON {
            return 0.0;
        }
        self.model.kick_accel(sigma, dsigma) / self.model.kick
    }

    pub fn field_image(&self) -> RgbaImage {
        let size = self.viewport.size();
        let mut canvas = Canvas::new(size, size, diverging(0.0));

        for py in 0..size {
            for px in 0..size {
                let (sigma, dsigma) = self
                    .viewport
                    .to_world(px as f64 + 0.5, py as f64 + 0.5);
                let value = self.normalized_field(sigma, dsigma);
                canvas.set(px, py, diverging(value));
            }
        }

        canvas.into_image()
    }
}
