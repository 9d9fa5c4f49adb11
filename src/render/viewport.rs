/// Half-width of the world square every scene draws in, matching the
/// `(-1.5, 1.5)` plotting bounds of the reference scenes.
pub const WORLD_HALF: f64 = 1.5;

/// Linear map between a data domain and a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let d = self.domain_max - self.domain_min;
        if d.abs() < 1e-12 {
            return self.range_min;
        }
        let t = (value - self.domain_min) / d;
        self.range_min + t * (self.range_max - self.range_min)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let r = self.range_max - self.range_min;
        if r.abs() < 1e-12 {
            return self.domain_min;
        }
        let t = (px - self.range_min) / r;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

/// Square, equal-aspect view of world coordinates with pixel y pointing down.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    x: LinearScale,
    y: LinearScale,
    size: u32,
    half: f64,
}

impl Viewport {
    pub fn square(half: f64, size: u32) -> Self {
        Self {
            x: LinearScale::new(-half, half, 0.0, size as f64),
            y: LinearScale::new(-half, half, size as f64, 0.0),
            size,
            half,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.size as f64 / (2.0 * self.half.max(f64::MIN_POSITIVE))
    }

    pub fn to_px(&self, wx: f64, wy: f64) -> (f64, f64) {
        (self.x.map(wx), self.y.map(wy))
    }

    pub fn to_world(&self, px: f64, py: f64) -> (f64, f64) {
        (self.x.invert(px), self.y.invert(py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_maps_and_inverts() {
        let scale = LinearScale::new(-1.5, 1.5, 0.0, 300.0);
        assert!((scale.map(0.0) - 150.0).abs() < 1e-12);
        assert!((scale.map(-1.5)).abs() < 1e-12);
        assert!((scale.invert(300.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_viewport_flips_y() {
        let viewport = Viewport::square(1.5, 300);
        let (px, py) = viewport.to_px(0.0, 1.5);
        assert!((px - 150.0).abs() < 1e-12);
        assert!(py.abs() < 1e-12); // top of the image

        let (px, py) = viewport.to_px(0.0, -1.5);
        assert!((px - 150.0).abs() < 1e-12);
        assert!((py - 300.0).abs() < 1e-12); // bottom of the image
    }

    #[test]
    fn test_viewport_roundtrip() {
        let viewport = Viewport::square(1.5, 480);
        let (px, py) = viewport.to_px(0.4, -0.7);
        let (wx, wy) = viewport.to_world(px, py);
        assert!((wx - 0.4).abs() < 1e-12);
        assert!((wy + 0.7).abs() < 1e-12);
    }
}
