use image::{Rgba, RgbaImage};

/// Minimal software rasterizer over an RGBA buffer.
///
/// Shapes are drawn with pixel-centre coverage and a one-pixel
/// anti-aliased edge, blended over an opaque background.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn from_image(img: RgbaImage) -> Self {
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.img.put_pixel(x, y, color);
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: f64) {
        if coverage <= 0.0 {
            return;
        }
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let coverage = coverage.min(1.0);
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        for i in 0..3 {
            let s = color.0[i] as f64;
            let d = dst.0[i] as f64;
            dst.0[i] = (s * coverage + d * (1.0 - coverage)).round() as u8;
        }
        dst.0[3] = 255;
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
        let x0 = (cx - radius - 1.0).floor() as i64;
        let x1 = (cx + radius + 1.0).ceil() as i64;
        let y0 = (cy - radius - 1.0).floor() as i64;
        let y1 = (cy + radius + 1.0).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    pub fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Rgba<u8>,
    ) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len2 = dx * dx + dy * dy;
        let radius = width / 2.0;

        let bx0 = (x0.min(x1) - radius - 1.0).floor() as i64;
        let bx1 = (x0.max(x1) + radius + 1.0).ceil() as i64;
        let by0 = (y0.min(y1) - radius - 1.0).floor() as i64;
        let by1 = (y0.max(y1) + radius + 1.0).ceil() as i64;

        for y in by0..=by1 {
            for x in bx0..=bx1 {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                let t = if len2 > 0.0 {
                    (((px - x0) * dx + (py - y0) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let nx = x0 + t * dx;
                let ny = y0 + t * dy;
                let dist = ((px - nx).powi(2) + (py - ny).powi(2)).sqrt();
                let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Rgba<u8>) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], width, color);
        }
    }

    pub fn fill_triangle(
        &mut self,
        a: (f64, f64),
        b: (f64, f64),
        c: (f64, f64),
        color: Rgba<u8>,
    ) {
        let edge = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };
        let area = edge(a, b, c);
        if area.abs() < 1e-12 {
            return;
        }

        let xs = [a.0, b.0, c.0];
        let ys = [a.1, b.1, c.1];
        let bx0 = xs.iter().cloned().fold(f64::INFINITY, f64::min).floor() as i64;
        let bx1 = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max).ceil() as i64;
        let by0 = ys.iter().cloned().fold(f64::INFINITY, f64::min).floor() as i64;
        let by1 = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max).ceil() as i64;

        for y in by0..=by1 {
            for x in bx0..=bx1 {
                let p = (x as f64 + 0.5, y as f64 + 0.5);
                let w0 = edge(a, b, p) / area;
                let w1 = edge(b, c, p) / area;
                let w2 = edge(c, a, p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    /// Straight arrow with a triangular head at `to`.
    pub fn draw_arrow(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba<u8>) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 1e-9 {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let head_len = (4.0 * width).min(len);
        let head_width = 3.0 * width;
        let base = (to.0 - ux * head_len, to.1 - uy * head_len);
        let left = (base.0 - uy * head_width / 2.0, base.1 + ux * head_width / 2.0);
        let right = (base.0 + uy * head_width / 2.0, base.1 - ux * head_width / 2.0);

        self.stroke_line(from, base, width, color);
        self.fill_triangle(to, left, right, color);
    }
}
