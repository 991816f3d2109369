#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn area(&self) -> f32 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.w).min(other.x + other.w);
        let y1 = (self.y + self.h).min(other.y + other.h);
        let w = x1 - x0;
        let h = y1 - y0;
        if w < 0.0 || h < 0.0 {
            None
        } else {
            Some(Rect { x: x0, y: y0, w, h })
        }
    }

    /// Fraction (0..=1) of this rect's area that lies inside `viewport`.
    ///
    /// Zero-area rects count as fully visible while they touch the viewport,
    /// the way intersection observers treat empty targets.
    pub fn visible_fraction(&self, viewport: &Rect) -> f32 {
        match self.intersect(viewport) {
            None => 0.0,
            Some(inter) => {
                let area = self.area();
                if area <= f32::EPSILON {
                    1.0
                } else {
                    (inter.area() / area).clamp(0.0, 1.0)
                }
            }
        }
    }

    pub fn translate(mut self, dx: f32, dy: f32) -> Rect {
        self.x += dx;
        self.y += dy;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn is_scaled(&self) -> bool {
        (self.scale_x - 1.0).abs() > f32::EPSILON || (self.scale_y - 1.0).abs() > f32::EPSILON
    }

    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
            scale_x: self.scale_x * other.scale_x,
            scale_y: self.scale_y * other.scale_y,
        }
    }
}
