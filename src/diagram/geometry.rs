//! Points, rectangles and cubic Bézier curves in virtual pixel space.
//!
//! The diagram is authored in a 1220×700 space with the origin at the top
//! left and y growing downwards.

/// Width of the virtual canvas.
pub const CANVAS_WIDTH: f64 = 1220.0;
/// Height of the virtual canvas.
pub const CANVAS_HEIGHT: f64 = 700.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    pub fn distance(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle, `(x, y)` being the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A cubic Bézier curve, `M p0 C p1, p2, p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Point at parameter `t`, clamped to `[0, 1]` (de Casteljau).
    pub fn eval(&self, t: f64) -> Point {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = self.p2.lerp(self.p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// `segments + 1` evenly spaced points along the curve.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.eval(i as f64 / segments as f64))
            .collect()
    }

    /// Approximate arc length from a polyline of `segments` pieces.
    pub fn approx_length(&self, segments: usize) -> f64 {
        self.sample(segments)
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Number of polyline pieces needed for pieces roughly `step` pixels long.
    ///
    /// Clamped to `4..=64` so short curves stay smooth and long ones cheap.
    pub fn segments_for(&self, step: f64) -> usize {
        if !step.is_finite() || step <= 0.0 {
            return MAX_SEGMENTS;
        }
        let pieces = (self.approx_length(LENGTH_ESTIMATE_SEGMENTS) / step).ceil();
        if pieces.is_finite() {
            (pieces as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
        } else {
            MAX_SEGMENTS
        }
    }
}

const LENGTH_ESTIMATE_SEGMENTS: usize = 8;
const MIN_SEGMENTS: usize = 4;
const MAX_SEGMENTS: usize = 64;
