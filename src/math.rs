//! Math types for the view/projection pipeline.
//!
//! This module intentionally stays small and deterministic: one point type
//! and a row-major 4×4 homogeneous matrix with exactly the operations the
//! renderer composes per frame. Points are row vectors, so transforms read
//! top-to-bottom in application order. No SIMD, no unsafe.

/// A point (or direction) in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Linear interpolation from `self` toward `to`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }
}

impl std::ops::Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Row-major 4×4 homogeneous matrix.
///
/// Every builder method post-multiplies `self` by the named elementary
/// matrix, so a sequence of calls applies each operation after what is
/// already there:
///
/// ```
/// use delilah_engine::math::{Mat4, Point3};
///
/// let mut m = Mat4::identity();
/// m.translate(1.0, 0.0, 0.0);
/// m.scale(2.0, 2.0, 2.0);
/// assert_eq!(m.transform(Point3::ZERO), Point3::new(2.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [[f64; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    fn post_multiply(&mut self, e: [[f64; 4]; 4]) {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.m[r][0] * e[0][c]
                    + self.m[r][1] * e[1][c]
                    + self.m[r][2] * e[2][c]
                    + self.m[r][3] * e[3][c];
            }
        }
        self.m = out;
    }

    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) {
        self.post_multiply([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ]);
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.post_multiply([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }

    pub fn rotate_x(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        self.post_multiply([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }

    pub fn rotate_y(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        self.post_multiply([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }

    pub fn rotate_z(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        self.post_multiply([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }

    /// Pinhole projection with the eye at `Z = d` and the screen at `Z = 0`.
    ///
    /// The only non-identity entry is `m[2][3] = -1/d`; the image is not
    /// flipped.
    pub fn perspective(&mut self, d: f64) {
        self.post_multiply([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, -1.0 / d],
            [0.0, 0.0, 0.0, 1.0],
        ]);
    }

    /// Transforms a point as a row vector with implicit `W = 1` and divides
    /// through by the resulting `W`.
    ///
    /// A zero `W` yields the origin, and any non-finite component is coerced
    /// to `0.0` so that downstream arithmetic never sees NaN or infinity.
    pub fn transform(&self, p: Point3) -> Point3 {
        let m = &self.m;
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];
        if w == 0.0 {
            return Point3::ZERO;
        }
        let scrub = |v: f64| if v.is_finite() { v } else { 0.0 };
        Point3::new(
            scrub((p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0]) / w),
            scrub((p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1]) / w),
            scrub((p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2]) / w),
        )
    }

    /// Returns `true` when all 16 cells are finite. The renderer uses this
    /// as a pre-frame gate.
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point3, b: Point3) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.z - b.z).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn translations_compose_additively() {
        let mut a = Mat4::identity();
        a.translate(1.0, 2.0, 3.0);
        a.translate(4.0, 5.0, 6.0);

        let mut b = Mat4::identity();
        b.translate(5.0, 7.0, 9.0);

        assert_eq!(a, b);
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Point3::new(1.5, -2.5, 3.25);
        assert_eq!(Mat4::identity().transform(p), p);
    }

    #[test]
    fn rotate_y_quarter_turn_sends_x_to_negative_z() {
        let mut m = Mat4::identity();
        m.rotate_y(std::f64::consts::FRAC_PI_2);
        assert_close(m.transform(Point3::new(1.0, 0.0, 0.0)), Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn rotate_x_quarter_turn_sends_y_to_z() {
        let mut m = Mat4::identity();
        m.rotate_x(std::f64::consts::FRAC_PI_2);
        assert_close(m.transform(Point3::new(0.0, 1.0, 0.0)), Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn perspective_divides_by_depth() {
        let mut m = Mat4::identity();
        m.perspective(2.0);
        // z = -2 gives w = 1 - (-2)/2 = 2
        assert_close(
            m.transform(Point3::new(4.0, 2.0, -2.0)),
            Point3::new(2.0, 1.0, -1.0),
        );
    }

    #[test]
    fn zero_w_collapses_to_origin() {
        let mut m = Mat4::identity();
        m.perspective(1.0);
        // z = d puts the point at the eye: w = 0
        assert_eq!(m.transform(Point3::new(3.0, 4.0, 1.0)), Point3::ZERO);
    }

    #[test]
    fn non_finite_components_are_scrubbed() {
        let mut m = Mat4::identity();
        m.scale(f64::MAX, 1.0, 1.0);
        m.scale(f64::MAX, 1.0, 1.0);
        let out = m.transform(Point3::new(1.0, 1.0, 1.0));
        assert_eq!(out.x, 0.0);
        assert_eq!(out.y, 1.0);
    }

    #[test]
    fn finiteness_gate() {
        let mut m = Mat4::identity();
        assert!(m.is_finite());
        m.translate(f64::NAN, 0.0, 0.0);
        assert!(!m.is_finite());
    }

    #[test]
    fn cross_and_dot_follow_the_right_hand_rule() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(x.dot(y), 0.0);
    }
}
