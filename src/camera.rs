//! Camera pose and projection parameters.
//!
//! Angles are stored as normalized turns rather than radians: `yaw` and
//! `roll` live in `[0, 1)` where 1.0 would be a full revolution, and
//! `pitch` lives in `[-1, 1]` where ±1.0 is ±90°. The pose applies
//! Roll-Z, then Pitch-X, then Yaw-Y, then the translation; the renderer
//! builds the inverse of that chain as its view matrix.
//!
//! All setters validate their arguments and panic on violations. Invalid
//! camera parameters indicate a bug in the embedding host, not bad user
//! data, so they are treated as programmer errors rather than soft
//! failures.

/// Camera position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    x: f64,
    y: f64,
    z: f64,
    yaw: f64,
    pitch: f64,
    roll: f64,
}

impl CameraState {
    /// Creates a camera pose, panicking on out-of-range arguments.
    pub fn new(x: f64, y: f64, z: f64, yaw: f64, pitch: f64, roll: f64) -> Self {
        let mut camera = Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        };
        camera.set_position(x, y, z);
        camera.set_orientation(yaw, pitch, roll);
        camera
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "camera position must be finite, got ({x}, {y}, {z})"
        );
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn set_orientation(&mut self, yaw: f64, pitch: f64, roll: f64) {
        assert!(
            (0.0..1.0).contains(&yaw),
            "yaw must be in [0, 1) turns, got {yaw}"
        );
        assert!(
            (-1.0..=1.0).contains(&pitch),
            "pitch must be in [-1, 1], got {pitch}"
        );
        assert!(
            (0.0..1.0).contains(&roll),
            "roll must be in [0, 1) turns, got {roll}"
        );
        self.yaw = yaw;
        self.pitch = pitch;
        self.roll = roll;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Heading around the world Y axis, in turns.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Elevation around the camera X axis, normalized so ±1.0 is ±90°.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Bank around the camera Z axis, in turns.
    pub fn roll(&self) -> f64 {
        self.roll
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

/// Field of view and near/far slab for the pinhole projection.
///
/// `fov` is a normalized half-turn: 1.0 would be a 180° full angle, so the
/// valid range excludes both endpoints. `near` and `far` bound the
/// camera-space Z slab in which primitives are retained; `far < near`, and
/// both are typically at or below zero. `near` must additionally stay below
/// `1/tan(fov·π/2)`, the depth of the projection point, so the pinhole
/// matrix keeps a finite `1/d` entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov: f64,
    near: f64,
    far: f64,
}

impl Projection {
    /// Creates a projection, panicking when the invariants do not hold.
    pub fn new(fov: f64, near: f64, far: f64) -> Self {
        let mut projection = Self {
            fov: 0.25,
            near: 0.0,
            far: -100.0,
        };
        projection.set(fov, near, far);
        projection
    }

    pub fn set(&mut self, fov: f64, near: f64, far: f64) {
        assert!(
            fov.is_finite() && fov > 0.0 && fov < 1.0,
            "fov must be in (0, 1) half-turns, got {fov}"
        );
        assert!(
            near.is_finite() && far.is_finite(),
            "near and far must be finite, got near={near} far={far}"
        );
        let eye = 1.0 / (fov * std::f64::consts::FRAC_PI_2).tan();
        assert!(
            far < near && near < eye,
            "required: far < near < {eye}, got near={near} far={far}"
        );
        self.fov = fov;
        self.near = near;
        self.far = far;
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    /// Depth of the projection point: `1/tan(fov·π/2)`.
    pub fn distance(&self) -> f64 {
        1.0 / (self.fov * std::f64::consts::FRAC_PI_2).tan()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 0.25,
            near: 0.0,
            far: -100.0,
        }
    }
}
