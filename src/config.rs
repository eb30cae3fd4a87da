use crate::camera::{CameraState, Projection};
use crate::color::Rgb;

/// Engine startup configuration: the state a fresh [`Engine`](crate::Engine)
/// begins with before the host adjusts anything.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Color the surface is cleared to before each frame.
    pub background: Rgb,
    /// Initial camera pose.
    pub camera: CameraState,
    /// Initial field of view and near/far slab.
    pub projection: Projection,
}

impl Default for EngineConfig {
    fn default() -> Self {
        // Pulled back along +Z and raised a little, so the built-in preview
        // scene sits fully inside the default near/far slab.
        let mut camera = CameraState::default();
        camera.set_position(0.0, 20.0, 60.0);

        Self {
            background: Rgb::new(170, 170, 170),
            camera,
            projection: Projection::default(),
        }
    }
}
