//! The engine context.
//!
//! An [`Engine`] owns everything the previewer core needs between frames:
//! the loaded scene with its scratch buffers, the camera pose, the
//! projection parameters, and the background color. Hosts create one
//! engine, poke camera state as the user drives it, and call
//! [`render`](Engine::render) with a drawing surface whenever they want a
//! frame.
//!
//! ```
//! use delilah_engine::render::RecordingSurface;
//! use delilah_engine::Engine;
//!
//! let mut engine = Engine::new(None);
//! engine.load_default_scene();
//!
//! let mut surface = RecordingSurface::new();
//! engine.render(&mut surface, 640, 480);
//! assert!(!surface.commands().is_empty());
//! ```

use crate::camera::{CameraState, Projection};
use crate::color::Rgb;
use crate::config::EngineConfig;
use crate::render::{renderer, Surface};
use crate::scene::{default_scene, parse_scene, SceneStore};

pub struct Engine {
    background: Rgb,
    camera: CameraState,
    projection: Projection,
    scene: Option<SceneStore>,
    last_error: String,
    /// Bumped on every successful load, so hosts can invalidate cheaply.
    scene_epoch: u64,
}

impl Engine {
    /// Creates an engine with no scene loaded.
    ///
    /// If `config` is `None`, [`EngineConfig::default`] is used.
    pub fn new(config: Option<EngineConfig>) -> Self {
        let resolved_config = config.unwrap_or_default();

        Self {
            background: resolved_config.background,
            camera: resolved_config.camera,
            projection: resolved_config.projection,
            scene: None,
            last_error: String::new(),
            scene_epoch: 0,
        }
    }

    /// Loads a scene from file text, replacing the current scene only when
    /// the whole file validates.
    ///
    /// Returns `false` on rejection; [`last_error`](Engine::last_error)
    /// then describes the first violation and the previous scene stays
    /// loaded.
    pub fn load_scene(&mut self, text: &str) -> bool {
        match parse_scene(text) {
            Ok(store) => {
                self.scene = Some(store);
                self.scene_epoch += 1;
                true
            }
            Err(error) => {
                log::error!("scene load rejected: {error}");
                self.last_error = error.to_string();
                false
            }
        }
    }

    /// Replaces the current scene with the built-in preview scene.
    pub fn load_default_scene(&mut self) {
        self.scene = Some(default_scene());
        self.scene_epoch += 1;
    }

    /// Message for the most recently rejected scene load, or the empty
    /// string when no load has been rejected yet.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Renders one frame: clears to the background color, then paints the
    /// scene if one is loaded.
    ///
    /// The surface's fill, stroke, line width, and path state are
    /// clobbered. Panics when the target is smaller than 2×2 pixels.
    pub fn render(&mut self, surface: &mut dyn Surface, width: u32, height: u32) {
        assert!(
            width >= 2 && height >= 2,
            "render target must be at least 2x2, got {width}x{height}"
        );

        surface.set_fill_color(self.background);
        surface.fill_rect(0.0, 0.0, width as f64, height as f64);

        if let Some(store) = self.scene.as_mut() {
            renderer::render_frame(store, &self.camera, &self.projection, surface, width, height);
        }
    }

    pub fn background_color(&self) -> Rgb {
        self.background
    }

    pub fn set_background_color(&mut self, r: u8, g: u8, b: u8) {
        self.background = Rgb::new(r, g, b);
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// Replaces the camera pose. Construction of [`CameraState`] already
    /// validates, so any value that exists is acceptable here.
    pub fn set_camera(&mut self, camera: CameraState) {
        self.camera = camera;
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Updates the projection, panicking on invalid parameters.
    pub fn set_projection(&mut self, fov: f64, near: f64, far: f64) {
        self.projection.set(fov, near, far);
    }

    /// The currently loaded scene, if any.
    pub fn scene(&self) -> Option<&SceneStore> {
        self.scene.as_ref()
    }

    pub fn scene_epoch(&self) -> u64 {
        self.scene_epoch
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(None)
    }
}
