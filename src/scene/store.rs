use crate::math::Point3;
use crate::scene::{LineStyle, PointStyle, SceneObject};

/// Owns a validated scene: the entity tables plus the per-frame scratch
/// buffers the renderer works in.
///
/// The tables are immutable once the store exists; a new scene file
/// replaces the whole store. The scratch buffers are sized to the scene at
/// construction and reused on every frame, so rendering never allocates.
pub struct SceneStore {
    vertices: Vec<Point3>,
    radii: Vec<f64>,
    objects: Vec<SceneObject>,
    point_styles: Vec<PointStyle>,
    line_styles: Vec<LineStyle>,

    /// Vertices after the view transform, one per vertex table entry.
    pub(crate) camera_space: Vec<Point3>,
    /// Vertices after the projection transform, one per vertex table entry.
    pub(crate) projected: Vec<Point3>,
    /// One packed paint key per scene object, re-sorted every frame.
    pub(crate) paint_keys: Vec<u32>,
}

impl SceneStore {
    /// Builds a store from validated tables and allocates the scratch
    /// buffers.
    pub fn new(
        vertices: Vec<Point3>,
        radii: Vec<f64>,
        objects: Vec<SceneObject>,
        point_styles: Vec<PointStyle>,
        line_styles: Vec<LineStyle>,
    ) -> Self {
        debug_assert!(!vertices.is_empty() && vertices.len() <= u16::MAX as usize);
        debug_assert!(!objects.is_empty() && objects.len() <= u16::MAX as usize);

        let camera_space = vec![Point3::ZERO; vertices.len()];
        let projected = vec![Point3::ZERO; vertices.len()];
        let paint_keys = vec![0; objects.len()];

        Self {
            vertices,
            radii,
            objects,
            point_styles,
            line_styles,
            camera_space,
            projected,
            paint_keys,
        }
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn point_styles(&self) -> &[PointStyle] {
        &self.point_styles
    }

    pub fn line_styles(&self) -> &[LineStyle] {
        &self.line_styles
    }
}

// Scratch buffer contents are frame-transient, so equality is defined over
// the entity tables only.
impl PartialEq for SceneStore {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.radii == other.radii
            && self.objects == other.objects
            && self.point_styles == other.point_styles
            && self.line_styles == other.line_styles
    }
}

impl std::fmt::Debug for SceneStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneStore")
            .field("vertices", &self.vertices.len())
            .field("radii", &self.radii.len())
            .field("objects", &self.objects.len())
            .field("point_styles", &self.point_styles.len())
            .field("line_styles", &self.line_styles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NONE;

    #[test]
    fn scratch_buffers_match_table_sizes() {
        let store = SceneStore::new(
            vec![Point3::ZERO, Point3::new(1.0, 0.0, 0.0)],
            vec![],
            vec![SceneObject::from_quintuple([0, 1, NONE, 0, 0])],
            vec![],
            vec![LineStyle { width: 1.0, color: 0 }],
        );
        assert_eq!(store.camera_space.len(), 2);
        assert_eq!(store.projected.len(), 2);
        assert_eq!(store.paint_keys.len(), 1);
    }
}
