use crate::math::Point3;
use crate::scene::{LineStyle, PointShape, PointStyle, SceneObject, SceneStore};

/// Builds the built-in preview scene: an 11×11 grid of points on the XZ
/// plane at 5-unit spacing with the center node left out, plus a vertical
/// line marking the Y axis.
pub fn default_scene() -> SceneStore {
    let mut vertices = Vec::with_capacity(122);
    for i in 0..11 {
        for j in 0..11 {
            if i == 5 && j == 5 {
                continue;
            }
            vertices.push(Point3::new(
                (i as f64 - 5.0) * 5.0,
                0.0,
                (j as f64 - 5.0) * 5.0,
            ));
        }
    }
    let axis_top = vertices.len() as u16;
    vertices.push(Point3::new(0.0, 25.0, 0.0));
    vertices.push(Point3::new(0.0, -25.0, 0.0));

    let mut objects: Vec<SceneObject> = (0..axis_top)
        .map(|vertex| SceneObject::Point { vertex, style: 0 })
        .collect();
    objects.push(SceneObject::Line {
        a: axis_top,
        b: axis_top + 1,
        style: 0,
    });

    let point_styles = vec![PointStyle {
        shape: PointShape::Circle,
        size: 3.0,
        stroke: 0.0,
        fill: Some(31),
        ink: None,
    }];
    let line_styles = vec![LineStyle {
        width: 2.0,
        color: 992,
    }];

    SceneStore::new(vertices, Vec::new(), objects, point_styles, line_styles)
}
