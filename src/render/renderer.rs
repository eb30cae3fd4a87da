//! Frame rendering.
//!
//! A frame runs in four fixed passes over the scene store's scratch
//! buffers: build the view and projection matrices, transform every vertex
//! into camera space and screen space, compute one packed paint key per
//! object (visibility plus quantized depth), then sort the keys and draw
//! back-to-front. Triangles and lines that straddle the near/far slab are
//! clipped in camera space and re-projected on the way out.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::camera::{CameraState, Projection};
use crate::color::unpack;
use crate::math::{Mat4, Point3};
use crate::render::Surface;
use crate::scene::{LineStyle, PointShape, PointStyle, SceneObject, SceneStore};

/// Paint-key value for objects that are not drawn this frame; the
/// ascending sort pushes them past every live key.
const REJECTED: u32 = 0xFFFF_FFFF;

pub(crate) fn render_frame(
    store: &mut SceneStore,
    camera: &CameraState,
    projection: &Projection,
    surface: &mut dyn Surface,
    width: u32,
    height: u32,
) {
    let view = view_matrix(camera);
    if !view.is_finite() {
        log::debug!("view matrix is not finite, skipping frame");
        return;
    }
    let screen = projection_matrix(projection, width, height);

    for i in 0..store.vertices().len() {
        let cam = view.transform(store.vertices()[i]);
        store.camera_space[i] = cam;
        store.projected[i] = screen.transform(cam);
    }

    let near = projection.near();
    let far = projection.far();
    for index in 0..store.objects().len() {
        let object = store.objects()[index];
        store.paint_keys[index] = paint_key(object, &store.camera_space, near, far, index);
    }
    store.paint_keys.sort_unstable();

    for slot in 0..store.paint_keys.len() {
        let key = store.paint_keys[slot];
        if key == REJECTED {
            break;
        }
        let index = (key & 0xFFFF) as usize;
        draw_object(store, index, &screen, projection, surface, height);
    }
}

/// Inverse of the camera pose: translation first, then the unwound
/// yaw/pitch/roll.
fn view_matrix(camera: &CameraState) -> Mat4 {
    let mut view = Mat4::identity();
    view.translate(-camera.x(), -camera.y(), -camera.z());
    view.rotate_y(-camera.yaw() * TAU);
    view.rotate_x(-camera.pitch() * FRAC_PI_2);
    view.rotate_z(-camera.roll() * TAU);
    view
}

/// Pinhole projection followed by the viewport mapping: Y flips into the
/// screen-down convention and the origin moves to the canvas center.
fn projection_matrix(projection: &Projection, width: u32, height: u32) -> Mat4 {
    let h = height as f64;
    let mut screen = Mat4::identity();
    screen.perspective(projection.distance());
    screen.scale(h / 2.0, -h / 2.0, 1.0);
    screen.translate(width as f64 / 2.0, h / 2.0, 0.0);
    screen
}

/// Visibility test and depth centroid, in one pass.
fn centroid_depth(object: SceneObject, cam: &[Point3], near: f64, far: f64) -> Option<f64> {
    match object {
        SceneObject::Point { vertex, .. } => {
            let z = cam[vertex as usize].z;
            (z > far && z < near).then_some(z)
        }
        SceneObject::Sphere { center, .. } => {
            let z = cam[center as usize].z;
            (z > far && z < near).then_some(z)
        }
        SceneObject::Line { a, b, .. } => {
            let z1 = cam[a as usize].z;
            let z2 = cam[b as usize].z;
            if (z1 >= near && z2 >= near) || (z1 <= far && z2 <= far) {
                None
            } else {
                Some((z1 + z2) / 2.0)
            }
        }
        SceneObject::Triangle { a, b, c, .. } => {
            let v1 = cam[a as usize];
            let v2 = cam[b as usize];
            let v3 = cam[c as usize];
            // visible iff the view ray to v1 runs against the outward normal
            if v1.dot((v2 - v1).cross(v3 - v1)) >= 0.0 {
                return None;
            }
            if v1.z >= near && v2.z >= near && v3.z >= near {
                return None;
            }
            if v1.z <= far && v2.z <= far && v3.z <= far {
                return None;
            }
            Some((v1.z + v2.z + v3.z) / 3.0)
        }
    }
}

fn paint_key(object: SceneObject, cam: &[Point3], near: f64, far: f64, index: usize) -> u32 {
    match centroid_depth(object, cam, near, far) {
        Some(z) => {
            let z = if z.is_finite() { z } else { 0.0 };
            let normalized = (z.clamp(far, near) - far) / (near - far);
            let quantized = (normalized * 65535.0).round().clamp(0.0, 65535.0) as u32;
            (quantized << 16) | index as u32
        }
        None => REJECTED,
    }
}

fn draw_object(
    store: &SceneStore,
    index: usize,
    screen: &Mat4,
    projection: &Projection,
    surface: &mut dyn Surface,
    height: u32,
) {
    match store.objects()[index] {
        SceneObject::Point { vertex, style } => draw_point(
            surface,
            &store.point_styles()[style as usize],
            store.projected[vertex as usize],
        ),
        SceneObject::Line { a, b, style } => {
            draw_line(store, surface, screen, projection, a, b, style)
        }
        SceneObject::Sphere {
            center,
            radius,
            fill,
            stroke,
        } => draw_sphere(store, surface, projection, height, center, radius, fill, stroke),
        SceneObject::Triangle { a, b, c, fill, edges } => {
            draw_triangle(store, surface, screen, projection, a, b, c, fill, edges)
        }
    }
}

fn draw_point(surface: &mut dyn Surface, style: &PointStyle, at: Point3) {
    let k = style.size / 2.0;
    let (x, y) = (at.x, at.y);
    surface.begin_path();
    match style.shape {
        PointShape::Circle => surface.arc(x, y, k, 0.0, TAU),
        PointShape::Square => surface.rect(x - k, y - k, style.size, style.size),
        PointShape::Diamond => {
            polygon(surface, &[(x, y - k), (x + k, y), (x, y + k), (x - k, y)])
        }
        PointShape::TriangleUp => {
            polygon(surface, &[(x, y - k), (x + k, y + k), (x - k, y + k)])
        }
        PointShape::TriangleDown => {
            polygon(surface, &[(x, y + k), (x + k, y - k), (x - k, y - k)])
        }
        PointShape::TriangleLeft => {
            polygon(surface, &[(x - k, y), (x + k, y - k), (x + k, y + k)])
        }
        PointShape::TriangleRight => {
            polygon(surface, &[(x + k, y), (x - k, y - k), (x - k, y + k)])
        }
        PointShape::Plus => {
            surface.move_to(x - k, y);
            surface.line_to(x + k, y);
            surface.move_to(x, y - k);
            surface.line_to(x, y + k);
        }
        PointShape::Cross => {
            surface.move_to(x - k, y - k);
            surface.line_to(x + k, y + k);
            surface.move_to(x - k, y + k);
            surface.line_to(x + k, y - k);
        }
    }
    if style.shape.fillable() {
        if let Some(fill) = style.fill {
            surface.set_fill_color(unpack(fill));
            surface.fill();
        }
    }
    if style.stroke > 0.0 {
        if let Some(ink) = style.ink {
            surface.set_stroke_color(unpack(ink));
            surface.set_line_width(style.stroke);
            surface.stroke();
        }
    }
}

fn polygon(surface: &mut dyn Surface, points: &[(f64, f64)]) {
    let (x, y) = points[0];
    surface.move_to(x, y);
    for &(x, y) in &points[1..] {
        surface.line_to(x, y);
    }
    surface.close_path();
}

#[allow(clippy::too_many_arguments)]
fn draw_sphere(
    store: &SceneStore,
    surface: &mut dyn Surface,
    projection: &Projection,
    height: u32,
    center: u16,
    radius: u16,
    fill: Option<u16>,
    stroke: Option<u16>,
) {
    // Pinhole projection of a world-space length at the sphere's depth,
    // pre-scaled to half the viewport's vertical extent.
    let d = projection.distance();
    let z = store.camera_space[center as usize].z;
    let world = store.radii()[radius as usize];
    let projected_radius = world * (d * height as f64 / 2.0) / (d - z);
    if !projected_radius.is_finite() || projected_radius <= 0.0 {
        return;
    }

    let at = store.projected[center as usize];
    surface.begin_path();
    surface.arc(at.x, at.y, projected_radius, 0.0, TAU);
    if let Some(fill) = fill {
        surface.set_fill_color(unpack(fill));
        surface.fill();
    }
    if let Some(style) = stroke {
        let style = &store.line_styles()[style as usize];
        surface.set_stroke_color(unpack(style.color));
        surface.set_line_width(style.width);
        surface.stroke();
    }
}

fn draw_line(
    store: &SceneStore,
    surface: &mut dyn Surface,
    screen: &Mat4,
    projection: &Projection,
    a: u16,
    b: u16,
    style: u16,
) {
    let near = projection.near();
    let far = projection.far();
    let inside = |z: f64| z > far && z < near;

    let za = store.camera_space[a as usize].z;
    let zb = store.camera_space[b as usize].z;
    let (from, to) = if inside(za) && inside(zb) {
        (store.projected[a as usize], store.projected[b as usize])
    } else {
        let mut p1 = store.camera_space[a as usize];
        let mut p2 = store.camera_space[b as usize];
        if p1.z < p2.z {
            std::mem::swap(&mut p1, &mut p2);
        }
        let t1 = if p1.z > near {
            (near - p1.z) / (p2.z - p1.z)
        } else {
            0.0
        };
        let t2 = if p2.z < far {
            (far - p1.z) / (p2.z - p1.z)
        } else {
            1.0
        };
        (
            screen.transform(p1.lerp(p2, t1)),
            screen.transform(p1.lerp(p2, t2)),
        )
    };

    let style = &store.line_styles()[style as usize];
    surface.set_stroke_color(unpack(style.color));
    surface.set_line_width(style.width);
    surface.begin_path();
    surface.move_to(from.x, from.y);
    surface.line_to(to.x, to.y);
    surface.stroke();
}

/// Point on the segment from `anchor` to `moving` where Z crosses `plane`.
fn slide_to(anchor: Point3, moving: Point3, plane: f64) -> Point3 {
    let t = (plane - anchor.z) / (moving.z - anchor.z);
    Point3::new(
        anchor.x + (moving.x - anchor.x) * t,
        anchor.y + (moving.y - anchor.y) * t,
        plane,
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_triangle(
    store: &SceneStore,
    surface: &mut dyn Surface,
    screen: &Mat4,
    projection: &Projection,
    a: u16,
    b: u16,
    c: u16,
    fill: u16,
    edges: [u8; 3],
) {
    let near = projection.near();
    let far = projection.far();
    let inside = |z: f64| z > far && z < near;

    let cam = [
        store.camera_space[a as usize],
        store.camera_space[b as usize],
        store.camera_space[c as usize],
    ];
    if inside(cam[0].z) && inside(cam[1].z) && inside(cam[2].z) {
        emit_triangle(
            surface,
            store.line_styles(),
            store.projected[a as usize],
            store.projected[b as usize],
            store.projected[c as usize],
            fill,
            edges,
        );
        return;
    }

    // A single vertex past a plane splits the triangle in two; with both
    // planes violated that way, four subtriangles tile the clipped region.
    let mut k_max = 1u32;
    if cam.iter().filter(|v| v.z <= far).count() == 1 {
        k_max *= 2;
    }
    if cam.iter().filter(|v| v.z >= near).count() == 1 {
        k_max *= 2;
    }

    for k in 1..=k_max {
        let mut v = cam;
        // descending Z: v[0] nearest the camera, v[2] deepest
        if v[0].z < v[1].z {
            v.swap(0, 1);
        }
        if v[1].z < v[2].z {
            v.swap(1, 2);
        }
        if v[0].z < v[1].z {
            v.swap(0, 1);
        }

        if v[0].z >= near && v[1].z >= near {
            v[0] = slide_to(v[2], v[0], near);
            v[1] = slide_to(v[2], v[1], near);
        } else if v[0].z >= near {
            let on_12 = slide_to(v[1], v[0], near);
            if k <= k_max / 2 {
                v[0] = on_12;
            } else {
                let on_13 = slide_to(v[2], v[0], near);
                v[0] = on_12;
                v[1] = on_13;
            }
        }

        if v[1].z <= far && v[2].z <= far {
            v[1] = slide_to(v[0], v[1], far);
            v[2] = slide_to(v[0], v[2], far);
        } else if v[2].z <= far {
            let on_13 = slide_to(v[0], v[2], far);
            if k % 2 == 1 {
                v[2] = on_13;
            } else {
                let on_23 = slide_to(v[1], v[2], far);
                v[2] = on_13;
                v[0] = on_23;
            }
        }

        emit_triangle(
            surface,
            store.line_styles(),
            screen.transform(v[0]),
            screen.transform(v[1]),
            screen.transform(v[2]),
            fill,
            edges,
        );
    }
}

/// Fills a screen-space triangle, then strokes any selected edges. Edge
/// selectors stay attached to their slots (v1-v2, v2-v3, v3-v1) even for
/// clipped subtriangles, whose vertices are in depth order rather than the
/// original order.
fn emit_triangle(
    surface: &mut dyn Surface,
    line_styles: &[LineStyle],
    p1: Point3,
    p2: Point3,
    p3: Point3,
    fill: u16,
    edges: [u8; 3],
) {
    surface.begin_path();
    surface.move_to(p1.x, p1.y);
    surface.line_to(p2.x, p2.y);
    surface.line_to(p3.x, p3.y);
    surface.close_path();
    surface.set_fill_color(unpack(fill));
    surface.fill();

    let corners = [(p1, p2), (p2, p3), (p3, p1)];
    for (selector, (from, to)) in edges.into_iter().zip(corners) {
        if selector == 0 {
            continue;
        }
        let style = &line_styles[(selector - 1) as usize];
        surface.set_stroke_color(unpack(style.color));
        surface.set_line_width(style.width);
        surface.begin_path();
        surface.move_to(from.x, from.y);
        surface.line_to(to.x, to.y);
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::render::{DrawCommand, RecordingSurface};

    fn store_with(
        vertices: Vec<Point3>,
        radii: Vec<f64>,
        objects: Vec<SceneObject>,
        point_styles: Vec<PointStyle>,
        line_styles: Vec<LineStyle>,
    ) -> SceneStore {
        SceneStore::new(vertices, radii, objects, point_styles, line_styles)
    }

    fn circle_style(fill: u16) -> PointStyle {
        PointStyle {
            shape: PointShape::Circle,
            size: 3.0,
            stroke: 0.0,
            fill: Some(fill),
            ink: None,
        }
    }

    fn count(surface: &RecordingSurface, wanted: fn(&DrawCommand) -> bool) -> usize {
        surface.commands().iter().filter(|c| wanted(c)).count()
    }

    fn render(store: &mut SceneStore, projection: &Projection) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_frame(
            store,
            &CameraState::default(),
            projection,
            &mut surface,
            100,
            100,
        );
        surface
    }

    #[test]
    fn view_matrix_of_the_default_camera_is_identity() {
        let view = view_matrix(&CameraState::default());
        let p = Point3::new(1.0, 2.0, -3.0);
        assert_eq!(view.transform(p), p);
    }

    #[test]
    fn quarter_turn_yaw_looks_down_negative_x() {
        let mut camera = CameraState::default();
        camera.set_orientation(0.25, 0.0, 0.0);
        let view = view_matrix(&camera);
        let out = view.transform(Point3::new(-1.0, 0.0, 0.0));
        assert!(out.x.abs() < 1e-12 && (out.z + 1.0).abs() < 1e-12, "{out:?}");
    }

    #[test]
    fn projection_maps_the_axis_to_the_canvas_center() {
        let screen = projection_matrix(&Projection::default(), 200, 100);
        let out = screen.transform(Point3::new(0.0, 0.0, -10.0));
        assert!((out.x - 100.0).abs() < 1e-9, "{out:?}");
        assert!((out.y - 50.0).abs() < 1e-9, "{out:?}");
    }

    #[test]
    fn projection_flips_y_into_screen_down() {
        let screen = projection_matrix(&Projection::default(), 100, 100);
        let up = screen.transform(Point3::new(0.0, 1.0, 0.0));
        assert_eq!(up.y, 0.0); // +Y in camera space lands above center
    }

    #[test]
    fn paint_key_quantizes_the_slab() {
        let cam = [
            Point3::new(0.0, 0.0, -100.0),
            Point3::new(0.0, 0.0, -50.0),
            Point3::new(0.0, 0.0, -0.001),
        ];
        let key_at = |vertex: u16, index: usize| {
            paint_key(
                SceneObject::Point { vertex, style: 0 },
                &cam,
                0.0,
                -100.0,
                index,
            )
        };
        // on the far plane the point is culled outright
        assert_eq!(key_at(0, 3), REJECTED);
        assert_eq!(key_at(1, 4) >> 16, 32768);
        assert_eq!(key_at(1, 4) & 0xFFFF, 4);
        assert_eq!(key_at(2, 5) >> 16, 65534);
    }

    #[test]
    fn front_faces_survive_and_back_faces_are_dropped() {
        let vertices = vec![
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(1.0, 0.0, -5.0),
            Point3::new(0.0, 1.0, -5.0),
        ];
        let mut kept = store_with(
            vertices.clone(),
            vec![],
            vec![SceneObject::Triangle {
                a: 0,
                b: 1,
                c: 2,
                fill: 992,
                edges: [0, 0, 0],
            }],
            vec![],
            vec![],
        );
        let surface = render(&mut kept, &Projection::default());
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Fill)), 1);

        let mut dropped = store_with(
            vertices,
            vec![],
            vec![SceneObject::Triangle {
                a: 0,
                b: 2,
                c: 1,
                fill: 992,
                edges: [0, 0, 0],
            }],
            vec![],
            vec![],
        );
        let surface = render(&mut dropped, &Projection::default());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn painter_sort_draws_far_objects_first() {
        let mut store = store_with(
            vec![Point3::new(0.0, 0.0, -5.0), Point3::new(0.0, 0.0, -50.0)],
            vec![],
            vec![
                SceneObject::Point { vertex: 0, style: 0 },
                SceneObject::Point { vertex: 1, style: 1 },
            ],
            vec![circle_style(31), circle_style(992)],
            vec![],
        );
        let surface = render(&mut store, &Projection::default());
        let fills: Vec<Rgb> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillColor(rgb) => Some(*rgb),
                _ => None,
            })
            .collect();
        // the deep green point paints before the near blue one
        assert_eq!(fills, vec![unpack(992), unpack(31)]);
    }

    #[test]
    fn triangles_behind_the_camera_are_culled() {
        let mut store = store_with(
            vec![
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            vec![],
            vec![SceneObject::Triangle {
                a: 0,
                b: 1,
                c: 2,
                fill: 992,
                edges: [0, 0, 0],
            }],
            vec![],
            vec![],
        );
        let surface = render(&mut store, &Projection::default());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn straddling_the_near_plane_yields_two_subtriangles() {
        let mut store = store_with(
            vec![
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(0.0, 1.0, 0.5),
            ],
            vec![],
            vec![SceneObject::Triangle {
                a: 0,
                b: 1,
                c: 2,
                fill: 992,
                edges: [0, 0, 0],
            }],
            vec![],
            vec![],
        );
        let projection = Projection::new(0.25, 0.0, -10.0);
        let surface = render(&mut store, &projection);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Fill)), 2);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::ClosePath)), 2);
        // every emitted vertex sits at or below the near plane after
        // clipping, so no screen coordinate can come from a positive-Z
        // projection blow-up
        for command in surface.commands() {
            if let DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } = command {
                assert!(x.is_finite() && y.is_finite());
            }
        }
    }

    #[test]
    fn near_clipped_lines_are_clamped_to_the_plane() {
        let mut store = store_with(
            vec![Point3::new(0.0, 1.0, 5.0), Point3::new(0.0, 1.0, -5.0)],
            vec![],
            vec![SceneObject::Line { a: 0, b: 1, style: 0 }],
            vec![],
            vec![LineStyle { width: 2.0, color: 992 }],
        );
        let surface = render(&mut store, &Projection::default());

        // the in-front endpoint interpolates to (0, 1, 0), which projects to
        // the top middle of a 100x100 canvas
        let moves: Vec<(f64, f64)> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(moves, vec![(50.0, 0.0)]);

        let d = Projection::default().distance();
        let expected_y = 50.0 - 50.0 / (1.0 + 5.0 / d);
        match surface.commands().iter().find(|c| matches!(c, DrawCommand::LineTo { .. })) {
            Some(DrawCommand::LineTo { x, y }) => {
                assert!((x - 50.0).abs() < 1e-9);
                assert!((y - expected_y).abs() < 1e-9);
            }
            other => panic!("expected a LineTo, got {other:?}"),
        }
    }

    #[test]
    fn spheres_project_their_world_radius() {
        let mut store = store_with(
            vec![Point3::new(0.0, 0.0, -10.0)],
            vec![2.0],
            vec![SceneObject::Sphere {
                center: 0,
                radius: 0,
                fill: Some(31),
                stroke: None,
            }],
            vec![],
            vec![],
        );
        let projection = Projection::default();
        let surface = render(&mut store, &projection);

        let d = projection.distance();
        let expected = 2.0 * (d * 50.0) / (d + 10.0);
        match surface.commands().iter().find(|c| matches!(c, DrawCommand::Arc { .. })) {
            Some(DrawCommand::Arc { cx, cy, radius, .. }) => {
                assert!((cx - 50.0).abs() < 1e-9 && (cy - 50.0).abs() < 1e-9);
                assert!((radius - expected).abs() < 1e-9);
            }
            other => panic!("expected an Arc, got {other:?}"),
        }
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Fill)), 1);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Stroke)), 0);
    }

    #[test]
    fn plus_points_stroke_two_open_segments() {
        let mut store = store_with(
            vec![Point3::new(0.0, 0.0, -10.0)],
            vec![],
            vec![SceneObject::Point { vertex: 0, style: 0 }],
            vec![PointStyle {
                shape: PointShape::Plus,
                size: 4.0,
                stroke: 1.0,
                fill: None,
                ink: Some(0),
            }],
            vec![],
        );
        let surface = render(&mut store, &Projection::default());
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::MoveTo { .. })), 2);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::LineTo { .. })), 2);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::ClosePath)), 0);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Fill)), 0);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Stroke)), 1);
    }

    #[test]
    fn clipped_subtriangles_keep_their_edge_selectors() {
        let mut store = store_with(
            vec![
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(0.0, 1.0, 0.5),
            ],
            vec![],
            vec![SceneObject::Triangle {
                a: 0,
                b: 1,
                c: 2,
                fill: 992,
                edges: [1, 0, 0],
            }],
            vec![],
            vec![LineStyle { width: 1.5, color: 31 }],
        );
        let projection = Projection::new(0.25, 0.0, -10.0);
        let surface = render(&mut store, &projection);
        // both subtriangles stroke their first edge slot
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Stroke)), 2);
        assert_eq!(
            count(&surface, |c| matches!(c, DrawCommand::StrokeColor(rgb) if *rgb == unpack(31))),
            2
        );
    }

    #[test]
    fn unused_sentinel_object_would_not_leak() {
        // a scene object index packs into the low half of its key
        let cam = [Point3::new(0.0, 0.0, -50.0)];
        let key = paint_key(
            SceneObject::Point { vertex: 0, style: 0 },
            &cam,
            0.0,
            -100.0,
            41,
        );
        assert_eq!(key & 0xFFFF, 41);
        assert_ne!(key, REJECTED);
    }
}
