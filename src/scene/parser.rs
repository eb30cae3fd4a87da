//! Scene file validation.
//!
//! A scene file is a single JSON object with `vertex` and `scene` arrays
//! plus optional `radius`, `pstyle`, and `lstyle` tables. Parsing is
//! all-or-nothing: the first violation is reported and nothing is built, so
//! a failed load can never disturb a previously loaded scene. Unknown
//! top-level keys are ignored.

use serde_json::Value;

use crate::errors::SceneError;
use crate::math::Point3;
use crate::scene::{LineStyle, PointShape, PointStyle, SceneObject, SceneStore, NONE};

/// Entity tables are indexed by 16-bit words, so no table may exceed this.
const MAX_ENTRIES: usize = u16::MAX as usize;

/// Colors occupy the low 15 bits of their word.
const COLOR_MAX: u64 = 0x7FFF;

/// Validates a scene file and builds its store.
pub fn parse_scene(text: &str) -> Result<SceneStore, SceneError> {
    let root: Value = serde_json::from_str(text).map_err(|_| SceneError::NotJson)?;
    let root = root.as_object().ok_or(SceneError::NotAnObject)?;

    let vertices = parse_vertices(root.get("vertex"))?;
    let radii = parse_radii(root.get("radius"))?;
    let point_styles = parse_point_styles(root.get("pstyle"))?;
    let line_styles = parse_line_styles(root.get("lstyle"))?;
    let objects = parse_objects(
        root.get("scene"),
        vertices.len(),
        radii.len(),
        point_styles.len(),
        line_styles.len(),
    )?;

    Ok(SceneStore::new(
        vertices,
        radii,
        objects,
        point_styles,
        line_styles,
    ))
}

fn parse_vertices(value: Option<&Value>) -> Result<Vec<Point3>, SceneError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SceneError::BadVertexTable),
        None => return Err(SceneError::MissingVertices),
    };
    if items.is_empty() {
        return Err(SceneError::EmptyVertexTable);
    }
    if items.len() % 3 != 0 {
        return Err(SceneError::RaggedVertexTable);
    }
    if items.len() / 3 > MAX_ENTRIES {
        return Err(SceneError::TooManyVertices);
    }

    let mut coords = Vec::with_capacity(items.len());
    for item in items {
        let n = item.as_f64().ok_or(SceneError::BadVertexTable)?;
        if !n.is_finite() {
            return Err(SceneError::NonFiniteVertex);
        }
        coords.push(n);
    }
    Ok(coords
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect())
}

fn parse_radii(value: Option<&Value>) -> Result<Vec<f64>, SceneError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SceneError::BadRadiusTable),
        None => return Ok(Vec::new()),
    };
    if items.len() > MAX_ENTRIES {
        return Err(SceneError::TooManyRadii);
    }

    let mut radii = Vec::with_capacity(items.len());
    for item in items {
        let r = item.as_f64().ok_or(SceneError::BadRadiusTable)?;
        if !r.is_finite() || r <= 0.0 {
            return Err(SceneError::BadRadius);
        }
        radii.push(r);
    }
    Ok(radii)
}

fn parse_point_styles(value: Option<&Value>) -> Result<Vec<PointStyle>, SceneError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SceneError::BadPointStyleTable),
        None => return Ok(Vec::new()),
    };
    if items.len() > MAX_ENTRIES {
        return Err(SceneError::TooManyPointStyles);
    }

    let mut styles = Vec::with_capacity(items.len());
    for item in items {
        let entry = item.as_object().ok_or(SceneError::BadPointStyleTable)?;

        let shape = entry
            .get("shape")
            .and_then(Value::as_str)
            .and_then(PointShape::from_code)
            .ok_or(SceneError::UnknownPointShape)?;

        let size = entry
            .get("size")
            .and_then(Value::as_f64)
            .ok_or(SceneError::BadPointSize)?;
        if !size.is_finite() || size <= 0.0 {
            return Err(SceneError::BadPointSize);
        }

        let stroke = entry
            .get("stroke")
            .and_then(Value::as_f64)
            .ok_or(SceneError::BadPointStroke)?;
        if !stroke.is_finite() || stroke < 0.0 {
            return Err(SceneError::BadPointStroke);
        }

        let fill = match (shape.fillable(), entry.get("fill")) {
            (true, Some(value)) => {
                let word = value.as_u64().ok_or(SceneError::BadPointFill)?;
                if word == NONE as u64 {
                    None
                } else if word <= COLOR_MAX {
                    Some(word as u16)
                } else {
                    return Err(SceneError::BadPointFill);
                }
            }
            (true, None) => return Err(SceneError::MissingPointFill),
            (false, Some(_)) => return Err(SceneError::UnexpectedPointFill),
            (false, None) => None,
        };

        let ink = match (stroke > 0.0, entry.get("ink")) {
            (true, Some(value)) => {
                let word = value.as_u64().ok_or(SceneError::BadPointInk)?;
                if word > COLOR_MAX {
                    return Err(SceneError::BadPointInk);
                }
                Some(word as u16)
            }
            (true, None) => return Err(SceneError::MissingPointInk),
            (false, Some(_)) => return Err(SceneError::UnexpectedPointInk),
            (false, None) => None,
        };

        styles.push(PointStyle {
            shape,
            size,
            stroke,
            fill,
            ink,
        });
    }
    Ok(styles)
}

fn parse_line_styles(value: Option<&Value>) -> Result<Vec<LineStyle>, SceneError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SceneError::BadLineStyleTable),
        None => return Ok(Vec::new()),
    };
    if items.len() > MAX_ENTRIES {
        return Err(SceneError::TooManyLineStyles);
    }

    let mut styles = Vec::with_capacity(items.len());
    for item in items {
        let entry = item.as_object().ok_or(SceneError::BadLineStyleTable)?;

        let width = entry
            .get("width")
            .and_then(Value::as_f64)
            .ok_or(SceneError::BadLineWidth)?;
        if !width.is_finite() || width <= 0.0 {
            return Err(SceneError::BadLineWidth);
        }

        let color = entry
            .get("color")
            .and_then(Value::as_u64)
            .ok_or(SceneError::BadLineColor)?;
        if color > COLOR_MAX {
            return Err(SceneError::BadLineColor);
        }

        styles.push(LineStyle {
            width,
            color: color as u16,
        });
    }
    Ok(styles)
}

fn parse_objects(
    value: Option<&Value>,
    vertex_count: usize,
    radius_count: usize,
    point_style_count: usize,
    line_style_count: usize,
) -> Result<Vec<SceneObject>, SceneError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SceneError::BadObjectTable),
        None => return Err(SceneError::MissingObjects),
    };
    if items.is_empty() {
        return Err(SceneError::EmptyObjectTable);
    }
    if items.len() % 5 != 0 {
        return Err(SceneError::RaggedObjectTable);
    }
    if items.len() / 5 > MAX_ENTRIES {
        return Err(SceneError::TooManyObjects);
    }

    let mut words = Vec::with_capacity(items.len());
    for item in items {
        words.push(parse_word(item)?);
    }

    let vertex = |index: u16| {
        if (index as usize) < vertex_count {
            Ok(index)
        } else {
            Err(SceneError::DanglingVertex)
        }
    };
    let line_style = |index: u16| {
        if (index as usize) < line_style_count {
            Ok(())
        } else {
            Err(SceneError::DanglingLineStyle)
        }
    };

    let mut objects = Vec::with_capacity(words.len() / 5);
    for q in words.chunks_exact(5) {
        let quintuple = [q[0], q[1], q[2], q[3], q[4]];
        let object = SceneObject::from_quintuple(quintuple);
        match object {
            SceneObject::Point { vertex: v, style } => {
                vertex(v)?;
                if style as usize >= point_style_count {
                    return Err(SceneError::DanglingPointStyle);
                }
            }
            SceneObject::Line { a, b, style } => {
                vertex(a)?;
                vertex(b)?;
                line_style(style)?;
            }
            SceneObject::Sphere {
                center,
                radius,
                fill,
                stroke,
            } => {
                vertex(center)?;
                if radius as usize >= radius_count {
                    return Err(SceneError::DanglingRadius);
                }
                if fill.is_none() && stroke.is_none() {
                    return Err(SceneError::TransparentSphere);
                }
                if let Some(fill) = fill {
                    if fill as u64 > COLOR_MAX {
                        return Err(SceneError::BadSphereFill);
                    }
                }
                if let Some(stroke) = stroke {
                    line_style(stroke)?;
                }
            }
            SceneObject::Triangle { a, b, c, edges, .. } => {
                vertex(a)?;
                vertex(b)?;
                vertex(c)?;
                if quintuple[3] as u64 > COLOR_MAX {
                    return Err(SceneError::BadTriangleFill);
                }
                if quintuple[4] as u64 > COLOR_MAX {
                    return Err(SceneError::BadTriangleEdges);
                }
                for selector in edges {
                    if selector > 0 {
                        line_style((selector - 1) as u16)?;
                    }
                }
            }
        }
        objects.push(object);
    }
    Ok(objects)
}

fn parse_word(item: &Value) -> Result<u16, SceneError> {
    let number = match item {
        Value::Number(n) => n,
        _ => return Err(SceneError::BadObjectTable),
    };
    if let Some(u) = number.as_u64() {
        if u > NONE as u64 {
            return Err(SceneError::ObjectValueRange);
        }
        Ok(u as u16)
    } else if number.as_i64().is_some() {
        // a negative integer
        Err(SceneError::ObjectValueRange)
    } else {
        Err(SceneError::BadObjectTable)
    }
}
