//! Scene serialization back to the file format.
//!
//! The output of [`scene_to_json`] re-parses to a store equal to the input,
//! which is what hosts that edit a scene in memory rely on when saving.

use serde_json::{json, Map, Value};

use crate::scene::{SceneStore, NONE};

/// Serializes a store to scene-file JSON.
pub fn scene_to_json(store: &SceneStore) -> String {
    let mut root = Map::new();

    let vertex: Vec<Value> = store
        .vertices()
        .iter()
        .flat_map(|p| [json!(p.x), json!(p.y), json!(p.z)])
        .collect();
    root.insert("vertex".into(), Value::Array(vertex));

    let scene: Vec<Value> = store
        .objects()
        .iter()
        .flat_map(|o| o.to_quintuple().map(|word| json!(word)))
        .collect();
    root.insert("scene".into(), Value::Array(scene));

    if !store.radii().is_empty() {
        root.insert("radius".into(), json!(store.radii()));
    }

    if !store.point_styles().is_empty() {
        let styles: Vec<Value> = store
            .point_styles()
            .iter()
            .map(|style| {
                let mut entry = Map::new();
                entry.insert("shape".into(), json!(style.shape.code()));
                entry.insert("size".into(), json!(style.size));
                entry.insert("stroke".into(), json!(style.stroke));
                if style.shape.fillable() {
                    entry.insert("fill".into(), json!(style.fill.unwrap_or(NONE)));
                }
                if let Some(ink) = style.ink {
                    entry.insert("ink".into(), json!(ink));
                }
                Value::Object(entry)
            })
            .collect();
        root.insert("pstyle".into(), Value::Array(styles));
    }

    if !store.line_styles().is_empty() {
        let styles: Vec<Value> = store
            .line_styles()
            .iter()
            .map(|style| json!({ "width": style.width, "color": style.color }))
            .collect();
        root.insert("lstyle".into(), Value::Array(styles));
    }

    Value::Object(root).to_string()
}
