mod object;
pub use object::{LineStyle, PointShape, PointStyle, SceneObject, NONE};

mod store;
pub use store::SceneStore;

mod parser;
pub use parser::parse_scene;

mod writer;
pub use writer::scene_to_json;

mod default_scene;
pub use default_scene::default_scene;
