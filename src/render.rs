mod surface;
pub use surface::Surface;

mod recording;
pub use recording::{DrawCommand, RecordingSurface};

pub(crate) mod renderer;
