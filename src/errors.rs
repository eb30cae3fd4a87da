/// Rejection reasons for a scene file.
///
/// The `Display` text of each variant is the message reported through
/// `Engine::last_error` when a load fails. Messages are capitalized and
/// carry no trailing punctuation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("Not a valid JSON file")]
    NotJson,

    #[error("Scene file must be a JSON object")]
    NotAnObject,

    #[error("Missing vertex array")]
    MissingVertices,

    #[error("Vertex table must be an array of numbers")]
    BadVertexTable,

    #[error("Vertex table may not be empty")]
    EmptyVertexTable,

    #[error("Vertex table length must be a multiple of three")]
    RaggedVertexTable,

    #[error("Too many vertices")]
    TooManyVertices,

    #[error("Vertex coordinates must be finite")]
    NonFiniteVertex,

    #[error("Missing scene array")]
    MissingObjects,

    #[error("Scene table must be an array of integers")]
    BadObjectTable,

    #[error("Scene table may not be empty")]
    EmptyObjectTable,

    #[error("Scene table length must be a multiple of five")]
    RaggedObjectTable,

    #[error("Too many scene objects")]
    TooManyObjects,

    #[error("Scene values must fit in 16 bits")]
    ObjectValueRange,

    #[error("Radius table must be an array of numbers")]
    BadRadiusTable,

    #[error("Too many radii")]
    TooManyRadii,

    #[error("Radii must be positive and finite")]
    BadRadius,

    #[error("Point style table must be an array of objects")]
    BadPointStyleTable,

    #[error("Too many point styles")]
    TooManyPointStyles,

    #[error("Unknown point shape")]
    UnknownPointShape,

    #[error("Point size must be positive")]
    BadPointSize,

    #[error("Point stroke width may not be negative")]
    BadPointStroke,

    #[error("Point style may not have fill for unfilled shapes")]
    UnexpectedPointFill,

    #[error("Point style requires fill for filled shapes")]
    MissingPointFill,

    #[error("Point fill must be a 15-bit color or transparent")]
    BadPointFill,

    #[error("Point style may not have ink for unstroked shapes")]
    UnexpectedPointInk,

    #[error("Point style requires ink when stroked")]
    MissingPointInk,

    #[error("Point ink must be a 15-bit color")]
    BadPointInk,

    #[error("Line style table must be an array of objects")]
    BadLineStyleTable,

    #[error("Too many line styles")]
    TooManyLineStyles,

    #[error("Line width must be positive")]
    BadLineWidth,

    #[error("Line color must be a 15-bit color")]
    BadLineColor,

    #[error("Scene object references a missing vertex")]
    DanglingVertex,

    #[error("Scene object references a missing radius")]
    DanglingRadius,

    #[error("Scene object references a missing point style")]
    DanglingPointStyle,

    #[error("Scene object references a missing line style")]
    DanglingLineStyle,

    #[error("Sphere fill must be a 15-bit color or transparent")]
    BadSphereFill,

    #[error("Spheres may not be fully transparent")]
    TransparentSphere,

    #[error("Triangle fill must be a 15-bit color")]
    BadTriangleFill,

    #[error("Triangle edge styles must fit in 15 bits")]
    BadTriangleEdges,
}
