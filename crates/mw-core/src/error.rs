use crate::coord::AxialCoord;

/// Alias for `Result<T, MwError>`.
pub type MwResult<T> = Result<T, MwError>;

/// Errors that can occur while loading or validating world data.
///
/// Rendering and layout never fail; these only surface at the edges where a
/// host parses catalogs.
#[derive(Debug, thiserror::Error)]
pub enum MwError {
    /// No world with the requested id exists in the catalog.
    #[error("unknown world: \"{0}\"")]
    UnknownWorld(String),

    /// The catalog holds no worlds at all.
    #[error("world catalog is empty")]
    EmptyCatalog,

    /// Two locations in one world share an id.
    #[error("duplicate location id \"{id}\" in world \"{world}\"")]
    DuplicateLocationId {
        /// The world being validated.
        world: String,
        /// The repeated location id.
        id: String,
    },

    /// Two locations in one world sit on the same hex.
    #[error("locations \"{first}\" and \"{second}\" both occupy {coord}")]
    OccupiedCoordinate {
        /// The shared coordinate.
        coord: AxialCoord,
        /// The location declared first.
        first: String,
        /// The location declared second.
        second: String,
    },

    /// A region definition is unusable.
    #[error("invalid region \"{name}\": {reason}")]
    InvalidRegion {
        /// The region name (may be empty).
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A color string is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color \"{0}\"")]
    InvalidColor(String),

    /// The catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("catalog read error: {0}")]
    Io(#[from] std::io::Error),
}
