use std::fmt;

/// Errors surfaced by polygon predicates and the triangulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A closed polygon needs at least three vertices.
    TooFewVertices { got: usize },
    /// The ear search ran out of budget with `remaining` vertices still active.
    /// Usually a self-intersecting or otherwise non-simple input.
    NotSimple { remaining: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            PolygonError::NotSimple { remaining } => write!(
                f,
                "no ear found with {remaining} vertices left (probable non-simple polygon)"
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Reject polygons that cannot describe a closed area.
#[inline]
pub(crate) fn check_len<T>(polygon: &[T]) -> Result<(), PolygonError> {
    if polygon.len() < 3 {
        return Err(PolygonError::TooFewVertices { got: polygon.len() });
    }
    Ok(())
}
