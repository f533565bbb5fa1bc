/// Error raised when a single vertex cannot be converted into a point.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexError {
    /// The vertex is not a sequence of coordinates.
    #[error("expected a pair of numbers, found {found}")]
    NotASequence {
        /// Description of the value found instead.
        found: &'static str,
    },
    /// The vertex does not have exactly two coordinates.
    #[error("expected 2 coordinates, found {arity}")]
    WrongArity {
        /// The number of coordinates of the vertex.
        arity: usize,
    },
    /// A coordinate has no numeric value.
    #[error("coordinate {axis} is not a number, found {found}")]
    NonNumericCoordinate {
        /// The index of the coordinate, 0 for `x` and 1 for `y`.
        axis: usize,
        /// Description of the value found instead.
        found: &'static str,
    },
    /// A coordinate is infinite or NaN, or overflows the scalar type.
    #[error("coordinate {axis} is not a finite number")]
    NonFiniteCoordinate {
        /// The index of the coordinate, 0 for `x` and 1 for `y`.
        axis: usize,
    },
}

/// Error raised when a collection of vertices cannot be converted into a polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The collection of vertices is not a sequence.
    #[error("expected a sequence of vertices, found {found}")]
    NotASequence {
        /// Description of the value found instead.
        found: &'static str,
    },
    /// One of the vertices is malformed.
    #[error("invalid vertex {vertex}: {error}")]
    InvalidVertex {
        /// The index of the malformed vertex in its collection.
        vertex: usize,
        /// What is wrong with the vertex.
        error: VertexError,
    },
}

/// Error raised when one of the arguments of an intersection test is malformed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("invalid argument {argument}: {error}")]
pub struct ArgumentError {
    /// The index of the malformed argument: 0 for the first polygon, 1 for the second.
    pub argument: usize,
    /// What is wrong with the argument.
    pub error: InputError,
}
