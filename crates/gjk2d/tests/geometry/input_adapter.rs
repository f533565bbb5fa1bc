use gjk2d::input::{
    intersects_json, intersects_vertices, polygon_from_vertices, ArgumentError, InputError,
    VertexError,
};
use serde_json::json;

#[test]
fn numeric_pairs_of_mixed_types() {
    let triangle = [(4.0, 11), (4.0, 5), (9.0, 9)];
    let quad = [(5.0, 7), (7.1, 3), (10.0, 2), (12.0, 7)];
    assert_eq!(intersects_vertices(triangle, quad), Ok(true));

    let empty: [(i32, i32); 0] = [];
    assert_eq!(intersects_vertices(empty, quad), Ok(false));
}

#[test]
fn json_polygons() {
    let triangle = json!([[4, 11], [4, 5], [9, 9]]);
    let quad = json!([[5, 7], [7, 3], [10, 2], [12, 7]]);

    assert_eq!(intersects_json(&triangle, &quad), Ok(true));
    assert_eq!(intersects_json(&json!([]), &quad), Ok(false));

    let triangle = json!([[4.0, 11], [4, 5], [9, 9]]);
    let quad = json!([[5, 7], [7.1, 3], [10, 2], [12, 7]]);
    assert_eq!(intersects_json(&triangle, &quad), Ok(true));
}

#[test]
fn missing_arguments() {
    assert_eq!(
        intersects_json(&json!(null), &json!(null)),
        Err(ArgumentError {
            argument: 0,
            error: InputError::NotASequence { found: "null" },
        })
    );
}

#[test]
fn non_numeric_coordinate() {
    assert_eq!(
        intersects_json(&json!([[null, 11]]), &json!([])),
        Err(ArgumentError {
            argument: 0,
            error: InputError::InvalidVertex {
                vertex: 0,
                error: VertexError::NonNumericCoordinate {
                    axis: 0,
                    found: "null",
                },
            },
        })
    );
}

#[test]
fn wrong_arity_in_the_second_polygon() {
    let err = intersects_json(&json!([[5, 7], [7, 3]]), &json!([[11]])).unwrap_err();

    assert_eq!(
        err,
        ArgumentError {
            argument: 1,
            error: InputError::InvalidVertex {
                vertex: 0,
                error: VertexError::WrongArity { arity: 1 },
            },
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid argument 1: invalid vertex 0: expected 2 coordinates, found 1"
    );

    // The first argument is reported when both are malformed.
    let err = intersects_json(&json!([[null, 11]]), &json!([[11]])).unwrap_err();
    assert_eq!(err.argument, 0);
}

#[test]
fn coordinates_overflowing_the_scalar_type() {
    assert_eq!(
        polygon_from_vertices([(0.0, 1.0e300)]),
        Err(InputError::InvalidVertex {
            vertex: 0,
            error: VertexError::NonFiniteCoordinate { axis: 1 },
        })
    );
}
