extern crate nalgebra as na;

use gjk2d::input;
use gjk2d::query;
use na::Point2;

// Usage: intersection_test2d '[[4, 11], [4, 5], [9, 9]]' '[[5, 7], [7, 3], [10, 2], [12, 7]]'
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let [poly1, poly2] = args.as_slice() {
        let value1: serde_json::Value = serde_json::from_str(poly1).expect("Invalid JSON.");
        let value2: serde_json::Value = serde_json::from_str(poly2).expect("Invalid JSON.");

        match input::intersects_json(&value1, &value2) {
            Ok(res) => println!("Intersection: {}", res),
            Err(e) => eprintln!("Error: {}", e),
        }
        return;
    }

    let triangle = [
        Point2::new(4.0, 11.0),
        Point2::new(4.0, 5.0),
        Point2::new(9.0, 9.0),
    ];
    let quad = [
        Point2::new(5.0, 7.0),
        Point2::new(7.0, 3.0),
        Point2::new(10.0, 2.0),
        Point2::new(12.0, 7.0),
    ];
    let far = [
        Point2::new(20.0, 20.0),
        Point2::new(21.0, 20.0),
        Point2::new(20.0, 21.0),
    ];

    assert!(query::intersects(&triangle, &quad));
    assert!(!query::intersects(&triangle, &far));
    println!("Triangle vs. quad: {}", query::intersects(&triangle, &quad));
    println!("Triangle vs. far triangle: {}", query::intersects(&triangle, &far));
}
