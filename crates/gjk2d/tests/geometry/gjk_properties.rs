use gjk2d::math::{Point, Real, Vector};
use gjk2d::query;
use gjk2d::utils;

const TWO_PI: Real = core::f32::consts::TAU as Real;

// A convex polygon with vertices on a circle, in random order.
fn random_convex_polygon(rng: &mut oorandom::Rand32) -> Vec<Point<Real>> {
    let center = Vector::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0);
    let radius = 0.5 + rng.rand_float() * 4.0;
    let n = rng.rand_range(1..9);

    (0..n)
        .map(|_| {
            let angle = rng.rand_float() * TWO_PI;
            Point::new(angle.cos(), angle.sin()) * radius + center
        })
        .collect()
}

// Signed distance between the two polygons along the best axis among their edge normals.
// Positive when separated. Only meaningful for polygons with at least three vertices.
fn sat_separation(a: &[Point<Real>], b: &[Point<Real>]) -> f64 {
    let ha = hull(a);
    let hb = hull(b);
    let mut best = f64::NEG_INFINITY;

    for poly in [&ha, &hb] {
        for i in 0..poly.len() {
            let p = poly[i];
            let q = poly[(i + 1) % poly.len()];
            let normal = [q[1] - p[1], p[0] - q[0]];
            let len = (normal[0] * normal[0] + normal[1] * normal[1]).sqrt();

            if len == 0.0 {
                continue;
            }

            let proj = |pt: &[f64; 2]| (pt[0] * normal[0] + pt[1] * normal[1]) / len;

            let max_a = ha.iter().map(proj).fold(f64::NEG_INFINITY, f64::max);
            let min_a = ha.iter().map(proj).fold(f64::INFINITY, f64::min);
            let max_b = hb.iter().map(proj).fold(f64::NEG_INFINITY, f64::max);
            let min_b = hb.iter().map(proj).fold(f64::INFINITY, f64::min);

            best = best.max(min_b - max_a).max(min_a - max_b);
        }
    }

    best
}

// Vertices sorted by angle around their average, which is the hull for points on a circle.
fn hull(pts: &[Point<Real>]) -> Vec<[f64; 2]> {
    let c = utils::center(pts).unwrap();
    let mut res: Vec<[f64; 2]> = pts.iter().map(|p| [p.x as f64, p.y as f64]).collect();
    let (cx, cy) = (c.x as f64, c.y as f64);
    res.sort_by(|p, q| {
        let ap = (p[1] - cy).atan2(p[0] - cx);
        let aq = (q[1] - cy).atan2(q[0] - cx);
        ap.total_cmp(&aq)
    });
    res
}

fn orient(a: [i64; 2], b: [i64; 2], c: [i64; 2]) -> i64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn in_box(a: [i64; 2], p: [i64; 2], b: [i64; 2]) -> bool {
    a[0].min(b[0]) <= p[0]
        && p[0] <= a[0].max(b[0])
        && a[1].min(b[1]) <= p[1]
        && p[1] <= a[1].max(b[1])
}

// Closed segments, possibly reduced to a point.
fn segments_intersect(p1: [i64; 2], p2: [i64; 2], q1: [i64; 2], q2: [i64; 2]) -> bool {
    let o1 = orient(p1, p2, q1).signum();
    let o2 = orient(p1, p2, q2).signum();
    let o3 = orient(q1, q2, p1).signum();
    let o4 = orient(q1, q2, p2).signum();

    (o1 * o2 < 0 && o3 * o4 < 0)
        || (o1 == 0 && in_box(p1, q1, p2))
        || (o2 == 0 && in_box(p1, q2, p2))
        || (o3 == 0 && in_box(q1, p1, q2))
        || (o4 == 0 && in_box(q1, p2, q2))
}

// Closed, non-degenerate triangle.
fn in_triangle(p: [i64; 2], a: [i64; 2], b: [i64; 2], c: [i64; 2]) -> bool {
    let area = orient(a, b, c).signum();
    area != 0
        && [orient(a, b, p), orient(b, c, p), orient(c, a, p)]
            .iter()
            .all(|o| o.signum() * area >= 0)
}

fn in_hull(p: [i64; 2], pts: &[[i64; 2]]) -> bool {
    let n = pts.len();
    (0..n).any(|i| {
        (i + 1..n).any(|j| (j + 1..n).any(|k| in_triangle(p, pts[i], pts[j], pts[k])))
    })
}

// Exact test between the closed convex hulls of two integer point sets: either some pair of
// segments (hull edges among them) intersects, or a point of one set lies inside the other hull.
fn hulls_intersect(a: &[[i64; 2]], b: &[[i64; 2]]) -> bool {
    let segments_cross = (0..a.len()).any(|i| {
        (i..a.len()).any(|j| {
            (0..b.len()).any(|k| (k..b.len()).any(|l| segments_intersect(a[i], a[j], b[k], b[l])))
        })
    });

    segments_cross || a.iter().any(|p| in_hull(*p, b)) || b.iter().any(|p| in_hull(*p, a))
}

fn random_grid_points(rng: &mut oorandom::Rand32) -> Vec<[i64; 2]> {
    let n = rng.rand_range(1..6);
    (0..n)
        .map(|_| {
            [
                rng.rand_range(0..9) as i64 - 4,
                rng.rand_range(0..9) as i64 - 4,
            ]
        })
        .collect()
}

#[test]
fn agrees_with_exact_test_on_integer_grid() {
    let mut rng = oorandom::Rand32::new(17);
    let to_points = |pts: &[[i64; 2]]| -> Vec<Point<Real>> {
        pts.iter()
            .map(|p| Point::new(p[0] as Real, p[1] as Real))
            .collect()
    };

    for _ in 0..20_000 {
        let a = random_grid_points(&mut rng);
        let b = random_grid_points(&mut rng);

        assert_eq!(
            query::intersects(&to_points(&a), &to_points(&b)),
            hulls_intersect(&a, &b),
            "{:?} vs {:?}",
            a,
            b
        );
    }
}

#[test]
fn argument_order_does_not_matter() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..2000 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);
        assert_eq!(
            query::intersects(&a, &b),
            query::intersects(&b, &a),
            "{:?} vs {:?}",
            a,
            b
        );
    }
}

#[test]
fn polygons_intersect_themselves() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..500 {
        let a = random_convex_polygon(&mut rng);
        assert!(query::intersects(&a, &a), "{:?}", a);
    }
}

#[test]
fn translated_far_away_polygons_do_not_intersect() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..500 {
        let a = random_convex_polygon(&mut rng);
        let shift = Vector::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5).normalize() * 100.0;
        let b: Vec<_> = a.iter().map(|p| p + shift).collect();
        assert!(!query::intersects(&a, &b), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn agrees_with_separating_axes() {
    let mut rng = oorandom::Rand32::new(2024);
    let mut checked = 0;

    while checked < 1000 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);

        if a.len() < 3 || b.len() < 3 {
            continue;
        }

        let separation = sat_separation(&a, &b);

        // Skip near-contact configurations where rounding decides.
        if separation.abs() < 1.0e-2 {
            continue;
        }

        assert_eq!(
            query::intersects(&a, &b),
            separation < 0.0,
            "{:?} vs {:?}, separation: {}",
            a,
            b,
            separation
        );
        checked += 1;
    }
}
