use crate::point::Point;

/// A visiting order for the destinations of one invocation.
///
/// Index convention: values index into the *full* point slice handed to the
/// engine. The origin sits at index 0 and never appears in a route; a
/// complete route for `n` destinations is a permutation of `1..=n`. The
/// origin is the implicit start of every route.
pub type Route = Vec<usize>;

/// Total travel length of `route` starting from the origin at `points[0]`.
///
/// An empty route has length 0. Indices must be in bounds for `points`.
pub fn route_length(points: &[Point], route: &[usize]) -> f64 {
    let mut length = 0.0;
    let mut last = &points[0];
    for &idx in route {
        let next = &points[idx];
        length += last.distance(next);
        last = next;
    }
    length
}

/// Whether `route` is a complete visiting order for `n` destinations, i.e. a
/// permutation of `1..=n`.
pub fn is_complete_route(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n + 1];
    for &idx in route {
        if idx == 0 || idx > n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn empty_route_has_zero_length() {
        let points = vec![Point::new(4.0, 2.0)];
        assert_eq!(route_length(&points, &[]), 0.0);
    }

    #[test]
    fn perimeter_walk_of_square_is_30() {
        let points = square();
        assert!((route_length(&points, &[1, 2, 3]) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn diagonal_crossing_order_is_longer() {
        let points = square();
        assert!(route_length(&points, &[2, 1, 3]) > route_length(&points, &[1, 2, 3]));
    }

    #[test]
    fn complete_route_check() {
        assert!(is_complete_route(&[], 0));
        assert!(is_complete_route(&[1], 1));
        assert!(is_complete_route(&[3, 1, 2], 3));
        assert!(!is_complete_route(&[1, 2], 3));
        assert!(!is_complete_route(&[1, 1, 2], 3));
        assert!(!is_complete_route(&[0, 1, 2], 3));
        assert!(!is_complete_route(&[1, 2, 4], 3));
    }

    #[test]
    fn points_parse_from_json() {
        let parsed: Vec<Point> =
            serde_json::from_str(r#"[{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.5}]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], Point::new(10.0, 0.5));
    }
}
