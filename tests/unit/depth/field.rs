use super::*;

fn field_3x3() -> DepthField {
    DepthField::from_rows(&[vec![10, 20, 10], vec![20, 30, 20], vec![10, 20, 10]]).unwrap()
}

#[test]
fn rejects_empty_and_ragged_grids() {
    assert!(DepthField::from_rows(&[]).is_err());
    assert!(DepthField::from_rows(&[vec![]]).is_err());
    assert!(DepthField::from_rows(&[vec![1, 2], vec![3]]).is_err());
    assert!(DepthField::new(2, 2, vec![0; 3]).is_err());
}

#[test]
fn cell_center_returns_cell_value() {
    let f = field_3x3();
    assert_eq!(f.sample(Point::new(1.5, 1.5)), 30.0);
    assert_eq!(f.sample(Point::new(0.5, 0.5)), 10.0);
    assert_eq!(f.sample(Point::new(2.5, 1.5)), 20.0);
}

#[test]
fn blends_toward_far_side_neighbor() {
    let f = field_3x3();
    // Right half of the center cell: 0.25 of the way toward (2, 1).
    let v = f.sample(Point::new(1.75, 1.5));
    assert!((v - (30.0 * 0.75 + 20.0 * 0.25)).abs() < 1e-12);
    // Left half of the center cell blends toward (0, 1).
    let v = f.sample(Point::new(1.25, 1.5));
    assert!((v - (30.0 * 0.75 + 20.0 * 0.25)).abs() < 1e-12);
}

#[test]
fn diagonal_weight_uses_both_partials() {
    let f = field_3x3();
    let v = f.sample(Point::new(1.75, 1.75));
    let expected = 30.0 * 0.75 * 0.75 + 20.0 * 0.25 * 0.75 + 20.0 * 0.75 * 0.25 + 10.0 * 0.0625;
    assert!((v - expected).abs() < 1e-12);
}

#[test]
fn edges_clamp_neighbors() {
    let f = DepthField::from_rows(&[vec![0, 100]]).unwrap();
    // Toward the left of cell 0 the neighbor clamps to cell 0 itself.
    assert_eq!(f.sample(Point::new(0.1, 0.5)), 0.0);
    // Past the center of cell 1 the neighbor clamps to cell 1.
    assert!((f.sample(Point::new(1.9, 0.5)) - 100.0).abs() < 1e-9);
    // Out-of-range coordinates clamp instead of failing.
    assert_eq!(f.sample(Point::new(5.5, -3.5)), 100.0);
}

#[test]
fn huge_coordinates_clamp_without_overflow() {
    let f = DepthField::from_rows(&[vec![0, 100]]).unwrap();
    assert_eq!(f.sample(Point::new(-1e300, 0.5)), 0.0);
    assert_eq!(f.sample(Point::new(1e300, 0.5)), 100.0);
    assert_eq!(f.sample(Point::new(0.5, -1e300)), 0.0);
    assert_eq!(f.sample(Point::new(-1e300, 1e300)), 0.0);
    assert_eq!(f.sample(Point::new(-3.2, 0.5)), 0.0);
}

#[test]
fn cells_enumerate_row_major() {
    let f = DepthField::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let cells: Vec<_> = f.cells().collect();
    assert_eq!(cells[1], (GridCell { x: 1, y: 0 }, 2));
    assert_eq!(cells[2], (GridCell { x: 0, y: 1 }, 3));
}
