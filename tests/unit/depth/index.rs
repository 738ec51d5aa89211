use super::*;

#[test]
fn keys_are_exactly_present_depths_ascending() {
    let f = DepthField::from_rows(&[vec![90, 10, 40], vec![10, 90, 10]]).unwrap();
    let idx = DepthIndex::build(&f);
    assert_eq!(idx.depths(), &[10, 40, 90]);
    assert_eq!(idx.layer_count(), 3);
}

#[test]
fn cells_are_grouped_by_value() {
    let f = DepthField::from_rows(&[vec![90, 10, 40], vec![10, 90, 10]]).unwrap();
    let idx = DepthIndex::build(&f);

    let mut deep = idx.cells_at(90).to_vec();
    deep.sort();
    assert_eq!(deep, vec![GridCell { x: 0, y: 0 }, GridCell { x: 1, y: 1 }]);
    assert_eq!(idx.cells_at(10).len(), 3);
    assert_eq!(idx.cells_at(40), &[GridCell { x: 2, y: 0 }]);
    assert!(idx.cells_at(77).is_empty());
}

#[test]
fn flat_field_has_single_layer() {
    let f = DepthField::new(4, 3, vec![50; 12]).unwrap();
    let idx = DepthIndex::build(&f);
    assert_eq!(idx.depths(), &[50]);
    assert_eq!(idx.cells_at(50).len(), 12);
}
