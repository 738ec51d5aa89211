use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_bytes(b"parallax");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'p');
    b.write_bytes(b"arallax");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_distinguishes_float_bit_patterns() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_f64(0.0);
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn cubic_bezier_hits_endpoints_exactly() {
    assert_eq!(cubic_bezier(-1.5, 0.2, -0.3, 2.5, 0.0), -1.5);
    assert_eq!(cubic_bezier(-1.5, 0.2, -0.3, 2.5, 1.0), 2.5);
}

#[test]
fn cubic_bezier_midpoint_weights() {
    // At t = 0.5 the Bernstein weights are 1/8, 3/8, 3/8, 1/8.
    let v = cubic_bezier(8.0, 0.0, 0.0, 0.0, 0.5);
    assert_eq!(v, 1.0);
    let v = cubic_bezier(0.0, 8.0, 0.0, 0.0, 0.5);
    assert_eq!(v, 3.0);
}
