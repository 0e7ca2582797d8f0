use shapekit_designer::transform::drag_scale_factor;
use shapekit_designer::{
    angle_from_drag, reflect_point, rotate_point, scale_factor_from_drag, scale_point, Affine2,
    Point, ScaleAxis,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_rotation_is_counter_clockwise() {
    let r = rotate_point(p(1.0, 0.0), 90.0, p(0.0, 0.0));
    assert!(r.approx_eq(&p(0.0, 1.0), 1e-12));
    let r = rotate_point(p(5.0, 5.0), 180.0, p(4.0, 4.0));
    assert!(r.approx_eq(&p(3.0, 3.0), 1e-12));
}

#[test]
fn test_center_is_fixed_point() {
    let c = p(-3.5, 12.25);
    assert!(rotate_point(c, 37.0, c).approx_eq(&c, 1e-12));
    assert!(scale_point(c, (3.0, 0.2), c).approx_eq(&c, 1e-12));
}

#[test]
fn test_scale_x_keeps_y() {
    let s = scale_point(p(4.0, 7.0), (2.5, 1.0), p(2.0, 0.0));
    assert!(s.approx_eq(&p(7.0, 7.0), 1e-12));
}

#[test]
fn test_matrix_layout() {
    let t = Affine2::translation(3.0, -2.0);
    let m = t.matrix();
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 2)], -2.0);
    assert_eq!(m[(2, 2)], 1.0);
    assert_eq!(Affine2::default(), Affine2::identity());
}

#[test]
fn test_reflection_is_an_involution() {
    let a = p(1.0, 2.0);
    let b = p(4.0, -1.0);
    let q = p(7.0, 3.0);
    let once = reflect_point(q, a, b);
    assert!(!once.approx_eq(&q, 1e-6));
    assert!(reflect_point(once, a, b).approx_eq(&q, 1e-9));
}

#[test]
fn test_drag_derivations() {
    let c = p(100.0, 100.0);
    assert!((angle_from_drag(c, p(200.0, 200.0)) - 45.0).abs() < 1e-12);
    assert!((angle_from_drag(c, p(100.0, 0.0)) + 90.0).abs() < 1e-12);

    // |dx| / 50 along X, Euclidean distance / 50 for XY, floored at 0.1.
    assert_eq!(scale_factor_from_drag(c, p(200.0, 0.0), ScaleAxis::X), 2.0);
    assert_eq!(scale_factor_from_drag(c, p(130.0, 140.0), ScaleAxis::XY), 1.0);
    assert_eq!(scale_factor_from_drag(c, p(101.0, 100.0), ScaleAxis::XY), 0.1);
    assert_eq!(drag_scale_factor(c, p(110.0, 100.0), ScaleAxis::X, 10.0, 0.5), 1.0);
    assert_eq!(drag_scale_factor(c, p(101.0, 100.0), ScaleAxis::X, 10.0, 0.5), 0.5);
}
