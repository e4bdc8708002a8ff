use tree_decorator::decor::{Point, TreeLayer, TreeShape};

#[test]
fn points_above_crown_or_below_base_are_rejected() {
    let shape = TreeShape::default();
    for x in [200.0, 250.0, 300.0] {
        assert!(!shape.contains(Point::new(x, 249.9)));
        assert!(!shape.contains(Point::new(x, 100.0)));
        assert!(!shape.contains(Point::new(x, 450.1)));
        assert!(!shape.contains(Point::new(x, 520.0)));
    }
}

#[test]
fn bottom_layer_boundaries() {
    let shape = TreeShape::default();
    assert!(shape.contains(Point::new(250.0, 380.0)));
    assert!(!shape.contains(Point::new(250.0, 450.0)));
    assert!(shape.contains(Point::new(320.0, 380.0)));
    assert!(shape.contains(Point::new(325.0, 380.0)));
    assert!(!shape.contains(Point::new(326.0, 380.0)));
    assert!(shape.contains(Point::new(175.0, 380.0)));
    assert!(!shape.contains(Point::new(174.0, 380.0)));
}

#[test]
fn any_overlapping_layer_accepts() {
    let shape = TreeShape::default();
    // At y = 350 the bottom layer allows ~42.9 and the middle layer ~34.3.
    assert!(shape.contains(Point::new(292.0, 350.0)));
    assert!(!shape.contains(Point::new(293.0, 350.0)));
    assert!(shape.contains(Point::new(208.0, 350.0)));
    // At y = 330 only the middle layer is wide enough for dx = 50.
    assert!(shape.contains(Point::new(300.0, 330.0)));
    assert!(!shape.contains(Point::new(302.0, 330.0)));
}

#[test]
fn crown_line_is_accepted_near_the_trunk_axis() {
    let shape = TreeShape::default();
    assert!(shape.contains(Point::new(250.0, 250.0)));
    assert!(!shape.contains(Point::new(300.0, 250.0)));
}

#[test]
fn custom_shape_uses_its_own_bounds() {
    let shape = TreeShape::new(vec![TreeLayer::new(0.0, 0.0, 20.0)], -5.0, 5.0);
    assert!(shape.contains(Point::new(0.0, 0.0)));
    assert!(shape.contains(Point::new(4.0, 4.0)));
    assert!(!shape.contains(Point::new(0.0, 6.0)));
    assert_eq!(shape.layers().len(), 1);
}
