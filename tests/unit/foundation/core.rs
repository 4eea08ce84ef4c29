use super::*;

#[test]
fn surface_dims_reject_zero_and_oversized() {
    assert!(Size::new(0, 10).to_surface_dims().is_err());
    assert!(Size::new(10, 0).to_surface_dims().is_err());
    assert!(Size::new(70_000, 10).to_surface_dims().is_err());
    assert_eq!(Size::new(1000, 700).to_surface_dims().unwrap(), (1000, 700));
}

#[test]
fn square_has_equal_sides() {
    let s = Size::square(75);
    assert_eq!(s.width, 75);
    assert_eq!(s.height, 75);
    assert_eq!(s.area(), 75 * 75);
}

#[test]
fn premul_of_opaque_is_identity() {
    let c = Rgba8::new(26, 115, 232, 255);
    assert_eq!(c.to_premul(), [26, 115, 232, 255]);
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = Rgba8::new(66, 133, 244, 210);
    let [r, g, b, a] = c.to_premul();
    assert_eq!(a, 210);
    assert_eq!(r, 54);
    assert_eq!(g, 110);
    assert_eq!(b, 201);
    assert_eq!(Rgba8::new(1, 2, 3, 0).to_premul(), [0, 0, 0, 0]);
}

#[test]
fn opaque_keeps_channels_and_sets_full_alpha() {
    let c = Rgba8::new(15, 76, 158, 200).opaque();
    assert_eq!(c, Rgba8::new(15, 76, 158, 255));
    assert_eq!(c.to_premul(), [15, 76, 158, 255]);
}
