use super::*;

#[test]
fn closures_are_fields() {
    let right_half: Region = BaseImage::new(|p: Point| p.x >= 0.0);
    assert!(right_half.sample(Point::new(0.5, -9.0)));
    assert!(!right_half.sample(Point::new(-0.5, 9.0)));
}

#[test]
fn clones_share_behavior() {
    let a: Blend = BaseImage::new(|p: Point| p.x * 0.25);
    let b = a.clone();
    for p in [Point::new(1.0, 0.0), Point::new(-4.0, 2.0)] {
        assert_eq!(a.sample(p), b.sample(p));
    }
}

#[test]
fn to_fn_samples_the_same_image() {
    let img: Image = BaseImage::new(|p: Point| {
        if p.y > 0.0 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    });
    let f = img.to_fn();
    let g = f.clone();
    let p = Point::new(3.0, 1.0);
    assert_eq!(f(p), img.sample(p));
    assert_eq!(g(p), Color::WHITE);
}

#[test]
fn map_post_processes_samples() {
    let blend: Blend = BaseImage::new(|p: Point| p.x);
    let region = blend.map(|t| t > 0.5);
    assert!(region.sample(Point::new(0.75, 0.0)));
    assert!(!region.sample(Point::new(0.25, 0.0)));
}

#[test]
fn images_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Region>();
    assert_send_sync::<Image>();
    assert_send_sync::<Blend>();
}

#[test]
fn debug_names_value_type() {
    let region: Region = BaseImage::new(|_: Point| true);
    assert!(format!("{region:?}").contains("bool"));
}
