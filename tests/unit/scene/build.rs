use super::*;
use crate::foundation::core::{Point, Vector};

const RED: Color = Color::rgb(255, 0, 0);

fn solid(color: Color) -> Box<Node<Color>> {
    Box::new(Node::Constant { value: color })
}

fn half() -> Box<Node<Fraction>> {
    Box::new(Node::Constant { value: 0.5 })
}

#[test]
fn built_generators_match_direct_calls() {
    let node: Node<bool> = Node::Circle {
        center: Point::new(1.0, 1.0),
        radius: 2.0,
        inner: true,
        outer: false,
    };
    let built = node.build().unwrap();
    let direct = circle(Point::new(1.0, 1.0), 2.0, true, false);
    for p in [Point::ORIGIN, Point::new(3.0, 1.0), Point::new(2.5, 2.0)] {
        assert_eq!(built.sample(p), direct.sample(p));
    }
}

#[test]
fn transforms_wrap_their_source() {
    let node: Node<bool> = Node::Translate {
        source: Box::new(Node::VerticalStripe {
            width: 2.0,
            inner: true,
            outer: false,
        }),
        by: Vector::new(10.0, 0.0),
    };
    let img = node.build().unwrap();
    assert!(img.sample(Point::new(10.5, -3.0)));
    assert!(!img.sample(Point::new(0.0, -3.0)));
}

#[test]
fn cond_builds_for_blends() {
    let node: Node<Fraction> = Node::Cond {
        region: Box::new(Node::Checker {
            size: 1.0,
            inner: true,
            outer: false,
        }),
        this_way: Box::new(Node::Constant { value: 1.0 }),
        that_way: Box::new(Node::Constant { value: 0.0 }),
    };
    let img = node.build().unwrap();
    assert_eq!(img.sample(Point::new(0.5, 0.5)), 1.0);
    assert_eq!(img.sample(Point::new(1.5, 0.5)), 0.0);
}

#[test]
fn color_blending_builds() {
    let node = Node::Lighten {
        source: solid(Color::BLACK),
        blend: half(),
    };
    let img = node.build().unwrap();
    assert_eq!(img.sample(Point::ORIGIN), Color::rgb(128, 128, 128));

    let node = Node::Darken {
        source: solid(RED),
        blend: Box::new(Node::Constant { value: 1.0 }),
    };
    assert_eq!(node.build().unwrap().sample(Point::ORIGIN), Color::BLACK);

    let node = Node::Lerp {
        blend: Box::new(Node::Constant { value: 0.0 }),
        this_way: solid(RED),
        that_way: solid(Color::WHITE),
    };
    assert_eq!(node.build().unwrap().sample(Point::ORIGIN), RED);
}

#[test]
fn blending_regions_is_unsupported() {
    let node: Node<bool> = Node::Lerp {
        blend: half(),
        this_way: Box::new(Node::Constant { value: true }),
        that_way: Box::new(Node::Constant { value: false }),
    };
    let err = node.build().unwrap_err();
    assert!(matches!(err, PointwiseError::Unsupported(_)));
    assert!(err.to_string().contains("not region"));

    let node: Node<Fraction> = Node::Darken {
        source: Box::new(Node::Constant { value: 0.25 }),
        blend: half(),
    };
    assert!(matches!(
        node.build(),
        Err(PointwiseError::Unsupported(_))
    ));
}

#[test]
fn build_validates_first() {
    let node: Node<Color> = Node::Checker {
        size: 0.0,
        inner: RED,
        outer: Color::WHITE,
    };
    assert!(matches!(
        node.build(),
        Err(PointwiseError::Validation(_))
    ));
}

#[test]
fn scene_build_produces_color_image() {
    let scene = Scene {
        image: Node::Cond {
            region: Box::new(Node::Circle {
                center: Point::ORIGIN,
                radius: 1.0,
                inner: true,
                outer: false,
            }),
            this_way: solid(RED),
            that_way: solid(Color::WHITE),
        },
    };
    let img = scene.build().unwrap();
    assert_eq!(img.sample(Point::ORIGIN), RED);
    assert_eq!(img.sample(Point::new(2.0, 0.0)), Color::WHITE);
}
