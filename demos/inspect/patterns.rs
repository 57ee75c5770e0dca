//! Construction patterns exercised by the inspector.

use wideline::geometry::{GeometryTemplate, PointInput, Shape};
use wideline::math::Point3;
use wideline::scheme::{Color, SchemeAttribute};
use wideline::tools::generate_points_interleaved;
use wideline::wideline::{
    AttrInput, Attribute, CapInput, Caps, Custom, Join, JoinInput, SphereStyle, WidelineProps,
};

/// All patterns by name, in presentation order.
pub fn all() -> Vec<(&'static str, WidelineProps)> {
    vec![
        ("zigzag", zigzag()),
        ("batch", batch()),
        ("translucent", translucent()),
        ("outlined", outlined()),
        ("custom", custom()),
    ]
}

/// Zig-zag with round joins and mixed caps.
fn zigzag() -> WidelineProps {
    WidelineProps {
        points: PointInput::Single(Shape::Flat(generate_points_interleaved(7, Some(4.0), None))),
        attr: Some(AttrInput::Single(Attribute {
            width: 0.2,
            ..Attribute::default()
        })),
        join: JoinInput::Kind(Join::Round),
        caps_start: CapInput::Kind(Caps::Round),
        caps_end: CapInput::Kind(Caps::Top),
        bounding_sphere: Some(SphereStyle {
            color: Color::new(1.0, 0.6, 0.8),
            opacity: 0.25,
        }),
        ..WidelineProps::default()
    }
}

/// Two disjoint sub-lines in one mesh.
fn batch() -> WidelineProps {
    WidelineProps {
        points: PointInput::Batch(vec![
            Shape::Flat(vec![-2.0, 0.0, -1.0, 1.0, 0.0, 0.0]),
            Shape::Flat(vec![0.5, 0.0, 1.5, 1.0, 2.5, 0.0]),
        ]),
        attr: Some(AttrInput::Single(Attribute {
            width: 0.15,
            ..Attribute::default()
        })),
        join: JoinInput::Kind(Join::Bevel),
        ..WidelineProps::default()
    }
}

/// Translucent line, forcing the strip body.
fn translucent() -> WidelineProps {
    WidelineProps {
        points: PointInput::Single(Shape::Flat(generate_points_interleaved(5, Some(3.0), None))),
        attr: Some(AttrInput::Single(Attribute {
            width: 0.3,
            ..Attribute::default()
        })),
        opacity: Some(0.5),
        join: JoinInput::Kind(Join::Miter),
        ..WidelineProps::default()
    }
}

/// Outline under a fill: two stacked attribute layers.
fn outlined() -> WidelineProps {
    WidelineProps {
        points: PointInput::Single(Shape::Flat(generate_points_interleaved(5, Some(3.0), None))),
        attr: Some(AttrInput::Many(vec![
            Attribute {
                width: 0.4,
                color: Color::new(0.1, 0.1, 0.1),
                ..Attribute::default()
            },
            Attribute {
                width: 0.25,
                color: Color::new(1.0, 0.8, 0.0),
                ..Attribute::default()
            },
        ])),
        join: JoinInput::Kind(Join::Round),
        caps_start: CapInput::Kind(Caps::Round),
        caps_end: CapInput::Kind(Caps::Round),
        ..WidelineProps::default()
    }
}

/// Per-segment custom markers on top of a plain body.
fn custom() -> WidelineProps {
    let marker = GeometryTemplate::new(
        vec![
            Point3::new(0.5, 0.1, 0.0),
            Point3::new(0.4, -0.1, 0.0),
            Point3::new(0.6, -0.1, 0.0),
        ],
        vec![[0, 1, 2]],
    );
    WidelineProps {
        points: PointInput::Single(Shape::Flat(vec![-1.5, 0.0, 0.0, 0.5, 1.5, 0.0])),
        attr: Some(AttrInput::Single(Attribute {
            width: 0.1,
            ..Attribute::default()
        })),
        custom: vec![Custom {
            scheme: SchemeAttribute {
                color: Color::new(1.0, 0.2, 0.2),
                width: 0.1,
                opacity: 1.0,
            },
            geometry: marker,
        }],
        ..WidelineProps::default()
    }
}
