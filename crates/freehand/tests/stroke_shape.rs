//! End-to-end behavior of the stroke shape adapter: an input gesture grows
//! a stroke segment by segment, and geometry, render paths, and indicator
//! are recomputed in full from the accumulated state each time.

use freehand::{
    SamplePoint, Segment, SizeToken, Stroke, StrokeGeometry, StrokeProps, stroke_width,
};
use glam::Vec2;

fn stroke(id: u64) -> Stroke {
    Stroke::new(id, Stroke::default_props())
}

fn wavy_samples(count: usize) -> Vec<SamplePoint> {
    (0..count)
        .map(|i| {
            let x = i as f32 * 6.0;
            SamplePoint::new(x, (x * 0.1).sin() * 20.0, 0.5)
        })
        .collect()
}

#[test]
fn gesture_grows_from_dot_to_polygon() {
    let mut shape = stroke(1);

    // First pointer-down sample: a dot
    shape
        .props
        .segments
        .push(Segment::free(vec![SamplePoint::new(10.0, 10.0, 0.5)]));
    assert!(shape.is_dot());
    let geometry = shape.geometry(false).unwrap();
    assert!(matches!(geometry, StrokeGeometry::Circle(_)));
    assert!(geometry.contains(Vec2::new(10.0, 10.0)));

    // The gesture continues: replace with a real segment
    shape.props.segments[0] = Segment::free(wavy_samples(40));
    assert!(!shape.is_dot());
    let geometry = shape.geometry(false).unwrap();
    assert!(matches!(geometry, StrokeGeometry::Polygon(_)));

    // Completing the gesture still hit-tests the same midpoint
    let mid = Vec2::new(120.0, (120.0f32 * 0.1).sin() * 20.0);
    assert!(geometry.distance_to_point(mid) < 0.0);
    shape.props.is_complete = true;
    let completed = shape.geometry(false).unwrap();
    assert!(completed.distance_to_point(mid) < 0.0);
}

#[test]
fn outline_bounds_cover_the_input_path() {
    let mut shape = stroke(2);
    shape.props.segments.push(Segment::free(wavy_samples(60)));
    shape.props.is_complete = true;

    let geometry = shape.geometry(false).unwrap();
    let bounds = geometry.bounds();

    // The outline straddles the centerline, so bounds must cover every
    // raw sample with room to spare on the interior ones
    for sample in &shape.props.segments[0].points {
        let p = sample.position();
        assert!(p.x >= bounds.min.x - stroke_width(SizeToken::M));
        assert!(p.x <= bounds.max.x + stroke_width(SizeToken::M));
    }
    assert!(bounds.width() > 0.0);
    assert!(bounds.height() > 0.0);
}

#[test]
fn repeated_geometry_is_byte_identical() {
    let mut shape = stroke(3);
    shape
        .props
        .segments
        .push(Segment::free(vec![SamplePoint::new(0.0, 0.0, 0.5)]));

    let a = shape.render("black", false).unwrap();
    let b = shape.render("black", false).unwrap();
    assert_eq!(a, b);

    let ga = shape.geometry(false).unwrap();
    let gb = shape.geometry(false).unwrap();
    assert_eq!(ga, gb);
}

#[test]
fn resize_then_resize_matches_single_resize() {
    let mut shape = stroke(4);
    shape.props.segments.push(Segment::free(wavy_samples(12)));

    let chained = shape.resized(2.0, 3.0).resized(0.5, 0.5);
    let direct = shape.resized(1.0, 1.5);

    let a = &chained.props.segments[0].points;
    let b = &direct.props.segments[0].points;
    for (p, q) in a.iter().zip(b.iter()) {
        assert!((p.x - q.x).abs() < 1e-4);
        assert!((p.y - q.y).abs() < 1e-4);
        assert_eq!(p.z, q.z);
    }
}

#[test]
fn segments_parse_from_host_records() {
    // Pressure defaults to neutral when a sample carries no z
    let segment: Segment = serde_json::from_str(
        r#"{ "type": "straight", "points": [ { "x": 3.0, "y": 4.0 }, { "x": 8.0, "y": 4.0, "z": 0.9 } ] }"#,
    )
    .unwrap();
    assert_eq!(segment.points[0].z, 0.5);
    assert_eq!(segment.points[1].z, 0.9);

    let props: StrokeProps = serde_json::from_str(
        r#"{ "segments": [], "color": "black", "size": "xl", "is_complete": false, "is_pen": true }"#,
    )
    .unwrap();
    assert_eq!(props.size, SizeToken::Xl);
    assert!(props.is_pen);
}

#[test]
fn straight_two_point_segment_renders_squared() {
    let mut shape = stroke(5);
    shape.props.segments.push(Segment::straight(vec![
        SamplePoint::new(0.0, 0.0, 0.5),
        SamplePoint::new(200.0, 0.0, 0.5),
    ]));

    assert!(!shape.is_dot());
    let open = shape.render("black", false).unwrap();

    // The straight-segment rule already treats the end as final, so marking
    // the stroke complete must not change the emitted path
    shape.props.is_complete = true;
    let complete = shape.render("black", false).unwrap();
    assert_eq!(open.path, complete.path);
}
