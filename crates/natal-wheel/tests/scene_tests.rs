use natal_wheel::chart::{get_point_position, normalize_longitude};
use natal_wheel::rendering::primitives::{Point, Shape};
use natal_wheel::{
    load_chart_data_from_json, position, Body, ChartData, ChartSpecGenerator, HouseCusp,
    SceneMode, ViewState, WheelSettings, WheelView,
};

const SAMPLE_CHART: &str = include_str!("fixtures/sample_chart.json");

fn body(name: &str, longitude: f64, retrograde: bool) -> Body {
    Body {
        name: name.to_string(),
        longitude,
        sign: String::new(),
        degree: longitude % 30.0,
        house: 0,
        retrograde,
    }
}

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn test_position_is_periodic() {
    for lon in [0.0, 12.5, 89.9, 180.0, 295.5, 359.99] {
        assert_close(position(lon, 150.0), position(lon + 360.0, 150.0));
        assert_close(position(lon, 150.0), position(lon - 720.0, 150.0));
    }
}

#[test]
fn test_zero_longitude_is_nine_o_clock() {
    let p = position(0.0, 200.0);
    assert_close(p, Point { x: 50.0, y: 250.0 });
}

#[test]
fn test_quadrants_follow_screen_orientation() {
    // counter-clockwise: 90° at the bottom, 180° at 3 o'clock, 270° at the top
    assert_close(position(90.0, 100.0), Point { x: 250.0, y: 350.0 });
    assert_close(position(180.0, 100.0), Point { x: 350.0, y: 250.0 });
    assert_close(position(270.0, 100.0), Point { x: 250.0, y: 150.0 });
}

#[test]
fn test_unshifted_mapping_puts_zero_at_top() {
    let center = Point { x: 0.0, y: 0.0 };
    assert_close(get_point_position(center, 10.0, 0.0, 0.0, false), Point { x: 0.0, y: -10.0 });
}

#[test]
fn test_normalize_longitude_range() {
    assert_eq!(normalize_longitude(-30.0), 330.0);
    assert_eq!(normalize_longitude(720.0), 0.0);
    let tiny = normalize_longitude(-1e-15);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn test_single_sun_scene() {
    let data = ChartData {
        planets: vec![Body {
            name: "Sun".to_string(),
            longitude: 295.5,
            sign: "Capricorn".to_string(),
            degree: 25.5,
            house: 10,
            retrograde: false,
        }],
        ..Default::default()
    };
    let spec = WheelView::new(Some(data)).render();

    assert_eq!(spec.mode, SceneMode::Wheel);
    assert_eq!(spec.body_markers().count(), 1);
    assert_eq!(spec.aspect_lines().count(), 0);
    assert_eq!(spec.house_spokes().count(), 0);
    assert_eq!(spec.sign_labels().count(), 12);

    match spec.marker("Sun") {
        Some(Shape::BodyMarker { center, label, glyph, .. }) => {
            assert_close(*center, WheelSettings::default().point_at(295.5, 0.8));
            assert_eq!(label, "Sun, Capricorn 25.50°, house 10");
            assert_eq!(glyph, "☉");
        }
        other => panic!("expected Sun marker, got {:?}", other),
    }
}

#[test]
fn test_empty_planets_renders_placeholder() {
    let spec = WheelView::new(Some(ChartData::default())).render();
    assert!(spec.is_placeholder());
    assert_eq!(spec.body_markers().count(), 0);
    assert_eq!(spec.sign_labels().count(), 0);
    assert!(matches!(
        &spec.shapes[..],
        [Shape::Text { content, .. }] if content == "No chart data"
    ));
}

#[test]
fn test_missing_data_renders_placeholder() {
    let spec = WheelView::new(None).render();
    assert!(matches!(spec.mode, SceneMode::Placeholder { .. }));
}

#[test]
fn test_retrograde_decoration_counts() {
    let data = ChartData {
        planets: vec![body("Mars", 10.0, false), body("Saturn", 200.0, true)],
        ..Default::default()
    };
    let spec = WheelView::new(Some(data)).render();
    assert_eq!(spec.retrograde_marks_for("Mars").count(), 0);
    assert_eq!(spec.retrograde_marks_for("Saturn").count(), 1);
}

#[test]
fn test_sample_chart_scene_counts() {
    let data = load_chart_data_from_json(SAMPLE_CHART).unwrap();
    let spec = WheelView::new(Some(data.clone())).render();

    assert_eq!(spec.body_markers().count(), data.planets.len());
    assert_eq!(spec.house_spokes().count(), 12);
    // quincunx with Chiron has no second endpoint
    assert_eq!(spec.aspect_lines().count(), 5);
    assert_eq!(spec.metadata.chord_count, 5);
    for body in &data.planets {
        let expected = usize::from(body.retrograde);
        assert_eq!(spec.retrograde_marks_for(&body.name).count(), expected);
    }
}

#[test]
fn test_house_spoke_runs_from_center_to_outer_radius() {
    let mut data = ChartData {
        planets: vec![body("Sun", 0.0, false)],
        ..Default::default()
    };
    data.houses
        .insert("house4".to_string(), HouseCusp { longitude: 90.0 });
    let spec = WheelView::new(Some(data)).render();

    let spokes: Vec<&Shape> = spec.house_spokes().collect();
    match spokes.as_slice() {
        [Shape::HouseSpoke { house_num, from, to, .. }] => {
            assert_eq!(*house_num, 4);
            assert_close(*from, Point { x: 250.0, y: 250.0 });
            assert_close(*to, Point { x: 250.0, y: 450.0 });
        }
        other => panic!("expected one spoke, got {:?}", other),
    }
}

#[test]
fn test_zoom_changes_transform_not_geometry() {
    let data = load_chart_data_from_json(SAMPLE_CHART).unwrap();
    let mut wheel = WheelView::new(Some(data));
    let before = wheel.render();
    wheel.zoom_in();
    wheel.zoom_in();
    let after = wheel.render();

    assert_eq!(before.shapes, after.shapes);
    assert_eq!(before.transform.scale, 1.0);
    assert!((after.transform.scale - 1.4).abs() < 1e-6);

    let edge = Point { x: 450.0, y: 250.0 };
    assert_close(after.transform.apply(edge), Point { x: 530.0, y: 250.0 });
    assert_close(after.transform.apply(after.center), after.center);
}

#[test]
fn test_scene_frame_follows_settings() {
    let settings = WheelSettings {
        width: 800.0,
        height: 500.0,
        center_x: 320.0,
        center_y: 240.0,
        radius: 180.0,
        ..Default::default()
    };
    let data = load_chart_data_from_json(SAMPLE_CHART).unwrap();
    for spec in [
        WheelView::with_settings(Some(data), settings.clone()).render(),
        WheelView::with_settings(None, settings).render(),
    ] {
        assert_eq!((spec.width, spec.height), (800.0, 500.0));
        assert_close(spec.center, Point { x: 320.0, y: 240.0 });
        assert_close(spec.transform.origin, spec.center);
        assert_eq!(spec.radius, 180.0);
    }
}

#[test]
fn test_generator_is_pure() {
    let data = load_chart_data_from_json(SAMPLE_CHART).unwrap();
    let generator = ChartSpecGenerator::new();
    let view = ViewState::new();
    assert_eq!(
        generator.generate(Some(&data), &view),
        generator.generate(Some(&data), &view)
    );
}

#[test]
fn test_glyph_spreading_adds_leader_lines() {
    let data = ChartData {
        planets: vec![body("Sun", 100.0, false), body("Mercury", 101.0, true)],
        ..Default::default()
    };
    let settings = WheelSettings {
        min_glyph_separation: 8.0,
        ..Default::default()
    };
    let spec = WheelView::with_settings(Some(data), settings.clone()).render();

    let leaders = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Line { .. }))
        .count();
    assert_eq!(leaders, 2);

    match spec.marker("Sun") {
        Some(Shape::BodyMarker { center, glyph_position, .. }) => {
            assert_close(*center, settings.point_at(100.0, settings.body_ratio));
            assert_close(*glyph_position, settings.point_at(96.5, settings.body_ratio));
        }
        other => panic!("expected Sun marker, got {:?}", other),
    }
}

#[test]
fn test_spreading_disabled_by_default() {
    let data = ChartData {
        planets: vec![body("Sun", 100.0, false), body("Mercury", 100.5, false)],
        ..Default::default()
    };
    let spec = WheelView::new(Some(data)).render();
    assert!(!spec.shapes.iter().any(|s| matches!(s, Shape::Line { .. })));
}
