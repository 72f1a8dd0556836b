use glam::{Quat, Vec3};
use screensaver_core::*;

fn closed_form(k: usize, n: usize) -> [f64; 3] {
    let increment = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    let offset = 2.0 / n as f64;
    let y = k as f64 * offset - 1.0 + offset / 2.0;
    let r = (1.0 - y * y).sqrt();
    let phi = k as f64 * increment;
    [phi.cos() * r, y, phi.sin() * r]
}

#[test]
fn generate_returns_unit_vectors() {
    for n in [1_i64, 2, 3, 4, 16, 31, 1000, 100_000] {
        let pts = generate(n).unwrap();
        assert_eq!(pts.len(), n as usize);
        for (i, p) in pts.iter().enumerate() {
            assert!(
                (p.length() - 1.0).abs() < 1e-6,
                "n={n} point {i} has length {}",
                p.length()
            );
        }
    }
}

#[test]
fn generate_is_deterministic() {
    assert_eq!(generate(257).unwrap(), generate(257).unwrap());
}

#[test]
fn generate_rejects_non_positive_counts() {
    assert!(matches!(generate(0), Err(CoreError::InvalidArgument(_))));
    assert!(matches!(generate(-1), Err(CoreError::InvalidArgument(_))));
    assert!(matches!(generate(i64::MIN), Err(CoreError::InvalidArgument(_))));
}

#[test]
fn generate_rejects_counts_too_large_to_allocate() {
    assert!(matches!(generate(i64::MAX), Err(CoreError::InvalidArgument(_))));
    assert!(matches!(
        generate(MAX_SPHERE_POINTS + 1),
        Err(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn generate_four_matches_closed_form() {
    let pts = generate(4).unwrap();
    // first point sits on the +X meridian a quarter of the way up
    assert!((pts[0].x - 0.661_437_8).abs() < 1e-6);
    assert!((pts[0].y + 0.75).abs() < 1e-6);
    assert!(pts[0].z.abs() < 1e-6);
    for (k, p) in pts.iter().enumerate() {
        let [x, y, z] = closed_form(k, 4);
        assert!((p.x as f64 - x).abs() < 1e-6, "x mismatch at {k}");
        assert!((p.y as f64 - y).abs() < 1e-6, "y mismatch at {k}");
        assert!((p.z as f64 - z).abs() < 1e-6, "z mismatch at {k}");
    }
}

#[test]
fn single_point_lies_on_equator() {
    let pts = generate(1).unwrap();
    assert!((pts[0] - Vec3::X).length() < 1e-6);
}

#[test]
fn points_climb_from_south_to_north() {
    let pts = generate(64).unwrap();
    for w in pts.windows(2) {
        assert!(w[1].y > w[0].y);
    }
}

#[test]
fn layout_pairs_labels_by_index() {
    let layout = SphereLayout::with_count(DEFAULT_POINT_COUNT, &BIRD_ORDERS).unwrap();
    assert_eq!(layout.len(), 16);
    let pts = generate(16).unwrap();
    for (i, (dir, label)) in layout.iter().enumerate() {
        assert_eq!(dir, pts[i]);
        assert_eq!(label, BIRD_ORDERS[i]);
    }
    assert_eq!(layout.index_of("Rheiformes"), Some(0));
    assert_eq!(layout.index_of("Eurypygiformes"), Some(15));
    assert_eq!(layout.index_of("Passeriformes"), None);
    assert_eq!(layout.get(1).map(|(_, l)| l), Some("Tinamiformes"));
}

#[test]
fn layout_needs_enough_labels() {
    assert!(SphereLayout::with_count(32, &BIRD_ORDERS).is_err());
    let empty: [&str; 0] = [];
    assert!(SphereLayout::new(&empty).is_err());
}

#[test]
fn duplicate_labels_resolve_to_first() {
    let layout = SphereLayout::new(&["a", "b", "a"]).unwrap();
    assert_eq!(layout.len(), 3);
    assert_eq!(layout.index_of("a"), Some(0));
}

#[test]
fn tiles_sit_on_scaled_sphere_around_center() {
    let layout = SphereLayout::new(&BIRD_ORDERS).unwrap();
    let tiles = TileLayout {
        center: Vec3::new(1.0, -2.0, 3.0),
        ..TileLayout::default()
    };
    let placed = tiles.place(&layout);
    assert_eq!(placed.len(), BIRD_ORDERS.len());
    let expected_rotation = euler_degrees(TILE_ROTATION_DEGREES);
    for (p, _) in &placed {
        let r = (p.position - tiles.center).length();
        assert!((r - DEFAULT_SPHERE_SCALING).abs() < 1e-3);
        assert!(p.rotation.abs_diff_eq(expected_rotation, 1e-6));
    }
    assert_eq!(placed[3].1, "Galliformes");
}

#[test]
fn sphere_spin_turns_about_y() {
    let spin = SphereSpin::default();
    let mut rotation = Quat::IDENTITY;
    for _ in 0..10 {
        rotation = spin.advance(rotation, 0.1);
    }
    let expected = Quat::from_rotation_y(DEFAULT_SPIN_SPEED_DEG.to_radians());
    assert!((rotation * Vec3::X - expected * Vec3::X).length() < 1e-5);
}
