mod support;

use folio_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use support::RecordingSurface;

fn make_field(width: f32, height: f32, seed: u64) -> Starfield {
    let mut rng = StdRng::seed_from_u64(seed);
    Starfield::new(
        Viewport::new(width, height),
        StarfieldParams::default(),
        &mut rng,
    )
}

fn still_star(x: f32, y: f32) -> Star {
    Star {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        radius: 1.0,
        opacity: 0.5,
    }
}

#[test]
fn initial_population_matches_documented_ranges() {
    let field = make_field(1000.0, 800.0, 42);
    assert_eq!(field.len(), STAR_COUNT);
    for s in field.stars() {
        assert!((0.0..1000.0).contains(&s.position.x));
        assert!((0.0..800.0).contains(&s.position.y));
        assert!((0.2..=1.9).contains(&s.radius), "radius {}", s.radius);
        assert!((0.22..=0.82).contains(&s.opacity), "opacity {}", s.opacity);
        assert!(s.velocity.x.abs() <= 0.06 && s.velocity.y.abs() <= 0.06);
    }
}

#[test]
fn stars_stay_inside_wrap_bounds_over_many_frames() {
    let mut field = make_field(320.0, 240.0, 3);
    let mut surface = RecordingSurface::default();
    for frame in 0..20_000 {
        field.frame(&mut surface);
        for s in field.stars() {
            assert!(
                (-20.0..=340.0).contains(&s.position.x),
                "x {} out of bounds at frame {frame}",
                s.position.x
            );
            assert!(
                (-20.0..=260.0).contains(&s.position.y),
                "y {} out of bounds at frame {frame}",
                s.position.y
            );
        }
    }
    assert_eq!(field.len(), STAR_COUNT);
}

#[test]
fn frame_clears_then_draws_every_star_with_its_own_opacity() {
    let mut field = make_field(800.0, 600.0, 9);
    let mut surface = RecordingSurface::default();
    field.frame(&mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.circles.len(), STAR_COUNT);
    for (circle, star) in surface.circles.iter().zip(field.stars()) {
        assert_eq!(circle.center, star.position);
        assert_eq!(circle.radius, star.radius);
        assert_eq!(circle.fill.alpha, star.opacity);
        assert_eq!(circle.fill.color, Color::Rgb([255, 255, 255]));
    }
}

#[test]
fn star_leaving_left_edge_reappears_on_right() {
    let star = Star {
        velocity: Vec2::new(-0.06, 0.0),
        ..still_star(-19.97, 100.0)
    };
    let mut field = Starfield::from_stars(
        Viewport::new(1000.0, 800.0),
        StarfieldParams::default(),
        vec![star],
    );
    field.step();
    assert_eq!(field.stars()[0].position.x, 1020.0);
    assert_eq!(field.stars()[0].position.y, 100.0);
}

#[test]
fn star_leaving_bottom_edge_reappears_on_top() {
    let star = Star {
        velocity: Vec2::new(0.0, 0.05),
        ..still_star(10.0, 819.99)
    };
    let mut field = Starfield::from_stars(
        Viewport::new(1000.0, 800.0),
        StarfieldParams::default(),
        vec![star],
    );
    field.step();
    assert_eq!(field.stars()[0].position.y, -20.0);
}

#[test]
fn resize_moves_wrap_bounds() {
    let params = StarfieldParams::default();
    let small = Viewport::new(1000.0, 800.0);
    let large = Viewport::new(1200.0, 900.0);

    // Under the old bounds x = 1025 is past the margin and wraps.
    let mut before = Starfield::from_stars(small, params.clone(), vec![still_star(1025.0, 850.0)]);
    before.step();
    assert_eq!(before.stars()[0].position, Vec2::new(-20.0, -20.0));

    let mut after = Starfield::from_stars(small, params, vec![still_star(1025.0, 850.0)]);
    after.resize(large);
    assert_eq!(after.viewport(), large);
    after.step();
    assert_eq!(after.stars()[0].position, Vec2::new(1025.0, 850.0));
}

#[test]
fn resize_keeps_population() {
    let mut field = make_field(1000.0, 800.0, 5);
    field.resize(Viewport::new(400.0, 300.0));
    for _ in 0..10 {
        field.step();
    }
    assert_eq!(field.len(), STAR_COUNT);
}

#[test]
fn same_seed_gives_same_sky() {
    let a = make_field(640.0, 480.0, 11);
    let b = make_field(640.0, 480.0, 11);
    assert_eq!(a.stars(), b.stars());
}
