use anyhow::Context;
use physics2d::{Simulation, Vec2};

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn falling_circle_accelerates_monotonically() -> anyhow::Result<()> {
    let mut sim = Simulation::default();
    assert!(sim.add_circle(Vec2::new(800.0, 100.0), 0.5, 1.0, false, 10.0, 0.0, 0.1, 0.2));

    let mut last_y = 100.0_f32;
    let mut last_vy = 0.0_f32;
    for _ in 0..30 {
        sim.step(FRAME);
        let body = sim.bodies().first().context("body disappeared")?;
        assert!(body.velocity.y > last_vy, "velocity must grow every frame");
        assert!(body.position.y > last_y, "position must fall every frame");
        last_vy = body.velocity.y;
        last_y = body.position.y;
    }
    Ok(())
}

#[test]
fn gravity_scales_with_inverse_mass() {
    // Gravity enters as a force, so a heavier body accelerates less.
    let mut sim = Simulation::default();
    sim.add_circle(Vec2::new(400.0, 100.0), 0.5, 1.0, false, 10.0, 0.0, 0.1, 0.2);
    sim.add_circle(Vec2::new(1200.0, 100.0), 0.5, 4.0, false, 10.0, 0.0, 0.1, 0.2);

    sim.step(FRAME);
    let light = sim.bodies()[0].velocity.y;
    let heavy = sim.bodies()[1].velocity.y;
    assert!(light > heavy);
    assert!((light / heavy - 4.0).abs() < 1e-3);
}

#[test]
fn static_body_never_moves() {
    let mut sim = Simulation::default();
    sim.add_rectangle(Vec2::new(800.0, 800.0), 0.8, 1.0, true, 1400.0, 80.0, 0.0, 0.1, 0.2);
    sim.add_circle(Vec2::new(100.0, 100.0), 0.5, 1.0, true, 10.0, 0.0, 0.1, 0.2);

    for _ in 0..60 {
        sim.step(FRAME);
    }

    let rect = &sim.bodies()[0];
    let circle = &sim.bodies()[1];
    assert_eq!(rect.position, Vec2::new(800.0, 800.0));
    assert_eq!(rect.velocity, Vec2::ZERO);
    assert_eq!(rect.angular_velocity, 0.0);
    assert_eq!(circle.position, Vec2::new(100.0, 100.0));
    assert_eq!(circle.velocity, Vec2::ZERO);
}
