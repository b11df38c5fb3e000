use physics2d::collision::{detect_circle_rectangle, resolve_collision};
use physics2d::{RigidBody, Simulation, Vec2};

const FRAME: f32 = 1.0 / 60.0;

fn falling_circle(restitution: f32, speed: f32) -> RigidBody {
    let mut body =
        RigidBody::circle(Vec2::new(0.0, -9.0), restitution, 1.0, false, 0.0, 0.1, 0.2, 5.0);
    body.velocity = Vec2::new(0.0, speed);
    body
}

fn static_floor(restitution: f32) -> RigidBody {
    RigidBody::rectangle(Vec2::ZERO, restitution, 1.0, true, 0.0, 0.1, 0.2, 100.0, 10.0)
}

#[test]
fn fully_elastic_bounce_preserves_normal_speed() {
    let mut ball = falling_circle(1.0, 10.0);
    let mut floor = static_floor(1.0);

    let manifold = detect_circle_rectangle(&mut ball, &mut floor).expect("overlap");
    resolve_collision(&mut ball, &mut floor, &manifold);

    assert!((ball.velocity.y + 10.0).abs() < 1e-3, "vy={}", ball.velocity.y);
    assert_eq!(floor.velocity, Vec2::ZERO);
}

#[test]
fn fully_inelastic_impact_stops_normal_motion() {
    let mut ball = falling_circle(0.0, 10.0);
    let mut floor = static_floor(0.0);

    let manifold = detect_circle_rectangle(&mut ball, &mut floor).expect("overlap");
    resolve_collision(&mut ball, &mut floor, &manifold);

    assert!(ball.velocity.y.abs() < 1e-3);
}

#[test]
fn slow_inelastic_impact_snaps_to_rest() {
    // The residual bounce of a slow impact falls below the rest
    // tolerance and the integrator snaps it to exactly zero.
    let mut ball = falling_circle(0.01, 4.0);
    let mut floor = static_floor(0.01);

    let manifold = detect_circle_rectangle(&mut ball, &mut floor).expect("overlap");
    resolve_collision(&mut ball, &mut floor, &manifold);
    assert!(ball.velocity.length() < 0.05);

    ball.step(FRAME / 64.0);
    assert_eq!(ball.velocity, Vec2::ZERO);
}

#[test]
fn dropped_ball_settles_on_static_floor() {
    let mut sim = Simulation::default();
    assert!(sim.add_rectangle(Vec2::new(800.0, 900.0), 0.1, 1.0, true, 1400.0, 80.0, 0.0, 0.1, 0.2));
    assert!(sim.add_circle(Vec2::new(800.0, 820.0), 0.1, 1.0, false, 20.0, 0.0, 0.1, 0.2));

    for _ in 0..180 {
        sim.step(FRAME);
    }

    // Floor top is at y = 860; a resting ball's center sits near 840.
    let ball = &sim.bodies()[1];
    assert!(
        (ball.position.y - 840.0).abs() < 2.0,
        "ball did not settle: y={}",
        ball.position.y
    );
    assert!(ball.velocity.length() < 1.0, "still moving: {:?}", ball.velocity);
}
