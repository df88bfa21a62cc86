//! Toy host loop: a ball bouncing on a static floor, with the host engine
//! stubbed out by a few lines of integration and overlap checking. The
//! reactor only ever sees lifecycle events, exactly as it would from a real
//! engine.

use glam::Vec2;
use thud::*;

const DT: f32 = 1.0 / 60.0;
const GRAVITY: Vec2 = Vec2::new(0.0, -9.8);
const BALL: BodyKey = 1;
const FLOOR: BodyKey = 2;

fn main() {
    let mut reactor = CollisionReactor::new(ReactorConfig {
        momentum_upper_threshold: 100.0,
    });

    reactor.on_body_created(
        BALL,
        ReactionConfig::new()
            .on_start(|ctx| {
                println!(
                    "ball hit {} at t={:.3}s, intensity={:.3}",
                    ctx.other.key,
                    ctx.timestamp,
                    ctx.intensity.unwrap_or(0.0)
                );
            })
            .on_end(|ctx| {
                println!("ball left {} at t={:.3}s", ctx.other.key, ctx.timestamp);
            }),
    );
    reactor.on_body_created(FLOOR, ReactionConfig::new());

    // Ball state owned by the "engine"
    let mut pos = Vec2::new(0.0, 10.0);
    let mut vel = Vec2::ZERO;
    let radius = 0.5;
    let floor_y = 0.0;
    let mut touching = false;

    for step in 0..600 {
        let t = step as f64 * DT as f64;
        let ball = BodyState {
            key: BALL,
            position: pos,
            velocity: vel,
            mass: 2.0,
        };
        let floor = BodyState {
            key: FLOOR,
            position: Vec2::new(0.0, floor_y),
            velocity: Vec2::ZERO,
            mass: f32::INFINITY,
        };

        // Snapshot pre-resolution velocities, then integrate and resolve.
        reactor.before_update(&[ball, floor]);
        vel += GRAVITY * DT;
        pos += vel * DT;
        let overlapping = pos.y - radius <= floor_y;
        if overlapping {
            pos.y = floor_y + radius;
            vel.y = -vel.y * 0.6;
        }

        let event = PairEvent {
            pairs: vec![CollisionPair { a: ball, b: floor }],
            timestamp: t,
        };
        match (touching, overlapping) {
            (false, true) => reactor.collision_start(&event),
            (true, true) => reactor.collision_active(&event),
            (true, false) => reactor.collision_end(&event),
            (false, false) => {}
        }
        touching = overlapping;
    }

    let s = reactor.stats();
    println!(
        "last step: pairs_seen={} skipped={} handlers_invoked={}",
        s.pairs_seen, s.pairs_skipped, s.handlers_invoked
    );
}
