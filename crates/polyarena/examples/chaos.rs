//! Watch scores evolve in a tiny headless arena.
//!
//! Usage:
//!   cargo run -p polyarena --example chaos -- [ticks]
//!
//! Spawns a player triangle, a sticky peg, and a handful of sampled shapes,
//! then prints the score table every 25 ticks.

use polyarena::prelude::*;

fn main() {
    let ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);

    let mut world = World::new(Bounds {
        left: -60.0,
        right: 60.0,
        bot: -60.0,
        top: 60.0,
    });

    let player = world.spawn(
        vec![
            Vec2::new(0.0, 4.0),
            Vec2::new(-3.0, -2.0),
            Vec2::new(3.0, -2.0),
        ],
        DrawMode::Scoring,
    );
    if let Some(p) = world.get_mut(player) {
        p.move_to(-30.0, 0.0);
        p.set_velocity(2.0, 1.0);
    }

    let peg = world.spawn(
        vec![
            Vec2::new(-4.0, -4.0),
            Vec2::new(4.0, -4.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(-4.0, 4.0),
        ],
        DrawMode::Decorative,
    );
    if let Some(p) = world.get_mut(peg) {
        p.stick(3.0, 0.0);
    }

    for k in 0..5u64 {
        let outline: Vec<Vec2> = draw_outline_radial(
            RadialCfg {
                base_radius: 5.0,
                ..RadialCfg::default()
            },
            ReplayToken { seed: 7, index: k },
        );
        let id = world.spawn(outline, DrawMode::Scoring);
        if let Some(o) = world.get_mut(id) {
            let th = (k as f64) * std::f64::consts::TAU / 5.0;
            o.move_to(35.0 * th.cos(), 35.0 * th.sin());
            o.set_velocity(-2.0 * th.cos(), -2.0 * th.sin());
        }
    }

    for t in 1..=ticks {
        let s = world.tick();
        if t % 25 == 0 || s.effective > 0 {
            let scores: Vec<String> = world
                .objects()
                .iter()
                .map(|o| format!("#{}:{}", o.id(), o.score()))
                .collect();
            println!("tick {t:4}  contacts={} {}", s.contacts, scores.join(" "));
        }
    }
}
