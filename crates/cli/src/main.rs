use anyhow::Result;
use clap::{Parser, Subcommand};
use polyarena::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless arena simulation runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run a simulation and optionally write a JSON report
    Run {
        /// Sampled shapes in addition to the player and the sticky peg
        #[arg(long, default_value_t = 5)]
        objects: usize,
        #[arg(long, default_value_t = 300)]
        ticks: u64,
        /// Outline sampler seed
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        /// Arena half-extent; walls sit at ±size
        #[arg(long, default_value_t = 60.0)]
        size: f64,
        /// Write the final JSON report here
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            objects,
            ticks,
            seed,
            size,
            report,
        } => run(objects, ticks, seed, size, report),
    }
}

#[derive(Serialize)]
struct ObjectReport {
    id: u32,
    score: u32,
    sticky: bool,
    center: [f64; 2],
    angle: f64,
}

#[derive(Serialize)]
struct Report {
    ticks: u64,
    contacts: u64,
    effective: u64,
    out_of_bounds: u64,
    objects: Vec<ObjectReport>,
}

/// Player triangle at the left wall, a sticky peg in the middle, and sampled
/// shapes on a ring around it, all drifting inward.
fn build_world(objects: usize, seed: u64, size: f64) -> World {
    let mut world = World::new(Bounds {
        left: -size,
        right: size,
        bot: -size,
        top: size,
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
        p.move_to(-size / 2.0, 0.0);
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

    for k in 0..objects {
        let outline = draw_outline_radial(
            RadialCfg {
                base_radius: 5.0,
                ..RadialCfg::default()
            },
            ReplayToken {
                seed,
                index: k as u64,
            },
        );
        let id = world.spawn(outline, DrawMode::Scoring);
        if let Some(o) = world.get_mut(id) {
            let th = (k as f64) * std::f64::consts::TAU / (objects.max(1) as f64);
            o.move_to(0.6 * size * th.cos(), 0.6 * size * th.sin());
            o.set_velocity(-2.0 * th.cos(), -2.0 * th.sin());
        }
    }
    world
}

fn run(objects: usize, ticks: u64, seed: u64, size: f64, report: Option<String>) -> Result<()> {
    tracing::info!(objects, ticks, seed, size, "run");
    let mut world = build_world(objects, seed, size);

    let mut contacts = 0u64;
    let mut effective = 0u64;
    let mut out_of_bounds = 0u64;
    for _ in 0..ticks {
        let s = world.tick();
        contacts += u64::from(s.contacts);
        effective += u64::from(s.effective);
        out_of_bounds += u64::from(s.out_of_bounds);
        if s.contacts > 0 {
            tracing::debug!(
                now = s.now,
                contacts = s.contacts,
                effective = s.effective,
                "tick"
            );
        }
    }

    for o in world.objects() {
        tracing::info!(id = o.id(), score = o.score(), sticky = o.is_sticky(), "final");
    }
    tracing::info!(contacts, effective, out_of_bounds, "totals");

    if let Some(out) = report {
        let body = Report {
            ticks,
            contacts,
            effective,
            out_of_bounds,
            objects: world
                .objects()
                .iter()
                .map(|o| ObjectReport {
                    id: o.id(),
                    score: o.score(),
                    sticky: o.is_sticky(),
                    center: [o.center().x, o.center().y],
                    angle: o.angle(),
                })
                .collect(),
        };
        let out_path = Path::new(&out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out_path, serde_json::to_string_pretty(&body)?)?;
        tracing::info!(path = %out, "report_written");
    }
    Ok(())
}
