//! Headless runner for the arcade simulations.
//!
//! Picks a game, drives it for a number of ticks with a scripted
//! autopilot, and logs the outcome. With `--realtime` the ticks are paced
//! against the wall clock through a [`TickAccumulator`]; otherwise the
//! simulation runs flat out.

use std::thread;
use std::time::{Duration, Instant};

use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use log::info;

use arcadia::components::InputState;
use arcadia::lander::{LanderOutcome, LanderPlugin};
use arcadia::logging;
use arcadia::platformer::{PlatformerPlugin, Scene};
use arcadia::pong::{MatchState, PongConfig, PongPlugin};
use arcadia::time::TickAccumulator;
use arcadia::FIXED_TIMESTEP;

/// Which mini-game to simulate.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    /// Tile platformer with three levels.
    Platformer,
    /// Pong court until one side scores.
    Pong,
    /// Lunar descent onto platforms between lava.
    Lander,
}

/// Deterministic arcade mini-game simulations
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mini-game to run
    #[arg(value_enum)]
    game: Game,

    /// Maximum number of simulation ticks
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Pong only: the right paddle steers itself
    #[arg(long)]
    single_player: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut app = App::new();
    match args.game {
        Game::Platformer => {
            app.add_plugins(PlatformerPlugin);
        }
        Game::Pong => {
            app.add_plugins(PongPlugin);
            app.insert_resource(PongConfig {
                single_player: args.single_player,
            });
        }
        Game::Lander => {
            app.add_plugins(LanderPlugin);
        }
    }

    if args.realtime {
        run_realtime(&mut app, args.game, args.ticks);
    } else {
        for tick in 0..args.ticks {
            run_tick(&mut app, args.game, tick);
        }
    }

    report_outcome(&app, args.game);
    Ok(())
}

/// Paces the simulation so ticks land on the fixed-timestep schedule.
fn run_realtime(app: &mut App, game: Game, max_ticks: u32) {
    let mut accumulator = TickAccumulator::new();
    let mut last_frame = Instant::now();
    let mut tick = 0;
    while tick < max_ticks {
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        for _ in 0..accumulator.advance(delta) {
            if tick >= max_ticks {
                break;
            }
            run_tick(app, game, tick);
            tick += 1;
        }
        thread::sleep(Duration::from_secs_f32(FIXED_TIMESTEP / 4.0));
    }
}

fn run_tick(app: &mut App, game: Game, tick: u32) {
    let input = match game {
        Game::Platformer => platformer_autopilot(tick),
        Game::Pong => pong_autopilot(tick),
        Game::Lander => lander_autopilot(tick),
    };
    app.insert_resource(input);
    app.update();
}

/// Presses start, then walks right and hops periodically.
fn platformer_autopilot(tick: u32) -> InputState {
    InputState {
        start: tick == 0,
        right: tick > 0,
        jump: tick > 0 && tick % 45 == 0,
        ..InputState::default()
    }
}

/// Waggles the left paddle; the right one is either idle or automatic.
fn pong_autopilot(tick: u32) -> InputState {
    let phase = (tick / 60) % 2;
    InputState {
        p1_axis: if phase == 0 { 1.0 } else { -1.0 },
        ..InputState::default()
    }
}

/// Free-falls briefly, then brakes the descent with thrust.
fn lander_autopilot(tick: u32) -> InputState {
    InputState {
        up: tick > 120 && tick % 2 == 0,
        left: tick > 60 && tick < 180,
        ..InputState::default()
    }
}

fn report_outcome(app: &App, game: Game) {
    match game {
        Game::Platformer => {
            let scene = app.world().resource::<Scene>();
            info!("platformer finished in scene {scene:?}");
        }
        Game::Pong => {
            let state = app.world().resource::<MatchState>();
            match state.winner {
                Some(side) => info!("pong finished, {side:?} side wins"),
                None => info!("pong rally still live"),
            }
        }
        Game::Lander => {
            let outcome = app.world().resource::<LanderOutcome>();
            match outcome.0 {
                Some(result) => info!("lander finished: {result:?}"),
                None => info!("lander still airborne"),
            }
        }
    }
}
