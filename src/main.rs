//! Drift Rocks entry point
//!
//! Native builds run a headless session with a scripted pilot and print the
//! final HUD. The browser shell drives `GameHost` directly.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use drift_rocks::Tuning;
    use drift_rocks::platform::GameHost;
    use drift_rocks::sim::{GameEvent, GameStatus};

    #[derive(Parser)]
    #[command(name = "drift-rocks")]
    #[command(about = "Run a headless Drift Rocks session with a scripted pilot")]
    struct Args {
        /// RNG seed (defaults to a random one)
        #[arg(long)]
        seed: Option<u64>,
        /// Ticks to simulate (60 per second)
        #[arg(long, default_value_t = 3600)]
        ticks: u32,
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        #[arg(long, default_value_t = 600.0)]
        height: f32,
        /// JSON tuning overrides
        #[arg(long)]
        tuning: Option<PathBuf>,
    }

    /// Keys the pilot holds on a given tick: always firing, turning in
    /// sweeps, thrusting in short bursts
    fn pilot_keys(tick: u32) -> [(&'static str, bool); 4] {
        [
            (" ", true),
            ("ArrowLeft", tick % 90 < 30),
            ("ArrowRight", (45..60).contains(&(tick % 90))),
            ("ArrowUp", tick % 120 < 12),
        ]
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);

        let mut host = GameHost::new(seed, tuning);
        host.resize(args.width, args.height);
        anyhow::ensure!(
            host.start_game(),
            "viewport {}x{} is not usable",
            args.width,
            args.height
        );

        let mut line_vertices = 0;
        for tick in 0..args.ticks {
            for (key, held) in pilot_keys(tick) {
                if held {
                    host.key_down(key);
                } else {
                    host.key_up(key);
                }
            }

            for event in host.frame() {
                match event {
                    GameEvent::AsteroidDestroyed { size, points, .. } => {
                        log::info!("tick {tick}: {size:?} asteroid destroyed (+{points})")
                    }
                    GameEvent::LifeLost { remaining } => {
                        log::info!("tick {tick}: life lost, {remaining} left")
                    }
                    other => log::trace!("tick {tick}: {other:?}"),
                }
            }
            line_vertices += host.render().to_mesh().lines.len();

            if host.hud().status == GameStatus::GameOver {
                break;
            }
        }
        host.shutdown();

        log::debug!("Tessellated {line_vertices} line vertices in total");
        println!("{}", serde_json::to_string_pretty(&host.hud())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Drift Rocks (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser shell constructs `GameHost` itself
}
