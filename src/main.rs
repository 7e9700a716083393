//! Aberred Particles headless server.
//!
//! Runs an in-process world where players' avatars can be spawned and
//! particle commands issued from the server console (stdin).
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./particle_config.json
//! ```
//!
//! Then type commands such as:
//!
//! ```text
//! avatar 1 0 0 0 90
//! fire 1
//! reload-config 1
//! restart-map
//! quit
//! ```

use std::io::BufRead;
use std::path::PathBuf;

use aberredparticles::console::ConsoleCommand;
use aberredparticles::game::setup_world;
use aberredparticles::resources::configstore::ConfigStore;
use aberredparticles::resources::particleconfig::DEFAULT_CONFIG_PATH;
use bevy_ecs::prelude::*;
use clap::Parser;

/// Aberred Particles: particle spawning around player avatars.
#[derive(Parser)]
#[command(version, about = "Spawn particle patterns around avatars, driven by a hot-reloadable config.")]
struct Cli {
    /// Path of the particle config file. Created with defaults if missing.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let store = ConfigStore::bootstrap(&cli.config);
    let mut world = World::new();
    let rx = setup_world(&mut world, store);
    log::info!("Particle server ready, config at {}", cli.config.display());

    // Console and chat lines are printed off the world thread.
    let printer = std::thread::spawn(move || {
        for line in rx.iter() {
            println!("{}", line);
        }
    });

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read console input: {}", e);
                break;
            }
        };
        match ConsoleCommand::parse(&line) {
            Ok(Some(cmd)) => {
                if !cmd.apply(&mut world) {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    // Dropping the world drops the output sender and ends the printer.
    drop(world);
    let _ = printer.join();
    log::info!("Particle server stopped");
}
