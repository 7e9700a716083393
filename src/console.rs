//! Server console commands.
//!
//! One command per line, whitespace separated:
//!
//! ```text
//! avatar <id> <x> <y> <z> [yaw]   spawn or respawn a player's avatar
//! kill <id>                       mark a player's avatar dead
//! fire [id]                       spawn the configured particle pattern
//! reload-config [id]              re-read the config file
//! restart-map                     clear effects and precache again
//! quit                            stop the server loop
//! ```
//!
//! `fire` and `reload-config` without an id behave like commands typed on the
//! server console: there is no player to reply to.

use bevy_ecs::prelude::*;

use crate::components::avatar::ActorId;
use crate::components::worldposition::WorldPosition;
use crate::events::fire::FireEvent;
use crate::events::reloadconfig::ReloadConfigEvent;
use crate::events::restartmap::RestartMapEvent;
use crate::game::{kill_avatar, spawn_avatar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Avatar {
        actor: ActorId,
        pos: WorldPosition,
        yaw: Option<f32>,
    },
    Kill {
        actor: ActorId,
    },
    Fire {
        actor: Option<ActorId>,
    },
    ReloadConfig {
        actor: Option<ActorId>,
    },
    RestartMap,
    Quit,
}

fn parse_actor(word: &str) -> Result<ActorId, String> {
    word.trim_start_matches('#')
        .parse::<u32>()
        .map(ActorId)
        .map_err(|_| format!("invalid player id '{}'", word))
}

fn parse_float(word: &str) -> Result<f32, String> {
    word.parse::<f32>()
        .map_err(|_| format!("invalid number '{}'", word))
}

impl ConsoleCommand {
    /// Parse one console line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<ConsoleCommand>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };

        let optional_actor = |args: &[&str]| -> Result<Option<ActorId>, String> {
            match args {
                [] => Ok(None),
                [id] => parse_actor(id).map(Some),
                _ => Err(format!("usage: {} [id]", name)),
            }
        };

        let cmd = match name {
            "avatar" => match args {
                [id, x, y, z, rest @ ..] if rest.len() <= 1 => ConsoleCommand::Avatar {
                    actor: parse_actor(id)?,
                    pos: WorldPosition::new(parse_float(x)?, parse_float(y)?, parse_float(z)?),
                    yaw: rest.first().map(|w| parse_float(w)).transpose()?,
                },
                _ => return Err("usage: avatar <id> <x> <y> <z> [yaw]".to_string()),
            },
            "kill" => match args {
                [id] => ConsoleCommand::Kill {
                    actor: parse_actor(id)?,
                },
                _ => return Err("usage: kill <id>".to_string()),
            },
            "fire" => ConsoleCommand::Fire {
                actor: optional_actor(args)?,
            },
            "reload-config" => ConsoleCommand::ReloadConfig {
                actor: optional_actor(args)?,
            },
            "restart-map" => ConsoleCommand::RestartMap,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => return Err(format!("unknown command '{}'", other)),
        };
        Ok(Some(cmd))
    }

    /// Run the command against `world`. Returns `false` for [`ConsoleCommand::Quit`].
    pub fn apply(self, world: &mut World) -> bool {
        match self {
            ConsoleCommand::Avatar { actor, pos, yaw } => {
                spawn_avatar(world, actor, pos, yaw);
            }
            ConsoleCommand::Kill { actor } => {
                if !kill_avatar(world, actor) {
                    log::warn!("No avatar for player {}", actor);
                }
            }
            ConsoleCommand::Fire { actor } => world.trigger(FireEvent { actor }),
            ConsoleCommand::ReloadConfig { actor } => world.trigger(ReloadConfigEvent { actor }),
            ConsoleCommand::RestartMap => world.trigger(RestartMapEvent {}),
            ConsoleCommand::Quit => return false,
        }
        world.flush();
        true
    }
}
