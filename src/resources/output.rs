//! Bridge carrying console and chat lines out of the ECS world.
//!
//! Use [`setup_output`] once during initialization. It inserts the
//! [`OutputBridge`] resource (the sending half) and hands back the receiving
//! half so the host loop can print or forward lines. Sending never blocks.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::dispatcher::Feedback;
use crate::components::avatar::ActorId;

/// Prefix of every console line.
pub const CONSOLE_PREFIX: &str = "[ParticleSpawner]";

/// Destination of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    /// Operator-facing server console.
    Console,
    /// Chat of one player.
    Chat(ActorId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub channel: OutputChannel,
    pub text: String,
}

impl std::fmt::Display for OutputLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.channel {
            OutputChannel::Console => write!(f, "{} {}", CONSOLE_PREFIX, self.text),
            OutputChannel::Chat(actor) => write!(f, "[chat -> {}] {}", actor, self.text),
        }
    }
}

/// Sending half of the output channel.
#[derive(Resource, Clone)]
pub struct OutputBridge {
    pub tx: Sender<OutputLine>,
}

impl OutputBridge {
    /// Create a bridge and its receiver without touching a world.
    pub fn new() -> (Self, Receiver<OutputLine>) {
        let (tx, rx) = unbounded::<OutputLine>();
        (Self { tx }, rx)
    }

    fn send(&self, channel: OutputChannel, text: &str) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.tx.send(OutputLine {
            channel,
            text: text.to_string(),
        });
    }
}

impl Feedback for OutputBridge {
    fn console(&mut self, text: &str) {
        self.send(OutputChannel::Console, text);
    }

    fn chat(&mut self, actor: ActorId, text: &str) {
        self.send(OutputChannel::Chat(actor), text);
    }
}

/// Insert [`OutputBridge`] into the world and return the receiving half.
pub fn setup_output(world: &mut World) -> Receiver<OutputLine> {
    let (bridge, rx) = OutputBridge::new();
    world.insert_resource(bridge);
    rx
}
