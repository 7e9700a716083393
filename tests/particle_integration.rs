//! Particle command integration tests.
//!
//! Drive a headless world through the fire, reload-config and restart-map
//! events and check the effect entities and output lines they produce.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test particle_integration
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec3;

use aberredparticles::components::avatar::{ActorId, Avatar};
use aberredparticles::components::particleeffect::{EffectActive, ParticleEffect};
use aberredparticles::components::worldposition::WorldPosition;
use aberredparticles::console::ConsoleCommand;
use aberredparticles::events::fire::FireEvent;
use aberredparticles::events::reloadconfig::ReloadConfigEvent;
use aberredparticles::events::restartmap::RestartMapEvent;
use aberredparticles::game::{kill_avatar, setup_world, spawn_avatar};
use aberredparticles::resources::configstore::{ConfigState, ConfigStore, save_to_file};
use aberredparticles::resources::output::{OutputChannel, OutputLine};
use aberredparticles::resources::particleconfig::ParticleConfig;
use aberredparticles::resources::precache::PrecacheManifest;

const EPSILON: f32 = 1e-3;
const EFFECT: &str = "particles/test_fx/burst.vpcf";
const PLAYER: ActorId = ActorId(1);

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(method: i32, debug: bool) -> (World, Receiver<OutputLine>) {
    let mut world = World::new();
    let store = ConfigStore::with_config(ParticleConfig::new(EFFECT, method, debug));
    let rx = setup_world(&mut world, store);
    (world, rx)
}

fn fire(world: &mut World, actor: Option<ActorId>) {
    world.trigger(FireEvent { actor });
    world.flush();
}

/// Positions of active effects, in no particular order.
fn effect_positions(world: &mut World) -> Vec<Vec3> {
    let mut query = world.query_filtered::<&WorldPosition, With<EffectActive>>();
    query.iter(world).map(|p| p.pos).collect()
}

fn effect_count(world: &mut World) -> usize {
    let mut query = world.query::<&ParticleEffect>();
    query.iter(world).count()
}

fn temp_config(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "aberredparticles-it-{}-{}.json",
        name,
        std::process::id()
    ))
}

// =============================================================================
// Fire
// =============================================================================

#[test]
fn fire_front_at_origin_spawns_one_active_effect() {
    let (mut world, _rx) = make_world(1, false);
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(0.0, 0.0, 0.0), Some(0.0));

    fire(&mut world, Some(PLAYER));

    assert_eq!(effect_positions(&mut world), vec![Vec3::new(100.0, 0.0, 0.0)]);
    let mut query = world.query::<&ParticleEffect>();
    let effect = query.single(&world).unwrap();
    assert_eq!(effect.effect_name, EFFECT);
}

#[test]
fn fire_counts_match_each_method() {
    for (method, expected) in [(1, 1), (2, 1), (3, 1), (4, 5), (5, 5)] {
        let (mut world, _rx) = make_world(method, false);
        spawn_avatar(&mut world, PLAYER, WorldPosition::new(10.0, 20.0, 30.0), Some(45.0));
        fire(&mut world, Some(PLAYER));
        assert_eq!(effect_count(&mut world), expected, "method {method}");
    }
}

#[test]
fn fire_circle_surrounds_avatar() {
    let (mut world, _rx) = make_world(4, false);
    let origin = Vec3::new(-64.0, 128.0, 16.0);
    spawn_avatar(&mut world, PLAYER, WorldPosition { pos: origin }, Some(10.0));

    fire(&mut world, Some(PLAYER));

    let positions = effect_positions(&mut world);
    assert_eq!(positions.len(), 5);
    for p in positions {
        let planar = ((p.x - origin.x).powi(2) + (p.y - origin.y).powi(2)).sqrt();
        assert!(approx_eq(planar, 100.0));
        assert!(approx_eq(p.z, origin.z));
    }
}

#[test]
fn fire_above_without_rotation_still_spawns() {
    let (mut world, _rx) = make_world(3, false);
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(1.0, 2.0, 3.0), None);

    fire(&mut world, Some(PLAYER));

    assert_eq!(effect_positions(&mut world), vec![Vec3::new(1.0, 2.0, 53.0)]);
}

#[test]
fn fire_line_without_rotation_spawns_nothing() {
    let (mut world, rx) = make_world(5, true);
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(0.0, 0.0, 0.0), None);

    fire(&mut world, Some(PLAYER));

    assert_eq!(effect_count(&mut world), 0);
    let lines: Vec<OutputLine> = rx.try_iter().collect();
    assert!(lines.iter().any(|l| l.text.contains("no pose available")));
}

#[test]
fn fire_rejects_absent_unknown_and_dead_actors() {
    let (mut world, _rx) = make_world(4, false);
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(0.0, 0.0, 0.0), Some(0.0));
    assert!(kill_avatar(&mut world, PLAYER));

    fire(&mut world, None);
    fire(&mut world, Some(ActorId(42)));
    fire(&mut world, Some(PLAYER));

    assert_eq!(effect_count(&mut world), 0);
}

#[test]
fn fire_avatar_without_position_spawns_nothing() {
    let (mut world, _rx) = make_world(2, false);
    world.spawn(Avatar::new(PLAYER));

    fire(&mut world, Some(PLAYER));

    assert_eq!(effect_count(&mut world), 0);
}

#[test]
fn fire_invalid_method_falls_back_to_front_and_reports() {
    let (mut world, rx) = make_world(9, true);
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(0.0, 0.0, 0.0), Some(90.0));

    fire(&mut world, Some(PLAYER));

    let positions = effect_positions(&mut world);
    assert_eq!(positions.len(), 1);
    assert!(approx_eq(positions[0].x, 0.0));
    assert!(approx_eq(positions[0].y, 100.0));

    let lines: Vec<OutputLine> = rx.try_iter().collect();
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Chat(PLAYER)
            && l.text == "Invalid spawn method in config, using in-front!"
    }));
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Chat(PLAYER) && l.text == "Particle spawned!"
    }));
}

#[test]
fn fire_with_debug_off_prints_nothing() {
    let (mut world, rx) = make_world(7, false);
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(0.0, 0.0, 0.0), Some(0.0));

    fire(&mut world, Some(PLAYER));
    fire(&mut world, None);

    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn fire_fails_per_position_when_effect_not_precached() {
    let (mut world, rx) = make_world(4, true);
    world.resource_mut::<PrecacheManifest>().clear();
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(0.0, 0.0, 0.0), Some(0.0));

    fire(&mut world, Some(PLAYER));

    assert_eq!(effect_count(&mut world), 0);
    let lines: Vec<OutputLine> = rx.try_iter().collect();
    let failures = lines
        .iter()
        .filter(|l| l.channel == OutputChannel::Console && l.text.contains("was not precached"))
        .count();
    assert_eq!(failures, 5);
    let chats: Vec<&OutputLine> = lines
        .iter()
        .filter(|l| l.channel == OutputChannel::Chat(PLAYER))
        .collect();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].text, "Spawned 0/5 particles, 5 failed!");
}

// =============================================================================
// Reload and map restart
// =============================================================================

#[test]
fn reload_valid_file_replaces_config() {
    let path = temp_config("valid");
    save_to_file(&path, &ParticleConfig::new(EFFECT, 1, true)).unwrap();

    let mut world = World::new();
    let rx = setup_world(&mut world, ConfigStore::bootstrap(&path));

    std::fs::write(
        &path,
        r#"{"effectIdentifier":"x","spawnMethod":3,"debugEnabled":false}"#,
    )
    .unwrap();
    world.trigger(ReloadConfigEvent {
        actor: Some(PLAYER),
    });
    world.flush();

    let store = world.resource::<ConfigStore>();
    assert_eq!(*store.current(), ParticleConfig::new("x", 3, false));
    assert_eq!(store.state(), ConfigState::Loaded);

    let lines: Vec<OutputLine> = rx.try_iter().collect();
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Console && l.text == "Reloaded: Particle=x, Method=3"
    }));
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Chat(PLAYER)
            && l.text == "Particle config reloaded! Restart map for new particle file."
    }));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reload_missing_file_keeps_previous_config() {
    let path = temp_config("missing");
    save_to_file(&path, &ParticleConfig::new(EFFECT, 2, true)).unwrap();

    let mut world = World::new();
    let rx = setup_world(&mut world, ConfigStore::bootstrap(&path));
    let before = (*world.resource::<ConfigStore>().current()).clone();

    std::fs::remove_file(&path).unwrap();
    world.trigger(ReloadConfigEvent {
        actor: Some(PLAYER),
    });
    world.flush();

    assert_eq!(*world.resource::<ConfigStore>().current(), before);
    let lines: Vec<OutputLine> = rx.try_iter().collect();
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Console && l.text.starts_with("ERROR: Reload failed - config file not found")
    }));
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Chat(PLAYER) && l.text == "Config file not found!"
    }));
}

#[test]
fn reload_malformed_file_keeps_previous_config() {
    let path = temp_config("malformed");
    save_to_file(&path, &ParticleConfig::new(EFFECT, 4, false)).unwrap();

    let mut world = World::new();
    let rx = setup_world(&mut world, ConfigStore::bootstrap(&path));

    std::fs::write(&path, "{\"spawnMethod\": 2,").unwrap();
    world.trigger(ReloadConfigEvent {
        actor: Some(PLAYER),
    });
    world.flush();

    assert_eq!(
        *world.resource::<ConfigStore>().current(),
        ParticleConfig::new(EFFECT, 4, false)
    );
    // Console always hears about it; chat only in debug mode.
    let lines: Vec<OutputLine> = rx.try_iter().collect();
    assert!(lines.iter().any(|l| {
        l.channel == OutputChannel::Console && l.text.contains("config invalid")
    }));
    assert!(!lines.iter().any(|l| l.channel == OutputChannel::Chat(PLAYER)));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reloaded_effect_needs_map_restart() {
    let path = temp_config("restart");
    save_to_file(&path, &ParticleConfig::new(EFFECT, 2, false)).unwrap();

    let mut world = World::new();
    let _rx = setup_world(&mut world, ConfigStore::bootstrap(&path));
    spawn_avatar(&mut world, PLAYER, WorldPosition::new(5.0, 5.0, 5.0), Some(0.0));

    fire(&mut world, Some(PLAYER));
    assert_eq!(effect_count(&mut world), 1);

    save_to_file(&path, &ParticleConfig::new("particles/new_fx.vpcf", 2, false)).unwrap();
    world.trigger(ReloadConfigEvent { actor: None });
    world.flush();

    // New effect is not precached yet: nothing new spawns.
    fire(&mut world, Some(PLAYER));
    assert_eq!(effect_count(&mut world), 1);

    world.trigger(RestartMapEvent {});
    world.flush();
    assert_eq!(effect_count(&mut world), 0);
    assert!(world.resource::<PrecacheManifest>().contains("particles/new_fx.vpcf"));

    fire(&mut world, Some(PLAYER));
    let mut query = world.query::<&ParticleEffect>();
    let names: Vec<String> = query.iter(&world).map(|e| e.effect_name.clone()).collect();
    assert_eq!(names, vec!["particles/new_fx.vpcf".to_string()]);

    let _ = std::fs::remove_file(&path);
}

// =============================================================================
// Console
// =============================================================================

#[test]
fn console_session_drives_world() {
    let (mut world, _rx) = make_world(5, false);

    for line in ["avatar 1 0 0 0 0", "fire 1", "kill 1", "fire 1"] {
        let cmd = ConsoleCommand::parse(line).unwrap().unwrap();
        assert!(cmd.apply(&mut world));
    }

    let mut positions = effect_positions(&mut world);
    positions.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(positions.len(), 5);
    for (i, p) in positions.iter().enumerate() {
        assert!(approx_eq(p.x, 20.0 * (i as f32 + 1.0)));
        assert!(approx_eq(p.y, 0.0));
    }

    let quit = ConsoleCommand::parse("quit").unwrap().unwrap();
    assert!(!quit.apply(&mut world));
}
