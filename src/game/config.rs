// Game configuration context
//
// Built once at startup and passed by reference; nothing reads globals.

use std::path::PathBuf;

use glam::Vec2;

use super::characters::NpcKind;
use super::combat::CombatConfig;
use super::world::{DialogueZoneConfig, RegionConfig, RegionId};
use crate::engine::assets::ASSET_ROOT_ENV;
use crate::engine::game_loop::DEFAULT_TICK_RATE;

/// Where an NPC stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpcPlacement {
    pub kind: NpcKind,
    pub region: RegionId,
    pub position: Vec2,
}

/// Everything tunable about a play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window_title: String,
    /// Logical window size in pixels
    pub screen_size: (u32, u32),
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Directory holding the frame folders
    pub asset_root: PathBuf,

    pub regions: RegionConfig,
    pub dialogue_zone: DialogueZoneConfig,
    pub combat: CombatConfig,

    pub player_spawn: Vec2,
    /// Walking left stops once x would drop to this plus the player's speed
    pub player_min_x: f32,
    /// Walking right stops once x would reach this minus the player's speed
    pub player_max_x: f32,

    pub enemy_spawn: Vec2,
    /// Region the enemy guards
    pub enemy_home: RegionId,

    pub npcs: Vec<NpcPlacement>,
}

impl GameConfig {
    /// Defaults, with the asset root taken from the environment when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(root) = std::env::var_os(ASSET_ROOT_ENV) {
            config.asset_root = PathBuf::from(root);
        }
        config
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let dialogue_zone = DialogueZoneConfig::default();

        Self {
            window_title: "Flat World".to_string(),
            screen_size: (1012, 576),
            tick_rate: DEFAULT_TICK_RATE,
            asset_root: PathBuf::from("assets"),

            regions: RegionConfig::default(),
            combat: CombatConfig::default(),

            player_spawn: Vec2::new(450.0, 360.0),
            player_min_x: -200.0,
            player_max_x: 1100.0,

            enemy_spawn: Vec2::new(500.0, 255.0),
            enemy_home: dialogue_zone.host,

            npcs: vec![
                NpcPlacement {
                    kind: NpcKind::King,
                    region: 0,
                    position: Vec2::new(100.0, 285.0),
                },
                NpcPlacement {
                    kind: NpcKind::Barkeep,
                    region: dialogue_zone.interior,
                    position: Vec2::new(400.0, 310.0),
                },
            ],

            dialogue_zone,
        }
    }
}
