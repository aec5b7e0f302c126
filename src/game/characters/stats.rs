// Actor stats - fixed per actor kind

use glam::Vec2;

/// Fixed properties of one kind of actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorStats {
    /// Horizontal movement per tick (pixels)
    pub speed: f32,
    /// Starting health
    pub max_health: i32,
    /// Hitbox and sprite size (pixels)
    pub size: Vec2,
}

/// The player: quick, fragile
pub const PLAYER_STATS: ActorStats = ActorStats {
    speed: 5.0,
    max_health: 15,
    size: Vec2::new(210.0, 210.0),
};

/// The temple demon: slow, tough, hits on contact
pub const ENEMY_STATS: ActorStats = ActorStats {
    speed: 2.0,
    max_health: 100,
    size: Vec2::new(350.0, 280.0),
};

/// The king in the castle
pub const KING_STATS: ActorStats = ActorStats {
    speed: 0.0,
    max_health: 1,
    size: Vec2::new(370.0, 370.0),
};

/// The tavern barkeeper
pub const BARKEEP_STATS: ActorStats = ActorStats {
    speed: 0.0,
    max_health: 1,
    size: Vec2::new(128.0, 128.0),
};

impl Default for ActorStats {
    fn default() -> Self {
        PLAYER_STATS
    }
}

impl ActorStats {
    /// Frame size in whole pixels, for asset scaling
    pub fn frame_size(&self) -> (u32, u32) {
        (self.size.x.round() as u32, self.size.y.round() as u32)
    }
}
