// Play session: the fixed-order simulation tick and its draw output

use std::sync::Arc;

use glam::Vec2;
use log::{info, trace};

use super::characters::stats::{ENEMY_STATS, PLAYER_STATS};
use super::characters::{
    Actor, ActorCatalog, ActorState, Enemy, Facing, Npc, NpcKind, PlayerState,
};
use super::combat::{CombatResolver, EnemyAction};
use super::config::GameConfig;
use super::sprites::{ActorSprites, FrameTable};
use super::world::{
    DialogueDirector, QuestStage, RegionId, RegionTransitionController, ZoneChange,
};
use crate::engine::assets::FrameHandle;
use crate::engine::input::TickInput;

/// How the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    /// The enemy is dead
    Victory,
    /// The player is dead
    Defeat,
}

/// One sprite to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub frame: FrameHandle,
    /// Top-left corner in screen pixels
    pub position: Vec2,
}

/// All mutable game state
#[derive(Debug)]
pub struct GameSession {
    player_min_x: f32,
    player_max_x: f32,
    combat: CombatResolver,
    regions: RegionTransitionController,
    dialogue: DialogueDirector,
    player: Actor<PlayerState>,
    enemy: Enemy,
    npcs: Vec<Npc>,
    outcome: Outcome,
    tick_count: u64,
}

impl GameSession {
    pub fn new(config: &GameConfig, catalog: &ActorCatalog) -> Self {
        let player = Actor::new(
            "player",
            PLAYER_STATS,
            Arc::clone(&catalog.player),
            config.player_spawn,
            Facing::Left,
        );

        let enemy = Enemy::new(
            Actor::new(
                "demon",
                ENEMY_STATS,
                Arc::clone(&catalog.enemy),
                config.enemy_spawn,
                Facing::Left,
            ),
            config.enemy_home,
        );

        let npcs = config
            .npcs
            .iter()
            .map(|placement| {
                let kind = placement.kind;
                let actor = Actor::new(
                    kind.name(),
                    kind.stats(),
                    Arc::clone(catalog.npc(kind)),
                    placement.position,
                    Facing::Right,
                );
                Npc::new(actor, kind, placement.region)
            })
            .collect();

        // Conversation ids are positions in this list
        let conversations = NpcKind::ALL.iter().map(NpcKind::conversation).collect();

        Self {
            player_min_x: config.player_min_x,
            player_max_x: config.player_max_x,
            combat: CombatResolver::new(config.combat),
            regions: RegionTransitionController::new(
                config.regions.clone(),
                config.dialogue_zone.clone(),
            ),
            dialogue: DialogueDirector::new(conversations),
            player,
            enemy,
            npcs,
            outcome: Outcome::InProgress,
            tick_count: 0,
        }
    }

    /// Run one simulation step.
    ///
    /// Order matters: player and combat, then the enemy, then animations,
    /// then region edges against the moved hitbox.
    pub fn tick(&mut self, input: &TickInput) -> Outcome {
        self.tick_count += 1;

        self.update_player(input);
        self.update_enemy();
        self.open_conversations();
        self.advance_animations();
        self.update_region();

        self.outcome
    }

    fn update_player(&mut self, input: &TickInput) {
        if self.outcome == Outcome::Victory {
            self.player.request_transition(PlayerState::Idle);
            return;
        }

        if !self.player.is_alive() {
            return;
        }

        if self.dialogue.is_talking() {
            self.player.request_transition(PlayerState::Idle);
            if input.advance_dialogue {
                if let Some(stage) = self.dialogue.advance() {
                    self.on_quest_stage(stage);
                }
            }
            return;
        }

        if input.interact {
            self.use_doorway();
        }

        if input.attack {
            self.player_attack();
            return;
        }

        self.move_player(input);
    }

    fn use_doorway(&mut self) {
        match self.regions.toggle_dialogue_zone(self.player.hitbox()) {
            Some(ZoneChange::Entered { y, .. }) => self.player.set_y(y),
            Some(ZoneChange::Exited { position, .. }) => self.player.set_position(position),
            None => {}
        }
    }

    fn player_attack(&mut self) {
        let region = self.regions.current();
        let target = if self.enemy.is_present(region) {
            Some(&mut self.enemy)
        } else {
            None
        };

        let outcome = self.combat.player_attack(&mut self.player, target);
        if outcome.enemy_defeated {
            self.outcome = Outcome::Victory;
            self.dialogue.set_stage(QuestStage::Complete);
            info!("Victory after {} ticks", self.tick_count);
        }
    }

    fn move_player(&mut self, input: &TickInput) {
        let speed = self.player.stats.speed;
        let x = self.player.position().x;

        let direction = if input.move_left && x > self.player_min_x + speed {
            Some(Facing::Left)
        } else if input.move_right && x < self.player_max_x - speed {
            Some(Facing::Right)
        } else {
            None
        };

        match direction {
            Some(facing) => {
                if self.player.request_transition(PlayerState::Walk) {
                    self.player.facing = facing;
                    self.player.shift_x(match facing {
                        Facing::Left => -speed,
                        Facing::Right => speed,
                    });
                }
            }
            None => {
                self.player.request_transition(PlayerState::Idle);
            }
        }
    }

    fn on_quest_stage(&mut self, stage: QuestStage) {
        if stage == QuestStage::SlayDemon && !self.enemy.activated {
            self.enemy.activated = true;
            info!("{} awakens", self.enemy.actor.name);
        }
    }

    fn update_enemy(&mut self) {
        if !self.enemy.is_present(self.regions.current()) {
            return;
        }

        let action = self.combat.enemy_turn(&mut self.enemy, &mut self.player);
        if let EnemyAction::Attack {
            player_defeated: true,
            ..
        } = action
        {
            self.outcome = Outcome::Defeat;
            info!("Defeat after {} ticks", self.tick_count);
        }
    }

    /// Start the conversation of an NPC the player is touching
    fn open_conversations(&mut self) {
        if self.dialogue.is_talking() || !self.player.is_alive() {
            return;
        }

        let region = self.regions.current();
        let hitbox = self.player.hitbox();
        for npc in self.npcs.iter().filter(|npc| npc.region == region) {
            if npc.actor.hitbox().overlaps(&hitbox)
                && self.dialogue.try_open(npc.kind.conversation_id())
            {
                break;
            }
        }
    }

    fn advance_animations(&mut self) {
        let region = self.regions.current();

        self.player.tick();
        if self.enemy.is_present(region) {
            self.enemy.actor.tick();
        }
        for npc in self.npcs.iter_mut().filter(|npc| npc.region == region) {
            npc.actor.tick();
        }
    }

    fn update_region(&mut self) {
        if let Some(change) = self.regions.update(self.player.hitbox()) {
            self.player.set_x(change.teleport_x);
        }
    }

    /// Sprites for everything visible in the current region, back to front
    pub fn draw_list(&self, sprites: &ActorSprites) -> Vec<SpriteDraw> {
        let region = self.regions.current();
        let mut draws = Vec::with_capacity(self.npcs.len() + 2);

        for npc in self.npcs.iter().filter(|npc| npc.region == region) {
            draws.extend(Self::sprite(&npc.actor, sprites.npc(npc.kind)));
        }
        if self.enemy.is_present(region) {
            draws.extend(Self::sprite(&self.enemy.actor, &sprites.enemy));
        }
        draws.extend(Self::sprite(&self.player, &sprites.player));

        trace!("Tick {}: {} sprites", self.tick_count, draws.len());
        draws
    }

    fn sprite<S: ActorState>(actor: &Actor<S>, table: &FrameTable<S>) -> Option<SpriteDraw> {
        table
            .frame(actor.state(), actor.facing, actor.step())
            .map(|&frame| SpriteDraw {
                frame,
                position: actor.position(),
            })
    }

    pub fn player(&self) -> &Actor<PlayerState> {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn dialogue(&self) -> &DialogueDirector {
        &self.dialogue
    }

    pub fn regions(&self) -> &RegionTransitionController {
        &self.regions
    }

    pub fn current_region(&self) -> RegionId {
        self.regions.current()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
