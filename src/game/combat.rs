// Melee combat: player swings, enemy contact damage and enemy pursuit

use log::{debug, info};

use super::characters::{Actor, Enemy, EnemyState, Facing, PlayerState};

/// Combat tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatConfig {
    /// Damage dealt by each landed player swing
    pub hit_damage: i32,
    /// Damage dealt by each enemy contact hit
    pub contact_damage: i32,
    /// Horizontal distance at which the enemy attacks
    pub melee_range: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hit_damage: 35,
            contact_damage: 1,
            melee_range: 30.0,
        }
    }
}

/// Result of one attack press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Combo stage entered, if the swing advanced the chain
    pub stage: Option<PlayerState>,
    /// The swing connected
    pub hit: bool,
    /// The swing finished the enemy off
    pub enemy_defeated: bool,
}

/// What the enemy did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Dead, does nothing
    Dead,
    /// In range and attacking
    Attack { landed: bool, player_defeated: bool },
    /// Walking toward the player
    Chase(Facing),
    /// Standing still
    Idle,
}

/// Decides hits, damage and deaths between the player and the enemy
#[derive(Debug, Clone, Default)]
pub struct CombatResolver {
    config: CombatConfig,
}

impl CombatResolver {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Handle an attack press.
    ///
    /// Only Idle, Attack1 and Attack2 react. The swing lands whenever the
    /// hitboxes overlap, whether or not the combo stage could advance.
    pub fn player_attack(
        &self,
        player: &mut Actor<PlayerState>,
        target: Option<&mut Enemy>,
    ) -> AttackOutcome {
        let Some(next) = player.state().next_attack() else {
            return AttackOutcome::default();
        };

        let mut outcome = AttackOutcome::default();

        if let Some(enemy) = target {
            if enemy.actor.is_alive() && player.hitbox().overlaps(&enemy.actor.hitbox()) {
                outcome.hit = true;
                outcome.enemy_defeated = self.strike_enemy(enemy);
            }
        }

        if player.request_transition(next) {
            outcome.stage = Some(next);
        } else {
            debug!("Swing {:?} denied in {:?}", next, player.state());
        }

        outcome
    }

    fn strike_enemy(&self, enemy: &mut Enemy) -> bool {
        let remaining = enemy.actor.take_damage(self.config.hit_damage);
        enemy.actor.pulse.trigger();
        debug!("{} hit, {} health left", enemy.actor.name, remaining);

        if enemy.actor.is_depleted() {
            enemy.actor.force_transition(EnemyState::Dead);
            enemy.defeated = true;
            info!("{} defeated", enemy.actor.name);
            return true;
        }
        false
    }

    /// Run the enemy for one tick: attack in range, otherwise chase or idle
    pub fn enemy_turn(&self, enemy: &mut Enemy, player: &mut Actor<PlayerState>) -> EnemyAction {
        if enemy.defeated || !enemy.actor.is_alive() {
            return EnemyAction::Dead;
        }

        let enemy_x = enemy.actor.position().x;
        let player_x = player.position().x;

        if (player_x - enemy_x).abs() <= self.config.melee_range
            && Self::is_facing(enemy.actor.facing, enemy_x, player_x)
        {
            if !player.is_alive() {
                enemy.actor.request_transition(EnemyState::Idle);
                return EnemyAction::Idle;
            }

            enemy.actor.force_transition(EnemyState::Attack);
            return self.contact_hit(player);
        }

        if player.is_alive() && enemy.actor.hitbox().overlaps(&player.hitbox()) {
            if let Some(direction) = Facing::toward(enemy_x, player_x) {
                if enemy.actor.request_transition(EnemyState::Walk) {
                    enemy.actor.facing = direction;
                    let speed = enemy.actor.stats.speed;
                    enemy.actor.shift_x(match direction {
                        Facing::Left => -speed,
                        Facing::Right => speed,
                    });
                }
                return EnemyAction::Chase(direction);
            }
        }

        enemy.actor.request_transition(EnemyState::Idle);
        EnemyAction::Idle
    }

    /// Contact damage, paced by the player's recoil pulse
    fn contact_hit(&self, player: &mut Actor<PlayerState>) -> EnemyAction {
        if !player.pulse.is_ready() {
            return EnemyAction::Attack {
                landed: false,
                player_defeated: false,
            };
        }

        let remaining = player.take_damage(self.config.contact_damage);
        player.pulse.trigger();
        debug!("{} hit by contact, {} health left", player.name, remaining);

        let player_defeated = player.is_depleted();
        if player_defeated {
            player.force_transition(PlayerState::Dead);
            player.pulse.stop();
            info!("{} defeated", player.name);
        }

        EnemyAction::Attack {
            landed: true,
            player_defeated,
        }
    }

    fn is_facing(facing: Facing, from_x: f32, to_x: f32) -> bool {
        match facing {
            Facing::Left => to_x <= from_x,
            Facing::Right => to_x >= from_x,
        }
    }
}
