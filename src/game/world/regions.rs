// Screen-edge region transitions and the dialogue zone

use glam::Vec2;
use log::info;

use crate::core::math::Rect;

/// Index into the configured region list
pub type RegionId = usize;

/// Screen edge a transition went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Layout of the regions and their edge triggers
#[derive(Debug, Clone)]
pub struct RegionConfig {
    /// Region names, indexed by `RegionId`
    pub names: Vec<String>,
    /// Regions `0..chain_len` are laid out left to right
    pub chain_len: usize,
    /// Region the player starts in
    pub start: RegionId,
    /// Trigger near the right screen edge
    pub right_trigger: Rect,
    /// Trigger near the left screen edge
    pub left_trigger: Rect,
    /// Player x after crossing to the next region
    pub arrival_x_from_left: f32,
    /// Player x after crossing to the previous region
    pub arrival_x_from_right: f32,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            names: ["castle", "forest", "temple", "tavern"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            chain_len: 3,
            start: 0,
            right_trigger: Rect::new(1100.0, 315.0, 20.0, 210.0),
            left_trigger: Rect::new(-100.0, 315.0, 20.0, 210.0),
            arrival_x_from_left: -60.0,
            // A 210px hitbox at 880 stops short of the right trigger
            arrival_x_from_right: 880.0,
        }
    }
}

/// A rectangle that swaps the player into a separate interior region
#[derive(Debug, Clone)]
pub struct DialogueZoneConfig {
    /// Doorway rectangle in the host region
    pub trigger: Rect,
    /// Region holding the doorway
    pub host: RegionId,
    /// Interior region
    pub interior: RegionId,
    /// Player y inside the interior
    pub entry_y: f32,
    /// Player position after leaving the interior
    pub exit_position: Vec2,
}

impl Default for DialogueZoneConfig {
    fn default() -> Self {
        Self {
            trigger: Rect::new(900.0, 315.0, 20.0, 210.0),
            host: 2,
            interior: 3,
            entry_y: 290.0,
            exit_position: Vec2::new(720.0, 360.0),
        }
    }
}

/// Result of crossing a screen edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionChange {
    pub from: RegionId,
    pub to: RegionId,
    pub side: Side,
    /// New x for the player
    pub teleport_x: f32,
}

/// Result of using the dialogue-zone doorway
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneChange {
    Entered { region: RegionId, y: f32 },
    Exited { region: RegionId, position: Vec2 },
}

/// Tracks the occupied region and teleports across its edges
#[derive(Debug, Clone)]
pub struct RegionTransitionController {
    config: RegionConfig,
    zone: DialogueZoneConfig,
    current: RegionId,
    latched: Option<Side>,
    in_dialogue_zone: bool,
}

impl RegionTransitionController {
    pub fn new(config: RegionConfig, zone: DialogueZoneConfig) -> Self {
        Self {
            current: config.start,
            config,
            zone,
            latched: None,
            in_dialogue_zone: false,
        }
    }

    pub fn current(&self) -> RegionId {
        self.current
    }

    /// Name of the occupied region
    pub fn current_name(&self) -> &str {
        self.config
            .names
            .get(self.current)
            .map(String::as_str)
            .unwrap_or("unknown")
    }

    /// Side of the last transition, while its arrival trigger is still armed
    pub fn latched(&self) -> Option<Side> {
        self.latched
    }

    pub fn in_dialogue_zone(&self) -> bool {
        self.in_dialogue_zone
    }

    fn has_next(&self) -> bool {
        self.current + 1 < self.config.chain_len
    }

    fn has_previous(&self) -> bool {
        self.current > 0 && self.current < self.config.chain_len
    }

    /// Check the edge triggers against the player's hitbox (called every tick)
    pub fn update(&mut self, hitbox: Rect) -> Option<RegionChange> {
        if self.in_dialogue_zone {
            return None;
        }

        let on_left = self.config.left_trigger.overlaps(&hitbox);
        let on_right = self.config.right_trigger.overlaps(&hitbox);

        // Just arrived: the opposite trigger must not send us straight back
        match self.latched {
            Some(Side::Right) if on_left => {
                self.latched = None;
                return None;
            }
            Some(Side::Left) if on_right => {
                self.latched = None;
                return None;
            }
            _ => {}
        }

        let change = if on_right && self.has_next() {
            Some(self.move_to(self.current + 1, Side::Right, self.config.arrival_x_from_left))
        } else if on_left && self.has_previous() {
            Some(self.move_to(self.current - 1, Side::Left, self.config.arrival_x_from_right))
        } else {
            None
        };

        if change.is_none() {
            self.latched = None;
        }
        change
    }

    fn move_to(&mut self, to: RegionId, side: Side, teleport_x: f32) -> RegionChange {
        let from = self.current;
        self.current = to;
        self.latched = Some(side);
        info!("Region {} -> {}", from, self.current_name());

        RegionChange {
            from,
            to,
            side,
            teleport_x,
        }
    }

    /// Use the doorway.
    ///
    /// Inside the interior this always leads back out; in the host region it
    /// only leads in while the player stands in the doorway.
    pub fn toggle_dialogue_zone(&mut self, hitbox: Rect) -> Option<ZoneChange> {
        if self.in_dialogue_zone {
            self.in_dialogue_zone = false;
            self.current = self.zone.host;
            self.latched = None;
            let interior = self
                .config
                .names
                .get(self.zone.interior)
                .map_or("interior", String::as_str);
            info!("Left {}", interior);
            return Some(ZoneChange::Exited {
                region: self.current,
                position: self.zone.exit_position,
            });
        }

        if self.current == self.zone.host && self.zone.trigger.overlaps(&hitbox) {
            self.in_dialogue_zone = true;
            self.current = self.zone.interior;
            self.latched = None;
            info!("Entered {}", self.current_name());
            return Some(ZoneChange::Entered {
                region: self.current,
                y: self.zone.entry_y,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hitbox_at(x: f32) -> Rect {
        Rect::new(x, 360.0, 210.0, 210.0)
    }

    fn controller() -> RegionTransitionController {
        RegionTransitionController::new(RegionConfig::default(), DialogueZoneConfig::default())
    }

    /// Triggers wide enough that an arrival lands inside the opposite one
    fn overlapping_controller() -> RegionTransitionController {
        let config = RegionConfig {
            right_trigger: Rect::new(900.0, 315.0, 120.0, 210.0),
            left_trigger: Rect::new(-100.0, 315.0, 120.0, 210.0),
            arrival_x_from_left: -60.0,
            arrival_x_from_right: 800.0,
            ..RegionConfig::default()
        };
        RegionTransitionController::new(config, DialogueZoneConfig::default())
    }

    #[test]
    fn test_no_transition_in_the_middle() {
        let mut regions = controller();
        assert_eq!(regions.update(hitbox_at(450.0)), None);
        assert_eq!(regions.current(), 0);
        assert_eq!(regions.latched(), None);
    }

    #[test]
    fn test_right_edge_moves_to_next_region() {
        let mut regions = controller();
        let change = regions.update(hitbox_at(895.0)).unwrap();
        assert_eq!(change.from, 0);
        assert_eq!(change.to, 1);
        assert_eq!(change.side, Side::Right);
        assert_eq!(change.teleport_x, -60.0);
        assert_eq!(regions.latched(), Some(Side::Right));
    }

    #[test]
    fn test_left_edge_moves_to_previous_region() {
        let mut regions = controller();
        regions.update(hitbox_at(895.0));
        regions.update(hitbox_at(-60.0));

        let change = regions.update(hitbox_at(-85.0)).unwrap();
        assert_eq!(change.to, 0);
        assert_eq!(change.side, Side::Left);
        assert_eq!(change.teleport_x, 880.0);

        // Arrival spot is clear of the right trigger
        assert_eq!(regions.update(hitbox_at(880.0)), None);
        assert_eq!(regions.current(), 0);
    }

    #[test]
    fn test_no_previous_region_at_chain_start() {
        let mut regions = controller();
        assert_eq!(regions.update(hitbox_at(-150.0)), None);
        assert_eq!(regions.current(), 0);
    }

    #[test]
    fn test_no_next_region_at_chain_end() {
        let mut regions = controller();
        regions.update(hitbox_at(895.0));
        regions.update(hitbox_at(450.0));
        regions.update(hitbox_at(895.0));
        assert_eq!(regions.current(), 2);

        regions.update(hitbox_at(450.0));
        assert_eq!(regions.update(hitbox_at(895.0)), None);
        assert_eq!(regions.current(), 2);
        assert_eq!(regions.latched(), None);
    }

    #[test]
    fn test_arrival_inside_opposite_trigger_is_suppressed() {
        let mut regions = overlapping_controller();

        let change = regions.update(hitbox_at(850.0)).unwrap();
        assert_eq!(change.to, 1);
        assert_eq!(regions.latched(), Some(Side::Right));

        // Teleported to x=-60: still inside the left trigger
        assert_eq!(regions.update(hitbox_at(change.teleport_x)), None);
        assert_eq!(regions.current(), 1);
        assert_eq!(regions.latched(), None);
    }

    #[test]
    fn test_leftward_arrival_is_suppressed() {
        let mut regions = overlapping_controller();
        regions.update(hitbox_at(850.0));
        regions.update(hitbox_at(300.0));

        let change = regions.update(hitbox_at(-100.0)).unwrap();
        assert_eq!(change.to, 0);
        assert_eq!(regions.latched(), Some(Side::Left));

        assert_eq!(regions.update(hitbox_at(change.teleport_x)), None);
        assert_eq!(regions.current(), 0);
        assert_eq!(regions.latched(), None);
    }

    #[test]
    fn test_latch_clears_away_from_triggers() {
        let mut regions = controller();
        regions.update(hitbox_at(895.0));
        assert_eq!(regions.latched(), Some(Side::Right));

        regions.update(hitbox_at(400.0));
        assert_eq!(regions.latched(), None);
    }

    fn walk_to_temple(regions: &mut RegionTransitionController) {
        regions.update(hitbox_at(895.0));
        regions.update(hitbox_at(450.0));
        regions.update(hitbox_at(895.0));
        regions.update(hitbox_at(450.0));
        assert_eq!(regions.current(), 2);
    }

    #[test]
    fn test_enter_dialogue_zone_from_doorway() {
        let mut regions = controller();
        walk_to_temple(&mut regions);

        let change = regions.toggle_dialogue_zone(hitbox_at(750.0)).unwrap();
        assert_eq!(change, ZoneChange::Entered { region: 3, y: 290.0 });
        assert!(regions.in_dialogue_zone());
        assert_eq!(regions.current_name(), "tavern");
    }

    #[test]
    fn test_doorway_only_works_in_host_region() {
        let mut regions = controller();
        assert_eq!(regions.toggle_dialogue_zone(hitbox_at(750.0)), None);
        assert!(!regions.in_dialogue_zone());
    }

    #[test]
    fn test_doorway_needs_overlap() {
        let mut regions = controller();
        walk_to_temple(&mut regions);
        assert_eq!(regions.toggle_dialogue_zone(hitbox_at(100.0)), None);
        assert_eq!(regions.current(), 2);
    }

    #[test]
    fn test_no_edge_transitions_inside_dialogue_zone() {
        let mut regions = controller();
        walk_to_temple(&mut regions);
        regions.toggle_dialogue_zone(hitbox_at(750.0));

        assert_eq!(regions.update(hitbox_at(895.0)), None);
        assert_eq!(regions.update(hitbox_at(-150.0)), None);
        assert_eq!(regions.current(), 3);
    }

    #[test]
    fn test_exit_dialogue_zone() {
        let mut regions = controller();
        walk_to_temple(&mut regions);
        regions.toggle_dialogue_zone(hitbox_at(750.0));

        let change = regions.toggle_dialogue_zone(hitbox_at(100.0)).unwrap();
        assert_eq!(
            change,
            ZoneChange::Exited {
                region: 2,
                position: Vec2::new(720.0, 360.0)
            }
        );
        assert!(!regions.in_dialogue_zone());
        assert_eq!(regions.current(), 2);
    }
}
