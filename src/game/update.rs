// Step functions - each takes the state (or the piece it needs) by reference
//
// GameState::step calls these in a fixed order. They are public so tests can
// drive a single phase of the frame in isolation.

use super::state::GameState;
use crate::collision::{detect_collision, Collision};
use crate::config::GameConfig;
use crate::pickup::PickupKind;
use crate::player::Player;

/// Gravity integration for one frame
pub fn integrate(player: &mut Player, config: &GameConfig) {
    player.apply_gravity(config.gravity);
}

/// Tick the pillar spawner, appending a new pillar when it fires.
pub fn update_obstacles(state: &mut GameState) -> bool {
    match state.obstacle_spawner.tick(&mut state.rng, &state.config) {
        Some(obstacle) => {
            log::debug!(
                "Pillar spawned: gap {}..{}",
                obstacle.bottom_height,
                obstacle.top_height
            );
            state.obstacles.push(obstacle);
            true
        }
        None => false,
    }
}

/// Move pillars left, score the ones the player just cleared, then drop
/// the ones past the despawn line. Returns how many were scored.
pub fn scroll_obstacles(state: &mut GameState) -> u32 {
    let config = &state.config;
    let player_x = state.player.x;
    let mut passed = 0;

    for obstacle in state.obstacles.iter_mut() {
        obstacle.advance(config.obstacle_speed);
        if obstacle.try_pass(config.obstacle_width, player_x) {
            passed += 1;
        }
    }
    state.obstacles.retain(|o| o.is_alive(config.despawn_x));

    if passed > 0 {
        state.score += passed;
        log::debug!("Score: {}", state.score);
    }
    passed
}

/// Tick the pickup spawner, appending whatever it produced
pub fn update_pickups(state: &mut GameState) -> Option<PickupKind> {
    let pickup = state.pickup_spawner.tick(&mut state.rng, &state.config)?;
    let kind = pickup.kind;
    log::debug!("{} spawned at y={} size={}", kind.name(), pickup.y, pickup.size);
    state.pickups.push(pickup);
    Some(kind)
}

pub fn scroll_pickups(state: &mut GameState) {
    let config = &state.config;
    for pickup in state.pickups.iter_mut() {
        pickup.advance(config.pickup_speed);
    }
    state.pickups.retain(|p| p.is_alive(config.despawn_x));
}

/// Find and apply at most one collision.
///
/// Skipped entirely while the player is invulnerable, so pickups cannot
/// be collected during the blink window either.
pub fn resolve_collisions(state: &mut GameState) -> Option<Collision> {
    if state.player.is_invulnerable() {
        return None;
    }

    let collision = detect_collision(&state.player, &state.obstacles, &state.pickups, &state.config)?;
    let config = &state.config;
    let player = &mut state.player;

    match collision {
        Collision::Boundary | Collision::Obstacle { .. } => {
            player.register_hit(config.hit_invulnerability_frames);
            log::debug!("Hit ({:?}), {} lives left", collision, player.lives);
        }
        Collision::Pickup { index, kind } => {
            match kind {
                PickupKind::Hazard => {
                    player.register_hit(config.hit_invulnerability_frames);
                    log::debug!("Buzzard hit, {} lives left", player.lives);
                }
                PickupKind::Invincibility => {
                    player.grant_invincibility(config.invincibility_frames);
                    log::debug!("Invincible for {} frames", config.invincibility_frames);
                }
                PickupKind::LifeRestore => {
                    if player.restore_life(config.max_lives) {
                        log::debug!("Extra life, now {}", player.lives);
                    }
                }
            }
            state.pickups.remove(index);
        }
    }

    Some(collision)
}
