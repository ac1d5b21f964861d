/// Collision detection for the player against the world
///
/// This module provides AABB (Axis-Aligned Bounding Box) tests and the
/// per-frame collision query. It only *detects*; applying the outcome
/// (losing a life, consuming a pickup) happens in `game::update`.
///
/// # Architecture
///
/// - `Aabb`: float rectangle in Y-up screen space (`y` is the bottom edge)
/// - `Collidable` trait: the player and pickups expose a plain bounding box
/// - `detect_collision()`: ordered query returning the first hit this frame
///
/// # Check order
///
/// 1. Screen boundary (floor and ceiling)
/// 2. Pillars, in spawn order
/// 3. Pickups and hazards, in spawn order
///
/// The first match wins; nothing after it is examined this frame.
use crate::config::GameConfig;
use crate::obstacle::Obstacle;
use crate::pickup::{Pickup, PickupKind};
use crate::player::Player;

/// Axis-aligned rectangle with `y` growing upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Entities whose collision shape is a single bounding box
pub trait Collidable {
    /// Bounding box in screen space, matching what is drawn
    fn get_bounds(&self) -> Aabb;
}

/// What the player hit this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Touched the floor or the ceiling
    Boundary,
    /// Clipped a pillar; `index` into the obstacle list
    Obstacle { index: usize },
    /// Overlapped a pickup; `index` into the pickup list
    Pickup { index: usize, kind: PickupKind },
}

/// Inclusive AABB test: shared edges and corners count as contact.
pub fn aabb_touching(a: &Aabb, b: &Aabb) -> bool {
    let x_overlap = a.left() <= b.right() && a.right() >= b.left();
    let y_overlap = a.bottom() <= b.top() && a.top() >= b.bottom();

    x_overlap && y_overlap
}

/// True when the player is at or past the floor or the ceiling
pub fn out_of_bounds(player: &Aabb, screen_height: f32) -> bool {
    player.bottom() <= 0.0 || player.top() >= screen_height
}

/// Pillar test with the forgiveness margin
///
/// The player must strictly overlap the pillar column horizontally. Then the
/// top edge, pulled down by `margin`, must reach the upper segment, or the
/// bottom edge, pushed up by `margin`, must reach the lower segment.
pub fn hits_obstacle(player: &Aabb, obstacle: &Obstacle, obstacle_width: f32, margin: f32) -> bool {
    let in_column = player.right() > obstacle.x && player.left() < obstacle.x + obstacle_width;
    if !in_column {
        return false;
    }

    player.top() - margin >= obstacle.top_height || player.bottom() + margin <= obstacle.bottom_height
}

/// Find the first thing the player collides with this frame.
///
/// Invulnerability is not considered here; callers skip the query entirely
/// while the player is invulnerable.
pub fn detect_collision(
    player: &Player,
    obstacles: &[Obstacle],
    pickups: &[Pickup],
    config: &GameConfig,
) -> Option<Collision> {
    let bounds = player.get_bounds();

    if out_of_bounds(&bounds, config.screen_height) {
        return Some(Collision::Boundary);
    }

    if let Some(index) = obstacles
        .iter()
        .position(|o| hits_obstacle(&bounds, o, config.obstacle_width, config.obstacle_margin))
    {
        return Some(Collision::Obstacle { index });
    }

    pickups
        .iter()
        .position(|p| aabb_touching(&bounds, &p.get_bounds()))
        .map(|index| Collision::Pickup {
            index,
            kind: pickups[index].kind,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SpriteSize;

    fn player_at(y: f32) -> Player {
        let config = GameConfig::default();
        let mut player = Player::new(&config, SpriteSize::new(56, 56));
        player.y = y;
        player
    }

    #[test]
    fn test_aabb_touching_overlapping() {
        let a = Aabb::new(0.0, 0.0, 32.0, 32.0);
        let b = Aabb::new(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_touching(&a, &b));
        assert!(aabb_touching(&b, &a)); // Symmetric
    }

    #[test]
    fn test_touching_edges_count() {
        let a = Aabb::new(0.0, 0.0, 32.0, 32.0);
        let b = Aabb::new(32.0, 0.0, 32.0, 32.0);
        let c = Aabb::new(32.5, 0.0, 32.0, 32.0);

        assert!(aabb_touching(&a, &b));
        assert!(!aabb_touching(&a, &c));
    }

    #[test]
    fn test_separated_boxes() {
        let a = Aabb::new(0.0, 0.0, 32.0, 32.0);
        let b = Aabb::new(100.0, 100.0, 32.0, 32.0);

        assert!(!aabb_touching(&a, &b));
    }

    #[test]
    fn test_contained_box() {
        let large = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let small = Aabb::new(25.0, 25.0, 50.0, 50.0);

        assert!(aabb_touching(&large, &small));
        assert!(aabb_touching(&small, &large));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(out_of_bounds(&Aabb::new(100.0, 0.0, 56.0, 56.0), 600.0));
        assert!(out_of_bounds(&Aabb::new(100.0, -3.0, 56.0, 56.0), 600.0));
        assert!(out_of_bounds(&Aabb::new(100.0, 544.0, 56.0, 56.0), 600.0));
        assert!(!out_of_bounds(&Aabb::new(100.0, 0.5, 56.0, 56.0), 600.0));
        assert!(!out_of_bounds(&Aabb::new(100.0, 543.0, 56.0, 56.0), 600.0));
    }

    #[test]
    fn test_obstacle_gap_is_safe() {
        // Gap spans 200..400, player spans 270..326
        let obstacle = Obstacle::new(120.0, 300, 100);
        let player = Aabb::new(100.0, 270.0, 56.0, 56.0);
        assert!(!hits_obstacle(&player, &obstacle, 50.0, 10.0));
    }

    #[test]
    fn test_obstacle_margin() {
        let obstacle = Obstacle::new(120.0, 300, 100);

        // Top edge at 410: 410 - 10 >= 400 hits
        let high = Aabb::new(100.0, 354.0, 56.0, 56.0);
        assert!(hits_obstacle(&high, &obstacle, 50.0, 10.0));

        // Top edge at 409 slips through thanks to the margin
        let almost = Aabb::new(100.0, 353.0, 56.0, 56.0);
        assert!(!hits_obstacle(&almost, &obstacle, 50.0, 10.0));

        // Bottom edge at 190: 190 + 10 <= 200 hits
        let low = Aabb::new(100.0, 190.0, 56.0, 56.0);
        assert!(hits_obstacle(&low, &obstacle, 50.0, 10.0));
    }

    #[test]
    fn test_obstacle_requires_horizontal_overlap() {
        let obstacle = Obstacle::new(156.0, 300, 100); // starts at player's right edge
        let player = Aabb::new(100.0, 10.0, 56.0, 56.0);
        assert!(!hits_obstacle(&player, &obstacle, 50.0, 10.0));

        let behind = Obstacle::new(50.0, 300, 100); // ends at player's left edge
        assert!(!hits_obstacle(&player, &behind, 50.0, 10.0));
    }

    #[test]
    fn test_boundary_checked_first() {
        let config = GameConfig::default();
        let player = player_at(0.0);
        let pickups = vec![Pickup::new(100.0, 0.0, 20.0, PickupKind::LifeRestore)];

        assert_eq!(
            detect_collision(&player, &[], &pickups, &config),
            Some(Collision::Boundary)
        );
    }

    #[test]
    fn test_first_obstacle_wins() {
        let config = GameConfig::default();
        let player = player_at(100.0);
        let obstacles = vec![
            Obstacle::new(600.0, 300, 100),
            Obstacle::new(110.0, 300, 100),
            Obstacle::new(120.0, 300, 100),
        ];

        assert_eq!(
            detect_collision(&player, &obstacles, &[], &config),
            Some(Collision::Obstacle { index: 1 })
        );
    }

    #[test]
    fn test_obstacle_before_pickup() {
        let config = GameConfig::default();
        let player = player_at(100.0);
        let obstacles = vec![Obstacle::new(110.0, 300, 100)];
        let pickups = vec![Pickup::new(110.0, 110.0, 20.0, PickupKind::Hazard)];

        assert_eq!(
            detect_collision(&player, &obstacles, &pickups, &config),
            Some(Collision::Obstacle { index: 0 })
        );
    }

    #[test]
    fn test_pickup_edge_contact_counts() {
        let config = GameConfig::default();
        let player = player_at(300.0);
        // Pickup's left edge sits exactly on the player's right edge (156)
        let pickups = vec![
            Pickup::new(700.0, 300.0, 20.0, PickupKind::Hazard),
            Pickup::new(156.0, 356.0, 20.0, PickupKind::Invincibility),
        ];

        assert_eq!(
            detect_collision(&player, &[], &pickups, &config),
            Some(Collision::Pickup {
                index: 1,
                kind: PickupKind::Invincibility
            })
        );
    }

    #[test]
    fn test_no_collision_in_open_air() {
        let config = GameConfig::default();
        let player = player_at(300.0);
        let obstacles = vec![Obstacle::new(500.0, 300, 100)];
        let pickups = vec![Pickup::new(400.0, 300.0, 20.0, PickupKind::Hazard)];

        assert_eq!(detect_collision(&player, &obstacles, &pickups, &config), None);
    }
}
