use crate::collision::Aabb;

/// A pillar pair scrolling right to left
///
/// The upper segment spans `top_height..screen_height`, the lower one
/// `0..bottom_height`. The open gap sits between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    /// Set once the pillar has scrolled past the player and been scored
    pub passed: bool,
}

impl Obstacle {
    /// Build a pillar whose gap is centred on `gap_center`
    pub fn new(x: f32, gap_center: i32, half_gap: i32) -> Self {
        Obstacle {
            x,
            top_height: (gap_center + half_gap) as f32,
            bottom_height: (gap_center - half_gap) as f32,
            passed: false,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Marks the pillar as passed the first frame its right edge is
    /// strictly left of `player_x`. Returns true only on that frame.
    pub fn try_pass(&mut self, width: f32, player_x: f32) -> bool {
        if !self.passed && self.x + width < player_x {
            self.passed = true;
            true
        } else {
            false
        }
    }

    /// Still worth keeping: strictly right of the despawn line
    pub fn is_alive(&self, despawn_x: f32) -> bool {
        self.x > despawn_x
    }

    pub fn top_segment(&self, width: f32, screen_height: f32) -> Aabb {
        Aabb::new(self.x, self.top_height, width, screen_height - self.top_height)
    }

    pub fn bottom_segment(&self, width: f32) -> Aabb {
        Aabb::new(self.x, 0.0, width, self.bottom_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_heights() {
        let obstacle = Obstacle::new(800.0, 300, 100);
        assert_eq!(obstacle.top_height, 400.0);
        assert_eq!(obstacle.bottom_height, 200.0);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_hundred_frames_of_movement() {
        let mut obstacle = Obstacle::new(800.0, 300, 100);
        for _ in 0..100 {
            obstacle.advance(3.0);
        }
        assert_eq!(obstacle.x, 500.0);
        assert!(obstacle.is_alive(-50.0));
    }

    #[test]
    fn test_pass_scored_once() {
        let mut obstacle = Obstacle::new(51.0, 300, 100);
        // 51 + 50 = 101, not yet past 100
        assert!(!obstacle.try_pass(50.0, 100.0));

        obstacle.advance(3.0);
        assert!(obstacle.try_pass(50.0, 100.0));
        assert!(obstacle.passed);

        obstacle.advance(3.0);
        assert!(!obstacle.try_pass(50.0, 100.0));
    }

    #[test]
    fn test_exact_edge_is_not_passed() {
        let mut obstacle = Obstacle::new(50.0, 300, 100);
        assert!(!obstacle.try_pass(50.0, 100.0));
    }

    #[test]
    fn test_despawn_line() {
        assert!(Obstacle::new(-49.0, 300, 100).is_alive(-50.0));
        assert!(!Obstacle::new(-50.0, 300, 100).is_alive(-50.0));
    }

    #[test]
    fn test_segments() {
        let obstacle = Obstacle::new(300.0, 250, 100);
        assert_eq!(obstacle.top_segment(50.0, 600.0), Aabb::new(300.0, 350.0, 50.0, 250.0));
        assert_eq!(obstacle.bottom_segment(50.0), Aabb::new(300.0, 0.0, 50.0, 150.0));
    }
}
