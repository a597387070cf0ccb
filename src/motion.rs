use crate::entity::Entity;
use crate::geometry::Vec2;
use crate::screen::ScreenConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

/// Movement bookkeeping for an entity: linear speed along a velocity
/// vector plus an optional constant spin. Kept as a separate component so
/// anything holding an `Entity` can move it; the integration helpers write
/// through `Entity::translate`/`rotate` and leave the geometry consistent.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub speed: f32,
    pub velocity: Vec2,
    pub moving: bool,
    pub rotating: bool,
    pub rotation_direction: RotationDirection,
    pub rotation_speed: f32,
}

impl Motion {
    /// Moving motion with no spin.
    pub fn new(speed: f32, velocity: Vec2) -> Self {
        Motion {
            speed,
            velocity,
            moving: true,
            rotating: false,
            rotation_direction: RotationDirection::Left,
            rotation_speed: 0.0,
        }
    }

    /// Adds a spin rate in degrees per second (enable with `rotating`).
    pub fn with_rotation(mut self, degrees_per_second: f32) -> Self {
        self.rotation_speed = degrees_per_second;
        self.rotating = true;
        self
    }

    /// Axis-aligned step: `position += velocity * speed * delta`.
    pub fn advance(&self, entity: &mut Entity, delta: f32) {
        if !self.moving {
            return;
        }
        entity.translate(self.velocity * (self.speed * delta));
    }

    /// Heading step: moves along the entity's rotation, with the velocity
    /// components acting as per-axis multipliers.
    pub fn advance_along_rotation(&self, entity: &mut Entity, delta: f32) {
        if !self.moving {
            return;
        }
        let heading = entity.rotation().to_radians();
        entity.translate(Vec2::new(
            self.speed * self.velocity.x * delta * heading.cos(),
            self.speed * self.velocity.y * delta * heading.sin(),
        ));
    }

    /// Applies the spin for this tick while `rotating` is set.
    pub fn spin(&self, entity: &mut Entity, delta: f32) {
        if !self.rotating {
            return;
        }
        match self.rotation_direction {
            RotationDirection::Left => entity.rotate(self.rotation_speed * delta),
            RotationDirection::Right => entity.rotate(-self.rotation_speed * delta),
        }
    }
}

/// Screen-wrap teleport: when the entity's center crosses one of the given
/// boundaries, the position jumps so the center reappears on the opposite
/// boundary. A center sitting exactly on a boundary stays put. Call once
/// per tick after movement.
pub fn wrap_within(entity: &mut Entity, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
    let center = entity.center();
    let origin = entity.origin();

    if center.x < min_x {
        entity.set_position_x(max_x - origin.x);
    } else if center.x > max_x {
        entity.set_position_x(min_x - origin.x);
    }
    if center.y < min_y {
        entity.set_position_y(max_y - origin.y);
    } else if center.y > max_y {
        entity.set_position_y(min_y - origin.y);
    }
}

/// Wrap against the full screen rectangle.
pub fn wrap_to_screen(entity: &mut Entity, screen: &ScreenConfig) {
    wrap_within(entity, 0.0, 0.0, screen.width, screen.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Bounded;
    use crate::sprite::TextureRegion;

    fn entity_at(x: f32, y: f32) -> Entity {
        Entity::new(TextureRegion::full("t", 32, 32), Vec2::new(x, y), 0.0)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_advance_moves_along_velocity() {
        let motion = Motion::new(100.0, Vec2::new(1.0, 0.0));
        let mut entity = entity_at(0.0, 0.0);

        motion.advance(&mut entity, 0.1);
        assert_eq!(entity.position(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_advance_respects_moving_flag() {
        let mut motion = Motion::new(100.0, Vec2::new(1.0, 1.0));
        motion.moving = false;
        let mut entity = entity_at(5.0, 5.0);

        motion.advance(&mut entity, 1.0);
        assert_eq!(entity.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_advance_along_rotation_follows_heading() {
        let motion = Motion::new(100.0, Vec2::new(1.0, 1.0));

        let mut east = entity_at(0.0, 0.0);
        east.set_rotation(0.0);
        motion.advance_along_rotation(&mut east, 0.1);
        assert_close(east.position().x, 10.0);
        assert_close(east.position().y, 0.0);

        let mut north = entity_at(0.0, 0.0);
        north.set_rotation(90.0);
        motion.advance_along_rotation(&mut north, 0.1);
        assert_close(north.position().x, 0.0);
        assert_close(north.position().y, 10.0);
    }

    #[test]
    fn test_spin_direction() {
        let motion = Motion::new(0.0, Vec2::ZERO).with_rotation(90.0);
        let mut entity = entity_at(0.0, 0.0);

        motion.spin(&mut entity, 0.5);
        assert_close(entity.rotation(), 45.0);

        let mut clockwise = motion;
        clockwise.rotation_direction = RotationDirection::Right;
        clockwise.spin(&mut entity, 1.0);
        assert_close(entity.rotation(), -45.0);
    }

    #[test]
    fn test_wrap_teleports_across_boundaries() {
        // 32x32 entity, origin (16,16), inside a 100x100 screen.
        let mut entity = entity_at(90.0, 40.0);
        wrap_within(&mut entity, 0.0, 0.0, 100.0, 100.0);
        // Center 106 crossed max_x: reappears with center at min_x.
        assert_eq!(entity.position().x, -16.0);
        assert_eq!(entity.center().x, 0.0);
        assert_eq!(entity.position().y, 40.0);

        let mut entity = entity_at(-20.0, 40.0);
        wrap_within(&mut entity, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(entity.center().x, 100.0);

        let mut entity = entity_at(40.0, 90.0);
        wrap_within(&mut entity, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(entity.center().y, 0.0);

        let mut entity = entity_at(40.0, -20.0);
        wrap_within(&mut entity, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(entity.center().y, 100.0);
    }

    #[test]
    fn test_wrap_leaves_center_on_boundary() {
        // Center exactly on max_x (84 + 16 = 100).
        let mut entity = entity_at(84.0, 40.0);
        wrap_within(&mut entity, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(entity.position().x, 84.0);
    }

    #[test]
    fn test_wrap_to_screen_uses_config() {
        let screen = ScreenConfig::new(100.0, 100.0);
        let mut entity = entity_at(120.0, 40.0);

        wrap_to_screen(&mut entity, &screen);
        assert_eq!(entity.center().x, 0.0);
    }

    #[test]
    fn test_wrap_updates_bounds() {
        let mut entity = entity_at(90.0, 40.0);
        wrap_within(&mut entity, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(entity.bounds().x, entity.position().x);
    }
}
