use crate::entity::{Bounded, Entity, EntityError};
use crate::geometry::{Rect, Vec2};
use crate::motion::Motion;
use crate::render::RenderBatch;

/// A fire-and-forget entity that flies along its rotation heading and
/// expires after a fixed lifetime. Callers poll `is_finished` each frame
/// and drop projectiles that report true.
#[derive(Debug, Clone)]
pub struct Projectile {
    entity: Entity,
    motion: Motion,
    lifetime: f32,
    age: f32,
    finished: bool,
}

impl Projectile {
    /// Point the entity's rotation where the projectile should go before
    /// constructing; the heading is read from the entity every update.
    pub fn new(entity: Entity, speed: f32, lifetime: f32) -> Self {
        Projectile {
            entity,
            motion: Motion::new(speed, Vec2::new(1.0, 1.0)),
            lifetime,
            age: 0.0,
            finished: false,
        }
    }

    pub fn update(&mut self, delta: f32) -> Result<(), EntityError> {
        self.entity.update(delta)?;
        self.motion.advance_along_rotation(&mut self.entity, delta);
        self.age += delta;
        if self.age > self.lifetime {
            self.finished = true;
        }
        Ok(())
    }

    /// Whether the lifetime has been used up. Finished projectiles still
    /// draw until their owner removes them.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        self.entity.draw(batch)
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> Rect {
        self.entity.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCall, RecordingBatch};
    use crate::sprite::TextureRegion;

    fn shot(rotation: f32) -> Projectile {
        let entity = Entity::new(TextureRegion::full("shot", 16, 16), Vec2::ZERO, rotation);
        Projectile::new(entity, 10.0, 5.0)
    }

    #[test]
    fn test_flies_along_rotation() {
        let assert_close = |a: f32, b: f32| assert!((a - b).abs() < 1e-4, "{} vs {}", a, b);

        let mut projectile = shot(0.0);
        projectile.update(1.0).unwrap();
        assert_close(projectile.entity().position().x, 10.0);
        assert_close(projectile.entity().position().y, 0.0);

        let mut projectile = shot(90.0);
        projectile.update(1.0).unwrap();
        assert_close(projectile.entity().position().x, 0.0);
        assert_close(projectile.entity().position().y, 10.0);
    }

    #[test]
    fn test_finishes_after_lifetime() {
        let entity = Entity::new(TextureRegion::full("shot", 16, 16), Vec2::ZERO, 0.0);
        let mut projectile = Projectile::new(entity, 10.0, 0.5);

        projectile.update(0.3).unwrap();
        assert!(!projectile.is_finished());
        projectile.update(0.3).unwrap();
        assert!(projectile.is_finished());
    }

    #[test]
    fn test_exact_lifetime_is_not_finished() {
        let entity = Entity::new(TextureRegion::full("shot", 16, 16), Vec2::ZERO, 0.0);
        let mut projectile = Projectile::new(entity, 10.0, 0.5);

        projectile.update(0.5).unwrap();
        assert!(!projectile.is_finished());
    }

    #[test]
    fn test_negative_delta_leaves_state_alone() {
        let mut projectile = shot(0.0);
        assert!(projectile.update(-0.1).is_err());
        assert_eq!(projectile.age(), 0.0);
        assert_eq!(projectile.entity().position(), Vec2::ZERO);
    }

    #[test]
    fn test_draws_its_entity() {
        let projectile = shot(0.0);
        let mut batch = RecordingBatch::default();
        projectile.draw(&mut batch).unwrap();

        assert_eq!(batch.calls.len(), 1);
        assert!(matches!(batch.calls[0], DrawCall::Region { .. }));
    }
}
