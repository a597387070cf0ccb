use crate::geometry::Vec2;
use log::info;

/// Which of the two shipped asset resolutions a screen maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSize {
    Big,
    Small,
}

/// Screen dimensions and the asset scale chosen for them. Passed explicitly
/// to whoever needs screen geometry (tables, wrap helpers, input
/// translation) instead of living in globals.
#[derive(Debug, Clone, Copy)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
    pub scale: Vec2,
    pub target: TargetSize,
}

impl ScreenConfig {
    pub fn new(width: f32, height: f32) -> Self {
        ScreenConfig {
            width,
            height,
            scale: Vec2::new(1.0, 1.0),
            target: TargetSize::Big,
        }
    }

    /// Picks whichever asset resolution needs the least stretching on this
    /// screen: the set whose horizontal scale factor lands closest to 1
    /// wins, and its per-axis factors are kept for entity construction.
    pub fn detect(width: f32, height: f32, big: (f32, f32), small: (f32, f32)) -> Self {
        let scale_big = Vec2::new(width / big.0, height / big.1);
        let scale_small = Vec2::new(width / small.0, height / small.1);

        let (target, scale) = if (1.0 - scale_big.x).abs() <= (1.0 - scale_small.x).abs() {
            (TargetSize::Big, scale_big)
        } else {
            (TargetSize::Small, scale_small)
        };
        info!(
            "screen {}x{}: {:?} assets at scale ({:.3}, {:.3})",
            width, height, target, scale.x, scale.y
        );

        ScreenConfig {
            width,
            height,
            scale,
            target,
        }
    }

    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Converts a backend pointer Y (top-left origin, growing down) into
    /// world Y (bottom-left origin, growing up).
    pub fn flip_y(&self, y: f32) -> f32 {
        self.height - y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_prefers_closest_scale() {
        let config = ScreenConfig::detect(800.0, 480.0, (800.0, 480.0), (480.0, 320.0));
        assert_eq!(config.target, TargetSize::Big);
        assert_eq!(config.scale, Vec2::new(1.0, 1.0));

        let config = ScreenConfig::detect(480.0, 320.0, (800.0, 480.0), (480.0, 320.0));
        assert_eq!(config.target, TargetSize::Small);
        assert_eq!(config.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_detect_scales_between_resolutions() {
        let config = ScreenConfig::detect(600.0, 400.0, (800.0, 480.0), (480.0, 320.0));
        // 600/800 = 0.75 vs 600/480 = 1.25: equally far from 1, ties to Big.
        assert_eq!(config.target, TargetSize::Big);
        assert_eq!(config.scale, Vec2::new(0.75, 400.0 / 480.0));
    }

    #[test]
    fn test_flip_y_and_midpoints() {
        let config = ScreenConfig::new(640.0, 360.0);

        assert_eq!(config.flip_y(0.0), 360.0);
        assert_eq!(config.flip_y(360.0), 0.0);
        assert_eq!(config.mid_x(), 320.0);
        assert_eq!(config.mid_y(), 180.0);
    }
}
