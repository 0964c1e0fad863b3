//! Scene-wide render options.

use serde::{Deserialize, Serialize};

/// Per-scene rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Supersampling factor per axis. Values below 2 trace a single ray per
    /// pixel; `m >= 2` traces `m * m` rays and averages them.
    pub anti_alias_multiplier: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            anti_alias_multiplier: 1,
        }
    }
}

impl SceneOptions {
    /// Options with the given supersampling factor.
    pub fn with_anti_alias(anti_alias_multiplier: u32) -> Self {
        Self {
            anti_alias_multiplier,
        }
    }

    /// Number of primary rays traced per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        if self.anti_alias_multiplier < 2 {
            1
        } else {
            self.anti_alias_multiplier * self.anti_alias_multiplier
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_per_pixel() {
        assert_eq!(SceneOptions::default().samples_per_pixel(), 1);
        assert_eq!(SceneOptions::with_anti_alias(0).samples_per_pixel(), 1);
        assert_eq!(SceneOptions::with_anti_alias(1).samples_per_pixel(), 1);
        assert_eq!(SceneOptions::with_anti_alias(2).samples_per_pixel(), 4);
        assert_eq!(SceneOptions::with_anti_alias(4).samples_per_pixel(), 16);
    }
}
