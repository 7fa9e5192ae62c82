//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Sizing hints for a single engine instance. Defaults suit the short
/// timelines this engine is built for; `cache_capacity` is the only hard
/// bound (it caps the LRU render cache).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity of the keyframe timeline.
    pub timeline_capacity: usize,
    /// Maximum number of memoized prepared keyframe pairs.
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeline_capacity: 16,
            cache_capacity: 32,
        }
    }
}
