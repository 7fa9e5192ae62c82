//! Keyframe timeline: scheduled target shapes on a wall-clock axis.

use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::timing::Timing;

/// Opaque identity of one scheduled keyframe. Dense and monotonic; identity
/// (not timestamp) keys the render cache, so replacing the timeline can
/// never alias a stale cache entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u32);

/// Monotonic allocator for FrameId.
#[derive(Default, Debug)]
pub struct FrameIdAllocator {
    next: u32,
}

impl FrameIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> FrameId {
        let id = FrameId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// One scheduled state of the animation.
#[derive(Clone, Debug)]
pub struct Keyframe {
    pub id: FrameId,
    /// Wall-clock milliseconds on the host's clock.
    pub timestamp: f64,
    pub shape: Shape,
    /// Easing of the transition *into* this frame.
    pub timing: Timing,
    /// Index of the `KeyframeSpec` this frame came from, if any.
    pub source_index: Option<usize>,
    /// Auto-inserted frame: a captured current state or a delay hold.
    pub synthetic: bool,
}

/// Host-facing description of one requested keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeSpec {
    pub shape: Shape,
    /// Transition duration in milliseconds, >= 0.
    #[serde(rename = "durationMs")]
    pub duration_ms: f64,
    /// Hold at the previous shape for this long before transitioning.
    #[serde(rename = "delayMs", default)]
    pub delay_ms: f64,
    /// Timing-function name; `None` means linear.
    #[serde(default)]
    pub timing: Option<String>,
}

/// Index pair of the keyframes straddling `timestamp`, or `None` when the
/// timeline has fewer than two frames. Outside the covered range the
/// first/last pair is returned; the engine clamps progress separately.
///
/// Linear scan: timelines stay short after eviction.
pub(crate) fn bracket(frames: &[Keyframe], timestamp: f64) -> Option<(usize, usize)> {
    if frames.len() < 2 {
        return None;
    }
    for i in 0..frames.len() - 1 {
        if timestamp < frames[i + 1].timestamp {
            return Some((i, i + 1));
        }
    }
    Some((frames.len() - 2, frames.len() - 1))
}
