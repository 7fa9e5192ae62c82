//! Keyframe engine: owns the timeline and the render cache, and resolves
//! "shape at time T" once per animation tick.
//!
//! Single-threaded and cooperative: every tick's work happens synchronously
//! inside `render_at`, which is why it takes `&mut self` (the cache is
//! filled in place). Replacing the timeline with `begin_transition` is the
//! only cancellation mechanism — old keyframes and their cached
//! preparations are dropped wholesale.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::config::Config;
use crate::error::MorphError;
use crate::interp::interpolate_between;
use crate::prepare::{prep_shapes, PreparedPair};
use crate::shape::Shape;
use crate::timeline::{bracket, FrameId, FrameIdAllocator, Keyframe, KeyframeSpec};
use crate::timing::Timing;

/// Memoized `prep_shapes` results keyed by keyframe-pair identity.
/// Normalization dominates tick cost; a pair is prepared once and reused
/// for every tick of its transition.
struct RenderCache {
    entries: LruCache<(FrameId, FrameId), PreparedPair>,
}

impl RenderCache {
    fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    fn prepared(
        &mut self,
        start: &Keyframe,
        end: &Keyframe,
    ) -> Result<&PreparedPair, MorphError> {
        self.entries
            .try_get_or_insert((start.id, end.id), || {
                prep_shapes(&start.shape, &end.shape)
            })
    }

    /// Drop every entry keyed by the given frame, on either side.
    fn forget(&mut self, id: FrameId) {
        let stale: Vec<(FrameId, FrameId)> = self
            .entries
            .iter()
            .map(|(key, _)| *key)
            .filter(|(s, e)| *s == id || *e == id)
            .collect();
        for key in stale {
            self.entries.pop(&key);
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Per-animation scheduler. One instance per animated blob; hosts call
/// `begin_transition` when targets change and `render_at` every tick.
pub struct Engine {
    cfg: Config,
    ids: FrameIdAllocator,
    timeline: Vec<Keyframe>,
    cache: RenderCache,
}

impl Engine {
    /// Create a new engine with the given config. No globals: every piece
    /// of animation state lives on this instance.
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: FrameIdAllocator::new(),
            timeline: Vec::with_capacity(cfg.timeline_capacity),
            cache: RenderCache::new(cfg.cache_capacity),
            cfg,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Number of keyframes currently scheduled, synthetic ones included.
    pub fn keyframe_count(&self) -> usize {
        self.timeline.len()
    }

    /// True when no transition brackets `now` — nothing left to animate.
    pub fn is_idle(&self, now: f64) -> bool {
        match self.timeline.last() {
            Some(last) => now >= last.timestamp,
            None => true,
        }
    }

    /// Replace the whole timeline with a new transition starting at `now`.
    ///
    /// All specs are validated before any state changes; the first invalid
    /// one is reported by index. The shape currently rendered becomes a
    /// synthetic start frame so the morph continues from wherever it was;
    /// with no prior state the transition grows out of a degenerate point
    /// shape at the first target's centroid. A spec with a delay becomes a
    /// hold frame (previous shape re-targeted) followed by the real frame.
    ///
    /// Replacing the timeline also drops the render cache: preparations
    /// keyed by discarded keyframes must never be read again.
    pub fn begin_transition(
        &mut self,
        now: f64,
        specs: &[KeyframeSpec],
    ) -> Result<(), MorphError> {
        let timings = validate_specs(specs)?;

        let current = self.render_at(now)?;

        log::debug!(
            "begin transition: {} keyframe(s) at t={now}, replacing {} frame(s)",
            specs.len(),
            self.timeline.len()
        );
        self.timeline.clear();
        self.cache.clear();

        let start_shape = match (current, specs.first()) {
            (Some(shape), _) => shape,
            (None, Some(first)) => Shape::point_at(first.shape.centroid()),
            (None, None) => return Ok(()),
        };
        self.push_frame(now, start_shape, Timing::Linear, None, true);

        let mut at = now;
        for (index, (spec, timing)) in specs.iter().zip(timings).enumerate() {
            if spec.delay_ms > 0.0 {
                at += spec.delay_ms;
                if let Some(held) = self.timeline.last().map(|f| f.shape.clone()) {
                    self.push_frame(at, held, Timing::Linear, None, true);
                }
            }
            at += spec.duration_ms;
            self.push_frame(at, spec.shape.clone(), timing, Some(index), false);
        }
        Ok(())
    }

    /// Resolve the shape at `timestamp`.
    ///
    /// `Ok(None)` only while no transition has ever been scheduled. A
    /// single-frame timeline freezes on its shape for any queried time, as
    /// does any timestamp past the final frame. In between, the bracketing
    /// pair is found, dead frames are evicted, progress is clamped to
    /// [0, 1] (zero-duration transitions and host clock skew), the *end*
    /// frame's timing shapes the fraction, and the cached prepared pair is
    /// interpolated.
    pub fn render_at(&mut self, timestamp: f64) -> Result<Option<Shape>, MorphError> {
        if self.timeline.is_empty() {
            return Ok(None);
        }
        if self.timeline.len() == 1 {
            return Ok(Some(self.timeline[0].shape.clone()));
        }

        let last_idx = self.timeline.len() - 1;
        if timestamp >= self.timeline[last_idx].timestamp {
            // Past every frame: hold the final shape, keeping only the tail
            // pair so a restarted transition can still reuse its start.
            self.evict_keep_from(last_idx - 1);
            let idx = self.timeline.len() - 1;
            return Ok(Some(self.timeline[idx].shape.clone()));
        }

        let Some((lo, hi)) = bracket(&self.timeline, timestamp) else {
            // Unreachable: the timeline has at least two frames here.
            return Ok(None);
        };
        let keep_from = lo.saturating_sub(1);
        self.evict_keep_from(keep_from);
        let (lo, hi) = (lo - keep_from, hi - keep_from);

        let start = &self.timeline[lo];
        let end = &self.timeline[hi];
        let span = end.timestamp - start.timestamp;
        let progress = if span > 0.0 {
            ((timestamp - start.timestamp) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = end.timing.apply(progress as f32);

        let pair = self.cache.prepared(start, end)?;
        Ok(Some(interpolate_between(eased, &pair.start, &pair.end)?))
    }

    fn push_frame(
        &mut self,
        timestamp: f64,
        shape: Shape,
        timing: Timing,
        source_index: Option<usize>,
        synthetic: bool,
    ) {
        let id = self.ids.alloc();
        self.timeline.push(Keyframe {
            id,
            timestamp,
            shape,
            timing,
            source_index,
            synthetic,
        });
    }

    /// Drop frames before `keep_from` together with their cache entries.
    /// The caller passes the index one before the active pair, so that
    /// frame survives for a mid-flight restart to reuse.
    fn evict_keep_from(&mut self, keep_from: usize) {
        if keep_from == 0 {
            return;
        }
        for frame in self.timeline.drain(..keep_from) {
            log::trace!("evicting keyframe {:?} at t={}", frame.id, frame.timestamp);
            self.cache.forget(frame.id);
        }
    }
}

fn validate_specs(specs: &[KeyframeSpec]) -> Result<Vec<Timing>, MorphError> {
    let mut timings = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        if !spec.duration_ms.is_finite() || spec.duration_ms < 0.0 {
            return Err(MorphError::InvalidKeyframe {
                index,
                reason: format!("duration must be finite and >= 0, got {}", spec.duration_ms),
            });
        }
        if !spec.delay_ms.is_finite() || spec.delay_ms < 0.0 {
            return Err(MorphError::InvalidKeyframe {
                index,
                reason: format!("delay must be finite and >= 0, got {}", spec.delay_ms),
            });
        }
        let timing = match spec.timing.as_deref() {
            None => Timing::default(),
            Some(name) => Timing::parse(name).map_err(|err| MorphError::InvalidKeyframe {
                index,
                reason: err.to_string(),
            })?,
        };
        if let Err(err) = spec.shape.validate() {
            return Err(MorphError::InvalidKeyframe {
                index,
                reason: err.to_string(),
            });
        }
        timings.push(timing);
    }
    Ok(timings)
}
