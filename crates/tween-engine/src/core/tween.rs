// core/tween.rs
//
// Single tween state machine — one animated binding between a container
// field and a target value.
//
// The start value is captured lazily: not at construction but on the first
// tick past the delay. The field may still be written during the delay
// window (by an earlier tween on the same field, or by the caller), so
// reading it any earlier would interpolate from a stale value.

use crate::container::{Container, Key};
use crate::easing::Easing;

/// Lifecycle phase. `Completed` is terminal; stopped and evicted tweens go
/// straight there without the completion side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Waiting out the delay; start value not captured yet.
    Pending,
    /// Interpolating.
    Active,
    /// Finished, stopped or evicted; removed at the next compaction.
    Completed,
}

/// Outcome of the per-tick delay bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Tick {
    /// Already completed.
    Done,
    /// Still inside the delay window.
    Waiting,
    /// The delay expired this very tick. The payload is the time past the
    /// activation point, credited as this tick's effective delta rather
    /// than dropped.
    Activating(f32),
    /// Already active; the payload is the full `dt`.
    Running(f32),
}

pub(crate) struct Tween {
    container: Container,
    key: Key,
    end_value: f32,
    start_value: f32,
    difference: f32,
    elapsed: f32,
    duration: f32,
    delay: f32,
    easing: Easing,
    state: State,
    on_complete: Vec<Box<dyn FnOnce()>>,
}

impl Tween {
    /// Key validation against the container kind happens in `Group::to`
    /// before any tween of the batch is constructed.
    pub(crate) fn new(
        container: Container,
        key: Key,
        end_value: f32,
        duration: f32,
        easing: Easing,
        delay: f32,
    ) -> Self {
        Self {
            container,
            key,
            end_value,
            start_value: 0.0,
            difference: 0.0,
            elapsed: 0.0,
            duration,
            delay,
            easing,
            state: State::Pending,
            on_complete: Vec::new(),
        }
    }

    pub(crate) fn key(&self) -> &Key {
        &self.key
    }

    pub(crate) fn container(&self) -> &Container {
        &self.container
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.state == State::Completed
    }

    /// Whether this tween is a valid collision target: live, and either
    /// active or pending with its delay already used up. Siblings still
    /// waiting out a delay are never evicted.
    pub(crate) fn evictable(&self) -> bool {
        match self.state {
            State::Active => true,
            State::Pending => self.delay <= 0.0,
            State::Completed => false,
        }
    }

    pub(crate) fn collides_with(&self, container: &Container, key: &Key) -> bool {
        self.key == *key && self.container.same_identity(container)
    }

    /// Per-tick delay bookkeeping and phase selection.
    pub(crate) fn begin_tick(&mut self, dt: f32) -> Tick {
        match self.state {
            State::Completed => Tick::Done,
            State::Active => Tick::Running(dt),
            State::Pending => {
                self.delay -= dt;
                if self.delay > 0.0 {
                    return Tick::Waiting;
                }
                // A delay that was already <= 0 (chaining anchors can go
                // negative) credits the full shortfall as elapsed time.
                let overshoot = -self.delay;
                self.delay = 0.0;
                Tick::Activating(overshoot)
            }
        }
    }

    /// Activation edge, runs exactly once: read the field's current value
    /// as the interpolation start. Cancels the tween if the container no
    /// longer answers for the key.
    pub(crate) fn capture_start(&mut self) -> bool {
        match self.container.get(&self.key) {
            Some(value) => {
                self.start_value = value;
                self.difference = self.end_value - value;
                self.state = State::Active;
                true
            }
            None => {
                log::warn!(
                    "tween on {} key `{}` cancelled: container rejected the read",
                    self.container.kind(),
                    self.key
                );
                self.cancel();
                false
            }
        }
    }

    /// Advance the interpolation. On natural completion the exact end
    /// value is force-written (no floating-point drift) and the completion
    /// callbacks are handed back so the caller can run them without
    /// holding any borrow of the tween.
    pub(crate) fn advance(&mut self, dt: f32) -> Option<Vec<Box<dyn FnOnce()>>> {
        debug_assert_eq!(self.state, State::Active);
        self.elapsed += dt;

        if self.elapsed >= self.duration {
            // Also the zero-duration path: completes on the first active
            // tick without ever dividing by the duration.
            if !self.container.set(&self.key, self.end_value) {
                self.cancel_rejected_write();
                return None;
            }
            self.state = State::Completed;
            return Some(std::mem::take(&mut self.on_complete));
        }

        // elapsed < duration here, so duration > 0 and progress < 1.
        let progress = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let value = self.start_value + self.difference * self.easing.apply(progress);
        if !self.container.set(&self.key, value) {
            self.cancel_rejected_write();
        }
        None
    }

    /// Early transition to `Completed`: the field keeps whatever value it
    /// last held, no end-value write, no callbacks.
    pub(crate) fn stop(&mut self) {
        self.cancel();
    }

    /// Forced completion without side effects (stop, eviction, container
    /// failure). Drops pending callbacks so they can never fire.
    pub(crate) fn cancel(&mut self) {
        self.state = State::Completed;
        self.on_complete.clear();
    }

    pub(crate) fn add_on_complete(&mut self, callback: Box<dyn FnOnce()>) {
        self.on_complete.push(callback);
    }

    fn cancel_rejected_write(&mut self) {
        log::warn!(
            "tween on {} key `{}` cancelled: container rejected the write",
            self.container.kind(),
            self.key
        );
        self.cancel();
    }
}
