// core/group.rs
//
// Group scheduler — owns the live tween list, drives the per-tick update
// pass, resolves collisions at activation time and compacts finished
// tweens.
//
// Usage:
//   let mut group = Group::new();
//   let handle = group.to(&container, 1.0, [("x", 10.0)], Easing::QuadOut, 0.0)?;
//   group.update(dt);  // once per external tick

use std::cell::RefCell;
use std::rc::Rc;

use crate::container::{Container, Key};
use crate::core::controller::Controller;
use crate::core::tween::{Tick, Tween};
use crate::easing::Easing;
use crate::error::TweenError;

/// An ordered collection of live tweens plus the chaining anchors used by
/// [`Group::after`] and [`Group::at`].
///
/// Single-threaded by construction (`Rc`/`RefCell`); all progress is driven
/// by the caller through [`Group::update`].
pub struct Group {
    /// Live tweens in insertion order.
    tweens: Vec<Rc<RefCell<Tween>>>,
    /// Start offset of the most recently created batch, relative to now.
    /// Shifts by `-dt` on every update; read only by `at`.
    last_started_at: f32,
    /// Completion offset of the most recently created batch, relative to
    /// now. Shifts by `-dt` on every update; read only by `after`.
    last_finished_at: f32,
}

impl Group {
    pub fn new() -> Self {
        Self {
            tweens: Vec::new(),
            last_started_at: 0.0,
            last_finished_at: 0.0,
        }
    }

    /// Animate fields of `container` from their current values to the given
    /// targets over `duration`, after `delay`.
    ///
    /// One tween is created per `(key, end_value)` pair, in iteration
    /// order. Every key is validated against the container kind before any
    /// tween is created, so an invalid key leaves the group unchanged.
    ///
    /// Start values are read when each tween activates, not here.
    pub fn to<K, I>(
        &mut self,
        container: &Container,
        duration: f32,
        fields: I,
        easing: Easing,
        delay: f32,
    ) -> Result<Controller, TweenError>
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, f32)>,
    {
        let fields: Vec<(Key, f32)> = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        for (key, _) in &fields {
            container.validate_key(key)?;
        }

        let mut batch = Vec::with_capacity(fields.len());
        for (key, end_value) in fields {
            let tween = Rc::new(RefCell::new(Tween::new(
                container.clone(),
                key,
                end_value,
                duration,
                easing,
                delay,
            )));
            self.tweens.push(Rc::clone(&tween));
            batch.push(tween);
        }

        self.last_started_at = delay;
        self.last_finished_at = delay + duration;
        Ok(Controller::new(batch))
    }

    /// Like [`Group::to`], but delayed until the previously created batch
    /// completes, plus `extra_delay`.
    pub fn after<K, I>(
        &mut self,
        container: &Container,
        duration: f32,
        fields: I,
        easing: Easing,
        extra_delay: f32,
    ) -> Result<Controller, TweenError>
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, f32)>,
    {
        let delay = extra_delay + self.last_finished_at;
        self.to(container, duration, fields, easing, delay)
    }

    /// Like [`Group::to`], but scheduled to start alongside the previously
    /// created batch, plus `extra_delay`.
    pub fn at<K, I>(
        &mut self,
        container: &Container,
        duration: f32,
        fields: I,
        easing: Easing,
        extra_delay: f32,
    ) -> Result<Controller, TweenError>
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, f32)>,
    {
        let delay = extra_delay + self.last_started_at;
        self.to(container, duration, fields, easing, delay)
    }

    /// Advance every live tween by `dt` (seconds, `>= 0`), in list order,
    /// then compact the list.
    ///
    /// Completion callbacks run inside this call, after the final value is
    /// written. They may stop other tweens through their controllers, but
    /// must not call back into this group (creating or updating tweens
    /// from a callback is not supported; the default group turns such
    /// reentrancy into a borrow panic rather than silent corruption).
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "update expects a non-negative delta, got {dt}");

        // The list never grows during the pass (callbacks cannot reach this
        // group), so an index loop over the initial length visits every
        // tween exactly once.
        for i in 0..self.tweens.len() {
            let tween = Rc::clone(&self.tweens[i]);
            let tick = tween.borrow_mut().begin_tick(dt);
            let effective_dt = match tick {
                Tick::Done | Tick::Waiting => continue,
                Tick::Activating(overshoot) => {
                    // Activation edge: evict colliding siblings first, then
                    // capture the start value they can no longer touch.
                    self.evict_colliding(&tween);
                    if !tween.borrow_mut().capture_start() {
                        continue;
                    }
                    overshoot
                }
                Tick::Running(dt) => dt,
            };

            let callbacks = tween.borrow_mut().advance(effective_dt);
            if let Some(callbacks) = callbacks {
                // Run with no borrow held so a callback can reach its own
                // or other tweens through a Controller.
                for callback in callbacks {
                    callback();
                }
            }
        }

        self.last_started_at -= dt;
        self.last_finished_at -= dt;

        // Stable compaction: `retain` keeps survivor order and never skips
        // or double-visits an element.
        self.tweens.retain(|tween| !tween.borrow().is_completed());
    }

    /// Last writer wins: a tween that just became active force-completes
    /// every other live tween on the same (container identity, key) pair —
    /// no callbacks, no final write. Siblings still waiting out a delay
    /// are left alone; they get their own turn at activation.
    fn evict_colliding(&self, new_tween: &Rc<RefCell<Tween>>) {
        let new = new_tween.borrow();
        for other in &self.tweens {
            if Rc::ptr_eq(other, new_tween) {
                continue;
            }
            let mut other = other.borrow_mut();
            if other.evictable() && other.collides_with(new.container(), new.key()) {
                other.cancel();
            }
        }
    }

    /// Number of live tweens (finished ones leave at compaction).
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Drop every live tween without final writes or callbacks.
    pub fn clear(&mut self) {
        for tween in &self.tweens {
            tween.borrow_mut().cancel();
        }
        self.tweens.clear();
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}
