// core/controller.rs
//
// Caller-facing handle over the batch of tweens created by one scheduling
// call. Lets the caller stop or observe that batch without ever seeing the
// group's internal list.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::tween::Tween;

/// Handle to the tween(s) created by one `to`/`after`/`at` call.
///
/// Cloning is cheap; every clone controls the same batch.
#[derive(Clone)]
pub struct Controller {
    tweens: Vec<Rc<RefCell<Tween>>>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("tweens", &self.tweens.len())
            .finish()
    }
}

impl Controller {
    pub(crate) fn new(tweens: Vec<Rc<RefCell<Tween>>>) -> Self {
        Self { tweens }
    }

    /// Stop every tween in the batch. Each field keeps whatever value it
    /// last held; no end-value writes, no completion callbacks.
    pub fn stop(&self) {
        for tween in &self.tweens {
            tween.borrow_mut().stop();
        }
    }

    /// Attach a completion callback to the batch.
    ///
    /// By convention this registers on the first tween of the batch only:
    /// all tweens of one call share delay and duration, so the first one
    /// stands in for the batch. If that representative is evicted by a
    /// colliding tween, the callback never fires.
    ///
    /// Callbacks run inside `Group::update`, after the final value is
    /// written, in registration order, exactly once.
    pub fn on_complete<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if let Some(first) = self.tweens.first() {
            first.borrow_mut().add_on_complete(Box::new(callback));
        }
    }

    /// Number of tweens created by the originating call.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::container::Container;
    use crate::core::group::Group;
    use crate::easing::Easing;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[test]
    fn stop_freezes_every_tween_of_the_batch() {
        let map = Rc::new(RefCell::new(HashMap::from([
            ("x".to_string(), 0.0),
            ("y".to_string(), 0.0),
        ])));
        let container = Container::from(Rc::clone(&map));
        let mut group = Group::new();
        let handle = group
            .to(
                &container,
                2.0,
                [("x", 10.0), ("y", 10.0)],
                Easing::Linear,
                0.0,
            )
            .unwrap();
        assert_eq!(handle.len(), 2);

        group.update(1.0);
        handle.stop();
        group.update(5.0);
        assert!((map.borrow()["x"] - 5.0).abs() < 1e-6);
        assert!((map.borrow()["y"] - 5.0).abs() < 1e-6);
        assert!(group.is_empty());
    }

    #[test]
    fn batch_callback_rides_the_first_tween() {
        let map = Rc::new(RefCell::new(HashMap::from([
            ("x".to_string(), 0.0),
            ("y".to_string(), 0.0),
        ])));
        let container = Container::from(Rc::clone(&map));
        let mut group = Group::new();
        let handle = group
            .to(
                &container,
                1.0,
                [("x", 1.0), ("y", 1.0)],
                Easing::Linear,
                0.0,
            )
            .unwrap();
        let fired = Rc::new(RefCell::new(0));
        let count = Rc::clone(&fired);
        handle.on_complete(move || *count.borrow_mut() += 1);

        group.update(2.0);
        assert_eq!(*fired.borrow(), 1, "one callback for the whole batch");
    }

    #[test]
    fn evicting_the_representative_silences_the_batch_callback() {
        let map = Rc::new(RefCell::new(HashMap::from([
            ("x".to_string(), 0.0),
            ("y".to_string(), 0.0),
        ])));
        let container = Container::from(Rc::clone(&map));
        let mut group = Group::new();
        let handle = group
            .to(
                &container,
                1.0,
                [("x", 1.0), ("y", 1.0)],
                Easing::Linear,
                0.0,
            )
            .unwrap();
        handle.on_complete(|| panic!("representative was evicted"));

        group.update(0.5); // batch is active
        // Competes with the batch's first tween (key "x") only.
        group
            .to(&container, 1.0, [("x", -1.0)], Easing::Linear, 0.0)
            .unwrap();
        group.update(0.25); // competitor activates and evicts it
        group.update(2.0);
        assert_eq!(map.borrow()["y"], 1.0, "rest of the batch unaffected");
        assert_eq!(map.borrow()["x"], -1.0);
    }
}
