// global.rs
//
// Process-wide default group plus free functions mirroring the Group
// surface, for callers that don't want to manage a Group themselves.
//
// The group is thread-local because tweens are deliberately
// single-threaded (Rc/RefCell): it is created on first use on each thread
// and lives for the thread's lifetime, with no explicit teardown.

use std::cell::RefCell;

use crate::container::{Container, Key};
use crate::core::{Controller, Group};
use crate::easing::Easing;
use crate::error::TweenError;

thread_local! {
    static DEFAULT_GROUP: RefCell<Group> = RefCell::new(Group::new());
}

/// Run `f` against this thread's default group.
///
/// Panics if called reentrantly, e.g. from inside a completion callback of
/// a tween living in the default group.
pub fn with_default_group<R>(f: impl FnOnce(&mut Group) -> R) -> R {
    DEFAULT_GROUP.with(|group| f(&mut group.borrow_mut()))
}

/// [`Group::to`] on the default group.
pub fn to<K, I>(
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
    with_default_group(|group| group.to(container, duration, fields, easing, delay))
}

/// [`Group::after`] on the default group.
pub fn after<K, I>(
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
    with_default_group(|group| group.after(container, duration, fields, easing, extra_delay))
}

/// [`Group::at`] on the default group.
pub fn at<K, I>(
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
    with_default_group(|group| group.at(container, duration, fields, easing, extra_delay))
}

/// [`Group::update`] on the default group.
pub fn update(dt: f32) {
    with_default_group(|group| group.update(dt));
}
