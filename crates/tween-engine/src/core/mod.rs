// core/mod.rs
//
// The tween lifecycle state machine, the group scheduler that drives it,
// and the controller handle returned to callers.

pub mod controller;
pub mod group;
pub(crate) mod tween;

pub use controller::Controller;
pub use group::Group;
