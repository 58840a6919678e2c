// lib.rs
//
// tween-engine — animates numeric fields of shared containers (keyed maps,
// indexed sequences, arbitrary objects) from their current value to a
// target value over time, through an easing curve, with delays, chaining,
// completion callbacks and last-writer-wins collision eviction.
//
// The caller owns the clock: nothing moves until `Group::update(dt)` (or
// the free `update(dt)`) is called, typically once per rendered frame.
//
// Usage:
//   let map = Rc::new(RefCell::new(HashMap::from([("x".to_string(), 0.0)])));
//   let container = Container::from(Rc::clone(&map));
//   let mut group = Group::new();
//   let handle = group.to(&container, 1.0, [("x", 10.0)], Easing::QuadOut, 0.0)?;
//   handle.on_complete(|| println!("done"));
//   group.update(dt); // once per tick

pub mod container;
pub mod core;
pub mod easing;
pub mod error;
pub mod global;

// Re-export key types at crate root for convenience
pub use container::{Animate, Container, ContainerKind, Key};
pub use core::{Controller, Group};
pub use easing::{ease, lerp, Easing};
pub use error::TweenError;
pub use global::{after, at, to, update, with_default_group};
