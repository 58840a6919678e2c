// error.rs
//
// Error taxonomy. Everything here is raised at construction/lookup time;
// the per-tick update path never returns errors, it isolates and logs.

use thiserror::Error;

use crate::container::{ContainerKind, Key};

/// Errors surfaced by tween construction and easing lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TweenError {
    /// The key type does not match the container kind: indexed sequences
    /// take integer indices, keyed maps and field objects take string
    /// field names. Fatal to the single scheduling call that raised it;
    /// live tweens are untouched.
    #[error("cannot index a {kind} with key `{key}`")]
    InvalidKeyType { kind: ContainerKind, key: Key },

    /// The easing registry has no curve under this name.
    #[error("unknown easing function `{0}`")]
    MissingEasingFunction(String),
}
