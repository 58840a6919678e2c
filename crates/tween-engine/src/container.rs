// container.rs
//
// Container abstraction — the three kinds of host structure a tween can
// animate, behind one get/set-by-key surface. The kind is resolved once at
// tween construction and fixed from then on.
//
// Containers are shared (`Rc<RefCell<..>>`): the caller keeps reading the
// animated value while live tweens write it between ticks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Field access for arbitrary host objects animated by name.
///
/// `get_field` returns `None` and `set_field` returns `false` for unknown
/// fields; a tween hitting either mid-flight is cancelled in isolation,
/// other tweens in the group keep running.
pub trait Animate {
    /// Read a named field.
    fn get_field(&self, field: &str) -> Option<f32>;
    /// Write a named field. Returns whether the object accepted the write.
    fn set_field(&mut self, field: &str, value: f32) -> bool;
}

/// Which kind of structure a container wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    KeyedMap,
    IndexedSequence,
    FieldObject,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContainerKind::KeyedMap => "keyed map",
            ContainerKind::IndexedSequence => "indexed sequence",
            ContainerKind::FieldObject => "field object",
        };
        f.write_str(label)
    }
}

/// Key into a container: a string field name or an integer index.
/// The binding is fixed at tween creation and validated against the
/// container kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A shared, mutable animation target.
#[derive(Clone)]
pub enum Container {
    /// String-keyed record (`HashMap<String, f32>`); takes `Key::Name`.
    KeyedMap(Rc<RefCell<HashMap<String, f32>>>),
    /// Integer-indexed sequence (`Vec<f32>`); takes `Key::Index`.
    IndexedSequence(Rc<RefCell<Vec<f32>>>),
    /// Arbitrary object animated through [`Animate`]; takes `Key::Name`.
    FieldObject(Rc<RefCell<dyn Animate>>),
}

impl Container {
    /// Wrap an arbitrary object behind its [`Animate`] impl.
    pub fn field_object<T: Animate + 'static>(object: Rc<RefCell<T>>) -> Self {
        Container::FieldObject(object)
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::KeyedMap(_) => ContainerKind::KeyedMap,
            Container::IndexedSequence(_) => ContainerKind::IndexedSequence,
            Container::FieldObject(_) => ContainerKind::FieldObject,
        }
    }

    /// Check the key type against the container kind.
    pub(crate) fn validate_key(&self, key: &Key) -> Result<(), TweenError> {
        let ok = matches!(
            (self.kind(), key),
            (ContainerKind::KeyedMap, Key::Name(_))
                | (ContainerKind::FieldObject, Key::Name(_))
                | (ContainerKind::IndexedSequence, Key::Index(_))
        );
        if ok {
            Ok(())
        } else {
            Err(TweenError::InvalidKeyType {
                kind: self.kind(),
                key: key.clone(),
            })
        }
    }

    /// Read the current field value. `None` if the container no longer
    /// answers for the key (missing map entry, out-of-range index,
    /// unknown object field).
    pub(crate) fn get(&self, key: &Key) -> Option<f32> {
        match (self, key) {
            (Container::KeyedMap(map), Key::Name(name)) => map.borrow().get(name).copied(),
            (Container::IndexedSequence(seq), Key::Index(index)) => {
                seq.borrow().get(*index).copied()
            }
            (Container::FieldObject(object), Key::Name(name)) => object.borrow().get_field(name),
            _ => None,
        }
    }

    /// Write a field value. Returns whether the container accepted it.
    pub(crate) fn set(&self, key: &Key, value: f32) -> bool {
        match (self, key) {
            (Container::KeyedMap(map), Key::Name(name)) => {
                map.borrow_mut().insert(name.clone(), value);
                true
            }
            (Container::IndexedSequence(seq), Key::Index(index)) => {
                match seq.borrow_mut().get_mut(*index) {
                    Some(slot) => {
                        *slot = value;
                        true
                    }
                    None => false,
                }
            }
            (Container::FieldObject(object), Key::Name(name)) => {
                object.borrow_mut().set_field(name, value)
            }
            _ => false,
        }
    }

    /// Whether two containers are the same allocation. Different kinds are
    /// never identical.
    pub(crate) fn same_identity(&self, other: &Container) -> bool {
        match (self, other) {
            (Container::KeyedMap(a), Container::KeyedMap(b)) => Rc::ptr_eq(a, b),
            (Container::IndexedSequence(a), Container::IndexedSequence(b)) => Rc::ptr_eq(a, b),
            (Container::FieldObject(a), Container::FieldObject(b)) => {
                // Rc::ptr_eq on trait objects also compares vtable pointers;
                // compare the data addresses only.
                std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
            }
            _ => false,
        }
    }
}

impl From<Rc<RefCell<HashMap<String, f32>>>> for Container {
    fn from(map: Rc<RefCell<HashMap<String, f32>>>) -> Self {
        Container::KeyedMap(map)
    }
}

impl From<Rc<RefCell<Vec<f32>>>> for Container {
    fn from(seq: Rc<RefCell<Vec<f32>>>) -> Self {
        Container::IndexedSequence(seq)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Container").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Player {
        x: f32,
        y: f32,
    }

    impl Animate for Player {
        fn get_field(&self, field: &str) -> Option<f32> {
            match field {
                "x" => Some(self.x),
                "y" => Some(self.y),
                _ => None,
            }
        }

        fn set_field(&mut self, field: &str, value: f32) -> bool {
            match field {
                "x" => self.x = value,
                "y" => self.y = value,
                _ => return false,
            }
            true
        }
    }

    fn map_container() -> Container {
        let mut map = HashMap::new();
        map.insert("a".to_string(), 1.0);
        Container::from(Rc::new(RefCell::new(map)))
    }

    #[test]
    fn key_types_are_validated_per_kind() {
        let map = map_container();
        let seq = Container::from(Rc::new(RefCell::new(vec![0.0f32])));
        let obj = Container::field_object(Rc::new(RefCell::new(Player { x: 0.0, y: 0.0 })));

        assert!(map.validate_key(&Key::from("a")).is_ok());
        assert!(map.validate_key(&Key::from(0usize)).is_err());
        assert!(seq.validate_key(&Key::from(0usize)).is_ok());
        assert!(seq.validate_key(&Key::from("a")).is_err());
        assert!(obj.validate_key(&Key::from("x")).is_ok());
        assert!(obj.validate_key(&Key::from(0usize)).is_err());
    }

    #[test]
    fn map_get_and_set() {
        let map = map_container();
        let key = Key::from("a");
        assert_eq!(map.get(&key), Some(1.0));
        assert!(map.set(&key, 2.5));
        assert_eq!(map.get(&key), Some(2.5));
        assert_eq!(map.get(&Key::from("missing")), None);
    }

    #[test]
    fn sequence_rejects_out_of_range_writes() {
        let seq = Container::from(Rc::new(RefCell::new(vec![0.0f32, 1.0])));
        assert!(seq.set(&Key::from(1usize), 9.0));
        assert_eq!(seq.get(&Key::from(1usize)), Some(9.0));
        assert!(!seq.set(&Key::from(5usize), 9.0));
        assert_eq!(seq.get(&Key::from(5usize)), None);
    }

    #[test]
    fn object_fields_round_trip() {
        let player = Rc::new(RefCell::new(Player { x: 0.0, y: 0.0 }));
        let obj = Container::field_object(Rc::clone(&player));
        assert!(obj.set(&Key::from("x"), 3.0));
        assert_eq!(player.borrow().x, 3.0);
        assert!(!obj.set(&Key::from("hp"), 3.0));
        assert_eq!(obj.get(&Key::from("hp")), None);
    }

    #[test]
    fn identity_is_per_allocation() {
        let shared = Rc::new(RefCell::new(vec![0.0f32]));
        let a = Container::from(Rc::clone(&shared));
        let b = Container::from(shared);
        let c = Container::from(Rc::new(RefCell::new(vec![0.0f32])));
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
        assert!(!a.same_identity(&map_container()));
    }

    #[test]
    fn keys_deserialize_untagged() {
        let name: Key = serde_json::from_str("\"x\"").unwrap();
        let index: Key = serde_json::from_str("3").unwrap();
        assert_eq!(name, Key::from("x"));
        assert_eq!(index, Key::from(3usize));
    }
}
