mod adapter;

pub use adapter::{method, prop};

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::record::{Kind, Record, Shared};
use crate::value::Value;

/// The synthesized chainable façade over a target.
///
/// A wrapper holds the shared target handle plus one binding per property the
/// target had when [`create`] ran, with the slot kind recorded at that
/// moment. Properties added to the target afterward are not reflected; there
/// is no re-sync.
///
/// `Wrapper` is `Clone`, and every clone is the same chain object: clones
/// share the binding table, and [`Wrapper::is_same`] compares identity by it.
/// "Returns the wrapper itself" throughout this crate means an `is_same`
/// handle.
pub struct Wrapper<R: Record> {
    target: Shared<R>,
    bindings: Rc<Vec<(String, Kind)>>,
}

impl<R: Record> Clone for Wrapper<R> {
    fn clone(&self) -> Wrapper<R> {
        Wrapper {
            target: Rc::clone(&self.target),
            bindings: Rc::clone(&self.bindings),
        }
    }
}

/// Builds a chainable wrapper over `target`: one binding per enumerable own
/// property, methods becoming chainable adapters and data properties becoming
/// chainable accessors.
///
/// One synchronous pass; an empty target yields an empty wrapper. Calling
/// `create` twice on the same handle yields two independent wrappers closing
/// over the same target, so mutations made through one are visible through
/// the other.
pub fn create<R: Record>(target: Shared<R>) -> Wrapper<R> {
    let bindings = {
        let record = target.borrow();
        record
            .keys()
            .into_iter()
            .filter_map(|name| {
                let kind = record.kind_of(&name)?;
                Some((name, kind))
            })
            .collect()
    };
    Wrapper {
        target,
        bindings: Rc::new(bindings),
    }
}

impl<R: Record> Wrapper<R> {
    /// Bound property names, in the target's enumeration order at creation.
    pub fn keys(&self) -> Vec<String> {
        self.bindings.iter().map(|(name, _)| name.clone()).collect()
    }

    /// The slot kind recorded for `name` at creation, or `None` if the
    /// wrapper has no such binding.
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, kind)| *kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// A clone of the shared target handle.
    pub fn target(&self) -> Shared<R> {
        Rc::clone(&self.target)
    }

    /// Whether `self` and `other` are the same chain object.
    pub fn is_same(&self, other: &Wrapper<R>) -> bool {
        Rc::ptr_eq(&self.bindings, &other.bindings)
    }

    /// Accessor read: returns the target's current value for a data binding.
    /// A read yields the data, never the chain object.
    pub fn get(&self, name: &str) -> Result<Value> {
        match self.kind_of(name) {
            Some(Kind::Data) => self.target.borrow().get(name),
            Some(Kind::Method) => Err(Error::NotData(name.to_string())),
            None => Err(Error::UnknownProperty(name.to_string())),
        }
    }

    /// Accessor write: sets the target's value for a data binding and
    /// returns the chain object, so writes compose fluently:
    ///
    /// ```
    /// # use trainwreck::{create, Object, Record, Value};
    /// let target = Object::new().with("a", 0).with("b", 0).into_shared();
    /// let w = create(target.clone());
    /// w.set("a", 1).unwrap().set("b", 2).unwrap();
    /// assert_eq!(target.borrow().get("a").unwrap(), Value::Int(1));
    /// # assert_eq!(target.borrow().get("b").unwrap(), Value::Int(2));
    /// ```
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<Wrapper<R>> {
        match self.kind_of(name) {
            Some(Kind::Data) => {
                self.target.borrow_mut().set(name, value.into())?;
                Ok(self.clone())
            }
            Some(Kind::Method) => Err(Error::NotData(name.to_string())),
            None => Err(Error::UnknownProperty(name.to_string())),
        }
    }

    /// Uniform invocation of a binding, mirroring the accessor and adapter
    /// contracts:
    ///
    /// - method binding: delegates to the target's method (looked up at call
    ///   time); a truthy result comes back as [`Outcome::Value`], a falsy one
    ///   as [`Outcome::Chain`]. A slot that is no longer invocable fails with
    ///   [`Error::Invocation`].
    /// - data binding: no arguments is a pure read ([`Outcome::Value`]); one
    ///   or more arguments writes the first and ignores the rest — presence,
    ///   not arity, is the test — returning [`Outcome::Chain`]. Any present
    ///   value counts as a write, falsy values included.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Outcome<R>> {
        match self.kind_of(name) {
            Some(Kind::Method) => adapter::delegate(&self.target, name, args, self),
            Some(Kind::Data) => adapter::access(&self.target, name, args.first().cloned(), self),
            None => Err(Error::UnknownProperty(name.to_string())),
        }
    }
}

impl<R: Record> fmt::Debug for Wrapper<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, kind) in self.bindings.iter() {
            map.entry(name, kind);
        }
        map.finish()
    }
}

/// What a chained call produced: a real (truthy) value, which breaks the
/// chain, or the chain object to keep going with.
pub enum Outcome<R: Record> {
    Value(Value),
    Chain(Wrapper<R>),
}

impl<R: Record> Outcome<R> {
    pub fn is_chain(&self) -> bool {
        matches!(self, Outcome::Chain(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// The produced value, if the chain was broken by one.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Chain(_) => None,
        }
    }

    /// The chain object, if the call chained.
    pub fn into_chain(self) -> Option<Wrapper<R>> {
        match self {
            Outcome::Chain(wrapper) => Some(wrapper),
            Outcome::Value(_) => None,
        }
    }
}

impl<R: Record> fmt::Debug for Outcome<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Outcome::Chain(_) => f.debug_tuple("Chain").finish(),
        }
    }
}
