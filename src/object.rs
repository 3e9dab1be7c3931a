use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::record::{share, Kind, Record, Shared};
use crate::value::Value;

/// A method stored on an [`Object`]. Receives the object itself as the
/// receiver, plus the call arguments. Return [`Value::Null`] when there is no
/// meaningful result (the adapter then keeps the chain going).
pub type MethodFn = Rc<dyn Fn(&mut Object, &[Value]) -> Result<Value>>;

enum Slot {
    Data(Value),
    Method(MethodFn),
}

/// The bundled concrete [`Record`]: a string-keyed slot map where each slot
/// holds either a data value or a method. Enumeration order is lexicographic.
#[derive(Default)]
pub struct Object {
    slots: BTreeMap<String, Slot>,
    frozen: bool,
}

impl Object {
    pub fn new() -> Object {
        Object::default()
    }

    /// Adds a data property and returns the modified `Object`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Object {
        self.slots.insert(name.into(), Slot::Data(value.into()));
        self
    }

    /// Adds a method and returns the modified `Object`.
    pub fn with_method<F>(mut self, name: impl Into<String>, f: F) -> Object
    where
        F: Fn(&mut Object, &[Value]) -> Result<Value> + 'static,
    {
        self.slots.insert(name.into(), Slot::Method(Rc::new(f)));
        self
    }

    /// Replaces (or inserts) the method named `name`. Fails with
    /// [`Error::Write`] on a frozen object.
    pub fn set_method<F>(&mut self, name: impl Into<String>, f: F) -> Result<()>
    where
        F: Fn(&mut Object, &[Value]) -> Result<Value> + 'static,
    {
        let name = name.into();
        if self.frozen {
            return Err(Error::Write(name));
        }
        self.slots.insert(name, Slot::Method(Rc::new(f)));
        Ok(())
    }

    /// Makes every subsequent write fail with [`Error::Write`]. There is no
    /// unfreeze.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Moves this object into a [`Shared`] handle, ready for `create`.
    pub fn into_shared(self) -> Shared<Object> {
        share(self)
    }
}

impl Record for Object {
    fn keys(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }

    fn kind_of(&self, name: &str) -> Option<Kind> {
        self.slots.get(name).map(|slot| match slot {
            Slot::Data(_) => Kind::Data,
            Slot::Method(_) => Kind::Method,
        })
    }

    fn get(&self, name: &str) -> Result<Value> {
        match self.slots.get(name) {
            Some(Slot::Data(value)) => Ok(value.clone()),
            Some(Slot::Method(_)) => Err(Error::NotData(name.to_string())),
            None => Err(Error::UnknownProperty(name.to_string())),
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        if self.frozen {
            return Err(Error::Write(name.to_string()));
        }
        self.slots.insert(name.to_string(), Slot::Data(value));
        Ok(())
    }

    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        // clone the handle out of the map so the method may mutate `self`,
        // including recursively invoking other methods on it
        let f = match self.slots.get(name) {
            Some(Slot::Method(f)) => Rc::clone(f),
            _ => return Err(Error::Invocation(name.to_string())),
        };
        f(self, args)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, slot) in self.slots.iter() {
            match slot {
                Slot::Data(value) => map.entry(name, value),
                Slot::Method(_) => map.entry(name, &"<method>"),
            };
        }
        map.finish()
    }
}
