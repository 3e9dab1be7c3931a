use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::value::Value;

/// The kind of slot a property name resolves to on a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Data,
    Method,
}

/// The capability surface a target must expose to be wrapped: enumerate own
/// property names, tell data slots from methods, get/set by name, and invoke
/// a method with the record itself as the receiver.
///
/// `invoke` and `kind_of` resolve the name at call time, not at wrap time, so
/// replacing a method on the target after wrapping changes what a wrapper's
/// adapter does on its next call.
pub trait Record {
    /// Own, enumerable property names in the record's enumeration order.
    fn keys(&self) -> Vec<String>;

    /// Returns the slot kind for `name`, or `None` if the record has no such
    /// property.
    fn kind_of(&self, name: &str) -> Option<Kind>;

    /// Reads a data property.
    fn get(&self, name: &str) -> Result<Value>;

    /// Writes a property value. Inserting a previously unknown name is
    /// allowed; wrappers built before the insert do not pick it up.
    fn set(&mut self, name: &str, value: Value) -> Result<()>;

    /// Invokes the method named `name` with the given arguments.
    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value>;
}

/// Shared handle to a target. The target is a mutable resource shared between
/// the original caller and every wrapper derived from it; this crate is
/// single-threaded by construction and provides no synchronization.
pub type Shared<R> = Rc<RefCell<R>>;

/// Moves a record into a [`Shared`] handle.
pub fn share<R: Record>(record: R) -> Shared<R> {
    Rc::new(RefCell::new(record))
}
