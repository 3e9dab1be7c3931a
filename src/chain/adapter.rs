//! The two leaf algorithms behind [`create`](super::create), also exposed as
//! standalone closure builders for callers assembling wrappers by hand.

use crate::error::Result;
use crate::record::{Record, Shared};
use crate::value::Value;

use super::{Outcome, Wrapper};

/// Builds a chainable method adapter: a closure that invokes
/// `target[name](args)` and returns the result when it is truthy, or `chain`
/// otherwise.
///
/// The name is resolved on the target at every call, so replacing the
/// target's method after building the adapter changes what it does; a slot
/// that is no longer invocable fails with
/// [`Error::Invocation`](crate::Error::Invocation).
///
/// A method whose legitimate result is falsy is indistinguishable from one
/// with no result; the adapter returns the chain object either way. Known
/// trade-off, kept for parity with the truthiness-based contract.
pub fn method<R: Record>(
    name: impl Into<String>,
    target: Shared<R>,
    chain: Wrapper<R>,
) -> impl Fn(&[Value]) -> Result<Outcome<R>> {
    let name = name.into();
    move |args| delegate(&target, &name, args, &chain)
}

/// Builds a chainable accessor: a closure that reads `target[name]` when
/// called with `None`, and writes the given value then returns `chain` when
/// called with `Some` — any `Some`, explicit falsy values included. Absence,
/// not falsiness, selects the read path.
pub fn prop<R: Record>(
    name: impl Into<String>,
    target: Shared<R>,
    chain: Wrapper<R>,
) -> impl Fn(Option<Value>) -> Result<Outcome<R>> {
    let name = name.into();
    move |value| access(&target, &name, value, &chain)
}

pub(super) fn delegate<R: Record>(
    target: &Shared<R>,
    name: &str,
    args: &[Value],
    chain: &Wrapper<R>,
) -> Result<Outcome<R>> {
    let result = target.borrow_mut().invoke(name, args)?;
    if result.is_truthy() {
        Ok(Outcome::Value(result))
    } else {
        Ok(Outcome::Chain(chain.clone()))
    }
}

pub(super) fn access<R: Record>(
    target: &Shared<R>,
    name: &str,
    value: Option<Value>,
    chain: &Wrapper<R>,
) -> Result<Outcome<R>> {
    match value {
        None => Ok(Outcome::Value(target.borrow().get(name)?)),
        Some(value) => {
            target.borrow_mut().set(name, value)?;
            Ok(Outcome::Chain(chain.clone()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chain::create;
    use crate::object::Object;
    use crate::record::Record;

    #[test]
    fn method_adapter_chains_on_falsy() {
        let target = Object::new()
            .with("hits", 0)
            .with_method("touch", |this, _| {
                let n = this.get("hits")?.as_int().unwrap_or(0);
                this.set("hits", Value::Int(n + 1))?;
                Ok(Value::Null)
            })
            .into_shared();
        let chain = create(target.clone());

        let touch = method("touch", target.clone(), chain.clone());
        let outcome = touch(&[]).unwrap();
        assert!(outcome.into_chain().unwrap().is_same(&chain));
        assert_eq!(target.borrow().get("hits").unwrap(), Value::Int(1));
    }

    #[test]
    fn method_adapter_returns_truthy_result() {
        let target = Object::new()
            .with_method("answer", |_, _| Ok(Value::Int(42)))
            .into_shared();
        let chain = create(target.clone());

        let answer = method("answer", target, chain);
        assert_eq!(answer(&[]).unwrap().into_value(), Some(Value::Int(42)));
    }

    #[test]
    fn prop_accessor_reads_and_writes() {
        let target = Object::new().with("name", "Bob").into_shared();
        let chain = create(target.clone());

        let name = prop("name", target.clone(), chain.clone());
        assert_eq!(name(None).unwrap().into_value(), Some(Value::from("Bob")));

        let outcome = name(Some(Value::from("Alice"))).unwrap();
        assert!(outcome.into_chain().unwrap().is_same(&chain));
        assert_eq!(target.borrow().get("name").unwrap(), Value::from("Alice"));

        // an explicit falsy value writes; it does not read
        name(Some(Value::from(""))).unwrap();
        assert_eq!(target.borrow().get("name").unwrap(), Value::from(""));
    }
}
