//! Builders and invariant checks shared by the integration tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::chain::Wrapper;
use crate::object::Object;
use crate::record::{Kind, Record, Shared};
use crate::value::Value;

/// The greeter target: a `name` data property and a `greet` method that
/// stores its first argument into `name` and returns nothing.
pub fn greeter() -> Object {
    Object::new()
        .with("name", "Bob")
        .with_method("greet", |this, args| {
            let who = args.first().cloned().unwrap_or(Value::Null);
            this.set("name", who)?;
            Ok(Value::Null)
        })
}

/// An object with `count` plus a `bump` method that increments it and
/// returns the new count (truthy once count leaves zero).
pub fn counter() -> Object {
    Object::new().with("count", 0).with_method("bump", |this, _| {
        let n = this.get("count")?.as_int().unwrap_or(0);
        this.set("count", Value::Int(n + 1))?;
        Ok(Value::Int(n + 1))
    })
}

pub fn random_value(rng: &mut SmallRng) -> Value {
    match rng.gen_range(0..5) {
        0 => Value::Null,
        1 => Value::Bool(rng.gen()),
        2 => Value::Int(rng.gen_range(-1000..1000)),
        3 => Value::Float(rng.gen_range(-10.0..10.0)),
        _ => {
            let len = rng.gen_range(0..8);
            let s: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();
            Value::Str(s)
        }
    }
}

/// Builds an object with `fields` random data properties (`f00`, `f01`, ...)
/// and, for odd seeds, a `poke` method that returns its first argument.
pub fn make_object_rand(fields: usize, seed: u64) -> Object {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut obj = Object::new();
    for i in 0..fields {
        obj = obj.with(format!("f{:02}", i), random_value(&mut rng));
    }
    if seed % 2 == 1 {
        obj = obj.with_method("poke", |_, args| {
            Ok(args.first().cloned().unwrap_or(Value::Null))
        });
    }
    obj
}

/// Checks structural fidelity: the wrapper's binding names and kinds must
/// match the target's own enumerable properties exactly.
pub fn assert_wrapper_matches_target(wrapper: &Wrapper<Object>, target: &Shared<Object>) {
    let record = target.borrow();
    assert_eq!(wrapper.keys(), record.keys());
    for name in wrapper.keys() {
        assert_eq!(wrapper.kind_of(&name), record.kind_of(&name));
        if wrapper.kind_of(&name) == Some(Kind::Data) {
            assert_eq!(wrapper.get(&name).unwrap(), record.get(&name).unwrap());
        }
    }
}
