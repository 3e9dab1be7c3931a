//! Chaining made easy: wrap a record-like value so that method calls and
//! property writes return the wrapper itself, turning an API that was never
//! designed for chaining into a fluent one. Property reads return the stored
//! value, breaking the chain where the caller actually wants data.
//!
//! ```
//! use trainwreck::{create, Object, Record, Value};
//!
//! let target = Object::new()
//!     .with("name", "Bob")
//!     .with_method("greet", |this, args| {
//!         let who = args.first().cloned().unwrap_or(Value::Null);
//!         this.set("name", who)?;
//!         Ok(Value::Null)
//!     })
//!     .into_shared();
//!
//! let w = create(target.clone());
//! assert_eq!(w.get("name").unwrap(), Value::from("Bob"));
//!
//! // writes and no-result method calls keep the chain going
//! let name = w
//!     .set("name", "Alice").unwrap()
//!     .call("greet", &[Value::from("Carl")]).unwrap()
//!     .into_chain().unwrap()
//!     .get("name").unwrap();
//! assert_eq!(name, Value::from("Carl"));
//! ```

mod chain;
mod error;
mod object;
mod record;
pub mod test_utils;
mod value;

pub use chain::{create, method, prop, Outcome, Wrapper};
pub use error::{Error, Result};
pub use object::{MethodFn, Object};
pub use record::{share, Kind, Record, Shared};
pub use value::Value;
