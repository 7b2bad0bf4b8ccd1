//! Lenses for immutable data manipulation.
//!
//! A lens focuses on one part `A` of a whole `S`. Reading the focus and
//! rebuilding the whole with a new focus are the two halves of every lens;
//! both leave the source untouched.
//!
//! # Available Lenses
//!
//! - [`FunctionLens`]: built from a getter and a setter with [`lens`] or the
//!   [`lens!`](crate::lens) macro
//! - [`ComposedLens`]: an outer lens followed by an inner one
//! - [`PropLens`]: the entry under one key of a [`Value`](crate::value::Value) record
//! - [`IndexLens`]: the element at one index of a sequence
//! - [`PathLens`]: the value at the end of a key/index [`Path`]
//!
//! # Functor Carriers
//!
//! Every lens can run with an arbitrary [`Functor`](crate::typeclass::Functor)
//! through [`Lens::focus`]. The three standard operations only differ in the
//! carrier they pick:
//!
//! ```text
//! view  = focus(Const::new)                  -> Const<A, S>  -> A
//! set   = focus(|_| Identity::new(value))     -> Identity<S>  -> S
//! over  = focus(|a| Identity::new(f(a)))      -> Identity<S>  -> S
//! ```
//!
//! # Laws
//!
//! 1. **GetPut**: `set(view(s), s) == s`
//! 2. **PutGet**: `view(set(v, s)) == v`
//! 3. **PutPut**: `set(v2, set(v1, s)) == set(v2, s)`
//!
//! # Example
//!
//! ```
//! use functors_lenses::optics::{lens_path, over, set, view};
//! use functors_lenses::value::Value;
//!
//! let person = Value::record([
//!     ("firstName", Value::from("Bobo")),
//!     ("friends", Value::sequence([
//!         Value::record([("firstName", Value::from("Clark"))]),
//!         Value::record([("lastName", Value::from("Wayne"))]),
//!     ])),
//! ]);
//!
//! let path = "friends[1].lastName".parse().unwrap();
//! let last_name = functors_lenses::optics::PathLens::new(path);
//! assert_eq!(view(&last_name, &person), Some(Value::from("Wayne")));
//!
//! let loud = over(
//!     &lens_path(["firstName"]),
//!     |name| name.and_then(|name| name.as_str().map(|name| Value::from(name.to_uppercase()))),
//!     &person,
//! );
//! assert_eq!(loud.prop("firstName"), Some(&Value::from("BOBO")));
//!
//! let renamed = set(&last_name, Some(Value::from("Allen")), &person);
//! assert_eq!(view(&last_name, &renamed), Some(Value::from("Allen")));
//! assert_eq!(view(&last_name, &person), Some(Value::from("Wayne")));
//! ```

mod key;
mod lens;
mod path;

pub use key::{IndexLens, PropLens, lens_index, lens_prop};
pub use lens::{ComposedLens, FunctionLens, Lens, lens, over, set, view};
pub use path::{Path, PathError, PathLens, PathSegment, lens_path};
