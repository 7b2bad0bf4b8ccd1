//! # functors-lenses
//!
//! Functors and van Laarhoven lenses for immutable data in Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: the [`Functor`](typeclass::Functor) protocol with the
//!   [`Identity`](typeclass::Identity) and [`Const`](typeclass::Const) carriers
//! - **Values**: an immutable, structurally shared tree of records and
//!   sequences
//! - **Optics**: function lenses, key/index lenses and path lenses, all
//!   driven through functor carriers
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor protocol and carriers
//! - `value`: Immutable value trees
//! - `optics`: Lenses (requires `typeclass` and `value`)
//! - `arc`: Use `Arc` instead of `Rc` for shared storage
//! - `serde`: Serialize and deserialize values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functors_lenses::prelude::*;
//!
//! let person = Value::record([("firstName", Value::from("Bobo"))]);
//! let first_name = lens_prop("firstName");
//!
//! assert_eq!(view(&first_name, &person), Some(Value::from("Bobo")));
//!
//! let junior = set(&first_name, Some(Value::from("Bobo Jr.")), &person);
//! assert_eq!(junior.prop("firstName"), Some(&Value::from("Bobo Jr.")));
//!
//! let shout = map(|name: &str| name.to_uppercase(), Identity::new("Bobo"));
//! assert_eq!(shout.into_inner(), "BOBO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use functors_lenses::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "value")]
    pub use crate::value::{Key, Record, Sequence, Value};

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "value")]
pub mod value;

#[cfg(feature = "optics")]
pub mod optics;
