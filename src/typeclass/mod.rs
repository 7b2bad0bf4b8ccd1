//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over wrapped values, with [`map`] as the
//!   free-function entry point
//! - [`Identity`]: The functor that maps by plain application
//! - [`Const`]: The functor that ignores the function and keeps its value
//!
//! `Identity` and `Const` are the two carriers lenses are built on: the same
//! traversal yields a rebuilt structure through `Identity` and the bare focus
//! through `Const`.
//!
//! # Examples
//!
//! ```rust
//! use functors_lenses::typeclass::{map, Const, Identity};
//!
//! let name = map(|value: &str| value.to_uppercase(), Identity::new("Bobo"));
//! assert_eq!(name.value(), "BOBO");
//!
//! let held: Const<&str, &str> = Const::new("kept");
//! let kept: Const<&str, usize> = map(|value: &str| value.len(), held);
//! assert_eq!(kept.into_const(), "kept");
//! ```

mod constant;
mod functor;
mod higher;
mod identity;

pub use constant::Const;
pub use functor::{Functor, map};
pub use higher::TypeConstructor;
pub use identity::Identity;
