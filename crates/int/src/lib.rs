// Copyright 2025 Irreducible Inc.
//! Arbitrary-precision signed integers on 63-bit limbs.
//!
//! [`LargeInt`] is an immutable integer of arbitrary size. Each limb keeps
//! one bit of carry headroom so the arithmetic kernels run on plain 64-bit
//! registers; multiplication past a size threshold splits recursively with
//! the three Karatsuba sub-products evaluated concurrently on the rayon
//! pool; division of large divisors goes through a Newton-iteration scaled
//! reciprocal.
//!
//! A dynamically scoped modulus ([`set_modulus`]) turns the [`Operable`]
//! operations into ring operations modulo `m`, which is what an exact
//! linear solver plugs into.
//!
//! ```
//! use largeint::LargeInt;
//!
//! let a = LargeInt::parse("123456789012345678901234567890", 10)?;
//! let b = a.add(&LargeInt::one());
//! assert_eq!(b.to_string(), "123456789012345678901234567891");
//! # Ok::<(), largeint::Error>(())
//! ```

#![warn(missing_docs)]

mod addsub;
mod div;
mod error;
mod int;
mod limbs;
mod modulus;
mod mul;
mod serialize;
mod shift;
mod text;


pub use error::Error;
pub use int::LargeInt;
pub use modulus::{ModulusGuard, Operable, get_modulus, set_modulus};
