// Copyright 2025 Irreducible Inc.
//! The dynamically scoped modulus and the modular ring operations.
//!
//! The modulus lives on a stack of per-scope frames: [`set_modulus`] pushes
//! a frame and hands back a guard that pops it again, so a nested
//! computation can install (or mask) a modulus without disturbing the
//! scope around it. The [`Operable`] operations consult the innermost
//! frame; plain arithmetic ([`LargeInt::add`], [`LargeInt::multiply`],
//! [`LargeInt::divide`], ...) never does.

use std::{cell::RefCell, marker::PhantomData};

use crate::{Error, LargeInt};

thread_local! {
	static MODULUS: RefCell<Vec<Option<LargeInt>>> = const { RefCell::new(Vec::new()) };
}

/// The modulus of the innermost scope on this thread, if one is set.
pub fn get_modulus() -> Option<LargeInt> {
	MODULUS.with(|stack| stack.borrow().last().cloned().flatten())
}

/// Pushes a modulus frame for the current scope and returns the guard
/// that pops it on drop.
///
/// `Some(m)` requires `m > 0` and makes `m` the modulus of the scope;
/// `None` masks any outer modulus. A frame is immutable once pushed — to
/// change the modulus, push another frame.
///
/// ```
/// use largeint::{LargeInt, Operable, set_modulus};
///
/// let seven = LargeInt::from_i64(7);
/// let _scope = set_modulus(Some(seven))?;
/// let sum = LargeInt::from_i64(5).plus(&LargeInt::from_i64(4));
/// assert_eq!(sum, LargeInt::from_i64(2));
/// # Ok::<(), largeint::Error>(())
/// ```
pub fn set_modulus(modulus: Option<LargeInt>) -> Result<ModulusGuard, Error> {
	if let Some(m) = &modulus
		&& !m.is_positive()
	{
		return Err(Error::NonPositiveModulus { modulus: m.clone() });
	}
	MODULUS.with(|stack| stack.borrow_mut().push(modulus));
	Ok(ModulusGuard {
		_not_send: PhantomData,
	})
}

/// Pops its modulus frame when dropped.
#[must_use = "dropping the guard immediately pops the modulus frame"]
pub struct ModulusGuard {
	// Must drop on the thread whose stack it grew.
	_not_send: PhantomData<*const ()>,
}

impl Drop for ModulusGuard {
	fn drop(&mut self) {
		MODULUS.with(|stack| stack.borrow_mut().pop());
	}
}

/// The ring operations an exact linear solver composes: addition,
/// multiplication, additive inverse and multiplicative inverse, all
/// relative to the scoped modulus when one is set.
pub trait Operable: Sized {
	/// `self + other`, reduced to `[0, m)` under a scoped modulus `m`.
	fn plus(&self, other: &Self) -> Self;

	/// `self * other`, reduced to `[0, m)` under a scoped modulus `m`.
	fn times(&self, other: &Self) -> Self;

	/// The additive inverse: `m - (self mod m)` under a scoped modulus
	/// `m`, plain negation otherwise.
	fn opposite(&self) -> Self;

	/// The multiplicative inverse relative to the scoped modulus.
	///
	/// Fails with [`Error::ModulusNotSet`] when no modulus is in scope.
	fn reciprocal(&self) -> Result<Self, Error>;
}

impl Operable for LargeInt {
	fn plus(&self, other: &Self) -> Self {
		match get_modulus() {
			Some(m) => {
				let sum = self
					.modulo(&m)
					.expect("scoped modulus is positive")
					.add(&other.modulo(&m).expect("scoped modulus is positive"));
				if sum < m { sum } else { sum.subtract(&m) }
			}
			None => self.add(other),
		}
	}

	fn times(&self, other: &Self) -> Self {
		match get_modulus() {
			Some(m) => self
				.multiply(other)
				.modulo(&m)
				.expect("scoped modulus is positive"),
			None => self.multiply(other),
		}
	}

	fn opposite(&self) -> Self {
		match get_modulus() {
			Some(m) => m.subtract(&self.modulo(&m).expect("scoped modulus is positive")),
			None => self.negate(),
		}
	}

	fn reciprocal(&self) -> Result<Self, Error> {
		let m = get_modulus().ok_or(Error::ModulusNotSet)?;

		// Extended Euclid, keeping p*self + q*m = a and r*self + s*m = b
		// invariant; when b hits zero, p inverts self modulo m. Reducing
		// the operand first keeps every intermediate non-negative, so the
		// loop ends on the gcd itself rather than its negation.
		let mut a = self.modulo(&m).expect("scoped modulus is positive");
		let mut b = m.clone();
		let mut p = Self::one();
		let mut q = Self::ZERO;
		let mut r = Self::ZERO;
		let mut s = Self::one();
		while !b.is_zero() {
			let quotient = a.divide(&b).expect("b is non-zero");
			let c = quotient
				.remainder()
				.cloned()
				.expect("division attaches a remainder");
			a = b;
			b = c;
			let next_r = p.subtract(&quotient.multiply(&r));
			let next_s = q.subtract(&quotient.multiply(&s));
			p = r;
			q = s;
			r = next_r;
			s = next_s;
		}
		p.modulo(&m)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn int(v: i64) -> LargeInt {
		LargeInt::from_i64(v)
	}

	#[test]
	fn test_unset_modulus_is_plain_arithmetic() {
		assert_eq!(get_modulus(), None);
		assert_eq!(int(5).plus(&int(9)), int(14));
		assert_eq!(int(5).times(&int(9)), int(45));
		assert_eq!(int(5).opposite(), int(-5));
		assert!(matches!(int(5).reciprocal(), Err(Error::ModulusNotSet)));
	}

	#[test]
	fn test_scoped_operations() {
		let _scope = set_modulus(Some(int(7))).unwrap();
		assert_eq!(get_modulus(), Some(int(7)));
		assert_eq!(int(5).plus(&int(9)), int(0));
		assert_eq!(int(5).times(&int(9)), int(3));
		assert_eq!(int(-3).plus(&int(0)), int(4));
		assert_eq!(int(3).opposite(), int(4));
	}

	#[test]
	fn test_nested_scopes_restore() {
		let _outer = set_modulus(Some(int(7))).unwrap();
		{
			let _inner = set_modulus(Some(int(13))).unwrap();
			assert_eq!(get_modulus(), Some(int(13)));
			{
				let _masked = set_modulus(None).unwrap();
				assert_eq!(get_modulus(), None);
				assert_eq!(int(10).plus(&int(10)), int(20));
			}
			assert_eq!(get_modulus(), Some(int(13)));
		}
		assert_eq!(get_modulus(), Some(int(7)));
	}

	#[test]
	fn test_set_modulus_rejects_non_positive() {
		assert!(matches!(
			set_modulus(Some(int(0))),
			Err(Error::NonPositiveModulus { .. })
		));
		assert!(matches!(
			set_modulus(Some(int(-5))),
			Err(Error::NonPositiveModulus { .. })
		));
		assert_eq!(get_modulus(), None);
	}

	#[test]
	fn test_reciprocal() {
		let _scope = set_modulus(Some(int(1_000_000_007))).unwrap();
		let two = int(2);
		let inverse = two.reciprocal().unwrap();
		assert_eq!(inverse, int(500_000_004));
		assert_eq!(two.times(&inverse), int(1));
	}

	#[test]
	fn test_reciprocal_negative_operand() {
		let _scope = set_modulus(Some(int(97))).unwrap();
		let v = int(-5);
		let inverse = v.reciprocal().unwrap();
		assert_eq!(v.times(&inverse), int(1));
	}
}
