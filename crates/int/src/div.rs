// Copyright 2025 Irreducible Inc.
//! Division, the scaled Newton reciprocal, modulo and gcd.

use crate::{
	Error, LargeInt,
	limbs::{self, MASK_31},
};

impl LargeInt {
	/// Returns `self / divisor` with the remainder attached to the
	/// quotient (see [`Self::remainder`]).
	///
	/// The remainder carries the dividend's sign; the quotient sign is the
	/// XOR of the operand signs. Fails with [`Error::DivisionByZero`] when
	/// `divisor == 0`.
	pub fn divide_i32(&self, divisor: i32) -> Result<Self, Error> {
		if divisor == 0 {
			return Err(Error::DivisionByZero);
		}
		if self.size == 0 {
			let mut zero = Self::ZERO;
			zero.remainder = Some(Box::new(Self::ZERO));
			return Ok(zero);
		}
		if divisor == i32::MIN {
			// |divisor| overflows, but 2^31 is a plain right shift.
			let mut z = self.abs().shift_right(31);
			z.negative = !self.negative && z.size != 0;
			let rem = (self.limbs[0] & MASK_31) as i64;
			z.remainder = Some(Box::new(Self::from_i64(if self.negative {
				-rem
			} else {
				rem
			})));
			return Ok(z);
		}
		if divisor < 0 {
			let mut z = self.divide_i32(-divisor)?;
			z.negative = !self.negative && z.size != 0;
			return Ok(z);
		}
		let mut z = self.limbs[..self.size].to_vec();
		let rem = limbs::div_word(&mut z, self.size, divisor as u64) as i64;
		let size = if z[self.size - 1] == 0 {
			self.size - 1
		} else {
			self.size
		};
		let mut quotient = Self::raw(self.negative, size, z);
		quotient.remainder = Some(Box::new(Self::from_i64(if self.negative {
			-rem
		} else {
			rem
		})));
		Ok(quotient)
	}

	/// Scaled approximation of the reciprocal:
	/// `floor(2^(precision + bit_length()) / self)`, accurate to a few
	/// units in the last place. Callers guarantee a non-zero value.
	pub(crate) fn inverse_scaled(&self, precision: i32) -> Self {
		debug_assert!(!self.is_zero());
		if precision <= 31 {
			// Narrow enough for one machine division. A value shorter
			// than the precision shifts left here, which is exact.
			let divisor = self.shift_right(self.bit_length() as i32 - precision).limbs[0];
			let dividend = 1i64 << (precision * 2);
			let q = dividend / divisor as i64;
			Self::from_i64(if self.negative { -q } else { q })
		} else {
			// Newton step x' = 2x - x^2 d on a truncated divisor, operands
			// pre-shifted so the scales line up.
			let x = self.inverse_scaled(precision / 2 + 1);
			let truncated = self.shift_right(self.bit_length() as i32 - (precision + 2));
			let product = truncated.multiply(&x).multiply(&x);
			let product = product.shift_right(2 * (precision / 2 + 2));
			let x_padded = x.shift_left(precision - precision / 2 - 1);
			x_padded.add(&x_padded.subtract(&product))
		}
	}

	/// Returns `self / other` (integer division) with the remainder
	/// attached to the quotient (see [`Self::remainder`]).
	///
	/// This operation is independent of the scoped modulus (unlike
	/// [`crate::Operable::reciprocal`]). The remainder carries the
	/// dividend's sign; the quotient sign is the XOR of the operand signs.
	/// Fails with [`Error::DivisionByZero`] when `other` is zero.
	pub fn divide(&self, other: &Self) -> Result<Self, Error> {
		if other.size <= 1 && other.bit_length() <= 31 {
			return self.divide_i32(other.to_i32());
		}
		let _span = tracing::trace_span!("divide", limbs = self.size).entered();

		let this_abs = self.abs();
		let that_abs = other.abs();
		let precision = this_abs.bit_length() as i64 - that_abs.bit_length() as i64 + 1;
		if precision <= 0 {
			let mut zero = Self::ZERO;
			zero.remainder = Some(Box::new(self.clone()));
			return Ok(zero);
		}

		let reciprocal = that_abs.inverse_scaled(precision as i32);
		let mut quotient = this_abs
			.multiply(&reciprocal)
			.shift_right(this_abs.bit_length() as i32 + 1);

		// The truncated reciprocal leaves the candidate off by a unit or
		// two in either direction; settle it against the exact remainder.
		let mut rem = this_abs.subtract(&that_abs.multiply(&quotient));
		while rem >= that_abs {
			rem = rem.subtract(&that_abs);
			quotient = quotient.add(&Self::one());
		}
		while rem.is_negative() {
			rem = rem.add(&that_abs);
			quotient = quotient.subtract(&Self::one());
		}

		rem.negative = self.negative && rem.size != 0;
		quotient.negative = (self.negative != other.negative) && quotient.size != 0;
		quotient.remainder = Some(Box::new(rem));
		Ok(quotient)
	}

	/// Returns `self mod m`, always in `[0, m)`.
	///
	/// Fails with [`Error::NonPositiveModulus`] unless `m > 0`.
	pub fn modulo(&self, m: &Self) -> Result<Self, Error> {
		if !m.is_positive() {
			return Err(Error::NonPositiveModulus { modulus: m.clone() });
		}
		if !self.negative && self < m {
			return Ok(self.clone());
		}
		let rem = self
			.divide(m)?
			.into_remainder()
			.expect("division attaches a remainder");
		Ok(if rem.is_negative() { rem.add(m) } else { rem })
	}

	/// Greatest common divisor of `self` and `other`.
	///
	/// Always non-negative; zero exactly when both inputs are zero.
	pub fn gcd(&self, other: &Self) -> Self {
		let mut a = self.abs();
		let mut b = other.abs();
		while !b.is_zero() {
			let quotient = a.divide(&b).expect("divisor is non-zero");
			let r = quotient
				.into_remainder()
				.expect("division attaches a remainder");
			a = b;
			b = r;
		}
		a
	}
}
