// Copyright 2025 Irreducible Inc.
//! Signed addition, subtraction, negation and ordering.

use std::{
	cmp::Ordering,
	ops::{Add, Neg, Sub},
};

use crate::{LargeInt, limbs};

impl LargeInt {
	/// Returns `-self`.
	pub fn negate(&self) -> Self {
		let mut z = self.clone();
		z.remainder = None;
		z.negative = !self.negative && self.size != 0;
		z
	}

	/// Returns `|self|`.
	pub fn abs(&self) -> Self {
		if self.negative { self.negate() } else { self.clone() }
	}

	/// Returns `self + other`.
	pub fn add(&self, other: &Self) -> Self {
		if self.negative == other.negative {
			let (big, small) = if self.size >= other.size {
				(self, other)
			} else {
				(other, self)
			};
			let mut z = vec![0u64; big.size + 1];
			let size = limbs::add(&big.limbs, big.size, &small.limbs, small.size, &mut z);
			Self::raw(self.negative, size, z)
		} else if self.is_larger_than(other) {
			// Mixed signs subtract the smaller magnitude from the larger;
			// the larger operand decides the sign.
			let mut z = vec![0u64; self.size];
			let size = limbs::sub(&self.limbs, self.size, &other.limbs, other.size, &mut z);
			Self::raw(self.negative, size, z)
		} else {
			let mut z = vec![0u64; other.size];
			let size = limbs::sub(&other.limbs, other.size, &self.limbs, self.size, &mut z);
			Self::raw(other.negative, size, z)
		}
	}

	/// Returns `self - other`.
	pub fn subtract(&self, other: &Self) -> Self {
		if self.negative != other.negative {
			// Mixed signs add the magnitudes under this operand's sign.
			let (big, small) = if self.size >= other.size {
				(self, other)
			} else {
				(other, self)
			};
			let mut z = vec![0u64; big.size + 1];
			let size = limbs::add(&big.limbs, big.size, &small.limbs, small.size, &mut z);
			Self::raw(self.negative, size, z)
		} else if self.is_larger_than(other) {
			let mut z = vec![0u64; self.size];
			let size = limbs::sub(&self.limbs, self.size, &other.limbs, other.size, &mut z);
			Self::raw(self.negative, size, z)
		} else {
			let mut z = vec![0u64; other.size];
			let size = limbs::sub(&other.limbs, other.size, &self.limbs, self.size, &mut z);
			Self::raw(!other.negative, size, z)
		}
	}
}

impl Ord for LargeInt {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			_ => {
				let magnitude = self
					.size
					.cmp(&other.size)
					.then_with(|| limbs::cmp(&self.limbs, &other.limbs, self.size));
				if self.negative { magnitude.reverse() } else { magnitude }
			}
		}
	}
}

impl PartialOrd for LargeInt {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Add for &LargeInt {
	type Output = LargeInt;

	fn add(self, rhs: &LargeInt) -> LargeInt {
		LargeInt::add(self, rhs)
	}
}

impl Add for LargeInt {
	type Output = LargeInt;

	fn add(self, rhs: LargeInt) -> LargeInt {
		LargeInt::add(&self, &rhs)
	}
}

impl Sub for &LargeInt {
	type Output = LargeInt;

	fn sub(self, rhs: &LargeInt) -> LargeInt {
		LargeInt::subtract(self, rhs)
	}
}

impl Sub for LargeInt {
	type Output = LargeInt;

	fn sub(self, rhs: LargeInt) -> LargeInt {
		LargeInt::subtract(&self, &rhs)
	}
}

impl Neg for &LargeInt {
	type Output = LargeInt;

	fn neg(self) -> LargeInt {
		self.negate()
	}
}

impl Neg for LargeInt {
	type Output = LargeInt;

	fn neg(self) -> LargeInt {
		self.negate()
	}
}
