// Copyright 2025 Irreducible Inc.
//! Multiplication: by machine word, schoolbook, and concurrent Karatsuba.

use std::ops::Mul;

use crate::{LargeInt, limbs};

/// Operand size at which recursive splitting beats the schoolbook loop.
///
/// Tuned for 63-bit limbs and the fan-out overhead of the worker pool;
/// retuning is a one-line change but should stay in this order of
/// magnitude.
const KARATSUBA_LIMBS_THRESHOLD: usize = 30;

impl LargeInt {
	/// Returns `self * l`.
	pub fn multiply_i64(&self, l: i64) -> Self {
		if self.size == 0 || l == 0 {
			return Self::ZERO;
		}
		if l == i64::MIN {
			// |l| overflows, but 2^63 is a plain limb shift.
			let mut z = self.shift_left(63);
			z.negative = !self.negative;
			return z;
		}
		let mut z = vec![0u64; self.size + 1];
		let size = limbs::mul_word(&self.limbs, self.size, l.unsigned_abs(), &mut z);
		Self::raw(self.negative != (l < 0), size, z)
	}

	/// Returns `self * other`.
	///
	/// Small operands go through the machine-word path, mid-sized ones
	/// through the schoolbook loop; once the smaller operand reaches the
	/// Karatsuba threshold the product splits recursively, with the three
	/// sub-products evaluated concurrently on the worker pool. A panic in
	/// any sub-product propagates at the join barrier and aborts the whole
	/// multiply.
	pub fn multiply(&self, other: &Self) -> Self {
		if self.size < other.size {
			return other.multiply(self);
		}
		if other.size <= 1 {
			return self.multiply_i64(other.to_i64());
		}
		if other.size < KARATSUBA_LIMBS_THRESHOLD {
			let mut z = vec![0u64; self.size + other.size];
			let size = limbs::mul(&self.limbs, self.size, &other.limbs, other.size, &mut z);
			return Self::raw(self.negative != other.negative, size, z);
		}
		self.karatsuba(other)
	}

	fn karatsuba(&self, other: &Self) -> Self {
		let _span = tracing::trace_span!("karatsuba", limbs = self.size).entered();

		// self = a + 2^n b, other = c + 2^n d. Splitting through the
		// arithmetic shifts keeps a and c in [0, 2^n) whatever the signs.
		let n = self.bit_length().div_ceil(2) as i32;
		let b = self.shift_right(n);
		let a = self.subtract(&b.shift_left(n));
		let d = other.shift_right(n);
		let c = other.subtract(&d.shift_left(n));

		let ((ac, bd), abcd) = rayon::join(
			|| rayon::join(|| a.multiply(&c), || b.multiply(&d)),
			|| a.add(&b).multiply(&c.add(&d)),
		);

		ac.add(&abcd.subtract(&ac).subtract(&bd).shift_left(n))
			.add(&bd.shift_left(2 * n))
	}
}

impl Mul for &LargeInt {
	type Output = LargeInt;

	fn mul(self, rhs: &LargeInt) -> LargeInt {
		self.multiply(rhs)
	}
}

impl Mul for LargeInt {
	type Output = LargeInt;

	fn mul(self, rhs: LargeInt) -> LargeInt {
		self.multiply(&rhs)
	}
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;
	use crate::limbs::MASK_63;

	fn random_with_limbs(rng: &mut StdRng, n: usize) -> LargeInt {
		let mut words: Vec<u64> = (0..n).map(|_| rng.random::<u64>() & MASK_63).collect();
		if let Some(top) = words.last_mut()
			&& *top == 0
		{
			*top = 1;
		}
		LargeInt::raw(rng.random(), n, words)
	}

	#[test]
	fn test_multiply_i64_cases() {
		let x = LargeInt::from_i64(1_000_000_007);
		assert_eq!(x.multiply_i64(0), LargeInt::ZERO);
		assert_eq!(x.multiply_i64(1), x);
		assert_eq!(x.multiply_i64(-3), LargeInt::from_i64(-3_000_000_021));
		assert_eq!(
			LargeInt::from_i64(-5).multiply_i64(-7),
			LargeInt::from_i64(35)
		);
	}

	#[test]
	fn test_multiply_i64_min() {
		// i64::MIN is a sign flip plus a 63-bit shift.
		let product = LargeInt::from_i64(3).multiply_i64(i64::MIN);
		let expected = LargeInt::from_i64(-3).multiply(&LargeInt::one().shift_left(63));
		assert_eq!(product, expected);
	}

	#[test]
	fn test_karatsuba_matches_schoolbook() {
		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..8 {
			let a = random_with_limbs(&mut rng, 64);
			let b = random_with_limbs(&mut rng, 48);
			let product = a.multiply(&b);

			let oracle =
				num_bigint::BigInt::from(&a) * num_bigint::BigInt::from(&b);
			assert_eq!(num_bigint::BigInt::from(&product), oracle);
		}
	}

	#[test]
	fn test_karatsuba_threshold_edge() {
		let mut rng = StdRng::seed_from_u64(1);
		// One operand just below the threshold, one far above.
		let a = random_with_limbs(&mut rng, 200);
		let b = random_with_limbs(&mut rng, KARATSUBA_LIMBS_THRESHOLD - 1);
		let product = a.multiply(&b);

		let oracle = num_bigint::BigInt::from(&a) * num_bigint::BigInt::from(&b);
		assert_eq!(num_bigint::BigInt::from(&product), oracle);
	}

	#[test]
	fn test_multiply_commutes() {
		let mut rng = StdRng::seed_from_u64(2);
		let a = random_with_limbs(&mut rng, 40);
		let b = random_with_limbs(&mut rng, 3);
		assert_eq!(a.multiply(&b), b.multiply(&a));
	}
}
