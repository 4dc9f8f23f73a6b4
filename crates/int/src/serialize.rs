// Copyright 2025 Irreducible Inc.
//! Two's-complement byte encoding, interchangeable with the canonical
//! big-integer byte form.

use bytes::{Buf, BufMut};
use largeint_utils::serialization::{
	DeserializeBytes, SerializationError, SerializeBytes, assert_enough_data_for,
	assert_enough_space_for,
};

use crate::{
	Error, LargeInt,
	limbs::{self, MASK_63},
};

impl LargeInt {
	/// Decodes a big-endian two's-complement byte string.
	///
	/// The encoding matches `java.math.BigInteger#toByteArray` and
	/// [`num_bigint::BigInt::to_signed_bytes_be`], so values can round-trip
	/// through either.
	///
	/// # Panics
	/// Panics if `bytes` is empty; a two's-complement encoding has at
	/// least one byte.
	pub fn from_be_bytes(bytes: &[u8]) -> Self {
		assert!(!bytes.is_empty(), "two's-complement encoding has at least one byte");
		let negative = bytes[0] & 0x80 != 0;
		// Sized for the magnitude plus the +1 of the complement fix-up.
		let mut words = vec![0u64; (bytes.len() * 8 + 1) / 63 + 1];
		let mut word_index = 0usize;
		let mut bit_index = 0i32;
		for &byte in bytes.iter().rev() {
			// Negative input packs the one's complement; the +1 below
			// completes the two's-complement conversion.
			let bits = u64::from(if negative { !byte } else { byte });
			if bit_index < 63 - 8 {
				words[word_index] |= bits << bit_index;
			} else {
				words[word_index] |= (bits << bit_index) & MASK_63;
				bit_index -= 63; // now in -8..=-1
				word_index += 1;
				words[word_index] = bits >> -bit_index;
			}
			bit_index += 8;
		}
		let mut size = word_index + 1;
		while size > 0 && words[size - 1] == 0 {
			size -= 1;
		}
		if negative {
			size = limbs::add_word(&mut words, size, 1);
		}
		Self::raw(negative, size, words)
	}

	/// Number of bytes of the minimal two's-complement encoding.
	fn be_bytes_len(&self) -> usize {
		(self.bit_length() >> 3) + 1
	}

	/// Writes the big-endian two's-complement encoding into `out` and
	/// returns the number of bytes written, `bit_length() / 8 + 1`.
	///
	/// Zero encodes as the single byte `0x00`. Fails with
	/// [`Error::BufferTooSmall`] when `out` cannot hold the encoding.
	pub fn write_be_bytes(&self, out: &mut [u8]) -> Result<usize, Error> {
		let needed = self.be_bytes_len();
		if out.len() < needed {
			return Err(Error::BufferTooSmall {
				len: out.len(),
				needed,
			});
		}
		if self.negative {
			// Subtract one from the magnitude and invert while unpacking:
			// the two's complement emerges without an intermediate value.
			let mut word_index = 0usize;
			let mut word = self.limbs[0].wrapping_sub(1);
			let mut borrow = ((word as i64) >> 63) as u64; // all-ones on borrow
			word = !word & MASK_63;
			let mut bit_index = 0i32;
			for i in (0..needed).rev() {
				if bit_index < 63 - 8 {
					out[i] = word as u8;
					word >>= 8;
				} else {
					let bits = word as u8;
					word_index += 1;
					word = if word_index < self.size {
						self.limbs[word_index].wrapping_add(borrow)
					} else {
						borrow
					};
					borrow = ((word as i64) >> 63) as u64;
					word = !word & MASK_63;
					bit_index -= 63; // now in -8..=-1
					out[i] = ((word << -bit_index) as u8) | bits;
					word >>= 8 + bit_index;
				}
				bit_index += 8;
			}
		} else if self.size != 0 {
			let mut word_index = 0usize;
			let mut word = self.limbs[0];
			let mut bit_index = 0i32;
			for i in (0..needed).rev() {
				if bit_index < 63 - 8 {
					out[i] = word as u8;
					word >>= 8;
				} else {
					let bits = word as u8;
					word_index += 1;
					word = if word_index < self.size {
						self.limbs[word_index]
					} else {
						0
					};
					bit_index -= 63; // now in -8..=-1
					out[i] = ((word << -bit_index) as u8) | bits;
					word >>= 8 + bit_index;
				}
				bit_index += 8;
			}
		} else {
			out[0] = 0;
		}
		Ok(needed)
	}

	/// The minimal two's-complement encoding as a fresh byte vector.
	pub fn to_be_bytes(&self) -> Vec<u8> {
		let mut out = vec![0u8; self.be_bytes_len()];
		self.write_be_bytes(&mut out).expect("buffer sized to fit");
		out
	}
}

impl From<&num_bigint::BigInt> for LargeInt {
	fn from(value: &num_bigint::BigInt) -> Self {
		Self::from_be_bytes(&value.to_signed_bytes_be())
	}
}

impl From<&LargeInt> for num_bigint::BigInt {
	fn from(value: &LargeInt) -> Self {
		num_bigint::BigInt::from_signed_bytes_be(&value.to_be_bytes())
	}
}

impl SerializeBytes for LargeInt {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		let bytes = self.to_be_bytes();
		SerializeBytes::serialize(&bytes.len(), &mut write_buf)?;
		assert_enough_space_for(&write_buf, bytes.len())?;
		write_buf.put_slice(&bytes);
		Ok(())
	}
}

impl DeserializeBytes for LargeInt {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		let len: usize = DeserializeBytes::deserialize(&mut read_buf)?;
		if len == 0 {
			return Err(SerializationError::InvalidConstruction { name: "LargeInt" });
		}
		assert_enough_data_for(&read_buf, len)?;
		let bytes = read_buf.copy_to_bytes(len);
		Ok(Self::from_be_bytes(&bytes))
	}
}
