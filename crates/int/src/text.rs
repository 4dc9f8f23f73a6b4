// Copyright 2025 Irreducible Inc.
//! Radix-based parsing and formatting.

use std::{fmt, str::FromStr};

use crate::{Error, LargeInt, limbs};

impl LargeInt {
	/// Parses `input` in the given radix (2 to 36).
	///
	/// The first character may be a `+` or `-` sign; every remaining
	/// character must be a digit of the radix. Uppercase and lowercase
	/// letters are both accepted.
	pub fn parse(input: &str, radix: u32) -> Result<Self, Error> {
		if !(2..=36).contains(&radix) {
			return Err(Error::RadixOutOfRange { radix });
		}
		let (negative, digits) = match input.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, input.strip_prefix('+').unwrap_or(input)),
		};
		if digits.is_empty() {
			return Err(Error::EmptyInput);
		}
		// Six bits per digit bounds any radix up to 64; one extra limb
		// absorbs the radix-multiply carry.
		let mut words = vec![0u64; (digits.len() * 6) / 64 + 2];
		let mut size = 0usize;
		for ch in digits.chars() {
			let digit = ch.to_digit(radix).ok_or_else(|| Error::InvalidDigit {
				ch,
				radix,
				input: input.to_string(),
			})?;
			size = limbs::mul_word_in_place(&mut words, size, radix as u64);
			size = limbs::add_word(&mut words, size, digit as u64);
		}
		Ok(Self::raw(negative, size, words))
	}

	/// Appends the representation of this value in the given radix to the
	/// sink, lowercase digits, `-` prefix for negatives.
	///
	/// # Panics
	/// Panics if `radix` is outside `2..=36`.
	pub fn write_radix(&self, out: &mut impl fmt::Write, radix: u32) -> fmt::Result {
		assert!((2..=36).contains(&radix), "radix {radix} out of range");
		if self.size == 0 {
			return out.write_char('0');
		}
		if self.negative {
			out.write_char('-')?;
		}
		let mut words = self.limbs[..self.size].to_vec();
		let mut size = self.size;
		let mut digits = Vec::with_capacity(self.bit_length() / 3 + 1);
		while size > 0 {
			let rem = limbs::div_word(&mut words, size, radix as u64);
			while size > 0 && words[size - 1] == 0 {
				size -= 1;
			}
			digits.push(char::from_digit(rem as u32, radix).expect("remainder below radix"));
		}
		for &digit in digits.iter().rev() {
			out.write_char(digit)?;
		}
		Ok(())
	}

	/// The representation in the given radix (2 to 36) as a fresh string.
	///
	/// # Panics
	/// Panics if `radix` is outside `2..=36`.
	pub fn to_string_radix(&self, radix: u32) -> String {
		let mut out = String::new();
		self.write_radix(&mut out, radix)
			.expect("writing to a String cannot fail");
		out
	}
}

impl FromStr for LargeInt {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::parse(s, 10)
	}
}

impl fmt::Display for LargeInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_radix(f, 10)
	}
}

impl fmt::Debug for LargeInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "LargeInt({self})")
	}
}
