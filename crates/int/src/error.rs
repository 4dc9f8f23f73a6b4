// Copyright 2025 Irreducible Inc.
//! Error definitions for the integer crate.

use crate::LargeInt;

/// Errors reported by the fallible [`LargeInt`] operations.
///
/// Every error is raised synchronously at the call site; no operation
/// retries or swallows a failure. Narrowing conversions (`to_i32`,
/// `to_i64`) are deliberately lossy and do not error.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("division by zero")]
	DivisionByZero,
	#[error("modulus {modulus} is not greater than zero")]
	NonPositiveModulus { modulus: LargeInt },
	#[error("no modulus is set in the current scope")]
	ModulusNotSet,
	#[error("invalid digit {ch:?} for radix {radix} in {input:?}")]
	InvalidDigit { ch: char, radix: u32, input: String },
	#[error("numeric input is empty")]
	EmptyInput,
	#[error("radix {radix} is outside the supported range 2..=36")]
	RadixOutOfRange { radix: u32 },
	#[error("buffer of {len} bytes cannot hold the {needed}-byte encoding")]
	BufferTooSmall { len: usize, needed: usize },
}
