// Copyright 2025 Irreducible Inc.

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Serialize data into a byte buffer.
pub trait SerializeBytes {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError>;
}

/// Deserialize data from a byte buffer.
pub trait DeserializeBytes {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized;
}

#[derive(Error, Debug, Clone)]
pub enum SerializationError {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("Not enough data in read buffer to deserialize")]
	NotEnoughBytes,
	#[error("Invalid construction of {name}")]
	InvalidConstruction { name: &'static str },
	#[error("usize {size} is too large to serialize (max is {max})", max = u32::MAX)]
	UsizeTooLarge { size: usize },
}

impl<T: SerializeBytes + ?Sized> SerializeBytes for &T {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		(**self).serialize(write_buf)
	}
}

impl SerializeBytes for usize {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		let value: u32 = (*self)
			.try_into()
			.map_err(|_| SerializationError::UsizeTooLarge { size: *self })?;
		SerializeBytes::serialize(&value, &mut write_buf)
	}
}

impl DeserializeBytes for usize {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		let value: u32 = DeserializeBytes::deserialize(&mut read_buf)?;
		Ok(value as Self)
	}
}

impl SerializeBytes for u64 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, std::mem::size_of::<Self>())?;
		write_buf.put_u64_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u64 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		assert_enough_data_for(&read_buf, std::mem::size_of::<Self>())?;
		Ok(read_buf.get_u64_le())
	}
}

impl SerializeBytes for u32 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, std::mem::size_of::<Self>())?;
		write_buf.put_u32_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u32 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		assert_enough_data_for(&read_buf, std::mem::size_of::<Self>())?;
		Ok(read_buf.get_u32_le())
	}
}

impl SerializeBytes for u8 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, std::mem::size_of::<Self>())?;
		write_buf.put_u8(*self);
		Ok(())
	}
}

impl DeserializeBytes for u8 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		assert_enough_data_for(&read_buf, std::mem::size_of::<Self>())?;
		Ok(read_buf.get_u8())
	}
}

impl SerializeBytes for bool {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		u8::serialize(&(*self as u8), write_buf)
	}
}

impl DeserializeBytes for bool {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		Ok(u8::deserialize(read_buf)? != 0)
	}
}

impl<T: SerializeBytes> SerializeBytes for [T] {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		SerializeBytes::serialize(&self.len(), &mut write_buf)?;
		self.iter()
			.try_for_each(|item| SerializeBytes::serialize(item, &mut write_buf))
	}
}

impl<T: SerializeBytes> SerializeBytes for Vec<T> {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		SerializeBytes::serialize(self.as_slice(), &mut write_buf)
	}
}

impl<T: DeserializeBytes> DeserializeBytes for Vec<T> {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		let len: usize = DeserializeBytes::deserialize(&mut read_buf)?;
		(0..len)
			.map(|_| DeserializeBytes::deserialize(&mut read_buf))
			.collect()
	}
}

#[inline]
pub fn assert_enough_space_for(
	write_buf: &impl BufMut,
	size: usize,
) -> Result<(), SerializationError> {
	if write_buf.remaining_mut() < size {
		return Err(SerializationError::WriteBufferFull);
	}
	Ok(())
}

#[inline]
pub fn assert_enough_data_for(read_buf: &impl Buf, size: usize) -> Result<(), SerializationError> {
	if read_buf.remaining() < size {
		return Err(SerializationError::NotEnoughBytes);
	}
	Ok(())
}
