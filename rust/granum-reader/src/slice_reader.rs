//! Slice-backed readers, one alias per primitive kind.

use granum_common::{Result, result};

use crate::cursor::ReaderCursor;
use crate::datatype::DatatypeTag;
use crate::reader::{Reader, TypedReader};
use crate::value::{AnyValue, ObjectValue, ReaderElement};

/// A reader over a borrowed slice of values.
///
/// The slice is owned elsewhere; the borrow checker holds the storage alive
/// for as long as any view over it exists. The view itself carries no state
/// beyond the borrow and is `Copy`, so it can be handed to any number of
/// holders and read from any number of threads.
#[derive(Debug)]
pub struct SliceReader<'a, T> {
    values: &'a [T],
}

// Derived `Clone`/`Copy` would bound `T: Copy`; the view is a bare
// reference and is copyable for every kind, the object fallback included.
impl<T> Clone for SliceReader<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceReader<'_, T> {}

impl<'a, T: ReaderElement> SliceReader<'a, T> {
    /// Wraps a borrowed slice of values.
    pub fn new(values: &'a [T]) -> SliceReader<'a, T> {
        SliceReader { values }
    }

    /// Returns the backing slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }
}

impl<'a, T> SliceReader<'a, T>
where
    T: ReaderElement + bytemuck::AnyBitPattern,
{
    /// Reinterprets an externally owned byte buffer as a slice of values.
    ///
    /// Fails with an invalid argument error when the buffer is misaligned
    /// for `T` or its length is not a multiple of the element width.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<SliceReader<'a, T>> {
        match bytemuck::try_cast_slice(bytes) {
            Ok(values) => Ok(SliceReader { values }),
            Err(_) => result::invalid_arg(
                "bytes",
                "buffer must be aligned to and evenly divisible by the element size",
            ),
        }
    }
}

impl<T: ReaderElement> Reader for SliceReader<'_, T> {
    #[inline]
    fn datatype(&self) -> DatatypeTag {
        T::DATATYPE
    }

    #[inline]
    fn len(&self) -> u64 {
        self.values.len() as u64
    }

    // The one boxing call site for this reader family.
    fn get(&self, index: u64) -> Result<AnyValue> {
        self.read(index).map(|value| value.to_any())
    }
}

impl<T: ReaderElement> TypedReader for SliceReader<'_, T> {
    type Value = T;

    #[inline]
    fn read(&self, index: u64) -> Result<T> {
        if index < self.len() {
            Ok(self.values[index as usize].clone())
        } else {
            result::out_of_bounds(index, self.len())
        }
    }
}

impl<'a, 'r, T: ReaderElement> IntoIterator for &'r SliceReader<'a, T> {
    type Item = T;
    type IntoIter = ReaderCursor<'r, SliceReader<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        ReaderCursor::new(self)
    }
}

/// Reader over boolean values.
pub type BooleanReader<'a> = SliceReader<'a, bool>;

/// Reader over 8-bit signed integers.
pub type Int8Reader<'a> = SliceReader<'a, i8>;

/// Reader over 16-bit signed integers.
pub type Int16Reader<'a> = SliceReader<'a, i16>;

/// Reader over 32-bit signed integers.
pub type Int32Reader<'a> = SliceReader<'a, i32>;

/// Reader over 64-bit signed integers.
pub type Int64Reader<'a> = SliceReader<'a, i64>;

/// Reader over 32-bit floats.
pub type Float32Reader<'a> = SliceReader<'a, f32>;

/// Reader over 64-bit floats.
pub type Float64Reader<'a> = SliceReader<'a, f64>;

/// Fallback reader over opaque shared values.
pub type ObjectReader<'a> = SliceReader<'a, ObjectValue>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AnyValue;
    use granum_common::error::ErrorKind;
    use std::sync::Arc;

    #[test]
    fn test_read_within_bounds() {
        let values: [i16; 3] = [10, 20, 30];
        let reader = Int16Reader::new(&values);
        assert_eq!(reader.len(), 3);
        assert!(!reader.is_empty());
        assert_eq!(reader.read(0).unwrap(), 10);
        assert_eq!(reader.read(2).unwrap(), 30);
        assert_eq!(reader.datatype(), DatatypeTag::Int16);
    }

    #[test]
    fn test_read_past_the_end_fails() {
        let values: [i16; 3] = [10, 20, 30];
        let reader = Int16Reader::new(&values);
        let err = reader.read(3).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::OutOfBounds { index: 3, len: 3 }
        ));
        assert!(reader.read(u64::MAX).is_err());
    }

    #[test]
    fn test_empty_reader() {
        let values: [f64; 0] = [];
        let reader = Float64Reader::new(&values);
        assert_eq!(reader.len(), 0);
        assert!(reader.is_empty());
        assert!(reader.read(0).is_err());
        assert_eq!(reader.bounded_size().unwrap(), 0);
    }

    #[test]
    fn test_each_kind_reports_its_tag() {
        assert_eq!(BooleanReader::new(&[true]).datatype(), DatatypeTag::Boolean);
        assert_eq!(Int8Reader::new(&[1]).datatype(), DatatypeTag::Int8);
        assert_eq!(Int16Reader::new(&[1]).datatype(), DatatypeTag::Int16);
        assert_eq!(Int32Reader::new(&[1]).datatype(), DatatypeTag::Int32);
        assert_eq!(Int64Reader::new(&[1]).datatype(), DatatypeTag::Int64);
        assert_eq!(Float32Reader::new(&[1.0]).datatype(), DatatypeTag::Float32);
        assert_eq!(Float64Reader::new(&[1.0]).datatype(), DatatypeTag::Float64);
        let objects: [ObjectValue; 1] = [Arc::new(0u8)];
        assert_eq!(ObjectReader::new(&objects).datatype(), DatatypeTag::Object);
    }

    #[test]
    fn test_boolean_reader() {
        let values = [true, false, true];
        let reader = BooleanReader::new(&values);
        assert_eq!(reader.read(1).unwrap(), false);
        assert_eq!(reader.get(0).unwrap(), AnyValue::Boolean(true));
        assert_eq!(reader.iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn test_object_reader_shares_payloads() {
        let first: ObjectValue = Arc::new(String::from("alpha"));
        let second: ObjectValue = Arc::new(7u64);
        let objects = [Arc::clone(&first), Arc::clone(&second)];
        let reader = ObjectReader::new(&objects);

        let value = reader.read(0).unwrap();
        assert!(Arc::ptr_eq(&value, &first));
        let boxed = reader.get(1).unwrap();
        assert_eq!(boxed.downcast_ref::<u64>(), Some(&7));
        assert_eq!(boxed, AnyValue::Object(second));
    }

    #[test]
    fn test_from_bytes() {
        let values: [i16; 4] = [1, 2, 3, 4];
        let bytes: &[u8] = bytemuck::cast_slice(&values);
        let reader = Int16Reader::from_bytes(bytes).unwrap();
        assert_eq!(reader.len(), 4);
        assert_eq!(reader.read(2).unwrap(), 3);
        assert_eq!(reader.as_slice(), &values);
    }

    #[test]
    fn test_from_bytes_rejects_ragged_buffers() {
        let values: [i32; 2] = [0x01020304, 0x05060708];
        let bytes: &[u8] = bytemuck::cast_slice(&values);
        let err = Int32Reader::from_bytes(&bytes[..7]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_reads_are_stable() {
        let values: Vec<i64> = (0..256).map(|_| fastrand::i64(..)).collect();
        let reader = Int64Reader::new(&values);
        for _ in 0..128 {
            let index = fastrand::u64(0..values.len() as u64);
            let expected = values[index as usize];
            assert_eq!(reader.read(index).unwrap(), expected);
            assert_eq!(reader.read(index).unwrap(), expected);
            assert_eq!(reader.get(index).unwrap(), AnyValue::Int64(expected));
        }
    }

    #[test]
    fn test_copied_views_share_the_storage() {
        let values = [1.5f32, 2.5];
        let reader = Float32Reader::new(&values);
        let copy = reader;
        assert_eq!(reader.read(0).unwrap(), copy.read(0).unwrap());
        assert_eq!(copy.as_slice().as_ptr(), values.as_ptr());
    }

    #[test]
    fn test_into_iterator_over_a_reference() {
        let values = [5i8, 6, 7];
        let reader = Int8Reader::new(&values);
        let mut collected = Vec::new();
        for value in &reader {
            collected.push(value);
        }
        assert_eq!(collected, values);
    }
}
