//! The reader contracts: the kind-erased access protocols and the typed
//! read path layered on top of them.

use granum_common::{Result, result};

use crate::cursor::ReaderCursor;
use crate::datatype::DatatypeTag;
use crate::value::{AnyValue, ReaderElement};

/// Kind-agnostic surface of a reader.
///
/// `&dyn Reader` is the hand-off currency for consumers that dispatch on
/// [`datatype`](Reader::datatype) at runtime instead of knowing the element
/// type at compile time. Values observed through this surface always pass
/// the boxing boundary; statically typed consumers use
/// [`TypedReader::read`] instead.
///
/// Implementors supply `datatype`, `len` and `get`; the remaining protocol
/// operations are provided once on top of those and shared by all kinds.
pub trait Reader: Send + Sync {
    /// Returns the datatype tag of this reader's kind. Constant per
    /// concrete kind; no allocation.
    fn datatype(&self) -> DatatypeTag;

    /// Returns the logical element count.
    ///
    /// This is the sole authority for bounds: a positional read at `index`
    /// is defined iff `index < len()`.
    fn len(&self) -> u64;

    /// Returns the value at `index`, lifted across the boxing boundary.
    ///
    /// Fails with [`ErrorKind::OutOfBounds`] for `index >= len()`; the
    /// read never clamps, wraps or substitutes a default.
    ///
    /// [`ErrorKind::OutOfBounds`]: granum_common::error::ErrorKind::OutOfBounds
    fn get(&self, index: u64) -> Result<AnyValue>;

    /// Returns `true` if the reader has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Narrows the logical length to a 32-bit collection size.
    ///
    /// Fails with [`ErrorKind::Overflow`] when the length exceeds
    /// `i32::MAX`; the narrowing never truncates silently.
    ///
    /// [`ErrorKind::Overflow`]: granum_common::error::ErrorKind::Overflow
    fn bounded_size(&self) -> Result<i32> {
        let len = self.len();
        match i32::try_from(len) {
            Ok(size) => Ok(size),
            Err(_) => result::overflow(len),
        }
    }

    /// Applies the reader as a unary function from index to value.
    ///
    /// The argument is coerced to a non-negative 64-bit index before any
    /// bounds check; an argument that does not coerce fails with
    /// [`ErrorKind::InvalidArgument`] even on an empty reader.
    ///
    /// [`ErrorKind::InvalidArgument`]: granum_common::error::ErrorKind::InvalidArgument
    fn invoke(&self, arg: &AnyValue) -> Result<AnyValue> {
        match arg.as_index() {
            Some(index) => self.get(index),
            None => result::invalid_arg("arg", "argument must coerce to a non-negative index"),
        }
    }
}

/// A reader whose element type is known at compile time.
///
/// Adds the single performance-critical operation to the kind-erased
/// surface: [`read`](TypedReader::read) returns the value itself, unboxed.
/// Everything else a reader can do is inherited from [`Reader`] and
/// ultimately resolves to the same positional read, so there is exactly
/// one hot path per kind and a shared set of presentation wrappers around
/// it.
///
/// Readers are immutable after construction: the logical length never
/// changes, and instances may be read concurrently from any number of
/// threads without locking.
pub trait TypedReader: Reader {
    /// The element type carried by this reader.
    type Value: ReaderElement;

    /// Returns the value at `index`, unboxed.
    ///
    /// Same bounds contract as [`Reader::get`]: fails with an
    /// out-of-bounds error for `index >= len()`.
    fn read(&self, index: u64) -> Result<Self::Value>;

    /// Starts a fresh single-pass cursor over all elements.
    ///
    /// Each traversal needs its own cursor; concurrent traversers must not
    /// share one.
    fn iter(&self) -> ReaderCursor<'_, Self>
    where
        Self: Sized,
    {
        ReaderCursor::new(self)
    }
}
