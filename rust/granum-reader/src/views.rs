//! Protocol projections of a kind-erased reader.
//!
//! Both views are stateless wrappers: one reader value can satisfy the
//! collection protocol and the function protocol at the same time without
//! introducing new concrete reader types, and every operation bottoms out
//! in the same positional read.

use granum_common::Result;

use crate::datatype::DatatypeTag;
use crate::reader::Reader;
use crate::value::AnyValue;

/// Projects a reader as a sized, random-access collection.
#[derive(Clone, Copy)]
pub struct ListView<'a> {
    reader: &'a (dyn Reader + 'a),
}

impl<'a> ListView<'a> {
    pub fn new(reader: &'a (dyn Reader + 'a)) -> ListView<'a> {
        ListView { reader }
    }

    /// Returns the element count as a 32-bit collection size.
    ///
    /// Delegates the narrowing to the reader, so lengths past `i32::MAX`
    /// fail rather than truncate.
    pub fn size(&self) -> Result<i32> {
        self.reader.bounded_size()
    }

    /// Returns the boxed value at a collection index.
    ///
    /// A negative index fails as an invalid argument before any bounds
    /// check.
    pub fn get(&self, index: i32) -> Result<AnyValue> {
        granum_common::verify_arg!(index, index >= 0);
        self.reader.get(index as u64)
    }

    /// Returns `true` if the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Returns the datatype tag of the underlying reader.
    pub fn datatype(&self) -> DatatypeTag {
        self.reader.datatype()
    }
}

/// Projects a reader as a unary function from index to value.
#[derive(Clone, Copy)]
pub struct InvocableView<'a> {
    reader: &'a (dyn Reader + 'a),
}

impl<'a> InvocableView<'a> {
    pub fn new(reader: &'a (dyn Reader + 'a)) -> InvocableView<'a> {
        InvocableView { reader }
    }

    /// Applies the reader to a dynamically typed index argument.
    ///
    /// The argument is coerced before bounds are checked; arguments that do
    /// not coerce to a non-negative 64-bit index fail as invalid.
    pub fn invoke(&self, arg: &AnyValue) -> Result<AnyValue> {
        self.reader.invoke(arg)
    }

    /// Applies the reader to an index already known to be integral.
    pub fn invoke_index(&self, index: u64) -> Result<AnyValue> {
        self.reader.get(index)
    }
}
