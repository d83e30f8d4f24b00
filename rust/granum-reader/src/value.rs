//! Dynamically typed values produced at the boxing boundary.
//!
//! The statically typed `read` path of a reader never constructs an
//! [`AnyValue`]; only the generic `get`/`invoke` paths do, and they do it
//! at exactly one call site per kind ([`ReaderElement::to_any`]).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::datatype::DatatypeTag;

/// Shared handle to an opaque value carried by an object reader.
pub type ObjectValue = Arc<dyn Any + Send + Sync>;

/// A value lifted out of a typed reader for kind-agnostic consumption.
///
/// Represented as a closed tagged union rather than an open-ended dynamic
/// type, so consumers can match on it without reflection. The object
/// variant holds a shared handle and compares by pointer identity.
#[derive(Clone)]
pub enum AnyValue {
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Object(ObjectValue),
}

impl AnyValue {
    /// Returns the datatype tag of the carried value.
    pub fn datatype(&self) -> DatatypeTag {
        match self {
            AnyValue::Boolean(_) => DatatypeTag::Boolean,
            AnyValue::Int8(_) => DatatypeTag::Int8,
            AnyValue::Int16(_) => DatatypeTag::Int16,
            AnyValue::Int32(_) => DatatypeTag::Int32,
            AnyValue::Int64(_) => DatatypeTag::Int64,
            AnyValue::Float32(_) => DatatypeTag::Float32,
            AnyValue::Float64(_) => DatatypeTag::Float64,
            AnyValue::Object(_) => DatatypeTag::Object,
        }
    }

    /// Attempts to coerce this value to a non-negative 64-bit index.
    ///
    /// Integer values coerce when non-negative. Float values coerce when
    /// finite, non-negative, with zero fractional part and within the
    /// `u64` domain. Boolean and object values never coerce.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            AnyValue::Int8(v) => u64::try_from(*v).ok(),
            AnyValue::Int16(v) => u64::try_from(*v).ok(),
            AnyValue::Int32(v) => u64::try_from(*v).ok(),
            AnyValue::Int64(v) => u64::try_from(*v).ok(),
            AnyValue::Float32(v) => float_to_index(f64::from(*v)),
            AnyValue::Float64(v) => float_to_index(*v),
            AnyValue::Boolean(_) | AnyValue::Object(_) => None,
        }
    }

    /// Borrows the object payload downcast to `T`, if this is an object
    /// value holding a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            AnyValue::Object(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

fn float_to_index(value: f64) -> Option<u64> {
    // `u64::MAX as f64` rounds up to 2^64, the first value outside the
    // u64 domain, hence the strict comparison.
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64)
        .then(|| value as u64)
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &AnyValue) -> bool {
        match (self, other) {
            (AnyValue::Boolean(a), AnyValue::Boolean(b)) => a == b,
            (AnyValue::Int8(a), AnyValue::Int8(b)) => a == b,
            (AnyValue::Int16(a), AnyValue::Int16(b)) => a == b,
            (AnyValue::Int32(a), AnyValue::Int32(b)) => a == b,
            (AnyValue::Int64(a), AnyValue::Int64(b)) => a == b,
            (AnyValue::Float32(a), AnyValue::Float32(b)) => a == b,
            (AnyValue::Float64(a), AnyValue::Float64(b)) => a == b,
            (AnyValue::Object(a), AnyValue::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Boolean(v) => f.debug_tuple("Boolean").field(v).finish(),
            AnyValue::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            AnyValue::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            AnyValue::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            AnyValue::Int64(v) => f.debug_tuple("Int64").field(v).finish(),
            AnyValue::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            AnyValue::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            AnyValue::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Boolean(v) => write!(f, "{v}"),
            AnyValue::Int8(v) => write!(f, "{v}"),
            AnyValue::Int16(v) => write!(f, "{v}"),
            AnyValue::Int32(v) => write!(f, "{v}"),
            AnyValue::Int64(v) => write!(f, "{v}"),
            AnyValue::Float32(v) => write!(f, "{v}"),
            AnyValue::Float64(v) => write!(f, "{v}"),
            AnyValue::Object(_) => f.write_str("<object>"),
        }
    }
}

/// Element type of a typed reader.
///
/// Supplies the two irreducible per-kind facts: the datatype tag shared by
/// every reader over this element type, and the lifting of a single value
/// across the boxing boundary.
pub trait ReaderElement: Clone + Send + Sync + 'static {
    /// The tag reported by readers over this element type.
    const DATATYPE: DatatypeTag;

    /// Lifts the value into its dynamically typed representation.
    fn to_any(&self) -> AnyValue;
}

macro_rules! primitive_element {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for AnyValue {
            fn from(value: $ty) -> AnyValue {
                AnyValue::$variant(value)
            }
        }

        impl ReaderElement for $ty {
            const DATATYPE: DatatypeTag = DatatypeTag::$variant;

            #[inline]
            fn to_any(&self) -> AnyValue {
                AnyValue::$variant(*self)
            }
        }
    };
}

primitive_element!(bool, Boolean);
primitive_element!(i8, Int8);
primitive_element!(i16, Int16);
primitive_element!(i32, Int32);
primitive_element!(i64, Int64);
primitive_element!(f32, Float32);
primitive_element!(f64, Float64);

impl From<ObjectValue> for AnyValue {
    fn from(value: ObjectValue) -> AnyValue {
        AnyValue::Object(value)
    }
}

impl ReaderElement for ObjectValue {
    const DATATYPE: DatatypeTag = DatatypeTag::Object;

    #[inline]
    fn to_any(&self) -> AnyValue {
        AnyValue::Object(Arc::clone(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_index_coercion() {
        assert_eq!(AnyValue::Int8(5).as_index(), Some(5));
        assert_eq!(AnyValue::Int16(300).as_index(), Some(300));
        assert_eq!(AnyValue::Int32(-1).as_index(), None);
        assert_eq!(AnyValue::Int64(i64::MAX).as_index(), Some(i64::MAX as u64));
        assert_eq!(AnyValue::Int64(-7).as_index(), None);
    }

    #[test]
    fn float_index_coercion() {
        assert_eq!(AnyValue::Float64(2.0).as_index(), Some(2));
        assert_eq!(AnyValue::Float32(0.0).as_index(), Some(0));
        assert_eq!(AnyValue::Float64(1.5).as_index(), None);
        assert_eq!(AnyValue::Float64(-1.0).as_index(), None);
        assert_eq!(AnyValue::Float64(f64::NAN).as_index(), None);
        assert_eq!(AnyValue::Float64(f64::INFINITY).as_index(), None);
        assert_eq!(AnyValue::Float32(-0.0).as_index(), Some(0));
    }

    #[test]
    fn non_numeric_values_never_coerce() {
        assert_eq!(AnyValue::Boolean(true).as_index(), None);
        let obj: ObjectValue = Arc::new(42u32);
        assert_eq!(AnyValue::Object(obj).as_index(), None);
    }

    #[test]
    fn object_equality_is_pointer_identity() {
        let a: ObjectValue = Arc::new(String::from("payload"));
        let b: ObjectValue = Arc::new(String::from("payload"));
        assert_eq!(AnyValue::Object(Arc::clone(&a)), AnyValue::Object(a.clone()));
        assert_ne!(AnyValue::Object(a), AnyValue::Object(b));
    }

    #[test]
    fn object_downcast() {
        let obj: ObjectValue = Arc::new(String::from("payload"));
        let value = AnyValue::Object(obj);
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("payload"));
        assert!(value.downcast_ref::<u32>().is_none());
        assert!(AnyValue::Int32(1).downcast_ref::<i32>().is_none());
    }

    #[test]
    fn element_tags_match_kinds() {
        assert_eq!(<bool as ReaderElement>::DATATYPE, DatatypeTag::Boolean);
        assert_eq!(<i16 as ReaderElement>::DATATYPE, DatatypeTag::Int16);
        assert_eq!(<f64 as ReaderElement>::DATATYPE, DatatypeTag::Float64);
        assert_eq!(<ObjectValue as ReaderElement>::DATATYPE, DatatypeTag::Object);
        assert_eq!(10i16.to_any(), AnyValue::Int16(10));
    }
}
