//! Typed reader views for columnar data access.
//!
//! This crate is the foundation layer of the granum data-access stack: a
//! family of read-only, randomly addressable reader views, one per primitive
//! kind (boolean, 8/16/32/64-bit integers, 32/64-bit floats, plus an opaque
//! object fallback), each exposing its backing values through three uniform
//! access protocols at once.
//!
//! # Core Concepts
//!
//! ## Readers
//!
//! A reader is a fixed-length view over values of a single kind. It owns no
//! storage; it borrows a slice supplied by an external buffer owner, and the
//! borrow checker guarantees the storage outlives every view over it.
//! Readers are immutable and freely shareable across threads.
//!
//! ## One read path, three protocols
//!
//! Every access protocol resolves to the same positional read:
//!
//! - **Random access**: [`TypedReader::read`] (unboxed) and
//!   [`Reader::get`] (boxed), with [`Reader::len`] as the sole bounds
//!   authority.
//! - **Forward iteration**: [`ReaderCursor`], a single-pass cursor created
//!   fresh per traversal.
//! - **Function application**: [`Reader::invoke`], the reader applied as a
//!   unary function from index to value.
//!
//! ## The boxing boundary
//!
//! The statically typed `read` path never allocates or boxes. Consumers
//! that do not know the element type at compile time go through
//! [`AnyValue`], a closed tagged union constructed at exactly one call site
//! per kind, and dispatch on [`DatatypeTag`] instead of reflection.
//!
//! # Main Components
//!
//! - [`Reader`]: the kind-erased surface: `datatype`/`len`/`get` plus the
//!   shared adapter set as provided methods; `&dyn Reader` is the hand-off
//!   currency for kind-agnostic consumers.
//! - [`TypedReader`]: the typed layer on top of it, adding the unboxed
//!   `read` hot path and cursor creation.
//! - [`SliceReader`] and its per-kind aliases ([`BooleanReader`],
//!   [`Int8Reader`], [`Int16Reader`], [`Int32Reader`], [`Int64Reader`],
//!   [`Float32Reader`], [`Float64Reader`], [`ObjectReader`]): the concrete
//!   slice-backed reader family.
//! - [`ListView`] / [`InvocableView`]: stateless protocol projections over
//!   a kind-erased reader.

pub mod cursor;
pub mod datatype;
pub mod reader;
pub mod slice_reader;
pub mod value;
pub mod views;

pub use cursor::ReaderCursor;
pub use datatype::DatatypeTag;
pub use reader::{Reader, TypedReader};
pub use slice_reader::{
    BooleanReader, Float32Reader, Float64Reader, Int8Reader, Int16Reader, Int32Reader, Int64Reader,
    ObjectReader, SliceReader,
};
pub use value::{AnyValue, ObjectValue, ReaderElement};
pub use views::{InvocableView, ListView};
