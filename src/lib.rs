//! # Runtime-Sized Bit Vectors
//!
//! *A fixed-width bit register whose width is only known at runtime.*
//!
//! ## Intuition First
//!
//! `std::bitset`-style registers are wonderful until the width has to come
//! from user input, a file header, or a wire format. A width baked into the
//! type cannot do that; a `Vec<bool>` can, but wastes a byte per bit and
//! gives up word-parallel operations entirely.
//!
//! This crate stores the vector as a run of 64-bit words and performs every
//! bulk operation word-at-a-time: AND, OR, XOR, complement, population
//! count, and arbitrary shifts that cross word boundaries.
//!
//! ## The Problem
//!
//! A runtime width almost never lands on a word boundary, so the highest
//! word carries *padding bits* that are physically stored but semantically
//! absent. Whole-vector operations (complement in particular) happily set
//! those padding bits, and the classic failure of hand-rolled bit vectors is
//! letting them leak into counts, comparisons, or shifted-in data.
//!
//! The discipline here: a per-word significance mask is kept alongside the
//! payload, and every query that aggregates across words combines
//! `bits & mask` before looking at anything.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`BitVector`]**: the storage engine with set/reset/flip/test, masked
//!   queries, binary logic, and the cross-word shift algorithm.
//! - **[`BitRef`]**: a borrowing single-bit handle for `get`/`set`/`flip`
//!   through a validated position.
//!
//! Width is fixed at construction; "resizing" means building a new vector
//! (parsing a binary-digit string does exactly that). Every width-zero
//! construction fails with [`Error::InvalidSize`], so `size >= 1` holds for
//! every observable vector.
//!
//! The type is single-threaded: concurrent mutation must be serialized by
//! the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitref;
pub mod bitvec;
pub mod error;

pub use bitref::BitRef;
pub use bitvec::{BitVector, WORD_WIDTH};
pub use error::{Error, Result};
