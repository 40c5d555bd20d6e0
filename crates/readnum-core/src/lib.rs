//! # readnum-core
//!
//! Validated numeric input from byte streams.
//!
//! Interactive programs that read numbers from stdin need two things the
//! bare stream does not give them: a line reader that cannot be broken by
//! arbitrarily long input, and a parse loop that keeps the stream aligned
//! at a line boundary no matter what the user typed. This crate provides
//! both, in pure safe Rust.
//!
//! ```no_run
//! let stdin = std::io::stdin();
//! let mut input = stdin.lock();
//! // Re-prompts on stderr until a line parses as i32; 0 on end of input.
//! let n: i32 = readnum_core::read_scalar(&mut input);
//! ```

#![deny(unsafe_code)]

pub mod convert;
pub mod line;
pub mod scalar;

pub use line::{LineBuf, ReadOutcome, drain_delim, drain_line, read_delim, read_line};
pub use scalar::{Attempt, Scalar, read_scalar, read_scalar_from};
