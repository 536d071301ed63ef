//! Arbitrary-precision signed decimal arithmetic with per-value width caps,
//! plus a knapsack public-key codec built on top of it.
//!
//! [`MpInt`] is the working type: parse it from a decimal literal, bind it
//! to a [`Width`], and combine values with the usual operators or their
//! `checked_*` forms. The [`digits`] module is the sign-free base-10^9
//! kernel underneath; [`knapsack`] packs byte payloads against
//! super-increasing weight sequences.

pub mod digits;
pub mod error;
pub mod knapsack;
pub mod mpint;
pub mod width;

pub use error::Error;
pub use mpint::{MpInt, Sign};
pub use width::Width;
