//! This module defines the interface a sponge must provide in order to back a [`SpongeStream`].
//!
//! A sponge is anything that can absorb bytes, then squeeze out an arbitrary amount of bytes
//! deterministically derived from what was absorbed.
//! The permutation (or hash function) that does the actual work is not implemented here:
//! see [`crate::instantiations`] for adapters over existing hash functions.
//!
//! [`SpongeStream`]: crate::SpongeStream

/// Sponge functions.
mod interface;

#[cfg(test)]
pub(crate) mod mock;

pub use interface::SpongeInterface;
