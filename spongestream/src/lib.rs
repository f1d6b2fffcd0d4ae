//! A keyed pseudorandom stream over an extendable-output sponge.
//!
//! # Examples
//!
//! A [`SpongeStream`] is built from a seed, after which it can absorb more input
//! and squeeze an arbitrary amount of output.
//! ```
//! use spongestream::Shake256Stream;
//!
//! let mut stream = Shake256Stream::new(b"").unwrap();
//! assert_eq!(stream.squeeze(4).unwrap(), [0x46, 0xb9, 0xdd, 0x2b]);
//!
//! // Going back to the seed replays the same output.
//! stream.reset().unwrap();
//! stream.absorb(b"nonce").unwrap();
//! let block = stream.squeeze(64).unwrap();
//!
//! // Reseeding ratchets the sponge forward: the old output cannot be recovered from the new state.
//! stream.reseed().unwrap();
//! assert_ne!(stream.squeeze(64).unwrap(), block);
//! ```
//!
//! The same stream doubles as a symmetric stream cipher through [`SpongeStream::xor_key_stream`].
//! Both parties must start from the same state, and a state must never encrypt two messages.
//!
//! # Supported hash functions
//!
//! All hash functions are available in [`instantiations`]:
//!
//! 1. [`Shake128`][instantiations::Shake128], based on the extensible output function [`sha3::Shake128`].
//! Available with the `sha3` feature flag (enabled by default);
//! 2. [`Shake256`][instantiations::Shake256], based on the extensible output function [`sha3::Shake256`].
//! Available with the `sha3` feature flag (enabled by default).
//!
//! # Implementing your own hash functions
//!
//! Any sponge implementing [`SpongeInterface`] can back a stream.
//! The extensible output function [`instantiations::XOF`]
//! wraps an object implementing [`digest::ExtendableOutput`]
//! and implements the sponge interface with little-to-no code.
//!
//! # Feature flags
//!
//! - `sha3` (default): SHAKE instantiations and [`Shake256Stream`];
//! - `std` (default): [`std::io::Read`] and [`std::io::Write`] for [`SpongeStream`];
//! - `rand`: `rand::TryRngCore` and `rand::TryCryptoRng` for [`SpongeStream`].

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Definition of the [`SpongeInterface`] wrapped by a stream.
pub mod sponge;

/// Instantiations of the [`SpongeInterface`].
pub mod instantiations;

/// The [`SpongeStream`] itself.
mod stream;

/// Defines [`Error`] and [`SpongeError`].
mod error;

pub use error::{Error, SpongeError};
pub use sponge::SpongeInterface;
#[cfg(feature = "sha3")]
pub use stream::Shake256Stream;
pub use stream::{SpongeStream, RESEED_LEN};
