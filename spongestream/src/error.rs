//! Errors raised by a [`SpongeStream`](crate::SpongeStream) and by the sponges it wraps.
//!
//! None of these errors are recoverable: they either signal a caller bug
//! or a sponge that can no longer be trusted to produce key material.

use thiserror::Error;

/// Failures reported by a [`SpongeInterface`](crate::SpongeInterface) implementation.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Error)]
pub enum SpongeError {
    /// The sponge has been finalized for squeezing and cannot take more input.
    #[error("cannot absorb after squeezing has started")]
    AbsorbAfterSqueeze,
    /// The sponge ran out of resources to produce or consume bytes.
    #[error("sponge exhausted")]
    Exhausted,
}

/// Errors returned by [`SpongeStream`](crate::SpongeStream) operations.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Error)]
pub enum Error {
    /// The keystream destination cannot hold the source.
    #[error("dst too short: {available} bytes available, {needed} needed")]
    DestinationTooShort { needed: usize, available: usize },
    /// The sponge returned fewer bytes than requested without failing.
    #[error("short read on key: requested {requested} bytes, got {read}")]
    ShortRead { requested: usize, read: usize },
    /// The sponge accepted fewer bytes than it was given without failing.
    #[error("short write: wrote {written} of {requested} bytes")]
    ShortWrite { requested: usize, written: usize },
    #[error(transparent)]
    Sponge(#[from] SpongeError),
}

impl Error {
    /// Returns `true` if the error is a violation of the calling contract,
    /// as opposed to a failure of the underlying sponge.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::DestinationTooShort { .. })
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        let kind = if err.is_usage() {
            std::io::ErrorKind::InvalidInput
        } else {
            std::io::ErrorKind::Other
        };
        Self::new(kind, err)
    }
}
