//! A keyed pseudorandom stream on top of a [`SpongeInterface`].

use alloc::{vec, vec::Vec};
use core::fmt;

use tracing::{debug, instrument, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{error::Error, sponge::SpongeInterface};

/// Number of bytes squeezed out of the current state by [`SpongeStream::reseed`]
/// to key the replacement sponge.
pub const RESEED_LEN: usize = 128;

/// A [`SpongeStream`] over SHAKE256.
#[cfg(feature = "sha3")]
pub type Shake256Stream = SpongeStream<crate::instantiations::Shake256>;

/// A seeded stream of pseudorandom bytes, usable as a symmetric stream cipher.
///
/// The stream wraps a single sponge which absorbs the seed at construction.
/// From there, callers may [`absorb`][Self::absorb] more input and [`squeeze`][Self::squeeze] output,
/// [`reseed`][Self::reseed] the sponge from its own output, or [`reset`][Self::reset] it to
/// the state it had right after construction.
///
/// Encryption with [`xor_key_stream`][Self::xor_key_stream] consumes the output stream:
/// two messages must never be encrypted with the same stream state.
///
/// ```
/// use spongestream::Shake256Stream;
///
/// let mut alice = Shake256Stream::new(b"shared secret").unwrap();
/// let mut bob = alice.clone();
///
/// let mut ciphertext = [0u8; 5];
/// alice.xor_key_stream(&mut ciphertext, b"hello").unwrap();
///
/// let mut plaintext = [0u8; 5];
/// bob.xor_key_stream(&mut plaintext, &ciphertext).unwrap();
/// assert_eq!(&plaintext, b"hello");
/// ```
pub struct SpongeStream<S: SpongeInterface> {
    state: S,
    /// The construction-time seed, used only by [`SpongeStream::reset`].
    seed: Vec<u8>,
    /// Key material buffer, kept around to avoid allocating on every call.
    /// Contents are valid only within a single call.
    scratch: Vec<u8>,
}

impl<S: SpongeInterface> SpongeStream<S> {
    /// Creates a new stream absorbing `seed`.
    ///
    /// Any seed is accepted, including the empty one.
    #[instrument(level = "trace", skip_all, fields(seed_len = seed.len()), err)]
    pub fn new(seed: &[u8]) -> Result<Self, Error> {
        let mut stream = Self {
            state: S::new(),
            seed: seed.to_vec(),
            scratch: Vec::new(),
        };
        absorb_exact(&mut stream.state, seed)?;
        Ok(stream)
    }

    /// Brings the stream back to the state it had right after construction.
    ///
    /// This discards everything absorbed or squeezed since, including any [`reseed`][Self::reseed].
    #[instrument(level = "trace", skip_all, err)]
    pub fn reset(&mut self) -> Result<(), Error> {
        self.state.reset();
        absorb_exact(&mut self.state, &self.seed)?;
        debug!("stream reset to its seed");
        Ok(())
    }

    /// Absorbs `input` after the seed and any previous input.
    ///
    /// No framing is added: absorbing `a` then `b` is the same as absorbing `a || b`.
    /// Returns the number of bytes absorbed, which is always `input.len()`.
    #[instrument(level = "trace", skip_all, fields(len = input.len()), err)]
    pub fn absorb(&mut self, input: &[u8]) -> Result<usize, Error> {
        absorb_exact(&mut self.state, input)
    }

    /// Squeezes `len` fresh bytes out of the stream.
    pub fn squeeze(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; len];
        self.squeeze_into(&mut output)?;
        Ok(output)
    }

    /// Fills `output` with fresh bytes out of the stream.
    ///
    /// On error, `output` is zeroed.
    #[instrument(level = "trace", skip_all, fields(len = output.len()), err)]
    pub fn squeeze_into(&mut self, output: &mut [u8]) -> Result<(), Error> {
        squeeze_exact(&mut self.state, output)
    }

    /// Replaces the sponge with a new one keyed by [`RESEED_LEN`] bytes of the current output.
    ///
    /// Compromising the state after this call does not reveal the output produced before.
    /// The construction-time seed is kept: a later [`reset`][Self::reset] undoes the reseed.
    #[instrument(level = "trace", skip_all, err)]
    pub fn reseed(&mut self) -> Result<(), Error> {
        self.scratch.resize(RESEED_LEN, 0);
        squeeze_exact(&mut self.state, &mut self.scratch)?;
        self.state = S::new();
        absorb_exact(&mut self.state, &self.scratch)?;
        debug!("stream reseeded");
        Ok(())
    }

    /// Writes `src` XOR the next `src.len()` bytes of keystream into `dst`.
    ///
    /// `dst` must be at least as long as `src`; bytes of `dst` past `src.len()` are left untouched.
    /// A short `dst` is rejected before any keystream is drawn.
    #[instrument(level = "trace", skip_all, fields(len = src.len()), err)]
    pub fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), Error> {
        if dst.len() < src.len() {
            return Err(Error::DestinationTooShort {
                needed: src.len(),
                available: dst.len(),
            });
        }
        let key = self.keystream(src.len())?;
        for ((d, s), k) in dst.iter_mut().zip(src).zip(key) {
            *d = s ^ k;
        }
        Ok(())
    }

    /// XORs the next `buf.len()` bytes of keystream into `buf`.
    #[instrument(level = "trace", skip_all, fields(len = buf.len()), err)]
    pub fn apply_keystream(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let key = self.keystream(buf.len())?;
        buf.iter_mut().zip(key).for_each(|(b, k)| *b ^= k);
        Ok(())
    }

    fn keystream(&mut self, len: usize) -> Result<&[u8], Error> {
        self.scratch.resize(len, 0);
        squeeze_exact(&mut self.state, &mut self.scratch)?;
        trace!(len, "drew keystream");
        Ok(&self.scratch)
    }
}

fn absorb_exact<S: SpongeInterface>(state: &mut S, input: &[u8]) -> Result<usize, Error> {
    let written = state.absorb(input)?;
    if written != input.len() {
        return Err(Error::ShortWrite {
            requested: input.len(),
            written,
        });
    }
    Ok(written)
}

fn squeeze_exact<S: SpongeInterface>(state: &mut S, output: &mut [u8]) -> Result<(), Error> {
    match state.squeeze(output) {
        Ok(read) if read == output.len() => Ok(()),
        Ok(read) => {
            output.zeroize();
            Err(Error::ShortRead {
                requested: output.len(),
                read,
            })
        }
        Err(err) => {
            output.zeroize();
            Err(err.into())
        }
    }
}

/// Clones the current sponge state together with the seed,
/// so that [`SpongeStream::reset`] on the clone behaves as on the original.
impl<S: SpongeInterface> Clone for SpongeStream<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            seed: self.seed.clone(),
            scratch: Vec::new(),
        }
    }
}

/// Censored version of Debug
impl<S: SpongeInterface> fmt::Debug for SpongeStream<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpongeStream")
            .field("state", &"<redacted>")
            .field("seed", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl<S: SpongeInterface> Drop for SpongeStream<S> {
    fn drop(&mut self) {
        self.seed.zeroize();
        self.scratch.zeroize();
    }
}

impl<S: SpongeInterface> ZeroizeOnDrop for SpongeStream<S> {}

#[cfg(feature = "std")]
impl<S: SpongeInterface> std::io::Read for SpongeStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.squeeze_into(buf)?;
        Ok(buf.len())
    }
}

#[cfg(feature = "std")]
impl<S: SpongeInterface> std::io::Write for SpongeStream<S> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(self.absorb(buf)?)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "rand")]
impl<S: SpongeInterface> rand::TryRngCore for SpongeStream<S> {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.squeeze_into(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Error> {
        let mut buf = [0u8; 8];
        self.squeeze_into(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        self.squeeze_into(dst)
    }
}

#[cfg(feature = "rand")]
impl<S: SpongeInterface> rand::TryCryptoRng for SpongeStream<S> {}
