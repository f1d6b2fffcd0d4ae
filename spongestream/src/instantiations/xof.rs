//! Sponges from extendable output functions.
//!
//! This module provides a [`SpongeInterface`] implementation for any hasher implementing
//! [`digest::ExtendableOutput`], such as SHAKE128 and SHAKE256.

use core::fmt;

use digest::{ExtendableOutput, Update, XofReader};

use crate::{error::SpongeError, sponge::SpongeInterface};

/// XOF-based sponge.
///
/// The hasher absorbs input until the first squeeze, at which point it is finalized
/// into a reader that produces the output stream.
/// As with the underlying SHAKE construction, a finalized sponge refuses further input.
#[derive(Clone)]
pub struct XOF<H: ExtendableOutput> {
    /// The hasher state, meaningful only while absorbing.
    hasher: H,
    /// XOF reader for squeeze operations (None = absorbing, Some = squeezing)
    xof_reader: Option<H::Reader>,
}

impl<H> SpongeInterface for XOF<H>
where
    H: ExtendableOutput + Clone + Default,
    H::Reader: Clone,
{
    fn new() -> Self {
        Self::default()
    }

    fn absorb(&mut self, input: &[u8]) -> Result<usize, SpongeError> {
        if self.xof_reader.is_some() {
            return Err(SpongeError::AbsorbAfterSqueeze);
        }
        self.hasher.update(input);
        Ok(input.len())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<usize, SpongeError> {
        let hasher = &mut self.hasher;
        self.xof_reader
            .get_or_insert_with(|| core::mem::take(hasher).finalize_xof())
            .read(output);
        Ok(output.len())
    }

    fn reset(&mut self) {
        self.hasher = H::default();
        self.xof_reader = None;
    }
}

impl<H: ExtendableOutput + Default> Default for XOF<H> {
    fn default() -> Self {
        Self {
            hasher: H::default(),
            xof_reader: None,
        }
    }
}

/// Censored version of Debug
impl<H: ExtendableOutput> fmt::Debug for XOF<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XOF")
            .field("squeezing", &self.xof_reader.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "sha3"))]
mod tests {
    use super::*;
    use crate::instantiations::{Shake128, Shake256};

    #[test]
    fn test_shake256_empty_input() {
        let mut sponge = Shake256::new();
        let mut output = [0u8; 32];
        assert_eq!(sponge.squeeze(&mut output), Ok(32));
        assert_eq!(
            output.to_vec(),
            hex::decode("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f")
                .unwrap()
        );
    }

    #[test]
    fn test_shake128_empty_input() {
        let mut sponge = Shake128::new();
        let mut output = [0u8; 32];
        sponge.squeeze(&mut output).unwrap();
        assert_eq!(
            output.to_vec(),
            hex::decode("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
                .unwrap()
        );
    }

    #[test]
    fn test_squeeze_is_associative() {
        let mut sponge1 = Shake256::new();
        sponge1.absorb(b"hello world").unwrap();
        let mut out1 = [0u8; 300];
        sponge1.squeeze(&mut out1).unwrap();

        let mut sponge2 = Shake256::new();
        sponge2.absorb(b"hello").unwrap();
        sponge2.absorb(b" world").unwrap();
        let mut out2 = [0u8; 300];
        let (head, tail) = out2.split_at_mut(7);
        sponge2.squeeze(head).unwrap();
        sponge2.squeeze(&mut []).unwrap();
        sponge2.squeeze(tail).unwrap();

        assert_eq!(out1, out2);
    }

    #[test]
    fn test_absorb_after_squeeze_is_rejected() {
        let mut sponge = Shake256::new();
        sponge.absorb(b"first").unwrap();
        sponge.squeeze(&mut [0u8; 8]).unwrap();
        assert_eq!(
            sponge.absorb(b"second"),
            Err(SpongeError::AbsorbAfterSqueeze)
        );
    }

    #[test]
    fn test_reset_returns_to_absorbing() {
        let mut sponge = Shake256::new();
        sponge.absorb(b"input").unwrap();
        sponge.squeeze(&mut [0u8; 8]).unwrap();
        sponge.reset();

        let mut output = [0u8; 4];
        assert_eq!(sponge.absorb(b""), Ok(0));
        sponge.squeeze(&mut output).unwrap();
        assert_eq!(hex::encode(output), "46b9dd2b");
    }

    #[test]
    fn test_clone_snapshots_reader() {
        let mut sponge = Shake256::new();
        sponge.squeeze(&mut [0u8; 10]).unwrap();
        let mut clone = sponge.clone();

        let mut out1 = [0u8; 16];
        let mut out2 = [0u8; 16];
        sponge.squeeze(&mut out1).unwrap();
        clone.squeeze(&mut out2).unwrap();
        assert_eq!(out1, out2);
    }
}
