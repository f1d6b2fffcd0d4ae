use crate::error::SpongeError;

/// A [`SpongeInterface`] is the abstract interface of the hash primitive wrapped by a [`SpongeStream`].
///
/// Implementations start in the absorbing phase.
/// The first call to [`squeeze`][SpongeInterface::squeeze] moves the sponge to the squeezing phase,
/// and further calls continue the output stream from where the previous one stopped.
///
/// Both [`absorb`][SpongeInterface::absorb] and [`squeeze`][SpongeInterface::squeeze] report how many bytes they processed.
/// Callers are expected to check this count: a sponge returning less than requested is a broken sponge.
///
/// **HAZARD**: Don't implement this trait unless you know what you are doing.
/// Consider using the sponges already provided by this library.
///
/// [`SpongeStream`]: crate::SpongeStream
pub trait SpongeInterface: Clone {
    /// Creates a fresh, empty sponge.
    fn new() -> Self;

    /// Absorbs `input` into the sponge state.
    ///
    /// Calls to absorb are meant to be associative:
    /// calling this function multiple times is equivalent to calling it once
    /// on the concatenated inputs.
    fn absorb(&mut self, input: &[u8]) -> Result<usize, SpongeError>;

    /// Squeezes `output.len()` bytes out of the sponge.
    ///
    /// Calls to this function are meant to be associative:
    /// calling this function multiple times is equivalent to calling it once
    /// on a larger output array.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<usize, SpongeError>;

    /// Brings the sponge back to its empty state.
    fn reset(&mut self) {
        *self = Self::new();
    }
}
