use alloc::vec::Vec;

use super::SpongeInterface;
use crate::error::SpongeError;

/// A scripted sponge for exercising the stream's error paths.
///
/// Output bytes are a counter offset by the amount absorbed, which is enough to tell streams apart
/// without pulling in a real hash function.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockSponge {
    pub absorbed: Vec<u8>,
    pub squeezed: usize,
    /// Maximum number of bytes returned by a single squeeze.
    pub max_read: Option<usize>,
    /// Maximum number of bytes accepted by a single absorb.
    pub max_write: Option<usize>,
    /// Error returned by every absorb and squeeze, when set.
    pub failure: Option<SpongeError>,
}

impl SpongeInterface for MockSponge {
    fn new() -> Self {
        Self::default()
    }

    fn absorb(&mut self, input: &[u8]) -> Result<usize, SpongeError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        let len = self.max_write.map_or(input.len(), |max| max.min(input.len()));
        self.absorbed.extend_from_slice(&input[..len]);
        Ok(len)
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<usize, SpongeError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        let len = self.max_read.map_or(output.len(), |max| max.min(output.len()));
        let offset = self.absorbed.len() + self.squeezed;
        for (i, byte) in output[..len].iter_mut().enumerate() {
            *byte = (offset + i) as u8;
        }
        self.squeezed += len;
        Ok(len)
    }
}
