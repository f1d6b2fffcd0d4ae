//! Instantiations of the [`SpongeInterface`](crate::SpongeInterface).
//!
//! This module contains an [`XOF`] interfacing the [`digest::ExtendableOutput`] trait
//! with the sponge API. It is instantiated for:
//!
//! 1. [`Shake128`], based on [SHA3] and available with the `sha3` feature flag;
//! 2. [`Shake256`], based on [SHA3] and available with the `sha3` feature flag.
//!
//! [SHA3]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

pub mod xof;

pub use xof::XOF;

// SHA-3 family
#[cfg(feature = "sha3")]
pub type Shake128 = xof::XOF<sha3::Shake128>;
#[cfg(feature = "sha3")]
pub type Shake256 = xof::XOF<sha3::Shake256>;

// Make sure that all instantiations satisfy the SpongeInterface trait.
#[allow(unused)]
fn _assert_sponge_impls() {
    fn assert_impl<T: crate::sponge::SpongeInterface>() {}

    #[cfg(feature = "sha3")]
    {
        assert_impl::<Shake128>();
        assert_impl::<Shake256>();
    }
}
