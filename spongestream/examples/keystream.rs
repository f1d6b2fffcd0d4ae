//! Encrypts a message with a stream, then decrypts it from a reset copy of the same stream.
use spongestream::{Shake256Stream, SpongeStream};

fn main() -> Result<(), spongestream::Error> {
    let message = b"The sponge absorbs, the sponge squeezes.";

    let mut stream: Shake256Stream = SpongeStream::new(b"a secret seed")?;
    stream.absorb(b"message #1")?;

    let mut ciphertext = vec![0u8; message.len()];
    stream.xor_key_stream(&mut ciphertext, message)?;
    println!("ciphertext: {}", hex::encode(&ciphertext));

    // Replay the same keystream from the seed to decrypt.
    stream.reset()?;
    stream.absorb(b"message #1")?;
    let mut plaintext = ciphertext.clone();
    stream.apply_keystream(&mut plaintext)?;
    assert_eq!(plaintext, message);
    println!("plaintext:  {}", String::from_utf8_lossy(&plaintext));

    // Ratchet forward before the next message.
    stream.reseed()?;
    println!("next block: {}", hex::encode(stream.squeeze(16)?));
    Ok(())
}
