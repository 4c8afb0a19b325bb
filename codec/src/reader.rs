use std::io::{self, Read};

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Payload attached to the `io::Error` returned when the inner source of a
/// [`SubstitutingReader`] fails. The original failure stays reachable
/// through `source()`.
#[derive(Debug, Error)]
#[error("failed to read bytes for substitution")]
pub struct SubstituteStreamError {
    #[source]
    source: io::Error,
}

/// A stream that wraps another stream and substitutes every byte that
/// passes through it with the chosen algorithm.
///
/// Wrapping a `SubstitutingReader` in another one composes the two
/// substitutions in layering order, so multi-algorithm pipelines need no
/// special casing. The reader holds no buffer of its own; bytes are
/// substituted in place in the caller's buffer.
pub struct SubstitutingReader<R: Read> {
    reader: R,
    algorithm: Algorithm,
}

impl<R: Read> SubstitutingReader<R> {
    pub fn new(reader: R, algorithm: Algorithm) -> Self {
        Self { reader, algorithm }
    }

    pub fn rot13(reader: R) -> Self {
        Self::new(reader, Algorithm::Rot13)
    }

    pub fn atbash(reader: R) -> Self {
        Self::new(reader, Algorithm::Atbash)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Read for SubstitutingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = match self.reader.read(buf) {
            Ok(n) => n,
            // The buffer contents are untrusted after a failed read, so
            // substitution is skipped and the failure propagates.
            Err(source) => {
                return Err(io::Error::new(
                    source.kind(),
                    SubstituteStreamError { source },
                ))
            }
        };

        // Ok(0) is end-of-stream; the empty prefix leaves it untouched.
        for byte in &mut buf[..read] {
            *byte = self.algorithm.substitute(*byte);
        }

        Ok(read)
    }
}
