use std::io::{self, Write};

use crate::algorithm::Algorithm;

/// Sink-side counterpart of [`SubstitutingReader`]: substitutes every byte
/// before handing it to the inner writer.
///
/// [`SubstitutingReader`]: crate::reader::SubstitutingReader
pub struct SubstitutingWriter<W: Write> {
    writer: W,
    algorithm: Algorithm,
}

impl<W: Write> SubstitutingWriter<W> {
    pub fn new(writer: W, algorithm: Algorithm) -> Self {
        Self { writer, algorithm }
    }

    pub fn rot13(writer: W) -> Self {
        Self::new(writer, Algorithm::Rot13)
    }

    pub fn atbash(writer: W) -> Self {
        Self::new(writer, Algorithm::Atbash)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for SubstitutingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // The input slice is borrowed immutably, so substituted bytes are
        // staged through a fixed chunk.
        let mut staged = [0u8; 256];

        let mut written = 0;
        for chunk in buf.chunks(staged.len()) {
            let staged = &mut staged[..chunk.len()];
            for (dst, &src) in staged.iter_mut().zip(chunk) {
                *dst = self.algorithm.substitute(src);
            }

            let n = self.writer.write(staged)?;
            written += n;

            // A short inner write means the rest of buf wasn't consumed.
            if n < staged.len() {
                break;
            }
        }

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rot13_writer_substitutes() {
        let mut writer = SubstitutingWriter::rot13(Vec::new());
        writer.write_all(b"Hello, world!").unwrap();
        assert_eq!(writer.into_inner(), b"Uryyb, jbeyq!");
    }

    #[test]
    fn nested_writers_compose() {
        let mut writer = SubstitutingWriter::rot13(SubstitutingWriter::atbash(Vec::new()));
        writer.write_all(b"ABC").unwrap();
        assert_eq!(writer.into_inner().into_inner(), b"MLK");
    }

    #[test]
    fn long_input_crosses_staging_chunks() {
        let input: Vec<u8> = (0..2048usize).map(|i| (i % 256) as u8).collect();
        let mut writer = SubstitutingWriter::atbash(Vec::new());
        writer.write_all(&input).unwrap();

        let expected: Vec<u8> = input
            .iter()
            .map(|&b| Algorithm::Atbash.substitute(b))
            .collect();
        assert_eq!(writer.into_inner(), expected);
    }

    #[test]
    fn partial_inner_write_reports_consumed_bytes() {
        struct TwoByteWriter(Vec<u8>);

        impl Write for TwoByteWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                let len = buf.len().min(2);
                self.0.extend_from_slice(&buf[..len]);
                Ok(len)
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = SubstitutingWriter::rot13(TwoByteWriter(Vec::new()));
        let written = writer.write(b"Hello").unwrap();
        assert_eq!(written, 2);
        assert_eq!(writer.into_inner().0, b"Ur");
    }
}
