/// A byte-wise substitution algorithm.
///
/// Both algorithms map letters within their own case range and leave every
/// other byte untouched, and both are involutions: applying the same
/// algorithm twice gives back the original byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Rot13,
    Atbash,
}

impl Algorithm {
    pub fn substitute(self, byte: u8) -> u8 {
        let (low, high) = match byte {
            b'a'..=b'z' => (b'a', b'z'),
            b'A'..=b'Z' => (b'A', b'Z'),
            _ => return byte,
        };

        match self {
            Algorithm::Rot13 => low + (byte - low + 13) % 26,
            Algorithm::Atbash => high - (byte - low),
        }
    }
}
