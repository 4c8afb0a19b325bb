pub mod algorithm;
pub mod reader;
pub mod writer;

pub use algorithm::Algorithm;
pub use reader::{SubstituteStreamError, SubstitutingReader};
pub use writer::SubstitutingWriter;
