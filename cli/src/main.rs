use std::io::{self, BufReader, Read};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use codec::SubstitutingReader;

/// How stdin bytes are substituted before they reach stdout. The composed
/// modes nest two readers, applying the first-named algorithm first.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    #[value(name = "rot13")]
    Rot13,
    #[value(name = "atbash")]
    Atbash,
    #[value(name = "atbash-then-rot13")]
    AtbashThenRot13,
    #[value(name = "rot13-then-atbash")]
    Rot13ThenAtbash,
}

#[derive(Debug, Parser)]
#[command(name = "subcipher")]
struct Options {
    /// Substitution algorithm, or a composed pair of them
    #[arg(long = "alg", value_enum, default_value_t = Mode::Rot13)]
    alg: Mode,
}

fn chain<'a>(mode: Mode, source: impl Read + 'a) -> Box<dyn Read + 'a> {
    match mode {
        Mode::Rot13 => Box::new(SubstitutingReader::rot13(source)),
        Mode::Atbash => Box::new(SubstitutingReader::atbash(source)),
        Mode::AtbashThenRot13 => Box::new(SubstitutingReader::rot13(
            SubstitutingReader::atbash(source),
        )),
        Mode::Rot13ThenAtbash => Box::new(SubstitutingReader::atbash(
            SubstitutingReader::rot13(source),
        )),
    }
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .compact()
        .init();

    let options = Options::parse();

    let stdin = BufReader::new(io::stdin().lock());
    let mut reader = chain(options.alg, stdin);

    // Prompt goes to stderr so piped stdout stays clean.
    eprintln!("Enter your text and it will be translated :");

    let mut stdout = io::stdout().lock();
    if let Err(err) = io::copy(&mut reader, &mut stdout) {
        tracing::error!("Error copying substituted stream to stdout: {}", err);
        return Err(err).context("stream substitution failed");
    }

    Ok(())
}
