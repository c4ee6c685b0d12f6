use std::io;

use anyhow::Context;
use kraken::{Token, Tokenizer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod settings;

fn print_tokens(tokens: impl Iterator<Item = Token>) {
    for token in tokens {
        println!("{}", token);
    }
}

fn run_interactive(tokenizer: &Tokenizer) {
    loop {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => print_tokens(tokenizer.parse(line.trim_end_matches('\n'))),
        }
    }
}

fn run_file(tokenizer: &Tokenizer, input_file: &str) -> anyhow::Result<()> {
    let tokens = tokenizer
        .parse_file(input_file)
        .with_context(|| format!("failed to tokenize {}", input_file))?;
    debug!(count = tokens.len(), "tokenized file");

    print_tokens(tokens.into_iter());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = settings::Settings::parse_cmd_line();
    let tokenizer = Tokenizer::new(settings.start_delimiter, settings.end_delimiter)?;
    debug!(
        start = tokenizer.start_delimiter(),
        end = tokenizer.end_delimiter(),
        "configured tokenizer"
    );

    if settings.interactive {
        run_interactive(&tokenizer);
    } else {
        run_file(&tokenizer, &settings.input_file)?;
    }

    Ok(())
}
