use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing_subscriber::EnvFilter;

use authoriser::{
    dlq::TracingDLQ, engine::Engine, ingestion::JsonLinesReader, output::JsonLinesOutput,
    rules::Authoriser, store::InMemoryAccountStore,
};

fn init_tracing() {
    // stdout carries the result stream, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn open_input(path: Option<String>) -> Result<Box<dyn BufRead + Send>, io::Error> {
    match path {
        Some(path) => {
            let file = File::open(Path::new(&path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let input = open_input(env::args().nth(1))?;

    let ingestion = JsonLinesReader::new(input);
    let output = JsonLinesOutput::new(io::stdout().lock());

    let mut engine = Engine::new(
        ingestion,
        InMemoryAccountStore::new(),
        output,
        TracingDLQ::default(),
        Authoriser::default(),
    );

    engine.process().await?;

    Ok(())
}
