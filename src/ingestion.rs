use std::io::BufRead;
use std::pin::Pin;

use futures::stream::{self, Stream};

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Operation};

/// Decodes one JSON operation per line. Blank lines are skipped.
pub struct JsonLinesReader<R: BufRead> {
    reader: Option<R>,
}

impl<R: BufRead> JsonLinesReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

fn decode_line(number: usize, line: std::io::Result<Vec<u8>>) -> Option<Result<Operation, Error>> {
    let bytes = match line {
        Ok(bytes) => bytes,
        Err(e) => return Some(Err(Error::IO(e))),
    };

    let line = match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => {
            return Some(Err(Error::Ingestion(format!(
                "Invalid UTF-8 on line {}: {}",
                number, e
            ))));
        }
    };

    if line.trim().is_empty() {
        return None;
    }

    let op = match serde_json::from_str::<Operation>(&line) {
        Ok(op) => op,
        Err(e) => {
            return Some(Err(Error::Ingestion(format!(
                "JSON deserialization error on line {}: {}",
                number, e
            ))));
        }
    };

    match op {
        Operation::Transaction(tx) if tx.amount <= 0 => Some(Err(Error::Ingestion(format!(
            "Non-positive amount {} on line {}",
            tx.amount, number
        )))),
        op => Some(Ok(op)),
    }
}

impl<R: BufRead + Send + 'static> OperationStream for JsonLinesReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .split(b'\n')
            .enumerate()
            .filter_map(|(index, line)| decode_line(index + 1, line));

        Box::pin(stream::iter(iter))
    }
}
