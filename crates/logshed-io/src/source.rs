//! Line sources: lazy, line-at-a-time readers over a file or stdin.

use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// A lazy sequence of raw input lines. `-` reads stdin; anything else is a
/// file path. The sequence ends at EOF; restartability is up to whatever
/// produced the underlying bytes.
pub struct LineSource {
    lines: Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>,
}

impl LineSource {
    pub async fn open(path: &str) -> io::Result<Self> {
        let reader: Box<dyn AsyncRead + Send + Unpin> = if path == "-" {
            Box::new(tokio::io::stdin())
        } else {
            Box::new(File::open(Path::new(path)).await?)
        };
        Ok(Self {
            lines: BufReader::new(reader).lines(),
        })
    }

    /// Next raw line, without its terminator; `None` at end of input.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}
