//! Line-oriented path source.
//!
//! Reads newline-delimited file paths from standard input (or any `BufRead`
//! in tests) on a producer thread and hands them to the consumer over a
//! channel, preserving input order. The channel closes at end of stream or on
//! the first read error; a read failure is a terminal condition for the
//! sequence, not a separate error channel.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::debug;

/// Spawn a reader thread over standard input and return the receiving end.
pub fn stdin_paths() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        forward_lines(stdin.lock(), tx);
    });
    rx
}

/// Like [`stdin_paths`] but over an arbitrary reader. Used by tests.
pub fn spawn_line_reader<R>(reader: R) -> Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || forward_lines(reader, tx));
    rx
}

fn forward_lines<R: BufRead>(reader: R, tx: mpsc::Sender<String>) {
    for line in reader.lines() {
        match line {
            Ok(l) => {
                // Blank lines carry no base name; skip them.
                if l.trim().is_empty() {
                    continue;
                }
                if tx.send(l).is_err() {
                    // Consumer hung up; stop reading.
                    return;
                }
            }
            Err(e) => {
                debug!(error = %e, "input read failed; ending the path stream");
                return;
            }
        }
    }
}
