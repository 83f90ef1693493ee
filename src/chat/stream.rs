//! Decoder for the relay's server-sent event stream.
//!
//! The relay forwards the upstream gateway's stream unchanged: lines of
//! `data: <json>` carrying `choices[0].delta.content`, terminated by
//! `data: [DONE]`. Network reads split the stream at arbitrary points, so the
//! decoder buffers until a full line is available.

use serde_json::Value;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Incremental decoder turning raw stream text into content deltas.
///
/// - Comment lines (`:`), blank lines and non-`data:` lines are skipped.
/// - A trailing `\r` is stripped from each line.
/// - A line whose JSON does not parse is kept in the buffer and retried on
///   the next [`push`](Self::push).
/// - After `[DONE]`, further input is ignored.
///
/// # Examples
///
/// ```
/// use policysim::chat::DeltaDecoder;
///
/// let mut decoder = DeltaDecoder::new();
/// let mut text = String::new();
/// for chunk in ["data: {\"choices\":[{\"delta\":{\"con", "tent\":\"Hi\"}}]}\n", "data: [DONE]\n"] {
///     for delta in decoder.push(chunk) {
///         text.push_str(&delta);
///     }
/// }
/// assert_eq!(text, "Hi");
/// assert!(decoder.is_done());
/// ```
#[derive(Debug, Default)]
pub struct DeltaDecoder {
    buffer: String,
    pending_bytes: Vec<u8>,
    done: bool,
}

/// Outcome of decoding one complete line.
enum Line {
    Skip,
    Done,
    Delta(Option<String>),
    Incomplete,
}

fn decode_line(raw: &str) -> Line {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    if line.starts_with(':') || line.trim().is_empty() {
        return Line::Skip;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Line::Skip;
    };
    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return Line::Done;
    }
    match serde_json::from_str::<Value>(payload) {
        Ok(value) => Line::Delta(
            value
                .pointer("/choices/0/delta/content")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        ),
        Err(_) => Line::Incomplete,
    }
}

impl DeltaDecoder {
    /// Creates an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the `[DONE]` sentinel has been seen.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds a chunk of stream text and returns any complete deltas.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        if self.done {
            return Vec::new();
        }
        self.buffer.push_str(chunk);

        let mut deltas = Vec::new();
        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            let line = &line[..line.len() - 1];
            match decode_line(line) {
                Line::Skip | Line::Delta(None) => {}
                Line::Delta(Some(delta)) => deltas.push(delta),
                Line::Done => {
                    self.done = true;
                    break;
                }
                Line::Incomplete => {
                    self.buffer.insert(0, '\n');
                    self.buffer.insert_str(0, line);
                    break;
                }
            }
        }
        deltas
    }

    /// Feeds raw bytes, holding back a UTF-8 sequence split across reads.
    ///
    /// Invalid sequences are replaced with U+FFFD.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending_bytes.extend_from_slice(bytes);
        let mut text = String::new();
        loop {
            match std::str::from_utf8(&self.pending_bytes) {
                Ok(valid) => {
                    text.push_str(valid);
                    self.pending_bytes.clear();
                    break;
                }
                Err(e) => {
                    let valid_up_to = e.valid_up_to();
                    text.push_str(&String::from_utf8_lossy(&self.pending_bytes[..valid_up_to]));
                    match e.error_len() {
                        Some(len) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            self.pending_bytes.drain(..valid_up_to + len);
                        }
                        None => {
                            self.pending_bytes.drain(..valid_up_to);
                            break;
                        }
                    }
                }
            }
        }
        self.push(&text)
    }

    /// Flushes whatever remains at end of stream.
    ///
    /// Lines that still fail to parse are dropped.
    pub fn finish(&mut self) -> Vec<String> {
        let rest = std::mem::take(&mut self.buffer);
        self.pending_bytes.clear();
        // Data lines that arrived after `[DONE]` are discarded, not flushed.
        if self.done {
            return Vec::new();
        }
        rest.split('\n')
            .filter_map(|line| match decode_line(line) {
                Line::Delta(delta) => delta,
                Line::Skip | Line::Done | Line::Incomplete => None,
            })
            .collect()
    }
}
