//! Incremental HTTP request parser.
//!
//! Explicit state machine fed one byte at a time:
//!
//! ```text
//! ReadRequestLine ──LF──▶ ReadHeaders ──empty line──▶ ReadBody ──▶ Done
//!                                     └──empty line, no Content-Length──▶ Done
//! ```
//!
//! CR is ignored, LF terminates a line.  The request line is split on its
//! first two spaces into method and path; a line without both spaces leaves
//! them empty (the router answers 404).  When a `Content-Length: ` header
//! was seen, exactly that many body bytes are consumed after the blank
//! line.  All storage is fixed-capacity; oversized fragments are dropped,
//! never buffered unboundedly.

/// Maximum stored body size.  Longer bodies are consumed but truncated.
const MAX_BODY: usize = 256;

/// Parser states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    ReadRequestLine,
    ReadHeaders,
    ReadBody,
    Done,
}

/// A parsed (possibly partial) HTTP request.
#[derive(Debug, Default)]
pub struct Request {
    pub method: heapless::String<8>,
    pub path: heapless::String<64>,
    pub content_length: usize,
    pub body: heapless::String<MAX_BODY>,
}

/// Streaming request parser.
pub struct RequestParser {
    state: ParserState,
    line: heapless::String<128>,
    body_remaining: usize,
    request: Request,
}

impl RequestParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::ReadRequestLine,
            line: heapless::String::new(),
            body_remaining: 0,
            request: Request::default(),
        }
    }

    /// Feed a single byte.  Bytes after `Done` are ignored.
    pub fn feed(&mut self, byte: u8) {
        match self.state {
            ParserState::Done => {}

            ParserState::ReadBody => {
                if self.body_remaining > 0 {
                    let _ = self.request.body.push(byte as char);
                    self.body_remaining -= 1;
                }
                if self.body_remaining == 0 {
                    self.state = ParserState::Done;
                }
            }

            ParserState::ReadRequestLine | ParserState::ReadHeaders => match byte {
                b'\r' => {}
                b'\n' => self.end_of_line(),
                other => {
                    // Overlong lines are truncated; only the prefix matters
                    // for the headers this engine inspects.
                    let _ = self.line.push(other as char);
                }
            },
        }
    }

    /// Feed a whole buffer (test and convenience path).
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.feed(b);
        }
    }

    /// Whether a complete request has been gathered.
    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// The request parsed so far.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Consume the parser, yielding whatever was gathered.
    pub fn into_request(self) -> Request {
        self.request
    }

    // ── Internal ──────────────────────────────────────────────

    fn end_of_line(&mut self) {
        match self.state {
            ParserState::ReadRequestLine => {
                self.parse_request_line();
                self.state = ParserState::ReadHeaders;
            }

            ParserState::ReadHeaders => {
                if self.line.is_empty() {
                    // Blank line: headers complete.
                    if self.request.content_length > 0 {
                        self.body_remaining = self.request.content_length;
                        self.state = ParserState::ReadBody;
                    } else {
                        self.state = ParserState::Done;
                    }
                } else if let Some(rest) = self.line.as_str().strip_prefix("Content-Length: ") {
                    self.request.content_length = rest.trim().parse().unwrap_or(0);
                }
            }

            ParserState::ReadBody | ParserState::Done => unreachable!("no lines in these states"),
        }
        self.line.clear();
    }

    fn parse_request_line(&mut self) {
        let line = self.line.as_str();
        // Both spaces must be present ("METHOD PATH VERSION"); anything else
        // leaves method/path empty and falls through to 404.
        if let Some(first) = line.find(' ') {
            if let Some(rel) = line[first + 1..].find(' ') {
                let second = first + 1 + rel;
                let _ = self.request.method.push_str(&line[..first]);
                let _ = self.request.path.push_str(&line[first + 1..second]);
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The parser must survive arbitrary byte soup without panicking
        /// or buffering unboundedly.
        #[test]
        fn never_panics_on_arbitrary_input(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let mut p = RequestParser::new();
            p.feed_bytes(&data);
            let req = p.into_request();
            prop_assert!(req.body.len() <= 256);
        }

        #[test]
        fn well_formed_posts_always_complete(body in proptest::collection::vec(0x20u8..0x7F, 0..100)) {
            let mut p = RequestParser::new();
            let head = format!("POST /setServoAngle HTTP/1.1\r\nContent-Length: {}\r\n\r\n", body.len());
            p.feed_bytes(head.as_bytes());
            p.feed_bytes(&body);
            prop_assert!(p.is_done());
        }
    }
}
