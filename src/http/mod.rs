//! Minimal HTTP/1.1 command engine.
//!
//! One connection at a time, one request per connection, `Connection: close`
//! on every response.  The parser is an explicit state machine over a byte
//! feed so it can be tested without a live socket; the server glues a
//! non-blocking accept to the parser, routes the request, and dispatches
//! actuator commands through an injected [`CommandHandler`].
//!
//! Deliberately out of scope: query strings, multi-value headers, chunked
//! transfer encoding, keep-alive.  Requests using them are serviced as if
//! those features were absent.
//!
//! [`CommandHandler`]: crate::app::ports::CommandHandler

pub mod form;
pub mod page;
pub mod parser;
pub mod server;
pub mod transport;
