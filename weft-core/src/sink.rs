//! Error-absorbing byte sink.
//!
//! Every node in a document tree writes through a [`Sink`]. The sink owns
//! two pieces of bookkeeping the rest of the crate relies on:
//!
//! - a running count of bytes the destination actually accepted, and
//! - the *first* write error encountered; once recorded, every later write
//!   is suppressed and the count stops moving.
//!
//! This is what makes node evaluation total: nodes never see write errors
//! and never abort mid-tree. A failed destination simply stops absorbing
//! bytes, and the damage is reported once at the document root as a
//! [`RenderError`] carrying the partial byte count.

use std::io;

use thiserror::Error;

/// Error returned by the document root when the destination failed.
///
/// `written` is the number of bytes the destination accepted before the
/// failure - partial output diagnostics depend on this being exact, so the
/// sink counts per accepted chunk, not per attempted call.
#[derive(Debug, Error)]
#[error("render stopped after {written} bytes")]
pub struct RenderError {
    /// Bytes flushed to the destination before the failure.
    pub written: usize,
    /// The underlying I/O failure.
    #[source]
    pub source: io::Error,
}

/// Byte sink wrapping an `io::Write` destination.
///
/// Writes are infallible from the caller's point of view: a failing
/// destination records its error here and all subsequent writes become
/// no-ops. Inspect [`written`](Sink::written) and [`error`](Sink::error)
/// after evaluation.
pub struct Sink<'w> {
    out: &'w mut (dyn io::Write + 'w),
    written: usize,
    error: Option<io::Error>,
}

impl<'w> Sink<'w> {
    /// Wrap a destination. Count starts at zero, no error recorded.
    pub fn new(out: &'w mut (dyn io::Write + 'w)) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    /// Write `bytes` to the destination, absorbing any failure.
    ///
    /// Partial writes are retried until the whole slice is accepted or the
    /// destination fails; bytes accepted before a failure still count.
    pub fn write(&mut self, mut bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        while !bytes.is_empty() {
            match self.out.write(bytes) {
                Ok(0) => {
                    self.error = Some(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "destination accepted no bytes",
                    ));
                    return;
                }
                Ok(n) => {
                    self.written += n;
                    bytes = &bytes[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    return;
                }
            }
        }
    }

    /// Write a single byte.
    #[inline]
    pub fn put(&mut self, byte: u8) {
        self.write(&[byte]);
    }

    /// Flush a pending delimiter byte: writes `pending` iff it is non-zero.
    #[inline]
    pub fn flush_pending(&mut self, pending: u8) {
        if pending != 0 {
            self.put(pending);
        }
    }

    /// Bytes the destination has accepted so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    /// The first recorded write error, if any.
    #[inline]
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Take ownership of the recorded error, leaving the sink clean.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("written", &self.written)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Destination that accepts `limit` bytes and then fails every write.
    struct FailAfter {
        limit: usize,
        accepted: Vec<u8>,
    }

    impl io::Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.accepted.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "full"));
            }
            let n = room.min(buf.len());
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn counts_accepted_bytes() {
        let mut buf = Vec::new();
        let mut sink = Sink::new(&mut buf);
        sink.write(b"hello");
        sink.put(b'!');
        assert_eq!(sink.written(), 6);
        assert!(sink.error().is_none());
        assert_eq!(buf, b"hello!");
    }

    #[test]
    fn flush_pending_skips_zero() {
        let mut buf = Vec::new();
        let mut sink = Sink::new(&mut buf);
        sink.flush_pending(0);
        assert_eq!(sink.written(), 0);
        sink.flush_pending(b'>');
        assert_eq!(sink.written(), 1);
        assert_eq!(buf, b">");
    }

    #[test]
    fn partial_write_counts_before_error() {
        let mut dest = FailAfter {
            limit: 3,
            accepted: Vec::new(),
        };
        let mut sink = Sink::new(&mut dest);
        sink.write(b"hello");
        // Three bytes landed, then the destination broke.
        assert_eq!(sink.written(), 3);
        assert!(sink.error().is_some());
    }

    #[test]
    fn error_suppresses_all_later_writes() {
        let mut dest = FailAfter {
            limit: 2,
            accepted: Vec::new(),
        };
        let mut sink = Sink::new(&mut dest);
        sink.write(b"abcdef");
        let after_failure = sink.written();
        sink.write(b"more");
        sink.put(b'x');
        assert_eq!(sink.written(), after_failure);
        assert_eq!(dest.accepted, b"ab");
    }

    #[test]
    fn take_error_yields_the_first_failure() {
        let mut dest = FailAfter {
            limit: 0,
            accepted: Vec::new(),
        };
        let mut sink = Sink::new(&mut dest);
        sink.write(b"x");
        let err = sink.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.error().is_none());
    }
}
