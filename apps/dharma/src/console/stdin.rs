//! Cancellable stdin for the prompter.
//!
//! `tokio::io::stdin()` reads on the blocking pool, and a read parked there
//! keeps the runtime alive after Ctrl-C until the user presses Enter. Here a
//! detached OS thread owns the blocking read and forwards lines over a
//! channel; the async side only ever waits on the channel, which any
//! `select!` can drop. The thread is never joined, so process exit does not
//! wait for it.

use std::io::{self, BufRead};
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use tokio::io::{AsyncBufRead, AsyncRead, ReadBuf};
use tokio::sync::mpsc;
use tracing::warn;

use crate::errors::AppError;

/// `AsyncBufRead` over lines arriving on a channel.
/// A closed channel reads as end of input.
pub struct LineChannel {
    rx: mpsc::UnboundedReceiver<String>,
    buf: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl LineChannel {
    pub fn new(rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            rx,
            buf: Vec::new(),
            pos: 0,
            closed: false,
        }
    }

    /// Waits until there is unread data or the channel is closed.
    fn poll_fill(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        while self.pos >= self.buf.len() && !self.closed {
            match ready!(self.rx.poll_recv(cx)) {
                Some(line) => {
                    self.buf = line.into_bytes();
                    self.buf.push(b'\n');
                    self.pos = 0;
                }
                None => self.closed = true,
            }
        }
        Poll::Ready(())
    }
}

impl AsyncRead for LineChannel {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        out: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        ready!(this.poll_fill(cx));
        let n = out.remaining().min(this.buf.len() - this.pos);
        out.put_slice(&this.buf[this.pos..this.pos + n]);
        this.pos += n;
        Poll::Ready(Ok(()))
    }
}

impl AsyncBufRead for LineChannel {
    fn poll_fill_buf(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        let this = self.get_mut();
        ready!(this.poll_fill(cx));
        Poll::Ready(Ok(&this.buf[this.pos..]))
    }

    fn consume(self: Pin<&mut Self>, amt: usize) {
        let this = self.get_mut();
        this.pos = (this.pos + amt).min(this.buf.len());
    }
}

/// Starts the stdin reader thread and returns its async end.
pub fn spawn_stdin_reader() -> Result<LineChannel, AppError> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Reading stdin failed: {e}");
                        break;
                    }
                }
            }
        })?;
    Ok(LineChannel::new(rx))
}
