//! Stream handles and the process environment
//!
//! A handle is a shared reference to a reader or writer. Two handles are the
//! "same stream" only when they point at the same allocation; wrapping the
//! same device twice yields two different streams. Redirection detection
//! relies on exactly this identity.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Shared handle to an input stream.
#[derive(Clone)]
pub struct InputHandle(Rc<RefCell<dyn BufRead>>);

impl InputHandle {
    /// Wrap a reader in a fresh handle.
    pub fn new<R: BufRead + 'static>(reader: R) -> Self {
        Self(Rc::new(RefCell::new(reader)))
    }

    /// Handle over a reader the caller keeps a reference to.
    pub fn from_shared<R: BufRead + 'static>(reader: Rc<RefCell<R>>) -> Self {
        Self(reader)
    }

    /// Handle over the process standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }

    /// True when both handles refer to the same stream object.
    pub fn same_stream(&self, other: &InputHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Read one line into `buf`, returning the byte count (0 at end of input).
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.0.borrow_mut().read_line(buf)
    }

    /// Read a single byte, or `None` at end of input.
    pub fn read_byte(&self) -> io::Result<Option<u8>> {
        let mut reader = self.0.borrow_mut();
        let byte = match reader.fill_buf()? {
            [] => return Ok(None),
            [first, ..] => *first,
        };
        reader.consume(1);
        Ok(Some(byte))
    }
}

impl fmt::Debug for InputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputHandle")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Shared handle to an output stream.
#[derive(Clone)]
pub struct OutputHandle(Rc<RefCell<dyn Write>>);

impl OutputHandle {
    /// Wrap a writer in a fresh handle.
    pub fn new<W: Write + 'static>(writer: W) -> Self {
        Self(Rc::new(RefCell::new(writer)))
    }

    /// Handle over a writer the caller keeps a reference to.
    ///
    /// Used with `Rc<RefCell<Vec<u8>>>` to capture output in memory.
    pub fn from_shared<W: Write + 'static>(writer: Rc<RefCell<W>>) -> Self {
        Self(writer)
    }

    /// Handle over the process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Handle over the process standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// True when both handles refer to the same stream object.
    pub fn same_stream(&self, other: &OutputHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Write all of `text` and flush.
    pub fn emit(&self, text: &str) -> io::Result<()> {
        let mut writer = self.0.borrow_mut();
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for OutputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputHandle")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// The three streams a console starts with.
///
/// The handles captured here are the "native" streams: resetting a console
/// rebinds to them, and any other handle counts as redirected.
#[derive(Debug, Clone)]
pub struct Environment {
    pub input: InputHandle,
    pub output: OutputHandle,
    pub error: OutputHandle,
}

impl Environment {
    /// Build an environment from explicit handles.
    pub fn new(input: InputHandle, output: OutputHandle, error: OutputHandle) -> Self {
        Self {
            input,
            output,
            error,
        }
    }

    /// Environment bound to the process standard streams.
    pub fn process() -> Self {
        Self::new(
            InputHandle::stdin(),
            OutputHandle::stdout(),
            OutputHandle::stderr(),
        )
    }
}
