//! Sources that yield one line of secret text from an operator.

use std::io::{self, BufRead, Write};

/// Something that can produce a single secret value when prompted.
pub trait SecretSource {
    /// Show `prompt` and return one line of input without its line terminator.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads one visible line from a buffered reader, echoing the prompt to a writer.
pub struct LineSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LineSource<io::StdinLock<'static>, io::Stdout> {
    /// Bind to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SecretSource for LineSource<R, W> {
    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input reached before a line was entered",
            ));
        }

        Ok(strip_line_terminator(line))
    }
}

/// Reads one line from the terminal with echo disabled.
///
/// The prompt goes to stderr so stdout stays reserved for the confirmation.
#[derive(Debug, Default)]
pub struct HiddenSource;

impl SecretSource for HiddenSource {
    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        eprint!("{}", prompt);
        io::stderr().flush()?;
        rpassword::read_password()
    }
}

/// Remove exactly one trailing `\n` or `\r\n`.
fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
