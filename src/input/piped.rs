use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;

use super::LineSource;

/// Reads newline-terminated lines from any reader, writing the prompt
/// itself. Used when stdin is not a terminal.
pub struct PipedSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl PipedSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PipedSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for PipedSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        // Invalid UTF-8 is replaced rather than treated as a read failure.
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(ReadlineError::Eof);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_and_prompts() {
        let mut prompts = Vec::new();
        let mut source = PipedSource::new("echo hi\r\nstatus\nlast".as_bytes(), &mut prompts);

        assert_eq!(source.read_line(": ").expect("line"), "echo hi");
        assert_eq!(source.read_line(": ").expect("line"), "status");
        assert_eq!(source.read_line(": ").expect("line"), "last");
        assert!(matches!(source.read_line(": "), Err(ReadlineError::Eof)));

        drop(source);
        assert_eq!(String::from_utf8_lossy(&prompts), ": : : : ");
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut source = PipedSource::new("\n".as_bytes(), io::sink());
        assert_eq!(source.read_line(": ").expect("line"), "");
        assert!(matches!(source.read_line(": "), Err(ReadlineError::Eof)));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut source = PipedSource::new(&b"echo \xff\nstatus\n"[..], io::sink());
        assert_eq!(source.read_line(": ").expect("line"), "echo \u{fffd}");
        assert_eq!(source.read_line(": ").expect("line"), "status");
    }
}
