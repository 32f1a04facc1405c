//! Piped stdin source.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Markup piped to stdin, e.g. `cat doc.txt | richlist`.
///
/// Read to EOF in one go; the listing is static once shown.
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Wrap the process stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal, so
    /// the viewer never blocks waiting for typed input.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Wrap any reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything up to EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and invalid UTF-8.
    pub fn read_all(&mut self) -> Result<String, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}
