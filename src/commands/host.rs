use std::io::Write;

/// The process environment a run talks to, abstracted so tests can capture it
pub trait Host: Send + Sync {
    /// Destination for normal output (stdout for the real binary)
    fn output(&mut self) -> impl Write;

    /// Destination for error messages (stderr for the real binary)
    fn error(&mut self) -> impl Write;

    /// Terminate the process with `code`. Test hosts record the code and return.
    fn exit(&mut self, code: i32);
}
