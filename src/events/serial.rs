/// Messages sent *back* from the serial reader thread.
#[derive(Debug, Clone, PartialEq)]
pub enum SerialMessage {
    /// One complete line, terminator stripped.
    Line(String),
    /// The source closed or failed; no more lines will arrive.
    Disconnected { reason: String },
}
