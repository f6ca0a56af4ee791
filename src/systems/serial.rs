//! Serial line protocol and the background reader thread.
//!
//! The joystick sends one ASCII record per line: `x,y\n`, where the values are
//! either raw 0–1023 analog readings or floats already in `[-1, 1]`.
//!
//! - [`serial_reader_thread`] runs on its own OS thread, reads the source in
//!   small chunks, reassembles lines with a [`LineBuffer`] and forwards them as
//!   [`SerialMessage::Line`]. A closed or failed source ends the thread with
//!   [`SerialMessage::Disconnected`].
//! - [`parse_joystick_line`] turns a line into a sample; malformed or short
//!   lines are dropped.
//!
//! Timeouts and `WouldBlock` are treated as "no data yet", never as errors.
//! See also [`crate::resources::serial`].

use std::io::{ErrorKind, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam_channel::Sender;
use glam::Vec2;
use log::{debug, warn};

use crate::components::inputcontrolled::JoystickSample;
use crate::events::serial::SerialMessage;

const READ_CHUNK: usize = 64;
const IDLE_SLEEP: Duration = Duration::from_millis(5);

/// Accumulates bytes until a line terminator is seen.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completed.
    ///
    /// Lines are split on `\n`; a trailing `\r` is stripped. Invalid UTF-8 is
    /// replaced rather than rejected, the parser drops such lines anyway.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for &byte in chunk {
            if byte == b'\n' {
                let mut line = std::mem::take(&mut self.pending);
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                lines.push(String::from_utf8_lossy(&line).into_owned());
            } else {
                self.pending.push(byte);
            }
        }
        lines
    }

    /// Bytes of the current unfinished line.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }
}

/// Parse `x,y` into a sample in wire units.
///
/// Returns `None` unless there are exactly two comma-separated numeric
/// fields. The sample remembers whether both fields were plain integers.
pub fn parse_joystick_line(line: &str) -> Option<JoystickSample> {
    let mut fields = line.trim().split(',');
    let x_field = fields.next()?.trim();
    let y_field = fields.next()?.trim();
    if fields.next().is_some() {
        return None;
    }
    let x = x_field.parse::<f32>().ok()?;
    let y = y_field.parse::<f32>().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let integral = x_field.parse::<i64>().is_ok() && y_field.parse::<i64>().is_ok();
    Some(JoystickSample::new(Vec2::new(x, y), integral))
}

/// Entry point of the serial reader thread.
///
/// Runs until the source ends, a hard read error occurs, the receiver is
/// dropped, or `stop` is set.
pub fn serial_reader_thread<R: Read>(
    mut reader: R,
    tx_msg: Sender<SerialMessage>,
    stop: Arc<AtomicBool>,
) {
    debug!(
        "[serial] reader starting (id={:?})",
        std::thread::current().id()
    );
    let mut lines = LineBuffer::new();
    let mut chunk = [0u8; READ_CHUNK];

    while !stop.load(Ordering::Relaxed) {
        match reader.read(&mut chunk) {
            Ok(0) => {
                let _ = tx_msg.send(SerialMessage::Disconnected {
                    reason: "end of stream".into(),
                });
                break;
            }
            Ok(n) => {
                for line in lines.push(&chunk[..n]) {
                    if tx_msg.send(SerialMessage::Line(line)).is_err() {
                        debug!("[serial] receiver dropped");
                        return;
                    }
                }
            }
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
                ) =>
            {
                std::thread::sleep(IDLE_SLEEP);
            }
            Err(e) => {
                warn!("[serial] read failed: {}", e);
                let _ = tx_msg.send(SerialMessage::Disconnected {
                    reason: e.to_string(),
                });
                break;
            }
        }
    }
    debug!("[serial] reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_partial_line_is_buffered() {
        let mut buf = LineBuffer::new();
        assert!(buf.push(b"51").is_empty());
        assert!(buf.push(b"2,7").is_empty());
        assert_eq!(buf.pending(), b"512,7");
        assert_eq!(buf.push(b"00\n1,"), vec!["512,700".to_string()]);
        assert_eq!(buf.pending(), b"1,");
    }

    #[test]
    fn test_crlf_and_multiple_lines() {
        let mut buf = LineBuffer::new();
        let lines = buf.push(b"1,2\r\n3,4\n");
        assert_eq!(lines, vec!["1,2".to_string(), "3,4".to_string()]);
        assert!(buf.pending().is_empty());
    }

    #[test]
    fn test_parse_valid_lines() {
        assert_eq!(
            parse_joystick_line("512,1023"),
            Some(JoystickSample::new(Vec2::new(512.0, 1023.0), true))
        );
        assert_eq!(
            parse_joystick_line(" -0.5 , 0.25 "),
            Some(JoystickSample::new(Vec2::new(-0.5, 0.25), false))
        );
        assert_eq!(
            parse_joystick_line("0,0.0"),
            Some(JoystickSample::new(Vec2::ZERO, false))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert_eq!(parse_joystick_line(""), None);
        assert_eq!(parse_joystick_line("512"), None);
        assert_eq!(parse_joystick_line("512,"), None);
        assert_eq!(parse_joystick_line("a,b"), None);
        assert_eq!(parse_joystick_line("1,2,3"), None);
        assert_eq!(parse_joystick_line("NaN,1"), None);
    }

    #[test]
    fn test_reader_forwards_lines_then_disconnects() {
        let (tx, rx) = unbounded();
        let stop = Arc::new(AtomicBool::new(false));
        let source: &[u8] = b"100,200\nbad\n0.5,-0.5\n12";
        serial_reader_thread(source, tx, stop);
        let msgs: Vec<SerialMessage> = rx.try_iter().collect();
        assert_eq!(
            msgs,
            vec![
                SerialMessage::Line("100,200".into()),
                SerialMessage::Line("bad".into()),
                SerialMessage::Line("0.5,-0.5".into()),
                SerialMessage::Disconnected {
                    reason: "end of stream".into()
                },
            ]
        );
    }

    #[test]
    fn test_reader_honours_stop_flag() {
        let (tx, rx) = unbounded();
        let stop = Arc::new(AtomicBool::new(true));
        let source: &[u8] = b"1,2\n";
        serial_reader_thread(source, tx, stop);
        assert!(rx.try_iter().next().is_none());
    }
}
