//! ECS resource bridging the main thread with the serial reader thread.
//!
//! Use [`setup_serial`] once during initialization to open the joystick's
//! serial source and spawn the reader thread. When the source cannot be
//! opened no bridge is inserted and the joystick falls back to the keyboard.
//! Call [`shutdown_serial`] during teardown.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, unbounded};
use log::{debug, info, warn};

use crate::components::inputcontrolled::JoystickSample;
use crate::events::serial::SerialMessage;
use crate::systems::serial::serial_reader_thread;

/// Shared bridge between the ECS world and the serial reader thread.
#[derive(Resource)]
pub struct SerialBridge {
    /// Receiver for lines and status from the reader thread.
    pub rx_msg: Receiver<SerialMessage>,
    /// Set to ask the reader thread to exit.
    pub stop: Arc<AtomicBool>,
    /// Join handle for the background reader thread.
    pub handle: Option<std::thread::JoinHandle<()>>,
    /// Cleared once the reader reports the source is gone.
    pub connected: bool,
    /// Latest valid sample, still in the wire's units. Persists across frames
    /// that bring no new line.
    pub last_sample: Option<JoystickSample>,
}

impl SerialBridge {
    /// Spawn a reader thread over any byte source.
    pub fn spawn<R: Read + Send + 'static>(reader: R) -> Self {
        let (tx_msg, rx_msg) = unbounded::<SerialMessage>();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = stop.clone();
        let handle = std::thread::spawn(move || serial_reader_thread(reader, tx_msg, thread_stop));
        Self {
            rx_msg,
            stop,
            handle: Some(handle),
            connected: true,
            last_sample: None,
        }
    }
}

/// Open the serial source at `path` and register the bridge resource.
///
/// Returns `false` (after logging a warning) when the source cannot be
/// opened; the joystick then uses keyboard input.
pub fn setup_serial(world: &mut World, path: &Path) -> bool {
    match std::fs::File::open(path) {
        Ok(file) => {
            info!("serial source opened: {}", path.display());
            world.insert_resource(SerialBridge::spawn(file));
            true
        }
        Err(e) => {
            warn!(
                "serial source {} unavailable ({}); using keyboard input",
                path.display(),
                e
            );
            false
        }
    }
}

/// Ask the reader thread to stop and remove the bridge.
///
/// A reader blocked inside `read` on a silent device cannot observe the stop
/// flag; such a thread is detached instead of joined.
pub fn shutdown_serial(world: &mut World) {
    if let Some(mut bridge) = world.remove_resource::<SerialBridge>() {
        bridge.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = bridge.handle.take() {
            if handle.is_finished() {
                let _ = handle.join();
            } else {
                debug!("serial reader still blocked on read; detaching");
            }
        }
    }
}
