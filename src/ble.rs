//! BLE surface constants for the emulator's transport collaborator.
//!
//! The decoder does not speak Bluetooth; these are the identifiers the
//! peripheral layer must advertise so companion apps recognise the
//! device, plus the default acknowledgement the caller contract expects.

/// Primary service UUID the companion apps scan for.
pub const SERVICE_UUID: &str = "0000ff00-0000-1000-8000-00805f9b34fb";

/// Write characteristic carrying the ESC/POS byte stream.
pub const WRITE_CHARACTERISTIC_UUID: &str = "0000ff02-0000-1000-8000-00805f9b34fb";

/// Notify characteristic carrying status responses.
pub const NOTIFY_CHARACTERISTIC_UUID: &str = "0000ff01-0000-1000-8000-00805f9b34fb";

/// Advertised local name of the emulated printer.
pub const LOCAL_NAME: &str = "BT-B36";

/// One-byte acknowledgement for bursts without a scripted response.
pub const DEFAULT_ACK: u8 = 0x00;
