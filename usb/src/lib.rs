pub use rusb;

pub mod colours;
pub mod commands;
pub mod device;
pub mod devices;
pub mod error;

/// USB vendor ID assigned to Activision.
pub const VID_ACTIVISION: u16 = 0x1430;
/// Product ID of the wired Portal of Power.
pub const PID_PORTAL: u16 = 0x0150;
