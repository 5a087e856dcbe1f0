use crate::devices::PortalDevice;
use crate::error::ConnectError;

pub mod base;

// libUSB handles the portal on every platform we target.
mod libusb;

use crate::device::base::{AttachPortal, FullPortalDevice};

pub fn from_device(device: PortalDevice) -> Result<Box<dyn FullPortalDevice>, ConnectError> {
    libusb::device::PortalUSB::from_device(device)
}
