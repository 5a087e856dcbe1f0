use crate::device::base::{
    AttachPortal, ExecutablePortal, FullPortalDevice, PortalCommands,
};
use crate::devices::PortalDevice;
use crate::error::{CommandError, ConnectError};
use log::{debug, info};
use rusb::{Device, DeviceHandle, Direction, GlobalContext, Recipient, RequestType};
use std::time::Duration;

pub struct PortalUSB {
    handle: DeviceHandle<GlobalContext>,
    device: Device<GlobalContext>,
}

impl PortalUSB {
    fn find_device(device: PortalDevice) -> Result<Device<GlobalContext>, ConnectError> {
        if let Ok(devices) = rusb::devices() {
            for usb_device in devices.iter() {
                if usb_device.bus_number() == device.bus_number()
                    && usb_device.address() == device.address()
                {
                    return Ok(usb_device);
                }
            }
        }
        Err(ConnectError::DeviceNotFound)
    }
}

impl AttachPortal for PortalUSB {
    fn from_device(device: PortalDevice) -> Result<Box<dyn FullPortalDevice>, ConnectError> {
        // Firstly, we need to locate the USB device based on the location..
        let device = PortalUSB::find_device(device)?;
        let mut handle = device.open()?;

        info!("Connected to possible portal device at {:?}", device);

        // Best effort, usbhid normally owns interface 0. Output reports
        // still reach the default control endpoint either way.
        let _ = handle.detach_kernel_driver(0);

        Ok(Box::new(Self { handle, device }))
    }
}

impl ExecutablePortal for PortalUSB {
    fn send_report(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
        timeout: Option<Duration>,
    ) -> Result<(), CommandError> {
        debug!("Sending report to {:?}: {:02x?}", self.device, data);

        // libusb treats a zero duration as "no timeout".
        self.handle.write_control(
            rusb::request_type(Direction::Out, RequestType::Class, Recipient::Interface),
            request,
            value,
            index,
            data,
            timeout.unwrap_or(Duration::ZERO),
        )?;

        Ok(())
    }
}

impl PortalCommands for PortalUSB {}
impl FullPortalDevice for PortalUSB {}
