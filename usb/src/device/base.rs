use crate::colours::Colour;
use crate::commands::{Command, Side, HID_REPORT_OUTPUT, HID_SET_REPORT};
use crate::devices::PortalDevice;
use crate::error::{CommandError, ConnectError};
use std::time::Duration;

// This is a basic SuperTrait which defines all the 'Parts' of the portal for use.
pub trait FullPortalDevice: AttachPortal + PortalCommands {}

pub trait AttachPortal {
    fn from_device(device: PortalDevice) -> Result<Box<dyn FullPortalDevice>, ConnectError>
    where
        Self: Sized;
}

pub trait ExecutablePortal {
    /// Push an output report to the default control endpoint. A `None`
    /// timeout leaves the wait unbounded.
    fn send_report(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
        timeout: Option<Duration>,
    ) -> Result<(), CommandError>;
}

// These are commands that can be executed, but send_report must be implemented..
pub trait PortalCommands: ExecutablePortal {
    fn send_command(&mut self, command: Command) -> Result<(), CommandError> {
        self.send_report(
            HID_SET_REPORT,
            HID_REPORT_OUTPUT,
            0,
            &command.as_report(),
            None,
        )
    }

    fn set_ring_colour(&mut self, colour: Colour) -> Result<(), CommandError> {
        self.send_command(Command::SetRingColour(colour))
    }

    fn set_side_colour(
        &mut self,
        side: Side,
        colour: Colour,
        fade: u16,
    ) -> Result<(), CommandError> {
        self.send_command(Command::SetSideColour { side, colour, fade })
    }
}
