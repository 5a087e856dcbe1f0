mod cli;

use crate::cli::{Cli, LevelFilter};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use portal_usb::colours;
use portal_usb::commands::Side;
use portal_usb::device::base::PortalCommands;
use portal_usb::device::from_device;
use portal_usb::devices::find_devices;
use portal_usb::error::CommandError;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

// Fade duration for the side colour, in device ticks.
const SIDE_FADE: u16 = 0x1000;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let device = find_devices()
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No Portal of Power found, is it plugged in?"))?;

    info!(
        "Found Portal of Power on bus {}, address {}",
        device.bus_number(),
        device.address()
    );

    let mut portal = from_device(device).context("Could not open the portal")?;
    send_light_sequence(portal.as_mut()).context("Could not set the portal lights")?;

    info!("Portal lights set");
    Ok(())
}

/// Ring red first, then fade the left side to green. A failed first report
/// stops the sequence.
fn send_light_sequence(portal: &mut (impl PortalCommands + ?Sized)) -> Result<(), CommandError> {
    portal.set_ring_colour(colours::RED)?;
    portal.set_side_colour(Side::Left, colours::GREEN, SIDE_FADE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_usb::device::base::ExecutablePortal;
    use portal_usb::rusb;
    use std::time::Duration;

    #[derive(Default)]
    struct FakePortal {
        sent: Vec<(u8, u16, u16, Vec<u8>, Option<Duration>)>,
        fail_on: Option<usize>,
    }

    impl ExecutablePortal for FakePortal {
        fn send_report(
            &mut self,
            request: u8,
            value: u16,
            index: u16,
            data: &[u8],
            timeout: Option<Duration>,
        ) -> Result<(), CommandError> {
            if self.fail_on == Some(self.sent.len()) {
                return Err(CommandError::UsbError(rusb::Error::Pipe));
            }
            self.sent.push((request, value, index, data.to_vec(), timeout));
            Ok(())
        }
    }

    impl PortalCommands for FakePortal {}

    #[test]
    fn sends_both_reports_in_order() {
        let mut portal = FakePortal::default();
        send_light_sequence(&mut portal).unwrap();

        assert_eq!(portal.sent.len(), 2);

        let (request, value, index, data, timeout) = &portal.sent[0];
        assert_eq!(*request, 0x09);
        assert_eq!(*value, 0x0200);
        assert_eq!(*index, 0x0000);
        assert_eq!(data, &[0x43, 0xFF, 0x00, 0x00]);
        assert_eq!(*timeout, None);

        let (request, value, index, data, timeout) = &portal.sent[1];
        assert_eq!(*request, 0x09);
        assert_eq!(*value, 0x0200);
        assert_eq!(*index, 0x0000);
        assert_eq!(data, &[0x4A, 0x02, 0x00, 0xFF, 0x00, 0x00, 0x10]);
        assert_eq!(*timeout, None);
    }

    #[test]
    fn stops_after_a_failed_first_report() {
        let mut portal = FakePortal {
            fail_on: Some(0),
            ..Default::default()
        };

        assert!(send_light_sequence(&mut portal).is_err());
        assert!(portal.sent.is_empty());
    }
}
