use crate::{PID_PORTAL, VID_ACTIVISION};

// We primarily need the bus number and address, so a located portal can be
// re-found and opened later without holding rusb types.
#[derive(Debug, Clone)]
pub struct PortalDevice {
    pub(crate) bus_number: u8,
    pub(crate) address: u8,
}

impl PortalDevice {
    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}

/// Scan the bus for attached portals. No waiting or polling happens here,
/// only devices present right now are returned.
pub fn find_devices() -> Vec<PortalDevice> {
    let mut attached = Vec::new();

    if let Ok(devices) = rusb::devices() {
        for device in devices.iter() {
            if let Ok(descriptor) = device.device_descriptor() {
                attached.push((
                    device.bus_number(),
                    device.address(),
                    descriptor.vendor_id(),
                    descriptor.product_id(),
                ));
            }
        }
    }

    match_devices(attached)
}

/// Filter a list of (bus, address, vendor, product) entries down to portals.
fn match_devices(attached: impl IntoIterator<Item = (u8, u8, u16, u16)>) -> Vec<PortalDevice> {
    attached
        .into_iter()
        .filter(|&(_, _, vendor_id, product_id)| {
            vendor_id == VID_ACTIVISION && product_id == PID_PORTAL
        })
        .map(|(bus_number, address, _, _)| PortalDevice {
            bus_number,
            address,
        })
        .collect()
}
