use crate::colours::Colour;
use byteorder::{ByteOrder, LittleEndian};

/// bRequest for a HID SET_REPORT class request.
pub const HID_SET_REPORT: u8 = 0x09;
/// wValue selecting output report zero.
pub const HID_REPORT_OUTPUT: u16 = 0x0200;

// The portal splits its lighting into three zones, addressed by these ids
// in the 'J' command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Trap,
    Left,
}

impl Side {
    pub fn id(&self) -> u8 {
        match self {
            Side::Right => 0x00,
            Side::Trap => 0x01,
            Side::Left => 0x02,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set the main ring colour immediately.
    SetRingColour(Colour),
    /// Fade one side of the portal to a colour over `fade` ticks.
    SetSideColour {
        side: Side,
        colour: Colour,
        fade: u16,
    },
}

impl Command {
    pub fn command_id(&self) -> u8 {
        match self {
            Command::SetRingColour(..) => b'C',
            Command::SetSideColour { .. } => b'J',
        }
    }

    /// Frame the command as the output report the portal expects.
    pub fn as_report(&self) -> Vec<u8> {
        match self {
            Command::SetRingColour(colour) => {
                vec![self.command_id(), colour.red, colour.green, colour.blue]
            }
            Command::SetSideColour { side, colour, fade } => {
                let mut report = vec![
                    self.command_id(),
                    side.id(),
                    colour.red,
                    colour.green,
                    colour.blue,
                    0x00,
                    0x00,
                ];
                LittleEndian::write_u16(&mut report[5..7], *fade);
                report
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn ring_colour_report_is_four_bytes() {
        let report = Command::SetRingColour(colours::RED).as_report();
        assert_eq!(report, [0x43, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn side_colour_report_packs_fade_little_endian() {
        let report = Command::SetSideColour {
            side: Side::Left,
            colour: colours::GREEN,
            fade: 0x1000,
        }
        .as_report();
        assert_eq!(report, [0x4A, 0x02, 0x00, 0xFF, 0x00, 0x00, 0x10]);
    }

    #[test]
    fn side_ids_match_the_portal_zones() {
        assert_eq!(Side::Right.id(), 0x00);
        assert_eq!(Side::Trap.id(), 0x01);
        assert_eq!(Side::Left.id(), 0x02);
    }
}
