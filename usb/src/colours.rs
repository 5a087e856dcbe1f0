/// A single RGB colour as the portal understands it, one byte per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

pub const RED: Colour = Colour {
    red: 0xFF,
    green: 0x00,
    blue: 0x00,
};

pub const GREEN: Colour = Colour {
    red: 0x00,
    green: 0xFF,
    blue: 0x00,
};
