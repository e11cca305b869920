//! 3-bit colour palette; file character '1' selects entry 0.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self{ r, g, b }
    }
}

pub const NUM_COLOURS: usize = 8;

pub const PALETTE: [ Rgb; NUM_COLOURS ] = [
    Rgb::new(0, 0, 0),       // 1: black
    Rgb::new(255, 0, 0),     // 2: red
    Rgb::new(0, 255, 0),     // 3: green
    Rgb::new(0, 0, 255),     // 4: blue
    Rgb::new(255, 255, 0),   // 5: yellow
    Rgb::new(255, 0, 255),   // 6: magenta
    Rgb::new(0, 255, 255),   // 7: cyan
    Rgb::new(255, 255, 255), // 8: white
];

pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);

/// Maps an index character to its palette slot, if it has one.
pub fn index_of(ch: u8) -> Option<usize> {
    let index = ch.wrapping_sub(b'1') as usize;
    if index < NUM_COLOURS { Some(index) } else { None }
}

/// Colour drawn for an index character; `None` leaves the background showing.
pub fn lookup(ch: u8) -> Option<Rgb> {
    index_of(ch).map(|index| PALETTE[index])
}
