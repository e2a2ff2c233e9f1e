/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Palette cycled over chart slices, one colour per category.
const SLICE_PALETTE: [Colour; 6] = [
    Colour::Green,
    Colour::Blue,
    Colour::Yellow,
    Colour::Purple,
    Colour::Cyan,
    Colour::RGB(255, 153, 51), // orange
];

pub fn slice_colour(index: usize) -> Colour {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}

/// Amount color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_amount(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        GREY
    }
}
