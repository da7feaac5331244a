// Gallows art, indexed by lives lost

pub const STAGE_COUNT: usize = 7;

pub const STAGES: [&str; STAGE_COUNT] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Art for `index` lives lost; anything past the last stage draws the full figure.
#[must_use]
pub fn stage(index: usize) -> &'static str {
    STAGES[index.min(STAGE_COUNT - 1)]
}
