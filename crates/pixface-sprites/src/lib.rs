//! Pixel-art sprites for the pixface watch face.
//!
//! Every sprite is a grid of characters, one per pixel:
//! `.` is transparent, `#` is body ink, `o` is skin ink and `r` is accent ink.

/// Ink slot of an opaque sprite pixel. The renderer maps slots to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Body,
    Skin,
    Accent,
}

/// A fixed pixel-art bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    rows: &'static [&'static str],
}

impl Sprite {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Ink at `(x, y)`, `None` when transparent or out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Ink> {
        let row = self.rows.get(y)?;
        match row.as_bytes().get(x)? {
            b'#' => Some(Ink::Body),
            b'o' => Some(Ink::Skin),
            b'r' => Some(Ink::Accent),
            _ => None,
        }
    }
}

// Second runner, stepping right / middle / left.
pub const RUNNER_RIGHT: Sprite = Sprite::new(&[
    "..o..",
    ".###.",
    "#.#.#",
    "..#..",
    ".#.#.",
    ".#..#",
    "#....",
]);

pub const RUNNER_MIDDLE: Sprite = Sprite::new(&[
    "..o..",
    ".###.",
    "#.#.#",
    "..#..",
    ".#.#.",
    ".#.#.",
    ".#.#.",
]);

pub const RUNNER_LEFT: Sprite = Sprite::new(&[
    "..o..",
    ".###.",
    "#.#.#",
    "..#..",
    ".#.#.",
    "#..#.",
    "....#",
]);

/// Second runner cycle, indexed by `second % 4`.
pub static SECOND_FRAMES: [Sprite; 4] = [RUNNER_RIGHT, RUNNER_MIDDLE, RUNNER_LEFT, RUNNER_MIDDLE];

// Hour walker.
pub const GIRL_RUN: Sprite = Sprite::new(&[
    ".ooo.",
    ".ooo.",
    "..o.r",
    ".rrr.",
    "r.r..",
    "rrrrr",
    ".o..o",
    "o....",
]);

pub const GIRL_STAND: Sprite = Sprite::new(&[
    ".ooo.",
    ".ooo.",
    "..o..",
    ".rrr.",
    "r.r.r",
    "rrrrr",
    ".o.o.",
    ".o.o.",
]);

/// Hour walker frames: `[run, stand]`.
pub static HOUR_FRAMES: [Sprite; 2] = [GIRL_RUN, GIRL_STAND];

// Minute walker.
pub const MAN_RUN: Sprite = Sprite::new(&[
    ".ooo.",
    ".ooo.",
    "..#.#",
    "####.",
    "..#..",
    ".###.",
    ".#..#",
    "#....",
]);

pub const MAN_STAND: Sprite = Sprite::new(&[
    ".ooo.",
    ".ooo.",
    "..#..",
    "#####",
    "..#..",
    ".###.",
    ".#.#.",
    ".#.#.",
]);

/// Minute walker frames: `[run, stand]`.
pub static MINUTE_FRAMES: [Sprite; 2] = [MAN_RUN, MAN_STAND];

/// Index of the running frame in the two-frame walker arrays.
pub const RUN: usize = 0;
/// Index of the standing frame in the two-frame walker arrays.
pub const STAND: usize = 1;

/// 3x5 digits for the digital readout.
pub static DIGITS: [Sprite; 10] = [
    Sprite::new(&["###", "#.#", "#.#", "#.#", "###"]),
    Sprite::new(&[".#.", "##.", ".#.", ".#.", "###"]),
    Sprite::new(&["###", "..#", "###", "#..", "###"]),
    Sprite::new(&["###", "..#", ".##", "..#", "###"]),
    Sprite::new(&["#.#", "#.#", "###", "..#", "..#"]),
    Sprite::new(&["###", "#..", "###", "..#", "###"]),
    Sprite::new(&["###", "#..", "###", "#.#", "###"]),
    Sprite::new(&["###", "..#", ".#.", ".#.", ".#."]),
    Sprite::new(&["###", "#.#", "###", "#.#", "###"]),
    Sprite::new(&["###", "#.#", "###", "..#", "###"]),
];

pub static COLON: Sprite = Sprite::new(&[".", "#", ".", "#", "."]);

/// Height of every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Blank columns between glyphs.
pub const GLYPH_SPACING: usize = 1;

/// Glyph for a readout character. Unsupported characters have none.
pub fn glyph(ch: char) -> Option<&'static Sprite> {
    match ch {
        '0'..='9' => DIGITS.get(ch as usize - '0' as usize),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Width in pixels of `text` laid out with [`glyph`], before magnification.
pub fn text_width(text: &str) -> usize {
    let widths: Vec<usize> = text.chars().filter_map(glyph).map(Sprite::width).collect();
    match widths.len() {
        0 => 0,
        n => widths.iter().sum::<usize>() + (n - 1) * GLYPH_SPACING,
    }
}
