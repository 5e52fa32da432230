//! Per-letter and per-block reveal styles
//!
//! Styles are a pure function of (letter index, phase). The render layer only
//! turns them into inline CSS; CSS transitions do the actual tweening.

use super::reveal::Phase;

/// Stagger between consecutive letters.
pub const LETTER_STAGGER_MS: u32 = 100;
/// Rise-in duration of a single letter.
pub const LETTER_RISE_MS: u32 = 500;
/// Distance a hidden letter sits below its resting place.
pub const LETTER_DROP_PX: f32 = 50.0;
/// Stagger between particles when a letter disintegrates.
pub const PARTICLE_STAGGER_MS: u32 = 50;
pub const PARTICLE_DURATION_MS: u32 = 1000;
/// Max scatter distance on each axis.
pub const PARTICLE_SPREAD_PX: f32 = 50.0;

pub const TITLE_TEXT: &str = "RECRUITMENTS";
pub const OLD_YEAR_TEXT: &str = "2024";
pub const NEW_YEAR_TEXT: &str = "2025";
pub const TAGLINE_TEXT: &str = "Ride into the Future With Us";

/// Visual state of one animated letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStyle {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl LetterStyle {
    /// Below its resting place and invisible.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            translate_x: 0.0,
            translate_y: LETTER_DROP_PX,
            scale: 1.0,
            delay_ms: 0,
            duration_ms: 0,
        }
    }

    /// Resting place, fully visible, after a stagger based on `index`.
    pub fn risen(index: usize) -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            delay_ms: index as u32 * LETTER_STAGGER_MS,
            duration_ms: LETTER_RISE_MS,
        }
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "display: inline-block; opacity: {}; transform: translate({}px, {}px) scale({}); \
             transition: opacity {}ms ease-out {}ms, transform {}ms ease-out {}ms;",
            self.opacity,
            self.translate_x,
            self.translate_y,
            self.scale,
            self.duration_ms,
            self.delay_ms,
            self.duration_ms,
            self.delay_ms,
        )
    }
}

/// Letter of the "RECRUITMENTS" line.
pub fn title_letter(index: usize, phase: Phase) -> LetterStyle {
    if phase.has_reached(Phase::TITLE) {
        LetterStyle::risen(index)
    } else {
        LetterStyle::hidden()
    }
}

/// Letter of last year's number: rises in, then breaks apart.
pub fn old_year_letter(index: usize, phase: Phase) -> LetterStyle {
    if phase.has_reached(Phase::DISINTEGRATE) {
        let (dx, dy) = scatter_offset(index);
        LetterStyle {
            opacity: 0.0,
            translate_x: dx,
            translate_y: dy,
            scale: 0.5,
            delay_ms: index as u32 * PARTICLE_STAGGER_MS,
            duration_ms: PARTICLE_DURATION_MS,
        }
    } else if phase.has_reached(Phase::OLD_YEAR) {
        LetterStyle::risen(index)
    } else {
        LetterStyle::hidden()
    }
}

/// Letter of this year's number.
pub fn new_year_letter(index: usize, phase: Phase) -> LetterStyle {
    if phase.has_reached(Phase::NEW_YEAR) {
        LetterStyle::risen(index)
    } else {
        LetterStyle::hidden()
    }
}

/// Deterministic scatter in `[-PARTICLE_SPREAD_PX, PARTICLE_SPREAD_PX]` per axis.
///
/// Must be identical on server and client so hydration does not mismatch.
pub fn scatter_offset(index: usize) -> (f32, f32) {
    let x = unit_noise(index as u64 * 2);
    let y = unit_noise(index as u64 * 2 + 1);
    (x * PARTICLE_SPREAD_PX, y * PARTICLE_SPREAD_PX)
}

// splitmix64 mapped to [-1.0, 1.0]
fn unit_noise(seed: u64) -> f32 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let unit = (z >> 40) as f32 / (1u64 << 24) as f32;
    unit * 2.0 - 1.0
}

/// Visual state of a block that fades in once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStyle {
    pub visible: bool,
    pub offset_y: f32,
    pub scale: f32,
}

impl FadeStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({}); transition: opacity 800ms ease-out, transform 800ms ease-out;",
            if self.visible { 1 } else { 0 },
            self.offset_y,
            self.scale,
        )
    }
}

/// Block that slides up 20px while fading in at `reveal_at`.
pub fn fade_up(phase: Phase, reveal_at: Phase) -> FadeStyle {
    let visible = phase.has_reached(reveal_at);
    FadeStyle {
        visible,
        offset_y: if visible { 0.0 } else { 20.0 },
        scale: 1.0,
    }
}

/// Block that grows from 90% while fading in at `reveal_at`.
pub fn fade_grow(phase: Phase, reveal_at: Phase) -> FadeStyle {
    let visible = phase.has_reached(reveal_at);
    FadeStyle {
        visible,
        offset_y: 0.0,
        scale: if visible { 1.0 } else { 0.9 },
    }
}
