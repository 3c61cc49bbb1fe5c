//! UGE song structure and file-level constants.

use serde::{Deserialize, Serialize};

use super::instrument::{Instrument, InstrumentKind, UgeCell, UGE_INSTRUMENTS_PER_KIND, UGE_PATTERN_ROWS};

/// The only file version this crate reads and writes.
pub const UGE_VERSION: u32 = 6;

/// Size of a Pascal shortstring field (length byte + 255 characters).
pub const UGE_SHORTSTRING_SIZE: usize = 256;

/// Maximum characters in a shortstring.
pub const UGE_SHORTSTRING_MAX_LEN: usize = 255;

/// Number of wave table entries.
pub const UGE_WAVE_COUNT: usize = 16;

/// Samples per wave (one 4-bit sample per byte).
pub const UGE_WAVE_LENGTH: usize = 32;

/// Number of channels, and therefore of order lists.
pub const UGE_CHANNELS: usize = 4;

/// Number of routine slots.
pub const UGE_ROUTINE_COUNT: usize = 16;

/// Default ticks per row for a new song.
pub const UGE_DEFAULT_TICKS_PER_ROW: u32 = 7;

/// A numbered pattern of 64 rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UgePattern {
    /// Pattern number referenced by the order lists.
    pub index: u32,
    /// Rows (always 64).
    pub rows: Vec<UgeCell>,
}

impl UgePattern {
    /// Create an empty pattern with the given number.
    pub fn empty(index: u32) -> Self {
        Self {
            index,
            rows: vec![UgeCell::EMPTY; UGE_PATTERN_ROWS],
        }
    }
}

/// A decoded hUGETracker song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UgeSong {
    /// File version.
    pub version: u32,
    pub name: String,
    pub artist: String,
    pub comment: String,
    /// 15 pulse-channel instruments.
    pub duty_instruments: Vec<Instrument>,
    /// 15 wave-channel instruments.
    pub wave_instruments: Vec<Instrument>,
    /// 15 noise-channel instruments.
    pub noise_instruments: Vec<Instrument>,
    /// 16 waves of 32 4-bit samples.
    pub waves: Vec<[u8; UGE_WAVE_LENGTH]>,
    pub ticks_per_row: u32,
    pub timer_enabled: bool,
    pub timer_divider: u32,
    pub patterns: Vec<UgePattern>,
    /// One order list per channel.
    pub orders: [Vec<u32>; UGE_CHANNELS],
    /// 16 routine source slots.
    pub routines: Vec<String>,
}

impl UgeSong {
    /// Create an empty song with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Instruments of the given kind.
    pub fn instruments(&self, kind: InstrumentKind) -> &[Instrument] {
        match kind {
            InstrumentKind::Duty => &self.duty_instruments,
            InstrumentKind::Wave => &self.wave_instruments,
            InstrumentKind::Noise => &self.noise_instruments,
        }
    }

    /// Mutable instruments of the given kind.
    pub fn instruments_mut(&mut self, kind: InstrumentKind) -> &mut Vec<Instrument> {
        match kind {
            InstrumentKind::Duty => &mut self.duty_instruments,
            InstrumentKind::Wave => &mut self.wave_instruments,
            InstrumentKind::Noise => &mut self.noise_instruments,
        }
    }
}

impl Default for UgeSong {
    fn default() -> Self {
        Self {
            version: UGE_VERSION,
            name: String::new(),
            artist: String::new(),
            comment: String::new(),
            duty_instruments: vec![Instrument::default(); UGE_INSTRUMENTS_PER_KIND],
            wave_instruments: vec![Instrument::default(); UGE_INSTRUMENTS_PER_KIND],
            noise_instruments: vec![Instrument::default(); UGE_INSTRUMENTS_PER_KIND],
            waves: vec![[0; UGE_WAVE_LENGTH]; UGE_WAVE_COUNT],
            ticks_per_row: UGE_DEFAULT_TICKS_PER_ROW,
            timer_enabled: false,
            timer_divider: 0,
            patterns: Vec::new(),
            orders: Default::default(),
            routines: vec![String::new(); UGE_ROUTINE_COUNT],
        }
    }
}
