//! UGE instrument and pattern cell structures.

use serde::{Deserialize, Serialize};

/// Number of instruments of each kind stored in a song.
pub const UGE_INSTRUMENTS_PER_KIND: usize = 15;

/// Number of rows in a pattern or an instrument subpattern.
pub const UGE_PATTERN_ROWS: usize = 64;

/// Encoded size of one cell (4 x u32 + 1 x u8).
pub const UGE_CELL_SIZE: usize = 17;

/// Encoded size of one instrument record, subpattern included.
pub const UGE_INSTRUMENT_RECORD_SIZE: usize = 297 + UGE_PATTERN_ROWS * UGE_CELL_SIZE;

/// Note value hUGETracker uses for an empty cell.
pub const UGE_NO_NOTE: u32 = 90;

/// Instrument kind, stored as a `u32` type code ahead of each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    /// Pulse channels 1 and 2.
    Duty,
    /// Wave channel 3.
    Wave,
    /// Noise channel 4.
    Noise,
}

impl InstrumentKind {
    /// Kinds in the order their blocks appear in the file.
    pub const ALL: [InstrumentKind; 3] = [
        InstrumentKind::Duty,
        InstrumentKind::Wave,
        InstrumentKind::Noise,
    ];

    /// Type code written in front of every instrument record.
    pub fn type_code(self) -> u32 {
        match self {
            InstrumentKind::Duty => 0,
            InstrumentKind::Wave => 1,
            InstrumentKind::Noise => 2,
        }
    }

    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentKind::Duty => "duty",
            InstrumentKind::Wave => "wave",
            InstrumentKind::Noise => "noise",
        }
    }
}

/// A single tracker cell, used by both patterns and subpatterns.
///
/// In subpatterns the `instrument` slot holds the jump target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UgeCell {
    pub note: u32,
    pub instrument: u32,
    pub volume: u32,
    pub effect_code: u32,
    pub effect_param: u8,
}

impl UgeCell {
    /// A cell with no note, no instrument and no effect.
    pub const EMPTY: UgeCell = UgeCell {
        note: UGE_NO_NOTE,
        instrument: 0,
        volume: 0,
        effect_code: 0,
        effect_param: 0,
    };
}

impl Default for UgeCell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One instrument record.
///
/// Every record carries the fields of all three kinds; which ones matter
/// depends on the slot the instrument occupies in [`crate::UgeSong`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Instrument name (255 Latin-1 characters max).
    pub name: String,
    /// Sound length, `None` when the length counter is disabled.
    pub length: Option<u32>,
    /// Initial envelope volume.
    pub initial_volume: u8,
    /// Envelope direction (0 up, 1 down).
    pub volume_sweep_direction: u32,
    /// Envelope step length.
    pub volume_sweep_amount: u8,
    /// Frequency sweep time (duty only).
    pub freq_sweep_time: u32,
    /// Frequency sweep direction (duty only).
    pub freq_sweep_direction: u32,
    /// Frequency sweep shift (duty only).
    pub freq_sweep_shift: u32,
    /// Duty cycle (duty only).
    pub duty: u8,
    /// Output level (wave only).
    pub output_level: u32,
    /// Index into the song's wave table (wave only).
    pub waveform: u32,
    /// LFSR width (noise only).
    pub counter_step: u32,
    /// Whether the subpattern is played.
    pub subpattern_enabled: bool,
    /// Subpattern rows (always 64).
    pub subpattern: Vec<UgeCell>,
}

impl Instrument {
    /// Create an instrument with the given name and all other fields zeroed.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Set the length counter value (`None` disables it).
    pub fn with_length(mut self, length: Option<u32>) -> Self {
        self.length = length;
        self
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self {
            name: String::new(),
            length: None,
            initial_volume: 0,
            volume_sweep_direction: 0,
            volume_sweep_amount: 0,
            freq_sweep_time: 0,
            freq_sweep_direction: 0,
            freq_sweep_shift: 0,
            duty: 0,
            output_level: 0,
            waveform: 0,
            counter_step: 0,
            subpattern_enabled: false,
            subpattern: vec![UgeCell::EMPTY; UGE_PATTERN_ROWS],
        }
    }
}
