//! Integration tests for the UGE reader and writer.
//!
//! These tests build songs that touch every section of the file, then check
//! that decoding the encoded bytes gives back the same song and that corrupt
//! input is rejected with the right error.

use pretty_assertions::assert_eq;

use uge_format::{
    read_song, Instrument, InstrumentKind, UgeCell, UgeFormatError, UgePattern, UgeSong,
    UGE_INSTRUMENT_RECORD_SIZE, UGE_SHORTSTRING_SIZE, UGE_WAVE_LENGTH,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Build a song with non-default data in every section.
fn busy_song() -> UgeSong {
    let mut song = UgeSong::new("Busy Song");
    song.artist = "Tester".to_string();
    song.comment = "Café au lait".to_string();

    for (i, instrument) in song.duty_instruments.iter_mut().enumerate() {
        *instrument = Instrument::new(&format!("Duty {}", i)).with_length(Some(i as u32 * 3));
        instrument.duty = (i % 4) as u8;
        instrument.freq_sweep_shift = 2;
    }
    for (i, instrument) in song.wave_instruments.iter_mut().enumerate() {
        let length = if i % 2 == 0 { Some(i as u32 * 17) } else { None };
        *instrument = Instrument::new(&format!("Wave {}", i)).with_length(length);
        instrument.output_level = 1;
        instrument.waveform = i as u32;
    }
    song.noise_instruments[4].counter_step = 1;
    song.noise_instruments[4].subpattern_enabled = true;
    song.noise_instruments[4].subpattern[0] = UgeCell {
        note: 36,
        instrument: 2,
        volume: 0,
        effect_code: 12,
        effect_param: 0x0F,
    };

    for (i, wave) in song.waves.iter_mut().enumerate() {
        for (j, sample) in wave.iter_mut().enumerate() {
            *sample = ((i + j) % 16) as u8;
        }
    }

    song.ticks_per_row = 5;
    song.timer_enabled = true;
    song.timer_divider = 200;

    let mut pattern = UgePattern::empty(0);
    pattern.rows[0] = UgeCell {
        note: 24,
        instrument: 1,
        volume: 0,
        effect_code: 0,
        effect_param: 0,
    };
    song.patterns.push(pattern);
    song.patterns.push(UgePattern::empty(7));

    song.orders = [vec![0, 0], vec![7, 0], vec![0, 0], vec![7, 0]];
    song.routines[3] = "ld a, 1\nld [hl], a".to_string();
    song
}

fn wave_length_offset(index: usize) -> usize {
    let first_wave_record = 4 + 3 * UGE_SHORTSTRING_SIZE + 15 * UGE_INSTRUMENT_RECORD_SIZE;
    first_wave_record + index * UGE_INSTRUMENT_RECORD_SIZE + 4 + UGE_SHORTSTRING_SIZE
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_busy_song_round_trips() {
    let song = busy_song();
    let bytes = song.to_bytes().unwrap();
    let decoded = read_song(&bytes).unwrap();
    assert_eq!(decoded, song);
}

#[test]
fn test_encoding_is_stable() {
    let bytes = busy_song().to_bytes().unwrap();
    let again = read_song(&bytes).unwrap().to_bytes().unwrap();
    assert_eq!(bytes, again);
}

#[test]
fn test_wave_length_256_survives() {
    let mut song = UgeSong::default();
    song.wave_instruments[2].length = Some(256);
    let decoded = read_song(&song.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.wave_instruments[2].length, Some(256));
}

#[test]
fn test_wave_length_field_position() {
    let mut song = UgeSong::default();
    song.wave_instruments[1].length = Some(10);
    let bytes = song.to_bytes().unwrap();

    let at = wave_length_offset(1);
    assert_eq!(&bytes[at..at + 4], &10u32.to_le_bytes());
    assert_eq!(bytes[at + 4], 1, "length enable flag");
}

#[test]
fn test_disabled_length_value_is_dropped() {
    let mut bytes = UgeSong::default().to_bytes().unwrap();
    let at = wave_length_offset(0);
    bytes[at..at + 4].copy_from_slice(&37u32.to_le_bytes());

    let song = read_song(&bytes).unwrap();
    assert_eq!(song.wave_instruments[0].length, None);
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let song = busy_song();
    let mut bytes = song.to_bytes().unwrap();
    bytes.extend_from_slice(&[0xAA; 8]);
    assert_eq!(read_song(&bytes).unwrap(), song);
}

// =============================================================================
// Corrupt Input Tests
// =============================================================================

#[test]
fn test_truncated_file_is_rejected_everywhere() {
    let bytes = busy_song().to_bytes().unwrap();
    for cut in [3, 100, 5000, 30000, bytes.len() - 1] {
        let err = read_song(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, UgeFormatError::Truncated { .. }),
            "cut at {} gave {:?}",
            cut,
            err
        );
    }
}

#[test]
fn test_swapped_instrument_type_is_rejected() {
    let mut bytes = UgeSong::default().to_bytes().unwrap();
    let first_wave_record = 4 + 3 * UGE_SHORTSTRING_SIZE + 15 * UGE_INSTRUMENT_RECORD_SIZE;
    bytes[first_wave_record..first_wave_record + 4]
        .copy_from_slice(&InstrumentKind::Noise.type_code().to_le_bytes());

    let err = read_song(&bytes).unwrap_err();
    assert_eq!(
        err,
        UgeFormatError::InstrumentTypeMismatch {
            number: 1,
            expected: "wave",
            found: 2,
        }
    );
}

#[test]
fn test_huge_pattern_count_is_rejected() {
    let mut bytes = UgeSong::default().to_bytes().unwrap();
    let pattern_count_at = 4
        + 3 * UGE_SHORTSTRING_SIZE
        + 45 * UGE_INSTRUMENT_RECORD_SIZE
        + 16 * UGE_WAVE_LENGTH
        + 9;
    bytes[pattern_count_at..pattern_count_at + 4].copy_from_slice(&u32::MAX.to_le_bytes());

    let err = read_song(&bytes).unwrap_err();
    assert!(matches!(
        err,
        UgeFormatError::CountTooLarge {
            field: "pattern",
            ..
        }
    ));
}
