//! UGE file reader - decodes raw bytes into a [`UgeSong`].

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use super::error::UgeFormatError;
use super::instrument::{
    Instrument, InstrumentKind, UgeCell, UGE_CELL_SIZE, UGE_INSTRUMENTS_PER_KIND,
    UGE_PATTERN_ROWS,
};
use super::song::{
    UgePattern, UgeSong, UGE_CHANNELS, UGE_ROUTINE_COUNT, UGE_SHORTSTRING_MAX_LEN,
    UGE_VERSION, UGE_WAVE_COUNT, UGE_WAVE_LENGTH,
};

/// Encoded size of a pattern (index + 64 cells).
const PATTERN_RECORD_SIZE: usize = 4 + UGE_PATTERN_ROWS * UGE_CELL_SIZE;

/// Decode a UGE v6 song.
///
/// Bytes after the routine block are ignored.
pub fn read_song(data: &[u8]) -> Result<UgeSong, UgeFormatError> {
    let mut reader = UgeReader::new(data);

    let version = reader.u32("version")?;
    if version != UGE_VERSION {
        return Err(UgeFormatError::UnsupportedVersion {
            version,
            expected: UGE_VERSION,
        });
    }

    let name = reader.shortstring("song name")?;
    let artist = reader.shortstring("artist")?;
    let comment = reader.shortstring("comment")?;

    let duty_instruments = reader.instrument_block(InstrumentKind::Duty)?;
    let wave_instruments = reader.instrument_block(InstrumentKind::Wave)?;
    let noise_instruments = reader.instrument_block(InstrumentKind::Noise)?;

    let mut waves = Vec::with_capacity(UGE_WAVE_COUNT);
    for n in 0..UGE_WAVE_COUNT {
        let mut wave = [0u8; UGE_WAVE_LENGTH];
        reader.fill(&mut wave, &format!("wave {}", n))?;
        waves.push(wave);
    }

    let ticks_per_row = reader.u32("ticks per row")?;
    let timer_enabled = reader.u8("timer enabled flag")? != 0;
    let timer_divider = reader.u32("timer divider")?;

    let pattern_count = reader.u32("pattern count")?;
    reader.ensure_count("pattern", pattern_count, PATTERN_RECORD_SIZE)?;
    let mut patterns = Vec::with_capacity(pattern_count as usize);
    for n in 0..pattern_count {
        let label = format!("pattern {}", n);
        let index = reader.u32(&label)?;
        let rows = reader.cells(&label)?;
        patterns.push(UgePattern { index, rows });
    }

    let mut orders: [Vec<u32>; UGE_CHANNELS] = Default::default();
    for (channel, order) in orders.iter_mut().enumerate() {
        let label = format!("order list {}", channel + 1);
        let count = reader.u32(&label)?;
        reader.ensure_count("order", count, 4)?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            entries.push(reader.u32(&label)?);
        }
        *order = entries;
    }

    let mut routines = Vec::with_capacity(UGE_ROUTINE_COUNT);
    for n in 0..UGE_ROUTINE_COUNT {
        routines.push(reader.ansistring(&format!("routine {}", n))?);
    }

    Ok(UgeSong {
        version,
        name,
        artist,
        comment,
        duty_instruments,
        wave_instruments,
        noise_instruments,
        waves,
        ticks_per_row,
        timer_enabled,
        timer_divider,
        patterns,
        orders,
        routines,
    })
}

impl UgeSong {
    /// Decode a song from bytes. See [`read_song`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, UgeFormatError> {
        read_song(data)
    }
}

fn truncated(offset: usize, field: &str) -> UgeFormatError {
    UgeFormatError::Truncated {
        offset,
        field: field.to_string(),
    }
}

/// Decode Latin-1 bytes; every byte maps to the code point of the same value.
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

struct UgeReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> UgeReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    fn offset(&self) -> usize {
        self.cursor.position() as usize
    }

    fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.offset())
    }

    fn u8(&mut self, field: &str) -> Result<u8, UgeFormatError> {
        let offset = self.offset();
        self.cursor.read_u8().map_err(|_| truncated(offset, field))
    }

    fn u32(&mut self, field: &str) -> Result<u32, UgeFormatError> {
        let offset = self.offset();
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| truncated(offset, field))
    }

    fn fill(&mut self, buf: &mut [u8], field: &str) -> Result<(), UgeFormatError> {
        let offset = self.offset();
        if self.remaining() < buf.len() {
            return Err(truncated(offset, field));
        }
        self.cursor
            .read_exact(buf)
            .map_err(|_| truncated(offset, field))
    }

    /// Reject counts whose records could not possibly fit in the remaining data,
    /// before anything is allocated for them.
    fn ensure_count(
        &self,
        field: &'static str,
        count: u32,
        record_size: usize,
    ) -> Result<(), UgeFormatError> {
        let remaining = self.remaining();
        if (count as usize).saturating_mul(record_size) > remaining {
            return Err(UgeFormatError::CountTooLarge {
                field,
                count,
                remaining,
            });
        }
        Ok(())
    }

    fn shortstring(&mut self, field: &str) -> Result<String, UgeFormatError> {
        let len = self.u8(field)? as usize;
        let mut buf = [0u8; UGE_SHORTSTRING_MAX_LEN];
        self.fill(&mut buf, field)?;
        Ok(latin1_to_string(&buf[..len]))
    }

    fn ansistring(&mut self, field: &str) -> Result<String, UgeFormatError> {
        let len = self.u32(field)? as usize;
        if len > self.remaining() {
            return Err(truncated(self.offset(), field));
        }
        let mut buf = vec![0u8; len];
        self.fill(&mut buf, field)?;
        Ok(latin1_to_string(&buf))
    }

    fn cell(&mut self, field: &str) -> Result<UgeCell, UgeFormatError> {
        Ok(UgeCell {
            note: self.u32(field)?,
            instrument: self.u32(field)?,
            volume: self.u32(field)?,
            effect_code: self.u32(field)?,
            effect_param: self.u8(field)?,
        })
    }

    fn cells(&mut self, field: &str) -> Result<Vec<UgeCell>, UgeFormatError> {
        let mut rows = Vec::with_capacity(UGE_PATTERN_ROWS);
        for _ in 0..UGE_PATTERN_ROWS {
            rows.push(self.cell(field)?);
        }
        Ok(rows)
    }

    fn instrument_block(&mut self, kind: InstrumentKind) -> Result<Vec<Instrument>, UgeFormatError> {
        let mut instruments = Vec::with_capacity(UGE_INSTRUMENTS_PER_KIND);
        for index in 0..UGE_INSTRUMENTS_PER_KIND {
            instruments.push(self.instrument(kind, index)?);
        }
        Ok(instruments)
    }

    fn instrument(&mut self, kind: InstrumentKind, index: usize) -> Result<Instrument, UgeFormatError> {
        let label = format!("{} instrument {}", kind.as_str(), index + 1);

        let type_code = self.u32(&label)?;
        if type_code != kind.type_code() {
            return Err(UgeFormatError::InstrumentTypeMismatch {
                number: index + 1,
                expected: kind.as_str(),
                found: type_code,
            });
        }

        let name = self.shortstring(&label)?;
        let length = self.u32(&label)?;
        let length_enabled = self.u8(&label)? != 0;

        Ok(Instrument {
            name,
            length: length_enabled.then_some(length),
            initial_volume: self.u8(&label)?,
            volume_sweep_direction: self.u32(&label)?,
            volume_sweep_amount: self.u8(&label)?,
            freq_sweep_time: self.u32(&label)?,
            freq_sweep_direction: self.u32(&label)?,
            freq_sweep_shift: self.u32(&label)?,
            duty: self.u8(&label)?,
            output_level: self.u32(&label)?,
            waveform: self.u32(&label)?,
            counter_step: self.u32(&label)?,
            subpattern_enabled: self.u8(&label)? != 0,
            subpattern: self.cells(&label)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_input() {
        let err = read_song(&[]).unwrap_err();
        assert_eq!(
            err,
            UgeFormatError::Truncated {
                offset: 0,
                field: "version".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = read_song(&5u32.to_le_bytes()).unwrap_err();
        assert_eq!(
            err,
            UgeFormatError::UnsupportedVersion {
                version: 5,
                expected: UGE_VERSION
            }
        );
    }

    #[test]
    fn test_text_is_not_a_song() {
        let err = read_song(b"this is definitely not a song").unwrap_err();
        assert_eq!(err.code(), "UGE_001");
    }

    #[test]
    fn test_truncated_header_reports_field() {
        let mut data = UGE_VERSION.to_le_bytes().to_vec();
        data.push(4);
        data.extend_from_slice(b"Song");
        let err = read_song(&data).unwrap_err();
        match err {
            UgeFormatError::Truncated { offset, field } => {
                assert_eq!(offset, 5);
                assert_eq!(field, "song name");
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_latin1_decoding() {
        assert_eq!(latin1_to_string(&[0x43, 0x61, 0x66, 0xE9]), "Café");
    }
}
