//! UGE file writer - encodes a [`UgeSong`] into the v6 binary layout.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use super::error::UgeWriteError;
use super::instrument::{Instrument, InstrumentKind, UgeCell, UGE_INSTRUMENTS_PER_KIND, UGE_PATTERN_ROWS};
use super::song::{
    UgeSong, UGE_ROUTINE_COUNT, UGE_SHORTSTRING_MAX_LEN, UGE_SHORTSTRING_SIZE, UGE_WAVE_COUNT,
};

impl UgeSong {
    /// Check the fixed-size collections before anything is written.
    pub fn validate_layout(&self) -> Result<(), UgeWriteError> {
        for kind in InstrumentKind::ALL {
            let instruments = self.instruments(kind);
            check_count(
                &format!("{} instruments", kind.as_str()),
                UGE_INSTRUMENTS_PER_KIND,
                instruments.len(),
            )?;
            for (index, instrument) in instruments.iter().enumerate() {
                check_count(
                    &format!("subpattern rows in {} instrument {}", kind.as_str(), index + 1),
                    UGE_PATTERN_ROWS,
                    instrument.subpattern.len(),
                )?;
            }
        }
        check_count("waves", UGE_WAVE_COUNT, self.waves.len())?;
        for pattern in &self.patterns {
            check_count(
                &format!("rows in pattern {}", pattern.index),
                UGE_PATTERN_ROWS,
                pattern.rows.len(),
            )?;
        }
        check_count("routines", UGE_ROUTINE_COUNT, self.routines.len())?;
        Ok(())
    }

    /// Write the complete song to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), UgeWriteError> {
        self.validate_layout()?;

        writer.write_u32::<LittleEndian>(self.version)?;
        write_shortstring(writer, &self.name, "song name")?;
        write_shortstring(writer, &self.artist, "artist")?;
        write_shortstring(writer, &self.comment, "comment")?;

        for kind in InstrumentKind::ALL {
            for (index, instrument) in self.instruments(kind).iter().enumerate() {
                write_instrument(writer, kind, index, instrument)?;
            }
        }

        for wave in &self.waves {
            writer.write_all(wave)?;
        }

        writer.write_u32::<LittleEndian>(self.ticks_per_row)?;
        writer.write_u8(self.timer_enabled as u8)?;
        writer.write_u32::<LittleEndian>(self.timer_divider)?;

        writer.write_u32::<LittleEndian>(len_u32(self.patterns.len(), "patterns")?)?;
        for pattern in &self.patterns {
            writer.write_u32::<LittleEndian>(pattern.index)?;
            write_cells(writer, &pattern.rows)?;
        }

        for (channel, order) in self.orders.iter().enumerate() {
            let field = format!("order list {}", channel + 1);
            writer.write_u32::<LittleEndian>(len_u32(order.len(), &field)?)?;
            for &entry in order {
                writer.write_u32::<LittleEndian>(entry)?;
            }
        }

        for (index, routine) in self.routines.iter().enumerate() {
            let field = format!("routine {}", index);
            let bytes = string_to_latin1(routine, &field)?;
            writer.write_u32::<LittleEndian>(len_u32(bytes.len(), &field)?)?;
            writer.write_all(&bytes)?;
        }

        Ok(())
    }

    /// Write the song to a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>, UgeWriteError> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}

fn check_count(field: &str, expected: usize, found: usize) -> Result<(), UgeWriteError> {
    if expected != found {
        return Err(UgeWriteError::WrongCount {
            field: field.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

fn len_u32(len: usize, field: &str) -> Result<u32, UgeWriteError> {
    u32::try_from(len).map_err(|_| UgeWriteError::TooLarge {
        field: field.to_string(),
        len,
    })
}

fn string_to_latin1(value: &str, field: &str) -> Result<Vec<u8>, UgeWriteError> {
    value
        .chars()
        .map(|ch| {
            u8::try_from(u32::from(ch)).map_err(|_| UgeWriteError::UnencodableChar {
                field: field.to_string(),
                ch,
            })
        })
        .collect()
}

fn write_shortstring<W: Write>(writer: &mut W, value: &str, field: &str) -> Result<(), UgeWriteError> {
    let bytes = string_to_latin1(value, field)?;
    if bytes.len() > UGE_SHORTSTRING_MAX_LEN {
        return Err(UgeWriteError::StringTooLong {
            field: field.to_string(),
            len: bytes.len(),
        });
    }

    // Length byte, then the characters null-padded to 255 bytes
    let mut buf = [0u8; UGE_SHORTSTRING_SIZE];
    buf[0] = bytes.len() as u8;
    buf[1..=bytes.len()].copy_from_slice(&bytes);
    writer.write_all(&buf)?;
    Ok(())
}

fn write_cells<W: Write>(writer: &mut W, cells: &[UgeCell]) -> Result<(), UgeWriteError> {
    for cell in cells {
        writer.write_u32::<LittleEndian>(cell.note)?;
        writer.write_u32::<LittleEndian>(cell.instrument)?;
        writer.write_u32::<LittleEndian>(cell.volume)?;
        writer.write_u32::<LittleEndian>(cell.effect_code)?;
        writer.write_u8(cell.effect_param)?;
    }
    Ok(())
}

fn write_instrument<W: Write>(
    writer: &mut W,
    kind: InstrumentKind,
    index: usize,
    instrument: &Instrument,
) -> Result<(), UgeWriteError> {
    writer.write_u32::<LittleEndian>(kind.type_code())?;
    write_shortstring(
        writer,
        &instrument.name,
        &format!("name of {} instrument {}", kind.as_str(), index + 1),
    )?;

    // An unset length is stored as zero with the enable flag cleared
    writer.write_u32::<LittleEndian>(instrument.length.unwrap_or(0))?;
    writer.write_u8(instrument.length.is_some() as u8)?;

    writer.write_u8(instrument.initial_volume)?;
    writer.write_u32::<LittleEndian>(instrument.volume_sweep_direction)?;
    writer.write_u8(instrument.volume_sweep_amount)?;
    writer.write_u32::<LittleEndian>(instrument.freq_sweep_time)?;
    writer.write_u32::<LittleEndian>(instrument.freq_sweep_direction)?;
    writer.write_u32::<LittleEndian>(instrument.freq_sweep_shift)?;
    writer.write_u8(instrument.duty)?;
    writer.write_u32::<LittleEndian>(instrument.output_level)?;
    writer.write_u32::<LittleEndian>(instrument.waveform)?;
    writer.write_u32::<LittleEndian>(instrument.counter_step)?;
    writer.write_u8(instrument.subpattern_enabled as u8)?;
    write_cells(writer, &instrument.subpattern)?;
    Ok(())
}
