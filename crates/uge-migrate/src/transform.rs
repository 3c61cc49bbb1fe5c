//! Wave instrument length remapping.
//!
//! GB Studio 3.2.1 and earlier stored wave instrument lengths as `256 - n`
//! relative to what hUGETracker expects. Reflecting every set length with
//! `f(x) = 256 - x` converts a song from one convention to the other.
//!
//! `f` is its own inverse on `[0, 256]` but it is not idempotent, and a length
//! of `0` maps to `256`, which is outside the `[0, 255]` range the field is
//! documented to hold. That result is kept as is and counted in
//! [`MigrationSummary::out_of_range`].

use serde::Serialize;
use tracing::warn;
use uge_format::UgeSong;

/// The reflection pivot.
pub const LENGTH_PIVOT: u32 = 256;

/// Largest length the field is documented to hold.
pub const MAX_WAVE_LENGTH: u32 = 255;

/// What a migration changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    /// Lengths that were remapped.
    pub rewritten: usize,
    /// Instruments without a length, passed through.
    pub unset: usize,
    /// Remapped lengths that ended up above [`MAX_WAVE_LENGTH`].
    pub out_of_range: usize,
    /// Lengths above [`LENGTH_PIVOT`], left untouched.
    pub out_of_domain: usize,
}

/// Remap every wave instrument length in `song`.
pub fn migrate(song: UgeSong) -> UgeSong {
    migrate_with_summary(song).0
}

/// Remap every wave instrument length in `song` and report what changed.
pub fn migrate_with_summary(mut song: UgeSong) -> (UgeSong, MigrationSummary) {
    let mut summary = MigrationSummary::default();

    for (index, instrument) in song.wave_instruments.iter_mut().enumerate() {
        let Some(length) = instrument.length else {
            summary.unset += 1;
            continue;
        };

        match LENGTH_PIVOT.checked_sub(length) {
            Some(remapped) => {
                if remapped > MAX_WAVE_LENGTH {
                    warn!(
                        instrument = index + 1,
                        length, remapped, "wave length remapped outside 0-255"
                    );
                    summary.out_of_range += 1;
                }
                instrument.length = Some(remapped);
                summary.rewritten += 1;
            }
            None => {
                warn!(instrument = index + 1, length, "wave length above 256 left unchanged");
                summary.out_of_domain += 1;
            }
        }
    }

    (song, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uge_format::Instrument;

    fn song_with_wave_lengths(lengths: &[Option<u32>]) -> UgeSong {
        let mut song = UgeSong::new("Lengths");
        for (instrument, &length) in song.wave_instruments.iter_mut().zip(lengths) {
            instrument.length = length;
        }
        song
    }

    fn wave_lengths(song: &UgeSong) -> Vec<Option<u32>> {
        song.wave_instruments.iter().map(|i| i.length).collect()
    }

    #[test]
    fn test_reflects_present_lengths() {
        let song = song_with_wave_lengths(&[Some(1), Some(10), Some(128), Some(255)]);
        let migrated = migrate(song);
        assert_eq!(
            &wave_lengths(&migrated)[..4],
            &[Some(255), Some(246), Some(128), Some(1)]
        );
    }

    #[test]
    fn test_zero_becomes_256() {
        let (migrated, summary) = migrate_with_summary(song_with_wave_lengths(&[Some(0)]));
        assert_eq!(migrated.wave_instruments[0].length, Some(256));
        assert_eq!(summary.out_of_range, 1);
        assert_eq!(summary.rewritten, 1);
    }

    #[test]
    fn test_unset_passes_through() {
        let (migrated, summary) = migrate_with_summary(UgeSong::default());
        assert!(migrated.wave_instruments.iter().all(|i| i.length.is_none()));
        assert_eq!(summary.unset, 15);
        assert_eq!(summary.rewritten, 0);
    }

    #[test]
    fn test_only_wave_lengths_change() {
        let mut song = song_with_wave_lengths(&[Some(10)]);
        song.duty_instruments[0].length = Some(10);
        song.noise_instruments[0].length = Some(10);
        song.wave_instruments[0].output_level = 2;

        let migrated = migrate(song.clone());

        let mut expected = song;
        expected.wave_instruments[0].length = Some(246);
        assert_eq!(migrated, expected);
    }

    #[test]
    fn test_empty_wave_collection() {
        let mut song = UgeSong::new("No waves");
        song.wave_instruments.clear();
        let migrated = migrate(song.clone());
        assert_eq!(migrated, song);
    }

    #[test]
    fn test_twice_restores_inner_domain() {
        let song = song_with_wave_lengths(&[Some(1), Some(64), Some(200), Some(255), None]);
        assert_eq!(migrate(migrate(song.clone())), song);
    }

    #[test]
    fn test_not_idempotent() {
        let song = song_with_wave_lengths(&[Some(10)]);
        let once = migrate(song);
        let twice = migrate(once.clone());
        assert_ne!(once, twice);
        assert_eq!(twice.wave_instruments[0].length, Some(10));
    }

    #[test]
    fn test_zero_round_trip_leaves_range_in_between() {
        let once = migrate(song_with_wave_lengths(&[Some(0)]));
        let length = once.wave_instruments[0].length.unwrap();
        assert!(length > MAX_WAVE_LENGTH, "first pass leaves the valid range");
        assert_eq!(migrate(once).wave_instruments[0].length, Some(0));
    }

    #[test]
    fn test_above_pivot_is_left_alone() {
        let mut song = UgeSong::default();
        song.wave_instruments[0] = Instrument::new("odd").with_length(Some(300));
        let (migrated, summary) = migrate_with_summary(song);
        assert_eq!(migrated.wave_instruments[0].length, Some(300));
        assert_eq!(summary.out_of_domain, 1);
        assert_eq!(summary.rewritten, 0);
    }
}
