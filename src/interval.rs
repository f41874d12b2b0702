//! Single-byte interval codec for intervalometer programs.
//!
//! Exposure delays are stored as one byte each. Code 0 is zero seconds and
//! codes 1-255 follow three geometric tiers whose ratio widens with the
//! duration, so the relative round-trip error grows with magnitude.
//!
//! | codes      | seconds          | ratio per code | relative error |
//! |------------|------------------|----------------|----------------|
//! | 0          | 0                | -              | -              |
//! | 1..=117    | 0.1 - 1          | 10^(1/116)     | < 1.0 %        |
//! | 118..=187  | 1.06 - 60        | 60^(1/70)      | < 3.0 %        |
//! | 188..=255  | 66 - 39 161      | 1.1            | < 4.9 %        |
//!
//! Durations below [`MIN_SECS`] round to code 0 or code 1 with an absolute
//! error of at most `MIN_SECS / 2`.

use serde::{Deserialize, Serialize};

/// Shortest non-zero interval in seconds (code 1).
pub const MIN_SECS: f32 = 0.1;

/// Longest representable interval in seconds (code 255, about 10.9 hours).
pub const MAX_SECS: f32 = 39_161.006;

/// A run of codes spaced geometrically from `start` to `end` seconds.
#[derive(Debug, Clone, Copy)]
struct Tier {
    first_code: u8,
    last_code: u8,
    start: f32,
    end: f32,
}

impl Tier {
    fn steps(&self) -> f32 {
        (self.last_code - self.first_code) as f32
    }

    fn secs(&self, code: u8) -> f32 {
        let fraction = (code - self.first_code) as f32 / self.steps();
        self.start * libm::powf(self.end / self.start, fraction)
    }

    fn code(&self, secs: f32) -> f32 {
        let position = libm::logf(secs / self.start) / libm::logf(self.end / self.start);
        self.first_code as f32 + libm::roundf(position * self.steps())
    }

    /// Worst-case relative error: half a step in log space, `sqrt(ratio) - 1`.
    fn relative_error(&self) -> f32 {
        let ratio = libm::powf(self.end / self.start, 1.0 / self.steps());
        libm::sqrtf(ratio) - 1.0
    }
}

static TIERS: [Tier; 3] = [
    Tier {
        first_code: 1,
        last_code: 117,
        start: MIN_SECS,
        end: 1.0,
    },
    Tier {
        first_code: 117,
        last_code: 187,
        start: 1.0,
        end: 60.0,
    },
    Tier {
        first_code: 187,
        last_code: 255,
        start: 60.0,
        end: MAX_SECS,
    },
];

/// Tier whose range holds `secs`; durations past the last tier use it.
fn tier_for_secs(secs: f32) -> &'static Tier {
    TIERS.iter().find(|tier| secs <= tier.end).unwrap_or(&TIERS[TIERS.len() - 1])
}

/// Encode a duration in seconds as a single byte.
///
/// Monotonically non-decreasing. Values at or below zero, and NaN, map to
/// code 0; values at or above [`MAX_SECS`] map to code 255.
pub fn time_to_byte(secs: f32) -> u8 {
    if secs.is_nan() || secs <= 0.0 {
        #[cfg(feature = "defmt")]
        defmt::debug!("interval {} s clamped to code 0", secs);
        return 0;
    }
    if secs < MIN_SECS {
        return u8::from(secs * 2.0 >= MIN_SECS);
    }

    let code = tier_for_secs(secs).code(secs);
    if code >= 255.0 {
        #[cfg(feature = "defmt")]
        defmt::debug!("interval {} s clamped to code 255", secs);
        255
    } else {
        code as u8
    }
}

/// Decode a single-byte interval back to seconds.
///
/// Strictly increasing over all 256 codes.
pub fn byte_to_time(code: u8) -> f32 {
    if code == 0 {
        return 0.0;
    }
    TIERS
        .iter()
        .find(|tier| code <= tier.last_code)
        .unwrap_or(&TIERS[TIERS.len() - 1])
        .secs(code)
}

/// Worst-case relative round-trip error for a duration in
/// `[MIN_SECS, MAX_SECS]`.
///
/// Non-decreasing in `secs`: below 1 % up to one second, then below 3 % up
/// to a minute, then below 4.9 %.
pub fn relative_error(secs: f32) -> f32 {
    tier_for_secs(secs).relative_error()
}

/// Maximum absolute round-trip error for a duration in `[0, MAX_SECS]`.
///
/// `byte_to_time(time_to_byte(t))` lies within `resolution(t)` of `t`.
/// Below [`MIN_SECS`] this is `MIN_SECS / 2`, above it `t * relative_error(t)`.
pub fn resolution(secs: f32) -> f32 {
    if secs < MIN_SECS {
        MIN_SECS / 2.0
    } else {
        secs * relative_error(secs)
    }
}

/// An intervalometer delay in its persisted single-byte form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct CompactInterval(pub u8);

impl CompactInterval {
    /// Shortest interval (code 0, zero seconds).
    pub const MIN: Self = Self(0);
    /// Longest interval (code 255, [`MAX_SECS`]).
    pub const MAX: Self = Self(255);

    /// Encode a duration in seconds, clamping to the representable range.
    #[inline]
    pub fn from_secs(secs: f32) -> Self {
        Self(time_to_byte(secs))
    }

    /// Decoded duration in seconds.
    #[inline]
    pub fn as_secs(self) -> f32 {
        byte_to_time(self.0)
    }

    /// Raw stored byte.
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl From<u8> for CompactInterval {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<CompactInterval> for u8 {
    fn from(interval: CompactInterval) -> Self {
        interval.0
    }
}
