//! SMPTE-style timecodes at 29.97 frames per second

use crate::constants::{FRAME_DURATION_MS, FRAME_TOLERANCE, MAX_FRAME};
use core::fmt;
use serde::{Deserialize, Serialize};

/// A presentation time split into hour, minute, second and fractional frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timecode {
    /// Whole hours
    pub hour: u32,

    /// Minutes within the hour
    pub minute: u32,

    /// Seconds within the minute
    pub second: u32,

    /// Frame within the second, unrounded
    pub frame: f32,

    /// Absolute time in milliseconds this timecode was derived from
    pub millis: i64,
}

impl Timecode {
    /// Start of the stream
    pub const ZERO: Timecode = Timecode {
        hour: 0,
        minute: 0,
        second: 0,
        frame: 0.0,
        millis: 0,
    };

    /// Convert a millisecond time; negative times saturate at zero
    pub fn from_millis(millis: i64) -> Self {
        let millis = millis.max(0);
        let seconds = millis / 1000;

        Self {
            hour: (seconds / 3600) as u32,
            minute: ((seconds / 60) % 60) as u32,
            second: (seconds % 60) as u32,
            frame: ((millis % 1000) as f64 / FRAME_DURATION_MS) as f32,
            millis,
        }
    }

    /// Same second and less than three frames apart
    ///
    /// Absorbs the rounding between a caption's declared start and the
    /// previous caption's declared end.
    pub fn approx_eq(&self, other: &Timecode) -> bool {
        let diff = self.frame - other.frame;
        self.hour == other.hour
            && self.minute == other.minute
            && self.second == other.second
            && diff < FRAME_TOLERANCE
            && diff > -FRAME_TOLERANCE
    }

    /// Timecode shifted by a whole number of frames
    pub fn offset_frames(&self, frames: i64) -> Self {
        Self::from_millis(self.millis.saturating_add(frames_to_millis(frames)))
    }

    /// Frame number as written, rounded and capped at the last frame of a second
    pub fn display_frame(&self) -> u32 {
        ((self.frame + 0.5) as u32).min(MAX_FRAME)
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hour,
            self.minute,
            self.second,
            self.display_frame()
        )
    }
}

/// Duration of `frames` frames in whole milliseconds (truncated)
pub fn frames_to_millis(frames: i64) -> i64 {
    (frames as f64 * FRAME_DURATION_MS) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_from_millis() {
        let tc = Timecode::from_millis(3_723_500);
        assert_eq!((tc.hour, tc.minute, tc.second), (1, 2, 3));
        assert!((tc.frame - 14.985).abs() < 0.01);
        assert_eq!(tc.millis, 3_723_500);
        assert_eq!(tc.to_string(), "01:02:03:15");
    }

    #[test]
    fn test_negative_saturates() {
        assert_eq!(Timecode::from_millis(-500), Timecode::ZERO);
    }

    #[test]
    fn test_offset_saturates_at_extremes() {
        let late = Timecode::from_millis(i64::MAX);
        assert_eq!(late.offset_frames(1).millis, i64::MAX);
        assert_eq!(Timecode::ZERO.offset_frames(i64::MIN), Timecode::ZERO);
    }

    #[test]
    fn test_display_frame_capped() {
        let tc = Timecode::from_millis(999);
        assert!(tc.frame > 29.5);
        assert_eq!(tc.to_string(), "00:00:00:29");
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = Timecode::from_millis(5000);
        assert!(a.approx_eq(&Timecode::from_millis(5066)));
        assert!(!a.approx_eq(&Timecode::from_millis(5120)));
        // Different seconds never compare equal
        assert!(!a.approx_eq(&Timecode::from_millis(4999)));
        assert!(!a.approx_eq(&Timecode::from_millis(7000)));
    }

    #[test]
    fn test_offset_frames() {
        let show = Timecode::from_millis(5000).offset_frames(-1);
        assert_eq!(show.millis, 4967);
        assert_eq!(show.to_string(), "00:00:04:29");

        let next = Timecode::from_millis(5000).offset_frames(1);
        assert_eq!(next.to_string(), "00:00:05:01");
    }

    #[test]
    fn test_frames_to_millis() {
        assert_eq!(frames_to_millis(0), 0);
        assert_eq!(frames_to_millis(30), 1001);
        assert_eq!(frames_to_millis(-1), -33);
    }
}
