//! Stream writer: the load/show protocol between successive captions
//!
//! Every caption produces up to three timecoded blocks:
//! 1. an erase (EDM) for the previous caption, unless this one starts where
//!    the previous one ended,
//! 2. the load line (RCL + content), timed so it is fully transmitted before
//!    the caption is due,
//! 3. the show line (RCL, EOC, ENM) one frame before the start time.
//!
//! State carried from one caption to the next lives in a [`Session`], which
//! the caller owns and passes to every call for the same stream.

use crate::codec::{LineBuffer, Mode};
use crate::codes::ControlCode;
use crate::constants::SCC_HEADER;
use crate::error::EncodeError;
use crate::timecode::{frames_to_millis, Timecode};
use crate::tracker::compose_screen;
use crate::types::{CaptionScreen, Channel};
use std::io::Write;

#[cfg(feature = "logging")]
use tracing::debug;

/// Encoder state for one output stream
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    last_written: Timecode,
    last_end: Option<Timecode>,
    last_channel: Channel,
    header_channel: Option<Channel>,
    line: LineBuffer,
}

impl Session {
    /// Start a new stream in `mode`
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            last_written: Timecode::ZERO,
            last_end: None,
            last_channel: Channel::default(),
            header_channel: None,
            line: LineBuffer::new(),
        }
    }

    /// Output mode of this stream
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Timecode of the most recent block
    pub fn last_written(&self) -> Timecode {
        self.last_written
    }

    /// End of the previous caption, if any caption was encoded
    pub fn last_end(&self) -> Option<Timecode> {
        self.last_end
    }

    /// Channel of the previous caption
    pub fn last_channel(&self) -> Channel {
        self.last_channel
    }

    fn write_timecode<W: Write>(&mut self, sink: &mut W, tc: Timecode) -> Result<(), EncodeError> {
        sink.write_all(self.mode.block_separator().as_bytes())?;
        write!(sink, "{}\t", tc)?;
        self.last_written = tc;
        Ok(())
    }

    fn write_line<W: Write>(&self, sink: &mut W) -> Result<(), EncodeError> {
        let bytes = self.line.as_bytes();
        // The first word's separator is already covered by the tab
        let bytes = match self.mode {
            Mode::Binary => bytes.strip_prefix(b" ").unwrap_or(bytes),
            Mode::Mnemonic => bytes,
        };
        sink.write_all(bytes)?;
        Ok(())
    }

    /// Erase the previous caption at its end time, or at the last block if that is later
    fn end_last_caption<W: Write>(&mut self, sink: &mut W, end: Timecode) -> Result<(), EncodeError> {
        let at = if end.millis < self.last_written.millis {
            self.last_written
        } else {
            end
        };

        #[cfg(feature = "logging")]
        debug!("Erasing caption on channel {} at {}", self.last_channel.number(), at);

        self.write_timecode(sink, at)?;

        let notation = self.mode.notation();
        self.line.clear();
        self.line
            .push_control_code(notation, self.last_channel, ControlCode::EDM);
        self.write_line(sink)
    }
}

/// Write the stream preamble (`Scenarist_SCC V1.0` in binary mode)
pub fn write_header<W: Write>(sink: &mut W, session: &Session) -> Result<(), EncodeError> {
    if session.mode == Mode::Binary {
        sink.write_all(SCC_HEADER.as_bytes())?;
    }
    Ok(())
}

/// Encode one caption screen and append its blocks to `sink`
pub fn encode_caption<W: Write>(
    sink: &mut W,
    session: &mut Session,
    screen: &CaptionScreen,
) -> Result<(), EncodeError> {
    let channel = screen.channel;
    let notation = session.mode.notation();
    let start = Timecode::from_millis(screen.start_ms);

    // A caption that does not continue the previous one needs it erased first
    if let Some(end) = session.last_end {
        if !end.approx_eq(&start) {
            session.end_last_caption(sink, end)?;
        }
    }

    if session.mode == Mode::Mnemonic && session.header_channel != Some(channel) {
        if session.header_channel.is_some() {
            sink.write_all(b"\n")?;
        }
        writeln!(sink, "CHANNEL {}", channel.number())?;
        session.header_channel = Some(channel);
    }

    session.line.clear();
    session.line.push_control_code(notation, channel, ControlCode::RCL);
    compose_screen(screen, notation, &mut session.line);

    // One word goes out per frame; the whole line must arrive before the start
    let words = session.line.words();
    let transmit_ms = frames_to_millis(words as i64);
    let mut load = Timecode::from_millis(screen.start_ms.saturating_sub(transmit_ms));
    if session.last_written.millis > load.millis {
        let clamped = match session.last_end {
            Some(end) => end.offset_frames(1),
            None => session.last_written,
        };
        load = if clamped.millis < session.last_written.millis {
            session.last_written
        } else {
            clamped
        };

        #[cfg(feature = "logging")]
        debug!("Load line would go back in time, clamped to {}", load);
    }

    session.write_timecode(sink, load)?;
    session.write_line(sink)?;

    // EOC lands on the target frame when the block starts one frame early
    let mut show = start.offset_frames(-1);
    if show.millis < load.millis {
        show = load;
    }
    session.write_timecode(sink, show)?;
    session.line.clear();
    for code in [ControlCode::RCL, ControlCode::EOC, ControlCode::ENM] {
        session.line.push_control_code(notation, channel, code);
    }
    session.write_line(sink)?;

    #[cfg(feature = "logging")]
    debug!(
        "Encoded caption on channel {}: load {}, show {}, {} words",
        channel.number(),
        load,
        show,
        words
    );

    session.last_end = Some(Timecode::from_millis(screen.end_ms));
    session.last_channel = channel;

    Ok(())
}

/// Flush the erase of the final caption; writes nothing if no caption was encoded
pub fn write_footer<W: Write>(sink: &mut W, session: &mut Session) -> Result<(), EncodeError> {
    if let Some(end) = session.last_end.take() {
        session.end_last_caption(sink, end)?;
    }
    Ok(())
}
