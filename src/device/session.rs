//! Control session with one Timebox device over an established byte stream.

use std::io::{Read, Write};

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use tracing::{debug, instrument, trace, warn};

use crate::protocol::{
    ClockFormat, Command, Error, HELLO_SIGNATURE, Message, Result, TemperatureUnit, View,
    WeatherCondition,
};

use super::{Colour, SessionConfig};

/// Highest value accepted for brightness and volume percentages
pub const MAX_PERCENT: u8 = 100;

/// Scores are clamped into `0..=MAX_SCORE`
pub const MAX_SCORE: i32 = 999;

/// Volume steps understood by the device
const VOLUME_DIVISOR: u8 = 16;

/// A conversation with one device.
///
/// The transport is any blocking byte stream, typically an RFCOMM socket.
/// The session holds the display colour applied to colour-capable views; it
/// performs no retries and has no internal locking.
#[derive(Debug)]
pub struct Session<T> {
    transport: T,
    config: SessionConfig,
    colour: Option<Colour>,
}

impl<T: Read + Write> Session<T> {
    /// Create a session over an established transport with default settings.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            colour: config.initial_colour,
            config,
        }
    }

    /// Confirm the peer is a Timebox by checking its hello response.
    #[instrument(level = "debug", skip(self))]
    pub fn initialize(&mut self) -> Result<()> {
        let mut response = vec![0u8; self.config.read_buffer_len()];
        let len = self.transport.read(&mut response).inspect_err(|err| {
            debug!(error = ?err, "failed to read hello response");
        })?;
        let response = &response[..len];

        if len < HELLO_SIGNATURE.len() {
            debug!(len, "hello response too short");
            return Err(Error::HandshakeMismatch {
                reason: "response shorter than hello signature",
            });
        }
        if response[..HELLO_SIGNATURE.len()] != HELLO_SIGNATURE {
            debug!(response = ?response, "unexpected hello response");
            return Err(Error::HandshakeMismatch {
                reason: "response does not match hello signature",
            });
        }

        debug!("device handshake complete");
        Ok(())
    }

    /// Colour currently applied to view commands.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    /// Set the colour used by subsequent view commands.
    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = Some(colour);
    }

    /// Stop appending a colour to view commands.
    pub fn clear_colour(&mut self) {
        self.colour = None;
    }

    /// Set the device clock.
    ///
    /// The year goes out as two bytes, so years outside `0..=65535` are
    /// rejected with [`Error::ArgumentOutOfRange`].
    #[instrument(level = "debug", skip(self))]
    pub fn set_time(&mut self, time: &NaiveDateTime) -> Result<()> {
        let year = time.year();
        let [year_hi, year_lo] = u16::try_from(year)
            .map_err(|_| Error::out_of_range("year", year.into(), 0, u16::MAX.into()))?
            .to_be_bytes();
        #[allow(clippy::cast_possible_truncation)]
        let args = [
            year_hi,
            year_lo,
            time.month() as u8,
            time.day() as u8,
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            0,
        ];
        self.send_command(Command::SetDateTime, &args)
    }

    /// Set the device clock from the local wall clock.
    pub fn set_time_now(&mut self) -> Result<()> {
        self.set_time(&Local::now().naive_local())
    }

    /// Set the temperature (`-128..=127`) and weather icon.
    #[instrument(level = "debug", skip(self))]
    pub fn set_temperature_and_weather(
        &mut self,
        temperature: i32,
        weather: WeatherCondition,
    ) -> Result<()> {
        let temperature = i8::try_from(temperature).map_err(|_| {
            Error::out_of_range(
                "temperature",
                temperature.into(),
                i8::MIN.into(),
                i8::MAX.into(),
            )
        })?;
        // Negative values go out as value + 256.
        #[allow(clippy::cast_sign_loss)]
        let args = [temperature as u8, weather.as_u8()];
        self.send_command(Command::SetTemperature, &args)
    }

    /// Set display brightness as a percentage.
    #[instrument(level = "debug", skip(self))]
    pub fn set_brightness(&mut self, level: u8) -> Result<()> {
        check_percent("brightness", level)?;
        self.send_command(Command::SetBrightness, &[level])
    }

    /// Set speaker volume as a percentage.
    #[instrument(level = "debug", skip(self))]
    pub fn set_volume(&mut self, level: u8) -> Result<()> {
        check_percent("volume", level)?;
        self.send_command(Command::SetVolume, &[level / VOLUME_DIVISOR])
    }

    /// Mute or unmute the speaker.
    ///
    /// The device expects mute nested under the set-view command, with the
    /// mute opcode as the first argument.
    #[instrument(level = "debug", skip(self))]
    pub fn set_mute(&mut self, muted: bool) -> Result<()> {
        let state = if muted { 0x00 } else { 0x01 };
        self.send_command(Command::SetView, &[Command::SetMute.as_u8(), state])
    }

    /// Show the clock.
    #[instrument(level = "debug", skip(self))]
    pub fn display_clock(&mut self, format: ClockFormat) -> Result<()> {
        let args = self.coloured_view_args(View::Clock, Some(format.mode_byte()));
        self.send_command(Command::SetView, &args)
    }

    /// Show the temperature and weather.
    #[instrument(level = "debug", skip(self))]
    pub fn display_temperature(&mut self, unit: TemperatureUnit) -> Result<()> {
        let args = self.coloured_view_args(View::Temperature, Some(unit.mode_byte()));
        self.send_command(Command::SetView, &args)
    }

    /// Light the whole display in the session colour.
    #[instrument(level = "debug", skip(self))]
    pub fn display_solid(&mut self) -> Result<()> {
        let args = self.coloured_view_args(View::Solid, None);
        self.send_command(Command::SetView, &args)
    }

    /// Show a scoreboard. Scores are clamped to `0..=999`.
    #[instrument(level = "debug", skip(self))]
    pub fn display_scoreboard(&mut self, red: i32, blue: i32) -> Result<()> {
        let mut args = vec![View::Scoreboard.as_u8(), 0x00];
        args.extend_from_slice(&score_bytes(red));
        args.extend_from_slice(&score_bytes(blue));
        self.send_command(Command::SetView, &args)
    }

    /// Show any view with caller-supplied arguments.
    #[instrument(level = "debug", skip(self))]
    pub fn display_view(&mut self, view: u8, args: &[u8]) -> Result<()> {
        let mut view_args = Vec::with_capacity(1 + args.len());
        view_args.push(view);
        view_args.extend_from_slice(args);
        self.send_command(Command::SetView, &view_args)
    }

    /// Send a cataloged command with caller-built arguments.
    pub fn send_command(&mut self, command: Command, args: &[u8]) -> Result<()> {
        trace!(%command, args = ?args, "building command");
        self.send_message(&Message::command(command, args))
    }

    /// Frame a message and write it to the transport.
    #[instrument(level = "trace", skip(self, message))]
    pub fn send_message(&mut self, message: &Message) -> Result<()> {
        let frame = message.encode();
        trace!(frame = ?frame, "sending frame");

        let written = self.transport.write(&frame).inspect_err(|err| {
            debug!(error = ?err, "failed to send frame");
        })?;
        if written != frame.len() {
            warn!(written, expected = frame.len(), "partial frame write");
            return Err(Error::PartialTransfer {
                written,
                expected: frame.len(),
            });
        }
        self.transport.flush()?;
        Ok(())
    }

    /// Read one frame from the transport and validate it.
    #[instrument(level = "trace", skip(self))]
    pub fn receive_message(&mut self) -> Result<Message> {
        let mut buffer = vec![0u8; self.config.read_buffer_len()];
        let len = self.transport.read(&mut buffer).inspect_err(|err| {
            debug!(error = ?err, "failed to read frame");
        })?;
        let frame = &buffer[..len];
        trace!(frame = ?frame, "received frame");

        let message = Message::decode(frame).inspect_err(|err| {
            debug!(error = %err, "discarding invalid frame");
        })?;
        if let Some(command) = message.command_kind().filter(|command| command.is_query()) {
            debug!(%command, args = ?message.args(), "query reply");
        }
        Ok(message)
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Borrow the underlying transport.
    #[must_use]
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear down the session and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    fn coloured_view_args(&self, view: View, mode: Option<u8>) -> Vec<u8> {
        let mut args = Vec::with_capacity(5);
        args.push(view.as_u8());
        args.extend(mode);
        if let Some(colour) = self.colour {
            args.extend_from_slice(&colour.to_bytes());
        }
        args
    }
}

fn check_percent(name: &'static str, level: u8) -> Result<()> {
    if level > MAX_PERCENT {
        return Err(Error::out_of_range(
            name,
            level.into(),
            0,
            MAX_PERCENT.into(),
        ));
    }
    Ok(())
}

fn score_bytes(score: i32) -> [u8; 2] {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = score.clamp(0, MAX_SCORE) as u16;
    score.to_le_bytes()
}
