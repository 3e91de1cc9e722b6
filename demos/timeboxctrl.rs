//! Drive a Timebox through an RFCOMM-to-TCP bridge.
//!
//! ```text
//! cargo run --example timeboxctrl -- <host:port> <clock|temperature|scoreboard|solid|off> [weather]
//! ```
//!
//! Any bridge that forwards a TCP connection to RFCOMM channel
//! `timebox::RFCOMM_CHANNEL` of the device will do.

use std::net::TcpStream;

use timebox::{ClockFormat, Colour, Session, TemperatureUnit, WeatherCondition};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(addr), Some(view)) = (args.next(), args.next()) else {
        eprintln!("usage: timeboxctrl <host:port> <view> [weather]");
        std::process::exit(2);
    };
    let weather = args
        .next()
        .map(|raw| raw.parse::<u8>())
        .transpose()?
        .map_or(WeatherCondition::SUN, WeatherCondition::from);

    let stream = TcpStream::connect(&addr)?;
    info!(%addr, "connected");

    let mut session = Session::new(stream);
    session.initialize()?;

    session.set_colour(Colour::new(0, 255, 66));
    session.set_brightness(100)?;
    session.set_time_now()?;
    session.set_temperature_and_weather(37, weather)?;

    match view.to_ascii_lowercase().as_str() {
        "clock" => session.display_clock(ClockFormat::TwentyFourHour)?,
        "temperature" => session.display_temperature(TemperatureUnit::Celsius)?,
        "scoreboard" => session.display_scoreboard(10, 20)?,
        "solid" => session.display_solid()?,
        "off" => session.set_brightness(0)?,
        other => error!(view = other, "view not supported"),
    }

    Ok(())
}
