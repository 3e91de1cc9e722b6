//! Timebox command catalog: opcodes, views and argument enumerations

use std::fmt;

/// Top-level command opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Switch the radio on or off
    SwitchRadio = 0x05,
    /// Set speaker volume
    SetVolume = 0x08,
    /// Query speaker volume
    GetVolume = 0x09,
    /// Mute sub-command; sent as the first argument of [`Command::SetView`]
    SetMute = 0x0a,
    /// Query mute state
    GetMute = 0x0b,
    /// Set the device clock
    SetDateTime = 0x18,
    /// Select what the display renders
    SetView = 0x45,
    /// Upload an animation frame
    SetAnimationFrame = 0x49,
    /// Query temperature
    GetTemperature = 0x59,
    /// Set temperature and weather
    SetTemperature = 0x5f,
    /// Query radio frequency
    GetRadioFrequency = 0x60,
    /// Tune the radio
    SetRadioFrequency = 0x61,
    /// Set display brightness
    SetBrightness = 0x74,
}

impl Command {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x05 => Some(Self::SwitchRadio),
            0x08 => Some(Self::SetVolume),
            0x09 => Some(Self::GetVolume),
            0x0a => Some(Self::SetMute),
            0x0b => Some(Self::GetMute),
            0x18 => Some(Self::SetDateTime),
            0x45 => Some(Self::SetView),
            0x49 => Some(Self::SetAnimationFrame),
            0x59 => Some(Self::GetTemperature),
            0x5f => Some(Self::SetTemperature),
            0x60 => Some(Self::GetRadioFrequency),
            0x61 => Some(Self::SetRadioFrequency),
            0x74 => Some(Self::SetBrightness),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if this command only reads device state
    #[must_use]
    pub const fn is_query(self) -> bool {
        matches!(
            self,
            Self::GetVolume | Self::GetMute | Self::GetTemperature | Self::GetRadioFrequency
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SwitchRadio => "SwitchRadio",
            Self::SetVolume => "SetVolume",
            Self::GetVolume => "GetVolume",
            Self::SetMute => "SetMute",
            Self::GetMute => "GetMute",
            Self::SetDateTime => "SetDateTime",
            Self::SetView => "SetView",
            Self::SetAnimationFrame => "SetAnimationFrame",
            Self::GetTemperature => "GetTemperature",
            Self::SetTemperature => "SetTemperature",
            Self::GetRadioFrequency => "GetRadioFrequency",
            Self::SetRadioFrequency => "SetRadioFrequency",
            Self::SetBrightness => "SetBrightness",
        };
        write!(f, "{name}")
    }
}

/// Display views selected with [`Command::SetView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum View {
    /// Clock face
    Clock = 0x00,
    /// Temperature and weather
    Temperature = 0x01,
    /// Every pixel lit in one colour
    Solid = 0x02,
    /// Animation playback
    Animation = 0x03,
    /// Graph
    Graph = 0x04,
    /// Static image
    Image = 0x05,
    /// Stopwatch
    Stopwatch = 0x06,
    /// Two-team scoreboard
    Scoreboard = 0x07,
}

impl View {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Clock),
            0x01 => Some(Self::Temperature),
            0x02 => Some(Self::Solid),
            0x03 => Some(Self::Animation),
            0x04 => Some(Self::Graph),
            0x05 => Some(Self::Image),
            0x06 => Some(Self::Stopwatch),
            0x07 => Some(Self::Scoreboard),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clock => "Clock",
            Self::Temperature => "Temperature",
            Self::Solid => "Solid",
            Self::Animation => "Animation",
            Self::Graph => "Graph",
            Self::Image => "Image",
            Self::Stopwatch => "Stopwatch",
            Self::Scoreboard => "Scoreboard",
        };
        write!(f, "{name}")
    }
}

/// Weather icon shown next to the temperature
///
/// Any byte is accepted; the named constants are the conditions the device
/// is known to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherCondition(u8);

impl WeatherCondition {
    /// Clear sky
    pub const SUN: Self = Self(1);
    /// Sun with some cloud
    pub const SUN_AND_CLOUD: Self = Self(2);
    /// Partially cloudy
    pub const PARTIALLY_CLOUDY: Self = Self(3);
    /// Overcast
    pub const CLOUDY: Self = Self(4);
    /// Rain
    pub const RAIN: Self = Self(5);
    /// Rain with sun
    pub const RAIN_AND_SUN: Self = Self(6);
    /// Thunderstorm
    pub const RAIN_AND_LIGHTNING: Self = Self(7);
    /// Snow
    pub const SNOW: Self = Self(8);
    /// Fog
    pub const FOG: Self = Self(9);
    /// Clear night
    pub const DARK_CLEAR: Self = Self(10);
    /// Partially cloudy night
    pub const DARK_PARTIALLY_CLOUDY: Self = Self(11);
    /// Overcast night
    pub const DARK_CLOUDY: Self = Self(12);
    /// Rain at night
    pub const DARK_RAIN: Self = Self(13);
    /// Rain with sun, night icon
    pub const DARK_RAIN_AND_SUN: Self = Self(14);
    /// Thunderstorm at night
    pub const DARK_RAIN_AND_LIGHTNING: Self = Self(15);
    /// Snow at night
    pub const DARK_SNOW: Self = Self(16);
    /// Fog at night
    pub const DARK_FOG: Self = Self(17);

    /// Create from byte
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Name of a known condition
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            1 => "Sun",
            2 => "SunAndCloud",
            3 => "PartiallyCloudy",
            4 => "Cloudy",
            5 => "Rain",
            6 => "RainAndSun",
            7 => "RainAndLightning",
            8 => "Snow",
            9 => "Fog",
            10 => "DarkClear",
            11 => "DarkPartiallyCloudy",
            12 => "DarkCloudy",
            13 => "DarkRain",
            14 => "DarkRainAndSun",
            15 => "DarkRainAndLightning",
            16 => "DarkSnow",
            17 => "DarkFog",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u8> for WeatherCondition {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "Unknown({:#04x})", self.0),
        }
    }
}

/// Clock face hour format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockFormat {
    /// 12-hour clock
    TwelveHour,
    /// 24-hour clock
    #[default]
    TwentyFourHour,
}

impl ClockFormat {
    /// Mode byte sent with [`View::Clock`]
    #[must_use]
    pub const fn mode_byte(self) -> u8 {
        match self {
            Self::TwelveHour => 0x00,
            Self::TwentyFourHour => 0x01,
        }
    }
}

/// Unit used by the temperature view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Mode byte sent with [`View::Temperature`]
    #[must_use]
    pub const fn mode_byte(self) -> u8 {
        match self {
            Self::Celsius => 0x00,
            Self::Fahrenheit => 0x01,
        }
    }
}
