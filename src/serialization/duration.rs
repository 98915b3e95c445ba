//! ISO 8601 duration values (`P1DT2H30M`)

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::SerializationError;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:[.,](\d+))?S)?)?$",
    )
    .unwrap()
});

/// A duration as carried on the wire
///
/// Years and months are kept as written since they have no fixed length;
/// [`IsoDuration::to_std_duration`] only converts calendar-free values.
/// Fractional seconds are kept to the nanosecond, and the sign of a zero
/// duration is kept so that `-PT0S` writes back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub nanoseconds: u32,
}

impl IsoDuration {
    /// Build a duration from hours, minutes and seconds
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::default()
        }
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }

    /// Convert to a fixed-length duration; `None` for negative values or
    /// when years or months are present
    pub fn to_std_duration(&self) -> Option<std::time::Duration> {
        if self.negative || self.years != 0 || self.months != 0 {
            return None;
        }
        let seconds = u64::from(self.weeks) * 7 * 86_400
            + u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds);
        Some(
            std::time::Duration::from_secs(seconds)
                + std::time::Duration::from_nanos(u64::from(self.nanoseconds)),
        )
    }
}

impl std::str::FromStr for IsoDuration {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = DURATION_REGEX
            .captures(s)
            .ok_or_else(|| SerializationError::invalid("duration", s, "not an ISO 8601 duration"))?;

        // "P" and "PT" alone match the pattern but carry no component
        if (2..=8).all(|i| captures.get(i).is_none()) {
            return Err(SerializationError::invalid(
                "duration",
                s,
                "duration has no components",
            ));
        }
        if s.ends_with('T') {
            return Err(SerializationError::invalid(
                "duration",
                s,
                "time designator without time components",
            ));
        }

        let number = |index: usize| -> Result<u32, SerializationError> {
            match captures.get(index) {
                Some(m) => m
                    .as_str()
                    .parse::<u32>()
                    .map_err(|e| SerializationError::invalid("duration", s, e)),
                None => Ok(0),
            }
        };

        let nanoseconds = match captures.get(9) {
            Some(fraction) if fraction.as_str().len() > 9 => {
                return Err(SerializationError::invalid(
                    "duration",
                    s,
                    "fractional seconds finer than nanoseconds",
                ));
            }
            Some(fraction) => format!("{:0<9}", fraction.as_str())
                .parse::<u32>()
                .map_err(|e| SerializationError::invalid("duration", s, e))?,
            None => 0,
        };

        Ok(Self {
            negative: captures.get(1).is_some(),
            years: number(2)?,
            months: number(3)?,
            weeks: number(4)?,
            days: number(5)?,
            hours: number(6)?,
            minutes: number(7)?,
            seconds: number(8)?,
            nanoseconds,
        })
    }
}

impl std::fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        f.write_str("P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.nanoseconds > 0 {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.nanoseconds > 0 {
                let fraction = format!("{:09}", self.nanoseconds);
                write!(f, "{}.{}S", self.seconds, fraction.trim_end_matches('0'))?;
            } else if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}
