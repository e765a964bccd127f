use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use exn::{OptionExt, ResultExt};

use crate::consts;
use crate::error::{Error, ErrorKind};

const HUNDREDTHS_PER_SECOND: u32 = 100;
const HUNDREDTHS_PER_MINUTE: u32 = 60 * HUNDREDTHS_PER_SECOND;

/// A recorded swim time, held at the fixed precision of hundredths of a second.
///
/// Accepts the usual results-sheet notations (`30.2`, `58.07`, `1:02.34`,
/// `10:23.4`) and prints them back as `SS.hh` or `M:SS.hh`.
///
/// ```rust
/// use swimr_results::SwimTime;
/// let time: SwimTime = "1:02.3".parse().unwrap();
/// assert_eq!(time.hundredths(), 6230);
/// assert_eq!(time.to_string(), "1:02.30");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SwimTime {
    hundredths: u32,
}
impl SwimTime {
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self { hundredths }
    }

    pub const fn hundredths(&self) -> u32 {
        self.hundredths
    }
}
impl FromStr for SwimTime {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ErrorKind::ParseError {
            field: "time",
            value: s.to_string(),
        };
        let captures = consts::SWIM_TIME_REGEX.captures(s.trim()).ok_or_raise(invalid)?;
        let number = |index: usize| -> Result<u32, Error> {
            captures.get(index).map_or(Ok(0), |m| m.as_str().parse::<u32>().or_raise(invalid))
        };
        let minutes = number(1)?;
        let seconds = if captures.get(2).is_some() {
            let seconds = number(2)?;
            if seconds >= 60 {
                exn::bail!(invalid());
            }
            seconds
        } else {
            number(3)?
        };
        let fraction = match captures.get(4).map(|m| m.as_str()) {
            Some(digits) if digits.len() == 1 => number(4)? * 10,
            Some(_) => number(4)?,
            None => 0,
        };
        minutes
            .checked_mul(HUNDREDTHS_PER_MINUTE)
            .and_then(|total| total.checked_add(seconds.checked_mul(HUNDREDTHS_PER_SECOND)?))
            .and_then(|total| total.checked_add(fraction))
            .map(Self::from_hundredths)
            .ok_or_raise(invalid)
    }
}
impl TryFrom<String> for SwimTime {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl From<SwimTime> for ::time::Duration {
    fn from(time: SwimTime) -> Self {
        ::time::Duration::milliseconds(i64::from(time.hundredths) * 10)
    }
}
impl TryFrom<::time::Duration> for SwimTime {
    type Error = Error;
    /// Anything finer than a hundredth of a second is truncated.
    fn try_from(duration: ::time::Duration) -> Result<Self, Self::Error> {
        let invalid = || ErrorKind::ParseError {
            field: "time",
            value: duration.to_string(),
        };
        if duration.is_negative() {
            exn::bail!(invalid());
        }
        let hundredths = u32::try_from(duration.whole_milliseconds() / 10).or_raise(invalid)?;
        Ok(Self::from_hundredths(hundredths))
    }
}
impl Display for SwimTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let minutes = self.hundredths / HUNDREDTHS_PER_MINUTE;
        let seconds = (self.hundredths % HUNDREDTHS_PER_MINUTE) / HUNDREDTHS_PER_SECOND;
        let fraction = self.hundredths % HUNDREDTHS_PER_SECOND;
        if minutes == 0 {
            write!(f, "{seconds}.{fraction:02}")
        } else {
            write!(f, "{minutes}:{seconds:02}.{fraction:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("30.2", 3020)]
    #[case("30.20", 3020)]
    #[case("58.07", 5807)]
    #[case("28", 2800)]
    #[case("75.5", 7550)]
    #[case("1:02.34", 6234)]
    #[case("10:23.4", 62340)]
    #[case("16:05", 96500)]
    #[case(" 0:59.99 ", 5999)]
    fn parses_results_sheet_notation(#[case] input: &str, #[case] hundredths: u32) {
        assert_eq!(input.parse::<SwimTime>().unwrap().hundredths(), hundredths);
    }

    #[rstest]
    #[case("")]
    #[case("NT")]
    #[case("DQ")]
    #[case("1:60.00")]
    #[case("1:2.34")]
    #[case("30.123")]
    #[case("-30.2")]
    #[case("99999999999:00.00")]
    fn rejects_invalid_times(#[case] input: &str) {
        let err = input.parse::<SwimTime>().unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::ParseError {
                field: "time",
                value: input.to_string()
            }
        );
    }

    #[rstest]
    #[case(3020, "30.20")]
    #[case(905, "9.05")]
    #[case(6000, "1:00.00")]
    #[case(62340, "10:23.40")]
    fn displays_as_results_sheet_notation(#[case] hundredths: u32, #[case] expected: &str) {
        assert_eq!(SwimTime::from_hundredths(hundredths).to_string(), expected);
    }

    #[test]
    fn converts_to_and_from_duration() {
        let time = SwimTime::from_hundredths(3020);
        let duration: ::time::Duration = time.into();
        assert_eq!(duration, ::time::Duration::milliseconds(30_200));
        assert_eq!(SwimTime::try_from(duration).unwrap(), time);
        // Sub-hundredth precision is truncated.
        assert_eq!(SwimTime::try_from(::time::Duration::milliseconds(30_209)).unwrap(), time);
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(SwimTime::try_from(::time::Duration::seconds(-1)).is_err());
    }
}
