use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, ErrorKind};

/// How text chunks found inside a single `<pre>` block are combined.
///
/// The tokenizer hands text over in several chunks whenever the block body is
/// interrupted: by entities, comments, nested inline tags, line breaks. Only
/// [`Append`](Self::Append) reproduces the whole block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaptureMode {
    /// Every chunk is appended to the block's buffer.
    #[default]
    Append,
    /// Every chunk replaces the block's buffer, keeping only the last one.
    Replace,
}
impl CaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMode::Append => "append",
            CaptureMode::Replace => "replace",
        }
    }
}
impl FromStr for CaptureMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "append" => Self::Append,
            "replace" => Self::Replace,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "capture",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for CaptureMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("append", CaptureMode::Append)]
    #[case("Append", CaptureMode::Append)]
    #[case(" REPLACE ", CaptureMode::Replace)]
    fn parses_known_modes(#[case] input: &str, #[case] expected: CaptureMode) {
        assert_eq!(input.parse::<CaptureMode>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "overwrite".parse::<CaptureMode>().unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::ParseError {
                field: "capture",
                value: "overwrite".to_string()
            }
        );
    }

    #[test]
    fn defaults_to_append() {
        assert_eq!(CaptureMode::default(), CaptureMode::Append);
        assert_eq!(CaptureMode::default().to_string(), "append");
    }
}
