use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Either `M:SS` (seconds must be two digits) or bare seconds, then up to two fractional digits.
regex!(SWIM_TIME_REGEX, r"^(?:(\d+):(\d{2})|(\d+))(?:\.(\d{1,2}))?$");
