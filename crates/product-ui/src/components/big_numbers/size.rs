/// Display size presets shared by the big numbers widget and its skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BigNumbersSize {
    #[default]
    Default,
    Large,
    XLarge,
}

/// All sizes in display order.
pub const ALL_SIZES: &[BigNumbersSize] = &[
    BigNumbersSize::Default,
    BigNumbersSize::Large,
    BigNumbersSize::XLarge,
];

impl BigNumbersSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BigNumbersSize::Default => "default",
            BigNumbersSize::Large => "lg",
            BigNumbersSize::XLarge => "xl",
        }
    }

    /// BEM modifier for this size. The default size has none.
    pub fn modifier(&self) -> Option<&'static str> {
        match self {
            BigNumbersSize::Default => None,
            sized => Some(sized.as_str()),
        }
    }

    /// Parse a size key, falling back to `Default` for anything unrecognized.
    pub fn from_key(s: &str) -> Self {
        match s {
            "default" => BigNumbersSize::Default,
            "lg" => BigNumbersSize::Large,
            "xl" => BigNumbersSize::XLarge,
            other => {
                tracing::debug!(
                    size = other,
                    fallback = BigNumbersSize::Default.as_str(),
                    "unrecognized big numbers size"
                );
                BigNumbersSize::Default
            }
        }
    }
}

impl From<&str> for BigNumbersSize {
    fn from(s: &str) -> Self {
        Self::from_key(s)
    }
}

impl From<String> for BigNumbersSize {
    fn from(s: String) -> Self {
        Self::from_key(&s)
    }
}
