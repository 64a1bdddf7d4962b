use std::str::FromStr;

/// How the aggregator treats sites that reach past the end of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    #[default]
    Strict,
    Lenient,
}

impl FromStr for IndexPolicy {
    type Err = &'static str;
    fn from_str(policy: &str) -> Result<Self, Self::Err> {
        match policy {
            "strict" => Ok(IndexPolicy::Strict),
            "lenient" => Ok(IndexPolicy::Lenient),
            _ => Err("Invalid index policy. Options are: strict, lenient"),
        }
    }
}
