use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Caller-declared response format. Determines the parsing strategy; the
/// response is trusted to match the tag rather than sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Datatype {
    #[default]
    Json,
    Csv,
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Datatype::Json => "json",
                Datatype::Csv => "csv",
            }
        )
    }
}

impl FromStr for Datatype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Datatype::Json),
            "csv" => Ok(Datatype::Csv),
            _ => Err(Error::InvalidInput(format!(
                "unknown datatype '{s}'. Valid datatypes: json, csv"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatype_enumeration_is_closed() {
        assert_eq!("json".parse::<Datatype>().unwrap(), Datatype::Json);
        assert_eq!("csv".parse::<Datatype>().unwrap(), Datatype::Csv);
        for s in ["JSON", "xml", "tsv", ""] {
            assert!(s.parse::<Datatype>().is_err(), "accepted '{s}'");
        }
        assert_eq!(Datatype::default(), Datatype::Json);
    }
}
