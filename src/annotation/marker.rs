use std::fmt;
use std::str::FromStr;

use crate::error::AnnotationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Length {
    Long,
    Short,
}

impl Length {
    pub fn symbol(self) -> char {
        match self {
            Length::Long => '_',
            Length::Short => '^',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '_' => Some(Length::Long),
            '^' => Some(Length::Short),
            _ => None,
        }
    }
}

/// A length claim on one base-letter position, written `_4` or `^7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub position: usize,
    pub length: Length,
}

impl Marker {
    pub fn new(position: usize, length: Length) -> Self {
        Self { position, length }
    }

    pub fn long(position: usize) -> Self {
        Self::new(position, Length::Long)
    }

    pub fn short(position: usize) -> Self {
        Self::new(position, Length::Short)
    }
}

impl FromStr for Marker {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AnnotationError::MalformedMarker(s.to_string());
        let mut chars = s.chars();
        let length = chars.next().and_then(Length::from_symbol).ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        match digits.parse::<usize>() {
            Ok(position) if position > 0 => Ok(Marker { position, length }),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length.symbol(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("_4".parse::<Marker>(), Ok(Marker::long(4)));
        assert_eq!("^12".parse::<Marker>(), Ok(Marker::short(12)));
        assert_eq!(Marker::short(7).to_string(), "^7");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "_", "^x", "4", "*3", "_0", "^-1", "_3a", "_99999999999999999999999"] {
            assert!(bad.parse::<Marker>().is_err(), "{bad}");
        }
    }
}
