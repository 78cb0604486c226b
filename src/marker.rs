use std::fmt;
use std::fmt::{Display, Formatter, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    Mine,
    Empty,
    /// Number of mines in the Moore neighborhood, 1 to 8.
    Count(u8),
    Exploded,
    Unknown,
    Known,
    // reserved for marking suspected mines, nothing sets it yet
    #[allow(dead_code)]
    Flag,
}

impl Marker {
    pub fn symbol(self) -> char {
        match self {
            Self::Mine => '*',
            Self::Empty => '.',
            Self::Count(n) => (b'0' + n.min(9)) as char,
            Self::Exploded => 'X',
            Self::Unknown => '_',
            Self::Known => 'K',
            Self::Flag => 'F',
        }
    }

    /// One more adjacent mine than `self`.
    pub fn incremented(self) -> Self {
        match self {
            Self::Empty => Self::Count(1),
            Self::Count(n) => Self::Count(n + 1),
            other => other,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Marker::*;

    #[test]
    fn symbols_are_exact() {
        let rendered: String = [Mine, Empty, Exploded, Unknown, Known, Flag]
            .iter()
            .map(|m| m.symbol())
            .collect();
        assert_eq!(rendered, "*.X_KF");
        assert_eq!(Count(3).to_string(), "3");
        assert_eq!(Count(8).to_string(), "8");
    }

    #[test]
    fn increment_counts_up_from_empty() {
        assert_eq!(Empty.incremented(), Count(1));
        assert_eq!(Count(1).incremented().incremented(), Count(3));
        assert_eq!(Mine.incremented(), Mine);
    }
}
