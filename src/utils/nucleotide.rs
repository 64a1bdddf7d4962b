/// Number of nucleotide rows in count and motif matrices.
pub const NUM_BASES: usize = 4;
/// Index of the gap channel in a soft column.
pub const GAP: usize = 4;

/// A soft alignment column: expected composition over G, A, T, C and gap.
pub type SoftColumn = [f64; 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleotide {
    G = 0,
    A = 1,
    T = 2,
    C = 3,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; NUM_BASES] =
        [Nucleotide::G, Nucleotide::A, Nucleotide::T, Nucleotide::C];

    pub fn code(self) -> usize {
        self as usize
    }

    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
        }
    }

    /// Case-insensitive; ambiguity codes and gaps are not nucleotides.
    pub fn from_byte(base: u8) -> Option<Self> {
        match base {
            b'G' | b'g' => Some(Nucleotide::G),
            b'A' | b'a' => Some(Nucleotide::A),
            b'T' | b't' => Some(Nucleotide::T),
            b'C' | b'c' => Some(Nucleotide::C),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::G => 'G',
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
        }
    }
}

/// Row index of the complementary base.
pub fn complement_code(code: usize) -> usize {
    Nucleotide::ALL[code].complement().code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_is_an_involution() {
        for base in Nucleotide::ALL {
            assert_eq!(base.complement().complement(), base);
            assert_ne!(base.complement(), base);
        }
    }

    #[test]
    fn codes_follow_gatc_row_order() {
        assert_eq!(Nucleotide::from_byte(b'g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_byte(b'A').map(Nucleotide::code), Some(1));
        assert_eq!(Nucleotide::from_byte(b't').map(Nucleotide::code), Some(2));
        assert_eq!(Nucleotide::from_byte(b'C').map(Nucleotide::code), Some(3));
        assert_eq!(Nucleotide::from_byte(b'N'), None);
        assert_eq!(Nucleotide::from_byte(b'-'), None);
        assert_eq!(complement_code(Nucleotide::G.code()), Nucleotide::C.code());
    }
}
