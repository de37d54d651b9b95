use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Names the colors of the cube facelets: up, right, front, down, left, back.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    U, R, F, D, L, B,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidColor),
        }
    }
}

/// Cube on the facelet level: the 54 sticker colours.
///
/// Facelets are numbered in face order U, R, F, D, L, B, each face row-major
/// from its top-left sticker. A solved cube is
/// `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FaceCube {
    pub f: [Color; 54],
}

/// Solved cube on the facelet level.
#[rustfmt::skip]
pub const SOLVED_FACE_CUBE: FaceCube = FaceCube {
    f: [
        Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U,
        Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R,
        Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F,
        Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D,
        Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L,
        Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B,
    ],
};

impl Default for FaceCube {
    fn default() -> Self {
        SOLVED_FACE_CUBE
    }
}

impl FromStr for FaceCube {
    type Err = Error;

    fn from_str(cube_string: &str) -> Result<Self, Self::Err> {
        if cube_string.len() != 54 || !cube_string.is_ascii() {
            return Err(Error::InvalidFaceletString);
        }
        let mut counts = [0u8; 6];
        let mut f = [Color::U; 54];
        for (i, ch) in cube_string.chars().enumerate() {
            let c = Color::try_from(ch).map_err(|_| Error::InvalidFaceletString)?;
            counts[c as usize] += 1;
            f[i] = c;
        }
        if counts.iter().any(|&n| n != 9) {
            return Err(Error::InvalidFaceletString);
        }
        Ok(FaceCube { f })
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        FaceCube::from_str(s)
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.f.iter().map(|c| format!("{}", c)).collect();
        write!(f, "{s}")
    }
}

/// The names of the facelet positions of the cube, face order U, R, F, D, L, B,
/// each face numbered row-major from its top-left sticker:
///
/// ```text
///             |U1 U2 U3|
///             |U4 U5 U6|
///             |U7 U8 U9|
/// |L1 L2 L3|F1 F2 F3|R1 R2 R3|B1 B2 B3|
/// |L4 L5 L6|F4 F5 F6|R4 R5 R6|B4 B5 B6|
/// |L7 L8 L9|F7 F8 F9|R7 R8 R9|B7 B8 B9|
///             |D1 D2 D3|
///             |D4 D5 D6|
///             |D7 D8 D9|
/// ```
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Facelet {
    U1, U2, U3, U4, U5, U6, U7, U8, U9,
    R1, R2, R3, R4, R5, R6, R7, R8, R9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9,
    D1, D2, D3, D4, D5, D6, D7, D8, D9,
    L1, L2, L3, L4, L5, L6, L7, L8, L9,
    B1, B2, B3, B4, B5, B6, B7, B8, B9,
}

/// Map the corner positions to facelet positions.
pub const CORNER_FACELET: [[Facelet; 3]; 8] = [
    [Facelet::U9, Facelet::R1, Facelet::F3], // URF
    [Facelet::U7, Facelet::F1, Facelet::L3], // UFL
    [Facelet::U1, Facelet::L1, Facelet::B3], // ULB
    [Facelet::U3, Facelet::B1, Facelet::R3], // UBR
    [Facelet::D3, Facelet::F9, Facelet::R7], // DFR
    [Facelet::D1, Facelet::L9, Facelet::F7], // DLF
    [Facelet::D7, Facelet::B9, Facelet::L7], // DBL
    [Facelet::D9, Facelet::R9, Facelet::B7], // DRB
];

/// Map the edge positions to facelet positions.
pub const EDGE_FACELET: [[Facelet; 2]; 12] = [
    [Facelet::U6, Facelet::R2],
    [Facelet::U8, Facelet::F2],
    [Facelet::U4, Facelet::L2],
    [Facelet::U2, Facelet::B2],
    [Facelet::D6, Facelet::R8],
    [Facelet::D2, Facelet::F8],
    [Facelet::D4, Facelet::L8],
    [Facelet::D8, Facelet::B8],
    [Facelet::F6, Facelet::R4],
    [Facelet::F4, Facelet::L6],
    [Facelet::B6, Facelet::L4],
    [Facelet::B4, Facelet::R6],
];

/// Map the corner positions to facelet colors.
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Map the edge positions to facelet colors.
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::{CubieCube, SOLVED_CUBIE_CUBE};

    #[test]
    fn test_solved_roundtrip() {
        let fc = FaceCube::from(&SOLVED_CUBIE_CUBE);
        assert_eq!(fc, SOLVED_FACE_CUBE);
        let cc = CubieCube::try_from(&fc).unwrap();
        assert_eq!(cc, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(FaceCube::from_str("UUU").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_color_counts() {
        let s = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBU";
        assert!(FaceCube::from_str(s).is_err());
    }

    #[test]
    fn test_single_move_roundtrip() {
        use crate::moves::R_MOVE;
        let mut cc = SOLVED_CUBIE_CUBE;
        cc.multiply(&R_MOVE);
        let fc = FaceCube::from(&cc);
        let back = CubieCube::try_from(&fc).unwrap();
        assert_eq!(back, cc);
    }
}
