use std::{fmt, str::FromStr};

use self::Move::*;
use crate::constants::*;
use crate::cubie::Corner::*;
use crate::cubie::Edge::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::{decode_table, write_table};

/// Layer moves: Up, Right, Front, Down, Left, Back.
///
/// `$` clockwise quarter turn, `$2` half turn, `$3` counter-clockwise quarter turn.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl Move {
    /// Decompose into `(face, power)` with face in 0..6 (U,R,F,D,L,B) and power in 1..=3.
    pub fn face_power(self) -> (usize, u8) {
        let i = self as usize;
        (i / 3, (i % 3) as u8 + 1)
    }

    /// Build a move from `(face, power)`, the inverse of `face_power`.
    pub fn from_face_power(face: usize, power: u8) -> Move {
        ALL_MOVES[3 * face + (power as usize - 1)]
    }
}

/// The six basic quarter-turn cubes, indexed by face (U=0, R=1, F=2, D=3, L=4, B=5).
///
/// These are the generators of the cube group: every reachable state is a
/// product of these six cubes and their powers.
#[rustfmt::skip]
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

#[rustfmt::skip]
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The six generator cubes, indexed by face (U=0, R=1, F=2, D=3, L=4, B=5).
pub fn basic_move_cubes() -> [CubieCube; 6] {
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE]
}

/// All 18 move cubes (one per `Move` variant), built by composing each
/// generator with itself 1, 2 or 3 times. Used to replay an exact move
/// sequence at the cubie level, e.g. at the phase-1/phase-2 boundary.
pub fn all_move_cubes() -> [CubieCube; 18] {
    let bmc = basic_move_cubes();
    let mut out = [CubieCube::default(); 18];
    for face in 0..6 {
        let mut acc = CubieCube::default();
        for power in 0..3 {
            acc.multiply(&bmc[face]);
            out[3 * face + power] = acc;
        }
    }
    out
}

/// A disallowed phase-2 table entry: quarter turns of R, F, L, B leave the
/// phase-2 subgroup and are never taken once phase 2 has started.
pub(crate) fn is_phase2_move(face: usize, k: usize) -> bool {
    k % 2 == 0 && face % 3 != 0
}

/// All six move tables needed by the solver: for each coordinate value and
/// each of the 18 moves, the resulting coordinate value.
pub struct MoveTables {
    pub twist_move: Vec<i16>,
    pub flip_move: Vec<i16>,
    pub udslice_move: Vec<i16>,
    pub edge4_move: Vec<i32>,
    pub edge8_move: Vec<i32>,
    pub corner_move: Vec<i32>,
}

impl MoveTables {
    pub fn load_or_build() -> Result<Self, Error> {
        Ok(Self {
            twist_move: move_twist()?,
            flip_move: move_flip()?,
            udslice_move: move_udslice()?,
            edge4_move: move_edge4()?,
            edge8_move: move_edge8()?,
            corner_move: move_corner()?,
        })
    }
}

/// Move table for the corner-orientation (twist) coordinate.
///
/// 0 <= twist < 2187 in phase 1, twist = 0 in phase 2.
pub fn move_twist() -> Result<Vec<i16>, Error> {
    let fname = "tables/move_twist";
    let bytes = std::fs::read(fname).unwrap_or_default();
    if !bytes.is_empty() {
        return decode_table(&bytes);
    }
    println!("Creating {} table...", fname);
    let bmc = basic_move_cubes();
    let mut table = vec![0i16; N_TWIST * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..N_TWIST {
        a.set_twist(i as u16);
        for j in 0..6 {
            for k in 0..3 {
                a.corner_multiply(&bmc[j]);
                table[N_MOVE * i + 3 * j + k] = a.get_twist() as i16;
            }
            a.corner_multiply(&bmc[j]);
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the edge-orientation (flip) coordinate.
///
/// 0 <= flip < 2048 in phase 1, flip = 0 in phase 2.
pub fn move_flip() -> Result<Vec<i16>, Error> {
    let fname = "tables/move_flip";
    let bytes = std::fs::read(fname).unwrap_or_default();
    if !bytes.is_empty() {
        return decode_table(&bytes);
    }
    println!("Creating {} table...", fname);
    let bmc = basic_move_cubes();
    let mut table = vec![0i16; N_FLIP * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..N_FLIP {
        a.set_flip(i as u16);
        for j in 0..6 {
            for k in 0..3 {
                a.edge_multiply(&bmc[j]);
                table[N_MOVE * i + 3 * j + k] = a.get_flip() as i16;
            }
            a.edge_multiply(&bmc[j]);
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the (unordered) udslice coordinate: the position of the
/// edges FR, FL, BL, BR.
///
/// 0 <= udslice < 495 in phase 1, udslice = 0 in phase 2.
pub fn move_udslice() -> Result<Vec<i16>, Error> {
    let fname = "tables/move_udslice";
    let bytes = std::fs::read(fname).unwrap_or_default();
    if !bytes.is_empty() {
        return decode_table(&bytes);
    }
    println!("Creating {} table...", fname);
    let bmc = basic_move_cubes();
    let mut table = vec![0i16; N_UDSLICE * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..N_UDSLICE {
        a.set_udslice(i as u16);
        for j in 0..6 {
            for k in 0..3 {
                a.edge_multiply(&bmc[j]);
                table[N_MOVE * i + 3 * j + k] = a.get_udslice() as i16;
            }
            a.edge_multiply(&bmc[j]);
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the edge4 coordinate (permutation of FR, FL, BL, BR).
///
/// Only valid in phase 2. Quarter turns of R, F, L, B are recorded as `-1`
/// since they leave the phase-2 subgroup.
pub fn move_edge4() -> Result<Vec<i32>, Error> {
    let fname = "tables/move_edge4";
    let bytes = std::fs::read(fname).unwrap_or_default();
    if !bytes.is_empty() {
        return decode_table(&bytes);
    }
    println!("Creating {} table...", fname);
    let bmc = basic_move_cubes();
    let mut table = vec![0i32; N_EDGE4 * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..N_EDGE4 {
        a.set_edge4(i as u16);
        for j in 0..6 {
            for k in 0..3 {
                a.edge_multiply(&bmc[j]);
                table[N_MOVE * i + 3 * j + k] = if is_phase2_move(j, k) {
                    -1
                } else {
                    a.get_edge4() as i32
                };
            }
            a.edge_multiply(&bmc[j]);
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the edge8 coordinate (permutation of UR, UF, UL, UB, DR, DF, DL, DB).
///
/// Only valid in phase 2. Quarter turns of R, F, L, B are recorded as `-1`.
pub fn move_edge8() -> Result<Vec<i32>, Error> {
    let fname = "tables/move_edge8";
    let bytes = std::fs::read(fname).unwrap_or_default();
    if !bytes.is_empty() {
        return decode_table(&bytes);
    }
    println!("Creating {} table...", fname);
    let bmc = basic_move_cubes();
    let mut table = vec![0i32; N_EDGE8 * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..N_EDGE8 {
        a.set_edge8(i as u32);
        for j in 0..6 {
            for k in 0..3 {
                a.edge_multiply(&bmc[j]);
                table[N_MOVE * i + 3 * j + k] = if is_phase2_move(j, k) {
                    -1
                } else {
                    a.get_edge8() as i32
                };
            }
            a.edge_multiply(&bmc[j]);
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the corner permutation coordinate.
///
/// Only meaningful for the search once phase 1 is complete. Quarter turns of
/// R, F, L, B are recorded as `-1`.
pub fn move_corner() -> Result<Vec<i32>, Error> {
    let fname = "tables/move_corner";
    let bytes = std::fs::read(fname).unwrap_or_default();
    if !bytes.is_empty() {
        return decode_table(&bytes);
    }
    println!("Creating {} table...", fname);
    let bmc = basic_move_cubes();
    let mut table = vec![0i32; N_CORNER * N_MOVE];
    let mut a = CubieCube::default();
    for i in 0..N_CORNER {
        a.set_corner(i as u32);
        for j in 0..6 {
            for k in 0..3 {
                a.corner_multiply(&bmc[j]);
                table[N_MOVE * i + 3 * j + k] = if is_phase2_move(j, k) {
                    -1
                } else {
                    a.get_corner() as i32
                };
            }
            a.corner_multiply(&bmc[j]);
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_and_parse_roundtrip() {
        for m in ALL_MOVES {
            assert_eq!(Move::from_str(&m.to_string()).unwrap(), m);
        }
    }

    #[test]
    fn test_face_power_roundtrip() {
        for m in ALL_MOVES {
            let (face, power) = m.face_power();
            assert_eq!(Move::from_face_power(face, power), m);
        }
    }

    #[test]
    fn test_phase2_sentinel_condition() {
        // quarter turns (k=0,2) of R,F,L,B (face%3 != 0) are disallowed in phase 2
        assert!(is_phase2_move(1, 0)); // R
        assert!(is_phase2_move(1, 2)); // R'
        assert!(!is_phase2_move(1, 1)); // R2
        assert!(!is_phase2_move(0, 0)); // U
        assert!(!is_phase2_move(3, 0)); // D
    }

    #[test]
    fn test_move_twist_consistency() {
        let table = move_twist().unwrap();
        let bmc = basic_move_cubes();
        let mut a = CubieCube::default();
        a.set_twist(17);
        a.corner_multiply(&bmc[1]); // R
        assert_eq!(table[N_MOVE * 17 + 3], a.get_twist() as i16);
    }
}
