use std::fmt;

use crate::constants::{ALL_CORNERS, ALL_EDGES};
use crate::error::Error;
use crate::facelet::{Color, FaceCube, CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET};
use rand::Rng;

/// Represents the 8 corners on the cube, described by the layer they are on.
///
/// Example: `ULB` (Up, Left, Back).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl TryFrom<u8> for Corner {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Corner::*;
        match value {
            0 => Ok(URF),
            1 => Ok(UFL),
            2 => Ok(ULB),
            3 => Ok(UBR),
            4 => Ok(DFR),
            5 => Ok(DLF),
            6 => Ok(DBL),
            7 => Ok(DRB),
            _ => Err(Error::InvalidCorner),
        }
    }
}

/// Represents the 12 edges on the cube, described by the layer they are on.
///
/// Example: `BL` (Back, Left).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

impl TryFrom<u8> for Edge {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Edge::*;
        match value {
            0 => Ok(UR),
            1 => Ok(UF),
            2 => Ok(UL),
            3 => Ok(UB),
            4 => Ok(DR),
            5 => Ok(DF),
            6 => Ok(DL),
            7 => Ok(DB),
            8 => Ok(FR),
            9 => Ok(FL),
            10 => Ok(BL),
            11 => Ok(BR),
            _ => Err(Error::InvalidEdge),
        }
    }
}

/// Cube on the cubie level: the permutation and orientation of the 8 corners
/// and 12 edges relative to the solved state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CubieCube {
    /// Corner permutation, relative to the solved state.
    pub cp: [Corner; 8],
    /// Corner orientation, in {0, 1, 2}: 0 correctly oriented, 1/2 twisted.
    pub co: [u8; 8],
    /// Edge permutation, relative to the solved state.
    pub ep: [Edge; 12],
    /// Edge orientation, in {0, 1}: 0 correctly oriented, 1 flipped.
    pub eo: [u8; 12],
}

/// Solved cube on the cubie level.
#[rustfmt::skip]
pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR, Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [Edge::UR, Edge::UF, Edge::UL, Edge::UB, Edge::DR, Edge::DF, Edge::DL, Edge::DB, Edge::FR, Edge::FL, Edge::BL, Edge::BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cp: {:?} co: {:?} ep: {:?} eo: {:?}", self.cp, self.co, self.ep, self.eo)
    }
}

/// Fast binomial coefficient, used by the udslice coordinate codec.
pub fn choose(n: i32, k: i32) -> u32 {
    if k < 0 || k > n {
        return 0;
    }
    let mut num: u64 = 1;
    let mut den: u64 = 1;
    let mut n = n;
    let mut i = 1;
    while i <= k.min(n - k) {
        num *= n as u64;
        den *= i as u64;
        n -= 1;
        i += 1;
    }
    (num / den) as u32
}

impl CubieCube {
    /// Multiply this cubie cube with another cubie cube `b`, restricted to the corners.
    ///
    /// `(self * b).cp[i] = self.cp[b.cp[i]]`, `(self * b).co[i] = (self.co[b.cp[i]] + b.co[i]) % 3`.
    pub fn corner_multiply(&mut self, b: &CubieCube) {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[b.cp[i] as usize];
            co[i] = (self.co[b.cp[i] as usize] + b.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// Multiply this cubie cube with another cubie cube `b`, restricted to the edges.
    pub fn edge_multiply(&mut self, b: &CubieCube) {
        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[b.ep[i] as usize];
            eo[i] = (self.eo[b.ep[i] as usize] + b.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Multiply this cubie cube with another cubie cube `b`.
    pub fn multiply(&mut self, b: &CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Return the inverse of this cubie cube.
    pub fn inverse(&self) -> CubieCube {
        let mut inv = CubieCube::default();
        for ei in ALL_EDGES {
            inv.ep[self.ep[ei as usize] as usize] = ei;
        }
        for ei in ALL_EDGES {
            inv.eo[ei as usize] = self.eo[inv.ep[ei as usize] as usize];
        }
        for ci in ALL_CORNERS {
            inv.cp[self.cp[ci as usize] as usize] = ci;
        }
        for ci in ALL_CORNERS {
            let ori = self.co[inv.cp[ci as usize] as usize];
            inv.co[ci as usize] = (3 - ori) % 3;
        }
        inv
    }

    /// Parity of the corner permutation.
    pub fn corner_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..8).rev() {
            for j in (0..i).rev() {
                if self.cp[j] > self.cp[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Parity of the edge permutation. A solvable cube has matching edge and corner parity.
    pub fn edge_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..12).rev() {
            for j in (0..i).rev() {
                if self.ep[j] > self.ep[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    // ---------- Phase 1 coordinates ----------

    /// Corner orientation coordinate. 0 <= twist < 2187 in phase 1, twist = 0 in phase 2.
    pub fn get_twist(&self) -> u16 {
        let mut ret: u16 = 0;
        for i in 0..7 {
            ret = 3 * ret + self.co[i] as u16;
        }
        ret
    }

    /// Set the corner orientations from the twist coordinate.
    pub fn set_twist(&mut self, twist: u16) {
        let mut sum = 0u16;
        let mut twist = twist;
        for i in 0..7 {
            let x = (twist % 3) as u8;
            self.co[6 - i] = x;
            sum += x as u16;
            twist /= 3;
        }
        self.co[7] = ((3 - sum % 3) % 3) as u8;
    }

    /// Edge orientation coordinate. 0 <= flip < 2048 in phase 1, flip = 0 in phase 2.
    pub fn get_flip(&self) -> u16 {
        let mut ret: u16 = 0;
        for i in 0..11 {
            ret = 2 * ret + self.eo[i] as u16;
        }
        ret
    }

    /// Set the edge orientations from the flip coordinate.
    pub fn set_flip(&mut self, flip: u16) {
        let mut sum = 0u16;
        let mut flip = flip;
        for i in 0..11 {
            let x = (flip % 2) as u8;
            self.eo[10 - i] = x;
            sum += x as u16;
            flip /= 2;
        }
        self.eo[11] = ((2 - sum % 2) % 2) as u8;
    }

    /// Coordinate describing the (unordered) position of the edges FR, FL, BL, BR.
    /// 0 <= udslice < 495 in phase 1, udslice = 0 in phase 2.
    pub fn get_udslice(&self) -> u16 {
        let (mut ret, mut s) = (0i32, 0i32);
        for j in 0..12 {
            if self.ep[j] as u8 >= Edge::FR as u8 {
                s += 1;
            } else if s >= 1 {
                ret += choose(j as i32, s - 1) as i32;
            }
        }
        ret as u16
    }

    /// Set the (unordered) positions of the edges FR, FL, BL, BR from the udslice coordinate.
    pub fn set_udslice(&mut self, udslice: u16) {
        const SLICE_EDGE: [Edge; 4] = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];
        const OTHER_EDGE: [Edge; 8] = [
            Edge::UR, Edge::UF, Edge::UL, Edge::UB, Edge::DR, Edge::DF, Edge::DL, Edge::DB,
        ];
        let mut placed = [false; 12];
        let mut udslice = udslice as i32;
        let mut s = 3i32;
        for j in (0..12).rev() {
            if udslice - choose(j as i32, s) as i32 < 0 {
                self.ep[j] = SLICE_EDGE[s as usize];
                placed[j] = true;
                s -= 1;
            } else {
                udslice -= choose(j as i32, s) as i32;
            }
        }
        let mut x = 0;
        for j in 0..12 {
            if !placed[j] {
                self.ep[j] = OTHER_EDGE[x];
                x += 1;
            }
        }
    }

    // ---------- Phase 2 coordinates ----------

    /// Permutation coordinate of the 4 edges FR, FL, BL, BR. 0 <= edge4 < 24. Only valid in phase 2.
    pub fn get_edge4(&self) -> u16 {
        let mut e = [self.ep[8] as u8, self.ep[9] as u8, self.ep[10] as u8, self.ep[11] as u8];
        for v in e.iter_mut() {
            *v -= Edge::FR as u8;
        }
        lehmer_encode(&e) as u16
    }

    /// Set the permutation of the edges FR, FL, BL, BR from the edge4 coordinate. Only valid in phase 2.
    pub fn set_edge4(&mut self, edge4: u16) {
        let perm = lehmer_decode(edge4, 4);
        for i in 0..4 {
            self.ep[8 + i] = ALL_EDGES[8 + perm[i] as usize];
        }
    }

    /// Permutation coordinate of the edges UR, UF, UL, UB, DR, DF, DL, DB. 0 <= edge8 < 8!. Only valid in phase 2.
    pub fn get_edge8(&self) -> u32 {
        let e: Vec<u8> = self.ep[0..8].iter().map(|&x| x as u8).collect();
        lehmer_encode(&e) as u32
    }

    /// Set the permutation of the edges UR..DB from the edge8 coordinate. Only valid in phase 2.
    pub fn set_edge8(&mut self, edge8: u32) {
        let perm = lehmer_decode(edge8, 8);
        for i in 0..8 {
            self.ep[i] = ALL_EDGES[perm[i] as usize];
        }
    }

    /// Corner permutation coordinate. 0 <= corner < 8!.
    pub fn get_corner(&self) -> u32 {
        let c: Vec<u8> = self.cp.iter().map(|&x| x as u8).collect();
        lehmer_encode(&c) as u32
    }

    /// Set the corner permutation from the corner coordinate.
    pub fn set_corner(&mut self, idx: u32) {
        let perm = lehmer_decode(idx, 8);
        for i in 0..8 {
            self.cp[i] = ALL_CORNERS[perm[i] as usize];
        }
    }

    // ---------- Misc coordinates ----------

    /// Edge permutation coordinate (0 <= edge < 12!). Not used during search; needed to generate random cubes.
    pub fn get_edge(&self) -> u64 {
        let e: Vec<u8> = self.ep.iter().map(|&x| x as u8).collect();
        lehmer_encode(&e)
    }

    /// Set the edge permutation from the edge coordinate.
    pub fn set_edge(&mut self, idx: u64) {
        let perm = lehmer_decode(idx, 12);
        for i in 0..12 {
            self.ep[i] = ALL_EDGES[perm[i] as usize];
        }
    }

    // ---------- Validity ----------

    /// Checks a cubie cube for solvability.
    ///
    /// Returns 0 if solvable, or one of the error codes:
    /// -2 not all 12 edges exist exactly once, -3 flip error, -4 not all corners
    /// exist exactly once, -5 twist error, -6 parity error.
    pub fn verify(&self) -> i8 {
        let mut edge_count = [0u8; 12];
        for e in self.ep.iter() {
            edge_count[*e as usize] += 1;
        }
        if edge_count.iter().any(|&c| c != 1) {
            return -2;
        }
        let sum: u16 = self.eo.iter().map(|&x| x as u16).sum();
        if sum % 2 != 0 {
            return -3;
        }
        let mut corner_count = [0u8; 8];
        for c in self.cp.iter() {
            corner_count[*c as usize] += 1;
        }
        if corner_count.iter().any(|&c| c != 1) {
            return -4;
        }
        let sum: u16 = self.co.iter().map(|&x| x as u16).sum();
        if sum % 3 != 0 {
            return -5;
        }
        if self.edge_parity() != self.corner_parity() {
            return -6;
        }
        0
    }

    /// Apply a sequence of moves to a copy of this cube, returning the result.
    pub fn apply_moves(&self, moves: &[crate::moves::Move]) -> CubieCube {
        let mut cc = *self;
        cc.multiply_moves(moves);
        cc
    }

    /// Apply a sequence of moves to this cube in place.
    pub fn multiply_moves(&mut self, moves: &[crate::moves::Move]) {
        let cubes = crate::moves::all_move_cubes();
        for &m in moves {
            self.multiply(&cubes[m as usize]);
        }
    }

    /// Generate a uniformly-random solvable cube.
    pub fn randomize() -> CubieCube {
        let mut cc = CubieCube::default();
        let mut rng = rand::thread_rng();
        cc.set_edge(rng.gen_range(0..crate::constants::N_EDGE as u64));
        let parity = cc.edge_parity();
        loop {
            cc.set_corner(rng.gen_range(0..crate::constants::N_CORNER as u32));
            if cc.corner_parity() == parity {
                break;
            }
        }
        cc.set_flip(rng.gen_range(0..crate::constants::N_FLIP as u16));
        cc.set_twist(rng.gen_range(0..crate::constants::N_TWIST as u16));
        cc
    }
}

/// Lehmer-code (factoradic) rank of a permutation of `0..n`, stored as the
/// first `n` entries of `values`.
fn lehmer_encode(values: &[u8]) -> u64 {
    let n = values.len();
    let mut ret: u64 = 0;
    for j in (1..n).rev() {
        let mut s = 0u64;
        for i in 0..j {
            if values[i] > values[j] {
                s += 1;
            }
        }
        ret = j as u64 * (ret + s);
    }
    ret
}

/// Inverse of `lehmer_encode`: reconstructs the permutation of `0..n` ranked `idx`.
fn lehmer_decode(idx: impl Into<u64>, n: usize) -> Vec<u8> {
    let mut idx: u64 = idx.into();
    let mut coeffs = vec![0u64; n - 1];
    for i in 1..n {
        coeffs[i - 1] = idx % (i as u64 + 1);
        idx /= i as u64 + 1;
    }
    let mut pool: Vec<u8> = (0..n as u8).collect();
    let mut perm = vec![0u8; n];
    for i in (0..n - 1).rev() {
        let pos = i + 1 - coeffs[i] as usize;
        perm[i + 1] = pool.remove(pos);
    }
    perm[0] = pool[0];
    perm
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    fn try_from(fc: &FaceCube) -> Result<Self, Self::Error> {
        let mut cc = CubieCube::default();
        for i in 0..8 {
            let mut ori = 0usize;
            while ori < 3 {
                let color = fc.f[CORNER_FACELET[i][ori] as usize];
                if color == Color::U || color == Color::D {
                    break;
                }
                ori += 1;
            }
            let color1 = fc.f[CORNER_FACELET[i][(ori + 1) % 3] as usize];
            let color2 = fc.f[CORNER_FACELET[i][(ori + 2) % 3] as usize];
            let mut found = false;
            for j in 0..8 {
                if color1 == CORNER_COLOR[j][1] && color2 == CORNER_COLOR[j][2] {
                    cc.cp[i] = Corner::try_from(j as u8)?;
                    cc.co[i] = ori as u8;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InvalidFaceletString);
            }
        }
        for i in 0..12 {
            let mut found = false;
            for j in 0..12 {
                if fc.f[EDGE_FACELET[i][0] as usize] == EDGE_COLOR[j][0]
                    && fc.f[EDGE_FACELET[i][1] as usize] == EDGE_COLOR[j][1]
                {
                    cc.ep[i] = Edge::try_from(j as u8)?;
                    cc.eo[i] = 0;
                    found = true;
                    break;
                }
                if fc.f[EDGE_FACELET[i][0] as usize] == EDGE_COLOR[j][1]
                    && fc.f[EDGE_FACELET[i][1] as usize] == EDGE_COLOR[j][0]
                {
                    cc.ep[i] = Edge::try_from(j as u8)?;
                    cc.eo[i] = 1;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InvalidFaceletString);
            }
        }
        Ok(cc)
    }
}

impl From<&Vec<crate::moves::Move>> for CubieCube {
    fn from(moves: &Vec<crate::moves::Move>) -> Self {
        CubieCube::default().apply_moves(moves)
    }
}

impl From<&CubieCube> for FaceCube {
    fn from(cc: &CubieCube) -> Self {
        let mut fc = FaceCube::default();
        for i in 0..8 {
            let j = cc.cp[i] as usize;
            let ori = cc.co[i] as usize;
            for k in 0..3 {
                fc.f[CORNER_FACELET[i][(k + ori) % 3] as usize] = CORNER_COLOR[j][k];
            }
        }
        for i in 0..12 {
            let j = cc.ep[i] as usize;
            let ori = cc.eo[i] as usize;
            for k in 0..2 {
                fc.f[EDGE_FACELET[i][(k + ori) % 2] as usize] = EDGE_COLOR[j][k];
            }
        }
        fc
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::{B_MOVE, D_MOVE, F_MOVE, L_MOVE, R_MOVE, U_MOVE};

    #[test]
    fn test_multiply_identity() {
        let mut c = U_MOVE;
        let id = CubieCube::default();
        c.multiply(&id);
        assert_eq!(c, U_MOVE);
    }

    #[test]
    fn test_generator_order_four() {
        for g in [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE] {
            let mut c = CubieCube::default();
            for _ in 0..4 {
                c.multiply(&g);
            }
            assert_eq!(c, SOLVED_CUBIE_CUBE);
        }
    }

    #[test]
    fn test_inverse() {
        for g in [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE] {
            let mut c = g;
            c.multiply(&g.inverse());
            assert_eq!(c, SOLVED_CUBIE_CUBE);
        }
    }

    #[test]
    fn test_verify_solved() {
        assert_eq!(SOLVED_CUBIE_CUBE.verify(), 0);
    }

    #[test]
    fn test_verify_twist_error() {
        let mut c = SOLVED_CUBIE_CUBE;
        c.co[0] = 1;
        assert_eq!(c.verify(), -5);
    }

    #[test]
    fn test_twist_roundtrip() {
        for t in [0u16, 1, 5, 2186, 1093] {
            let mut c = CubieCube::default();
            c.set_twist(t);
            assert_eq!(c.get_twist(), t);
        }
    }

    #[test]
    fn test_flip_roundtrip() {
        for f in [0u16, 1, 5, 2047, 1000] {
            let mut c = CubieCube::default();
            c.set_flip(f);
            assert_eq!(c.get_flip(), f);
        }
    }

    #[test]
    fn test_udslice_roundtrip() {
        for s in [0u16, 1, 123, 494] {
            let mut c = CubieCube::default();
            c.set_udslice(s);
            assert_eq!(c.get_udslice(), s);
        }
    }

    #[test]
    fn test_corner_roundtrip() {
        for idx in [0u32, 1, 40319, 5040] {
            let mut c = CubieCube::default();
            c.set_corner(idx);
            assert_eq!(c.get_corner(), idx);
        }
    }

    #[test]
    fn test_edge8_roundtrip() {
        for idx in [0u32, 1, 40319, 5040] {
            let mut c = CubieCube::default();
            c.set_edge8(idx);
            assert_eq!(c.get_edge8(), idx);
        }
    }

    #[test]
    fn test_apply_moves_matches_generator_order() {
        use crate::moves::Move::*;
        let c = CubieCube::default().apply_moves(&[R, R, R, R]);
        assert_eq!(c, SOLVED_CUBIE_CUBE);
        let c = CubieCube::default().apply_moves(&[R2]);
        let mut expect = R_MOVE;
        expect.multiply(&R_MOVE);
        assert_eq!(c, expect);
    }

    #[test]
    fn test_edge4_roundtrip() {
        for idx in [0u16, 1, 23, 12] {
            let mut c = CubieCube::default();
            c.set_edge4(idx);
            assert_eq!(c.get_edge4(), idx);
        }
    }
}
