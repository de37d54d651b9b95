use crate::constants::*;
use crate::error::Error;
use crate::moves::MoveTables;
use crate::{decode_table, write_table};

/// The four pruning tables that drive the two-phase search: admissible
/// lower bounds on the number of moves remaining, indexed by a coordinate
/// pair. Two cover phase 1 (`udslice_twist`, `udslice_flip`), two cover
/// phase 2 (`edge4_edge8`, `edge4_corner`).
///
/// Entries are the exact minimum number of moves required in the relevant
/// group to drive that coordinate pair to zero, found by a breadth-first
/// fixed-point fill over the product graph (SS4.4).
pub struct PruningTables {
    pub udslice_twist: Vec<i8>,
    pub udslice_flip: Vec<i8>,
    pub edge4_edge8: Vec<i8>,
    pub edge4_corner: Vec<i8>,
}

impl PruningTables {
    /// Build (or load from `tables/`) all four pruning tables from the
    /// already-built move tables.
    pub fn load_or_build(mv: &MoveTables) -> Result<Self, Error> {
        Ok(Self {
            udslice_twist: build_product_table(
                "phase1_prun_udslice_twist",
                N_UDSLICE,
                N_TWIST,
                |a, m| mv.udslice_move[N_MOVE * a + m] as i64,
                |b, m| mv.twist_move[N_MOVE * b + m] as i64,
                false,
            )?,
            udslice_flip: build_product_table(
                "phase1_prun_udslice_flip",
                N_UDSLICE,
                N_FLIP,
                |a, m| mv.udslice_move[N_MOVE * a + m] as i64,
                |b, m| mv.flip_move[N_MOVE * b + m] as i64,
                false,
            )?,
            edge4_edge8: build_product_table(
                "phase2_prun_edge4_edge8",
                N_EDGE4,
                N_EDGE8,
                |a, m| mv.edge4_move[N_MOVE * a + m] as i64,
                |b, m| mv.edge8_move[N_MOVE * b + m] as i64,
                true,
            )?,
            edge4_corner: build_product_table(
                "phase2_prun_edge4_corner",
                N_EDGE4,
                N_CORNER,
                |a, m| mv.edge4_move[N_MOVE * a + m] as i64,
                |b, m| mv.corner_move[N_MOVE * b + m] as i64,
                true,
            )?,
        })
    }

    /// Lower bound on the number of moves to reach `udslice=0, twist=0`.
    pub fn udslice_twist(&self, udslice: u16, twist: u16) -> i8 {
        self.udslice_twist[N_TWIST * udslice as usize + twist as usize]
    }

    /// Lower bound on the number of moves to reach `udslice=0, flip=0`.
    pub fn udslice_flip(&self, udslice: u16, flip: u16) -> i8 {
        self.udslice_flip[N_FLIP * udslice as usize + flip as usize]
    }

    /// Lower bound on the number of phase-2 moves to reach `edge4=0, edge8=0`.
    pub fn edge4_edge8(&self, edge4: u16, edge8: u32) -> i8 {
        self.edge4_edge8[N_EDGE8 * edge4 as usize + edge8 as usize]
    }

    /// Lower bound on the number of phase-2 moves to reach `edge4=0, corner=0`.
    pub fn edge4_corner(&self, edge4: u16, corner: u32) -> i8 {
        self.edge4_corner[N_CORNER * edge4 as usize + corner as usize]
    }
}

/// Breadth-first fill of a pruning table over the product graph `A x B`,
/// where `next_a`/`next_b` give the move tables for each side.
///
/// `skip_disallowed` is set for the phase-2 tables, whose `A` coordinate
/// (`edge4`) carries `-1` sentinels for moves that leave the phase-2
/// subgroup; those moves are skipped rather than treated as reachable.
fn build_product_table(
    name: &str,
    size_a: usize,
    size_b: usize,
    next_a: impl Fn(usize, usize) -> i64,
    next_b: impl Fn(usize, usize) -> i64,
    skip_disallowed: bool,
) -> Result<Vec<i8>, Error> {
    let fname = format!("tables/{name}");
    let bytes = std::fs::read(&fname).unwrap_or_default();
    if !bytes.is_empty() {
        println!("Loading {fname} table...");
        return decode_table(&bytes);
    }

    println!("Creating {fname} table...");
    let total = size_a * size_b;
    let mut table = vec![-1i8; total];
    table[0] = 0;
    let mut done = 1usize;
    let mut depth = 0i8;
    while done != total {
        for idx in 0..total {
            if table[idx] != depth {
                continue;
            }
            let a = idx / size_b;
            let b = idx % size_b;
            for m in 0..N_MOVE {
                let a1 = next_a(a, m);
                if skip_disallowed && a1 < 0 {
                    continue;
                }
                let b1 = next_b(b, m);
                if skip_disallowed && b1 < 0 {
                    continue;
                }
                let idx1 = a1 as usize * size_b + b1 as usize;
                if table[idx1] == -1 {
                    table[idx1] = depth + 1;
                    done += 1;
                }
            }
        }
        depth += 1;
        if done % 200_000 < total / 50 {
            print!(".");
        }
    }
    println!();
    write_table(&fname, &table)?;
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::MoveTables;

    #[test]
    fn test_solved_entries_are_zero() {
        let mv = MoveTables::load_or_build().unwrap();
        let pr = PruningTables::load_or_build(&mv).unwrap();
        assert_eq!(pr.udslice_twist(0, 0), 0);
        assert_eq!(pr.udslice_flip(0, 0), 0);
        assert_eq!(pr.edge4_edge8(0, 0), 0);
        assert_eq!(pr.edge4_corner(0, 0), 0);
    }

    #[test]
    fn test_neighbor_of_solved_has_distance_one() {
        let mv = MoveTables::load_or_build().unwrap();
        let pr = PruningTables::load_or_build(&mv).unwrap();
        // twist after one R move from solved (see move_twist table, move index 3 = R)
        let twist1 = mv.twist_move[3] as u16;
        assert_eq!(pr.udslice_twist(0, twist1), 1);
    }
}
