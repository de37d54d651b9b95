use crate::constants::N_MOVE;
use crate::cubie::CubieCube;
use crate::moves::{Move, MoveTables};

/// Cube on the coordinate level: the six integers the search touches.
///
/// `twist`, `flip`, `udslice` are the phase-1 coordinates (valid throughout
/// phase 1, and all zero once the cube has been reduced into the phase-2
/// subgroup). `edge4`, `edge8`, `corner` are the phase-2 coordinates, only
/// meaningful once the cube lies in that subgroup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordCube {
    pub twist: u16,
    pub flip: u16,
    pub udslice: u16,
    pub edge4: u16,
    pub edge8: u32,
    pub corner: u32,
}

impl CoordCube {
    /// Build a `CoordCube` from a `CubieCube`.
    ///
    /// `edge4`/`edge8`/`corner` are only meaningful if `cube` already lies in
    /// the phase-2 subgroup; the solver recomputes them directly from a
    /// replayed `CubieCube` once phase 1 completes rather than through this
    /// constructor (see `solver::Solver::start_phase2`).
    pub fn from_cubie(cube: &CubieCube) -> Self {
        Self {
            twist: cube.get_twist(),
            flip: cube.get_flip(),
            udslice: cube.get_udslice(),
            edge4: cube.get_edge4(),
            edge8: cube.get_edge8(),
            corner: cube.get_corner(),
        }
    }

    /// Apply a move, updating all six coordinates via the move tables.
    pub fn apply_move(&self, tables: &MoveTables, mv: Move) -> Self {
        let m = mv as usize;
        Self {
            twist: tables.twist_move[self.twist as usize * N_MOVE + m] as u16,
            flip: tables.flip_move[self.flip as usize * N_MOVE + m] as u16,
            udslice: tables.udslice_move[self.udslice as usize * N_MOVE + m] as u16,
            edge4: tables.edge4_move[self.edge4 as usize * N_MOVE + m].max(0) as u16,
            edge8: tables.edge8_move[self.edge8 as usize * N_MOVE + m].max(0) as u32,
            corner: tables.corner_move[self.corner as usize * N_MOVE + m].max(0) as u32,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;

    #[test]
    fn test_solved_coords_are_zero() {
        let c = CoordCube::from_cubie(&SOLVED_CUBIE_CUBE);
        assert_eq!(c.twist, 0);
        assert_eq!(c.flip, 0);
        assert_eq!(c.udslice, 0);
        assert_eq!(c.edge4, 0);
        assert_eq!(c.edge8, 0);
        assert_eq!(c.corner, 0);
    }

    #[test]
    fn test_apply_move_matches_move_tables() {
        let tables = MoveTables::load_or_build().unwrap();
        let c = CoordCube::from_cubie(&SOLVED_CUBIE_CUBE);
        let next = c.apply_move(&tables, Move::U);
        assert_eq!(next.twist, 0); // U doesn't twist corners
        assert_eq!(next.flip, 0); // U doesn't flip edges
        assert_eq!(next.udslice, 0); // U doesn't touch the slice edges
    }
}
