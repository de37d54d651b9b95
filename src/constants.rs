use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::facelet::Color;
use crate::moves::Move::{self, *};

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];
pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

/// number of possible face moves
pub const N_MOVE: usize = 18;
/// 3^7 possible corner orientations in phase 1, twist = 0 in phase 2
pub const N_TWIST: usize = 2187;
/// 2^11 possible edge orientations in phase 1, flip = 0 in phase 2
pub const N_FLIP: usize = 2048;
/// C(12,4) possible (unordered) positions of the FR, FL, BL, BR edges in phase 1
pub const N_UDSLICE: usize = 495;
/// 4! permutations of the FR, FL, BL, BR edges, only meaningful in phase 2
pub const N_EDGE4: usize = 24;
/// 8! permutations of the UR, UF, UL, UB, DR, DF, DL, DB edges, only meaningful in phase 2
pub const N_EDGE8: usize = 40320;
/// 8! permutations of the corners
pub const N_CORNER: usize = 40320;
/// 12! permutations of all edges, only used to generate random cubes
pub const N_EDGE: usize = 479001600;

/// product size of the phase 1 udslice/twist pruning table
pub const N_UDSLICE_TWIST: usize = N_UDSLICE * N_TWIST;
/// product size of the phase 1 udslice/flip pruning table
pub const N_UDSLICE_FLIP: usize = N_UDSLICE * N_FLIP;
/// product size of the phase 2 edge4/edge8 pruning table
pub const N_EDGE4_EDGE8: usize = N_EDGE4 * N_EDGE8;
/// product size of the phase 2 edge4/corner pruning table
pub const N_EDGE4_CORNER: usize = N_EDGE4 * N_CORNER;

/// maximum search depth entertained by the solver
pub const MAX_SEARCH_DEPTH: usize = 31;
