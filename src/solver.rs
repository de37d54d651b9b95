//! Two-phase IDA* solver: the driver that consumes the move and pruning
//! tables to turn a scrambled cube into a short move sequence.
use std::cmp::max;
use std::fmt;
use std::time::{Duration, Instant};

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{all_move_cubes, Move, MoveTables};
use crate::pruning::PruningTables;

lazy_static! {
    /// Process-wide, one-shot-initialised table handle used by the `solve`
    /// and `solve_all` entry points. Built once, on first use, shared by
    /// every later call.
    static ref TABLES: Tables = Tables::load_or_build().expect("failed to build solver tables");
}

/// The ten precomputed tables (six move tables, four pruning tables) the
/// search reads from. Immutable once built; safe to share across threads.
pub struct Tables {
    pub mv: MoveTables,
    pub pr: PruningTables,
}

impl Tables {
    /// Build (or load from `tables/`) every table the solver needs.
    pub fn load_or_build() -> Result<Self, Error> {
        let mv = MoveTables::load_or_build()?;
        let pr = PruningTables::load_or_build(&mv)?;
        Ok(Self { mv, pr })
    }
}

/// A solution found by the solver: the move list plus how long the search
/// that produced it took.
#[derive(Debug, Clone)]
pub struct Solution {
    pub solution: Vec<Move>,
    pub solve_time: Duration,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self
            .solution
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{s}")
    }
}

/// Outcome of a single depth-bounded search call.
enum Outcome {
    /// A solution was found; the payload is the total number of moves.
    Found(usize),
    /// The deadline was reached before a solution could be found or ruled out.
    Timeout,
    /// No solution exists at the given depth bound.
    None,
}

/// The two-phase IDA* search itself: recursion with per-depth state stacks,
/// indexed by node depth `n` from the start of the search.
pub struct Solver<'a> {
    tables: &'a Tables,
    deadline: Instant,
    start: Instant,
    cube: CubieCube,
    allowed_length: usize,

    axis: [usize; MAX_SEARCH_DEPTH + 2],
    power: [u8; MAX_SEARCH_DEPTH + 2],

    twist: [u16; MAX_SEARCH_DEPTH + 2],
    flip: [u16; MAX_SEARCH_DEPTH + 2],
    udslice: [u16; MAX_SEARCH_DEPTH + 2],
    h1: [i8; MAX_SEARCH_DEPTH + 2],

    edge4: [u16; MAX_SEARCH_DEPTH + 2],
    edge8: [u32; MAX_SEARCH_DEPTH + 2],
    corner: [u32; MAX_SEARCH_DEPTH + 2],
    h2: [i8; MAX_SEARCH_DEPTH + 2],
}

impl<'a> Solver<'a> {
    fn new(tables: &'a Tables, cube: CubieCube, deadline: Instant, start: Instant) -> Self {
        let mut s = Self {
            tables,
            deadline,
            start,
            cube,
            allowed_length: 0,
            axis: [0; MAX_SEARCH_DEPTH + 2],
            power: [0; MAX_SEARCH_DEPTH + 2],
            twist: [0; MAX_SEARCH_DEPTH + 2],
            flip: [0; MAX_SEARCH_DEPTH + 2],
            udslice: [0; MAX_SEARCH_DEPTH + 2],
            h1: [0; MAX_SEARCH_DEPTH + 2],
            edge4: [0; MAX_SEARCH_DEPTH + 2],
            edge8: [0; MAX_SEARCH_DEPTH + 2],
            corner: [0; MAX_SEARCH_DEPTH + 2],
            h2: [0; MAX_SEARCH_DEPTH + 2],
        };
        s.twist[0] = cube.get_twist();
        s.flip[0] = cube.get_flip();
        s.udslice[0] = cube.get_udslice();
        s.h1[0] = max(
            s.tables.pr.udslice_twist(s.udslice[0], s.twist[0]),
            s.tables.pr.udslice_flip(s.udslice[0], s.flip[0]),
        );
        s
    }

    fn timed_out(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Move pruning shared by phase 1 and phase 2: never repeat a face, and
    /// for opposite faces enforce a canonical order (U before D, R before L,
    /// F before B).
    fn allowed_face(&self, n: usize, face: usize) -> bool {
        if n == 0 {
            return true;
        }
        let last = self.axis[n - 1];
        face != last && face + 3 != last
    }

    /// Phase-1 search: drive `(twist, flip, udslice)` to `(0, 0, 0)`.
    fn p1(&mut self, n: usize, depth: usize) -> Outcome {
        if self.timed_out() {
            return Outcome::Timeout;
        }
        if self.h1[n] == 0 {
            return self.start_phase2(n);
        }
        if (self.h1[n] as usize) > depth {
            return Outcome::None;
        }
        for face in 0..6 {
            if !self.allowed_face(n, face) {
                continue;
            }
            for power in 1..=3u8 {
                let mv = Move::from_face_power(face, power);
                let m = mv as usize;
                let twist1 = self.tables.mv.twist_move[N_MOVE * self.twist[n] as usize + m] as u16;
                let flip1 = self.tables.mv.flip_move[N_MOVE * self.flip[n] as usize + m] as u16;
                let udslice1 =
                    self.tables.mv.udslice_move[N_MOVE * self.udslice[n] as usize + m] as u16;

                self.axis[n] = face;
                self.power[n] = power;
                self.twist[n + 1] = twist1;
                self.flip[n + 1] = flip1;
                self.udslice[n + 1] = udslice1;
                self.h1[n + 1] = max(
                    self.tables.pr.udslice_twist(udslice1, twist1),
                    self.tables.pr.udslice_flip(udslice1, flip1),
                );

                match self.p1(n + 1, depth - 1) {
                    Outcome::None => continue,
                    other => return other,
                }
            }
        }
        Outcome::None
    }

    /// Launch phase 2 from node `n`: recompute `(edge4, edge8, corner)` by
    /// replaying the chosen phase-1 moves on the original cube, then run
    /// `p2` at increasing depths until the remaining move budget is spent.
    fn start_phase2(&mut self, n: usize) -> Outcome {
        if self.timed_out() {
            return Outcome::Timeout;
        }
        let move_cubes = all_move_cubes();
        let mut cc = self.cube;
        for i in 0..n {
            let m = Move::from_face_power(self.axis[i], self.power[i]) as usize;
            cc.multiply(&move_cubes[m]);
        }
        self.edge4[n] = cc.get_edge4();
        self.edge8[n] = cc.get_edge8();
        self.corner[n] = cc.get_corner();
        self.h2[n] = max(
            self.tables.pr.edge4_corner(self.edge4[n], self.corner[n]),
            self.tables.pr.edge4_edge8(self.edge4[n], self.edge8[n]),
        );

        let remaining = self.allowed_length.saturating_sub(n);
        for depth in 0..=remaining {
            match self.p2(n, depth) {
                Outcome::None => continue,
                other => return other,
            }
        }
        Outcome::None
    }

    /// Phase-2 search: drive `(edge4, edge8, corner)` to `(0, 0, 0)` using
    /// only `{U, D, R2, F2, L2, B2}`.
    fn p2(&mut self, n: usize, depth: usize) -> Outcome {
        if self.timed_out() {
            return Outcome::Timeout;
        }
        if self.h2[n] == 0 {
            return Outcome::Found(n);
        }
        if (self.h2[n] as usize) > depth {
            return Outcome::None;
        }
        for face in 0..6 {
            if !self.allowed_face(n, face) {
                continue;
            }
            for power in 1..=3u8 {
                if matches!(face, 1 | 2 | 4 | 5) && power != 2 {
                    continue; // phase 2 forbids quarter turns of R, F, L, B
                }
                let mv = Move::from_face_power(face, power);
                let m = mv as usize;
                let edge4_1 = self.tables.mv.edge4_move[N_MOVE * self.edge4[n] as usize + m];
                let edge8_1 = self.tables.mv.edge8_move[N_MOVE * self.edge8[n] as usize + m];
                let corner1 = self.tables.mv.corner_move[N_MOVE * self.corner[n] as usize + m];

                self.axis[n] = face;
                self.power[n] = power;
                self.edge4[n + 1] = edge4_1 as u16;
                self.edge8[n + 1] = edge8_1 as u32;
                self.corner[n + 1] = corner1 as u32;
                self.h2[n + 1] = max(
                    self.tables.pr.edge4_corner(self.edge4[n + 1], self.corner[n + 1]),
                    self.tables.pr.edge4_edge8(self.edge4[n + 1], self.edge8[n + 1]),
                );

                match self.p2(n + 1, depth - 1) {
                    Outcome::None => continue,
                    other => return other,
                }
            }
        }
        Outcome::None
    }

    fn extract_solution(&self, length: usize) -> Vec<Move> {
        (0..length)
            .map(|i| Move::from_face_power(self.axis[i], self.power[i]))
            .collect()
    }

    /// One round of the outer iterative-deepening driver: search depths
    /// `0..=allowed_length` and return the first (necessarily shortest
    /// phase-1 prefix) solution found, or `None`/`Timeout`.
    fn search_round(&mut self, allowed_length: usize) -> Outcome {
        self.allowed_length = allowed_length;
        for depth in 0..=allowed_length {
            match self.p1(0, depth) {
                Outcome::None => continue,
                other => return other,
            }
        }
        Outcome::None
    }
}

/// A lazy sequence of successively shorter solutions: each call to `next`
/// reruns the outer driver with `allowed_length` reduced to one less than
/// the previous solution's length.
pub struct SolutionIter<'a> {
    solver: Solver<'a>,
    allowed_length: Option<usize>,
}

impl<'a> Iterator for SolutionIter<'a> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        let allowed_length = self.allowed_length?;
        match self.solver.search_round(allowed_length) {
            Outcome::Found(total) => {
                let moves = self.solver.extract_solution(total);
                self.allowed_length = if total == 0 { None } else { Some(total - 1) };
                Some(Solution {
                    solution: moves,
                    solve_time: self.solver.start.elapsed(),
                })
            }
            Outcome::Timeout | Outcome::None => {
                self.allowed_length = None;
                None
            }
        }
    }
}

fn facelets_to_verified_cube(facelets: &str) -> Result<CubieCube, Error> {
    let fc = FaceCube::try_from(facelets)?;
    let cc = CubieCube::try_from(&fc)?;
    if let Some(err) = Error::from_verify_code(cc.verify()) {
        return Err(err);
    }
    Ok(cc)
}

/// Solve a scrambled cube, returning its shortest discovered solution.
///
/// `max_length` bounds the number of moves the search will accept (<=31).
/// `max_time_seconds` bounds wall-clock search time; once it elapses the
/// best solution found so far is kept, or `Error::Timeout` is returned if
/// none has been found yet.
pub fn solve(facelets: &str, max_length: usize, max_time_seconds: f64) -> Result<Solution, Error> {
    let start = Instant::now();
    let cc = facelets_to_verified_cube(facelets)?;
    let deadline = start + Duration::from_secs_f64(max_time_seconds);
    let max_length = max_length.min(MAX_SEARCH_DEPTH);

    let mut solver = Solver::new(&TABLES, cc, deadline, start);
    let mut allowed_length = max_length;
    let mut best: Option<Vec<Move>> = None;
    loop {
        match solver.search_round(allowed_length) {
            Outcome::Found(total) => {
                let moves = solver.extract_solution(total);
                let done = total == 0;
                best = Some(moves);
                if done {
                    break;
                }
                allowed_length = total - 1;
            }
            Outcome::Timeout => break,
            Outcome::None => break,
        }
    }

    match best {
        Some(solution) => Ok(Solution {
            solution,
            solve_time: start.elapsed(),
        }),
        None if start.elapsed() >= Duration::from_secs_f64(max_time_seconds) => {
            Err(Error::Timeout)
        }
        None => Err(Error::NoSolutionForMaxDepth),
    }
}

/// Solve a scrambled cube, yielding successively shorter solutions until
/// time elapses or the search exhausts its depth bound.
pub fn solve_all(
    facelets: &str,
    max_length: usize,
    max_time_seconds: f64,
) -> Result<SolutionIter<'static>, Error> {
    let start = Instant::now();
    let cc = facelets_to_verified_cube(facelets)?;
    let deadline = start + Duration::from_secs_f64(max_time_seconds);
    let max_length = max_length.min(MAX_SEARCH_DEPTH);

    let solver = Solver::new(&TABLES, cc, deadline, start);
    Ok(SolutionIter {
        solver,
        allowed_length: Some(max_length),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn test_solve_already_solved() {
        let sol = solve(SOLVED, 25, 10.0).unwrap();
        assert!(sol.solution.is_empty());
    }

    #[test]
    fn test_solve_single_move_scramble_r() {
        let cc = CubieCube::default().apply_moves(&[Move::R]);
        let fc = FaceCube::from(&cc);
        let sol = solve(&fc.to_string(), 25, 10.0).unwrap();
        assert_eq!(sol.solution.len(), 1);
        let back = cc.apply_moves(&sol.solution);
        assert_eq!(back, crate::cubie::SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_solve_single_move_scramble_u2() {
        let cc = CubieCube::default().apply_moves(&[Move::U2]);
        let fc = FaceCube::from(&cc);
        let sol = solve(&fc.to_string(), 25, 10.0).unwrap();
        assert_eq!(sol.solution.len(), 1);
        let back = cc.apply_moves(&sol.solution);
        assert_eq!(back, crate::cubie::SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_solve_rejects_invalid_length() {
        assert!(solve("UUU", 25, 10.0).is_err());
    }

    #[test]
    fn test_solve_rejects_twisted_corner() {
        let mut s = SOLVED.chars().collect::<Vec<_>>();
        // twist URF's facelets among themselves: U9 <-> R1 <-> F3 (a corner twist)
        let (u9, r1, f3) = (s[8], s[9], s[20]);
        s[8] = r1;
        s[9] = f3;
        s[20] = u9;
        let bad: String = s.into_iter().collect();
        match solve(&bad, 25, 10.0) {
            Err(Error::TwistError) => {}
            other => panic!("expected TwistError, got {other:?}"),
        }
    }

    #[test]
    fn test_scramble_r_u_r_prime_u_prime_solves_within_four_moves() {
        let cc = CubieCube::default().apply_moves(&[Move::R, Move::U, Move::R3, Move::U3]);
        let fc = FaceCube::from(&cc);
        let sol = solve(&fc.to_string(), 25, 10.0).unwrap();
        assert!(sol.solution.len() <= 4);
        let back = cc.apply_moves(&sol.solution);
        assert_eq!(back, crate::cubie::SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_solve_all_yields_nonincreasing_lengths() {
        let cc = CubieCube::default().apply_moves(&[
            Move::R,
            Move::U,
            Move::R3,
            Move::U3,
            Move::F,
            Move::R,
            Move::F3,
        ]);
        let fc = FaceCube::from(&cc);
        let mut lengths = Vec::new();
        for sol in solve_all(&fc.to_string(), 25, 10.0).unwrap().take(3) {
            lengths.push(sol.solution.len());
        }
        assert!(!lengths.is_empty());
        for w in lengths.windows(2) {
            assert!(w[1] < w[0]);
        }
    }
}
