use std::str::FromStr;

use rand::Rng;

use crate::constants::ALL_MOVES;
use crate::error::Error;
use crate::moves::Move;

/// Parse a space-separated move sequence such as `"R U R' U'"`.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

/// Render a move sequence as space-separated standard notation, e.g. `"R U R' U'"`.
pub fn scramble_to_str(moves: &[Move]) -> Result<String, Error> {
    Ok(moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Generate a random scramble of `length` moves.
///
/// Consecutive moves never repeat a face, and never turn a face immediately
/// after its opposite in a way that would just cancel out (the same
/// redundancy the solver's own move pruning forbids, see `solver::Solver`).
pub fn gen_scramble(length: usize) -> Result<Vec<Move>, Error> {
    let mut rng = rand::thread_rng();
    let mut moves = Vec::with_capacity(length);
    let mut last_face: Option<usize> = None;
    while moves.len() < length {
        let face = rng.gen_range(0..6);
        if let Some(last) = last_face {
            if face == last || face + 3 == last || last + 3 == face {
                continue;
            }
        }
        let power = rng.gen_range(1..=3u8);
        moves.push(Move::from_face_power(face, power));
        last_face = Some(face);
    }
    Ok(moves)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m).unwrap(), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn test_roundtrip() {
        for m in ALL_MOVES {
            assert_eq!(scramble_from_str(&scramble_to_str(&[m]).unwrap()).unwrap(), vec![m]);
        }
    }

    #[test]
    fn test_gen_scramble_length() {
        let s = gen_scramble(25).unwrap();
        assert_eq!(s.len(), 25);
    }
}
