//! N-Queens Row Domains
//!
//! Shows the value range layer on the classic N-Queens shape: queens are
//! fixed to columns and a solver assigns rows. The row domain is computed
//! from the board size, decorated with an absent element (a queen may stay
//! off the board), enumerated exhaustively, and sampled reproducibly from
//! a seeded random source.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rangeforge::{
    IntValueRange, NullableValueRange, ValueRange, ValueRangeError, ValueRangeProvider,
};

/// A queen that needs to be placed. Fixed to a column; the row is the
/// planning variable and may stay unassigned.
struct Queen {
    column: i64,
    row: Option<i64>,
}

/// The complete N-Queens problem.
struct NQueensBoard {
    n: i64,
    queens: Vec<Queen>,
}

impl NQueensBoard {
    fn new(n: i64) -> Self {
        let queens = (0..n).map(|column| Queen { column, row: None }).collect();
        NQueensBoard { n, queens }
    }

    /// Prints the board to stdout.
    fn print_board(&self) {
        println!("{}", "-".repeat((self.n as usize) * 2 + 1));
        for row_idx in 0..self.n {
            print!("|");
            for col_idx in 0..self.n {
                let queen_here = self
                    .queens
                    .iter()
                    .any(|q| q.column == col_idx && q.row == Some(row_idx));
                print!("{}", if queen_here { "Q|" } else { " |" });
            }
            println!();
        }
        println!("{}", "-".repeat((self.n as usize) * 2 + 1));
    }
}

/// Supplies the row domain for any queen: `[0, n)` plus the absent
/// element. Rebuilt per access, so a board resize is picked up on the
/// next search step.
struct RowRangeProvider;

impl ValueRangeProvider<NQueensBoard, Option<i64>> for RowRangeProvider {
    fn value_range(&self, board: &NQueensBoard) -> Box<dyn ValueRange<Option<i64>>> {
        let rows = IntValueRange::new(0, board.n).expect("board size fits i64");
        Box::new(NullableValueRange::new(Box::new(rows)).expect("row domain is countable"))
    }
}

fn main() -> Result<(), ValueRangeError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("rangeforge N-Queens Row Domains");
    println!("===============================\n");

    let n = 4;
    let mut board = NQueensBoard::new(n);
    let provider = RowRangeProvider;

    println!("Problem: {n} queens on a {n}x{n} board; rows may stay unassigned.\n");

    // Exhaustive enumeration, as a systematic neighborhood would walk it.
    let range = provider.value_range(&board);
    println!(
        "Row domain has {} values (including the absent element):",
        range.size()?
    );
    let values: Vec<Option<i64>> = range.create_original_iterator()?.collect();
    println!("  original order: {values:?}\n");

    // Stochastic move generation: draw one candidate row per queen from a
    // seeded source. The same seed replays the same assignment.
    let seed = 42;
    let assignment = sample_assignment(&provider, &board, seed);
    let replay = sample_assignment(&provider, &board, seed);
    assert_eq!(assignment, replay, "seeded runs must agree");

    println!("Sampled assignment (seed {seed}): {assignment:?}");
    for (queen, row) in board.queens.iter_mut().zip(&assignment) {
        queen.row = *row;
    }
    board.print_board();

    let unassigned = board.queens.iter().filter(|q| q.row.is_none()).count();
    println!("Queens left unassigned by sampling: {unassigned}");
    Ok(())
}

/// Draws one row candidate per queen from a fresh range, all consuming the
/// same seeded source in queen order.
fn sample_assignment(
    provider: &RowRangeProvider,
    board: &NQueensBoard,
    seed: u64,
) -> Vec<Option<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    board
        .queens
        .iter()
        .map(|_| {
            provider
                .value_range(board)
                .create_random_iterator(&mut rng)
                .next()
                .expect("row domain is never empty")
        })
        .collect()
}
