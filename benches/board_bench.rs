//! Board Benchmarks
//!
//! Performance benchmarks for move generation and question selection using Criterion.

use blind_chess::game::rules::{get_possible_moves, Board, PieceType};
use blind_chess::game::types::Square;
use blind_chess::game::{Game, RoundOutcome};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn square(notation: &str) -> Square {
    Square::from_notation(notation).unwrap()
}

/// Board with every level piece on it, as at the end of a game
fn crowded_board() -> Board {
    let mut board = Board::new();
    board.add_piece(PieceType::Knight, square("b1"));
    board.add_piece(PieceType::Bishop, square("c1"));
    board.add_piece(PieceType::Bishop, square("f4"));
    board.add_piece(PieceType::Knight, square("g6"));
    board.add_piece(PieceType::Rook, square("a8"));
    board.add_piece(PieceType::King, square("e2"));
    board.add_piece(PieceType::Queen, square("d5"));
    board
}

fn bench_queen_moves(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("queen_moves_crowded_board", |b| {
        b.iter(|| black_box(get_possible_moves(PieceType::Queen, square("d5"), &board)))
    });
}

fn bench_singular_squares(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("singular_squares_crowded_board", |b| {
        b.iter(|| black_box(board.singular_squares()))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_correct_answers", |b| {
        b.iter(|| {
            let mut game = Game::from_seed(black_box(7));
            game.setup_pre_game();
            if game.start_game().is_err() {
                return black_box(0);
            }
            while let Some((piece, _)) = game.question_piece_and_square() {
                let answer = piece.piece_type();
                match game.answer(answer) {
                    Ok(RoundOutcome::Win) | Err(_) => break,
                    Ok(_) => {}
                }
            }
            black_box(game.score())
        })
    });
}

criterion_group!(
    benches,
    bench_queen_moves,
    bench_singular_squares,
    bench_full_game,
);
criterion_main!(benches);
