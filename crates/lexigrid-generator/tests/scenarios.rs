//! End-to-end generation scenarios.

use std::str::FromStr as _;

use lexigrid_core::{Direction, Letter, Position};
use lexigrid_generator::{
    ConflictRule, GeneratorConfig, PuzzleGenerator, PuzzleSeed, SkipReason, generate_board,
    parse_words,
};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn seeds() -> impl Iterator<Item = PuzzleSeed> {
    SEEDS.into_iter().map(|s| PuzzleSeed::from_str(s).unwrap())
}

#[test]
fn cat_on_ten_by_ten() {
    let words = parse_words(["cat"]).unwrap();
    let generator = PuzzleGenerator::new(GeneratorConfig::default());

    for seed in seeds() {
        let puzzle = generator.generate_with_seed(&words, seed).unwrap();
        assert_eq!(puzzle.placed.len(), 1);
        assert!(puzzle.skipped.is_empty());

        let placed = &puzzle.placed[0];
        let letters = puzzle
            .board
            .read_run(placed.start, placed.direction, 3)
            .unwrap();
        let text: String = letters.into_iter().map(Letter::as_char).collect();
        assert_eq!(text, "cat");

        // Exactly the cells of the run differ from pure filler, at most.
        let filler = generate_board(10, 10, &mut seed.rng());
        let covered: Vec<Position> = placed.positions().collect();
        for row in 0..10 {
            for col in 0..10 {
                let pos = Position::new(row, col);
                if !covered.contains(&pos) {
                    assert_eq!(puzzle.board[pos], filler[pos]);
                }
            }
        }
    }
}

#[test]
fn crossword_on_three_by_three() {
    let words = parse_words(["crossword"]).unwrap();
    let generator = PuzzleGenerator::new(GeneratorConfig {
        width: 3,
        height: 3,
        ..GeneratorConfig::default()
    });

    for seed in seeds() {
        let puzzle = generator.generate_with_seed(&words, seed).unwrap();
        assert!(puzzle.placed.is_empty());
        assert_eq!(puzzle.skipped.len(), 1);
        assert_eq!(puzzle.skipped[0].reason, SkipReason::NoFittingDirection);
        let diagnostic = puzzle.skipped[0].to_string();
        assert!(diagnostic.starts_with('<') && diagnostic.ends_with('>'), "{diagnostic}");
        assert_eq!(puzzle.board.rows().flatten().count(), 9);
        assert_eq!(puzzle.board, generate_board(3, 3, &mut seed.rng()));
    }
}

#[test]
fn later_words_do_not_break_earlier_ones_with_cell_letter_rule() {
    let words = parse_words([
        "crossword", "cry", "puzzle", "letter", "grid", "word", "search", "row", "column",
    ])
    .unwrap();
    let generator = PuzzleGenerator::new(GeneratorConfig {
        width: 12,
        height: 12,
        conflict_rule: ConflictRule::CellLetter,
        resample_rounds: 2,
        reject_oversized_words: true,
    });

    for seed in seeds() {
        let puzzle = generator.generate_with_seed(&words, seed).unwrap();
        assert_eq!(puzzle.placed.len() + puzzle.skipped.len(), words.len());
        for placed in &puzzle.placed {
            assert!(placed.reads_back(&puzzle.board), "{}", placed.word);
            assert!(Direction::ALL.contains(&placed.direction));
        }
    }
}

#[test]
fn overwritten_words_move_to_skipped_with_step_index_rule() {
    let words = parse_words([
        "crossword", "cry", "puzzle", "letter", "grid", "word", "search", "row", "column",
    ])
    .unwrap();
    let generator = PuzzleGenerator::new(GeneratorConfig {
        width: 12,
        height: 12,
        ..GeneratorConfig::default()
    });

    let mut overwritten = 0;
    for i in 0..200 {
        let puzzle = generator
            .generate_with_seed(&words, PuzzleSeed::from_phrase(&format!("s{i}")))
            .unwrap();
        assert_eq!(puzzle.placed.len() + puzzle.skipped.len(), words.len());
        for placed in &puzzle.placed {
            assert!(
                placed.reads_back(&puzzle.board),
                "s{i}: {} at {} going {}",
                placed.word,
                placed.start,
                placed.direction
            );
        }
        overwritten += puzzle
            .skipped
            .iter()
            .filter(|skipped| skipped.reason.is_overwritten())
            .count();
    }
    assert!(overwritten > 0);
}
