//! Tests for the minimax search.

mod common;

use common::{
    board, game_value, moves_played, mv, reachable_positions, searcher_for, self_play,
};
use minimax_tictactoe::{
    Board, Mark, Move, Outcome, ScoreTable, SearchError, Searcher, rules,
};
use std::collections::HashMap;

#[test]
fn test_empty_board_x_opens_center() {
    let searcher = Searcher::new(ScoreTable::standard(Mark::X));
    let mut b = Board::new();
    assert_eq!(searcher.choose_best_move(&mut b, 0), Ok(Move::CENTER));
    assert!(b.is_blank());
}

#[test]
fn test_completes_top_row() {
    // X at (0,0),(0,1); O at (1,0); X to move.
    let mut b = board("XX./O../...");
    let searcher = Searcher::new(ScoreTable::standard(Mark::X));
    assert_eq!(searcher.choose_best_move(&mut b, 3), Ok(mv(0, 2)));
}

#[test]
fn test_blocks_diagonal_threat() {
    // O at (0,0),(1,1); X at (0,1); X must block (2,2).
    let mut b = board("OX./.O./...");
    let searcher = Searcher::new(ScoreTable::standard(Mark::X));
    assert_eq!(searcher.choose_best_move(&mut b, 3), Ok(mv(2, 2)));
}

#[test]
fn test_mirrored_table_plays_o() {
    // Same shapes with marks swapped.
    let searcher = Searcher::new(ScoreTable::standard(Mark::O));
    let mut win = board("OO./X../...");
    assert_eq!(searcher.choose_best_move(&mut win, 3), Ok(mv(0, 2)));
    let mut block = board("XO./.X./...");
    assert_eq!(searcher.choose_best_move(&mut block, 3), Ok(mv(2, 2)));
}

#[test]
fn test_custom_scores_choose_same_moves() {
    let searcher = Searcher::new(ScoreTable::new(Mark::X, 1000, 7, -500).unwrap());
    let mut b = board("OX./.O./...");
    assert_eq!(searcher.choose_best_move(&mut b, 3), Ok(mv(2, 2)));
}

#[test]
fn test_terminal_board_is_precondition_violation() {
    let searcher = Searcher::new(ScoreTable::standard(Mark::O));
    let mut won = board("XXX/OO./...");
    let before = won;
    assert_eq!(
        searcher.choose_best_move(&mut won, 5),
        Err(SearchError::GameOver(Outcome::Win(Mark::X)))
    );
    assert_eq!(won, before);
    let mut drawn = board("XOX/XOO/OXX");
    assert_eq!(
        searcher.best_score(&mut drawn),
        Err(SearchError::GameOver(Outcome::Draw))
    );
}

#[test]
fn test_every_reachable_position() {
    let mut memo = HashMap::new();
    let positions = reachable_positions();

    for position in positions.iter().filter(|p| !p.evaluate().is_terminal()) {
        let searcher = searcher_for(position);
        let me = searcher.computer();
        let mut working = *position;

        let chosen = searcher
            .choose_best_move(&mut working, moves_played(position))
            .unwrap();

        // Board comes back untouched.
        assert_eq!(working, *position);

        // Legal.
        assert!(position.is_empty(chosen), "{position}\nchose {chosen}");

        // Optimal: the reply position is as good as the position itself.
        let mut after = *position;
        after.place(chosen, me).unwrap();
        assert_eq!(
            -game_value(&after, &mut memo),
            game_value(position, &mut memo),
            "{position}\nchose {chosen}"
        );

        // Takes an immediate win when one exists.
        let wins = rules::threats(position, me);
        if let Some(first) = wins.first() {
            assert_eq!(chosen, *first, "{position}");
            continue;
        }

        // Blocks a lone threat.
        let threats = rules::threats(position, me.opponent());
        if threats.len() == 1 {
            assert_eq!(chosen, threats[0], "{position}");
        }
    }
}

#[test]
fn test_minimax_leaves_board_untouched() {
    for position in reachable_positions().iter().step_by(7) {
        let searcher = searcher_for(position);
        let mut working = *position;
        let _ = searcher.minimax(&mut working, 0, true);
        assert_eq!(working, *position);
        let _ = searcher.minimax(&mut working, 2, false);
        assert_eq!(working, *position);
        let _ = searcher.score_moves(&mut working);
        assert_eq!(working, *position);
    }
}

#[test]
fn test_best_score_matches_minimax_of_chosen_move() {
    let mut b = board("X../.O./...");
    let before = b;
    let searcher = searcher_for(&b);
    let best = searcher.best_score(&mut b).unwrap();
    let chosen = searcher.choose_best_move(&mut b, 2).unwrap();
    b.place(chosen, searcher.computer()).unwrap();
    assert_eq!(searcher.minimax(&mut b, 0, false), best);
    b.clear(chosen);
    assert_eq!(b, before);
}

#[test]
fn test_self_play_from_empty_is_draw() {
    let (end, outcome) = self_play(Board::new(), 0);
    assert_eq!(outcome, Outcome::Draw, "\n{end}");
    assert_eq!(end.get(Move::CENTER), minimax_tictactoe::Cell::Occupied(Mark::X));
}

#[test]
fn test_self_play_after_any_opening_is_draw() {
    for opening in Move::ALL {
        let mut start = Board::new();
        start.place(opening, Mark::X).unwrap();
        let (end, outcome) = self_play(start, 1);
        assert_eq!(outcome, Outcome::Draw, "opening {opening}\n{end}");
    }
}

#[test]
fn test_minimax_from_every_opening_is_drawn() {
    let searcher = Searcher::new(ScoreTable::standard(Mark::X));
    let mut b = Board::new();
    let scored = searcher.score_moves(&mut b).unwrap();
    assert_eq!(scored.len(), 9);
    assert!(scored.iter().all(|s| s.score == 0), "{scored:?}");
}
