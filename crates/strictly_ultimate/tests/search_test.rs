//! Integration tests for minimax and alpha-beta search.

use strictly_ultimate::players::{AlphaBetaPlayer, MinMaxPlayer, Player as _, RandomPlayer};
use strictly_ultimate::search::{SearchKind, WIN, alphabeta, minimax};
use strictly_ultimate::{GameStatus, Move, Player, Position, UltimateGame};

/// A game one move away from X taking the top row of boards.
fn meta_win_prefix() -> Vec<Move> {
    [
        ((0, 2), (1, 0)),
        ((1, 0), (0, 1)),
        ((0, 1), (1, 0)),
        ((1, 0), (0, 2)),
        ((0, 2), (1, 2)),
        ((1, 2), (0, 1)),
        ((0, 1), (1, 2)),
        ((1, 2), (0, 2)),
        ((0, 2), (1, 1)),
        ((1, 1), (0, 2)),
        ((0, 0), (1, 1)),
        ((1, 1), (0, 0)),
        ((0, 0), (1, 2)),
        ((1, 2), (0, 0)),
        ((0, 0), (1, 0)),
        ((1, 0), (0, 0)),
    ]
    .into_iter()
    .map(|(board, cell)| Move::from_coords(board, cell).expect("coordinates in range"))
    .collect()
}

/// Positions reached by a seeded random game, one per ply.
fn random_positions(seed: u64, plies: usize) -> Vec<UltimateGame> {
    let mut game = UltimateGame::new();
    let mut player = RandomPlayer::with_seed("random", seed);
    let mut positions = Vec::new();
    while positions.len() < plies && !game.is_over() {
        positions.push(game.clone());
        let mv = player.get_move(&mut game).expect("game in progress");
        game.play(mv).expect("legal move");
    }
    positions
}

#[test]
fn test_both_searches_take_the_winning_move() {
    let mut game = UltimateGame::replay(&meta_win_prefix()).expect("legal replay");
    assert_eq!(game.to_move(), Player::X);

    for kind in [SearchKind::MinMax, SearchKind::AlphaBeta] {
        let before = game.clone();
        let result = kind.search(&mut game, 0).expect("moves available");
        assert_eq!(game, before, "{kind} restored the game");
        assert_eq!(result.value, WIN, "{kind}");

        let mut after = game.clone();
        let status = after.play(result.best_move).expect("legal move");
        assert_eq!(status, GameStatus::Won(Player::X), "{kind}");
    }
}

#[test]
fn test_search_players_take_the_winning_move() {
    let prefix = meta_win_prefix();
    let mut game = UltimateGame::replay(&prefix).expect("legal replay");

    let mut minmax = MinMaxPlayer::new("minmax", 1);
    let mut alphabeta = AlphaBetaPlayer::new("alphabeta", 2);

    for mv in [
        minmax.get_move(&mut game).expect("move"),
        alphabeta.get_move(&mut game).expect("move"),
    ] {
        let mut after = game.clone();
        assert_eq!(after.play(mv), Ok(GameStatus::Won(Player::X)));
    }
}

#[test]
fn test_alphabeta_prunes_the_opening() {
    let mut game = UltimateGame::new();
    let mm = minimax::search(&mut game, 1).expect("moves available");
    let ab = alphabeta::search(&mut game, 1).expect("moves available");

    // 81 replies to search, 9 of which answer inside an 8-cell board.
    assert_eq!(mm.nodes, 81 + 9 * 8 + 72 * 9);
    assert_eq!(ab.value, mm.value);
    assert!(ab.nodes < mm.nodes);
}

#[test]
fn test_alphabeta_value_matches_minimax() {
    let mut pruned = 0;
    for seed in [1, 2, 3] {
        for mut game in random_positions(seed, 30) {
            let depths = if game.legal_moves().len() <= 9 {
                0..=2
            } else {
                0..=1
            };
            for depth in depths {
                let before = game.clone();
                let mm = minimax::search(&mut game, depth).expect("moves available");
                let ab = alphabeta::search(&mut game, depth).expect("moves available");

                assert_eq!(game, before);
                assert_eq!(ab.value, mm.value, "seed {seed} depth {depth}\n{game}");
                assert!(ab.nodes <= mm.nodes, "seed {seed} depth {depth}");
                if ab.nodes < mm.nodes {
                    pruned += 1;
                }
                assert!(game.can_play(ab.best_move));
                assert!(game.can_play(mm.best_move));
            }
        }
    }
    assert!(pruned > 0, "alpha-beta never cut a branch");
}

#[test]
fn test_alphabeta_best_move_achieves_its_value() {
    for mut game in random_positions(5, 20) {
        let result = alphabeta::search(&mut game, 1).expect("moves available");
        let mut child = game.clone();
        child.play(result.best_move).expect("legal move");
        let reply = minimax::search(&mut child, 0);

        // The opponent's best one-ply reply scores the negation of our value.
        match reply {
            Ok(reply) => assert_eq!(-reply.value, result.value),
            Err(_) => assert!(child.is_over()),
        }
    }
}

#[test]
fn test_minimax_counts_every_node() {
    // O is forced into the center board, which has 8 empty cells.
    let mut game = UltimateGame::replay(&[Move::new(Position::Center, Position::Center)])
        .expect("legal replay");
    let result = minimax::search(&mut game, 0).expect("moves available");
    assert_eq!(result.nodes, 8);

    let result = minimax::search(&mut game, 1).expect("moves available");
    let expected: u64 = game
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            child.play(mv).expect("legal move");
            1 + child.legal_moves().len() as u64
        })
        .sum();
    assert_eq!(result.nodes, expected);
}
