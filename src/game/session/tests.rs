use super::*;
use crate::game::ai::RandomMoveSelector;
use crate::game::rules::{ShakmatyRules, TrackedPosition};
use crate::game::types::{DrawReason, PieceType, PromotionPiece};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type TestSession = GameSession<ShakmatyRules, RandomMoveSelector>;

fn sq(name: &str) -> BoardSquare {
    name.parse().unwrap()
}

fn new_game(human: PieceColor) -> TestSession {
    GameSession::new(ShakmatyRules::new(), RandomMoveSelector::seeded(11), human)
}

fn from_fen(fen: &str) -> TestSession {
    GameSession::from_fen(
        ShakmatyRules::new(),
        RandomMoveSelector::seeded(11),
        fen,
        PieceColor::White,
    )
    .unwrap()
}

/// Pixel centre of a square on an unflipped 90px board
fn centre(square: BoardSquare) -> (f32, f32) {
    let geometry = BoardGeometry::default();
    let (x, y) = geometry.square_origin(square);
    (x + geometry.square_size / 2.0, y + geometry.square_size / 2.0)
}

#[test]
fn test_new_game_waits_for_human() {
    let session = new_game(PieceColor::White);
    assert_eq!(session.state(), InteractionState::Idle);
    assert_eq!(session.turn_owner(), TurnOwner::Human);
    assert!(session.selection().is_none());
    assert!(session.legal_destinations().is_empty());
    assert_eq!(session.pieces().len(), 32);
}

#[test]
fn test_human_plays_e4() {
    //! Start position, e2 then e4 gives one record and hands over the turn
    let mut session = new_game(PieceColor::White);

    let selected = session.click_square(sq("e2"));
    assert_eq!(
        selected,
        SessionEvent::Selected {
            square: sq("e2"),
            destinations: vec![sq("e3"), sq("e4")],
        }
    );
    assert_eq!(session.state(), InteractionState::PieceSelected);
    assert_eq!(session.legal_destinations(), &[sq("e3"), sq("e4")]);

    let SessionEvent::MoveCommitted(record) = session.click_square(sq("e4")) else {
        panic!("expected a committed move");
    };
    assert_eq!(record.turn, 1);
    assert_eq!(record.player, PieceColor::White);
    assert_eq!(record.notation, "e4");
    assert_eq!(record.captured, None);
    assert_eq!(record.owner, TurnOwner::Human);

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.turn_owner(), TurnOwner::Automated);
    assert_eq!(session.state(), InteractionState::AutomatedTurn);
    assert!(session.selection().is_none());
}

#[test]
fn test_automated_reply_comes_from_legal_moves() {
    let mut session = new_game(PieceColor::White);
    session.click_square(sq("d2"));
    session.click_square(sq("d4"));

    let legal = session.rules().legal_moves(session.position());
    let SessionEvent::MoveCommitted(reply) = session.tick() else {
        panic!("expected the automated side to move");
    };
    assert!(legal.contains(&reply.chess_move));
    assert_eq!(reply.player, PieceColor::Black);
    assert_eq!(reply.turn, 1);
    assert_eq!(reply.owner, TurnOwner::Automated);

    assert_eq!(session.state(), InteractionState::Idle);
    assert_eq!(session.turn_owner(), TurnOwner::Human);
    assert_eq!(session.turn_toggles(), 2);
}

#[test]
fn test_tick_does_nothing_on_human_turn() {
    let mut session = new_game(PieceColor::White);
    assert_eq!(session.tick(), SessionEvent::Ignored);
    assert!(session.history().is_empty());
}

#[test]
fn test_blocked_double_push_clears_selection() {
    //! Knight on e3 blocks the pawn; e4 is not a destination
    let mut session = from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");

    let selected = session.click_square(sq("e2"));
    assert!(matches!(selected, SessionEvent::Selected { ref destinations, .. } if destinations.is_empty()));

    assert_eq!(session.click_square(sq("e4")), SessionEvent::Deselected);
    assert_eq!(session.state(), InteractionState::Idle);
    assert!(session.history().is_empty());
    assert_eq!(session.turn_owner(), TurnOwner::Human);
    assert_eq!(session.turn_toggles(), 0);
}

#[test]
fn test_clicks_on_empty_or_enemy_squares_are_ignored() {
    let mut session = new_game(PieceColor::White);
    assert_eq!(session.click_square(sq("e4")), SessionEvent::Ignored);
    assert_eq!(session.click_square(sq("e7")), SessionEvent::Ignored);
    assert_eq!(session.state(), InteractionState::Idle);
}

#[test]
fn test_clicking_another_own_piece_reselects() {
    let mut session = new_game(PieceColor::White);
    session.click_square(sq("e2"));

    let event = session.click_square(sq("g1"));
    assert_eq!(
        event,
        SessionEvent::Selected {
            square: sq("g1"),
            destinations: vec![sq("f3"), sq("h3")],
        }
    );
    assert_eq!(session.selection().map(|s| s.square), Some(sq("g1")));
}

#[test]
fn test_clicking_selected_square_deselects() {
    let mut session = new_game(PieceColor::White);
    session.click_square(sq("b1"));
    assert_eq!(session.click_square(sq("b1")), SessionEvent::Deselected);
    assert!(session.selection().is_none());
}

#[test]
fn test_promotion_waits_for_choice() {
    let mut session = from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");

    session.click_square(sq("e7"));
    let event = session.click_square(sq("e8"));
    assert_eq!(
        event,
        SessionEvent::PromotionRequested(PendingPromotion::new(
            sq("e7"),
            sq("e8"),
            PieceColor::White
        ))
    );
    assert_eq!(session.state(), InteractionState::AwaitingPromotionChoice);
    assert!(session.selection().is_none());
    assert!(session.history().is_empty());
    assert_eq!(
        session.piece_at(sq("e7")),
        Some(Piece::new(PieceType::Pawn, PieceColor::White))
    );

    // Board clicks are not choices
    assert_eq!(session.click_square(sq("e1")), SessionEvent::Ignored);

    let SessionEvent::MoveCommitted(record) = session.choose_promotion(PromotionPiece::Queen) else {
        panic!("expected the promotion to be applied");
    };
    assert!(record.notation.contains("=Q"));
    assert_eq!(
        session.piece_at(sq("e8")),
        Some(Piece::new(PieceType::Queen, PieceColor::White))
    );
    assert!(session.pending_promotion().is_none());
    assert_eq!(session.turn_owner(), TurnOwner::Automated);
}

#[test]
fn test_promotion_choice_by_pointer() {
    //! Second cell of the column under e8 is the rook
    let mut session = from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let geometry = BoardGeometry::default();

    let (x, y) = centre(sq("e7"));
    session.handle_input(InputEvent::PointerDown { x, y }, &geometry);
    let (x, y) = centre(sq("e8"));
    session.handle_input(InputEvent::PointerDown { x, y }, &geometry);
    assert_eq!(session.state(), InteractionState::AwaitingPromotionChoice);

    // Outside the column
    let ignored = session.handle_input(InputEvent::PointerDown { x: 10.0, y: 10.0 }, &geometry);
    assert_eq!(ignored, SessionEvent::Ignored);

    let (x, _) = centre(sq("e8"));
    let y = geometry.square_size * 1.5;
    let event = session.handle_input(InputEvent::PointerDown { x, y }, &geometry);
    assert!(matches!(event, SessionEvent::MoveCommitted(_)));
    assert_eq!(
        session.piece_at(sq("e8")),
        Some(Piece::new(PieceType::Rook, PieceColor::White))
    );
}

#[test]
fn test_cancel_promotion_keeps_pawn() {
    let mut session = from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    session.click_square(sq("e7"));
    session.click_square(sq("e8"));

    let event = session.handle_input(InputEvent::CancelPromotion, &BoardGeometry::default());
    assert_eq!(event, SessionEvent::PromotionCancelled);
    assert_eq!(session.state(), InteractionState::Idle);
    assert!(session.history().is_empty());
    assert_eq!(session.turn_owner(), TurnOwner::Human);
    assert_eq!(
        session.piece_at(sq("e7")),
        Some(Piece::new(PieceType::Pawn, PieceColor::White))
    );
}

#[test]
fn test_checkmate_is_terminal_and_absorbing() {
    let mut session = from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    session.click_square(sq("a1"));
    let SessionEvent::MoveCommitted(record) = session.click_square(sq("a8")) else {
        panic!("expected the mating move to be applied");
    };
    assert_eq!(record.notation, "Ra8#");

    assert_eq!(session.state(), InteractionState::Terminal);
    assert_eq!(
        session.outcome(),
        Some(GameOutcome::Checkmate {
            winner: PieceColor::White
        })
    );

    assert_eq!(session.tick(), SessionEvent::Ignored);
    assert_eq!(session.click_square(sq("g1")), SessionEvent::Ignored);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_finished_position_starts_terminal() {
    let session = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(session.state(), InteractionState::Terminal);
    assert!(matches!(session.outcome(), Some(GameOutcome::Draw(_))));
}

#[test]
fn test_en_passant_enters_tally() {
    let mut session = from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    session.click_square(sq("e5"));
    let SessionEvent::MoveCommitted(record) = session.click_square(sq("d6")) else {
        panic!("expected en passant to be applied");
    };
    assert_eq!(record.notation, "exd6");
    assert_eq!(
        record.captured,
        Some(Piece::new(PieceType::Pawn, PieceColor::Black))
    );
    assert_eq!(session.captured().symbols(PieceColor::White), "p");
    assert_eq!(session.piece_at(sq("d5")), None);
}

#[test]
fn test_human_as_black_waits_for_opening_move() {
    let mut session = new_game(PieceColor::Black);
    assert_eq!(session.state(), InteractionState::AutomatedTurn);
    assert_eq!(session.turn_owner(), TurnOwner::Automated);

    // Own pieces cannot be picked before the opponent has moved
    assert_eq!(session.click_square(sq("e7")), SessionEvent::Ignored);

    let SessionEvent::MoveCommitted(record) = session.tick() else {
        panic!("expected White's automated opening move");
    };
    assert_eq!(record.player, PieceColor::White);
    assert_eq!(session.state(), InteractionState::Idle);

    let event = session.click_square(sq("e7"));
    assert!(matches!(event, SessionEvent::Selected { .. }));
}

#[test]
fn test_quit_leaves_state_alone() {
    let mut session = new_game(PieceColor::White);
    session.click_square(sq("e2"));
    let event = session.handle_input(InputEvent::Quit, &BoardGeometry::default());
    assert_eq!(event, SessionEvent::QuitRequested);
    assert_eq!(session.state(), InteractionState::PieceSelected);
}

#[test]
fn test_records_and_toggles_track_applied_moves() {
    //! Random human clicks against the random opponent until the game ends
    let mut session = new_game(PieceColor::White);
    let mut rng = StdRng::seed_from_u64(99);
    let mut applied = 0;

    for _ in 0..600 {
        let event = match session.state() {
            InteractionState::Terminal => break,
            InteractionState::AutomatedTurn => session.tick(),
            InteractionState::Idle => {
                let legal = session.rules().legal_moves(session.position());
                let chosen = legal[rng.random_range(0..legal.len())];
                session.click_square(chosen.from);
                match session.click_square(chosen.to) {
                    SessionEvent::PromotionRequested(_) => {
                        session.choose_promotion(chosen.promotion.unwrap_or(PromotionPiece::Queen))
                    }
                    other => other,
                }
            }
            other => panic!("unexpected resting state {other:?}"),
        };
        if matches!(event, SessionEvent::MoveCommitted(_)) {
            applied += 1;
        }

        assert_eq!(session.history().len(), applied);
        assert_eq!(session.turn_toggles(), applied);
        if session.selection().is_some() {
            assert_eq!(session.turn_owner(), TurnOwner::Human);
        }
    }

    assert!(applied > 0);
    for (index, record) in session.history().moves().iter().enumerate() {
        assert_eq!(record.turn, index / 2 + 1);
    }
}

#[test]
fn test_black_promotion_on_flipped_board() {
    //! Human plays Black; e2-e1 asks for a piece, the fourth menu cell is the knight
    let mut session = GameSession::from_fen(
        ShakmatyRules::new(),
        RandomMoveSelector::seeded(11),
        "4k3/8/8/8/8/P7/4p3/K7 b - - 0 1",
        PieceColor::Black,
    )
    .unwrap();
    let geometry = BoardGeometry::new(90.0, true);
    let click = |session: &mut TestSession, square: &str| {
        let (x, y) = geometry.square_origin(sq(square));
        session.handle_input(InputEvent::PointerDown { x: x + 45.0, y: y + 45.0 }, &geometry)
    };
    assert_eq!(session.state(), InteractionState::Idle);
    assert_eq!(PieceColor::Black.promotion_rank(), 0);

    click(&mut session, "e2");
    let event = click(&mut session, "e1");
    assert_eq!(
        event,
        SessionEvent::PromotionRequested(PendingPromotion::new(
            sq("e2"),
            sq("e1"),
            PieceColor::Black
        ))
    );

    // e1 is drawn in the top row when flipped, so the column hangs down from it
    let (left, top) = geometry.promotion_menu_origin(sq("e1"));
    assert_eq!((left, top), (270.0, 0.0));
    let knight_cell = InputEvent::PointerDown {
        x: left + 45.0,
        y: top + 3.0 * 90.0 + 45.0,
    };
    let SessionEvent::MoveCommitted(record) = session.handle_input(knight_cell, &geometry) else {
        panic!("expected the promotion to be applied");
    };
    assert_eq!(record.player, PieceColor::Black);
    assert_eq!(record.notation, "e1=N");
    assert_eq!(
        session.piece_at(sq("e1")),
        Some(Piece::new(PieceType::Knight, PieceColor::Black))
    );
    assert_eq!(session.piece_at(sq("e2")), None);
    assert_eq!(session.state(), InteractionState::AutomatedTurn);
}

/// Where [`RefusingRules`] fails on its refused move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refusal {
    Legality,
    Notation,
    Apply,
}

/// Standard rules that fail on one particular move
#[derive(Debug)]
struct RefusingRules {
    inner: ShakmatyRules,
    refused: ChessMove,
    refusal: Refusal,
}

impl RefusingRules {
    fn new(refused: ChessMove, refusal: Refusal) -> Self {
        Self {
            inner: ShakmatyRules::new(),
            refused,
            refusal,
        }
    }

    fn refuses(&self, chess_move: ChessMove, refusal: Refusal) -> bool {
        chess_move == self.refused && refusal == self.refusal
    }
}

impl RulesEngine for RefusingRules {
    type Position = TrackedPosition;

    fn starting_position(&self) -> TrackedPosition {
        self.inner.starting_position()
    }

    fn position_from_fen(&self, fen: &str) -> GameResult<TrackedPosition> {
        self.inner.position_from_fen(fen)
    }

    fn legal_moves(&self, position: &TrackedPosition) -> Vec<ChessMove> {
        self.inner.legal_moves(position)
    }

    fn is_legal(&self, position: &TrackedPosition, chess_move: ChessMove) -> bool {
        !self.refuses(chess_move, Refusal::Legality) && self.inner.is_legal(position, chess_move)
    }

    fn apply(&self, position: &mut TrackedPosition, chess_move: ChessMove) -> GameResult<()> {
        if self.refuses(chess_move, Refusal::Apply) {
            return Err(GameError::IllegalMove(chess_move.to_string()));
        }
        self.inner.apply(position, chess_move)
    }

    fn piece_at(&self, position: &TrackedPosition, square: BoardSquare) -> Option<Piece> {
        self.inner.piece_at(position, square)
    }

    fn side_to_move(&self, position: &TrackedPosition) -> PieceColor {
        self.inner.side_to_move(position)
    }

    fn is_checkmate(&self, position: &TrackedPosition) -> bool {
        self.inner.is_checkmate(position)
    }

    fn draw_reason(&self, position: &TrackedPosition) -> Option<DrawReason> {
        self.inner.draw_reason(position)
    }

    fn to_notation(&self, position: &TrackedPosition, chess_move: ChessMove) -> GameResult<String> {
        if self.refuses(chess_move, Refusal::Notation) {
            return Err(GameError::IllegalMove(chess_move.to_string()));
        }
        self.inner.to_notation(position, chess_move)
    }

    fn captured_piece(&self, position: &TrackedPosition, chess_move: ChessMove) -> Option<Piece> {
        self.inner.captured_piece(position, chess_move)
    }
}

fn refusing_session(
    fen: &str,
    refused: ChessMove,
    refusal: Refusal,
) -> GameSession<RefusingRules, RandomMoveSelector> {
    GameSession::from_fen(
        RefusingRules::new(refused, refusal),
        RandomMoveSelector::seeded(11),
        fen,
        PieceColor::White,
    )
    .unwrap()
}

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_refused_destination_click_is_rejected() {
    let e4 = ChessMove::new(sq("e2"), sq("e4"));
    for refusal in [Refusal::Legality, Refusal::Notation, Refusal::Apply] {
        let mut session = refusing_session(START_FEN, e4, refusal);

        let selected = session.click_square(sq("e2"));
        assert!(
            matches!(selected, SessionEvent::Selected { ref destinations, .. } if destinations.contains(&sq("e4"))),
            "{refusal:?}"
        );
        assert_eq!(session.click_square(sq("e4")), SessionEvent::MoveRejected(e4), "{refusal:?}");

        assert_eq!(session.state(), InteractionState::Idle, "{refusal:?}");
        assert!(session.history().is_empty(), "{refusal:?}");
        assert_eq!(session.turn_toggles(), 0, "{refusal:?}");
        assert_eq!(session.turn_owner(), TurnOwner::Human, "{refusal:?}");
        assert_eq!(
            session.piece_at(sq("e2")),
            Some(Piece::new(PieceType::Pawn, PieceColor::White)),
            "{refusal:?}"
        );

        // Other moves still go through
        session.click_square(sq("d2"));
        assert!(matches!(session.click_square(sq("d4")), SessionEvent::MoveCommitted(_)));
        assert_eq!(session.turn_toggles(), 1);
    }
}

#[test]
fn test_refused_promotion_choice_is_rejected() {
    let queen = ChessMove::with_promotion(sq("e7"), sq("e8"), PromotionPiece::Queen);
    for refusal in [Refusal::Legality, Refusal::Notation, Refusal::Apply] {
        let mut session = refusing_session("8/4P3/8/8/8/8/k7/4K3 w - - 0 1", queen, refusal);
        session.click_square(sq("e7"));
        assert!(matches!(
            session.click_square(sq("e8")),
            SessionEvent::PromotionRequested(_)
        ));

        assert_eq!(
            session.choose_promotion(PromotionPiece::Queen),
            SessionEvent::MoveRejected(queen),
            "{refusal:?}"
        );
        assert_eq!(session.state(), InteractionState::Idle, "{refusal:?}");
        assert!(session.pending_promotion().is_none(), "{refusal:?}");
        assert!(session.history().is_empty(), "{refusal:?}");
        assert_eq!(session.turn_toggles(), 0, "{refusal:?}");
        assert_eq!(
            session.piece_at(sq("e7")),
            Some(Piece::new(PieceType::Pawn, PieceColor::White)),
            "{refusal:?}"
        );
    }
}
