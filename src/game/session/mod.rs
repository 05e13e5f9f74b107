//! Interaction state machine
//!
//! [`GameSession`] turns board clicks, promotion choices and automated-turn
//! ticks into moves applied through a [`RulesEngine`]. It owns the current
//! position together with everything the player sees about the game: the
//! selection, the pending promotion, the move history and the captured-piece
//! tally.
//!
//! # States
//!
//! | State | Entered when | Leaves on |
//! |-------|--------------|-----------|
//! | `Idle` | human to move, nothing selected | click on own piece |
//! | `PieceSelected` | own piece clicked | any click |
//! | `AwaitingPromotionChoice` | pawn clicked onto last rank | piece chosen, cancel |
//! | `AutomatedTurn` | automated side to move | [`GameSession::tick`] |
//! | `Terminal` | rules engine reports mate or draw | never |
//!
//! The phase enum carries the selection or the pending promotion, so the two
//! can never be present at once, and neither can exist outside the human's
//! turn.
//!
//! Every applied move appends exactly one [`MoveRecord`] and toggles the turn
//! owner exactly once; rejected attempts change neither.

use crate::game::ai::MoveSelector;
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{
    is_promotion_move, CapturedPieces, MoveHistory, MoveRecord, PendingPromotion, Selection,
};
use crate::game::rules::RulesEngine;
use crate::game::types::{
    BoardSquare, ChessMove, GameOutcome, Piece, PieceColor, PromotionPiece, TurnOwner,
};
use crate::input::{BoardGeometry, InputEvent};
use tracing::{debug, error, info};

#[cfg(test)]
mod tests;

/// Observable state of the session, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Idle,
    PieceSelected,
    AwaitingPromotionChoice,
    AutomatedTurn,
    Terminal,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    PieceSelected(Selection),
    AwaitingPromotionChoice(PendingPromotion),
    AutomatedTurn,
    Terminal(GameOutcome),
}

impl Phase {
    fn state(&self) -> InteractionState {
        match self {
            Phase::Idle => InteractionState::Idle,
            Phase::PieceSelected(_) => InteractionState::PieceSelected,
            Phase::AwaitingPromotionChoice(_) => InteractionState::AwaitingPromotionChoice,
            Phase::AutomatedTurn => InteractionState::AutomatedTurn,
            Phase::Terminal(_) => InteractionState::Terminal,
        }
    }
}

/// What a single input or tick did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Nothing changed
    Ignored,
    Selected {
        square: BoardSquare,
        destinations: Vec<BoardSquare>,
    },
    Deselected,
    /// A pawn move is waiting for the promotion piece
    PromotionRequested(PendingPromotion),
    PromotionCancelled,
    /// A move was applied and recorded
    MoveCommitted(MoveRecord),
    /// The attempted move was refused; nothing was applied
    MoveRejected(ChessMove),
    /// The quit signal arrived; the session itself is unchanged
    QuitRequested,
}

/// One game between the human and the automated side
#[derive(Debug)]
pub struct GameSession<R: RulesEngine, S: MoveSelector> {
    rules: R,
    selector: S,
    position: R::Position,
    human_color: PieceColor,
    turn_owner: TurnOwner,
    phase: Phase,
    history: MoveHistory,
    captured: CapturedPieces,
    turn_toggles: usize,
}

impl<R: RulesEngine, S: MoveSelector> GameSession<R, S> {
    /// New game from the standard starting position
    pub fn new(rules: R, selector: S, human_color: PieceColor) -> Self {
        let position = rules.starting_position();
        Self::with_position(rules, selector, position, human_color)
    }

    /// New game from a FEN position
    pub fn from_fen(rules: R, selector: S, fen: &str, human_color: PieceColor) -> GameResult<Self> {
        let position = rules.position_from_fen(fen)?;
        Ok(Self::with_position(rules, selector, position, human_color))
    }

    /// New game from an arbitrary position
    ///
    /// The human owns the turn if the side to move is `human_color`. A
    /// position that is already finished starts out `Terminal`.
    pub fn with_position(rules: R, selector: S, position: R::Position, human_color: PieceColor) -> Self {
        let turn_owner = if rules.side_to_move(&position) == human_color {
            TurnOwner::Human
        } else {
            TurnOwner::Automated
        };
        let mut session = Self {
            rules,
            selector,
            position,
            human_color,
            turn_owner,
            phase: Phase::Idle,
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            turn_toggles: 0,
        };
        session.phase = session.phase_for_turn();
        session.refresh_terminal();
        info!(
            "[SESSION] New game, human plays {}, {} to move, opponent: {}",
            human_color,
            session.side_to_move(),
            session.selector.name()
        );
        session
    }

    // ------------------------------------------------------------------
    // Read accessors

    pub fn state(&self) -> InteractionState {
        self.phase.state()
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            Phase::PieceSelected(selection) => Some(selection),
            _ => None,
        }
    }

    /// Destinations of the selected piece, empty without a selection
    pub fn legal_destinations(&self) -> &[BoardSquare] {
        self.selection()
            .map(|s| s.destinations.as_slice())
            .unwrap_or(&[])
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        match &self.phase {
            Phase::AwaitingPromotionChoice(pending) => Some(*pending),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match &self.phase {
            Phase::Terminal(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn turn_owner(&self) -> TurnOwner {
        self.turn_owner
    }

    /// How many times the turn owner has changed hands
    pub fn turn_toggles(&self) -> usize {
        self.turn_toggles
    }

    pub fn human_color(&self) -> PieceColor {
        self.human_color
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.rules.side_to_move(&self.position)
    }

    pub fn piece_at(&self, square: BoardSquare) -> Option<Piece> {
        self.rules.piece_at(&self.position, square)
    }

    /// Every occupied square, a1 first
    pub fn pieces(&self) -> Vec<(BoardSquare, Piece)> {
        BoardSquare::all()
            .filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
            .collect()
    }

    pub fn position(&self) -> &R::Position {
        &self.position
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    // ------------------------------------------------------------------
    // Transitions

    /// Feed one input event, mapping pointer coordinates through `geometry`
    pub fn handle_input(&mut self, event: InputEvent, geometry: &BoardGeometry) -> SessionEvent {
        match event {
            InputEvent::PointerDown { x, y } => {
                if let Phase::AwaitingPromotionChoice(pending) = &self.phase {
                    return match geometry.promotion_choice_at(pending.to, x, y) {
                        Some(piece) => self.choose_promotion(piece),
                        None => SessionEvent::Ignored,
                    };
                }
                match geometry.square_at(x, y) {
                    Some(square) => self.click_square(square),
                    None => self.clear_selection(),
                }
            }
            InputEvent::CancelPromotion => self.cancel_promotion(),
            InputEvent::Quit => SessionEvent::QuitRequested,
        }
    }

    /// A click on `square`
    pub fn click_square(&mut self, square: BoardSquare) -> SessionEvent {
        match &self.phase {
            Phase::Idle => self.try_select(square),
            Phase::PieceSelected(selection) => {
                let from = selection.square;
                if selection.is_destination(square) {
                    self.attempt_human_move(from, square)
                } else if square != from && self.is_own_piece(square) {
                    self.try_select(square)
                } else {
                    self.clear_selection()
                }
            }
            Phase::AwaitingPromotionChoice(_) | Phase::AutomatedTurn | Phase::Terminal(_) => {
                SessionEvent::Ignored
            }
        }
    }

    /// Complete the pending promotion with `piece`
    pub fn choose_promotion(&mut self, piece: PromotionPiece) -> SessionEvent {
        let Phase::AwaitingPromotionChoice(pending) = &self.phase else {
            return SessionEvent::Ignored;
        };
        let chess_move = pending.to_move(piece);
        debug!("[SESSION] Promoting on {} to {}", pending.to, piece.name());
        if self.rules.is_legal(&self.position, chess_move) {
            self.commit(chess_move, TurnOwner::Human)
        } else {
            debug!("[SESSION] Promotion {} refused", chess_move);
            self.phase = Phase::Idle;
            SessionEvent::MoveRejected(chess_move)
        }
    }

    /// Abandon the pending promotion, leaving the pawn where it was
    pub fn cancel_promotion(&mut self) -> SessionEvent {
        if matches!(self.phase, Phase::AwaitingPromotionChoice(_)) {
            debug!("[SESSION] Promotion cancelled");
            self.phase = Phase::Idle;
            SessionEvent::PromotionCancelled
        } else {
            SessionEvent::Ignored
        }
    }

    /// Play the automated side's move if it is its turn
    ///
    /// Called once per frame; plays at most one move.
    pub fn tick(&mut self) -> SessionEvent {
        if !matches!(self.phase, Phase::AutomatedTurn) {
            return SessionEvent::Ignored;
        }
        let legal_moves = self.rules.legal_moves(&self.position);
        match self.selector.select(&legal_moves) {
            Ok(chess_move) => {
                debug!(
                    "[AI] {} picked {} from {} legal moves",
                    self.selector.name(),
                    chess_move,
                    legal_moves.len()
                );
                self.commit(chess_move, TurnOwner::Automated)
            }
            Err(e) => {
                error!("[AI] Move selection failed: {}", e);
                self.refresh_terminal();
                SessionEvent::Ignored
            }
        }
    }

    // ------------------------------------------------------------------
    // Internals

    fn is_own_piece(&self, square: BoardSquare) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color == self.human_color)
    }

    fn try_select(&mut self, square: BoardSquare) -> SessionEvent {
        if !self.is_own_piece(square) {
            return SessionEvent::Ignored;
        }
        let destinations = self.rules.legal_destinations(&self.position, square);
        debug!(
            "[SESSION] Selected {} with {} destinations",
            square,
            destinations.len()
        );
        self.phase = Phase::PieceSelected(Selection::new(square, destinations.clone()));
        SessionEvent::Selected {
            square,
            destinations,
        }
    }

    fn clear_selection(&mut self) -> SessionEvent {
        if matches!(self.phase, Phase::PieceSelected(_)) {
            self.phase = Phase::Idle;
            SessionEvent::Deselected
        } else {
            SessionEvent::Ignored
        }
    }

    fn attempt_human_move(&mut self, from: BoardSquare, to: BoardSquare) -> SessionEvent {
        if let Some(piece) = self.piece_at(from) {
            if is_promotion_move(piece.piece_type, piece.color, to) {
                let pending = PendingPromotion::new(from, to, piece.color);
                debug!("[SESSION] Promotion pending on {}", to);
                self.phase = Phase::AwaitingPromotionChoice(pending);
                return SessionEvent::PromotionRequested(pending);
            }
        }

        let chess_move = ChessMove::new(from, to);
        if self.rules.is_legal(&self.position, chess_move) {
            self.commit(chess_move, TurnOwner::Human)
        } else {
            debug!("[SESSION] Move {} refused", chess_move);
            self.phase = Phase::Idle;
            SessionEvent::MoveRejected(chess_move)
        }
    }

    /// Apply, record and hand the turn over in one step
    fn commit(&mut self, chess_move: ChessMove, owner: TurnOwner) -> SessionEvent {
        let mover = self.side_to_move();
        let notation = match self.rules.to_notation(&self.position, chess_move) {
            Ok(notation) => notation,
            Err(e) => return self.reject(chess_move, e),
        };
        let captured = self.rules.captured_piece(&self.position, chess_move);
        if let Err(e) = self.rules.apply(&mut self.position, chess_move) {
            return self.reject(chess_move, e);
        }

        let record = self
            .history
            .record(mover, notation, captured, chess_move, owner);
        if let Some(piece) = captured {
            self.captured.add_capture(piece);
        }
        self.turn_owner = self.turn_owner.toggled();
        self.turn_toggles += 1;
        self.phase = self.phase_for_turn();
        info!("[SESSION] {}", record.display_line());
        self.refresh_terminal();

        SessionEvent::MoveCommitted(record)
    }

    fn reject(&mut self, chess_move: ChessMove, e: GameError) -> SessionEvent {
        error!("[SESSION] Rules engine rejected {}: {}", chess_move, e);
        self.phase = self.phase_for_turn();
        SessionEvent::MoveRejected(chess_move)
    }

    fn phase_for_turn(&self) -> Phase {
        match self.turn_owner {
            TurnOwner::Human => Phase::Idle,
            TurnOwner::Automated => Phase::AutomatedTurn,
        }
    }

    fn refresh_terminal(&mut self) {
        if let Some(outcome) = self.rules.outcome(&self.position) {
            match outcome {
                GameOutcome::Checkmate { winner } => {
                    info!("[SESSION] Checkmate, {} wins", winner)
                }
                GameOutcome::Draw(reason) => info!("[SESSION] Draw by {}", reason.description()),
            }
            self.phase = Phase::Terminal(outcome);
        }
    }
}
