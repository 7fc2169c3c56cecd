//! Move validation and execution.
//!
//! A move relocates a contiguous face-up run ending at the top of a source
//! pile onto a destination pile. Validation never mutates; execution only
//! runs after validation passes, so a rejected move leaves the board
//! untouched.

use serde::{Deserialize, Serialize};

use crate::board::{is_valid_run, Board, PileId, PileKind};
use crate::core::Rank;

/// A request to relocate `count` cards starting at `offset` in `source`
/// onto `dest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: PileId,
    pub offset: usize,
    pub count: usize,
    pub dest: PileId,
}

impl MoveRequest {
    /// A single-card move from the top of `source` onto `dest`.
    #[must_use]
    pub fn top_card(board: &Board, source: PileId, dest: PileId) -> Self {
        let len = board.pile(source).len();
        Self {
            source,
            offset: len.saturating_sub(1),
            count: 1,
            dest,
        }
    }
}

/// Which placement rule a move request broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveViolation {
    /// The source pile has no cards.
    EmptySource,
    /// The requested cards are not a face-up run ending at the source top.
    InvalidRun,
    /// Only a King-topped run may land on an empty tableau.
    NeedsKing,
    /// The run bottom does not descend with alternating color onto the
    /// destination top.
    TableauSequence,
    /// Foundations accept one card at a time.
    MultiCardToFoundation,
    /// Foundations build from the Ace upward within one suit.
    FoundationSequence,
    /// Stock, waste, and the source itself are never valid destinations.
    ForbiddenDestination,
}

impl std::fmt::Display for MoveViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MoveViolation::EmptySource => "source pile is empty",
            MoveViolation::InvalidRun => "marked cards are not a movable run",
            MoveViolation::NeedsKing => "only a king may start an empty tableau",
            MoveViolation::TableauSequence => "card does not continue the tableau sequence",
            MoveViolation::MultiCardToFoundation => "foundations take one card at a time",
            MoveViolation::FoundationSequence => "card does not continue the foundation",
            MoveViolation::ForbiddenDestination => "cards cannot be placed there",
        };
        f.write_str(msg)
    }
}

/// Check a move request against the placement rules without mutating.
pub fn validate_move(board: &Board, request: &MoveRequest) -> Result<(), MoveViolation> {
    let source = board.pile(request.source);

    if request.dest == request.source {
        return Err(MoveViolation::ForbiddenDestination);
    }
    if source.is_empty() {
        return Err(MoveViolation::EmptySource);
    }
    if request.count == 0 || request.offset + request.count != source.len() {
        // The run must be contiguous and end at the exposed top.
        return Err(MoveViolation::InvalidRun);
    }

    let run = &source.cards()[request.offset..];
    let run_ok = match source.kind() {
        PileKind::Tableau => is_valid_run(run),
        _ => run.len() == 1 && run[0].is_face_up(),
    };
    if !run_ok {
        return Err(MoveViolation::InvalidRun);
    }

    let bottom = run[0];
    let dest = board.pile(request.dest);
    match dest.kind() {
        PileKind::Stock | PileKind::Waste => Err(MoveViolation::ForbiddenDestination),
        PileKind::Tableau => match dest.top() {
            None if bottom.rank == Rank::KING => Ok(()),
            None => Err(MoveViolation::NeedsKing),
            Some(top) if top.is_face_up()
                && top.rank.pred() == Some(bottom.rank)
                && top.color() != bottom.color() =>
            {
                Ok(())
            }
            Some(_) => Err(MoveViolation::TableauSequence),
        },
        PileKind::Foundation => {
            if request.count != 1 {
                return Err(MoveViolation::MultiCardToFoundation);
            }
            match dest.top() {
                None if bottom.rank == Rank::ACE => Ok(()),
                None => Err(MoveViolation::FoundationSequence),
                Some(top) if top.suit == bottom.suit && top.rank.succ() == Some(bottom.rank) => {
                    Ok(())
                }
                Some(_) => Err(MoveViolation::FoundationSequence),
            }
        }
    }
}

/// Validate and execute a move.
///
/// On success the run lands on the destination in its original order, and
/// a newly exposed tableau or waste card is turned face-up. On failure
/// nothing is mutated.
pub fn apply_move(board: &mut Board, request: &MoveRequest) -> Result<(), MoveViolation> {
    validate_move(board, request)?;

    let source = board.pile_mut(request.source);
    let run = source.take_run(request.offset);
    match source.kind() {
        // Expose the card beneath, flipping a buried tableau card or the
        // next waste card face-up.
        PileKind::Tableau | PileKind::Waste => {
            source.flip_top_up();
        }
        _ => {}
    }

    board.pile_mut(request.dest).append_run(run);

    log::trace!(
        "moved {} card(s) from {} to {}",
        request.count,
        request.source,
        request.dest
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Card, Rank, Suit};

    fn up(rank: Rank, suit: Suit) -> Card {
        Card::face_up(rank, suit)
    }

    /// These tests drive `validate_move` and `apply_move` directly, so the
    /// boards only hold the piles involved.
    fn board() -> Board {
        Board::empty()
    }

    #[test]
    fn test_king_onto_empty_tableau() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::KING, Suit::Spades));

        let request = MoveRequest::top_card(&b, PileId::tableau(0), PileId::tableau(1));
        assert_eq!(validate_move(&b, &request), Ok(()));
    }

    #[test]
    fn test_non_king_onto_empty_tableau_rejected() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::QUEEN, Suit::Spades));

        let request = MoveRequest::top_card(&b, PileId::tableau(0), PileId::tableau(1));
        assert_eq!(validate_move(&b, &request), Err(MoveViolation::NeedsKing));
    }

    #[test]
    fn test_tableau_sequence_rule() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::NINE, Suit::Clubs));
        b.pile_mut(PileId::tableau(1))
            .push(up(Rank::EIGHT, Suit::Hearts));
        b.pile_mut(PileId::tableau(2))
            .push(up(Rank::FIVE, Suit::Diamonds));

        // 8H onto 9C: descending, alternating. Fine.
        let good = MoveRequest::top_card(&b, PileId::tableau(1), PileId::tableau(0));
        assert_eq!(validate_move(&b, &good), Ok(()));

        // 5D onto 9C: wrong rank.
        let bad = MoveRequest::top_card(&b, PileId::tableau(2), PileId::tableau(0));
        assert_eq!(validate_move(&b, &bad), Err(MoveViolation::TableauSequence));
    }

    #[test]
    fn test_same_color_rejected() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::NINE, Suit::Clubs));
        b.pile_mut(PileId::tableau(1))
            .push(up(Rank::EIGHT, Suit::Spades));

        let request = MoveRequest::top_card(&b, PileId::tableau(1), PileId::tableau(0));
        assert_eq!(
            validate_move(&b, &request),
            Err(MoveViolation::TableauSequence)
        );
    }

    #[test]
    fn test_foundation_rules() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::ACE, Suit::Hearts));
        b.pile_mut(PileId::tableau(1))
            .push(up(Rank::TWO, Suit::Hearts));
        b.pile_mut(PileId::tableau(2))
            .push(up(Rank::TWO, Suit::Spades));

        let foundation = PileId::foundation(0);

        // Only an ace starts a foundation.
        let two_first = MoveRequest::top_card(&b, PileId::tableau(1), foundation);
        assert_eq!(
            validate_move(&b, &two_first),
            Err(MoveViolation::FoundationSequence)
        );

        let ace = MoveRequest::top_card(&b, PileId::tableau(0), foundation);
        assert_eq!(apply_move(&mut b, &ace), Ok(()));

        // Wrong suit on the established foundation.
        let off_suit = MoveRequest::top_card(&b, PileId::tableau(2), foundation);
        assert_eq!(
            validate_move(&b, &off_suit),
            Err(MoveViolation::FoundationSequence)
        );

        let two = MoveRequest::top_card(&b, PileId::tableau(1), foundation);
        assert_eq!(apply_move(&mut b, &two), Ok(()));
        assert_eq!(b.pile(foundation).len(), 2);
        assert_eq!(b.pile(foundation).foundation_suit(), Some(Suit::Hearts));
    }

    #[test]
    fn test_multi_card_to_foundation_rejected() {
        let mut b = board();
        let t = PileId::tableau(0);
        b.pile_mut(t).push(up(Rank::TWO, Suit::Hearts));
        b.pile_mut(t).push(up(Rank::ACE, Suit::Spades));

        let request = MoveRequest {
            source: t,
            offset: 0,
            count: 2,
            dest: PileId::foundation(0),
        };
        assert_eq!(
            validate_move(&b, &request),
            Err(MoveViolation::MultiCardToFoundation)
        );
    }

    #[test]
    fn test_stock_and_waste_are_forbidden_destinations() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::KING, Suit::Spades));

        for dest in [PileId::STOCK, PileId::WASTE] {
            let request = MoveRequest::top_card(&b, PileId::tableau(0), dest);
            assert_eq!(
                validate_move(&b, &request),
                Err(MoveViolation::ForbiddenDestination)
            );
        }
    }

    #[test]
    fn test_empty_source_rejected() {
        let b = board();
        let request = MoveRequest {
            source: PileId::tableau(0),
            offset: 0,
            count: 1,
            dest: PileId::tableau(1),
        };
        assert_eq!(validate_move(&b, &request), Err(MoveViolation::EmptySource));
    }

    #[test]
    fn test_run_must_end_at_top() {
        let mut b = board();
        let t = PileId::tableau(0);
        b.pile_mut(t).push(up(Rank::NINE, Suit::Clubs));
        b.pile_mut(t).push(up(Rank::EIGHT, Suit::Hearts));
        b.pile_mut(t).push(up(Rank::SEVEN, Suit::Spades));

        // Offset 0, count 2 leaves the 7S stranded.
        let request = MoveRequest {
            source: t,
            offset: 0,
            count: 2,
            dest: PileId::tableau(1),
        };
        assert_eq!(validate_move(&b, &request), Err(MoveViolation::InvalidRun));
    }

    #[test]
    fn test_broken_run_rejected() {
        let mut b = board();
        let t = PileId::tableau(0);
        b.pile_mut(t).push(up(Rank::NINE, Suit::Clubs));
        b.pile_mut(t).push(up(Rank::FIVE, Suit::Hearts));
        b.pile_mut(PileId::tableau(1)).push(up(Rank::TEN, Suit::Hearts));

        let request = MoveRequest {
            source: t,
            offset: 0,
            count: 2,
            dest: PileId::tableau(1),
        };
        assert_eq!(validate_move(&b, &request), Err(MoveViolation::InvalidRun));
    }

    #[test]
    fn test_execution_flips_exposed_tableau_card() {
        let mut b = board();
        let t = PileId::tableau(0);
        b.pile_mut(t).push(Card::new(Rank::FOUR, Suit::Clubs)); // face-down
        b.pile_mut(t).push(up(Rank::KING, Suit::Spades));

        let request = MoveRequest::top_card(&b, t, PileId::tableau(1));
        assert_eq!(apply_move(&mut b, &request), Ok(()));

        let exposed = b.pile(t).top().unwrap();
        assert_eq!(exposed.rank, Rank::FOUR);
        assert!(exposed.is_face_up());
    }

    #[test]
    fn test_execution_preserves_run_order() {
        let mut b = board();
        let src = PileId::tableau(0);
        b.pile_mut(src).push(up(Rank::SEVEN, Suit::Hearts));
        b.pile_mut(src).push(up(Rank::SIX, Suit::Spades));
        b.pile_mut(PileId::tableau(1))
            .push(up(Rank::EIGHT, Suit::Clubs));

        let request = MoveRequest {
            source: src,
            offset: 0,
            count: 2,
            dest: PileId::tableau(1),
        };
        assert_eq!(apply_move(&mut b, &request), Ok(()));

        let dest = b.pile(PileId::tableau(1)).cards();
        assert_eq!(dest.len(), 3);
        assert_eq!(dest[1].rank, Rank::SEVEN);
        assert_eq!(dest[2].rank, Rank::SIX);
        assert!(b.pile(src).is_empty());
    }

    #[test]
    fn test_rejected_move_mutates_nothing() {
        let mut b = board();
        b.pile_mut(PileId::tableau(0))
            .push(up(Rank::FIVE, Suit::Diamonds));
        b.pile_mut(PileId::tableau(1))
            .push(up(Rank::NINE, Suit::Clubs));

        let before = b.clone();
        let request = MoveRequest::top_card(&b, PileId::tableau(0), PileId::tableau(1));
        assert!(apply_move(&mut b, &request).is_err());
        assert_eq!(b, before);
    }

    #[test]
    fn test_waste_source_exposes_next_card_face_up() {
        let mut b = board();
        b.pile_mut(PileId::WASTE)
            .push(Card::new(Rank::NINE, Suit::Clubs)); // buried, face-down
        b.pile_mut(PileId::WASTE).push(up(Rank::KING, Suit::Spades));

        let request = MoveRequest::top_card(&b, PileId::WASTE, PileId::tableau(0));
        assert_eq!(apply_move(&mut b, &request), Ok(()));

        // The next waste card surfaces face-up.
        assert!(b.pile(PileId::WASTE).top().unwrap().is_face_up());
    }
}
