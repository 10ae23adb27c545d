//! Domain-level error type used across the engine.
//!
//! This error type is transport- and UI-agnostic. Orchestration layers
//! embedding the engine should convert `DomainError` into their own error
//! surface ("not your turn yet" feedback and the like) rather than leak it.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds distinguish sequencing mistakes the caller can correct
/// (play again later, finish the trick first) from misuse that indicates a
/// bug in the driving code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// The current trick still needs cards before it can be resolved.
    TrickNotDone,
    /// The trick already holds four cards; no further plays accepted.
    TrickAlreadyDone,
    /// The seat has already put a card into this trick.
    SeatAlreadyPlayed,
    /// The seat is not part of the trick's play order.
    SeatNotAtTable,
    /// The seat tried to play before the seats ahead of it.
    OutOfTurn,
    /// The card is not among the seat's held cards.
    CardNotInHand,
    /// `deal` was invoked on a hand that has already been dealt.
    AlreadyDealt,
    /// The hand has not been dealt yet.
    NotDealt,
    /// All thirteen tricks have been played.
    HandDone,
    /// `pop_random` on a deck with no cards remaining.
    EmptyDeck,
    /// A seat value outside the four table positions.
    InvalidSeat,
    /// The same seat appears more than once in a play order.
    DuplicateSeat,
    /// A card token failed to parse.
    ParseCard,
    Other(String),
}

/// Central domain error type (extend as needed).
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or sequencing rule violation.
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(ValidationKind::Other(_), d) => {
                write!(f, "validation error: {d}")
            }
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    /// The validation kind, for callers that branch on error class.
    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
