use crate::core::allocation::allocate_chips;
use crate::core::ranking::award_medals;
use crate::domain::model::{Chips, Player};
use crate::utils::error::{AppError, Result};

/// Chip accounting for one game: a fixed pool shared by a roster that
/// must add up to the pool after every committed round.
#[derive(Debug, Clone)]
pub struct Ledger {
    players: Vec<Player>,
    total_chips: Chips,
    total_rounds: u32,
    rounds_played: u32,
}

impl Ledger {
    /// Creates the roster from `(name, club)` pairs and deals the pool.
    pub fn new<I, N, C>(roster: I, total_chips: Chips, total_rounds: u32) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let roster: Vec<(N, C)> = roster.into_iter().collect();
        let shares = allocate_chips(total_chips, roster.len())?;

        let players = roster
            .iter()
            .zip(shares)
            .map(|((name, club), chips)| Player::new(name.as_ref(), club.as_ref(), chips))
            .collect();

        Ok(Self {
            players,
            total_chips,
            total_rounds,
            rounds_played: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn total_chips(&self) -> Chips {
        self.total_chips
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// 1-based number of the round to be played next.
    pub fn current_round(&self) -> u32 {
        self.rounds_played + 1
    }

    pub fn is_finished(&self) -> bool {
        self.rounds_played >= self.total_rounds
    }

    /// Rounds still to come after the current one; a player needs one chip
    /// for each of them.
    pub fn rounds_remaining(&self) -> Chips {
        Chips::from(self.total_rounds.saturating_sub(self.current_round()))
    }

    /// Chip count `player` would have after `result`, or
    /// [`AppError::ImpossibleResult`] if that leaves too few chips.
    pub fn check_result(&self, player: usize, result: Chips) -> Result<Chips> {
        let current = self.player(player)?;
        let required = self.rounds_remaining();
        let impossible = || AppError::ImpossibleResult {
            player: current.name.clone(),
            chips: current.chips,
            result,
            required,
        };

        let after = current.chips.checked_add(result).ok_or_else(impossible)?;
        if after < required {
            return Err(impossible());
        }
        Ok(after)
    }

    pub fn chips_in_play(&self) -> Chips {
        self.players.iter().map(|p| p.chips).sum()
    }

    pub fn verify_total(&self) -> Result<()> {
        let actual = self.chips_in_play();
        if actual != self.total_chips {
            return Err(AppError::ChipTotalMismatch {
                expected: self.total_chips,
                actual,
            });
        }
        Ok(())
    }

    /// Applies one result per player as a single round.
    ///
    /// Either every result is applied and the round counter advances, or
    /// the roster is restored to its state before the call.
    pub fn commit_round(&mut self, results: &[Chips]) -> Result<()> {
        if results.len() != self.players.len() {
            return Err(AppError::ResultCountMismatch {
                expected: self.players.len(),
                actual: results.len(),
            });
        }

        let snapshot = self.players.clone();
        if let Err(e) = self.apply_results(results) {
            tracing::debug!("Rolling back round {}: {}", self.current_round(), e);
            self.players = snapshot;
            return Err(e);
        }

        self.rounds_played += 1;
        tracing::debug!(
            "Round {} committed, {} chips in play",
            self.rounds_played,
            self.chips_in_play()
        );
        Ok(())
    }

    fn apply_results(&mut self, results: &[Chips]) -> Result<()> {
        for (index, result) in results.iter().enumerate() {
            let after = self.check_result(index, *result)?;
            self.players[index].chips = after;
        }
        self.verify_total()
    }

    /// Final medalists; the ledger's own roster is not modified.
    pub fn standings(&self) -> Vec<Player> {
        award_medals(&self.players)
    }

    fn player(&self, index: usize) -> Result<&Player> {
        self.players
            .get(index)
            .ok_or_else(|| AppError::invalid_input(format!("Ingen spelare med index {}", index)))
    }
}
