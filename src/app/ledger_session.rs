use crate::adapters::console::Prompt;
use crate::config::GameConfig;
use crate::core::ledger::Ledger;
use crate::domain::model::{Chips, Player};
use crate::domain::ports::Console;
use crate::utils::error::{AppError, Result};

const NAME_PROMPT: &str = "Ange spelarens namn samt klubb (t.ex. \"Ingvar Infå\")";
const MENU_PROMPT: &str = "Skriv 1 för att börja nästa runda eller 2 för mellanrapport";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayRound,
    InterimReport,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().parse::<i64>() {
            Ok(1) => Ok(Self::PlayRound),
            Ok(2) => Ok(Self::InterimReport),
            _ => Err(AppError::invalid_input("Du måste skriva antingen 1 eller 2.")),
        }
    }
}

/// `"Ingvar Infå"` or `"Ingvar Andersson, Infå"` into a trimmed name and club.
pub fn parse_name_and_club(input: &str) -> Result<(String, String)> {
    let invalid =
        || AppError::invalid_input("Skriv spelarens namn och klubb, t.ex. \"Ingvar Infå\".");

    let (name, club) = match input.split_once(',') {
        Some((name, club)) => (name.trim(), club.trim()),
        None => {
            let parts: Vec<&str> = input.split_whitespace().collect();
            match parts.as_slice() {
                [name, club] => (*name, *club),
                _ => return Err(invalid()),
            }
        }
    };

    if name.is_empty() || club.is_empty() {
        return Err(invalid());
    }
    Ok((name.to_string(), club.to_string()))
}

pub fn parse_result(input: &str) -> Result<Chips> {
    input
        .trim()
        .parse::<Chips>()
        .map_err(|_| AppError::invalid_input("Du måste ange ett heltal."))
}

/// The interactive poker-night dialogue: roster setup, the round menu and
/// the final medal table.
pub struct LedgerSession<C: Console> {
    console: C,
    config: GameConfig,
}

impl<C: Console> LedgerSession<C> {
    pub fn new(console: C, config: GameConfig) -> Self {
        Self { console, config }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays the whole game and returns the medalists.
    pub fn run(&mut self) -> Result<Vec<Player>> {
        let mut ledger = self.create_ledger()?;
        tracing::info!(
            "Game started: {} players, {} rounds, {} chips",
            ledger.players().len(),
            ledger.total_rounds(),
            ledger.total_chips()
        );

        while !ledger.is_finished() {
            let answer = self.console.ask(MENU_PROMPT)?;
            match MenuChoice::parse(&answer) {
                Ok(MenuChoice::PlayRound) => self.play_round(&mut ledger)?,
                Ok(MenuChoice::InterimReport) => self.interim_report(&ledger)?,
                Err(e) => self.report(&e)?,
            }
        }

        let standings = ledger.standings();
        self.final_report(&standings)?;
        tracing::info!("Game finished after {} rounds", ledger.rounds_played());
        Ok(standings)
    }

    fn create_ledger(&mut self) -> Result<Ledger> {
        let mut roster = Vec::with_capacity(self.config.players);
        while roster.len() < self.config.players {
            let answer = self.console.ask(NAME_PROMPT)?;
            match parse_name_and_club(&answer) {
                Ok(entry) => roster.push(entry),
                Err(e) => self.report(&e)?,
            }
        }
        Ledger::new(roster, self.config.total_chips, self.config.rounds)
    }

    fn play_round(&mut self, ledger: &mut Ledger) -> Result<()> {
        let round = ledger.current_round();
        self.console.heading(&format!("Runda {}:", round))?;

        loop {
            let results = self.collect_results(ledger)?;
            match ledger.commit_round(&results) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_retryable() => {
                    tracing::warn!("Round {} rejected: {}", round, e);
                    self.report(&e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn collect_results(&mut self, ledger: &Ledger) -> Result<Vec<Chips>> {
        let mut results = Vec::with_capacity(ledger.players().len());

        for (index, player) in ledger.players().iter().enumerate() {
            let question = format!(
                "Ange resultat för {} representerande {}",
                player.name, player.club
            );
            loop {
                let answer = self.console.ask(&question)?;
                match parse_result(&answer).and_then(|r| ledger.check_result(index, r).map(|_| r)) {
                    Ok(result) => {
                        results.push(result);
                        break;
                    }
                    Err(e) => {
                        tracing::debug!("Rejected result for {}: {}", player.name, e);
                        self.report(&e)?;
                    }
                }
            }
        }

        Ok(results)
    }

    fn interim_report(&mut self, ledger: &Ledger) -> Result<()> {
        self.console
            .heading(&format!("Mellanrapport för runda {}:", ledger.current_round()))?;
        for player in ledger.players() {
            self.console.write_line(&format!(
                "{} representerande {} har {} spelmärken.",
                player.name, player.club, player.chips
            ))?;
        }
        self.console.divider()
    }

    fn final_report(&mut self, standings: &[Player]) -> Result<()> {
        self.console.divider()?;
        for player in standings {
            if let Some(medal) = player.medal {
                tracing::info!("{} won {} with {} chips", player.name, medal, player.chips);
            }
            let medal = player.medal.map(|m| m.label()).unwrap_or("-");
            self.console.write_line(&format!(
                "Spelare {} representerande {} vann {} med {} spelmärken.",
                player.name, player.club, medal, player.chips
            ))?;
        }
        Ok(())
    }

    fn report(&mut self, error: &AppError) -> Result<()> {
        self.console.error(&error.user_friendly_message())
    }
}
