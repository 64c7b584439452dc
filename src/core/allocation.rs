use crate::domain::model::Chips;
use crate::utils::error::{AppError, Result};

/// Splits `total` chips across `players` as evenly as possible.
///
/// Every player gets `total / players`; the first `total % players` players
/// get one extra chip, so the shares always sum to `total`.
///
/// ```
/// use noc3::core::allocation::allocate_chips;
///
/// assert_eq!(allocate_chips(500, 3).unwrap(), vec![167, 167, 166]);
/// ```
pub fn allocate_chips(total: Chips, players: usize) -> Result<Vec<Chips>> {
    if players == 0 {
        return Err(AppError::InvalidConfigValueError {
            field: "game.players".to_string(),
            value: players.to_string(),
            reason: "At least one player is required".to_string(),
        });
    }
    if total < 0 {
        return Err(AppError::InvalidConfigValueError {
            field: "game.total_chips".to_string(),
            value: total.to_string(),
            reason: "Chip pool cannot be negative".to_string(),
        });
    }

    let count = Chips::try_from(players).map_err(|_| AppError::InvalidConfigValueError {
        field: "game.players".to_string(),
        value: players.to_string(),
        reason: "Too many players".to_string(),
    })?;
    let base = total / count;
    let remainder = (total % count) as usize;

    Ok((0..players)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_pool_gives_extra_chips_to_first_players() {
        let shares = allocate_chips(500, 3).unwrap();
        assert_eq!(shares, vec![167, 167, 166]);
    }

    #[test]
    fn test_even_pool() {
        let shares = allocate_chips(500, 5).unwrap();
        assert_eq!(shares, vec![100; 5]);
    }

    #[test]
    fn test_shares_always_sum_to_total() {
        for total in [0, 1, 7, 99, 500, 1001] {
            for players in 1..=12 {
                let shares = allocate_chips(total, players).unwrap();
                assert_eq!(shares.len(), players);
                assert_eq!(shares.iter().sum::<Chips>(), total, "{} over {}", total, players);
                let max = shares.iter().max().unwrap();
                let min = shares.iter().min().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn test_more_players_than_chips() {
        assert_eq!(allocate_chips(2, 4).unwrap(), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_rejects_zero_players_and_negative_pool() {
        assert!(allocate_chips(500, 0).is_err());
        assert!(allocate_chips(-1, 3).is_err());
    }
}
