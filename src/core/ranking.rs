use crate::domain::model::{Chips, Medal, Player};

/// Returns a copy of `players` sorted by chip count, most chips first.
/// Players with equal counts keep their original order.
pub fn rank_players(players: &[Player]) -> Vec<Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.chips.cmp(&a.chips));
    ranked
}

/// Medal tiers for an already sorted (descending) list of chip counts.
///
/// A tie shares the tier of the player above it and the tiers it would
/// have occupied are skipped.
///
/// ```
/// use noc3::core::ranking::medal_tiers;
/// use noc3::domain::model::Medal;
///
/// assert_eq!(
///     medal_tiers(&[300, 300, 200]),
///     vec![Medal::Gold, Medal::Gold, Medal::Bronze]
/// );
/// ```
pub fn medal_tiers(sorted_chips: &[Chips]) -> Vec<Medal> {
    let mut tiers = Vec::with_capacity(Medal::TIERS.len());
    let mut tier = 0;

    for (position, chips) in sorted_chips.iter().take(Medal::TIERS.len()).enumerate() {
        if position > 0 && sorted_chips[position - 1] > *chips {
            tier = position;
        }
        tiers.push(Medal::TIERS[tier]);
    }

    tiers
}

/// Ranks `players` and returns the medalists (at most three) with their
/// medal set. The input roster is left untouched.
pub fn award_medals(players: &[Player]) -> Vec<Player> {
    let ranked = rank_players(players);
    let chips: Vec<Chips> = ranked.iter().map(|p| p.chips).collect();

    ranked
        .into_iter()
        .zip(medal_tiers(&chips))
        .map(|(mut player, medal)| {
            player.medal = Some(medal);
            player
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(chips: &[Chips]) -> Vec<Player> {
        chips
            .iter()
            .enumerate()
            .map(|(i, c)| Player::new(&format!("P{}", i), "Klubb", *c))
            .collect()
    }

    #[test]
    fn test_distinct_counts_get_all_three_medals() {
        assert_eq!(
            medal_tiers(&[300, 200, 100]),
            vec![Medal::Gold, Medal::Silver, Medal::Bronze]
        );
    }

    #[test]
    fn test_tie_for_gold_skips_silver() {
        assert_eq!(
            medal_tiers(&[300, 300, 200]),
            vec![Medal::Gold, Medal::Gold, Medal::Bronze]
        );
    }

    #[test]
    fn test_tie_for_silver_shares_silver() {
        assert_eq!(
            medal_tiers(&[300, 200, 200, 100]),
            vec![Medal::Gold, Medal::Silver, Medal::Silver]
        );
    }

    #[test]
    fn test_three_way_tie_is_all_gold() {
        assert_eq!(medal_tiers(&[100, 100, 100, 100]), vec![Medal::Gold; 3]);
    }

    #[test]
    fn test_fewer_than_three_players() {
        assert_eq!(medal_tiers(&[250, 250]), vec![Medal::Gold, Medal::Gold]);
        assert!(medal_tiers(&[]).is_empty());
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranked = rank_players(&roster(&[100, 200, 100, 200]));
        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P3", "P0", "P2"]);
    }

    #[test]
    fn test_award_medals_works_on_a_copy() {
        let players = roster(&[100, 300, 50, 50, 0]);
        let medalists = award_medals(&players);

        assert_eq!(medalists.len(), 3);
        assert_eq!(medalists[0].name, "P1");
        assert_eq!(medalists[0].medal, Some(Medal::Gold));
        assert_eq!(medalists[1].medal, Some(Medal::Silver));
        assert_eq!(medalists[2].name, "P2");
        assert_eq!(medalists[2].medal, Some(Medal::Bronze));
        assert!(players.iter().all(|p| p.medal.is_none()));
    }
}
