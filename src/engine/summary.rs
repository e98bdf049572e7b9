//! Top gainer and loser over the full snapshot.
//!
//! Both ignore search and sort: they are computed over the coin list exactly
//! as fetched. Coins without a 24h change are not candidates, and ties go to
//! the coin that appears first.

use crate::domain::Coin;

/// Coin with the largest 24h change.
#[must_use]
pub fn top_gainer(coins: &[Coin]) -> Option<&Coin> {
    extreme_by(coins, |candidate, best| candidate > best)
}

/// Coin with the smallest 24h change.
#[must_use]
pub fn top_loser(coins: &[Coin]) -> Option<&Coin> {
    extreme_by(coins, |candidate, best| candidate < best)
}

fn extreme_by(coins: &[Coin], replaces: impl Fn(f64, f64) -> bool) -> Option<&Coin> {
    let mut best: Option<(&Coin, f64)> = None;
    for coin in coins {
        let Some(change) = coin.change_24h() else {
            continue;
        };
        match best {
            Some((_, current)) if !replaces(change, current) => {}
            _ => best = Some((coin, change)),
        }
    }
    best.map(|(coin, _)| coin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::fixtures::{bitcoin, coin, ether};

    #[test]
    fn empty_list_has_no_cards() {
        assert!(top_gainer(&[]).is_none());
        assert!(top_loser(&[]).is_none());
    }

    #[test]
    fn bounds_every_change_in_the_list() {
        let coins = vec![
            bitcoin(),
            ether(),
            coin("Solana", "sol", 140.0, 60_000.0, Some(4.1)),
            coin("Dogecoin", "doge", 0.12, 17_000.0, Some(-3.2)),
            coin("Newcoin", "new", 0.02, 10.0, None),
        ];
        let gainer = top_gainer(&coins).unwrap();
        let loser = top_loser(&coins).unwrap();
        for c in coins.iter().filter_map(Coin::change_24h) {
            assert!(gainer.change_24h().unwrap() >= c);
            assert!(loser.change_24h().unwrap() <= c);
        }
        assert_eq!(gainer.name, "Solana");
        assert_eq!(loser.name, "Dogecoin");
    }

    #[test]
    fn ties_go_to_the_first_coin() {
        let coins = vec![
            coin("Alpha", "a", 1.0, 3.0, Some(1.0)),
            coin("Beta", "b", 1.0, 2.0, Some(1.0)),
        ];
        assert_eq!(top_gainer(&coins).unwrap().name, "Alpha");
        assert_eq!(top_loser(&coins).unwrap().name, "Alpha");
    }

    #[test]
    fn coins_without_change_are_skipped() {
        let coins = vec![coin("Newcoin", "new", 0.02, 10.0, None)];
        assert!(top_gainer(&coins).is_none());
        assert!(top_loser(&coins).is_none());
    }
}
