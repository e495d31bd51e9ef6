//! weight.rs
//!
//! Popularity ordering for the repository list ("gilt weight").
//!
//! Fork status dominates: the non-fork bonus is large enough that every
//! original repository sorts ahead of every fork, with stars and forks only
//! breaking ties inside each tier.

use std::cmp::Reverse;

use crate::repo::Repository;

pub const STAR_WEIGHT: u64 = 9;
pub const FORK_WEIGHT: u64 = 3;
pub const NON_FORK_BONUS: u64 = 1_000_000;

/// A repository paired with its computed weight.
#[derive(Debug, Clone)]
pub struct Weighted {
    pub repo: Repository,
    pub weight: u64,
}

/// `stars * 9 + forks * 3 + (!fork) * 1_000_000`
pub fn gilt_weight(repo: &Repository) -> u64 {
    let bonus = if repo.fork { 0 } else { NON_FORK_BONUS };
    repo.stargazers_count
        .saturating_mul(STAR_WEIGHT)
        .saturating_add(repo.forks_count.saturating_mul(FORK_WEIGHT))
        .saturating_add(bonus)
}

/// Weigh every repository, then order by descending weight.
///
/// The sort is stable, so equal weights keep the order they were fetched in.
pub fn weight_and_sort(repos: Vec<Repository>) -> Vec<Weighted> {
    let mut weighted: Vec<Weighted> = repos
        .into_iter()
        .map(|repo| {
            let weight = gilt_weight(&repo);
            Weighted { repo, weight }
        })
        .collect();

    sort_weighted(&mut weighted);
    weighted
}

/// Descending by weight; stable.
pub fn sort_weighted(weighted: &mut [Weighted]) {
    weighted.sort_by_key(|w| Reverse(w.weight));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, forks: u64, fork: bool) -> Repository {
        Repository {
            name: name.to_string(),
            stargazers_count: stars,
            forks_count: forks,
            fork,
            ..Default::default()
        }
    }

    #[test]
    fn test_weight_formula() {
        assert_eq!(gilt_weight(&repo("a", 10, 5, false)), 1_000_105);
        assert_eq!(gilt_weight(&repo("b", 10, 5, true)), 105);
        assert_eq!(gilt_weight(&repo("c", 0, 0, true)), 0);
    }

    #[test]
    fn test_non_fork_outranks_equal_fork() {
        for (stars, forks) in [(0, 0), (1, 1), (500, 20), (100_000, 3_000)] {
            let original = gilt_weight(&repo("n", stars, forks, false));
            let forked = gilt_weight(&repo("f", stars, forks, true));
            assert!(original > forked, "stars={stars} forks={forks}");
        }
    }

    #[test]
    fn test_weight_saturates() {
        assert_eq!(gilt_weight(&repo("huge", u64::MAX, 1, false)), u64::MAX);
    }

    #[test]
    fn test_sort_descending() {
        let mut weighted: Vec<Weighted> = [50, 1_000_000, 3]
            .into_iter()
            .map(|weight| Weighted {
                repo: repo(&weight.to_string(), 0, 0, true),
                weight,
            })
            .collect();

        sort_weighted(&mut weighted);

        let weights: Vec<u64> = weighted.iter().map(|w| w.weight).collect();
        assert_eq!(weights, [1_000_000, 50, 3]);
    }

    #[test]
    fn test_weight_and_sort_orders_forks_last() {
        let input = vec![
            repo("popular-fork", 900, 300, true),
            repo("quiet", 0, 0, false),
            repo("starred", 12, 4, false),
        ];

        let sorted = weight_and_sort(input);

        let names: Vec<&str> = sorted.iter().map(|w| w.repo.name.as_str()).collect();
        assert_eq!(names, ["starred", "quiet", "popular-fork"]);
        assert_eq!(sorted[0].weight, 1_000_120);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let input = vec![
            repo("first", 1, 0, false),
            repo("top", 9, 0, false),
            repo("second", 1, 0, false),
            repo("third", 1, 0, false),
        ];

        let names: Vec<String> = weight_and_sort(input)
            .into_iter()
            .map(|w| w.repo.name)
            .collect();
        assert_eq!(names, ["top", "first", "second", "third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(weight_and_sort(Vec::new()).is_empty());
    }
}
