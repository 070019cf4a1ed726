use rand::Rng;

use crate::{electorate::Electorate, search::{SearchConfig, SearchError}};

/// Shared state of one builder run: the electorate, the random source, and the step budget.
pub(crate) struct Search<'a, E: Electorate, R: Rng + ?Sized> {
    pub(super) electorate: &'a E,
    pub(super) rng: &'a mut R,
    pub(super) target_size: usize,
    pub(super) district_count: usize,
    pub(super) prune_stranded: bool,
    max_steps: Option<u64>,
    steps: u64,
    exhausted: bool,
}

impl<'a, E: Electorate, R: Rng + ?Sized> Search<'a, E, R> {
    pub(super) fn new(electorate: &'a E, config: &SearchConfig, rng: &'a mut R) -> Result<Self, SearchError> {
        let district_count = district_count(electorate, config.target_size)?;

        Ok(Self {
            electorate,
            rng,
            target_size: config.target_size,
            district_count,
            prune_stranded: config.prune_stranded,
            max_steps: config.max_steps,
            steps: 0,
            exhausted: false,
        })
    }

    /// Number of growth steps taken so far.
    #[inline] pub(super) fn steps(&self) -> u64 { self.steps }

    /// Whether the step budget has run out.
    #[inline] pub(super) fn exhausted(&self) -> bool { self.exhausted }

    /// Account for one growth step. Returns `false` once the budget is spent.
    #[inline]
    pub(super) fn tick(&mut self) -> bool {
        if self.max_steps.is_some_and(|max| self.steps >= max) {
            self.exhausted = true;
            return false
        }
        self.steps += 1;
        true
    }
}

/// Number of districts `electorate` splits into, or why it cannot be split evenly.
pub(super) fn district_count(electorate: &impl Electorate, target_size: usize) -> Result<usize, SearchError> {
    let voters = electorate.number_of_voters();
    if target_size == 0 { return Err(SearchError::InvalidTargetSize) }
    if voters == 0 { return Err(SearchError::EmptyElectorate) }
    if voters % target_size != 0 { return Err(SearchError::IndivisibleElectorate { voters, target_size }) }

    Ok(electorate.district_size(target_size))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::electorate::{Party, VoterMap};

    fn grid(rows: usize, cols: usize) -> VoterMap {
        VoterMap::grid(rows, cols, vec![Party::from("A"); rows * cols]).unwrap()
    }

    #[test]
    fn district_count_divides_voters() {
        assert_eq!(district_count(&grid(5, 9), 9), Ok(5));
        assert_eq!(district_count(&grid(5, 9), 1), Ok(45));
    }

    #[test]
    fn district_count_rejects_bad_inputs() {
        assert_eq!(district_count(&grid(5, 9), 0), Err(SearchError::InvalidTargetSize));
        assert_eq!(district_count(&grid(0, 0), 9), Err(SearchError::EmptyElectorate));
        assert_eq!(
            district_count(&grid(4, 5), 9),
            Err(SearchError::IndivisibleElectorate { voters: 20, target_size: 9 }),
        );
    }

    #[test]
    fn tick_stops_at_budget() {
        let map = grid(1, 3);
        let mut rng = StdRng::seed_from_u64(0);
        let config = SearchConfig::default().with_target_size(3).with_max_steps(Some(2));
        let mut search = Search::new(&map, &config, &mut rng).unwrap();

        assert!(search.tick());
        assert!(search.tick());
        assert!(!search.exhausted());
        assert!(!search.tick());
        assert!(search.exhausted());
        assert_eq!(search.steps(), 2);
    }
}
