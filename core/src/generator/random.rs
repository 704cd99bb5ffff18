use ndarray::Array2;
use rand::{SeedableRng, rngs::SmallRng, seq::index};

use super::*;

/// Places mines uniformly at random without replacement, reproducible for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let total_cells = config.total_cells();

        let mines = if config.mines() > total_cells {
            log::warn!(
                "Grid already full, requested {} mines but only fits {}",
                config.mines(),
                total_cells
            );
            total_cells
        } else {
            config.mines()
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size());
        for cell in index::sample(&mut rng, total_cells, mines) {
            mine_mask[[cell / config.cols(), cell % config.cols()]] = true;
        }

        log::debug!(
            "Generated {} mines on a {}x{} grid with seed {}",
            mines,
            config.rows(),
            config.cols(),
            self.seed
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        for config in [GameConfig::beginner(), GameConfig::intermediate()] {
            for seed in 0..20 {
                let layout = RandomMineGenerator::new(seed).generate(config);
                assert_eq!(layout.size(), config.size());
                assert_eq!(layout.mine_count(), config.mines());
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::intermediate();
        let first = RandomMineGenerator::new(42).generate(config);
        let second = RandomMineGenerator::new(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_spread_mines_around() {
        let config = GameConfig::beginner();
        let layouts: Vec<_> = (0..8)
            .map(|seed| RandomMineGenerator::new(seed).generate(config))
            .collect();

        assert!(layouts.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn overfull_request_fills_the_grid() {
        let layout = RandomMineGenerator::new(1).generate(GameConfig::new_unchecked(2, 3, 9));

        assert_eq!(layout.mine_count(), 6);
        assert_eq!(layout.safe_cell_count(), 0);
    }
}
