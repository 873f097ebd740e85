use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Uniformly random placement, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBombGenerator {
    seed: u64,
}

impl RandomBombGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BombGenerator for RandomBombGenerator {
    /// Partial Fisher-Yates over every position of the board: each draw picks one of the
    /// remaining candidates and swaps it past the end of the usable range, so exactly
    /// `config.bombs` distinct cells are chosen with one draw per bomb.
    fn generate(self, config: &GameConfig) -> BombLayout {
        use rand::prelude::*;

        let size = config.size;
        let mut bomb_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut candidates: Vec<Position> = size.positions().collect();
        let mut remaining: CellCount = size.total_cells();

        if config.bombs > remaining {
            log::warn!(
                "Board already full, requested {} bombs but only fits {}",
                config.bombs,
                remaining
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..config.bombs {
            if remaining == 0 {
                break;
            }
            let pick = rng.random_range(0..remaining) as usize;
            bomb_mask[candidates[pick].to_nd_index()] = true;
            remaining -= 1;
            candidates.swap(pick, remaining as usize);
        }

        let layout = BombLayout::from_bomb_mask(bomb_mask);
        log::debug!(
            "Placed {} bombs on a {}x{} board with seed {}",
            layout.bomb_count(),
            size.rows,
            size.cols,
            self.seed
        );
        layout
    }
}
