use crate::*;
pub use random::*;

mod random;

pub trait BombGenerator {
    fn generate(self, config: &GameConfig) -> BombLayout;
}
