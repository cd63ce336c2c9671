use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    Rng, SeedableRng,
};

use lang_component::vm::Direction;

/// Where `?` gets its new heading from.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl<F: FnMut() -> Direction> DirectionSource for F {
    fn next_direction(&mut self) -> Direction {
        self()
    }
}

/// East and South are favoured over West and North.
pub const DIRECTION_WEIGHTS: [(Direction, f64); 4] = [
    (Direction::East, 0.3),
    (Direction::West, 0.2),
    (Direction::South, 0.3),
    (Direction::North, 0.2),
];

pub struct WeightedDirections<R: Rng = StdRng> {
    rng: R,
    dist: WeightedIndex<f64>,
}

impl<R: Rng> WeightedDirections<R> {
    pub fn new(rng: R) -> Self {
        let dist = WeightedIndex::new(DIRECTION_WEIGHTS.iter().map(|(_, w)| *w))
            .expect("direction weights are positive");
        Self { rng, dist }
    }
}

impl WeightedDirections<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DirectionSource for WeightedDirections<R> {
    fn next_direction(&mut self) -> Direction {
        DIRECTION_WEIGHTS[self.dist.sample(&mut self.rng)].0
    }
}
