//! Color palette and per-level color assignment
//!
//! Every level draws its sector colors from one fixed palette, without
//! replacement, in randomized order.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A sector/marker color from the fixed game palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Pink,
    Purple,
    Indigo,
    Blue,
    Cyan,
    LightGreen,
    Lime,
    Amber,
    DeepOrange,
    Grey,
    Brown,
    BlueGrey,
}

impl Color {
    /// CSS hex value for rendering collaborators
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#f44336",
            Color::Pink => "#FF4081",
            Color::Purple => "#9C27B0",
            Color::Indigo => "#3F51B5",
            Color::Blue => "#42A5F5",
            Color::Cyan => "#18FFFF",
            Color::LightGreen => "#76FF03",
            Color::Lime => "#EEFF41",
            Color::Amber => "#FFCA28",
            Color::DeepOrange => "#FF5722",
            Color::Grey => "#424242",
            Color::Brown => "#795548",
            Color::BlueGrey => "#CFD8DC",
        }
    }
}

/// The full set of colors a level's sectors can be assigned from.
/// Must stay at least as large as the biggest sector count in the catalog.
pub const PALETTE: [Color; 13] = [
    Color::Red,
    Color::Pink,
    Color::Purple,
    Color::Indigo,
    Color::Blue,
    Color::Cyan,
    Color::LightGreen,
    Color::Lime,
    Color::Amber,
    Color::DeepOrange,
    Color::Grey,
    Color::Brown,
    Color::BlueGrey,
];

/// Draw `count` distinct colors from `palette` in random order.
///
/// Partial Fisher-Yates: only the last `count` slots of a working copy are
/// shuffled, then returned, so the whole palette is never permuted. Panics if
/// `count` is 0 or exceeds the palette size; that is a caller bug, not a
/// runtime condition.
pub fn select_colors<R: Rng>(rng: &mut R, palette: &[Color], count: usize) -> Vec<Color> {
    assert!(
        count >= 1 && count <= palette.len(),
        "color count {count} outside palette of {}",
        palette.len()
    );

    let mut pool = palette.to_vec();
    let first = pool.len() - count;
    for i in (first..pool.len()).rev() {
        let j = rng.random_range(0..=i);
        pool.swap(i, j);
    }
    pool.split_off(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_select_full_palette() {
        let mut rng = Pcg32::seed_from_u64(7);
        let picked = select_colors(&mut rng, &PALETTE, PALETTE.len());
        assert_eq!(picked.len(), PALETTE.len());
        for color in PALETTE {
            assert!(picked.contains(&color));
        }
    }

    #[test]
    fn test_orders_vary_across_draws() {
        // 32 draws of 5 from 13 colliding on one ordering would be absurd luck
        let mut rng = Pcg32::seed_from_u64(42);
        let first = select_colors(&mut rng, &PALETTE, 5);
        let varied = (0..32).any(|_| select_colors(&mut rng, &PALETTE, 5) != first);
        assert!(varied);
    }

    #[test]
    #[should_panic]
    fn test_zero_count_is_a_caller_bug() {
        let mut rng = Pcg32::seed_from_u64(0);
        select_colors(&mut rng, &PALETTE, 0);
    }

    #[test]
    #[should_panic]
    fn test_oversized_count_is_a_caller_bug() {
        let mut rng = Pcg32::seed_from_u64(0);
        select_colors(&mut rng, &PALETTE, PALETTE.len() + 1);
    }

    proptest! {
        #[test]
        fn prop_selection_is_a_distinct_subset(seed in any::<u64>(), count in 1usize..=13) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let picked = select_colors(&mut rng, &PALETTE, count);

            prop_assert_eq!(picked.len(), count);
            for color in &picked {
                prop_assert!(PALETTE.contains(color));
            }
            for (i, a) in picked.iter().enumerate() {
                for b in &picked[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }
}
