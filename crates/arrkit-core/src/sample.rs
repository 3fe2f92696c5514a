//! Random choice from ordered maps.
//!
//! The random source is always passed in by the caller; seeding it gives
//! reproducible picks.

use crate::errors::{ArrError, Result};
use crate::logging_facility::macros::logged_op;
use crate::model::{Key, OrderedMap, Value};
use rand::Rng;

/// One uniformly chosen entry.
///
/// # Errors
///
/// Returns `ArrError::EmptySource` if `map` is empty.
///
/// ```
/// use arrkit_core::model::OrderedMap;
/// use arrkit_core::sample::choose;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let map = OrderedMap::from_values(["a", "b", "c"]);
/// let mut rng = StdRng::seed_from_u64(7);
/// let (_key, value) = choose(&map, &mut rng).unwrap();
/// assert!(map.values().any(|v| v == &value));
/// ```
pub fn choose<R: Rng + ?Sized>(map: &OrderedMap, rng: &mut R) -> Result<(Key, Value)> {
    logged_op!("choose", { item_count = map.len() as u64 }, {
        if map.is_empty() {
            Err(ArrError::EmptySource {
                op: "choose".to_string(),
            })
        } else {
            let index = rng.random_range(0..map.len());
            map.iter()
                .nth(index)
                .map(|(k, v)| (k.clone(), v.clone()))
                .ok_or_else(|| ArrError::EmptySource {
                    op: "choose".to_string(),
                })
        }
    })
}

/// `count` distinct entries chosen uniformly, returned in their original
/// order.
///
/// # Errors
///
/// - `EmptySource` if `map` is empty
/// - `SampleTooLarge` if `count` exceeds the number of entries
pub fn sample<R: Rng + ?Sized>(map: &OrderedMap, count: usize, rng: &mut R) -> Result<OrderedMap> {
    logged_op!("sample", { item_count = map.len() as u64, limit = count as u64 }, {
        if map.is_empty() {
            Err(ArrError::EmptySource {
                op: "sample".to_string(),
            })
        } else if count > map.len() {
            Err(ArrError::SampleTooLarge {
                op: "sample".to_string(),
                requested: count,
                available: map.len(),
            })
        } else {
            let picked = pick_indices(map.len(), count, rng);
            Ok(map
                .iter()
                .enumerate()
                .filter(|(i, _)| picked[*i])
                .map(|(_, (k, v))| (k.clone(), v.clone()))
                .collect::<OrderedMap>())
        }
    })
}

/// Partial Fisher-Yates: marks `count` distinct positions out of `len`.
fn pick_indices<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<bool> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.random_range(i..len);
        order.swap(i, j);
    }
    let mut picked = vec![false; len];
    for &index in &order[..count] {
        picked[index] = true;
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choose_empty_source() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = choose(&OrderedMap::new(), &mut rng).unwrap_err();
        assert_eq!(
            err,
            ArrError::EmptySource {
                op: "choose".to_string()
            }
        );
    }

    #[test]
    fn test_choose_is_reproducible_with_seed() {
        let map = OrderedMap::from_values(1..=20);
        let a = choose(&map, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = choose(&map, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_keeps_original_order() {
        let map = OrderedMap::from_values(0..10);
        let got = sample(&map, 4, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(got.len(), 4);
        let keys: Vec<i64> = got.keys().filter_map(Key::as_int).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_sample_all_returns_everything() {
        let map = OrderedMap::from_values(["x", "y"]);
        let got = sample(&map, 2, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(got, map);
    }

    #[test]
    fn test_sample_zero_is_empty() {
        let map = OrderedMap::from_values([1]);
        let got = sample(&map, 0, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn test_sample_too_large() {
        let map = OrderedMap::from_values([1, 2]);
        let err = sample(&map, 3, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(
            err,
            ArrError::SampleTooLarge {
                requested: 3,
                available: 2,
                ..
            }
        ));
    }
}
