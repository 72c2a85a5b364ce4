//! Uniform selection from collections and enumerations.

use seedling_core::error::SamplingError;
use seedling_core::range::Range;
use seedling_core::rng::UniformSource;

use crate::numeric::integer;

/// Picks one of `values` uniformly.
///
/// Intended for enumerations: pass the variants that are valid in the
/// fixture being built.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `values` is empty.
#[allow(clippy::cast_sign_loss)]
pub fn enum_value<T: Clone>(rng: &mut dyn UniformSource, values: &[T]) -> Result<T, SamplingError> {
    let last = i32::try_from(values.len()).unwrap_or(i32::MAX) - 1;
    let index = integer(rng, Range::new(0, last))?;
    Ok(values[index as usize].clone())
}

/// Picks a uniformly random element of `items`, or `default` when `items` is
/// absent or empty.
///
/// The sequence is traversed exactly once, so single-pass iterators are
/// fine.
#[allow(clippy::cast_possible_truncation)]
pub fn pick<I: IntoIterator>(
    rng: &mut dyn UniformSource,
    items: Option<I>,
    default: I::Item,
) -> I::Item {
    let Some(items) = items else {
        return default;
    };
    let mut items: Vec<I::Item> = items.into_iter().collect();
    if items.is_empty() {
        return default;
    }
    let index = rng.next_below(items.len() as u64) as usize;
    items.swap_remove(index)
}

/// Borrows a uniformly random element of `items`, or `None` when empty.
#[allow(clippy::cast_possible_truncation)]
pub fn pick_ref<'a, T>(rng: &mut dyn UniformSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.next_below(items.len() as u64) as usize;
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedling_core::rng::ThreadUniformSource;
    use seedling_test_support::{MockSource, SequenceSource};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Suit {
        Clubs,
        Diamonds,
        Hearts,
        Spades,
    }

    const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    // --- enum_value tests ---

    #[test]
    fn test_enum_value_picks_indexed_variant() {
        let mut rng = SequenceSource::new(vec![2, 0, 3]);
        assert_eq!(enum_value(&mut rng, &SUITS), Ok(Suit::Hearts));
        assert_eq!(enum_value(&mut rng, &SUITS), Ok(Suit::Clubs));
        assert_eq!(enum_value(&mut rng, &SUITS), Ok(Suit::Spades));
    }

    #[test]
    fn test_enum_value_single_variant_does_not_draw() {
        let mut rng = SequenceSource::new(vec![]);
        assert_eq!(enum_value(&mut rng, &[Suit::Hearts]), Ok(Suit::Hearts));
    }

    #[test]
    fn test_enum_value_empty_set_returns_range_invalid() {
        let empty: [Suit; 0] = [];
        assert!(matches!(
            enum_value(&mut MockSource, &empty),
            Err(SamplingError::RangeInvalid { .. })
        ));
    }

    // --- pick tests ---

    #[test]
    fn test_pick_empty_returns_default() {
        assert_eq!(pick(&mut MockSource, Some(Vec::<i32>::new()), -1), -1);
    }

    #[test]
    fn test_pick_absent_returns_default() {
        assert_eq!(pick::<Vec<i32>>(&mut MockSource, None, -1), -1);
    }

    #[test]
    fn test_pick_single_element_always_returns_it() {
        let mut rng = ThreadUniformSource;
        for _ in 0..100 {
            assert_eq!(pick(&mut rng, Some([7]), 0), 7);
        }
    }

    #[test]
    fn test_pick_consumes_single_pass_iterator() {
        let mut rng = SequenceSource::new(vec![3]);
        let picked = pick(&mut rng, Some((10..15).map(|n| n * 2)), 0);
        assert_eq!(picked, 26);
    }

    #[test]
    fn test_pick_covers_every_element() {
        let mut rng = ThreadUniformSource;
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let suit = pick(&mut rng, Some(SUITS), Suit::Clubs);
            seen[SUITS.iter().position(|s| *s == suit).unwrap()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    // --- pick_ref tests ---

    #[test]
    fn test_pick_ref_borrows_element() {
        let names = ["ada".to_owned(), "grace".to_owned()];
        let mut rng = SequenceSource::new(vec![1]);
        assert_eq!(pick_ref(&mut rng, &names).map(String::as_str), Some("grace"));
        assert_eq!(pick_ref::<String>(&mut rng, &[]), None);
    }
}
