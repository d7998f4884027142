use static_assertions::const_assert;
use tracing::{debug, trace};

use crate::{IntList, ListError};

/// Capacity of a list created with [`IntList::new`].
pub const DEFAULT_CAPACITY: usize = 5;

/// Number of elements from which on a list grows and shrinks conservatively.
pub const GROWTH_THRESHOLD: usize = 20;

/// Growth factors as `(numerator, denominator)`.
const SMALL_GROWTH: (usize, usize) = (2, 1);
const LARGE_GROWTH: (usize, usize) = (4, 3);

/// Shrink factors as `(numerator, denominator)`.
const SMALL_SHRINK: (usize, usize) = (3, 5);
const LARGE_SHRINK: (usize, usize) = (4, 5);

const_assert!(DEFAULT_CAPACITY > 0);
const_assert!(SMALL_GROWTH.0 * LARGE_GROWTH.1 > LARGE_GROWTH.0 * SMALL_GROWTH.1);
const_assert!(LARGE_GROWTH.0 > LARGE_GROWTH.1);
// A shrunk list must end up more than half full, otherwise the next removal shrinks it again.
const_assert!(2 * SMALL_SHRINK.0 > SMALL_SHRINK.1);
const_assert!(2 * LARGE_SHRINK.0 > LARGE_SHRINK.1);
const_assert!(LARGE_SHRINK.0 < LARGE_SHRINK.1);

/// Scales `n` by `num / den`, multiplying first.
#[inline]
fn scale(n: usize, (num, den): (usize, usize)) -> Result<usize, ListError> {
    n.checked_mul(num)
        .map(|v| v / den)
        .ok_or(ListError::CapacityOverflow)
}

/// Makes sure `data` has room for at least `capacity` elements.
pub(super) fn try_allocate(data: &mut Vec<i32>, capacity: usize) -> Result<(), ListError> {
    if capacity <= data.capacity() {
        return Ok(());
    }

    data.try_reserve_exact(capacity - data.len())
        .map_err(|source| {
            debug!(requested = capacity, "allocation failed");
            ListError::Allocation {
                requested: capacity,
                source,
            }
        })
}

impl IntList {
    /// Sets the capacity of this list to exactly `target`, reallocating the backing storage.
    ///
    /// `target` must not be smaller than the current length.
    pub(super) fn resize(&mut self, target: usize) -> Result<(), ListError> {
        debug_assert!(
            target >= self.len(),
            "resizing to {target} would drop live elements (length {})",
            self.len()
        );

        if target > self.data.capacity() {
            try_allocate(&mut self.data, target)?;
        } else {
            self.data.shrink_to(target);
        }

        trace!(from = self.capacity, to = target, "resized int list");
        self.capacity = target;
        Ok(())
    }

    /// Grows a full list according to the growth policy.
    pub(super) fn expand(&mut self) -> Result<(), ListError> {
        let len = self.len();
        let target = if len < GROWTH_THRESHOLD {
            scale(len, SMALL_GROWTH)?
        } else {
            scale(len, LARGE_GROWTH)?
        };

        // An empty list with no capacity would otherwise stay at zero
        self.resize(target.max(len + 1))
    }

    /// Shrinks the list according to the shrink policy, unless that would cut off live elements.
    pub(super) fn shrink(&mut self) -> Result<(), ListError> {
        let target = if self.capacity < GROWTH_THRESHOLD {
            scale(self.capacity, SMALL_SHRINK)?
        } else {
            scale(self.capacity, LARGE_SHRINK)?
        };

        if target < self.len() {
            return Ok(());
        }
        self.resize(target)
    }

    /// Makes room for `additional` more elements, growing to exactly the required size if they
    /// do not fit.
    pub(super) fn fit(&mut self, additional: usize) -> Result<(), ListError> {
        let final_size = self
            .len()
            .checked_add(additional)
            .ok_or(ListError::CapacityOverflow)?;

        if self.capacity < final_size {
            self.resize(final_size)?;
        }
        Ok(())
    }

    /// Shrinks the capacity of this list to its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let mut list = IntList::with_capacity(200)?;
    /// list.add_all(&[1, 2, 3])?;
    /// list.shrink_to_fit();
    ///
    /// assert_eq!(3, list.capacity());
    /// # Ok::<(), int_list::ListError>(())
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let len = self.len();
        self.data.shrink_to(len);
        trace!(from = self.capacity, to = len, "resized int list");
        self.capacity = len;
    }
}

#[cfg(test)]
mod test {
    use test_case::test_case;

    use super::{scale, LARGE_GROWTH};
    use crate::{IntList, ListError};

    #[test]
    fn scale_test() {
        assert_eq!(Ok(26), scale(20, LARGE_GROWTH), "integer division not applied last");
        assert_eq!(Err(ListError::CapacityOverflow), scale(usize::MAX, LARGE_GROWTH));
    }

    #[test_case(0, 1; "empty")]
    #[test_case(1, 2; "single")]
    #[test_case(5, 10; "default")]
    #[test_case(19, 38; "below threshold")]
    #[test_case(20, 26; "at threshold")]
    #[test_case(30, 40; "above threshold")]
    #[test_case(100, 133; "large")]
    fn expand_test(capacity: usize, expected: usize) {
        let mut list = IntList::with_capacity(capacity).unwrap();
        for i in 0..capacity {
            list.add(i as i32).unwrap();
        }
        assert_eq!(capacity, list.capacity(), "list grew before it was full");

        list.add(-1).unwrap();

        assert_eq!(expected, list.capacity(), "incorrect capacity after growing");
        assert_eq!(capacity + 1, list.len());
        assert_eq!(Some(-1), list.last().copied(), "appended value lost");
    }

    #[test]
    fn growth_sequence_test() {
        let mut list = IntList::new();
        let mut capacities = vec![list.capacity()];
        for i in 0..45 {
            list.add(i).unwrap();
            if capacities.last() != Some(&list.capacity()) {
                capacities.push(list.capacity());
            }
        }

        assert_eq!(vec![5, 10, 20, 26, 34, 45], capacities);
        assert!(Iterator::eq(0..45, list.iter()), "data lost while growing");
    }

    #[test_case(5, 3; "default")]
    #[test_case(10, 6; "small")]
    #[test_case(20, 16; "at threshold")]
    #[test_case(25, 20; "above threshold")]
    #[test_case(40, 32; "large")]
    fn shrink_test(capacity: usize, expected: usize) {
        let mut list: IntList = (0..capacity as i32).collect();
        assert_eq!(capacity, list.capacity());

        // Removing down to half the capacity triggers exactly one shrink
        while list.len() > capacity / 2 {
            list.remove(0).unwrap();
        }

        assert_eq!(expected, list.capacity(), "incorrect capacity after shrinking");
        assert!(list.capacity() >= list.len());
        let first_kept = (capacity - capacity / 2) as i32;
        assert!(
            Iterator::eq(first_kept..capacity as i32, list.iter()),
            "remaining elements changed"
        );
    }

    #[test]
    fn shrink_to_empty_test() {
        let mut list = IntList::from_vec(vec![1, 2, 3, 4, 5]);
        let mut capacities = Vec::new();
        while !list.is_empty() {
            list.remove(list.len() - 1).unwrap();
            capacities.push(list.capacity());
            assert!(list.capacity() >= list.len(), "capacity dropped below length");
        }

        assert_eq!(vec![5, 5, 3, 1, 0], capacities);
    }

    #[test]
    fn no_shrink_above_half_test() {
        let mut list = IntList::with_capacity(10).unwrap();
        list.add_all(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        list.remove(0).unwrap();
        list.remove(0).unwrap();

        assert_eq!(10, list.capacity(), "list shrank while more than half full");
    }

    #[test]
    fn alternating_add_remove_test() {
        let mut list: IntList = (0..10).collect();
        for _ in 0..5 {
            list.remove(0).unwrap();
        }
        let settled = list.capacity();

        for i in 0..10 {
            if i % 2 == 0 {
                list.add(i).unwrap();
            } else {
                list.remove(0).unwrap();
            }
            assert_eq!(settled, list.capacity(), "capacity changed on step {i}");
        }
    }

    #[test]
    fn add_after_shrink_test() {
        let mut list: IntList = (0..40).collect();
        for _ in 0..30 {
            list.remove(0).unwrap();
        }
        for i in 40..100 {
            list.add(i).unwrap();
        }

        assert!(Iterator::eq(30..100, list.iter()), "data lost across resizes");
    }

    #[test]
    fn shrink_to_fit_test() {
        let mut list = IntList::with_capacity(200).unwrap();
        for i in 0..50 {
            list.add(i).unwrap();
        }

        list.shrink_to_fit();

        assert_eq!(50, list.capacity(), "incorrect capacity after shrink");
        list.add(50).unwrap();
        assert_eq!(66, list.capacity(), "incorrect capacity after growing again");
    }
}
