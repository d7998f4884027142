use crate::{IntList, ListError};

impl IntList {
    /// Calls `operation` with every element and its index, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![176, 22]);
    /// let mut lines = Vec::new();
    /// list.for_each(|x, i| lines.push(format!("index {i} -> {x}")));
    ///
    /// assert_eq!(vec!["index 0 -> 176", "index 1 -> 22"], lines);
    /// ```
    pub fn for_each<F>(&self, mut operation: F)
    where
        F: FnMut(i32, usize),
    {
        for (i, x) in self.iter().enumerate() {
            operation(x, i);
        }
    }

    /// Creates a new list containing only the elements for which `predicate` returns `true`.
    ///
    /// The new list starts out with half the length of this one as its capacity and grows as
    /// usual if more elements pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage for the new list could not be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![176, 22, 34435, 7]);
    /// let filtered = list.filter(|x, _| x < 25)?;
    ///
    /// assert_eq!(&[22, 7], filtered.as_slice());
    /// # Ok::<(), int_list::ListError>(())
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Result<IntList, ListError>
    where
        F: FnMut(i32, usize) -> bool,
    {
        let mut filtered = IntList::with_capacity(self.len() / 2)?;
        for (i, x) in self.iter().enumerate() {
            if predicate(x, i) {
                filtered.add(x)?;
            }
        }
        Ok(filtered)
    }

    /// Creates a new list containing the result of `transform` for every element.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage for the new list could not be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![1, 2, 3]);
    /// let mapped = list.map(|x, i| x * 10 + i as i32)?;
    ///
    /// assert_eq!(&[10, 21, 32], mapped.as_slice());
    /// # Ok::<(), int_list::ListError>(())
    /// ```
    pub fn map<F>(&self, mut transform: F) -> Result<IntList, ListError>
    where
        F: FnMut(i32, usize) -> i32,
    {
        let mut mapped = IntList::with_capacity(self.len())?;
        for (i, x) in self.iter().enumerate() {
            mapped.add(transform(x, i))?;
        }
        Ok(mapped)
    }

    /// Folds all elements into a single value, front to back.
    ///
    /// `combine` receives the accumulated value, the current element and its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![176, 22, 34435, 7]);
    ///
    /// assert_eq!(34640, list.reduce(|acc, x, _| acc + x, 0));
    /// ```
    pub fn reduce<A, F>(&self, mut combine: F, initial: A) -> A
    where
        F: FnMut(A, i32, usize) -> A,
    {
        self.iter()
            .enumerate()
            .fold(initial, |acc, (i, x)| combine(acc, x, i))
    }
}
