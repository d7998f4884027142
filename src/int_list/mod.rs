pub use self::capacity::{DEFAULT_CAPACITY, GROWTH_THRESHOLD};

use std::fmt;
use std::ops::Deref;

use itertools::Itertools;
use tracing::debug;

use crate::ListError;

mod capacity;
mod traversal;

/// A growable list of `i32` values.
///
/// The list keeps track of its own capacity instead of relying on whatever the allocator hands
/// out, so growth and shrinking follow a fixed policy: appending to a full list grows it by a
/// factor of 2 while it holds fewer than [`GROWTH_THRESHOLD`] elements and by a factor of 4/3
/// after that, and removing elements shrinks it once it is at most half full.
///
/// The elements can be read through [`as_slice`](IntList::as_slice) (or by dereferencing the
/// list), but they can only be modified through the list's own methods.
pub struct IntList {
    data: Vec<i32>,
    capacity: usize,
}

impl IntList {
    /// Creates an empty list with a capacity of [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::new();
    ///
    /// assert_eq!(5, list.capacity());
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty list that can hold `capacity` elements without reallocating.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The initial capacity. Zero is allowed, the first [`add`](IntList::add)
    /// then allocates room for a single element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Allocation`] if the storage could not be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::with_capacity(50)?;
    ///
    /// assert_eq!(50, list.capacity());
    /// assert_eq!(0, list.len());
    /// # Ok::<(), int_list::ListError>(())
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut data = Vec::new();
        capacity::try_allocate(&mut data, capacity)?;
        Ok(Self { data, capacity })
    }

    /// Creates a list backed by an existing buffer.
    ///
    /// The list takes ownership of the buffer. Both its length and its capacity are the number of
    /// elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![4, 8, 15]);
    ///
    /// assert_eq!(3, list.len());
    /// assert_eq!(3, list.capacity());
    /// assert_eq!(&[4, 8, 15], list.as_slice());
    /// ```
    #[inline]
    pub fn from_vec(buffer: Vec<i32>) -> Self {
        let capacity = buffer.len();
        Self {
            data: buffer,
            capacity,
        }
    }

    /// Releases the list and its storage.
    ///
    /// Dropping the list does the same; this only makes the point of release explicit.
    #[inline]
    pub fn destruct(self) {
        drop(self)
    }

    /// Consumes the list and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// The number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks whether the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of elements the list can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A read-only view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Gets the element at `index`, or `None` if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![3, 1, 4]);
    ///
    /// assert_eq!(Some(4), list.get(2));
    /// assert_eq!(None, list.get(3));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.data.get(index).copied()
    }

    /// Adds an element to the end of the list, growing it if it is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the list had to grow and the storage could not be allocated. The list
    /// is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let mut list = IntList::new();
    /// for i in 0..6 {
    ///     list.add(i)?;
    /// }
    ///
    /// // The default capacity of 5 was doubled when the sixth element came in
    /// assert_eq!(10, list.capacity());
    /// assert_eq!(&[0, 1, 2, 3, 4, 5], list.as_slice());
    /// # Ok::<(), int_list::ListError>(())
    /// ```
    pub fn add(&mut self, element: i32) -> Result<(), ListError> {
        if self.len() == self.capacity {
            self.expand()?;
        }
        self.data.push(element);
        Ok(())
    }

    /// Adds all given elements to the end of the list, in order.
    ///
    /// If the elements do not fit, the list grows to exactly the required size.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage could not be allocated. The list is left unchanged in that
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let mut list = IntList::with_capacity(1)?;
    /// list.add_all(&[10, 20, 30])?;
    ///
    /// assert_eq!(3, list.capacity());
    /// assert_eq!(&[10, 20, 30], list.as_slice());
    /// # Ok::<(), int_list::ListError>(())
    /// ```
    pub fn add_all(&mut self, elements: &[i32]) -> Result<(), ListError> {
        self.fit(elements.len())?;
        self.data.extend_from_slice(elements);
        Ok(())
    }

    /// Adds all elements of another list to the end of this one, in order.
    ///
    /// Sizing works like [`add_all`](IntList::add_all). `other` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage could not be allocated. The list is left unchanged in that
    /// case.
    #[inline]
    pub fn add_list(&mut self, other: &IntList) -> Result<(), ListError> {
        self.add_all(other.as_slice())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// All following elements move one position to the front. If the list is at most half full
    /// afterwards, it shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index` does not refer to an element. The list
    /// is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::{IntList, ListError};
    ///
    /// let mut list = IntList::from_vec(vec![176, 22, 34435, 7]);
    ///
    /// assert_eq!(Ok(176), list.remove(0));
    /// assert_eq!(Ok(7), list.remove(2));
    /// assert_eq!(Err(ListError::IndexOutOfBounds { index: 2, len: 2 }), list.remove(2));
    /// assert_eq!(&[22, 34435], list.as_slice());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<i32, ListError> {
        let len = self.len();
        if index >= len {
            debug!(index, len, "rejected removal");
            return Err(ListError::IndexOutOfBounds { index, len });
        }

        let removed = self.data.remove(index);
        if self.len() <= self.capacity / 2 {
            self.shrink()?;
        }
        Ok(removed)
    }

    /// Finds the position of the first occurrence of `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list = IntList::from_vec(vec![5, 9, 5]);
    ///
    /// assert_eq!(Some(0), list.index_of(5));
    /// assert_eq!(None, list.index_of(6));
    /// ```
    #[inline]
    pub fn index_of(&self, element: i32) -> Option<usize> {
        self.data.iter().position(|&v| v == element)
    }

    /// Checks whether `element` is in the list.
    #[inline]
    pub fn contains(&self, element: i32) -> bool {
        self.index_of(element).is_some()
    }

    /// An iterator over the list's elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_list::IntList;
    ///
    /// let list: IntList = (0..20).rev().collect();
    ///
    /// assert!(Iterator::eq((0..20).rev(), list.iter()))
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { i: 0, list: self }
    }
}

impl Default for IntList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntList {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntList")
            .field("elements", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Renders the list as `[e0, e1, ..., en]`.
impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().format(", "))
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for IntList {}

impl PartialEq<[i32]> for IntList {
    fn eq(&self, other: &[i32]) -> bool {
        self.data == other
    }
}

impl PartialEq<Vec<i32>> for IntList {
    fn eq(&self, other: &Vec<i32>) -> bool {
        &self.data == other
    }
}

impl Deref for IntList {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl AsRef<[i32]> for IntList {
    fn as_ref(&self) -> &[i32] {
        &self.data
    }
}

impl From<Vec<i32>> for IntList {
    fn from(buffer: Vec<i32>) -> Self {
        Self::from_vec(buffer)
    }
}

impl From<Box<[i32]>> for IntList {
    fn from(buffer: Box<[i32]>) -> Self {
        Self::from_vec(buffer.into_vec())
    }
}

impl From<IntList> for Vec<i32> {
    fn from(list: IntList) -> Self {
        list.into_vec()
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl IntoIterator for IntList {
    type Item = i32;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { i: 0, list: self }
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { i: 0, list: self }
    }
}

/// An owning iterator over the elements of an [`IntList`].
pub struct IntoIter {
    i: usize,
    list: IntList,
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.list.get(self.i)?;
        self.i += 1;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntoIter {}

/// A borrowing iterator over the elements of an [`IntList`].
pub struct Iter<'a> {
    i: usize,
    list: &'a IntList,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.list.get(self.i)?;
        self.i += 1;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
