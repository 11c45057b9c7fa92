use crate::list::{List, Node};
use crate::Error;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`: the crate's notion of a *node reference*.
///
/// A cursor is like an iterator, except that it can freely seek
/// back-and-forth. In a list with length *n* there are *n* + 1 valid cursor
/// locations, indexed by 0, 1, ..., *n*, where *n* is the ghost node.
///
/// # Examples
///
/// ```
/// use splice_list::List;
///
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // The checked moves refuse to cross the ghost node...
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
///
/// // ...the cyclic moves pass through it.
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

/// A cursor over a `List` with editing operations.
///
/// `CursorMut` is the O(1) splice surface: given the position it points at,
/// [`insert`] splices a fresh node in before it and [`remove`] splices the
/// pointed-at node out, touching only the immediate neighbours' links; no
/// traversal from the front is involved. Both work uniformly at the front
/// of the list, where the "previous node" is the ghost.
///
/// The yielded references are tied to the cursor's own borrow, so the list
/// cannot be read or written behind its back:
///
/// ```compile_fail
/// use splice_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
///
/// [`insert`]: CursorMut::insert
/// [`remove`]: CursorMut::remove
pub struct CursorMut<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid in a cyclic list.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid in a cyclic list.
                unsafe { self.current.as_ref().prev }
            }

            /// Move forward by `steps` without checking for the ghost node.
            ///
            /// It is unsafe because the index bookkeeping is wrong if the
            /// move passes through the ghost node.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                #[cfg(feature = "length")]
                {
                    self.index += steps;
                }
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward by `steps` without checking for the ghost node.
            ///
            /// It is unsafe because the index bookkeeping is wrong if the
            /// move passes through the ghost node.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                #[cfg(feature = "length")]
                {
                    self.index -= steps;
                }
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the position of the cursor, `0..=len`.
            #[cfg(feature = "length")]
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the underlying `List` is empty.
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor one step forward, passing through the ghost
            /// node if it is reached. *O*(1).
            pub fn move_next_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                #[cfg(feature = "length")]
                if self.is_ghost_node() {
                    self.index = 0;
                } else {
                    self.index += 1;
                }
                self.current = self.next_node();
            }

            /// Move the cursor one step backward, passing through the ghost
            /// node if it is reached. *O*(1).
            pub fn move_prev_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                #[cfg(feature = "length")]
                if self.is_front_node() {
                    self.index = self.list.len();
                } else {
                    self.index -= 1;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor one step forward, or return
            /// [`Error::AtBoundary`] if that would cross the ghost node.
            /// *O*(1).
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.move_next().is_err());
            /// assert_eq!(cursor.previous(), Some(&3)); // still at the end
            /// ```
            pub fn move_next(&mut self) -> Result<(), Error> {
                if !self.is_empty() && !self.is_ghost_node() {
                    self.move_next_cyclic();
                    return Ok(());
                }
                Err(Error::AtBoundary)
            }

            /// Move the cursor one step backward, or return
            /// [`Error::AtBoundary`] if that would cross the ghost node.
            /// *O*(1).
            pub fn move_prev(&mut self) -> Result<(), Error> {
                if !self.is_empty() && !self.is_front_node() {
                    self.move_prev_cyclic();
                    return Ok(());
                }
                Err(Error::AtBoundary)
            }

            /// Move the cursor forward by `steps`, stopping with
            /// [`Error::AtBoundary`] at the ghost node if the walk would
            /// cross it. *O*(*n*).
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), Error> {
                (0..steps).try_for_each(|_| self.move_next())
            }

            /// Move the cursor backward by `steps`, stopping with
            /// [`Error::AtBoundary`] at the front node if the walk would
            /// cross the ghost. *O*(*n*).
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), Error> {
                (0..steps).try_for_each(|_| self.move_prev())
            }

            /// Move the cursor to position `target`, or return
            /// [`Error::OutOfBounds`] (leaving the cursor where it was) if
            /// `target > len`. *O*(*n*).
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert!(cursor.seek_to(5).is_err());
            /// assert_eq!(cursor.current(), Some(&3)); // stayed put
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), Error> {
                #[cfg(feature = "length")]
                {
                    if target > self.list.len() {
                        return Err(Error::OutOfBounds(target));
                    }
                    // SAFETY: both the current index and `target` are within
                    // `0..=len`, so the move cannot cross the ghost node.
                    unsafe {
                        if target >= self.index {
                            self.seek_forward_fast(target - self.index);
                        } else {
                            self.seek_backward_fast(self.index - target);
                        }
                    }
                    Ok(())
                }
                #[cfg(not(feature = "length"))]
                {
                    let current = self.current;
                    self.move_to_start();
                    if self.seek_forward(target).is_err() {
                        self.current = current;
                        return Err(Error::OutOfBounds(target));
                    }
                    Ok(())
                }
            }

            /// Set the cursor to the front node. *O*(1).
            #[inline]
            pub fn move_to_start(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = 0;
                }
                self.current = self.list.front_node();
            }

            /// Set the cursor to the ghost node. *O*(1).
            #[inline]
            pub fn move_to_end(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = self.list.len();
                }
                self.current = self.list.ghost_node();
            }

            /// Return a reference to the element under the cursor, or `None`
            /// at the ghost node.
            pub fn current(&self) -> Option<&T> {
                if self.is_ghost_node() {
                    return None;
                }
                // SAFETY: non-ghost nodes always hold a valid element.
                unsafe { Some(&self.current.as_ref().element) }
            }

            /// Return a reference to the element before the cursor, or `None`
            /// at the front node.
            pub fn previous(&self) -> Option<&T> {
                if self.is_front_node() {
                    return None;
                }
                // SAFETY: the previous node of a non-front node is never the
                // ghost, and non-ghost nodes always hold a valid element.
                Some(unsafe { &self.prev_node().as_ref().element })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_struct(stringify!($CURSOR));
                f.field("list", &self.list)
                    .field("current", &self.current());
                #[cfg(feature = "length")]
                f.field("index", &self.index);
                f.finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    /// Return a mutable reference to the element under the cursor, or `None`
    /// at the ghost node.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes always hold a valid element.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Return a mutable reference to the element before the cursor, or
    /// `None` at the front node.
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-front node is never the ghost,
        // and non-ghost nodes always hold a valid element.
        Some(unsafe { &mut self.prev_node().as_mut().element })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Convert the mutable cursor into an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Splice a new node in immediately before the cursor, touching only the
    /// neighbours' links. The cursor stays on the same node; its index grows
    /// by 1. *O*(1).
    ///
    /// At the front of the list this moves the front (the node before the
    /// cursor is then the ghost); at the ghost node it appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_start();
    /// cursor.insert(0); // becomes [0, 1, 4, 2, 3], new front
    ///
    /// assert_eq!(list.into_vec(), vec![0, 1, 4, 2, 3]);
    /// ```
    pub fn insert(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the previous node and the current node are adjacent nodes
        // of this list, and `node` is freshly detached.
        unsafe { self.list.attach_node(self.prev_node(), self.current, node) };
        #[cfg(feature = "length")]
        {
            self.index += 1;
        }
    }

    /// Splice the node under the cursor out of the list and return its
    /// element, or return `None` at the ghost node. Only the neighbours'
    /// links are touched; the successor's back-link is rewired to the
    /// predecessor. The cursor moves to the successor. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 3, 5]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// assert_eq!(cursor.remove(), Some(3));
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Removing at the front moves the front.
    /// cursor.move_to_start();
    /// assert_eq!(cursor.remove(), Some(1));
    ///
    /// assert_eq!(list.into_vec(), vec![5]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: the current node is a valid non-ghost node of this list.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = node.next;
        Some(node.into_element())
    }

    /// Remove the node before the cursor and return its element, or return
    /// `None` at the front node. The cursor stays on the same node; its
    /// index shrinks by 1. *O*(1).
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::{Error, List};

    #[test]
    fn cursor_navigation() {
        let list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.previous(), None);

        assert_eq!(cursor.move_next(), Ok(()));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.previous(), Some(&1));

        assert_eq!(cursor.seek_forward(2), Ok(()));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), Some(&3));
        assert_eq!(cursor.move_next(), Err(Error::AtBoundary));

        assert_eq!(cursor.seek_backward(3), Ok(()));
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.move_prev(), Err(Error::AtBoundary));

        cursor.move_prev_cyclic();
        assert_eq!(cursor.current(), None);
        cursor.move_next_cyclic();
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn cursor_seek_to() {
        let list = List::from([1, 2, 3, 4]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.seek_to(3), Ok(()));
        assert_eq!(cursor.current(), Some(&4));
        assert_eq!(cursor.seek_to(1), Ok(()));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.seek_to(4), Ok(()));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.seek_to(5), Err(Error::OutOfBounds(5)));
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.backspace(), None);
        assert_eq!(cursor.move_next(), Err(Error::AtBoundary));
        assert_eq!(cursor.move_prev(), Err(Error::AtBoundary));

        cursor.insert(7);
        assert_eq!(list.into_vec(), vec![7]);
    }

    #[test]
    fn cursor_splice_in_before_node() {
        // insert before an interior node using only local links
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_mut(1);
        cursor.insert(9);
        assert_eq!(cursor.current(), Some(&2));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 2);
        list.check_links();
        assert_eq!(list.into_vec(), vec![1, 9, 2, 3]);

        // insert before the front node: the front moves
        let mut list = List::from([1, 2, 3]);
        list.cursor_start_mut().insert(0);
        list.check_links();
        assert_eq!(list.into_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn cursor_splice_out_given_node() {
        // remove an interior node given only a reference to it
        let mut list = List::from([1, 3, 5]);
        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.current(), Some(&5));
        list.check_links();
        assert_eq!(list.into_vec(), vec![1, 5]);

        // removing the back node leaves the cursor at the ghost
        let mut list = List::from([1, 3, 5]);
        let mut cursor = list.cursor_mut(2);
        assert_eq!(cursor.remove(), Some(5));
        assert_eq!(cursor.current(), None);
        list.check_links();
        assert_eq!(list.into_vec(), vec![1, 3]);
    }

    #[test]
    fn cursor_backspace() {
        let mut list = List::from([0, 1, 2, 3]);
        let mut cursor = list.cursor_mut(2);
        assert_eq!(cursor.backspace(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 1);
        list.check_links();
        assert_eq!(list.into_vec(), vec![0, 2, 3]);
    }

    #[test]
    fn cursor_reborrow_as_immutable() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_mut(1);
        *cursor.current_mut().unwrap() = 20;

        let reborrowed = cursor.as_cursor();
        assert_eq!(reborrowed.current(), Some(&20));
        assert_eq!(reborrowed.previous(), Some(&1));
        #[cfg(feature = "length")]
        assert_eq!(reborrowed.index(), 1);

        // the editing cursor is usable again once the re-borrow ends
        assert_eq!(cursor.remove(), Some(20));
        assert_eq!(list.into_vec(), vec![1, 3]);
    }

    #[test]
    fn cursor_mutation_through_references() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_mut(1);
        *cursor.current_mut().unwrap() *= 10;
        *cursor.previous_mut().unwrap() *= 100;
        assert_eq!(list.into_vec(), vec![100, 20, 3]);
    }
}
