use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod error;

pub use self::algorithms::add_reversed_digits;
pub use self::error::Error;

/// A doubly-linked list with owned nodes, kept as a cycle through a
/// payload-less ghost node.
///
/// The ghost node stands in for both ends at once: its `next` is the front
/// of the list, its `prev` is the back, and in an empty list it links to
/// itself. Every structural operation is a splice, relinking a node and its
/// two neighbours, so insertion and removal at a known node cost *O*(1),
/// while reaching a position by index costs *O*(*n*).
///
/// Positions are 0-indexed. A list of length *n* has *n* + 1 cursor
/// locations, with location *n* being the ghost node.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (possibly the ghost node).
pub struct List<T> {
    ghost: Box<Node<Erased>>,
    #[cfg(feature = "length")]
    /// the number of element nodes in the cycle
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// One element of the cycle. The `next` edge is the owning direction: a node
/// is freed exactly once, through the `Box` recovered from its pointer, and
/// never through a `prev` edge.
///
/// `repr(C)` pins `next` and `prev` at the same offsets for every `T`, so the
/// ghost node (a `Node<Erased>`) can be viewed as a `Node<T>` as long as its
/// `element` is never touched.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

/// A chain of nodes `front..=back` temporarily taken out of a list.
///
/// While detached, `front.prev` and `back.next` are stale and must not be
/// read.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Make `next` the successor of `prev` and mirror the back-link.
///
/// It is unsafe because both pointers must be valid nodes; whether the
/// resulting cycle is well-formed is up to the caller.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// Link machinery. Everything public is built from these.
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        // The cast is sound because of `repr(C)` and because the ghost's
        // element is never read at type `T`.
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (the first element, or the
        // ghost itself in an empty list).
        unsafe { self.ghost_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (the last element, or the
        // ghost itself in an empty list).
        unsafe { self.ghost_node().as_ref().prev }
    }

    /// Splice a detached `node` into the cycle between `prev` and `next`,
    /// taking ownership of it.
    ///
    /// It is unsafe because it does not check that `prev` and `next` belong
    /// to this list, nor (outside `debug_assertions`) that they are adjacent.
    /// Violating either makes the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Splice a single `node` out of the cycle and recover its box.
    ///
    /// It is unsafe because it does not check that `node` is a non-ghost node
    /// of this list; passing anything else makes the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Take every element node out of the list at once, or `None` if there
    /// are none. The list is left empty with the ghost self-linked.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        let (front, back) = (self.front_node(), self.back_node());
        #[cfg(feature = "length")]
        let len = std::mem::replace(&mut self.len, 0);
        // SAFETY: the ghost is a valid node; self-linking it empties the list
        // while `front..=back` keeps the whole former chain.
        unsafe { connect(self.ghost_node(), self.ghost_node()) };
        let _marker = PhantomData;
        Some(DetachedNodes {
            front,
            back,
            #[cfg(feature = "length")]
            len,
            _marker,
        })
    }

    /// Splice a detached chain into the cycle between `prev` and `next`.
    ///
    /// It is unsafe for the same reasons as [`attach_node`]: `prev` and
    /// `next` must be adjacent nodes of this list.
    ///
    /// [`attach_node`]: List::attach_node
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        #[cfg(feature = "length")]
        {
            self.len += detached.len;
        }
    }

    /// Detach the front node, keeping its allocation.
    pub(crate) fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a valid
        // non-ghost node.
        Some(unsafe { self.detach_node(self.front_node()) })
    }

    /// Re-attach a detached node at the back, reusing its allocation.
    pub(crate) fn push_back_node(&mut self, node: Box<Node<T>>) {
        let node = NonNull::from(Box::leak(node));
        // SAFETY: the back node and the ghost are adjacent by definition.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use splice_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = new_ghost();
        #[cfg(feature = "length")]
        let len = 0;
        let _marker = PhantomData;
        Self {
            ghost,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }

    /// Returns `true` if the `List` holds no elements. *O*(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// *O*(1) with the `length` feature (default), *O*(*n*) without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements. *O*(*n*).
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a valid
        // non-ghost node holding an element.
        unsafe { Some(&self.front_node().as_ref().element) }
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a valid
        // non-ghost node holding an element.
        unsafe { Some(&mut self.front_node().as_mut().element) }
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the back node is a valid
        // non-ghost node holding an element.
        unsafe { Some(&self.back_node().as_ref().element) }
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the back node is a valid
        // non-ghost node holding an element.
        unsafe { Some(&mut self.back_node().as_mut().element) }
    }

    /// Adds an element first in the list. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of the list. *O*(1), since the ghost
    /// node already knows where the back is.
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Adds an element at position `at`, shifting everything after it.
    /// `at == len` appends. *O*(*n*).
    ///
    /// Unlike [`insert`](List::insert), an out-of-bounds position is reported
    /// as [`Error::OutOfBounds`] and the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.try_insert(1, 4), Ok(()));
    /// assert_eq!(list.to_vec(), vec![1, 4, 2, 3]);
    /// assert_eq!(list.try_insert(9, 5), Err(Error::OutOfBounds(9)));
    /// assert_eq!(list.to_vec(), vec![1, 4, 2, 3]);
    /// ```
    pub fn try_insert(&mut self, at: usize, elt: T) -> Result<(), Error> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_forward(at).map_err(|_| Error::OutOfBounds(at))?;
        cursor.insert(elt);
        Ok(())
    }

    /// Adds an element at position `at`, shifting everything after it.
    /// `at == len` appends. *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `at > len`. See [`try_insert`](List::try_insert) for the
    /// non-panicking form.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.insert(2, 4);
    /// list.insert(4, 5);
    /// assert_eq!(list.into_vec(), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) {
        if let Err(err) = self.try_insert(at, elt) {
            panic!("{}", err);
        }
    }

    /// Removes the element at position `at` and returns it. *O*(*n*).
    ///
    /// Unlike [`remove`](List::remove), an out-of-bounds position is reported
    /// as [`Error::OutOfBounds`] and the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{Error, List};
    ///
    /// let mut list = List::from([5, 4, 3, 1, 0]);
    /// assert_eq!(list.try_remove(2), Ok(3));
    /// assert_eq!(list.try_remove(7), Err(Error::OutOfBounds(7)));
    /// assert_eq!(list.into_vec(), vec![5, 4, 1, 0]);
    /// ```
    pub fn try_remove(&mut self, at: usize) -> Result<T, Error> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_forward(at).map_err(|_| Error::OutOfBounds(at))?;
        cursor.remove().ok_or(Error::OutOfBounds(at))
    }

    /// Removes the element at position `at` and returns it. *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`. See [`try_remove`](List::try_remove) for the
    /// non-panicking form.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.remove(0), 3);
    /// assert_eq!(list.remove(0), 1);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        match self.try_remove(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }

    /// Moves all elements of `other` to the back of this list, leaving
    /// `other` empty. Reuses the nodes; *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from(['a']);
    /// let mut other = List::from(['b', 'c']);
    ///
    /// list.append(&mut other);
    ///
    /// assert_eq!(list.into_vec(), vec!['a', 'b', 'c']);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the back node and the ghost are adjacent nodes of this
            // list.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Provides a cursor at position `at`. Position `len` is the ghost node.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        cursor.seek_to(at).expect("cursor position out of bounds");
        cursor
    }

    /// Provides a cursor at the front node (the ghost node if the list is
    /// empty).
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides an editing cursor at position `at`. Position `len` is the
    /// ghost node.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// // Splice out the node at position 1, touching only its neighbours.
    /// assert_eq!(list.cursor_mut(1).remove(), Some(2));
    /// assert_eq!(list.into_vec(), vec![1, 3]);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_to(at).expect("cursor position out of bounds");
        cursor
    }

    /// Provides an editing cursor at the front node (the ghost node if the
    /// list is empty).
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.front_node();
        CursorMut::new(
            self,
            current,
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides an editing cursor at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.ghost_node();
        #[cfg(feature = "length")]
        let at = self.len;
        CursorMut::new(
            self,
            current,
            #[cfg(feature = "length")]
            at,
        )
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a node that is not yet part of any cycle. Its links are
    /// dangling and must not be read before it is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        NonNull::from(Box::leak(node))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let mut ghost = Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        element: Erased,
    });
    let ptr = NonNull::from(ghost.as_mut());
    ghost.next = ptr;
    ghost.prev = ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type
// parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the whole cycle in both directions, asserting that every
    /// back-link mirrors a forward link and that the cached length agrees
    /// with the traversal count.
    pub(crate) fn check_links(&self) {
        unsafe {
            let ghost = self.ghost_node();
            let mut forward = 0;
            let mut node = ghost;
            loop {
                let next = node.as_ref().next;
                assert_eq!(next.as_ref().prev, node);
                node = next;
                if node == ghost {
                    break;
                }
                forward += 1;
            }
            let mut backward = 0;
            let mut node = ghost;
            loop {
                let prev = node.as_ref().prev;
                assert_eq!(prev.as_ref().next, node);
                node = prev;
                if node == ghost {
                    break;
                }
                backward += 1;
            }
            assert_eq!(forward, backward);
            #[cfg(feature = "length")]
            assert_eq!(forward, self.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Error;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.check_links();
        list.push_back(1);
        assert!(!list.is_empty());
        list.check_links();
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.check_links();
    }

    #[test]
    fn list_drop_frees_each_node_once() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.check_links();
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));

        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        list.check_links();
    }

    #[test]
    fn list_front_and_back_mut() {
        let mut list = List::from([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(list.into_vec(), vec![10, 2, 30]);
    }

    #[test]
    fn list_positional_insert_and_remove() {
        let mut list = List::from([5, 4, 3, 1, 0]);
        // the classic scenario: dropping the third element
        assert_eq!(list.try_remove(2), Ok(3));
        list.check_links();
        assert_eq!(list.to_vec(), vec![5, 4, 1, 0]);

        assert_eq!(list.try_insert(2, 3), Ok(()));
        list.check_links();
        assert_eq!(list.to_vec(), vec![5, 4, 3, 1, 0]);

        // position 0 is the front, position len is the back
        assert_eq!(list.try_remove(0), Ok(5));
        assert_eq!(list.try_insert(4, 9), Ok(()));
        assert_eq!(list.to_vec(), vec![4, 3, 1, 0, 9]);
    }

    #[test]
    fn list_positional_errors_leave_list_untouched() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list.try_remove(3), Err(Error::OutOfBounds(3)));
        assert_eq!(list.try_insert(4, 9), Err(Error::OutOfBounds(4)));
        list.check_links();
        assert_eq!(list.len(), 3);
        assert_eq!(list.into_vec(), vec![1, 2, 3]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.try_remove(0), Err(Error::OutOfBounds(0)));
        empty.check_links();
    }

    #[test]
    #[should_panic]
    fn list_remove_past_the_end_panics() {
        let mut list = List::from([1, 2, 3]);
        list.remove(3);
    }

    #[test]
    fn list_append() {
        let mut list = List::from([1, 2]);
        let mut other = List::from([3, 4, 5]);
        list.append(&mut other);
        list.check_links();
        other.check_links();
        assert!(other.is_empty());
        assert_eq!(list.len(), 5);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);

        // appending an empty list is a no-op
        list.append(&mut List::new());
        assert_eq!(list.len(), 5);

        // appending onto an empty list moves everything
        let mut fresh = List::new();
        fresh.append(&mut list);
        assert!(list.is_empty());
        assert_eq!(fresh.into_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[cfg(feature = "length")]
    #[test]
    fn list_len_tracks_every_operation() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front();
        assert_eq!(list.len(), 0);

        list.append(&mut List::from([0, 1, 2, 3, 4]));
        assert_eq!(list.len(), 5);

        list.remove(3);
        assert_eq!(list.len(), 4);

        list.insert(2, 9);
        assert_eq!(list.len(), 5);

        list.clear();
        assert_eq!(list.len(), 0);
    }
}
