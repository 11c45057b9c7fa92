use crate::list::{List, Node};
use crate::Error;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ptr::NonNull;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value. *O*(*n*).
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|elt| elt == x)
    }

    /// Copy the elements into a `Vec` in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Move the elements into a `Vec` in list order, consuming the list.
    ///
    /// Together with [`FromIterator`](std::iter::FromIterator), this is the
    /// boundary to ordinary sequence containers: building a list from a
    /// sequence and converting it back yields the original sequence.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Insert an element immediately before the first element matching the
    /// predicate. A match at the front moves the front. If nothing matches,
    /// the list is unchanged and the element is handed back as `Err`.
    /// *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// assert_eq!(list.insert_before_first(|&x| x > 2, 2), Ok(()));
    /// assert_eq!(list.insert_before_first(|&x| x > 9, 4), Err(4));
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_before_first<F>(&mut self, mut pred: F, elt: T) -> Result<(), T>
    where
        F: FnMut(&T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            // SAFETY: `node` is a non-ghost node of this list, so it and its
            // predecessor (the ghost at the front) are valid and adjacent.
            unsafe {
                if pred(&node.as_ref().element) {
                    let new = Node::new_detached(elt);
                    self.attach_node(node.as_ref().prev, node, new);
                    return Ok(());
                }
                node = node.as_ref().next;
            }
        }
        Err(elt)
    }

    /// Insert `elt` immediately before the first element equal to `value`.
    /// If the value is absent, the list is unchanged and `elt` is handed
    /// back as `Err`. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// assert_eq!(list.insert_before_value(&3, 2), Ok(()));
    /// assert_eq!(list.insert_before_value(&9, 4), Err(4));
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_before_value(&mut self, value: &T, elt: T) -> Result<(), T>
    where
        T: PartialEq,
    {
        self.insert_before_first(|e| e == value, elt)
    }

    /// Remove the first element matching the predicate and return it, or
    /// `None` (and no change) if nothing matches. A match at the front moves
    /// the front. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, -2, 3]);
    /// assert_eq!(list.remove_first(|&x| x < 0), Some(-2));
    /// assert_eq!(list.remove_first(|&x| x < 0), None);
    /// assert_eq!(list.into_vec(), vec![1, 3]);
    /// ```
    pub fn remove_first<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            // SAFETY: `node` is a non-ghost node of this list.
            if pred(unsafe { &node.as_ref().element }) {
                let node = unsafe { self.detach_node(node) };
                return Some(node.into_element());
            }
            node = unsafe { node.as_ref().next };
        }
        None
    }

    /// Remove the first element equal to `value` and return it. Absence is a
    /// no-op reported as `None`, not an error. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.remove_value(&2), Some(2));
    /// assert_eq!(list.remove_value(&9), None);
    /// assert_eq!(list.into_vec(), vec![1, 3]);
    /// ```
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_first(|elt| elt == value)
    }

    /// Reverse the list in place by flipping every `next`/`prev` pair,
    /// including the ghost node's. No nodes move and no elements are
    /// touched. *O*(*n*) time, *O*(1) extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    ///
    /// // reversing twice restores the original order
    /// list.reverse();
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            // SAFETY: every node of a well-formed cycle has valid links, and
            // flipping both links of every node (ghost included) turns the
            // cycle around without breaking it.
            let next = unsafe { node.as_ref().next };
            unsafe { flip_links(node) };
            node = next;
            if node == ghost {
                break;
            }
        }
    }

    /// Recursive variant of [`reverse`](List::reverse): the rest of the list
    /// is reversed first, then the current node's own links are flipped on
    /// the way back out. Observably identical to the iterative form; the
    /// recursion is *O*(*n*) deep.
    pub fn reverse_recursive(&mut self) {
        // SAFETY: starts at the front node of a well-formed cycle; the
        // recursion stops at the ghost.
        unsafe { reverse_from(self.front_node(), self.ghost_node()) }
    }

    /// Remove the `n`-th node counted from the back (1-indexed: `n == 1` is
    /// the back node) and return its element, in a single pass.
    ///
    /// Two pointers scan the list offset by `n`: when the leading one runs
    /// off the end, the trailing one sits just before the target. If the
    /// lead runs off exactly as its head start ends, the target is the front
    /// node itself.
    ///
    /// `n == 0` and `n > len` are caller-contract violations reported as
    /// [`Error::OutOfBounds`], with the list left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.remove_nth_from_end(2), Ok(4));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 5]);
    ///
    /// assert_eq!(list.remove_nth_from_end(4), Ok(1)); // the front
    /// assert_eq!(list.remove_nth_from_end(9), Err(Error::OutOfBounds(9)));
    /// assert_eq!(list.into_vec(), vec![2, 3, 5]);
    /// ```
    pub fn remove_nth_from_end(&mut self, n: usize) -> Result<T, Error> {
        if n == 0 {
            return Err(Error::OutOfBounds(0));
        }
        let ghost = self.ghost_node();
        let mut lead = self.front_node();
        for _ in 0..n {
            if lead == ghost {
                return Err(Error::OutOfBounds(n));
            }
            // SAFETY: `lead` is a valid node of the cycle.
            lead = unsafe { lead.as_ref().next };
        }
        let mut trail = self.front_node();
        if lead == ghost {
            // `n` equals the length: the front node is the target.
            let node = unsafe { self.detach_node(trail) };
            return Ok(node.into_element());
        }
        // SAFETY: both pointers stay on valid nodes; `lead` stops on the
        // back node, leaving `trail` just before the target.
        unsafe {
            while lead.as_ref().next != ghost {
                lead = lead.as_ref().next;
                trail = trail.as_ref().next;
            }
            let target = trail.as_ref().next;
            Ok(self.detach_node(target).into_element())
        }
    }

    /// Stable three-way partition: reorder the list so that all elements the
    /// category function maps to `Less` come first, then all `Equal`, then
    /// all `Greater`, each group keeping its original relative order.
    ///
    /// The existing nodes are relinked through three temporary sub-chains
    /// and concatenated; no elements are moved or cloned. *O*(*n*).
    ///
    /// The classic 0/1/2 exercise is the category `|x| x.cmp(&1)`:
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 0, 1, 0, 2]);
    /// list.partition3(|x| x.cmp(&1));
    /// assert_eq!(list.into_vec(), vec![0, 0, 1, 1, 2, 2]);
    /// ```
    pub fn partition3<F>(&mut self, mut category: F)
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut less = List::new();
        let mut equal = List::new();
        let mut greater = List::new();
        while let Some(node) = self.pop_front_node() {
            let bucket = match category(&node.element) {
                Ordering::Less => &mut less,
                Ordering::Equal => &mut equal,
                Ordering::Greater => &mut greater,
            };
            bucket.push_back_node(node);
        }
        self.append(&mut less);
        self.append(&mut equal);
        self.append(&mut greater);
    }

    /// Regroup alternating elements: the 1st, 3rd, 5th, ... nodes come
    /// first, followed by the 2nd, 4th, 6th, ..., each group keeping its
    /// original relative order.
    ///
    /// Like [`partition3`](List::partition3), the existing nodes are
    /// relinked through two sub-chains and concatenated; no elements are
    /// moved or cloned. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// list.deinterleave();
    /// assert_eq!(list.into_vec(), vec![1, 3, 5, 2, 4]);
    /// ```
    pub fn deinterleave(&mut self) {
        let mut odd = List::new();
        let mut even = List::new();
        let mut take_odd = true;
        while let Some(node) = self.pop_front_node() {
            if take_odd {
                odd.push_back_node(node);
            } else {
                even.push_back_node(node);
            }
            take_odd = !take_odd;
        }
        self.append(&mut odd);
        self.append(&mut even);
    }
}

/// Flip the `next`/`prev` links of a single node.
unsafe fn flip_links<T>(node: NonNull<Node<T>>) {
    let node = node.as_ptr();
    mem::swap(&mut (*node).next, &mut (*node).prev);
}

/// Reverse the cycle from `node` onward: recurse to the ghost first, then
/// flip each node's links while unwinding (the ghost's included).
unsafe fn reverse_from<T>(node: NonNull<Node<T>>, ghost: NonNull<Node<T>>) {
    let next = node.as_ref().next;
    if node != ghost {
        reverse_from(next, ghost);
    }
    flip_links(node);
}

/// Add two numbers given as little-endian digit lists (least significant
/// digit at the front), propagating the carry. The result has
/// `max(a.len(), b.len())` digits, plus one if a final carry remains.
/// Two empty inputs give the empty list.
///
/// # Examples
///
/// ```
/// use splice_list::{add_reversed_digits, List};
///
/// // 45 + 4 = 49
/// let a = List::from([5, 4]);
/// let b = List::from([4]);
/// assert_eq!(add_reversed_digits(&a, &b).into_vec(), vec![9, 4]);
///
/// // 99 + 1 = 100
/// let a = List::from([9, 9]);
/// let b = List::from([1]);
/// assert_eq!(add_reversed_digits(&a, &b).into_vec(), vec![0, 0, 1]);
/// ```
pub fn add_reversed_digits(a: &List<u8>, b: &List<u8>) -> List<u8> {
    let (mut a, mut b) = (a.iter(), b.iter());
    let mut sum = List::new();
    let mut carry = 0;
    loop {
        let (x, y) = (a.next(), b.next());
        if x.is_none() && y.is_none() && carry == 0 {
            break;
        }
        let total = x.copied().unwrap_or(0) + y.copied().unwrap_or(0) + carry;
        sum.push_back(total % 10);
        carry = total / 10;
    }
    sum
}


#[cfg(test)]
mod proptests {
    use super::add_reversed_digits;
    use crate::List;
    use proptest::prelude::*;
    use std::iter::FromIterator;

    /// Little-endian digit list of `n`; zero is the single digit `[0]`.
    fn digits(mut n: u64) -> List<u8> {
        let mut list = List::new();
        loop {
            list.push_back((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        list
    }

    proptest! {
        #[test]
        fn sequence_round_trip(v in prop::collection::vec(any::<i32>(), 0..64)) {
            let list = List::from_iter(v.clone());
            list.check_links();
            prop_assert_eq!(list.into_vec(), v);
        }

        #[test]
        fn reverse_twice_is_identity(v in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut list = List::from_iter(v.clone());
            list.reverse();
            list.check_links();
            let mut reversed = v.clone();
            reversed.reverse();
            prop_assert_eq!(list.to_vec(), reversed);
            list.reverse();
            prop_assert_eq!(list.into_vec(), v);
        }

        #[test]
        fn recursive_reverse_agrees_with_iterative(
            v in prop::collection::vec(any::<i32>(), 0..64),
        ) {
            let mut a = List::from_iter(v.clone());
            let mut b = List::from_iter(v);
            a.reverse();
            b.reverse_recursive();
            b.check_links();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn partition3_matches_a_stable_sort(
            v in prop::collection::vec(0u8..3, 0..64),
        ) {
            let tagged = Vec::from_iter(v.into_iter().zip(0usize..));
            let mut list = List::from_iter(tagged.clone());
            list.partition3(|&(digit, _)| digit.cmp(&1));
            list.check_links();
            let mut expected = tagged;
            expected.sort_by_key(|&(digit, _)| digit);
            prop_assert_eq!(list.into_vec(), expected);
        }

        #[test]
        fn insertion_grows_length_by_one(
            v in prop::collection::vec(any::<i32>(), 0..32),
            elt in any::<i32>(),
            at in any::<prop::sample::Index>(),
        ) {
            let mut list = List::from_iter(v.clone());
            let at = at.index(v.len() + 1);
            prop_assert_eq!(list.try_insert(at, elt), Ok(()));
            list.check_links();
            prop_assert_eq!(list.len(), v.len() + 1);
        }

        #[test]
        fn deinterleave_matches_a_strided_model(
            v in prop::collection::vec(any::<i32>(), 0..64),
        ) {
            let mut list = List::from_iter(v.clone());
            list.deinterleave();
            list.check_links();
            let expected = Vec::from_iter(
                v.iter().step_by(2).chain(v.iter().skip(1).step_by(2)).copied(),
            );
            prop_assert_eq!(list.into_vec(), expected);
        }

        #[test]
        fn insertion_before_a_value_places_it_adjacent(
            v in prop::collection::vec(0i32..10, 0..32),
            x in 0i32..10,
        ) {
            let mut list = List::from_iter(v.clone());
            let result = list.insert_before_value(&x, -1);
            list.check_links();
            match v.iter().position(|e| *e == x) {
                Some(at) => {
                    prop_assert_eq!(result, Ok(()));
                    let out = list.into_vec();
                    prop_assert_eq!(out.len(), v.len() + 1);
                    prop_assert_eq!(out[at], -1);
                    prop_assert_eq!(out[at + 1], x);
                }
                None => {
                    prop_assert_eq!(result, Err(-1));
                    prop_assert_eq!(list.into_vec(), v);
                }
            }
        }

        #[test]
        fn value_removal_shrinks_length_by_at_most_one(
            v in prop::collection::vec(0i32..10, 0..32),
            x in 0i32..10,
        ) {
            let mut list = List::from_iter(v.clone());
            let removed = list.remove_value(&x);
            list.check_links();
            let expected = v.len() - removed.is_some() as usize;
            prop_assert_eq!(list.len(), expected);
        }

        #[test]
        fn digit_addition_matches_integer_addition(
            x in 0u64..1_000_000_000,
            y in 0u64..1_000_000_000,
        ) {
            let sum = add_reversed_digits(&digits(x), &digits(y));
            sum.check_links();
            prop_assert_eq!(sum, digits(x + y));
        }
    }
}
