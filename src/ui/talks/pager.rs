// SPDX-License-Identifier: MPL-2.0
//! Page position over a fixed, non-empty list.
//!
//! Transitions only ever move to an existing neighbour: there is no
//! wraparound, and a rejected move leaves the position untouched.

/// Direction of a completed swipe, named after finger travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Content moves left: show the next page.
    Left,
    /// Content moves right: show the previous page.
    Right,
}

/// Pager over an ordered list of pages.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    pages: Vec<T>,
    index: usize,
}

impl<T> Pager<T> {
    /// Builds a pager positioned on the first page.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(pages: Vec<T>) -> Option<Self> {
        if pages.is_empty() {
            return None;
        }
        Some(Self { pages, index: 0 })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.pages[self.index]
    }

    #[must_use]
    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    /// Index of the page after `index`, if any.
    #[must_use]
    pub fn neighbor_after(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.pages.len()).then_some(next)
    }

    /// Index of the page before `index`, if any.
    #[must_use]
    pub fn neighbor_before(&self, index: usize) -> Option<usize> {
        if index >= self.pages.len() {
            return None;
        }
        index.checked_sub(1)
    }

    /// Applies a swipe and returns the new index, or `None` at a bound.
    pub fn swipe(&mut self, direction: Swipe) -> Option<usize> {
        let target = match direction {
            Swipe::Left => self.neighbor_after(self.index),
            Swipe::Right => self.neighbor_before(self.index),
        }?;
        self.index = target;
        Some(target)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.neighbor_after(self.index).is_some()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.neighbor_before(self.index).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager() -> Pager<&'static str> {
        Pager::new(vec!["a", "b", "c"]).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(Pager::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn starts_on_first_page() {
        let pager = pager();
        assert_eq!(pager.index(), 0);
        assert_eq!(*pager.current(), "a");
        assert_eq!(pager.len(), 3);
    }

    #[test]
    fn neighbor_after_stops_at_last_page() {
        let pager = pager();
        assert_eq!(pager.neighbor_after(0), Some(1));
        assert_eq!(pager.neighbor_after(1), Some(2));
        assert_eq!(pager.neighbor_after(2), None);
        assert_eq!(pager.neighbor_after(usize::MAX), None);
    }

    #[test]
    fn neighbor_before_stops_at_first_page() {
        let pager = pager();
        assert_eq!(pager.neighbor_before(0), None);
        assert_eq!(pager.neighbor_before(1), Some(0));
        assert_eq!(pager.neighbor_before(2), Some(1));
        assert_eq!(pager.neighbor_before(3), None);
    }

    #[test]
    fn swipes_walk_forward_and_back() {
        let mut pager = pager();
        assert_eq!(pager.swipe(Swipe::Left), Some(1));
        assert_eq!(pager.swipe(Swipe::Left), Some(2));
        assert_eq!(*pager.current(), "c");
        assert_eq!(pager.swipe(Swipe::Right), Some(1));
        assert_eq!(pager.index(), 1);
    }

    #[test]
    fn rejected_swipes_keep_position() {
        let mut pager = pager();
        assert_eq!(pager.swipe(Swipe::Right), None);
        assert_eq!(pager.index(), 0);

        pager.swipe(Swipe::Left);
        pager.swipe(Swipe::Left);
        assert_eq!(pager.swipe(Swipe::Left), None);
        assert_eq!(pager.index(), 2);
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let mut pager = Pager::new(vec![1]).unwrap();
        assert!(!pager.has_next());
        assert!(!pager.has_previous());
        assert_eq!(pager.swipe(Swipe::Left), None);
    }
}
