// iter.rs

use std::{fmt, iter::FusedIterator, ptr, slice};

use super::type_bag::AnyTypeBag;

/// Cursor over every entity of an `EntityBag`: bag by bag in registry order,
/// then entity by entity inside each bag.
///
/// Inserting into the bag ends every iteration in progress; the borrow checker
/// enforces this since an `Iter` borrows the bag.
pub struct Iter<'a, B: ?Sized + 'a> {
    bags: &'a [Box<dyn AnyTypeBag<B>>],
    bag_index: usize,
    entity_index: usize,
}

impl<'a, B: ?Sized> Iter<'a, B> {
    pub(crate) fn begin(bags: &'a [Box<dyn AnyTypeBag<B>>]) -> Self {
        let mut iter = Self {
            bags,
            bag_index: 0,
            entity_index: 0,
        };
        iter.skip_empty_bags();
        iter
    }

    pub(crate) fn end(bags: &'a [Box<dyn AnyTypeBag<B>>]) -> Self {
        Self {
            bags,
            bag_index: bags.len(),
            entity_index: 0,
        }
    }

    // bags are created by their first insertion, so this only matters once
    // a bag can be emptied
    fn skip_empty_bags(&mut self) {
        while self.bag_index < self.bags.len() && self.bags[self.bag_index].is_empty() {
            self.bag_index += 1;
        }
    }

    pub fn is_end(&self) -> bool {
        self.bag_index >= self.bags.len()
    }

    /// Slot of the current bag and index of the current entity inside it.
    pub fn position(&self) -> (usize, usize) {
        (self.bag_index, self.entity_index)
    }

    pub fn current(&self) -> Option<&'a B> {
        let bags = self.bags;
        bags.get(self.bag_index)?.entity(self.entity_index)
    }

    /// Panics when called on the end cursor.
    pub fn get(&self) -> &'a B {
        match self.current() {
            Some(entity) => entity,
            None => panic!(
                "dereferenced an EntityBag iterator at its end (bag {} of {})",
                self.bag_index,
                self.bags.len()
            ),
        }
    }

    /// Moves to the next entity. Does nothing once the end is reached.
    pub fn advance(&mut self) {
        if self.is_end() {
            return;
        }
        if self.entity_index + 1 < self.bags[self.bag_index].len() {
            self.entity_index += 1;
        } else {
            self.bag_index += 1;
            self.entity_index = 0;
            self.skip_empty_bags();
        }
    }

    fn remaining(&self) -> usize {
        if self.is_end() {
            return 0;
        }
        let in_bags: usize = self.bags[self.bag_index..]
            .iter()
            .map(|bag| bag.len())
            .sum();
        in_bags - self.entity_index
    }
}

impl<'a, B: ?Sized> Iterator for Iter<'a, B> {
    type Item = &'a B;

    fn next(&mut self) -> Option<Self::Item> {
        let entity = self.current()?;
        self.advance();
        Some(entity)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<B: ?Sized> ExactSizeIterator for Iter<'_, B> {}

impl<B: ?Sized> FusedIterator for Iter<'_, B> {}

impl<B: ?Sized> Clone for Iter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            bags: self.bags,
            bag_index: self.bag_index,
            entity_index: self.entity_index,
        }
    }
}

// Cursors are only comparable within one container. Two distinct empty
// containers share the dangling `Vec` pointer, so their cursors compare equal.
impl<B: ?Sized> PartialEq for Iter<'_, B> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.bags.as_ptr(), other.bags.as_ptr())
            && self.bag_index == other.bag_index
            && self.entity_index == other.entity_index
    }
}

impl<B: ?Sized> Eq for Iter<'_, B> {}

impl<B: ?Sized> fmt::Debug for Iter<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("bag_index", &self.bag_index)
            .field("entity_index", &self.entity_index)
            .field("bag_count", &self.bags.len())
            .finish()
    }
}

/// Mutable counterpart of `Iter`, same order.
pub struct IterMut<'a, B: ?Sized + 'a> {
    bags: slice::IterMut<'a, Box<dyn AnyTypeBag<B>>>,
    current: Option<Box<dyn Iterator<Item = &'a mut B> + 'a>>,
    remaining: usize,
}

impl<'a, B: ?Sized> IterMut<'a, B> {
    pub(crate) fn new(bags: &'a mut [Box<dyn AnyTypeBag<B>>]) -> Self {
        let remaining = bags.iter().map(|bag| bag.len()).sum();
        Self {
            bags: bags.iter_mut(),
            current: None,
            remaining,
        }
    }
}

impl<'a, B: ?Sized> Iterator for IterMut<'a, B> {
    type Item = &'a mut B;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entities) = self.current.as_mut() {
                if let Some(entity) = entities.next() {
                    self.remaining -= 1;
                    return Some(entity);
                }
            }
            let bag = self.bags.next()?;
            self.current = Some(bag.entities_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B: ?Sized> ExactSizeIterator for IterMut<'_, B> {}

impl<B: ?Sized> FusedIterator for IterMut<'_, B> {}
