// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{IntListError, Result};

/// A single list element, owned by the previous element or by the head slot of an [`IntList`].
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(value: i32) -> Box<Self> {
        Box::new(Self { value, next: None })
    }
}

/// A singly linked list of `i32` values.
///
/// The list owns all of its nodes through the `head` slot.
/// An empty list is represented by an empty slot and never by a sentinel node.
#[derive(Default)]
pub struct IntList {
    head: Option<Box<Node>>,
}

impl IntList {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Releases all elements and leaves an empty list behind.
    /// Calling this on an empty list does nothing.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        let mut current = self.head.take();

        // Unlink every node before it goes out of scope, so that dropping a long chain
        // doesn't recurse once per node.
        while let Some(mut node) = current {
            current = node.next.take();
            released += 1;
        }

        if released > 0 {
            debug!("Released {} list nodes", released);
        }
    }

    /// This operation computes in *O*(*n*) time.
    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|&element| element == value)
    }

    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&i32> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut i32> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            current: self.head.as_deref_mut(),
        }
    }

    /// This operation computes in *O*(*n*) time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes the first element and returns its value.
    ///
    /// Fails with [`IntListError::EmptyList`] if there is nothing to pop.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Result<i32> {
        let node = self.head.take().ok_or(IntListError::EmptyList)?;
        self.head = node.next;

        trace!("Popped {} from the front", node.value);
        Ok(node.value)
    }

    /// Appends `value` after the current last element.
    /// On an empty list, the new element simply becomes the first one.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn push_back(&mut self, value: i32) {
        *self.tail_slot() = Some(Node::new(value));
        trace!("Pushed {} to the back", value);
    }

    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, value: i32) {
        let mut node = Node::new(value);
        node.next = self.head.take();
        self.head = Some(node);

        trace!("Pushed {} to the front", value);
    }

    /// Removes the first element (in head-to-tail order) that equals `value` and returns its value.
    /// Later elements with the same value are left untouched.
    ///
    /// Fails with [`IntListError::ValueNotFound`] and leaves the list unchanged if no element matches.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn remove_by_value(&mut self, value: i32) -> Result<i32> {
        let mut cursor = &mut self.head;

        while let Some(mut node) = cursor.take() {
            if node.value == value {
                *cursor = node.next.take();
                trace!("Removed {}", value);
                return Ok(node.value);
            }

            cursor = &mut cursor.insert(node).next;
        }

        debug!("Cannot remove {}, no element has this value", value);
        Err(IntListError::ValueNotFound(value))
    }

    /// Keeps only the elements for which `f` returns `true` and releases all others.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut i32) -> bool,
    {
        let mut cursor = &mut self.head;

        while let Some(mut node) = cursor.take() {
            if f(&mut node.value) {
                cursor = &mut cursor.insert(node).next;
            } else {
                *cursor = node.next.take();
                trace!("Released {} while retaining", node.value);
            }
        }
    }

    /// Returns the empty link after the last element (which is the head slot for an empty list).
    fn tail_slot(&mut self) -> &mut Option<Box<Node>> {
        let mut cursor = &mut self.head;

        while let Some(node) = cursor {
            cursor = &mut node.next;
        }

        cursor
    }
}

impl Clone for IntList {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for IntList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Eq for IntList {}

impl Extend<i32> for IntList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut cursor = self.tail_slot();

        for value in iter {
            cursor = &mut cursor.insert(Node::new(value)).next;
        }
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl IntoIterator for IntList {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut IntList {
    type Item = &'a mut i32;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}

/// Head-to-tail traversal of an [`IntList`].
/// A fresh call to [`IntList::iter`] always starts over at the first element.
pub struct Iter<'a> {
    current: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<&'a i32> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a> FusedIterator for Iter<'a> {}

pub struct IterMut<'a> {
    current: Option<&'a mut Node>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut i32;

    fn next(&mut self) -> Option<&'a mut i32> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<'a> FusedIterator for IterMut<'a> {}

/// Consumes an [`IntList`] by popping its elements from the front.
pub struct IntoIter(IntList);

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.0.pop_front().ok()
    }
}

impl FusedIterator for IntoIter {}
