// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A singly linked list of `i32` values that owns its nodes.
//!
//! Every node is boxed on insertion and owned by exactly one link: either the head slot of the
//! [`IntList`] or the `next` field of the previous node.
//! Nodes are therefore released exactly once, when they are popped, removed, retained away,
//! cleared or when the list is dropped, and all functions can be used without resorting to `unsafe`.
//!
//! ```
//! use int_list::IntList;
//!
//! let mut list = IntList::new();
//! list.push_front(1);
//! list.push_back(2);
//! list.push_back(3);
//! assert_eq!(list.remove_by_value(2), Ok(2));
//! list.push_front(7);
//!
//! assert!(list.iter().copied().eq([7, 1, 3]));
//! ```
//!
//! The list never prints by itself.
//! Use [`IntList::write_to`] for an arbitrary sink or [`IntList::print`] for standard output.

mod base;
mod printing;

pub use base::*;
