// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Recoverable failures of [`IntList`] operations.
///
/// Running out of memory while allocating a node is not one of them:
/// it aborts the process, just like any other `Box` allocation.
///
/// [`IntList`]: crate::single_list::IntList
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum IntListError {
    #[error("the list is empty")]
    EmptyList,
    #[error("value {0} is not in the list")]
    ValueNotFound(i32),
}

pub type Result<T, E = IntListError> = core::result::Result<T, E>;
