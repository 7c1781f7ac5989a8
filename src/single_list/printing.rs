// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use std::io::{self, Write};

use log::warn;

use super::base::IntList;

impl IntList {
    /// Writes every value followed by a newline to `sink`, in head-to-tail order.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for value in self {
            writeln!(sink, "{}", value)?;
        }

        Ok(())
    }

    /// Prints the list to standard output, one value per line.
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        if let Err(e) = self.write_to(&mut handle).and_then(|_| handle.flush()) {
            warn!("Failed to print the list: {}", e);
        }
    }
}

impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();

        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }

        for value in iter {
            write!(f, "\n{}", value)?;
        }

        Ok(())
    }
}
