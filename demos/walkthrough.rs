// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use int_list::{IntList, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().filter_or("INT_LIST_LOG", "info"));

    let mut list = IntList::new();
    list.push_front(1);
    list.extend([2, 3, 4]);
    info!("Built {:?}", list);

    list.remove_by_value(3)?;
    list.push_back(6);
    list.push_front(7);

    list.print();
    list.clear();

    Ok(())
}
