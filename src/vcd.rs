// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
pub(crate) mod error;
pub(crate) mod parse;
pub(crate) mod reader;
pub(crate) mod signal;
pub(crate) mod types;
pub(crate) mod utilities;
