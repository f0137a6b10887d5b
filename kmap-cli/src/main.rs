// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use kmap_cli::KMapApp;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = KMapApp::parse();
    app.exec()
}
