// Adapters that need no terminal. Console-backed ones live in config::cli.

pub mod memory;
