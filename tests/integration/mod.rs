//! Integration tests for docset selection

mod cli_commands;
