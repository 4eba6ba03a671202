pub mod base_commands;
