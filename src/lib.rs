// lib.rs - Library root for the noteworthy sticky-note board

pub mod app;
pub mod board;
pub mod buffer;
pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod geometry;
pub mod mode;
pub mod note;
pub mod page;
pub mod paths;
pub mod signal;
pub mod storage;
pub mod ui;
pub mod viewport;
pub mod wrap;
