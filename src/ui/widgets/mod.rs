// ui/widgets/mod.rs - UI widgets

pub mod board_canvas;
pub mod help_bar;
pub mod menu;
pub mod name_prompt;
pub mod note_card;
pub mod title;
