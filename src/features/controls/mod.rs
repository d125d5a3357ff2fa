//! Controls Feature - Buttons, Cards, Tooltips and Progress

pub mod page;
