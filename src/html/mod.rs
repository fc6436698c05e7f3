use maud::{html, Markup};

pub mod pages;
mod wrappers;
