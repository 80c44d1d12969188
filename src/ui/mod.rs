pub(crate) mod render;
pub(crate) mod theme;
pub(crate) mod util;
pub(crate) mod view;


#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
