pub mod decor;
pub mod gui;
pub mod logging;
pub mod settings;
