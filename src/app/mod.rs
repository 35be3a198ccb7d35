pub mod cli;
pub mod game;
pub mod menu;
pub mod state;
