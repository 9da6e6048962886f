//! Terminal UI: the controller loop driving the match state machine, and
//! the board view with drop animation and winning-line highlight.

mod app;
mod game_view;

pub use app::App;
