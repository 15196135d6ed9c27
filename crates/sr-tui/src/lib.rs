//! Terminal UI for Sumrush.
//!
//! A ratatui front end over [`sr_core::QuizSession`]: a setup screen, a
//! question screen with a live countdown, and a summary screen that offers
//! a replay. The periodic tick is owned here, never by the session.

pub mod app;
pub mod logging;
pub mod screens;
pub mod shared;
pub mod terminal;
pub mod ticker;
