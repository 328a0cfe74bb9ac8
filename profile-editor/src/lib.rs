//! Profile editor built on the dispatch runtime
//!
//! The editor shows the current profile and a "New Profile" button. The
//! button holds a dispatch sink and sends `clear current profile` actions
//! into it; the main loop feeds those actions to the store.

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod profile;
pub mod reducer;
pub mod state;
pub mod terminal;
