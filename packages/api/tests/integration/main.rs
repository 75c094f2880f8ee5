#![cfg(feature = "server")]

mod events_tests;
mod invites_tests;
mod session_tests;
