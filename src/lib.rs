pub mod agenda;
pub mod cli;
pub mod grid;
pub mod pages;
pub mod routes;
pub mod schedule;
pub mod server;
