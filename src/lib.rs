//! FleetFlow - backend de gestión de flota
//!
//! Vehículos, drivers, trips, mantenimiento y gastos de combustible,
//! con el ciclo de vida de trips como máquina de estados explícita y
//! analytics derivados de los logs.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
