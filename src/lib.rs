//! Backend de alquiler de vehículos
//!
//! Lista vehículos disponibles, crea reservas, consulta el saldo actual y
//! liquida el alquiler al devolver el vehículo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
