//! Middleware del sistema
//!
//! Este módulo contiene la configuración de CORS del servidor.

pub mod cors;

pub use cors::*;
