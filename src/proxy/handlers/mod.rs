// Handlers module - API endpoint handlers

pub mod health;
pub mod orders;
pub mod zr_express;
