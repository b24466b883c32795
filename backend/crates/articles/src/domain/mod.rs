//! Articles Domain Layer

pub mod entity;
pub mod repository;
