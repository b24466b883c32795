//! Articles Infrastructure Layer

pub mod postgres;
