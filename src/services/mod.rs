// Service module exports

pub mod event;
pub mod session;
pub mod settings;
