// Shared helpers that are not tied to a service or the UI

pub mod date;
