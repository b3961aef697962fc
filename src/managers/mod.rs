// Tab Session Lite state managers
// Managers own persisted state: the session collection.

pub mod session_repository;
