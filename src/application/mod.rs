// Application layer - Bill estimation and appliance inventory use cases
pub mod appliance_repository;
pub mod appliance_service;
pub mod bill_repository;
pub mod bill_service;
pub mod error;
pub mod validation;
