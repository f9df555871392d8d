// Domain layer - Appliance and bill models
pub mod appliance;
pub mod bill;
pub mod user_appliance;
