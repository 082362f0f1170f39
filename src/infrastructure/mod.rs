pub mod drivers;
pub mod services;
pub mod tasks;
