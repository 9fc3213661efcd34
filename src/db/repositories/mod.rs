pub mod activities;
pub mod members;
pub mod projects;
pub mod rooms;
pub mod stages;
