// This file makes the screen modules available to the rest of the application.

pub mod events;
pub mod home;
pub mod participants;
pub mod prospects;
pub mod speakers;
