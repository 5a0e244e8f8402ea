pub mod about;
pub mod history;
pub mod home;
