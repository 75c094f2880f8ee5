mod home;
pub use home::ProjectHome;

mod not_found;
pub use not_found::NotFound;
