mod avatar;
pub mod footer;
pub mod friends;
pub mod guard;
pub mod nav_bar;
pub mod notification;
pub mod profile;

pub use avatar::Avatar;
