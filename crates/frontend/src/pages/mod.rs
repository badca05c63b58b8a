pub mod dashboard;
pub mod iframe_view;
pub mod login;
