pub mod admin;
pub mod check;
