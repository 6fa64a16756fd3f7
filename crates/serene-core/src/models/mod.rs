pub mod instrument;
pub mod record;
pub mod user;
