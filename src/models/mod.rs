// Module exports for models

pub mod movie;
