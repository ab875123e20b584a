// Service module exports

pub mod catalog;
pub mod countdown;
pub mod settings;
