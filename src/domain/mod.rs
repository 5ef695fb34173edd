pub mod agent;
pub mod contact;
pub mod filter;
pub mod journal;
pub mod listing;
pub mod saved;
pub mod toast;
pub mod user;
