pub mod agents;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod marketing;
pub mod not_found;
pub mod properties;
pub mod property_detail;
pub mod saved;

pub use agents::{agent_detail_page, agents_page};
pub use auth::{auth_page, AuthMode, AuthVm};
pub use blog::blog_page;
pub use contact::contact_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use forgot_password::forgot_password_page;
pub use home::home_page;
pub use marketing::{about_page, investments_page, pricing_page};
pub use not_found::{error_page, not_found_page};
pub use properties::properties_page;
pub use property_detail::{property_detail_page, PropertyDetailVm};
pub use saved::{saved_page, saved_sign_in_page};
