mod auth_tests;
mod content_tests;
mod forms_tests;
mod listings_tests;
mod saved_tests;
