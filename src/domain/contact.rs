// src/domain/contact.rs
use std::collections::HashMap;

use crate::catalog::site::{CONTACT_BUDGETS, CONTACT_INTERESTS};

/// A contact-form submission. Never stored; the router only logs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub budget: String,
    pub message: String,
}

impl ContactRequest {
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |key: &str| form.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        let choice = |key: &str, options: &[(&str, &str)]| {
            let v = field(key);
            if options.iter().any(|(value, _)| *value == v) {
                v
            } else {
                String::new()
            }
        };

        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            interest: choice("interest", &CONTACT_INTERESTS),
            budget: choice("budget", &CONTACT_BUDGETS),
            message: field("message"),
        }
    }

    /// Labels of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("Full Name");
        }
        if self.email.is_empty() {
            missing.push("Email");
        }
        if self.message.is_empty() {
            missing.push("Message");
        }
        missing
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
