// src/domain/agent.rs
use std::collections::HashMap;

pub const ALL_LOCATIONS: &str = "All Locations";
pub const LOCATIONS: [&str; 6] = [
    ALL_LOCATIONS,
    "Los Angeles",
    "New York",
    "Beverly Hills",
    "Miami",
    "Europe",
];

const EUROPEAN_COUNTRIES: &[&str] = &[
    "Switzerland",
    "Italy",
    "France",
    "Spain",
    "Monaco",
    "United Kingdom",
    "Portugal",
    "Greece",
    "Austria",
    "Germany",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub agency: &'static str,
    /// "City, Region" where region is a US state code or a country.
    pub location: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub sales: &'static str,
    pub properties: u32,
    pub specialties: &'static [&'static str],
    pub bio: &'static str,
    pub verified: bool,
}

impl Agent {
    pub fn is_in_europe(&self) -> bool {
        self.location
            .rsplit(',')
            .next()
            .map(str::trim)
            .is_some_and(|region| EUROPEAN_COUNTRIES.contains(&region))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentQuery {
    pub text: String,
    /// `None` means every location.
    pub location: Option<String>,
}

impl AgentQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = params
            .get("q")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        let location = params
            .get("location")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty() && *v != ALL_LOCATIONS)
            .map(str::to_string);
        Self { text, location }
    }

    pub fn matches(&self, agent: &Agent) -> bool {
        let needle = self.text.to_lowercase();
        let text_ok = needle.is_empty()
            || agent.name.to_lowercase().contains(&needle)
            || agent.agency.to_lowercase().contains(&needle);

        let location_ok = match self.location.as_deref() {
            None => true,
            Some("Europe") => agent.is_in_europe(),
            Some(loc) => agent.location.contains(loc),
        };

        text_ok && location_ok
    }

    pub fn apply<'a>(&self, agents: &'a [Agent]) -> Vec<&'a Agent> {
        agents.iter().filter(|a| self.matches(a)).collect()
    }
}
