// src/domain/listing.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    ForSale,
    ForRent,
    Sold,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
            ListingStatus::Sold => "Sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The listing agent as shown on cards; the full profile lives in the agents directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSummary {
    pub name: &'static str,
    pub avatar: &'static str,
    pub agency: &'static str,
}

/// A property in the static catalog. Never mutated after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub price: u64,
    /// Already carries its currency, e.g. "CHF 19,500,000".
    pub price_formatted: &'static str,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub area_unit: &'static str,
    pub category: &'static str,
    pub status: ListingStatus,
    pub featured: bool,
    pub images: &'static [&'static str],
    pub description: &'static str,
    pub amenities: &'static [&'static str],
    pub year_built: u16,
    /// Expected annual yield in percent.
    pub roi: Option<f32>,
    pub agent: AgentSummary,
}

impl Listing {
    pub fn cover_image(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }

    pub fn matches_text(&self, needle_lower: &str) -> bool {
        [self.title, self.location, self.city, self.country]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Gallery position with wrap-around in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    pub index: usize,
    pub len: usize,
}

impl Gallery {
    /// Out-of-range indexes wrap, so stale links still land on a real image.
    pub fn new(requested: usize, len: usize) -> Self {
        let index = if len == 0 { 0 } else { requested % len };
        Self { index, len }
    }

    pub fn next(self) -> usize {
        if self.len == 0 {
            0
        } else if self.index + 1 == self.len {
            0
        } else {
            self.index + 1
        }
    }

    pub fn prev(self) -> usize {
        if self.len == 0 {
            0
        } else if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        }
    }

    pub fn has_controls(self) -> bool {
        self.len > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_wraps_both_ways() {
        let g = Gallery::new(0, 3);
        assert_eq!(g.prev(), 2);
        assert_eq!(g.next(), 1);

        let last = Gallery::new(2, 3);
        assert_eq!(last.next(), 0);
        assert_eq!(last.prev(), 1);
    }

    #[test]
    fn gallery_clamps_out_of_range_and_empty() {
        assert_eq!(Gallery::new(7, 3).index, 1);
        let empty = Gallery::new(4, 0);
        assert_eq!((empty.index, empty.next(), empty.prev()), (0, 0, 0));
        assert!(!Gallery::new(0, 1).has_controls());
        assert!(Gallery::new(0, 2).has_controls());
    }

    #[test]
    fn status_labels() {
        assert_eq!(ListingStatus::ForSale.to_string(), "For Sale");
        assert_eq!(ListingStatus::ForRent.label(), "For Rent");
        assert_eq!(ListingStatus::Sold.label(), "Sold");
    }
}
