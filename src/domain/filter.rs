// src/domain/filter.rs
//
// Filtering and ordering of the listing catalog. Everything here is pure:
// the same query over the same input always yields the same order.
use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::listing::Listing;
use crate::errors::ServerError;

pub const ALL_CATEGORIES: &str = "All Types";
pub const PRICE_CEILING: u64 = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceDesc,
    PriceAsc,
    /// Year built, most recent first.
    Newest,
    AreaDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceDesc,
        SortKey::PriceAsc,
        SortKey::Newest,
        SortKey::AreaDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceDesc => "price-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::Newest => "newest",
            SortKey::AreaDesc => "area-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::Newest => "Newest First",
            SortKey::AreaDesc => "Largest First",
        }
    }
}

impl FromStr for SortKey {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown sort key: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub text: String,
    /// `None` is the "All Types" wildcard.
    pub category: Option<String>,
    pub min_price: u64,
    pub max_price: u64,
    /// Zero disables the bedroom filter.
    pub min_bedrooms: u32,
    pub sort: SortKey,
    pub view: ViewMode,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: None,
            min_price: 0,
            max_price: PRICE_CEILING,
            min_bedrooms: 0,
            sort: SortKey::default(),
            view: ViewMode::default(),
        }
    }
}

impl ListingQuery {
    /// Build from decoded query-string pairs. Blank values mean "use the default".
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let mut q = ListingQuery::default();

        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        if let Some(text) = get("q") {
            q.text = text.to_string();
        }
        if let Some(cat) = get("type") {
            if cat != ALL_CATEGORIES {
                q.category = Some(cat.to_string());
            }
        }
        if let Some(v) = get("min_price") {
            q.min_price = parse_number("min_price", v)?;
        }
        if let Some(v) = get("max_price") {
            q.max_price = parse_number("max_price", v)?;
        }
        if let Some(v) = get("beds") {
            q.min_bedrooms = parse_number("beds", v)?;
        }
        if let Some(v) = get("sort") {
            q.sort = v.parse()?;
        }
        if get("view") == Some("list") {
            q.view = ViewMode::List;
        }

        Ok(q)
    }

    /// Query string for this query with defaults left out, so links stay short.
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if !self.text.is_empty() {
            ser.append_pair("q", &self.text);
        }
        if let Some(cat) = &self.category {
            ser.append_pair("type", cat);
        }
        if self.min_price > 0 {
            ser.append_pair("min_price", &self.min_price.to_string());
        }
        if self.max_price != PRICE_CEILING {
            ser.append_pair("max_price", &self.max_price.to_string());
        }
        if self.min_bedrooms > 0 {
            ser.append_pair("beds", &self.min_bedrooms.to_string());
        }
        if self.sort != SortKey::default() {
            ser.append_pair("sort", self.sort.as_str());
        }
        if self.view != ViewMode::default() {
            ser.append_pair("view", self.view.as_str());
        }
        ser.finish()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.text.is_empty()
            || self.category.is_some()
            || self.min_price > 0
            || self.max_price < PRICE_CEILING
            || self.min_bedrooms > 0
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.text.is_empty() && !listing.matches_text(&self.text.to_lowercase()) {
            return false;
        }
        if let Some(cat) = &self.category {
            if listing.category != cat.as_str() {
                return false;
            }
        }
        if listing.price < self.min_price || listing.price > self.max_price {
            return false;
        }
        self.min_bedrooms == 0 || listing.bedrooms >= self.min_bedrooms
    }

    /// Filter then stable-sort. Ties keep their input order.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut out: Vec<&Listing> = listings.into_iter().filter(|l| self.matches(l)).collect();

        match self.sort {
            SortKey::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::PriceAsc => out.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::AreaDesc => out.sort_by(|a, b| b.area.cmp(&a.area)),
            SortKey::Newest => out.sort_by(|a, b| b.year_built.cmp(&a.year_built)),
        }

        out
    }
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("{field} must be a whole number, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::listings::{CATEGORIES, LISTINGS};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(v: &[&Listing]) -> Vec<&'static str> {
        v.iter().map(|l| l.id).collect()
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_query_returns_everything_price_desc() {
        let q = ListingQuery::default();
        let out = q.apply(LISTINGS);
        assert_eq!(ids(&out), ["3", "1", "2", "6", "4", "5"]);
        assert!(!q.has_active_filters());
    }

    #[test]
    fn text_matches_title_location_city_country_case_insensitive() {
        let mut q = ListingQuery::default();

        q.text = "CALIFORNIA".into();
        assert_eq!(ids(&q.apply(LISTINGS)), ["3", "1"]);

        q.text = "italy".into();
        assert_eq!(ids(&q.apply(LISTINGS)), ["4"]);

        q.text = "chalet".into();
        assert_eq!(ids(&q.apply(LISTINGS)), ["5"]);

        q.text = "atlantis".into();
        assert!(q.apply(LISTINGS).is_empty());
    }

    #[test]
    fn category_is_exact() {
        let q = ListingQuery {
            category: Some("Villa".into()),
            ..Default::default()
        };
        assert_eq!(ids(&q.apply(LISTINGS)), ["1", "6"]);

        let q = ListingQuery {
            category: Some("villa".into()),
            ..Default::default()
        };
        assert!(q.apply(LISTINGS).is_empty());
    }

    #[test]
    fn price_range_is_inclusive() {
        let q = ListingQuery {
            min_price: 28_000_000,
            max_price: 38_500_000,
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&q.apply(LISTINGS)), ["4", "6", "2"]);
    }

    #[test]
    fn bedroom_threshold() {
        let q = ListingQuery {
            min_bedrooms: 7,
            ..Default::default()
        };
        assert_eq!(ids(&q.apply(LISTINGS)), ["3", "1"]);
    }

    #[test]
    fn area_and_newest_sorts() {
        let by_area = ListingQuery {
            sort: SortKey::AreaDesc,
            ..Default::default()
        };
        assert_eq!(ids(&by_area.apply(LISTINGS)), ["3", "1", "6", "4", "2", "5"]);

        let newest = ListingQuery {
            sort: SortKey::Newest,
            ..Default::default()
        };
        assert_eq!(ids(&newest.apply(LISTINGS)), ["6", "3", "1", "5", "2", "4"]);
    }

    #[test]
    fn from_params_parses_all_fields() {
        let q = ListingQuery::from_params(&params(&[
            ("q", " malibu "),
            ("type", "Villa"),
            ("min_price", "1000"),
            ("max_price", "50000000"),
            ("beds", "3"),
            ("sort", "area-desc"),
            ("view", "list"),
        ]))
        .unwrap();

        assert_eq!(
            q,
            ListingQuery {
                text: "malibu".into(),
                category: Some("Villa".into()),
                min_price: 1000,
                max_price: 50_000_000,
                min_bedrooms: 3,
                sort: SortKey::AreaDesc,
                view: ViewMode::List,
            }
        );
        assert!(q.has_active_filters());
    }

    #[test]
    fn from_params_treats_blank_and_wildcard_as_default() {
        let q = ListingQuery::from_params(&params(&[
            ("q", ""),
            ("type", "All Types"),
            ("beds", " "),
        ]))
        .unwrap();
        assert_eq!(q, ListingQuery::default());
    }

    #[test]
    fn query_string_omits_defaults() {
        assert_eq!(ListingQuery::default().to_query_string(), "");

        let q = ListingQuery {
            text: "lake como".into(),
            min_bedrooms: 4,
            view: ViewMode::List,
            ..Default::default()
        };
        assert_eq!(q.to_query_string(), "q=lake+como&beds=4&view=list");
    }

    #[test]
    fn from_params_rejects_garbage() {
        assert!(matches!(
            ListingQuery::from_params(&params(&[("beds", "many")])),
            Err(ServerError::BadRequest(_))
        ));
        assert!(matches!(
            ListingQuery::from_params(&params(&[("min_price", "-5")])),
            Err(ServerError::BadRequest(_))
        ));
        assert!(matches!(
            ListingQuery::from_params(&params(&[("sort", "cheapest")])),
            Err(ServerError::BadRequest(_))
        ));
    }

    /// Substrings of real catalog fields, in either case, or nothing.
    fn arb_text() -> impl Strategy<Value = String> {
        let fields: Vec<&'static str> = LISTINGS
            .iter()
            .flat_map(|l| [l.title, l.location, l.city, l.country])
            .collect();
        prop_oneof![
            Just(String::new()),
            (prop::sample::select(fields), 0usize..12, 1usize..12, any::<bool>()).prop_map(
                |(field, skip, take, upper)| {
                    let s: String = field.chars().skip(skip).take(take).collect();
                    if upper {
                        s.to_uppercase()
                    } else {
                        s
                    }
                }
            ),
        ]
    }

    prop_compose! {
        fn arb_query()(
            text in arb_text(),
            category in prop::option::of(prop::sample::select(CATEGORIES[1..].to_vec())),
            min_price in 0u64..60_000_000,
            max_price in 0u64..=PRICE_CEILING,
            min_bedrooms in 0u32..10,
            sort in prop::sample::select(SortKey::ALL.to_vec()),
        ) -> ListingQuery {
            ListingQuery {
                text,
                category: category.map(str::to_string),
                min_price,
                max_price,
                min_bedrooms,
                sort,
                view: ViewMode::Grid,
            }
        }
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(q in arb_query()) {
            let once = q.apply(LISTINGS);
            let twice = q.apply(once.iter().copied());
            prop_assert_eq!(ids(&once), ids(&twice));
        }

        #[test]
        fn every_result_matches_the_query(q in arb_query()) {
            for listing in q.apply(LISTINGS) {
                prop_assert!(q.matches(listing), "{} leaked through", listing.id);
            }
        }

        #[test]
        fn price_desc_is_reverse_of_price_asc(q in arb_query()) {
            // Catalog prices are distinct, so there are no ties to break.
            let desc = ListingQuery { sort: SortKey::PriceDesc, ..q.clone() }.apply(LISTINGS);
            let mut asc = ListingQuery { sort: SortKey::PriceAsc, ..q }.apply(LISTINGS);
            asc.reverse();
            prop_assert_eq!(ids(&desc), ids(&asc));
        }
    }
}
