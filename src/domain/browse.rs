//! Housing browser UI state and the intents that change it.
//!
//! ```text
//! BrowseIntent ──→ BrowseState::reduce ──→ BrowseState ──→ pipeline::browse ──→ view
//! ```
//!
//! The state round-trips through the URL query string so every view is a
//! plain link.

use url::form_urlencoded;

use crate::domain::filters::{
    parse_price_cap, CountBucket, FilterCriteria, KindFilter, SortKey,
};
use crate::domain::listing::PropertyType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    /// 1-indexed.
    pub page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseIntent {
    SetQuery(String),
    ToggleType(PropertyType),
    ToggleLocation(String),
    ToggleBedrooms(CountBucket),
    ToggleBathrooms(CountBucket),
    SetMaxPrice(Option<u32>),
    SetKind(KindFilter),
    SetSort(SortKey),
    SetPage(usize),
    ResetFilters,
}

impl BrowseIntent {
    /// Decode `op`/`value` query parameters. Unknown ops and unparseable
    /// values yield `None`, which leaves the state untouched.
    pub fn from_op(op: &str, value: &str) -> Option<Self> {
        let intent = match op {
            "query" => BrowseIntent::SetQuery(value.to_string()),
            "type" => BrowseIntent::ToggleType(value.parse().ok()?),
            "location" => BrowseIntent::ToggleLocation(value.to_string()),
            "beds" => BrowseIntent::ToggleBedrooms(value.parse().ok()?),
            "baths" => BrowseIntent::ToggleBathrooms(value.parse().ok()?),
            "max_price" => BrowseIntent::SetMaxPrice(parse_price_cap(value)),
            "kind" => BrowseIntent::SetKind(KindFilter::parse_lenient(value)),
            "sort" => BrowseIntent::SetSort(SortKey::parse_lenient(value)),
            "page" => BrowseIntent::SetPage(value.trim().parse().ok()?),
            "reset" => BrowseIntent::ResetFilters,
            _ => return None,
        };
        Some(intent)
    }
}

fn toggle<T: Ord>(set: &mut std::collections::BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl BrowseState {
    /// Apply one intent. Anything other than a page change sends the view
    /// back to page 1; a page change leaves the filters alone.
    pub fn reduce(mut self, intent: BrowseIntent) -> Self {
        let c = &mut self.criteria;
        match intent {
            BrowseIntent::SetPage(page) => {
                self.page = page.max(1);
                return self;
            }
            BrowseIntent::SetQuery(q) => c.query = q.trim().to_string(),
            BrowseIntent::ToggleType(t) => toggle(&mut c.property_types, t),
            BrowseIntent::ToggleLocation(l) => toggle(&mut c.locations, l),
            BrowseIntent::ToggleBedrooms(b) => toggle(&mut c.bedrooms, b),
            BrowseIntent::ToggleBathrooms(b) => toggle(&mut c.bathrooms, b),
            BrowseIntent::SetMaxPrice(p) => c.max_price = p,
            BrowseIntent::SetKind(k) => c.kind = k,
            BrowseIntent::SetSort(s) => self.sort = s,
            BrowseIntent::ResetFilters => *c = FilterCriteria::default(),
        }
        self.page = 1;
        self
    }

    /// Rebuild the state from decoded query pairs. Malformed values are dropped.
    pub fn from_pairs<'p, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'p str, &'p str)>,
    {
        let mut state = BrowseState::default();
        let c = &mut state.criteria;

        for (key, value) in pairs {
            match key {
                "q" => c.query = value.trim().to_string(),
                "type" => {
                    if let Ok(t) = value.parse() {
                        c.property_types.insert(t);
                    }
                }
                "location" if !value.trim().is_empty() => {
                    c.locations.insert(value.to_string());
                }
                "beds" => {
                    if let Ok(b) = value.parse() {
                        c.bedrooms.insert(b);
                    }
                }
                "baths" => {
                    if let Ok(b) = value.parse() {
                        c.bathrooms.insert(b);
                    }
                }
                "max_price" => c.max_price = parse_price_cap(value),
                "kind" => c.kind = KindFilter::parse_lenient(value),
                "sort" => state.sort = SortKey::parse_lenient(value),
                "page" => state.page = value.trim().parse::<usize>().unwrap_or(1).max(1),
                _ => {}
            }
        }

        state
    }

    /// Parse state from the query, then reduce the optional `op`/`value` intent into it.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        let state = Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let op = pairs.iter().find(|(k, _)| k == "op").map(|(_, v)| v.as_str());
        let value = pairs
            .iter()
            .find(|(k, _)| k == "value")
            .map(|(_, v)| v.as_str())
            .unwrap_or("");

        match op.and_then(|op| BrowseIntent::from_op(op, value)) {
            Some(intent) => state.reduce(intent),
            None => state,
        }
    }

    /// Key/value pairs describing this state. Defaults are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let c = &self.criteria;
        let mut pairs = Vec::new();

        if !c.query.is_empty() {
            pairs.push(("q", c.query.clone()));
        }
        pairs.extend(c.property_types.iter().map(|t| ("type", t.as_str().to_string())));
        pairs.extend(c.locations.iter().map(|l| ("location", l.clone())));
        pairs.extend(c.bedrooms.iter().map(|b| ("beds", b.label())));
        pairs.extend(c.bathrooms.iter().map(|b| ("baths", b.label())));
        if let Some(p) = c.max_price {
            pairs.push(("max_price", p.to_string()));
        }
        if c.kind != KindFilter::All {
            pairs.push(("kind", c.kind.as_str().to_string()));
        }
        if self.sort != SortKey::default() {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }

        pairs
    }

    /// Encode as a query string (no leading `?`).
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }

    /// Link to the housing view after applying `intent` to this state.
    pub fn href_after(&self, intent: BrowseIntent) -> String {
        let next = self.clone().reduce(intent);
        let query = next.to_query();
        if query.is_empty() {
            "/housing".to_string()
        } else {
            format!("/housing?{query}")
        }
    }
}
