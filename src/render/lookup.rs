//! Translation and fallback-link tables.

use std::collections::HashMap;

const SPORTS: [(&str, &str); 3] = [
    ("Basketball", "Baloncesto"),
    ("Soccer", "Fútbol"),
    ("Football", "Fútbol"),
];

const BOOKMAKER_URLS: [(&str, &str); 3] = [
    ("LeovegasES", "https://www.leovegas.es/"),
    ("BetssonES", "https://www.betsson.es/"),
    ("Bet365ES", "https://www.bet365.es/"),
];

/// Sport translations and default bookmaker links used while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    sports: HashMap<String, String>,
    bookmaker_urls: HashMap<String, String>,
}

impl Lookup {
    /// Add entries on top of the current tables, replacing equal keys.
    #[must_use]
    pub fn extend(
        mut self,
        sports: impl IntoIterator<Item = (String, String)>,
        bookmaker_urls: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.sports.extend(sports);
        self.bookmaker_urls.extend(bookmaker_urls);
        self
    }

    /// Spanish name of `sport`, or `sport` itself when there is none.
    pub fn sport<'a>(&'a self, sport: &'a str) -> &'a str {
        self.sports.get(sport).map_or(sport, String::as_str)
    }

    /// Link to show for a bookmaker: the parsed one, else the default for
    /// its name, else empty.
    pub fn link<'a>(&'a self, bookmaker: &str, parsed: Option<&'a str>) -> &'a str {
        parsed
            .or_else(|| self.bookmaker_urls.get(bookmaker).map(String::as_str))
            .unwrap_or_default()
    }

    pub fn sports(&self) -> &HashMap<String, String> {
        &self.sports
    }

    pub fn bookmaker_urls(&self) -> &HashMap<String, String> {
        &self.bookmaker_urls
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            sports: owned(&SPORTS),
            bookmaker_urls: owned(&BOOKMAKER_URLS),
        }
    }
}

fn owned(table: &[(&str, &str)]) -> HashMap<String, String> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_sports() {
        let lookup = Lookup::default();
        assert_eq!(lookup.sport("Basketball"), "Baloncesto");
        assert_eq!(lookup.sport("Soccer"), "Fútbol");
        assert_eq!(lookup.sport("Football"), "Fútbol");
    }

    #[test]
    fn unknown_sport_is_unchanged() {
        assert_eq!(Lookup::default().sport("Tennis"), "Tennis");
    }

    #[test]
    fn parsed_link_wins() {
        let lookup = Lookup::default();
        assert_eq!(
            lookup.link("Bet365ES", Some("https://www.bet365.es/dl/x")),
            "https://www.bet365.es/dl/x"
        );
    }

    #[test]
    fn default_link_then_empty() {
        let lookup = Lookup::default();
        assert_eq!(lookup.link("LeovegasES", None), "https://www.leovegas.es/");
        assert_eq!(lookup.link("Pinnacle", None), "");
    }

    #[test]
    fn extend_adds_and_overrides() {
        let lookup = Lookup::default().extend(
            [("Tennis".to_string(), "Tenis".to_string())],
            [(
                "Bet365ES".to_string(),
                "https://mirror.example/".to_string(),
            )],
        );

        assert_eq!(lookup.sport("Tennis"), "Tenis");
        assert_eq!(lookup.sport("Basketball"), "Baloncesto");
        assert_eq!(lookup.link("Bet365ES", None), "https://mirror.example/");
    }
}
