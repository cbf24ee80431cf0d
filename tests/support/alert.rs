//! Builder for surebet alert text.

pub struct Leg {
    pub name: String,
    pub market: String,
    pub odds: String,
    pub stake: Option<String>,
    pub link: Option<String>,
}

pub fn leg(name: &str, market: &str, odds: &str, stake: Option<&str>) -> Leg {
    Leg {
        name: name.to_string(),
        market: market.to_string(),
        odds: odds.to_string(),
        stake: stake.map(str::to_string),
        link: None,
    }
}

impl Leg {
    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}

/// Alert text with a fixed header and the given bookmaker legs.
pub fn alert(start: &str, legs: &[Leg]) -> String {
    let mut text = format!(
        "💰 New surebet found!\n\
         Profit: 3.10%\n\
         Sport: Soccer\n\
         League: Spain. LaLiga\n\
         Event: Real Betis - Sevilla\n\
         Start at : {start}\n\n"
    );

    for leg in legs {
        text.push_str(&format!("{}:\n", leg.name));
        text.push_str(&format!("▫️{} → {}\n", leg.market, leg.odds));
        match (&leg.stake, &leg.link) {
            (Some(stake), Some(link)) => {
                text.push_str(&format!("▫️Stake: {stake} $ Place Bet ({link})\n"));
            }
            (Some(stake), None) => text.push_str(&format!("▫️Stake: {stake} $\n")),
            (None, _) => text.push_str("▫️Stake: n/a\n"),
        }
    }

    text
}
