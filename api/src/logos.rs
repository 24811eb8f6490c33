//! Club name → crest image URL. Names are matched case-insensitively.

pub const FALLBACK_LOGO: &str = "https://www.freeiconspng.com/uploads/football-icon-png-22.png";

const LOGOS: &[(&str, &str)] = &[
    ("chelsea", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e1.png"),
    ("lester city", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e6.png"),
    ("liverpool fc", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e5.png"),
    ("man united", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e7.png"),
    (
        "swansea afc",
        "https://cdn.freebiesupply.com/logos/large/2x/swansea-city-afc-logo-png-transparent.png",
    ),
    ("tottenham", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4f4.png"),
    ("arsenal", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4df.png"),
    ("stoke city", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4ee.png"),
    ("barcelona", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e3.png"),
    ("bayern munich", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e8.png"),
    ("man city", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e0.png"),
    ("real madrid", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e2.png"),
    ("juventus", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e9.png"),
    ("psg", "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4d3.png"),
];

pub fn team_logo(team_name: &str) -> &'static str {
    let normalized = team_name.trim().to_lowercase();
    LOGOS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, url)| *url)
        .unwrap_or(FALLBACK_LOGO)
}

pub fn has_logo(team_name: &str) -> bool {
    team_logo(team_name) != FALLBACK_LOGO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(
            team_logo("Real Madrid"),
            "https://assets.stickpng.com/images/580b57fcd9996e24bc43c4e2.png"
        );
        assert!(has_logo("PSG"));
    }

    #[test]
    fn unknown_club_gets_fallback() {
        assert_eq!(team_logo("Wrexham"), FALLBACK_LOGO);
        assert_eq!(team_logo(""), FALLBACK_LOGO);
        assert!(!has_logo("manchester city"));
    }
}
