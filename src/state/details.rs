use sportsdb_api::{MatchStats, TimelineEvent, leading_int};

/// (label, home field, away field, is_percentage), in display order.
const STAT_FIELDS: [(&str, &str, &str, bool); 5] = [
    ("Shots on Target", "intHomeShots", "intAwayShots", false),
    ("Possession", "intHomePossession", "intAwayPossession", true),
    ("Yellow Cards", "intHomeYellowCards", "intAwayYellowCards", false),
    ("Red Cards", "intHomeRedCards", "intAwayRedCards", false),
    ("Corner Kicks", "intHomeCornerKicks", "intAwayCornerKicks", false),
];

/// One comparable home/away row of the stats panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub home: u32,
    pub away: u32,
    pub is_percentage: bool,
}

impl StatRow {
    /// Bar widths in percent of the full bar, (home, away).
    ///
    /// With a non-zero total each side gets its share. With nothing on either
    /// side, percentage rows fall back to the raw values (both zero) and count
    /// rows split the bar evenly.
    pub fn bar_widths(&self) -> (f64, f64) {
        let total = u64::from(self.home) + u64::from(self.away);
        if total > 0 {
            let total = total as f64;
            (
                f64::from(self.home) / total * 100.0,
                f64::from(self.away) / total * 100.0,
            )
        } else if self.is_percentage {
            (f64::from(self.home), f64::from(self.away))
        } else {
            (50.0, 50.0)
        }
    }

    /// Home wins ties.
    pub fn home_leads(&self) -> bool {
        self.home >= self.away
    }

    pub fn away_leads(&self) -> bool {
        self.away > self.home
    }

    pub fn display(&self, value: u32) -> String {
        if self.is_percentage {
            format!("{value}%")
        } else {
            value.to_string()
        }
    }
}

/// Turn a raw stats record into the five display rows. No record, no rows.
/// Missing and non-numeric values read as 0. Rows hold unsigned counts, so a
/// negative value is clamped to 0 and bar widths stay within 0..=100.
pub fn transform_stats(stats: Option<&MatchStats>) -> Vec<StatRow> {
    let Some(stats) = stats else {
        return Vec::new();
    };
    let read = |key: &str| -> u32 {
        stats
            .get(key)
            .and_then(leading_int)
            .map(|v| v.clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0)
    };
    STAT_FIELDS
        .iter()
        .map(|&(label, home_key, away_key, is_percentage)| StatRow {
            label,
            home: read(home_key),
            away: read(away_key),
            is_percentage,
        })
        .collect()
}

pub fn goals(timeline: &[TimelineEvent]) -> Vec<&TimelineEvent> {
    timeline.iter().filter(|e| e.is_goal()).collect()
}

// ---------------------------------------------------------------------------
// Match details state: lives only while the details screen is open
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MatchDetailState {
    pub match_id: Option<String>,
    pub loading: bool,
    pub stats: Option<MatchStats>,
    pub timeline: Vec<TimelineEvent>,
    pub stats_error: Option<String>,
    pub timeline_error: Option<String>,
    pub scroll_offset: u16,
}

impl MatchDetailState {
    pub fn begin(&mut self, match_id: String) {
        *self = Self {
            match_id: Some(match_id),
            loading: true,
            ..Self::default()
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Store a details response. Returns false (and changes nothing) when the
    /// response belongs to a match that is no longer open.
    pub fn apply(
        &mut self,
        match_id: &str,
        stats: Result<Option<MatchStats>, String>,
        timeline: Result<Vec<TimelineEvent>, String>,
    ) -> bool {
        if self.match_id.as_deref() != Some(match_id) {
            return false;
        }
        self.loading = false;
        match stats {
            Ok(stats) => self.stats = stats,
            Err(e) => self.stats_error = Some(e),
        }
        match timeline {
            Ok(timeline) => self.timeline = timeline,
            Err(e) => self.timeline_error = Some(e),
        }
        true
    }

    pub fn stat_rows(&self) -> Vec<StatRow> {
        transform_stats(self.stats.as_ref())
    }

    pub fn goals(&self) -> Vec<&TimelineEvent> {
        goals(&self.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportsdb_api::{Side, TimelineKind};

    fn stats(pairs: &[(&str, &str)]) -> MatchStats {
        MatchStats {
            fields: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    fn event(id: &str, kind: TimelineKind) -> TimelineEvent {
        TimelineEvent {
            id: id.into(),
            match_id: "9".into(),
            kind,
            description: String::new(),
            side: Side::Home,
            player: "Player".into(),
            minute: "10".into(),
        }
    }

    #[test]
    fn no_stats_gives_no_rows() {
        assert!(transform_stats(None).is_empty());
    }

    #[test]
    fn partial_record_defaults_to_zero() {
        let s = stats(&[("intHomeShots", "7"), ("intAwayPossession", "45%"), ("intHomeRedCards", "n/a")]);
        let rows = transform_stats(Some(&s));
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["Shots on Target", "Possession", "Yellow Cards", "Red Cards", "Corner Kicks"]
        );
        assert_eq!((rows[0].home, rows[0].away), (7, 0));
        assert_eq!((rows[1].home, rows[1].away), (0, 45));
        assert!(rows[1].is_percentage);
        assert_eq!(rows[3].home, 0);
        assert!(rows.iter().filter(|r| r.is_percentage).count() == 1);
    }

    #[test]
    fn negative_values_read_as_zero() {
        let s = stats(&[("intHomeCornerKicks", "-2"), ("intAwayCornerKicks", "3")]);
        let corners = &transform_stats(Some(&s))[4];
        assert_eq!((corners.home, corners.away), (0, 3));
        assert_eq!(corners.bar_widths(), (0.0, 100.0));
    }

    #[test]
    fn count_rows_split_to_one_hundred() {
        for (home, away) in [(1, 2), (7, 0), (3, 3), (13, 4)] {
            let row = StatRow { label: "Shots", home, away, is_percentage: false };
            let (h, a) = row.bar_widths();
            assert!((h + a - 100.0).abs() < 1e-9, "{home}/{away} gave {h}+{a}");
        }
    }

    #[test]
    fn empty_rows_fall_back_by_kind() {
        let count = StatRow { label: "Red Cards", home: 0, away: 0, is_percentage: false };
        assert_eq!(count.bar_widths(), (50.0, 50.0));
        let pct = StatRow { label: "Possession", home: 0, away: 0, is_percentage: true };
        assert_eq!(pct.bar_widths(), (0.0, 0.0));
    }

    #[test]
    fn home_wins_highlight_ties() {
        let tie = StatRow { label: "x", home: 2, away: 2, is_percentage: false };
        assert!(tie.home_leads());
        assert!(!tie.away_leads());
        let away = StatRow { label: "x", home: 1, away: 2, is_percentage: false };
        assert!(!away.home_leads());
        assert!(away.away_leads());
    }

    #[test]
    fn percentage_rows_display_with_sign() {
        let row = StatRow { label: "Possession", home: 61, away: 39, is_percentage: true };
        assert_eq!(row.display(row.home), "61%");
    }

    #[test]
    fn only_goals_reach_the_timeline() {
        let timeline = vec![
            event("1", TimelineKind::Goal),
            event("2", TimelineKind::YellowCard),
            event("3", TimelineKind::Substitution),
            event("4", TimelineKind::Goal),
        ];
        let ids: Vec<_> = goals(&timeline).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn details_for_another_match_are_ignored() {
        let mut state = MatchDetailState::default();
        state.begin("1".into());
        assert!(!state.apply("2", Ok(Some(stats(&[("intHomeShots", "1")]))), Ok(vec![])));
        assert!(state.loading);
        assert!(state.stats.is_none());
    }

    #[test]
    fn partial_failure_keeps_the_other_half() {
        let mut state = MatchDetailState::default();
        state.begin("1".into());
        assert!(state.apply(
            "1",
            Err("stats down".into()),
            Ok(vec![event("g", TimelineKind::Goal)])
        ));
        assert!(!state.loading);
        assert!(state.stat_rows().is_empty());
        assert_eq!(state.stats_error.as_deref(), Some("stats down"));
        assert_eq!(state.goals().len(), 1);
        assert!(state.timeline_error.is_none());
    }
}
