use crate::state::details::StatRow;
use sportsdb_api::{Side, TimelineEvent};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::Widget;

/// Rows used by one stat: the value/label line and the bar line.
pub const STAT_BAR_HEIGHT: u16 = 2;

const HOME_COLOR: Color = Color::Rgb(34, 197, 94);
const AWAY_COLOR: Color = Color::Rgb(59, 130, 246);

/// Split `width` bar cells between home and away by their percentage widths.
/// Rounds each side independently, then trims so the two never overlap.
pub fn bar_cells(width: u16, home_pct: f64, away_pct: f64) -> (u16, u16) {
    let cells = |pct: f64| (f64::from(width) * pct.clamp(0.0, 100.0) / 100.0).round() as u16;
    let home = cells(home_pct).min(width);
    let away = cells(away_pct).min(width - home);
    (home, away)
}

/// Column a minute position lands on along a `width`-wide track.
pub fn marker_column(percent: u16, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    (u32::from(percent.min(100)) * u32::from(width - 1) / 100) as u16
}

// ---------------------------------------------------------------------------
// StatBar: one home/away comparison row
// ---------------------------------------------------------------------------

pub struct StatBar<'a> {
    pub row: &'a StatRow,
}

impl Widget for StatBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height == 0 {
            return;
        }
        let row = self.row;
        let lead = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let trail = Style::default().fg(Color::DarkGray);

        let home = row.display(row.home);
        let away = row.display(row.away);
        buf.set_string(area.x, area.y, &home, if row.home_leads() { lead } else { trail });
        let away_x = area.x + area.width.saturating_sub(away.chars().count() as u16);
        buf.set_string(away_x, area.y, &away, if row.away_leads() { lead } else { trail });

        let label_w = row.label.chars().count() as u16;
        let label_x = area.x + area.width.saturating_sub(label_w) / 2;
        buf.set_string(label_x, area.y, row.label, Style::default().fg(Color::Gray));

        if area.height < STAT_BAR_HEIGHT {
            return;
        }
        let y = area.y + 1;
        let (home_pct, away_pct) = row.bar_widths();
        let (home_cells, away_cells) = bar_cells(area.width, home_pct, away_pct);

        for x in 0..area.width {
            let (ch, style) = if x < home_cells {
                ('━', Style::default().fg(HOME_COLOR))
            } else if x >= area.width - away_cells {
                ('━', Style::default().fg(AWAY_COLOR))
            } else {
                ('─', Style::default().fg(Color::Indexed(238)))
            };
            put_char(buf, area.x + x, y, ch, style);
        }
    }
}

// ---------------------------------------------------------------------------
// GoalTimeline: goals plotted by minute along a 0..90+ track
// ---------------------------------------------------------------------------

pub struct GoalTimeline<'a> {
    pub goals: &'a [&'a TimelineEvent],
}

impl Widget for GoalTimeline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height == 0 {
            return;
        }
        let track = Style::default().fg(Color::Indexed(240));
        for x in 0..area.width {
            put_char(buf, area.x + x, area.y, '─', track);
        }

        for goal in self.goals {
            let Some(percent) = goal.position_percent() else {
                continue;
            };
            let color = match goal.side {
                Side::Home => HOME_COLOR,
                Side::Away => AWAY_COLOR,
                Side::Unknown => Color::White,
            };
            let x = area.x + marker_column(percent, area.width);
            put_char(buf, x, area.y, '●', Style::default().fg(color).add_modifier(Modifier::BOLD));
        }

        if area.height > 1 {
            let y = area.y + 1;
            let dim = Style::default().fg(Color::DarkGray);
            buf.set_string(area.x, y, "0'", dim);
            buf.set_string(area.x + marker_column(50, area.width).saturating_sub(1), y, "45'", dim);
            buf.set_string(area.x + area.width.saturating_sub(3), y, "90'", dim);
        }
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportsdb_api::TimelineKind;

    fn goal(minute: &str, side: Side) -> TimelineEvent {
        TimelineEvent {
            id: minute.into(),
            match_id: "1".into(),
            kind: TimelineKind::Goal,
            description: String::new(),
            side,
            player: "Scorer".into(),
            minute: minute.into(),
        }
    }

    fn symbols(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn cells_follow_the_percentages() {
        assert_eq!(bar_cells(40, 50.0, 50.0), (20, 20));
        assert_eq!(bar_cells(40, 100.0, 0.0), (40, 0));
        assert_eq!(bar_cells(40, 0.0, 0.0), (0, 0));
        assert_eq!(bar_cells(10, 66.6, 33.4), (7, 3));
    }

    #[test]
    fn rounding_never_overlaps() {
        let (h, a) = bar_cells(3, 50.0, 50.0);
        assert!(h + a <= 3);
    }

    #[test]
    fn markers_span_the_track() {
        assert_eq!(marker_column(0, 50), 0);
        assert_eq!(marker_column(100, 50), 49);
        assert_eq!(marker_column(250, 50), 49);
        assert_eq!(marker_column(50, 0), 0);
    }

    #[test]
    fn stat_bar_renders_values_and_bar() {
        let row = StatRow { label: "Possession", home: 60, away: 40, is_percentage: true };
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        StatBar { row: &row }.render(area, &mut buf);
        let top = symbols(&buf, 0);
        assert!(top.starts_with("60%"));
        assert!(top.ends_with("40%"));
        assert!(top.contains("Possession"));
        assert_eq!(symbols(&buf, 1).chars().filter(|c| *c == '━').count(), 30);
    }

    #[test]
    fn goals_without_a_minute_are_not_plotted() {
        let goals = [goal("10", Side::Home), goal("??", Side::Away)];
        let refs: Vec<&TimelineEvent> = goals.iter().collect();
        let area = Rect::new(0, 0, 21, 2);
        let mut buf = Buffer::empty(area);
        GoalTimeline { goals: &refs }.render(area, &mut buf);
        let track = symbols(&buf, 0);
        assert_eq!(track.chars().filter(|c| *c == '●').count(), 1);
        assert_eq!(track.chars().nth(2), Some('●'));
    }
}
