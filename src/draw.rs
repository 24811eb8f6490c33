use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, Screen};
use crate::components::splash::SplashScreen;
use crate::components::stat_bar::{GoalTimeline, STAT_BAR_HEIGHT, StatBar};
use crate::state::home::{DATE_WINDOW_DAYS, StatusFilter, display_date, display_time};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::state::onboarding::{
    MAX_FAVORITE_CLUBS, OnboardingState, OnboardingStep, POPULAR_CLUBS, ReferralSource,
};
use crate::ui::layout::LayoutAreas;
use sportsdb_api::logos::has_logo;
use sportsdb_api::{Match, MatchPhase};

static TABS: &[&str; 2] = &["Home", "Profile"];

const DATE_CELL_WIDTH: u16 = 11;
const ACCENT: Color = Color::Rgb(34, 197, 94);

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        if app.state.show_intro {
            draw_intro(f, f.area(), app);
            return;
        }

        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if let Some(onboarding) = app.state.onboarding.as_ref() {
            let area = Rect { height: f.area().height - layout.logs.height, ..f.area() };
            draw_onboarding(f, area, onboarding);
        } else {
            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
            }

            match &app.state.screen {
                Screen::Home => draw_home(f, layout.main, app),
                Screen::Details { .. } => draw_details(f, layout.main, app),
                Screen::Profile => draw_profile(f, layout.main, app),
            }
        }

        if app.state.show_logs {
            draw_logs(f, layout.logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("failed to draw frame: {e:?}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

fn draw_intro(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Soccer Nerds ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_top_pad, splash_area, prompt_area, _bottom_pad] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);
    f.render_widget(
        SplashScreen {
            frame: app.state.animation.frame,
            tick: app.state.animation.tick,
            tagline_step: app.state.animation.tagline_step(),
        },
        splash_area,
    );
    f.render_widget(
        Paragraph::new("Press Enter to skip")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        prompt_area,
    );
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(app.state.screen.tab_index())
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let legend = match app.state.screen {
        Screen::Home => "/ search  Enter open  q quit  ",
        Screen::Details { .. } => "Esc back  j/k scroll  ",
        Screen::Profile => "r/n toggle  Esc home  ",
    };
    let help = Paragraph::new(legend)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn draw_home(f: &mut Frame, area: Rect, app: &App) {
    let [dates_area, controls_area, list_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    draw_date_strip(f, dates_area, app);
    draw_controls(f, controls_area, app);
    draw_match_list(f, list_area, app);
}

fn draw_date_strip(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Date  h/l ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let strip = &app.state.home.dates;
    let visible = usize::from((inner.width / DATE_CELL_WIDTH).max(1)).min(DATE_WINDOW_DAYS);
    let first = strip
        .selected
        .saturating_sub(visible / 2)
        .min(DATE_WINDOW_DAYS - visible);

    let mut labels = Vec::with_capacity(visible);
    let mut days = Vec::with_capacity(visible);
    for idx in first..first + visible {
        let (label, day) = strip.label_at(idx);
        let style = if idx == strip.selected {
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let w = usize::from(DATE_CELL_WIDTH) - 1;
        labels.push(Span::styled(format!("{label:^w$}"), style));
        labels.push(Span::raw(" "));
        days.push(Span::styled(format!("{day:^w$}"), style));
        days.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(vec![Line::from(labels), Line::from(days)]).alignment(Alignment::Center),
        inner,
    );
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let [filter_area, search_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    let home = &app.state.home;
    let mut chips = Vec::new();
    for filter in StatusFilter::ALL {
        let style = if filter == home.status_filter {
            accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        chips.push(Span::styled(format!(" {} ", filter.label()), style));
        chips.push(Span::raw(" "));
    }
    let filter_block = default_border(Color::DarkGray).title(" Filter  Tab ");
    f.render_widget(Paragraph::new(Line::from(chips)).block(filter_block), filter_area);

    let (text, style, border) = if home.search.editing {
        (format!("{}_", home.search.query), Style::default().fg(Color::Yellow), Color::Yellow)
    } else if home.search.query.is_empty() {
        ("Search teams...".to_string(), dim(), Color::DarkGray)
    } else {
        (home.search.query.clone(), Style::default().fg(Color::White), Color::DarkGray)
    };
    let search_block = default_border(border).title(" Search  / ");
    f.render_widget(Paragraph::new(text).style(style).block(search_block), search_area);
}

fn draw_match_list(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Matches ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let home = &app.state.home;
    if home.loading {
        f.render_widget(
            Paragraph::new(format!("Loading matches for {}...", home.selected_date()))
                .style(dim())
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }
    if home.error.is_some() {
        f.render_widget(
            Paragraph::new("Failed to fetch matches. Please try again later.")
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let sections = home.sections();
    let mut lines: Vec<Line> = Vec::new();
    let mut row_lines: Vec<usize> = Vec::new();
    let mut row = 0usize;

    if let Some(live) = sections.featured_live {
        lines.push(Line::from(Span::styled(
            "● Live Match",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        row_lines.push(lines.len());
        lines.extend(live_card(live, row == home.selected));
        lines.push(Line::from(""));
        row += 1;
    }

    if sections.lists_empty() {
        lines.push(Line::from(Span::styled(
            "No matches found.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Try adjusting your filters or selecting a different date.",
            dim(),
        )));
    }

    if !sections.upcoming.is_empty() {
        lines.push(Line::from(Span::styled("Up-Coming Matches", accent_bold())));
        for m in &sections.upcoming {
            row_lines.push(lines.len());
            lines.push(upcoming_row(m, row == home.selected));
            row += 1;
        }
        lines.push(Line::from(""));
    }

    if !sections.finished.is_empty() {
        lines.push(Line::from(Span::styled("Today's Results", accent_bold())));
        for m in &sections.finished {
            row_lines.push(lines.len());
            lines.push(finished_row(m, row == home.selected));
            row += 1;
        }
    }

    let selected_line = row_lines.get(home.selected).copied().unwrap_or(0);
    let height = usize::from(inner.height.max(1));
    let scroll = (selected_line + 3).saturating_sub(height) as u16;
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    }
}

fn team_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn live_card(m: &Match, selected: bool) -> Vec<Line<'static>> {
    let mut meta = vec![m.league.clone()];
    if !m.venue.is_empty() {
        meta.push(m.venue.clone());
    }
    if !m.round.is_empty() {
        meta.push(format!("Week {}", m.round));
    }
    vec![
        Line::from(vec![
            marker(selected),
            Span::styled(m.home_team.clone(), team_style(selected)),
            Span::raw("  "),
            Span::styled(
                m.score_line("0"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(m.away_team.clone(), team_style(selected)),
            Span::raw("   "),
            Span::styled(m.status.clone(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![Span::raw("  "), Span::styled(meta.join("  ·  "), dim())]),
    ]
}

fn upcoming_row(m: &Match, selected: bool) -> Line<'static> {
    Line::from(vec![
        marker(selected),
        Span::styled(format!("{:<6}", display_time(&m.time)), Style::default().fg(ACCENT)),
        Span::styled(format!("{} vs {}", m.home_team, m.away_team), team_style(selected)),
        Span::raw("   "),
        Span::styled(display_date(&m.date), dim()),
    ])
}

fn finished_row(m: &Match, selected: bool) -> Line<'static> {
    Line::from(vec![
        marker(selected),
        Span::styled(m.home_team.clone(), team_style(selected)),
        Span::raw("  "),
        Span::styled(m.score_line("-"), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(m.away_team.clone(), team_style(selected)),
        Span::raw("   "),
        Span::styled(display_date(&m.date), dim()),
    ])
}

// ---------------------------------------------------------------------------
// Match details
// ---------------------------------------------------------------------------

fn draw_details(f: &mut Frame, area: Rect, app: &App) {
    let Some(m) = app.detail_match() else {
        draw_placeholder(f, area, "Match not found. Press Esc to go back.");
        return;
    };

    let mut title = format!(" {} ", m.league);
    if !m.round.is_empty() {
        title.push_str(&format!("· Week {} ", m.round));
    }
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let details = &app.state.details;
    let goals = details.goals();
    let goal_rows = goals.len().min(6) as u16;
    let [score_area, tabs_area, timeline_area, stats_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Length(3 + goal_rows.max(1)),
        Constraint::Fill(1),
    ])
    .areas(inner);

    draw_scoreboard(f, score_area, m);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Stats ", accent_bold().add_modifier(Modifier::UNDERLINED)),
            Span::raw("   "),
            Span::styled(" H2H ", dim()),
            Span::raw("   "),
            Span::styled(" Table ", dim()),
        ]))
        .alignment(Alignment::Center),
        tabs_area,
    );

    draw_goal_timeline(f, timeline_area, app);
    draw_stats(f, stats_area, app);
}

fn draw_scoreboard(f: &mut Frame, area: Rect, m: &Match) {
    let phase = m.phase();
    let badge_style = match phase {
        MatchPhase::Live => Style::default().fg(Color::Black).bg(Color::Red),
        MatchPhase::Upcoming => Style::default().fg(Color::Black).bg(ACCENT),
        MatchPhase::Finished => Style::default().fg(Color::Black).bg(Color::Gray),
        MatchPhase::Unclassified => dim(),
    };

    let lines = vec![
        Line::from(Span::styled(m.venue.clone(), dim())),
        Line::from(vec![
            Span::styled(format!(" {} ", phase.label()), badge_style),
            Span::raw("  "),
            Span::styled(m.status.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(m.home_team.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled(m.score_line("0"), accent_bold()),
            Span::raw("    "),
            Span::styled(m.away_team.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("{}  {}", display_date(&m.date), display_time(&m.time)),
            dim(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_goal_timeline(f: &mut Frame, area: Rect, app: &App) {
    let details = &app.state.details;
    let [heading, track, list] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    f.render_widget(Paragraph::new(Span::styled("Goals", accent_bold())), heading);

    if details.timeline_error.is_some() {
        f.render_widget(Paragraph::new("Timeline unavailable.").style(dim()), track);
        return;
    }
    if details.loading {
        return;
    }

    let goals = details.goals();
    f.render_widget(GoalTimeline { goals: &goals }, track);

    if goals.is_empty() {
        f.render_widget(Paragraph::new("No goals yet.").style(dim()), list);
        return;
    }
    let lines: Vec<Line> = goals
        .iter()
        .map(|g| {
            let side = g.side.label();
            Line::from(vec![
                Span::styled(format!("{}' ", g.minute), Style::default().fg(Color::Yellow)),
                Span::styled(g.player.clone(), Style::default().fg(Color::White)),
                Span::styled(if side.is_empty() { String::new() } else { format!("  ({side})") }, dim()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), list);
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let details = &app.state.details;
    if details.loading {
        f.render_widget(
            Paragraph::new("Loading stats...").style(dim()).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let rows = details.stat_rows();
    if rows.is_empty() {
        f.render_widget(
            Paragraph::new("Statistics are not available for this match.")
                .style(dim())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let step = STAT_BAR_HEIGHT + 1;
    let skip = usize::from(details.scroll_offset).min(rows.len().saturating_sub(1));
    let mut y = area.y;
    for row in rows.iter().skip(skip) {
        if y + STAT_BAR_HEIGHT > area.y + area.height {
            break;
        }
        let bar_area = Rect::new(area.x + 1, y, area.width.saturating_sub(2), STAT_BAR_HEIGHT);
        f.render_widget(StatBar { row }, bar_area);
        y += step;
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Profile ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let profile = &app.state.profile;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Supporter  ", dim()),
            Span::styled(profile.name.clone(), accent_bold()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Favorite Clubs", Style::default().add_modifier(Modifier::BOLD))),
    ];
    for (club, logo) in profile.clubs_with_logos() {
        let crest = if has_logo(club) {
            Span::styled("  ● ", Style::default().fg(ACCENT))
        } else {
            Span::styled("  ○ ", dim())
        };
        lines.push(Line::from(vec![
            crest,
            Span::styled(format!("{club:<20}"), Style::default().fg(Color::White)),
            Span::styled(logo, dim()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Notifications", Style::default().add_modifier(Modifier::BOLD))));
    lines.push(toggle_line("Match Reminders", profile.match_reminders, "r"));
    lines.push(toggle_line("News & Updates", profile.news_updates, "n"));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn toggle_line(label: &str, on: bool, key: &str) -> Line<'static> {
    let (mark, style) = if on {
        ("[x]", Style::default().fg(ACCENT))
    } else {
        ("[ ]", dim())
    };
    Line::from(vec![
        Span::styled(format!("  {mark} "), style),
        Span::raw(label.to_string()),
        Span::styled(format!("  ({key})"), dim()),
    ])
}

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

fn draw_onboarding(f: &mut Frame, area: Rect, onboarding: &OnboardingState) {
    let step = onboarding.step;
    let block = default_border(ACCENT).title(format!(" {} ", step.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [progress_area, subtitle_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(Color::Indexed(236)))
            .percent(onboarding.progress_percent())
            .label(format!("Step {} of {}", step.index() + 1, OnboardingStep::COUNT)),
        progress_area,
    );
    f.render_widget(
        Paragraph::new(step.subtitle()).style(Style::default().fg(Color::Gray)),
        subtitle_area,
    );

    let body = match step {
        OnboardingStep::Name => name_step(onboarding),
        OnboardingStep::Clubs => clubs_step(onboarding),
        OnboardingStep::Referral => referral_step(onboarding),
        OnboardingStep::Summary => summary_step(onboarding),
    };
    let cursor_line = match step {
        OnboardingStep::Clubs => onboarding.club_cursor + 2,
        OnboardingStep::Referral => onboarding.referral_cursor * 2,
        _ => 0,
    };
    let scroll = (cursor_line + 2).saturating_sub(usize::from(body_area.height)) as u16;
    f.render_widget(Paragraph::new(body).scroll((scroll, 0)), body_area);

    let action = if onboarding.is_last_step() { "Enter complete" } else { "Enter continue" };
    let action_style = if onboarding.can_proceed() { accent_bold() } else { dim() };
    let mut footer = vec![Span::styled(action, action_style)];
    if step != OnboardingStep::Name {
        footer.push(Span::styled("   Esc back", dim()));
    }
    match step {
        OnboardingStep::Clubs | OnboardingStep::Referral => {
            footer.push(Span::styled("   j/k move   Space select", dim()))
        }
        OnboardingStep::Summary => footer.push(Span::styled("   Space notifications", dim())),
        OnboardingStep::Name => {}
    }
    f.render_widget(Paragraph::new(Line::from(footer)), footer_area);
}

fn name_step(onboarding: &OnboardingState) -> Vec<Line<'static>> {
    vec![
        Line::from("What should we call you?"),
        Line::from(""),
        Line::from(Span::styled(
            format!("> {}_", onboarding.form.name),
            Style::default().fg(Color::Yellow),
        )),
    ]
}

fn clubs_step(onboarding: &OnboardingState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Selected: {}/{}", onboarding.form.favorite_clubs.len(), MAX_FAVORITE_CLUBS),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (idx, club) in POPULAR_CLUBS.iter().enumerate() {
        let selected = onboarding.is_club_selected(club);
        let style = if selected {
            accent_bold()
        } else if onboarding.can_toggle_club(club) {
            Style::default().fg(Color::White)
        } else {
            dim()
        };
        lines.push(Line::from(vec![
            marker(idx == onboarding.club_cursor),
            Span::styled(if selected { "[x] " } else { "[ ] " }, style),
            Span::styled(club.to_string(), style),
        ]));
    }
    lines
}

fn referral_step(onboarding: &OnboardingState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, source) in ReferralSource::ALL.iter().enumerate() {
        let chosen = onboarding.form.how_did_you_hear == Some(*source);
        let style = if chosen { accent_bold() } else { Style::default().fg(Color::White) };
        lines.push(Line::from(vec![
            marker(idx == onboarding.referral_cursor),
            Span::styled(if chosen { "(•) " } else { "( ) " }, style),
            Span::styled(source.label(), style),
        ]));
        lines.push(Line::from(vec![Span::raw("      "), Span::styled(source.description(), dim())]));
    }
    lines
}

fn summary_step(onboarding: &OnboardingState) -> Vec<Line<'static>> {
    let form = &onboarding.form;
    let clubs = &form.favorite_clubs;
    let mut shown = clubs.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
    if clubs.len() > 3 {
        shown.push_str(&format!(" +{} more", clubs.len() - 3));
    }
    let referral = form.how_did_you_hear.map(|r| r.label()).unwrap_or("-");

    vec![
        Line::from(Span::styled(format!("Welcome, {}!", form.name.trim()), accent_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Favorite clubs  ", dim()),
            Span::raw(format!("{} ", clubs.len())),
        ]),
        Line::from(vec![Span::raw("  "), Span::styled(shown, Style::default().fg(Color::White))]),
        Line::from(vec![Span::styled("Found us via    ", dim()), Span::raw(referral)]),
        Line::from(""),
        toggle_line("Notifications", form.notifications, "Space"),
    ]
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_logs(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Magenta))
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    f.render_widget(widget, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(dim())
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    if app.state.show_intro {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen || app.state.onboarding.is_some() {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(3), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
