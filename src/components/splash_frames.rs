use tui::style::{Color, Modifier, Style};

pub const FRAME_COUNT: usize = 4;

/// Shown one after another while the splash runs.
pub const TAGLINES: [&str; 4] = [
    "Welcome to Soccer Nerds",
    "Your Ultimate Football Hub",
    "Real-time Match Data",
    "Let's Get Started!",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashColor {
    Pitch,
    Ball,
    Accent,
    Shadow,
}

pub fn resolve(color: SplashColor) -> Style {
    match color {
        SplashColor::Pitch => Style::default().fg(Color::Rgb(34, 197, 94)),
        SplashColor::Ball => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        SplashColor::Accent => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        SplashColor::Shadow => Style::default().fg(Color::Indexed(240)),
    }
}

/// Triangle wave over `0..height`, used to bounce the ball highlight.
pub fn ball_row(tick: u64, height: u16) -> u16 {
    if height == 0 {
        return 0;
    }
    let h = u64::from(height.saturating_sub(1));
    if h == 0 {
        return 0;
    }
    let period = 2 * h;
    let t = tick % period;
    (h.abs_diff(t)) as u16
}

pub fn soccer_ball_frame(frame: usize) -> [&'static str; 5] {
    const FRAMES: [[&str; 5]; FRAME_COUNT] = [
        ["  .---.  ", " /'-#-'\\ ", "|-# | #-|", " \\.-#-./ ", "  '---'  "],
        ["  .---.  ", " /#-'-#\\ ", "|'- # -'|", " \\#-.-#/ ", "  '---'  "],
        ["  .---.  ", " /-'#'-\\ ", "|#-' '-#|", " \\-.#.-/ ", "  '---'  "],
        ["  .---.  ", " /'#-#'\\ ", "|- '#' -|", " \\.#-#./ ", "  '---'  "],
    ];
    FRAMES[frame % FRAME_COUNT]
}

pub fn title_rows() -> [&'static str; 4] {
    [
        " ___   ___    ___   ___  ___  ___    _  _  ___  ___  ___   ___ ",
        "/ __| / _ \\  / __| / __|| __|| _ \\  | \\| || __|| _ \\|   \\ / __|",
        "\\__ \\| (_) || (__ | (__ | _| |   /  | .` || _| |   /| |) |\\__ \\",
        "|___/ \\___/  \\___| \\___||___||_|_\\  |_|\\_||___||_|_\\|___/ |___/",
    ]
}

/// Tagline for a splash step; holds on the last one once the rotation is done.
pub fn tagline(step: usize) -> &'static str {
    TAGLINES[step.min(TAGLINES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_bounces_between_rows() {
        let rows: Vec<u16> = (0..10).map(|t| ball_row(t, 5)).collect();
        assert_eq!(rows, vec![4, 3, 2, 1, 0, 1, 2, 3, 4, 3]);
        assert_eq!(ball_row(7, 1), 0);
        assert_eq!(ball_row(7, 0), 0);
    }

    #[test]
    fn frames_and_title_are_rectangular() {
        for f in 0..FRAME_COUNT {
            assert!(soccer_ball_frame(f).iter().all(|r| r.chars().count() == 9));
        }
        let title = title_rows();
        assert!(title.iter().all(|r| r.chars().count() == title[0].chars().count()));
    }

    #[test]
    fn tagline_holds_on_last() {
        assert_eq!(tagline(0), "Welcome to Soccer Nerds");
        assert_eq!(tagline(3), "Let's Get Started!");
        assert_eq!(tagline(9), "Let's Get Started!");
    }
}
