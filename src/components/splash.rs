use crate::components::splash_frames::{
    SplashColor, ball_row, resolve, soccer_ball_frame, tagline, title_rows,
};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Style;
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Widget};

pub use crate::components::splash_frames::FRAME_COUNT;

/// Startup splash: bouncing ball, title art and the current tagline.
#[derive(Default)]
pub struct SplashScreen {
    pub frame: usize,
    pub tick: u64,
    pub tagline_step: usize,
}

impl Widget for SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 3 {
            render_line(Line::from(" SOCCER NERDS "), area.x, area.y, area.width, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(resolve(SplashColor::Pitch));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if inner.width < 80 || inner.height < 7 {
            render_compact(&self, inner, buf);
            return;
        }
        render_full(&self, inner, buf);
    }
}

fn render_compact(splash: &SplashScreen, inner: Rect, buf: &mut Buffer) {
    render_centered(
        Line::from(Span::styled("SOCCER NERDS", resolve(SplashColor::Pitch))),
        inner,
        inner.y,
        buf,
    );
    if inner.height > 1 {
        render_centered(
            Line::from(Span::styled(tagline(splash.tagline_step), resolve(SplashColor::Accent))),
            inner,
            inner.y + 1,
            buf,
        );
    }
}

fn render_full(splash: &SplashScreen, inner: Rect, buf: &mut Buffer) {
    let title = title_rows();
    let ball = soccer_ball_frame(splash.frame);
    let lit_row = ball_row(splash.tick, ball.len() as u16);
    let title_width = title[0].chars().count();

    for (row, ball_line) in ball.iter().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let ball_style = if row as u16 == lit_row {
            resolve(SplashColor::Ball)
        } else {
            resolve(SplashColor::Shadow)
        };

        // Title art sits on the lower four ball rows.
        let title_line = row.checked_sub(1).and_then(|r| title.get(r)).copied().unwrap_or("");
        let line = Line::from(vec![
            Span::styled(ball_line.to_string(), ball_style),
            Span::raw("  "),
            Span::styled(format!("{title_line:<title_width$}"), resolve(SplashColor::Pitch)),
        ]);
        render_centered(line, inner, y, buf);
    }

    if inner.height > 6 {
        render_centered(
            Line::from(Span::styled(
                format!(" {} ", tagline(splash.tagline_step)),
                resolve(SplashColor::Accent),
            )),
            inner,
            inner.y + 6,
            buf,
        );
    }
}

fn render_centered(line: Line, area: Rect, y: u16, buf: &mut Buffer) {
    if y >= area.y + area.height {
        return;
    }
    let w = line.width() as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    render_line(line, x, y, area.width, buf);
}

fn render_line(line: Line, x: u16, y: u16, max_width: u16, buf: &mut Buffer) {
    let mut cx = x;
    let limit = x.saturating_add(max_width);
    for span in &line.spans {
        let style: Style = span.style;
        let run: String = span
            .content
            .chars()
            .take(limit.saturating_sub(cx) as usize)
            .collect();
        if run.is_empty() {
            break;
        }
        let n = run.chars().count() as u16;
        buf.set_string(cx, y, run, style);
        cx += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn compact_splash_shows_title_and_tagline() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        SplashScreen { frame: 0, tick: 0, tagline_step: 2 }.render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("SOCCER NERDS"));
        assert!(row_text(&buf, 2).contains("Real-time Match Data"));
    }

    #[test]
    fn full_splash_shows_tagline_under_the_art() {
        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        SplashScreen { frame: 1, tick: 3, tagline_step: 0 }.render(area, &mut buf);
        assert!(row_text(&buf, 7).contains("Welcome to Soccer Nerds"));
    }

    #[test]
    fn tiny_area_falls_back_to_one_line() {
        let area = Rect::new(0, 0, 15, 2);
        let mut buf = Buffer::empty(area);
        SplashScreen::default().render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("SOCCER NERD"));
    }
}
