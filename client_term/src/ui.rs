//! Drawing: a text screen per flow state, and the table while playing

use game_core::{ChallengeState, Rect as WorldRect, Side, Snapshot};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::flow::FlowState;

const PINK: Color = Color::Rgb(255, 77, 166);
const ROSE: Color = Color::Rgb(230, 0, 111);
const PLUM: Color = Color::Rgb(107, 0, 58);
const BLUSH: Color = Color::Rgb(255, 230, 242);

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.flow_state() {
        FlowState::Title => render_text(frame, area, title_lines(app.is_free_play())),
        FlowState::Briefing => render_text(frame, area, briefing_lines(&app.snapshot())),
        FlowState::Playing => render_table(frame, area, &app.snapshot(), app.is_free_play()),
        FlowState::Victory => render_text(frame, area, victory_lines(&app.snapshot())),
    }
}

fn render_text(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let inner = Rect::new(area.x, top, area.width, height.min(area.height));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn title_lines(free_play: bool) -> Vec<Line<'static>> {
    let hint = if free_play {
        "Press Enter to play"
    } else {
        "Press Enter to see the challenge"
    };
    vec![
        Line::styled(
            "LOVE PONG",
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        ),
        Line::styled("A Valentine's twist on Pong", Style::default().fg(PLUM)),
        Line::from(""),
        Line::from("Controls:"),
        Line::from("  W/S or Up/Down : Move"),
        Line::from("  Q              : Quit"),
        Line::from(""),
        Line::styled(
            hint,
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn briefing_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let targets = snapshot.targets;
    vec![
        Line::styled(
            "THE CHALLENGE",
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "Finish with exactly {} for you and {} for the opponent.",
            targets.player, targets.opponent
        )),
        Line::from("Run past either number and the round is lost."),
        Line::from(""),
        Line::styled(
            "Press Enter to begin",
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn victory_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            "YOU DID IT",
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "Final score {} : {}",
            snapshot.score.opponent, snapshot.score.player
        )),
        Line::from(""),
        Line::styled(
            "Press Enter to exit",
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn render_table(frame: &mut Frame, area: Rect, snapshot: &Snapshot, free_play: bool) {
    let title = if free_play {
        " Love Pong ".to_string()
    } else {
        format!(
            " Target {} : {} ",
            snapshot.targets.opponent, snapshot.targets.player
        )
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PINK))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(TableView { snapshot }, inner);

    if snapshot.challenge == ChallengeState::OvershootPending {
        render_retry_modal(frame, area, snapshot);
    }
}

fn render_retry_modal(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let lines = vec![
        Line::styled(
            "Would you like to retry?",
            Style::default().fg(PLUM).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "A side went past {}:{}. Retry resets the score to 0:0.",
            snapshot.targets.opponent, snapshot.targets.player
        )),
        Line::from(""),
        Line::styled(
            "[Y]es    [N]o",
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ),
    ];

    let width = 64.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let modal = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(ROSE))
                .style(Style::default().bg(BLUSH).fg(PLUM)),
        ),
        modal,
    );
}

/// The table scaled into terminal cells
struct TableView<'a> {
    snapshot: &'a Snapshot,
}

impl TableView<'_> {
    /// Map a world rectangle to the cells it covers (at least one cell)
    fn cells(&self, rect: &WorldRect, area: Rect) -> Option<Rect> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let sx = area.width as f32 / self.snapshot.width;
        let sy = area.height as f32 / self.snapshot.height;

        let clamp_x = |v: f32| (v.max(0.0) as u16).min(area.width - 1);
        let clamp_y = |v: f32| (v.max(0.0) as u16).min(area.height - 1);

        let x0 = clamp_x(rect.left() * sx);
        let x1 = clamp_x((rect.right() * sx).ceil() - 1.0).max(x0);
        let y0 = clamp_y(rect.top() * sy);
        let y1 = clamp_y((rect.bottom() * sy).ceil() - 1.0).max(y0);

        Some(Rect::new(area.x + x0, area.y + y0, x1 - x0 + 1, y1 - y0 + 1))
    }

    fn fill(buf: &mut Buffer, cells: Rect, symbol: char, style: Style) {
        for y in cells.top()..cells.bottom() {
            for x in cells.left()..cells.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(symbol).set_style(style);
                }
            }
        }
    }
}

impl Widget for TableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Centre divider
        let mid = area.x + area.width / 2;
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((mid, y)) {
                cell.set_char('│').set_style(Style::default().fg(PLUM));
            }
        }

        // Score: opponent on the left, player on the right
        let score_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let opponent = self.snapshot.score.opponent.to_string();
        let player = self.snapshot.score.player.to_string();
        let offset = (area.width / 8).max(2);
        buf.set_string(
            mid.saturating_sub(offset + opponent.len() as u16),
            area.y,
            &opponent,
            score_style,
        );
        buf.set_string(mid + offset, area.y, &player, score_style);

        for paddle in &self.snapshot.paddles {
            let color = match paddle.side {
                Side::Player => ROSE,
                Side::Opponent => PLUM,
            };
            if let Some(cells) = self.cells(&paddle.rect, area) {
                Self::fill(buf, cells, '█', Style::default().fg(color));
            }
        }

        if let Some(ball) = &self.snapshot.ball {
            let style = if ball.serving {
                Style::default().fg(PINK).add_modifier(Modifier::SLOW_BLINK)
            } else {
                Style::default().fg(PINK)
            };
            if let Some(cells) = self.cells(&ball.rect, area) {
                Self::fill(buf, cells, '●', style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Session};

    fn rendered(snapshot: &Snapshot, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TableView { snapshot }.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_table_draws_paddles_on_their_sides() {
        let session = Session::new(Config::new(), 3).unwrap();
        let buf = rendered(&session.snapshot(), 128, 36);

        // Opponent paddle spans world x 30..70 -> cells 3..6 at 10 px per cell
        assert_eq!(buf[(4u16, 18u16)].symbol(), "█");
        // Player paddle spans world x 1210..1250 -> cells 121..124
        assert_eq!(buf[(122u16, 18u16)].symbol(), "█");
    }

    #[test]
    fn test_table_draws_ball_and_scores() {
        let session = Session::new(Config::new(), 3).unwrap();
        let buf = rendered(&session.snapshot(), 128, 36);

        // Ball centered at 640,360 covers cell 63..65, row 17..18
        assert_eq!(buf[(63u16, 17u16)].symbol(), "●");
        // Opponent score left of the divider, player score right of it
        assert_eq!(buf[(47u16, 0u16)].symbol(), "0");
        assert_eq!(buf[(80u16, 0u16)].symbol(), "0");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let session = Session::new(Config::new(), 3).unwrap();
        rendered(&session.snapshot(), 1, 1);
        rendered(&session.snapshot(), 0, 0);
    }
}
