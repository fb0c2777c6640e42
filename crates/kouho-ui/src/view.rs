use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use kouho_grid::{GridSpec, Pool, assign_rows};

/// A rendered chip: the candidate text plus the screen cells it occupies,
/// kept for mouse hit-testing until the next render.
#[derive(Default, Clone)]
pub struct ChipSlot {
    pub text: String,
    pub rect: Rect,
}

#[derive(Default, Clone)]
pub struct DividerSlot {
    pub rect: Rect,
}

/// The candidate grid: greedy row assignment over the current width, chips
/// and dividers drawn from recycling pools every pass.
pub struct CandidateGridView {
    candidates: Vec<String>,
    spec: GridSpec,
    row_dividers: bool,
    chips: Pool<ChipSlot>,
    dividers: Pool<DividerSlot>,
}

impl CandidateGridView {
    pub fn new(spec: GridSpec, row_dividers: bool) -> Self {
        let mut chips = Pool::new(ChipSlot::default);
        chips.set_terminator(|chip: &mut ChipSlot| {
            chip.text.clear();
            chip.rect = Rect::default();
        });
        Self {
            candidates: Vec::new(),
            spec,
            row_dividers,
            chips,
            dividers: Pool::new(DividerSlot::default),
        }
    }

    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.chips.recycle();
        self.dividers.recycle();

        let assignment = assign_rows(&self.candidates, area.width, &self.spec);
        let mut y = area.y;
        let mut first_row = true;
        for row in &assignment {
            // occupied rows are a prefix, so the first empty one ends it
            if row.is_empty() || y >= area.bottom() {
                break;
            }
            if !first_row && self.row_dividers {
                let rule = Rect::new(area.x, y, area.width, 1).intersection(area);
                frame.render_widget(
                    Paragraph::new("─".repeat(rule.width as usize))
                        .style(Style::default().fg(Color::DarkGray)),
                    rule,
                );
                y += 1;
                if y >= area.bottom() {
                    break;
                }
            }

            let mut x = area.x;
            for (i, slot) in row.iter().enumerate() {
                if i > 0 && self.spec.divider > 0 {
                    let rect = Rect::new(x, y, self.spec.divider, 1).intersection(area);
                    if rect.width > 0 {
                        frame.render_widget(
                            Paragraph::new("│").style(Style::default().fg(Color::DarkGray)),
                            rect,
                        );
                        self.dividers.obtain().rect = rect;
                    }
                    x = x.saturating_add(self.spec.divider);
                }

                let rect = Rect::new(x, y, slot.width, 1).intersection(area);
                if rect.width > 0 {
                    let margin = " ".repeat(self.spec.chip_margin as usize);
                    frame.render_widget(
                        Paragraph::new(format!("{margin}{}{margin}", slot.text)).style(
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        rect,
                    );
                    let chip = self.chips.obtain();
                    chip.text.clear();
                    chip.text.push_str(&slot.text);
                    chip.rect = rect;
                }
                x = x.saturating_add(slot.width);
            }

            y += 1;
            first_row = false;
        }

        self.chips.shrink();
        self.dividers.shrink();
    }

    /// Candidate under a terminal cell, for mouse clicks. Dividers and
    /// blank cells hit nothing.
    pub fn chip_at(&self, column: u16, row: u16) -> Option<&str> {
        self.chips
            .in_use()
            .iter()
            .find(|chip| point_in_rect(column, row, chip.rect))
            .map(|chip| chip.text.as_str())
    }
}

pub fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn view() -> CandidateGridView {
        CandidateGridView::new(GridSpec::default(), true)
    }

    fn draw(view: &mut CandidateGridView, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .expect("draw");
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()))
            .collect()
    }

    #[test]
    fn renders_chips_with_margins_and_dividers() {
        let mut view = view();
        view.set_candidates(vec!["赤".to_string(), "青".to_string()]);
        let terminal = draw(&mut view, 20, 6);
        let line = row_text(&terminal, 0);
        assert!(line.contains(" 赤 "), "line was {line:?}");
        assert!(line.contains("│"), "line was {line:?}");
        assert!(line.contains(" 青 "), "line was {line:?}");
    }

    #[test]
    fn chip_at_maps_cells_to_candidates() {
        let mut view = view();
        view.set_candidates(vec!["赤".to_string(), "青".to_string()]);
        let _terminal = draw(&mut view, 20, 6);
        // 赤 occupies cells 0..4, divider cell 4, 青 cells 5..9
        assert_eq!(view.chip_at(0, 0), Some("赤"));
        assert_eq!(view.chip_at(3, 0), Some("赤"));
        assert_eq!(view.chip_at(4, 0), None);
        assert_eq!(view.chip_at(6, 0), Some("青"));
        assert_eq!(view.chip_at(12, 0), None);
        assert_eq!(view.chip_at(0, 1), None);
    }

    #[test]
    fn wrapped_rows_are_separated_by_a_rule() {
        let mut view = view();
        // width 8: one chip per row (4 + 1 + 4 > 8)
        view.set_candidates(vec!["赤".to_string(), "青".to_string()]);
        let terminal = draw(&mut view, 8, 6);
        assert!(row_text(&terminal, 0).contains(" 赤 "));
        assert!(row_text(&terminal, 1).starts_with("─"));
        assert!(row_text(&terminal, 2).contains(" 青 "));
        assert_eq!(view.chip_at(1, 2), Some("青"));
    }

    #[test]
    fn pools_shrink_to_the_rendered_chip_count() {
        let mut view = view();
        view.set_candidates(vec![
            "愛".to_string(),
            "青".to_string(),
            "赤".to_string(),
            "秋".to_string(),
        ]);
        draw(&mut view, 40, 6);
        assert_eq!(view.chips.cached(), 4);

        view.set_candidates(vec!["朝".to_string()]);
        draw(&mut view, 40, 6);
        assert_eq!(view.chips.cached(), 1);
        assert_eq!(view.chip_at(1, 0), Some("朝"));
    }

    #[test]
    fn clearing_candidates_empties_the_grid() {
        let mut view = view();
        view.set_candidates(vec!["愛".to_string()]);
        draw(&mut view, 20, 6);
        view.set_candidates(Vec::new());
        let terminal = draw(&mut view, 20, 6);
        assert_eq!(row_text(&terminal, 0).trim(), "");
        assert_eq!(view.chip_at(1, 0), None);
        assert_eq!(view.chips.cached(), 0);
    }
}
