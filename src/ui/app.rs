use crate::model::{piece_weight, Piece, ShapeType};
use crate::report::{full_report, MetalStructure, StructureMetrics};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    PieceDetail,
    Report,
}

pub struct App {
    pub metal: MetalStructure,
    pub view: View,
    pub selected_piece: usize, // index into the alphabetical view
    pub report_lines: Vec<String>,
    pub report_scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(metal: MetalStructure) -> Result<Self> {
        let report_lines = full_report(&metal)?
            .lines()
            .map(str::to_string)
            .collect();

        Ok(Self {
            metal,
            view: View::Dashboard,
            selected_piece: 0,
            report_lines,
            report_scroll_offset: 0,
            should_quit: false,
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::PieceDetail => super::dashboard::draw_piece_detail(frame, self),
            View::Report => super::dashboard::draw_report(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.view {
                View::Dashboard => self.handle_dashboard_keys(key.code),
                View::PieceDetail => self.handle_detail_keys(key.code),
                View::Report => self.handle_report_keys(key.code),
            }
        }
        Ok(())
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_piece(),
            KeyCode::Down | KeyCode::Char('j') => self.next_piece(),
            KeyCode::Enter => self.enter_piece_detail(),
            KeyCode::Char('r') => self.enter_report(),
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.view = View::Dashboard,
            KeyCode::Left | KeyCode::Char('h') => self.previous_piece_wrapping(),
            KeyCode::Right | KeyCode::Char('l') => self.next_piece_wrapping(),
            KeyCode::Char('r') => self.enter_report(),
            _ => {}
        }
    }

    fn handle_report_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('r') => {
                self.view = View::Dashboard;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_report_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_report_down(),
            KeyCode::PageUp => {
                self.report_scroll_offset = self.report_scroll_offset.saturating_sub(10);
            }
            KeyCode::PageDown => {
                for _ in 0..10 {
                    self.scroll_report_down();
                }
            }
            _ => {}
        }
    }

    fn previous_piece(&mut self) {
        if self.selected_piece > 0 {
            self.selected_piece -= 1;
        }
    }

    fn next_piece(&mut self) {
        if self.selected_piece < self.metal.structure().len().saturating_sub(1) {
            self.selected_piece += 1;
        }
    }

    /// Previous piece in detail view (wrap around)
    fn previous_piece_wrapping(&mut self) {
        let count = self.metal.structure().len();
        if count == 0 {
            return;
        }
        self.selected_piece = if self.selected_piece > 0 {
            self.selected_piece - 1
        } else {
            count - 1
        };
    }

    /// Next piece in detail view (wrap around)
    fn next_piece_wrapping(&mut self) {
        let count = self.metal.structure().len();
        if count == 0 {
            return;
        }
        self.selected_piece = (self.selected_piece + 1) % count;
    }

    fn enter_piece_detail(&mut self) {
        if self.get_selected_piece().is_some() {
            self.view = View::PieceDetail;
        }
    }

    fn enter_report(&mut self) {
        self.view = View::Report;
        self.report_scroll_offset = 0;
    }

    fn scroll_report_up(&mut self) {
        if self.report_scroll_offset > 0 {
            self.report_scroll_offset -= 1;
        }
    }

    fn scroll_report_down(&mut self) {
        let max = self.report_lines.len().saturating_sub(1);
        if self.report_scroll_offset < max {
            self.report_scroll_offset += 1;
        }
    }

    #[must_use]
    pub fn sorted_pieces(&self) -> Vec<&Piece> {
        self.metal.structure().sorted_pieces()
    }

    #[must_use]
    pub fn get_selected_piece(&self) -> Option<&Piece> {
        self.sorted_pieces().get(self.selected_piece).copied()
    }

    /// Weight in Kg of every unit of the selected piece
    #[must_use]
    pub fn get_selected_weight(&self) -> Option<f64> {
        self.get_selected_piece().map(piece_weight)
    }

    /// Count and volume per shape type, for the summary panel
    #[must_use]
    pub fn get_shape_totals(&self) -> Vec<(ShapeType, u64, f64)> {
        ShapeType::ALL
            .into_iter()
            .map(|shape| {
                let volume = self.metal.shape_volume(shape.code()).unwrap_or_default();
                let count = self.metal.structure().total_piece_count_of(shape.code());
                (shape, count, volume)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Material, Structure};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let mut structure = Structure::new();
        structure.add_piece(Piece::cylinder(1, Material::Iron, 1.0, 1.0));
        structure.add_piece(Piece::cube(2, Material::Aluminum, 1.0));
        App::new(MetalStructure::new(structure)).unwrap()
    }

    #[test]
    fn selection_follows_alphabetical_order() {
        let mut app = app();
        assert_eq!(app.get_selected_piece().map(|p| p.name.as_str()), Some("Cube"));
        app.handle_dashboard_keys(KeyCode::Down);
        assert_eq!(
            app.get_selected_piece().map(|p| p.name.as_str()),
            Some("Cylinder")
        );
        app.handle_dashboard_keys(KeyCode::Down);
        assert_eq!(app.selected_piece, 1);
    }

    #[test]
    fn detail_view_wraps_around() {
        let mut app = app();
        app.handle_dashboard_keys(KeyCode::Enter);
        assert_eq!(app.view, View::PieceDetail);
        app.handle_detail_keys(KeyCode::Left);
        assert_eq!(app.selected_piece, 1);
        app.handle_detail_keys(KeyCode::Right);
        assert_eq!(app.selected_piece, 0);
        app.handle_detail_keys(KeyCode::Esc);
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn report_scroll_is_bounded() {
        let mut app = app();
        app.handle_dashboard_keys(KeyCode::Char('r'));
        assert_eq!(app.view, View::Report);
        app.handle_report_keys(KeyCode::Up);
        assert_eq!(app.report_scroll_offset, 0);
        for _ in 0..1_000 {
            app.handle_report_keys(KeyCode::Down);
        }
        assert_eq!(app.report_scroll_offset, app.report_lines.len() - 1);
    }

    #[test]
    fn empty_structure_has_no_detail() {
        let mut app = App::new(MetalStructure::default()).unwrap();
        app.handle_dashboard_keys(KeyCode::Enter);
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(app.get_selected_weight(), None);
    }

    #[test]
    fn shape_totals_cover_every_shape() {
        let totals = app().get_shape_totals();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[1], (ShapeType::Cube, 2, 2.0));
    }
}
