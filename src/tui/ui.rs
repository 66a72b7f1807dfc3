use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MovieDetailView, MovieList, TitleBar};

const APP_TITLE: &str = "Cinebusca";

const SEARCH_HELP: &str = " ↑↓ Navegar  Enter Ver detalhes  Ctrl+R Atualizar  Ctrl+U Limpar  Esc Sair ";
const DETAIL_HELP: &str = " ↑↓ Rolar  Esc Voltar ";
const DETAIL_ERROR_HELP: &str = " Enter Tentar novamente  Esc Voltar ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match app.screen() {
        Screen::Search => draw_search_screen(frame, app, tui, spinner_frame),
        Screen::Detail => draw_detail_screen(frame, app, tui, spinner_frame),
    }
}

fn draw_search_screen(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, search_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        APP_TITLE.to_string(),
        app.status_message.clone(),
        app.search.is_refreshing(),
        spinner_frame,
    )
    .render(frame, title_area);

    tui.search_bar.focused = true;
    tui.search_bar.render(frame, search_area);

    MovieList::new(&mut tui.movie_list, &app.search, spinner_frame).render(frame, main_area);

    draw_help(frame, help_area, SEARCH_HELP);
}

fn draw_detail_screen(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let Some(loader) = app.detail.as_ref() else {
        return;
    };

    // Header follows the loaded title, like a navigation bar
    let title = loader.title().unwrap_or("Detalhes").to_string();
    TitleBar::new(title, String::new(), false, spinner_frame).render(frame, title_area);

    MovieDetailView::new(&mut tui.movie_detail, loader, spinner_frame).render(frame, main_area);

    let help = if loader.state().is_failed() {
        DETAIL_ERROR_HELP
    } else {
        DETAIL_HELP
    };
    draw_help(frame, help_area, help);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Line::from(text).style(Style::default().fg(Color::DarkGray)).centered(),
        area,
    );
}
