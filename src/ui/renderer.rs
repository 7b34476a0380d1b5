//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Paint the pane background, then delegate to
//!    the component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_row;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// The active palette comes from the state's [`Appearance`](crate::ui::Appearance),
/// so a theme toggle recolors the whole pane on the next frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows);

    render_viewmodel(&viewmodel, state.appearance.active(), rows, cols);
}

/// Renders a view model with mode-specific layout.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    for row in 1..=rows {
        clear_row(row, theme, cols);
    }
    print!("{}", Theme::reset());

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
