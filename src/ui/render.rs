use crate::ui::app::App;
use crate::ui::controls::{Control, Controls};
use crate::ui::display::ScoreDisplay;
use crate::ui::footer::Footer;
use crate::ui::layout::{control_regions, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (score, controls, footer) = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(ScoreDisplay::new(app.score()).widget(score), score);

    let (decrement, increment) = control_regions(controls);
    let buttons = Controls::new();
    frame.render_widget(buttons.button(Control::Decrement), decrement);
    frame.render_widget(buttons.button(Control::Increment), increment);

    frame.render_widget(Footer::new().widget(), footer);
}
