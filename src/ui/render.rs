use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{FetchStatus, Header};
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let status = if app.is_loading() {
        FetchStatus::Loading
    } else if app.store().error_message().is_some() {
        FetchStatus::Failed
    } else {
        FetchStatus::Ready
    };
    frame.render_widget(Header::new(status, app.list().len()).widget(), header);

    frame.render_widget(Clear, body);
    let placeholder = if app.is_loading() {
        "Loading countries…"
    } else {
        "No countries"
    };
    app.list_mut().render(frame, body, placeholder);

    frame.render_widget(Footer::new().widget(footer), footer);

    app.notifier().render(frame, body);
}
