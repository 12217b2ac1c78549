use super::Ctx;
use menu::Page;
use menu::terminal::{Component, ContentArea, press_enter_to};

pub fn page(ctx: Ctx) -> Page {
    Page::new().with_title("About").with_hook(move |_, _, _| {
        let config_file = ctx
            .config_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());
        let accounts = ctx.store.lock().len();

        ContentArea::new()
            .add_line(env!("CARGO_PKG_DESCRIPTION"))
            .add_line("")
            .add_field("Version", env!("CARGO_PKG_VERSION"))
            .add_field("Config", config_file)
            .add_field("Accounts", format!("{accounts} stored"))
            .add_field("API", &ctx.config.api_base)
            .render();

        press_enter_to("go back")
    })
}
