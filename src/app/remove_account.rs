use super::{Ctx, account_id};
use dialoguer::Confirm;
use menu::Page;
use menu::terminal::DefaultTheme;
use tracing::info;

/// Asks for confirmation; the detail page notices the removal on the way back
pub fn page(ctx: Ctx) -> Page {
    Page::new().with_title("Remove account").with_hook(move |params, _, nav| {
        let id = account_id(params)?;
        let name = ctx
            .store
            .lock()
            .find_by_id(id)
            .map(|(_, account)| account.name.clone());
        let Some(name) = name else {
            return Ok(nav.navigate_back(None)?);
        };

        let theme = DefaultTheme::default();
        let confirmed = Confirm::with_theme(theme.dialoguer_theme())
            .with_prompt(format!("Remove \"{name}\" ({id})?"))
            .default(false)
            .interact_opt()?
            .unwrap_or(false);

        if confirmed {
            let mut store = ctx.store.lock();
            if let Some((index, _)) = store.find_by_id(id) {
                store.remove(index)?;
                store.flush()?;
                info!(account = %id, "account removed");
            }
        }

        Ok(nav.navigate_back(None)?)
    })
}
