use super::{ACCOUNTS, ADD_ACCOUNT, Ctx, EXIT, about};
use crate::error::Result;
use menu::{Action, Choice, Page};

/// Top-level menu: built-ins first, configured entries before About and Exit
pub fn page(ctx: &Ctx) -> Result<Page> {
    let mut choices = vec![
        Choice::page("Accounts", ACCOUNTS),
        Choice::page("Add account", ADD_ACCOUNT),
    ];
    choices.extend(ctx.config.menu_choices()?);
    choices.push(Choice::new("About", Action::inline(about::page(ctx.clone()))));
    choices.push(Choice::page("Exit", EXIT));

    Ok(Page::new()
        .with_title("Switchboard")
        .with_message("What would you like to do?")
        .with_choices(choices))
}

/// Selecting it ends the session
pub fn exit_page() -> Page {
    Page::new().with_title("Exit").with_hook(|_, _, nav| {
        nav.exit();
        Ok(())
    })
}
