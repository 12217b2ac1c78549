use super::{Ctx, EDIT_ALIASES, PROFILE, REMOVE_ACCOUNT, account_params};
use menu::{Action, Choice, Page};
use menu::terminal::{Component, ContentArea};
use switchboard_common::Account;
use tracing::debug;

/// Detail page bound to one account id
///
/// Shows the account with its token redacted. If the account disappeared in
/// the meantime the page steps back to the list instead.
pub fn page(ctx: Ctx, id: &str) -> Page {
    let params = account_params(id);
    let choices = vec![
        Choice::new(
            "Fetch profile",
            Action::page_with_params(PROFILE, params.clone()),
        ),
        Choice::new(
            "Edit aliases",
            Action::page_with_params(EDIT_ALIASES, params.clone()),
        ),
        Choice::new(
            "Remove account",
            Action::page_with_params(REMOVE_ACCOUNT, params),
        ),
    ];

    let id = id.to_string();
    let title = ctx
        .store
        .lock()
        .find_by_id(&id)
        .map(|(_, account)| account.name.clone())
        .unwrap_or_else(|| id.clone());

    Page::new()
        .with_title(title)
        .with_message("Choose an action")
        .with_choices(choices)
        .with_hook(move |_, _, nav| {
            let account = ctx.store.lock().find_by_id(&id).map(|(_, account)| account.clone());
            match account {
                Some(account) => details(&account).render(),
                None => {
                    debug!(account = %id, "account gone, returning to list");
                    nav.navigate_back(None)?;
                }
            }
            Ok(())
        })
}

pub fn details(account: &Account) -> ContentArea {
    let mut area = ContentArea::new()
        .add_field("Name", &account.name)
        .add_field("ID", &account.id)
        .add_field("Token", account.redacted_token());
    if let Some(aliases) = account.aliases.as_ref().filter(|a| !a.is_empty()) {
        area = area.add_field("Aliases", aliases.join(", "));
    }
    area
}
