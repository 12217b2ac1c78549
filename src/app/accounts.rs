use super::{ADD_ACCOUNT, Ctx, account};
use menu::{Action, Choice, Page};
use switchboard_common::Account;

/// One entry per stored account, regenerated on every visit
pub fn page(ctx: Ctx) -> Page {
    Page::new()
        .with_title("Accounts")
        .with_message("Choose an account")
        .with_choice_generator(move || Ok(choices(&ctx)))
}

fn choices(ctx: &Ctx) -> Vec<Choice> {
    let accounts: Vec<Account> = ctx.store.lock().accounts().to_vec();

    let mut choices: Vec<Choice> = accounts
        .iter()
        .map(|acc| {
            Choice::new(
                label(acc),
                Action::inline(account::page(ctx.clone(), &acc.id)),
            )
        })
        .collect();
    choices.push(Choice::page("+ Add account", ADD_ACCOUNT));
    choices
}

fn label(account: &Account) -> String {
    match account.aliases.as_deref() {
        Some(aliases) if !aliases.is_empty() => {
            format!("{} ({}) [{}]", account.name, account.id, aliases.join(", "))
        }
        _ => format!("{} ({})", account.name, account.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::context;
    use switchboard_common::AppConfig;

    #[test]
    fn test_list_grows_with_store() {
        let (ctx, _rt) = context(AppConfig::default(), vec![Account::new("main", "1", "t")]);
        assert_eq!(choices(&ctx).len(), 2);

        ctx.store
            .lock()
            .add(Account::new("alt", "2", "t"))
            .unwrap();

        let labels: Vec<String> = choices(&ctx).into_iter().map(|c| c.label).collect();
        assert_eq!(labels, ["main (1)", "alt (2)", "+ Add account"]);
    }

    #[test]
    fn test_empty_store_still_offers_add() {
        let (ctx, _rt) = context(AppConfig::default(), Vec::new());
        let only = choices(&ctx);
        assert_eq!(only.len(), 1);
        assert!(matches!(&only[0].action, Action::Page(id) if id == ADD_ACCOUNT));
    }

    #[test]
    fn test_label_shows_aliases() {
        let account = Account::new("main", "1", "t").with_aliases(vec!["m".into(), "primary".into()]);
        assert_eq!(label(&account), "main (1) [m, primary]");
    }
}
