use super::Ctx;
use dialoguer::Input;
use menu::Page;
use menu::terminal::DefaultTheme;
use switchboard_common::Account;
use tracing::warn;

/// Collects a new account, then returns to the page it was opened from
pub fn page(ctx: Ctx) -> Page {
    Page::new().with_title("Add account").with_hook(move |_, _, nav| {
        let Some(account) = read_account()? else {
            return Ok(nav.navigate_back(None)?);
        };

        let added = ctx.store.lock().add(account.clone());
        let banner = match added {
            Ok(_) => {
                let saved = ctx.store.lock().flush();
                saved.err().map(|e| {
                    warn!("Failed to save accounts: {}", e);
                    format!("Account added but not saved: {e}")
                })
            }
            Err(e) => Some(format!("Could not add account \"{}\": {e}", account.name)),
        };

        Ok(nav.navigate_back(banner)?)
    })
}

/// `None` when the user leaves the name empty
fn read_account() -> anyhow::Result<Option<Account>> {
    let theme = DefaultTheme::default();
    let theme = theme.dialoguer_theme();

    let name: String = Input::with_theme(theme)
        .with_prompt("Name (leave empty to cancel)")
        .allow_empty(true)
        .interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Ok(None);
    }

    let id: String = Input::with_theme(theme)
        .with_prompt("User ID")
        .validate_with(|input: &String| validate_id(input))
        .interact_text()?;

    let token: String = Input::with_theme(theme)
        .with_prompt("Token")
        .interact_text()?;

    Ok(Some(Account::new(name, id.trim(), token.trim())))
}

fn validate_id(input: &str) -> Result<(), &'static str> {
    let input = input.trim();
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("an ID is a string of digits")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("80351110224678912").is_ok());
        assert!(validate_id(" 42 ").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("12a").is_err());
    }
}
