use super::{Ctx, account_id};
use anyhow::anyhow;
use dialoguer::Input;
use menu::Page;
use menu::terminal::DefaultTheme;

pub fn page(ctx: Ctx) -> Page {
    Page::new().with_title("Edit aliases").with_hook(move |params, _, nav| {
        let id = account_id(params)?;
        let (index, current) = {
            let store = ctx.store.lock();
            let (index, account) = store
                .find_by_id(id)
                .ok_or_else(|| anyhow!("account {id} no longer exists"))?;
            (index, account.aliases.clone().unwrap_or_default())
        };

        let theme = DefaultTheme::default();
        let input: String = Input::with_theme(theme.dialoguer_theme())
            .with_prompt("Aliases (comma separated, empty clears)")
            .with_initial_text(current.join(", "))
            .allow_empty(true)
            .interact_text()?;

        {
            let mut store = ctx.store.lock();
            store.set_aliases(index, parse_aliases(&input))?;
            store.flush()?;
        }

        Ok(nav.navigate_back(None)?)
    })
}

fn parse_aliases(input: &str) -> Vec<String> {
    let mut aliases: Vec<String> = Vec::new();
    for alias in input.split(',').map(str::trim).filter(|a| !a.is_empty()) {
        if !aliases.iter().any(|known| known.eq_ignore_ascii_case(alias)) {
            aliases.push(alias.to_string());
        }
    }
    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_aliases("a, b,,  c "), ["a", "b", "c"]);
        assert_eq!(parse_aliases("Main, main"), ["Main"]);
        assert!(parse_aliases("  ").is_empty());
    }
}
