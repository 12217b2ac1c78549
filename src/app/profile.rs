use super::{Ctx, account_id};
use anyhow::anyhow;
use discord_client::{DiscordClient, User};
use menu::Page;
use menu::terminal::{Component, ContentArea, press_enter_to};
use tracing::{info, warn};

/// Informational page showing `users/@me` for one account
///
/// A failed request goes back to the account with the error as a banner.
pub fn page(ctx: Ctx) -> Page {
    Page::new().with_title("Profile").with_hook(move |params, _, nav| {
        let id = account_id(params)?;
        let token = ctx
            .store
            .lock()
            .find_by_id(id)
            .map(|(_, account)| account.token.clone())
            .ok_or_else(|| anyhow!("account {id} no longer exists"))?;

        println!("Contacting Discord...");
        let client =
            DiscordClient::with_timeout(&ctx.config.api_base, token, ctx.request_timeout())?;
        let fetched = ctx.runtime.block_on(client.current_user());

        match fetched {
            Ok(user) => {
                info!(account = %id, "profile fetched");
                if user.id != id {
                    warn!(account = %id, remote = %user.id, "token belongs to a different user");
                }
                summary(&user).render();
                press_enter_to("go back")?;
                Ok(())
            }
            Err(e) => {
                warn!(account = %id, error = %e, "profile request failed");
                Ok(nav.navigate_back(Some(format!("Could not fetch profile: {e}")))?)
            }
        }
    })
}

fn summary(user: &User) -> ContentArea {
    let mut area = ContentArea::new()
        .add_field("Display", user.display_name())
        .add_field("Username", &user.username)
        .add_field("ID", &user.id);
    if let Some(email) = &user.email {
        area = area.add_field("Email", email);
    }
    if let Some(verified) = user.verified {
        area = area.add_field("Verified", if verified { "yes" } else { "no" });
    }
    if let Some(mfa) = user.mfa_enabled {
        area = area.add_field("2FA", if mfa { "enabled" } else { "disabled" });
    }
    area
}
