use anyhow::Result;

use famtrip_application::prelude::*;

use super::Context;
use crate::{cli::SettingsCommand, output};

pub fn run(ctx: &Context, cmd: SettingsCommand) -> Result<()> {
    if let SettingsCommand::Set { language, currency } = cmd {
        if let Some(language) = language {
            change_language(&ctx.store, &ctx.settings, language)?;
        }
        if let Some(currency) = currency {
            change_currency(&ctx.store, &ctx.settings, currency)?;
        }
    }
    let settings = ctx.store.select(|s| s.settings.settings);
    for line in output::settings_lines(&settings) {
        println!("{line}");
    }
    Ok(())
}
