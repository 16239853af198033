use diary_core::DiaryError;

use crate::app::{tags_from_args, AppContext};
use crate::cli::EditArgs;
use crate::errors::CliError;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if args.rename.is_none() && args.body.is_none() && args.tag.is_empty() {
        return Err(
            CliError::invalid_input("Nothing to change. Pass --body, --tag, or --rename.").into(),
        );
    }

    let title = ctx.with_session(|archive| {
        let mut entry = archive
            .get_entry(&args.title)
            .ok_or_else(|| DiaryError::NotFound(args.title.clone()))?;

        if let Some(ref new_title) = args.rename {
            entry.set_title(new_title.clone());
        }
        if let Some(ref body) = args.body {
            entry.set_content(body.clone());
        }
        if !args.tag.is_empty() {
            entry.set_tags(tags_from_args(&args.tag));
        }

        let title = entry.title().to_string();
        archive.update_entry(&args.title, entry)?;
        Ok(title)
    })?;

    if !ctx.quiet() {
        println!("Updated \"{}\"", title);
    }
    Ok(())
}
