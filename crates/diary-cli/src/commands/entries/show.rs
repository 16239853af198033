use diary_core::DiaryError;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let entry = ctx.with_session(|archive| {
        archive
            .get_entry(&args.title)
            .ok_or_else(|| DiaryError::NotFound(args.title.clone()).into())
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry))?);
    } else {
        print_entry(&entry, ctx.quiet());
    }
    Ok(())
}
