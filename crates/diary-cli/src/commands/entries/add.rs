use diary_core::Entry;

use crate::app::{tags_from_args, AppContext};
use crate::cli::AddArgs;
use crate::helpers::read_entry_body;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let body = read_entry_body(ctx.cli().no_input, args.body.clone())?;
    let entry = Entry::new(args.title.clone(), body).with_tags(tags_from_args(&args.tag));
    let created = entry.format_date();

    ctx.with_session(|archive| Ok(archive.add_entry(entry)?))?;

    if !ctx.quiet() {
        println!("Added \"{}\" ({})", args.title, created);
    }
    Ok(())
}
