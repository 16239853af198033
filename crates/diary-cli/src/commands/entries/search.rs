use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::parse_date;
use crate::output::print_entry_list;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let entries = ctx.with_session(|archive| {
        let entries = if let Some(date) = date {
            archive.search_by_date(date)
        } else if let Some(ref keyword) = args.keyword {
            archive.search_by_keyword(keyword)
        } else if let Some(ref tag) = args.tag {
            archive.search_by_tag(tag)
        } else {
            Vec::new()
        };
        Ok(entries)
    })?;

    print_entry_list(&entries, args.json, ctx.quiet())
}
