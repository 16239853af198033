use crate::app::AppContext;
use crate::cli::DeleteArgs;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    ctx.with_session(|archive| Ok(archive.delete_entry(&args.title)?))?;

    if !ctx.quiet() {
        println!("Deleted \"{}\"", args.title);
    }
    Ok(())
}
