use crate::cli::ListArgs;
use crate::config::ConfigStore;
use crate::registry::{ListSelection, write_listing};
use crate::utils::error::{FlowResult, handle_flow};
use anyhow::Result;
use std::path::Path;

pub fn handle_list_command(config_path: &Path, args: &ListArgs) -> Result<()> {
    let store = ConfigStore::open(config_path.to_path_buf())?;
    let registry = store.load()?;

    let selection = if args.all {
        ListSelection::All
    } else {
        ListSelection::Tag(&args.tag)
    };

    let count = write_listing(&mut std::io::stdout().lock(), &registry, selection)?;
    if count == 0 {
        let item_type = match selection {
            ListSelection::All => "registered directories".to_string(),
            ListSelection::Tag(tag) => format!("directories under tag '{}'", tag),
        };
        handle_flow(FlowResult::EmptyList { item_type });
    }

    Ok(())
}
