//! Grouping of classified files by title.

use std::collections::HashMap;

use tracing::warn;

use crate::classifier::{ClassifiedFile, Role};

use super::TitleGroup;

/// Title groups keyed by canonical title.
pub type TitleGroups = HashMap<String, TitleGroup>;

/// Merge classified files into one group per title.
///
/// Files are processed in listing order. Film files accumulate (duplicates
/// included); a repeated trailer replaces the earlier one and is logged.
pub fn group_titles<I>(files: I) -> TitleGroups
where
    I: IntoIterator<Item = ClassifiedFile>,
{
    let mut groups: TitleGroups = HashMap::new();

    for file in files {
        let group = groups
            .entry(file.title.clone())
            .or_insert_with(|| TitleGroup::new(file.title.clone()));

        match file.role {
            Role::Film => group.push_film(file.filename),
            Role::Trailer => {
                if let Some(previous) = group.set_trailer(file.filename) {
                    warn!(
                        title = %file.title,
                        replaced = %previous,
                        "Trailer listed more than once, keeping the last one"
                    );
                }
            }
        }
    }

    groups
}
