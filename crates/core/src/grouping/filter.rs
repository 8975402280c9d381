//! Selection of newly completed titles.

use tracing::debug;

use crate::ledger::ReportedSet;

use super::{TitleGroup, TitleGroups};

/// Select complete groups whose title has not been reported yet.
///
/// Titles are visited in lexicographic order, which is also the order of
/// the returned groups. Every selected group is recorded in `reported` in
/// the same pass.
pub fn select_new(groups: &TitleGroups, reported: &mut ReportedSet) -> Vec<TitleGroup> {
    let mut titles: Vec<&String> = groups.keys().collect();
    titles.sort();

    let mut selected = Vec::new();
    for title in titles {
        let group = &groups[title];
        if !group.is_complete() || reported.contains(title) {
            continue;
        }

        debug!(%title, films = group.film_files.len(), "Newly completed title");
        reported.insert(group.clone());
        selected.push(group.clone());
    }

    selected
}
