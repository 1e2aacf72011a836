use folio_types::AuthorRecord;

use crate::view_models::{AuthorBioViewModel, AvatarViewModel, BioViewModel};

/// Map the author record onto the bio view model. A missing record or a
/// blank name suppresses the biographical paragraph; the avatar always
/// renders. A blank summary degrades to omission of its clause.
pub fn present_bio(author: Option<&AuthorRecord>, avatar: AvatarViewModel) -> BioViewModel {
    let author = author
        .filter(|a| !a.name.trim().is_empty())
        .map(|a| AuthorBioViewModel {
            name: a.name.clone(),
            summary: a.summary.clone().filter(|s| !s.trim().is_empty()),
        });

    BioViewModel { avatar, author }
}
