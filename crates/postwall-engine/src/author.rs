use postwall_types::{Author, PostId};

/// Resolve a post's author display name by scanning the author
/// collection for a matching `post_id`.
///
/// First match in supplied order wins; `None` means no author, which
/// is a valid displayable state rather than an error.
pub fn resolve_author<'a>(authors: &'a [Author], post_id: &PostId) -> Option<&'a str> {
    authors
        .iter()
        .find(|author| &author.post_id == post_id)
        .map(|author| author.username.as_str())
}
