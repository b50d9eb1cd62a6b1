mod author;
mod post;
mod settings;

pub use author::{Author, AuthorId};
pub use post::{Post, PostId};
pub use settings::{
    GridParams, LayoutMode, LayoutParams, LayoutSection, NavigationMode, Settings,
};
