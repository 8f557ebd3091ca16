//! Caller-chosen relation sets
//!
//! Each view type has a matching set of flags naming which relations to
//! inline. Unrequested relations are left out of the view entirely.

use crate::core::error::{Error, Result};

macro_rules! relation_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$field_meta:meta])* $field:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $($(#[$field_meta])* pub $field: bool,)+
        }

        impl $name {
            /// Every relation requested
            pub const ALL: Self = Self { $($field: true,)+ };

            /// No relations requested
            pub const NONE: Self = Self { $($field: false,)+ };

            /// Relation names accepted by [`Self::from_names`]
            pub const NAMES: &'static [&'static str] = &[$($wire),+];

            /// Build a selection from wire relation names
            pub fn from_names<I, S>(names: I) -> Result<Self>
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                let mut selection = Self::NONE;
                for name in names {
                    match name.as_ref() {
                        $($wire => selection.$field = true,)+
                        other => {
                            return Err(Error::validation(format!(
                                "unknown relation `{}` for {} (expected one of: {})",
                                other,
                                stringify!($name),
                                Self::NAMES.join(", "),
                            )))
                        }
                    }
                }
                Ok(selection)
            }

            /// Selection for an optional list of names; no list means everything
            pub fn from_selection(names: Option<&[String]>) -> Result<Self> {
                match names {
                    Some(names) => Self::from_names(names),
                    None => Ok(Self::ALL),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL
            }
        }
    };
}

relation_set! {
    /// Relations of a user view
    UserRelations {
        /// Posts authored by the user
        posts => "posts",
        /// Users following the user
        followers => "followers",
        /// Users the user follows
        following => "following",
    }
}

relation_set! {
    /// Relations of a post view
    PostRelations {
        /// The post's author
        author => "author",
        /// Users who liked the post
        likes => "likes",
        /// Comments attached to the post
        comments => "comments",
    }
}

relation_set! {
    /// Relations of a comment view
    CommentRelations {
        /// The comment's author
        author => "author",
    }
}
