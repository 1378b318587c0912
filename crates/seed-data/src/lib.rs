//! Seed fixtures and normalisation helpers for the news database.
//!
//! Fixture files store timestamps as epoch milliseconds and link comments to
//! articles by title. Before the rows can be inserted they pass through the
//! normaliser:
//!
//! - [`format_dates`] converts `created_at` into a UTC timestamp.
//! - [`make_ref_obj`] builds a title to identifier index from inserted
//!   articles.
//! - [`format_comments`] renames `created_by` to `author` and resolves
//!   `belongs_to` into an `article_id`.
//!
//! The functions never mutate their input and perform no I/O. Loading the
//! bundled fixture directories lives in [`SeedDataset`].
//!
//! # Example
//!
//! ```
//! use seed_data::{ArticleRef, format_comments, make_ref_obj, RawComment};
//!
//! let comments: Vec<RawComment> = serde_json::from_str(
//!     r#"[{
//!         "body": "Nice read",
//!         "belongs_to": "Moustache",
//!         "created_by": "lurker",
//!         "votes": 2,
//!         "created_at": 1542284514171
//!     }]"#,
//! )
//! .expect("valid fixture");
//! let index = make_ref_obj(&[ArticleRef::new(12, "Moustache")]);
//! let seeds = format_comments(&comments, &index).expect("titles resolve");
//!
//! assert_eq!(seeds[0].article_id, 12);
//! assert_eq!(seeds[0].author, "lurker");
//! ```

mod dataset;
mod error;
mod normalise;
mod records;

pub use dataset::{SeedDataset, SeedEnvironment};
pub use error::{DatasetError, NormaliseError};
pub use normalise::{ArticleRef, TitleIndex, format_comments, format_dates, make_ref_obj};
pub use records::{
    ArticleFields, ArticleSeed, CommentSeed, Dated, RawArticle, RawComment, RawDated, TopicSeed,
    UserSeed,
};
