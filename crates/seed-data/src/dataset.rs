//! Loading fixture directories from disk.
//!
//! A dataset directory holds four JSON arrays: `topics.json`, `users.json`,
//! `articles.json` and `comments.json`. Two directories ship with the crate,
//! selected through [`SeedEnvironment`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cap_std::{ambient_authority, fs::Dir};
use serde::de::DeserializeOwned;

use crate::error::{DatasetError, NormaliseError};
use crate::normalise::format_dates;
use crate::records::{ArticleSeed, RawArticle, RawComment, TopicSeed, UserSeed};

/// Bundled fixture set to seed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedEnvironment {
    /// Small deterministic dataset used by tests.
    Test,
    /// Larger dataset for local development.
    #[default]
    Development,
}

impl SeedEnvironment {
    /// Directory name under the crate's `data/` folder.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Development => "development",
        }
    }

    /// Absolute path of the bundled fixture directory.
    #[must_use]
    pub fn data_dir(self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(self.as_str())
    }
}

impl fmt::Display for SeedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedEnvironment {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(DatasetError::UnknownEnvironment {
                name: value.to_owned(),
            }),
        }
    }
}

/// Raw contents of a fixture directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedDataset {
    /// Topic rows.
    pub topics: Vec<TopicSeed>,
    /// User rows.
    pub users: Vec<UserSeed>,
    /// Articles with epoch-millisecond timestamps.
    pub articles: Vec<RawArticle>,
    /// Comments keyed by article title.
    pub comments: Vec<RawComment>,
}

impl SeedDataset {
    /// Load the dataset bundled for `environment`.
    ///
    /// # Errors
    ///
    /// See [`SeedDataset::load`].
    pub fn bundled(environment: SeedEnvironment) -> Result<Self, DatasetError> {
        Self::load(&environment.data_dir())
    }

    /// Read every fixture file from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Read`] when the directory or a file cannot be
    /// read and [`DatasetError::Parse`] when a file does not hold the
    /// expected JSON array.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|source| {
            DatasetError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self {
            topics: read_records(&dir, path, "topics.json")?,
            users: read_records(&dir, path, "users.json")?,
            articles: read_records(&dir, path, "articles.json")?,
            comments: read_records(&dir, path, "comments.json")?,
        })
    }

    /// Articles with their timestamps converted, ready for insertion.
    ///
    /// # Errors
    ///
    /// Propagates [`NormaliseError::TimestampOutOfRange`].
    pub fn article_seeds(&self) -> Result<Vec<ArticleSeed>, NormaliseError> {
        format_dates(Some(self.articles.as_slice()))
    }
}

fn read_records<T: DeserializeOwned>(
    dir: &Dir,
    base: &Path,
    file_name: &str,
) -> Result<Vec<T>, DatasetError> {
    let path = base.join(file_name);
    let payload = dir
        .read_to_string(file_name)
        .map_err(|source| DatasetError::Read {
            path: path.clone(),
            source,
        })?;
    serde_json::from_str(&payload).map_err(|source| DatasetError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    //! Coverage for fixture loading and the bundled datasets.

    use super::*;
    use rstest::rstest;
    use std::fs;

    #[rstest]
    #[case("test", SeedEnvironment::Test)]
    #[case("Development", SeedEnvironment::Development)]
    #[case(" dev ", SeedEnvironment::Development)]
    fn environment_names_parse(#[case] raw: &str, #[case] expected: SeedEnvironment) {
        assert_eq!(raw.parse::<SeedEnvironment>().expect("known name"), expected);
    }

    #[rstest]
    fn unknown_environment_is_rejected() {
        let err = "production"
            .parse::<SeedEnvironment>()
            .expect_err("unknown name");
        assert!(matches!(err, DatasetError::UnknownEnvironment { name } if name == "production"));
    }

    #[rstest]
    fn bundled_test_dataset_is_consistent() {
        let dataset = SeedDataset::bundled(SeedEnvironment::Test).expect("bundled data loads");

        assert_eq!(dataset.topics.len(), 3);
        assert_eq!(dataset.users.len(), 4);
        assert_eq!(dataset.articles.len(), 12);
        assert_eq!(dataset.comments.len(), 18);

        let titles: Vec<&str> = dataset
            .articles
            .iter()
            .map(|article| article.fields.title.as_str())
            .collect();
        assert!(
            dataset
                .comments
                .iter()
                .all(|comment| titles.contains(&comment.belongs_to.as_str())),
            "every comment belongs to a bundled article"
        );
    }

    #[rstest]
    fn bundled_development_dataset_loads() {
        let dataset =
            SeedDataset::bundled(SeedEnvironment::Development).expect("bundled data loads");
        assert!(!dataset.articles.is_empty());
        assert!(dataset.article_seeds().is_ok());
    }

    #[rstest]
    fn first_test_article_matches_known_fixture() {
        let dataset = SeedDataset::bundled(SeedEnvironment::Test).expect("bundled data loads");
        let seeds = dataset.article_seeds().expect("timestamps in range");
        let first = seeds.first().expect("at least one article");

        assert_eq!(first.fields.title, "Living in the shadow of a great man");
        assert_eq!(first.fields.votes, 100);
        assert_eq!(first.created_at.timestamp_millis(), 1_542_284_514_171);
    }

    #[rstest]
    fn missing_directory_reports_read_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("nope");

        let err = SeedDataset::load(&missing).expect_err("directory is missing");
        assert!(matches!(err, DatasetError::Read { path, .. } if path == missing));
    }

    #[rstest]
    fn malformed_file_reports_parse_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(tmp.path().join("topics.json"), "{ not json").expect("write topics");

        let err = SeedDataset::load(tmp.path()).expect_err("topics are malformed");
        assert!(
            matches!(err, DatasetError::Parse { ref path, .. } if path.ends_with("topics.json")),
            "unexpected error: {err}"
        );
    }
}
