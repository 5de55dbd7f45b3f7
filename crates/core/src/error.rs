use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error with terminal or sub process: {}", _0)]
    Stdio(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No repositories were found in the catalog YAML. Is `{}` empty?", .path)]
    EmptyCatalog { path: String },

    #[error("Found a non-unique repository name: `{}`", .0)]
    NonUniqueName(String),

    #[error("Invalid repository name `{}`: names are used as directory names and may not be empty, `.`, `..` or contain path separators", .0)]
    InvalidName(String),

    #[error("Repository `{}` has no URL", .0)]
    EmptyUrl(String),

    #[error("Key `{}` is bound to more than one action", .0)]
    DuplicateKeyBinding(String),

    #[error("Could not resolve the user's home directory, nothing was cloned")]
    HomeDirectoryUnavailable,

    #[error("Destination `{}` already exists and is not empty", .0.display())]
    DestinationNotEmpty(PathBuf),

    #[error("Cloning `{}` into `{}` failed: {}", .url, .destination.display(), .reason)]
    CloneFailed {
        url: String,
        destination: PathBuf,
        reason: String,
    },
}

impl Error {
    pub fn empty_catalog(path: String) -> Self {
        Self::EmptyCatalog { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn clone_failed(url: &str, destination: PathBuf, reason: String) -> Self {
        Self::CloneFailed {
            url: url.to_string(),
            destination,
            reason,
        }
    }
}
