//! Source of contract template documents.

use std::future::Future;

#[cfg(feature = "fs")]
use std::path::PathBuf;

use common::define_kind;
use derive_more::{Display, Error as StdError, From};

/// Error of fetching a template document.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Reading the template file failed.
    #[display("failed to read template file: {_0}")]
    #[from]
    Io(std::io::Error),
}

define_kind! {
    #[doc = "Kind of a fillable template document."]
    enum TemplateKind {
        #[doc = "Participation contract of the main exhibitor."]
        Contract = 1,

        #[doc = "Co-exhibitor annex."]
        CoExhibitor = 2,
    }
}

impl TemplateKind {
    /// Conventional file name of this template kind.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Contract => "contract.pdf",
            Self::CoExhibitor => "co-exhibitor.pdf",
        }
    }
}

/// Source the [`Service`] fetches template bytes from.
///
/// Fetching is the single suspension point of a fill operation: once the
/// bytes are in memory, filling and flattening run synchronously, so two
/// concurrent operations never share mutable state.
///
/// [`Service`]: crate::Service
pub trait Templates {
    /// Type of this [`Templates`] source error.
    type Err;

    /// Fetches the raw bytes of the provided template kind.
    fn fetch(
        &self,
        kind: TemplateKind,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Err>> + Send;
}

/// [`Templates`] source reading template files from a local directory.
#[cfg(feature = "fs")]
#[derive(Clone, Debug)]
pub struct FsTemplates {
    /// Directory holding the template files.
    dir: PathBuf,
}

#[cfg(feature = "fs")]
impl FsTemplates {
    /// Creates a new [`FsTemplates`] source over the provided directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(feature = "fs")]
impl Templates for FsTemplates {
    type Err = Error;

    async fn fetch(&self, kind: TemplateKind) -> Result<Vec<u8>, Self::Err> {
        Ok(tokio::fs::read(self.dir.join(kind.file_name())).await?)
    }
}
