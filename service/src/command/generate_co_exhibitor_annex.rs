//! [`Command`] for generating a filled co-exhibitor annex.

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::CoExhibitor,
    infra::{templates, TemplateKind, Templates},
    pdf,
    Service,
};

use super::Command;

/// [`Command`] for generating a filled co-exhibitor annex.
#[derive(Clone, Debug)]
pub struct GenerateCoExhibitorAnnex {
    /// Co-exhibitor to fill the annex with.
    pub co_exhibitor: CoExhibitor,

    /// Zero-based position of the co-exhibitor in the selection, used for
    /// the suggested filename.
    pub index: usize,
}

/// Filled annex produced by [`GenerateCoExhibitorAnnex`].
#[derive(Clone, Debug)]
pub struct GeneratedAnnex {
    /// Suggested filename of the document.
    pub file_name: String,

    /// Flattened document bytes.
    pub document: Vec<u8>,
}

impl<T> Command<GenerateCoExhibitorAnnex> for Service<T>
where
    T: Templates<Err = templates::Error>,
{
    type Ok = GeneratedAnnex;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: GenerateCoExhibitorAnnex,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let GenerateCoExhibitorAnnex { co_exhibitor, index } = cmd;

        let template = self
            .templates()
            .fetch(TemplateKind::CoExhibitor)
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let document = pdf::fill_co_exhibitor(&template, &co_exhibitor)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        log::info!(
            company = %co_exhibitor.company_name,
            "co-exhibitor annex generated",
        );
        Ok(GeneratedAnnex {
            file_name: pdf::co_exhibitor_filename(&co_exhibitor, index),
            document,
        })
    }
}

/// Error of a [`GenerateCoExhibitorAnnex`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Fetching the annex template failed.
    #[display("failed to fetch template: {_0}")]
    #[from]
    FetchTemplate(templates::Error),

    /// Filling the annex template failed.
    #[display("failed to fill template: {_0}")]
    #[from]
    FillTemplate(pdf::Error),
}
