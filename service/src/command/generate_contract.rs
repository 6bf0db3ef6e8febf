//! [`Command`] for generating a filled participation contract.

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Engagement, Exhibitor, SelectionSnapshot},
    fields::MappingContext,
    infra::{templates, TemplateKind, Templates},
    pdf,
    totals::{compute_totals, TotalsBreakdown},
    Service,
};

use super::Command;

/// [`Command`] for generating a filled participation contract.
#[derive(Clone, Debug)]
pub struct GenerateContract {
    /// Identity of the exhibiting company.
    pub exhibitor: Exhibitor,

    /// Options the exhibitor selected.
    pub selection: SelectionSnapshot,

    /// Payment and signature record.
    pub engagement: Engagement,

    /// Renders a representative value into every optional field, for
    /// template QA only.
    pub preview_all: bool,
}

/// Filled participation contract produced by [`GenerateContract`].
#[derive(Clone, Debug)]
pub struct GeneratedContract {
    /// Suggested filename of the document.
    pub file_name: String,

    /// Flattened document bytes.
    pub document: Vec<u8>,

    /// Priced breakdown the document was filled with.
    pub totals: TotalsBreakdown,
}

impl<T> Command<GenerateContract> for Service<T>
where
    T: Templates<Err = templates::Error>,
{
    type Ok = GeneratedContract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: GenerateContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let GenerateContract {
            exhibitor,
            selection,
            engagement,
            preview_all,
        } = cmd;

        let template = self
            .templates()
            .fetch(TemplateKind::Contract)
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let totals = compute_totals(&selection, self.catalog());
        let document = pdf::fill_contract(&template, &MappingContext {
            exhibitor: &exhibitor,
            selection: &selection,
            engagement: &engagement,
            totals: &totals,
            catalog: self.catalog(),
            preview_all,
        })
        .map_err(tracerr::from_and_wrap!(=> E))?;

        log::info!(
            exhibitor = %exhibitor.company_name,
            total = %totals.total_incl_tax,
            "participation contract generated",
        );
        Ok(GeneratedContract {
            file_name: pdf::contract_filename(&exhibitor),
            document,
            totals,
        })
    }
}

/// Error of a [`GenerateContract`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Fetching the contract template failed.
    #[display("failed to fetch template: {_0}")]
    #[from]
    FetchTemplate(templates::Error),

    /// Filling the contract template failed.
    #[display("failed to fill template: {_0}")]
    #[from]
    FillTemplate(pdf::Error),
}
