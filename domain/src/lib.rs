//! Client-side domain layer of the CRM.
//!
//! Everything in here is pure or async-over-a-trait: the forms translate
//! between API records, editable form state and API payloads, the validators
//! produce an [`ErrorMap`], [`FormSession`] drives a single submission, and
//! the detail loaders fetch a record together with its sub-resources. The
//! HTTP side lives in the frontend crate behind the [`repository`] traits.

pub mod campaign_progress;
pub mod detail;
pub mod error_map;
pub mod forms;
pub mod input;
pub mod repository;
pub mod resources;
pub mod submission;

#[cfg(test)]
pub(crate) mod test_utils;

pub use campaign_progress::CampaignProgress;
pub use detail::ViewState;
pub use error_map::{ErrorMap, GENERAL_ERROR_KEY};
pub use repository::{
    ListFilter, RecordId, Repository, RepositoryError, Resource, Subresource,
    SubresourceRepository, WritableSubresource, WritableSubresourceRepository,
};
pub use submission::{FormMode, FormSession, SubmitError, SubmitStatus};
