//! Membership applications: the form model, the document rule and the review workflow.

pub mod documents;
pub mod form;
pub mod workflow;

pub use documents::{DocumentKind, DocumentSlot};
pub use form::{AdminFields, ChildKey, ChildList, MembershipForm};
pub use workflow::{ApplicationStage, MembershipWorkflow, WorkflowMode, WorkflowState};
