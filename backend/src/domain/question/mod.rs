//! Form questions in their two shapes.
//!
//! The builder edits [`ReconstructedQuestion`]s: self-contained, with master
//! provenance carried inline. Storage keeps [`PlacedQuestion`]s: a position
//! plus either a custom question or a reference to a [`MasterQuestion`] with
//! sparse overrides. The [`codec`] module converts between them.

pub mod codec;
mod kind;
mod layout;
mod master;
mod placement;
mod reconstructed;

pub use codec::{PlacementDecodeError, deserialize_placement, serialize_placement};
pub use kind::{QuestionType, UnknownQuestionType};
pub use layout::{Layout, LayoutValidationError, MAX_COLUMN, MAX_POSITION};
pub use master::{MasterQuestion, MasterScope, MasterSignature};
pub use placement::{
    CustomOptions, JoinedPlacement, PlacedQuestion, PlacementOrigin, QuestionMetadata,
};
pub use reconstructed::{
    FormPage, ReconstructedQuestion, group_by_page, page_count, sort_by_layout,
};
