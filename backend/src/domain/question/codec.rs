//! Reconciliation between builder questions and stored placements.
//!
//! [`serialize_placement`] flattens a [`ReconstructedQuestion`] into one
//! [`PlacedQuestion`], choosing between the custom, unmodified-master and
//! modified-master encodings. [`deserialize_placement`] layers a placement's
//! overrides back on top of its master template. Every surface that reads or
//! writes forms goes through these two functions.

use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use super::reconstructed::non_empty;
use super::{
    CustomOptions, JoinedPlacement, LayoutValidationError, MasterSignature, PlacedQuestion,
    PlacementOrigin, QuestionMetadata, QuestionType, ReconstructedQuestion,
};
use crate::domain::Error;
use crate::domain::ports::MasterCatalogResolver;

/// Failures turning a stored placement back into a question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementDecodeError {
    /// The placement references a master row that was not loaded.
    #[error("placement {placement_id} references missing master {master_id}")]
    MissingMaster { placement_id: Uuid, master_id: Uuid },
    /// The joined master row is not the one the placement references.
    #[error("placement {placement_id} joined master {found} instead of {expected}")]
    MasterMismatch {
        placement_id: Uuid,
        expected: Uuid,
        found: Uuid,
    },
}

fn invalid_layout(question: &ReconstructedQuestion, error: LayoutValidationError) -> Error {
    Error::invalid_request(format!("question {} has an invalid position: {error}", question.id))
        .with_details(json!({
            "questionId": question.id,
            "field": error.field(),
            "code": "invalid_layout",
        }))
}

/// Keep builder ids that parse as UUIDs; mint one otherwise. Callers decide
/// whether a kept id may be reused for this event.
fn placement_id(draft_id: &str) -> Uuid {
    Uuid::parse_str(draft_id).unwrap_or_else(|_| Uuid::new_v4())
}

/// Override payload for a fully custom question, chosen by type.
fn custom_payload(question: &ReconstructedQuestion) -> Option<CustomOptions> {
    let kind = question.question_type;
    if kind.is_choice_like() {
        return question
            .options
            .clone()
            .filter(|options| !options.is_empty())
            .map(CustomOptions::Options);
    }
    if kind.is_text_like() {
        return non_empty(question.placeholder.as_ref())
            .map(|text| CustomOptions::Metadata(QuestionMetadata::placeholder(text)));
    }
    match kind {
        QuestionType::Rating => question
            .max_rating
            .filter(|limit| *limit > 0)
            .map(|limit| CustomOptions::Metadata(QuestionMetadata::max_rating(limit))),
        QuestionType::Tags => question
            .max_tags
            .filter(|limit| *limit > 0)
            .map(|limit| CustomOptions::Metadata(QuestionMetadata::max_tags(limit))),
        _ => None,
    }
}

/// Override payload for an edited master question. An option edit wins over
/// a placeholder edit.
fn modified_payload(question: &ReconstructedQuestion) -> Option<CustomOptions> {
    if question.options_modified() {
        return question.options.clone().map(CustomOptions::Options);
    }
    if question.placeholder_modified() {
        let metadata = QuestionMetadata {
            placeholder: non_empty(question.placeholder.as_ref()).map(str::to_owned),
            ..QuestionMetadata::default()
        };
        return Some(CustomOptions::Metadata(metadata));
    }
    None
}

/// Flatten a builder question into its storage record.
///
/// Master-backed questions resolve (or mint) their catalog entry first; a
/// resolver failure is returned unchanged so the caller can abort the save.
/// A master-backed question is treated as edited when the builder flagged it
/// or when its fields no longer match the originals it carries.
///
/// # Errors
/// Returns `invalid_request` for out-of-grid positions and propagates
/// resolver failures.
pub async fn serialize_placement<R>(
    resolver: &R,
    question: &ReconstructedQuestion,
    event_id: Uuid,
    organization_id: Uuid,
) -> Result<PlacedQuestion, Error>
where
    R: MasterCatalogResolver + ?Sized,
{
    let layout = question
        .layout()
        .map_err(|err| invalid_layout(question, err))?;
    let kind = question.question_type;

    let (origin, custom_text, custom_options) = if !question.is_from_master {
        (
            PlacementOrigin::Custom {
                question_type: kind,
            },
            Some(question.question.clone()),
            custom_payload(question),
        )
    } else if question.is_modified || question.differs_from_master() {
        let signature = MasterSignature::new(
            kind,
            question.canonical_text(),
            question.canonical_options().cloned(),
        );
        let master_id = resolver
            .resolve_or_create(&signature, organization_id)
            .await?;
        debug!(question_id = %question.id, %master_id, "storing master overrides");
        (
            PlacementOrigin::Master { master_id },
            question
                .text_modified()
                .then(|| question.question.clone()),
            modified_payload(question),
        )
    } else {
        let signature =
            MasterSignature::new(kind, question.question.clone(), question.options.clone());
        let master_id = resolver
            .resolve_or_create(&signature, organization_id)
            .await?;
        (PlacementOrigin::Master { master_id }, None, None)
    };

    Ok(PlacedQuestion {
        id: placement_id(&question.id),
        event_id,
        origin,
        required: question.required,
        layout,
        custom_text,
        custom_options,
    })
}

fn apply_metadata(question: &mut ReconstructedQuestion, metadata: &QuestionMetadata) {
    if let Some(placeholder) = non_empty(metadata.placeholder.as_ref()) {
        question.placeholder = Some(placeholder.to_owned());
    }
    if let Some(limit) = metadata.max_rating.filter(|limit| *limit > 0) {
        question.max_rating = Some(limit);
    }
    if let Some(limit) = metadata.max_tags.filter(|limit| *limit > 0) {
        question.max_tags = Some(limit);
    }
}

/// Rebuild a question from its placement and, for master-backed rows, the
/// joined master. Order-preserving: callers sort by layout.
///
/// # Errors
/// Fails when a master-backed placement arrives without its master row.
pub fn deserialize_placement(
    joined: &JoinedPlacement,
) -> Result<ReconstructedQuestion, PlacementDecodeError> {
    let placement = &joined.placement;
    let layout = placement.layout;
    let custom_text = non_empty(placement.custom_text.as_ref());

    let mut question = match placement.origin {
        PlacementOrigin::Custom { question_type } => ReconstructedQuestion::custom(
            placement.id.to_string(),
            question_type,
            custom_text.unwrap_or_default(),
        ),
        PlacementOrigin::Master { master_id } => {
            let master = joined
                .master
                .as_ref()
                .ok_or(PlacementDecodeError::MissingMaster {
                    placement_id: placement.id,
                    master_id,
                })?;
            if master.id != master_id {
                return Err(PlacementDecodeError::MasterMismatch {
                    placement_id: placement.id,
                    expected: master_id,
                    found: master.id,
                });
            }
            let mut question = ReconstructedQuestion::custom(
                placement.id.to_string(),
                master.question_type,
                custom_text.unwrap_or(master.text.as_str()),
            );
            question.is_from_master = true;
            question.master_question_id = Some(master.id);
            question.original_text = Some(master.text.clone());
            question.original_options = master.options.clone();
            question.is_modified = custom_text.is_some() || placement.custom_options.is_some();
            // Metadata overrides keep the inherited choices.
            if !matches!(placement.custom_options, Some(CustomOptions::Options(_))) {
                question.options = master.options.clone();
            }
            question
        }
    };

    match &placement.custom_options {
        Some(CustomOptions::Options(options)) => question.options = Some(options.clone()),
        Some(CustomOptions::Metadata(metadata)) => apply_metadata(&mut question, metadata),
        None => {}
    }

    question.required = placement.required;
    question.page = layout.page();
    question.row_number = layout.row();
    question.column_number = layout.column();
    question.order_in_cell = layout.order();
    Ok(question)
}
