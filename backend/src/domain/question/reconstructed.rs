//! Runtime form of a question, as exchanged with the builder and the public
//! form.
//!
//! The same shape travels in both directions: the builder sends drafts with
//! its own provenance flags for [`super::serialize_placement`], and
//! [`super::deserialize_placement`] produces it from storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Layout, LayoutValidationError, QuestionType};

const fn first_page() -> u32 {
    1
}

/// A question with text and options resolved against its master template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructedQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tags: Option<u32>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub row_number: u32,
    #[serde(default)]
    pub column_number: u32,
    #[serde(default)]
    pub order_in_cell: u32,
    #[serde(default)]
    pub is_from_master: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_question_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_max_rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_max_tags: Option<u32>,
    #[serde(default)]
    pub is_modified: bool,
}

pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}

impl ReconstructedQuestion {
    /// A blank custom question of the given type at the top of page 1.
    pub fn custom(
        id: impl Into<String>,
        question_type: QuestionType,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question_type,
            question: text.into(),
            required: false,
            options: None,
            placeholder: None,
            max_rating: None,
            max_tags: None,
            page: 1,
            row_number: 0,
            column_number: 0,
            order_in_cell: 0,
            is_from_master: false,
            master_question_id: None,
            original_text: None,
            original_options: None,
            original_placeholder: None,
            original_max_rating: None,
            original_max_tags: None,
            is_modified: false,
        }
    }

    /// Validated grid position. An unset page (0) means the first page.
    ///
    /// # Errors
    /// Fails when the column falls outside the two-column grid.
    pub fn layout(&self) -> Result<Layout, LayoutValidationError> {
        Layout::from_draft(
            self.page,
            self.row_number,
            self.column_number,
            self.order_in_cell,
        )
    }

    /// Sort key for render order; out-of-grid drafts sort by raw coordinates.
    #[must_use]
    pub const fn render_key(&self) -> (u32, u32, u32, u32) {
        (
            self.page,
            self.row_number,
            self.column_number,
            self.order_in_cell,
        )
    }

    /// Text the master template was resolved with: the original text when
    /// the builder kept it, otherwise the current text.
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        non_empty(self.original_text.as_ref()).unwrap_or(self.question.as_str())
    }

    /// Options the master template was resolved with.
    #[must_use]
    pub fn canonical_options(&self) -> Option<&Vec<String>> {
        self.original_options.as_ref().or(self.options.as_ref())
    }

    #[must_use]
    pub fn text_modified(&self) -> bool {
        self.question != self.canonical_text()
    }

    /// Only choice-like questions can override their option list.
    #[must_use]
    pub fn options_modified(&self) -> bool {
        self.question_type.is_choice_like() && self.options.as_ref() != self.canonical_options()
    }

    /// Only text-like questions can override their placeholder.
    #[must_use]
    pub fn placeholder_modified(&self) -> bool {
        self.question_type.is_text_like()
            && non_empty(self.placeholder.as_ref())
                != non_empty(self.original_placeholder.as_ref())
    }

    fn limits_modified(&self) -> bool {
        let rating =
            self.original_max_rating.is_some() && self.max_rating != self.original_max_rating;
        let tags = self.original_max_tags.is_some() && self.max_tags != self.original_max_tags;
        rating || tags
    }

    /// Whether any resolved field differs from its master counterpart.
    #[must_use]
    pub fn differs_from_master(&self) -> bool {
        self.is_from_master
            && (self.text_modified()
                || self.options_modified()
                || self.placeholder_modified()
                || self.limits_modified())
    }

    /// Recompute `is_modified` after in-memory edits.
    pub fn refresh_modified(&mut self) {
        self.is_modified = self.differs_from_master();
    }
}

/// Stable sort into render order: page, row, column, order-in-cell.
pub fn sort_by_layout(questions: &mut [ReconstructedQuestion]) {
    questions.sort_by_key(ReconstructedQuestion::render_key);
}

/// Number of pages a form spans; an empty form still has one page.
#[must_use]
pub fn page_count(questions: &[ReconstructedQuestion]) -> u32 {
    questions
        .iter()
        .map(|question| question.page)
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Questions on a single form page, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPage {
    pub number: u32,
    pub questions: Vec<ReconstructedQuestion>,
}

/// Group questions by page number, pages ascending. Input order is kept
/// within each page, so sort first for render order.
#[must_use]
pub fn group_by_page(questions: &[ReconstructedQuestion]) -> Vec<FormPage> {
    let mut pages: BTreeMap<u32, Vec<ReconstructedQuestion>> = BTreeMap::new();
    for question in questions {
        pages
            .entry(question.page.max(1))
            .or_default()
            .push(question.clone());
    }
    pages
        .into_iter()
        .map(|(number, questions)| FormPage { number, questions })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn from_master(text: &str, options: Option<Vec<&str>>) -> ReconstructedQuestion {
        let options: Option<Vec<String>> =
            options.map(|list| list.into_iter().map(str::to_owned).collect());
        ReconstructedQuestion {
            is_from_master: true,
            master_question_id: Some(Uuid::new_v4()),
            original_text: Some(text.to_owned()),
            original_options: options.clone(),
            options,
            ..ReconstructedQuestion::custom("q1", QuestionType::Dropdown, text)
        }
    }

    #[rstest]
    fn refresh_modified_detects_text_edit() {
        let mut question = from_master("Full Name", None);
        question.question_type = QuestionType::Text;
        question.question = "Your full name".to_owned();

        question.refresh_modified();

        assert!(question.is_modified);
    }

    #[rstest]
    fn refresh_modified_detects_option_edit() {
        let mut question = from_master("Meal", Some(vec!["Veg", "Fish"]));
        question.options = Some(vec!["Veg".to_owned(), "Fish".to_owned(), "Vegan".to_owned()]);

        question.refresh_modified();

        assert!(question.is_modified);
    }

    #[rstest]
    fn refresh_modified_clears_flag_when_edit_is_reverted() {
        let mut question = from_master("Meal", Some(vec!["Veg", "Fish"]));
        question.is_modified = true;

        question.refresh_modified();

        assert!(!question.is_modified);
    }

    #[rstest]
    fn custom_questions_are_never_modified() {
        let mut question = ReconstructedQuestion::custom("q9", QuestionType::Text, "Company");
        question.original_text = Some("Employer".to_owned());

        question.refresh_modified();

        assert!(!question.is_modified);
    }

    #[rstest]
    fn placeholder_change_counts_for_text_like_only() {
        let mut text = from_master("Email", None);
        text.question_type = QuestionType::Email;
        text.placeholder = Some("you@example.com".to_owned());
        assert!(text.differs_from_master());

        let mut rating = from_master("Score", None);
        rating.question_type = QuestionType::Rating;
        rating.placeholder = Some("ignored".to_owned());
        assert!(!rating.differs_from_master());
    }

    #[rstest]
    fn sort_places_lower_order_in_cell_first() {
        let mut second = ReconstructedQuestion::custom("b", QuestionType::Text, "B");
        second.order_in_cell = 1;
        let first = ReconstructedQuestion::custom("a", QuestionType::Text, "A");
        let mut questions = vec![second, first];

        sort_by_layout(&mut questions);

        let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[rstest]
    fn grouping_keeps_order_within_pages() {
        let mut later = ReconstructedQuestion::custom("p2", QuestionType::Text, "Later");
        later.page = 2;
        let questions = vec![
            ReconstructedQuestion::custom("p1a", QuestionType::Text, "A"),
            later,
            ReconstructedQuestion::custom("p1b", QuestionType::Text, "B"),
        ];

        let pages = group_by_page(&questions);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        let first_ids: Vec<_> = pages[0].questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(first_ids, vec!["p1a", "p1b"]);
        assert_eq!(pages[1].questions[0].id, "p2");
        assert_eq!(page_count(&questions), 2);
    }

    #[rstest]
    fn empty_form_has_one_page() {
        assert_eq!(page_count(&[]), 1);
    }

    #[rstest]
    fn draft_deserialises_with_defaults() {
        let draft: ReconstructedQuestion = serde_json::from_value(json!({
            "id": "tmp-1",
            "type": "rating",
            "question": "How was it?",
            "maxRating": 5
        }))
        .expect("draft parses");

        assert_eq!(draft.page, 1);
        assert_eq!(draft.max_rating, Some(5));
        assert!(!draft.is_from_master);
        assert!(!draft.required);
    }

    #[rstest]
    fn serialises_builder_field_names() {
        let mut question = from_master("Meal", Some(vec!["Veg"]));
        question.order_in_cell = 2;
        let value = serde_json::to_value(&question).expect("serialise");

        assert_eq!(value["type"], json!("dropdown"));
        assert_eq!(value["orderInCell"], json!(2));
        assert_eq!(value["isFromMaster"], json!(true));
        assert_eq!(value["originalOptions"], json!(["Veg"]));
        assert!(value.get("placeholder").is_none());
    }
}
