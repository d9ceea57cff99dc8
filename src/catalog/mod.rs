mod schema;
pub mod validation;

pub use schema::{Category, Question, QuestionKind, Subcategory};
pub use validation::validate_catalog;

use std::sync::OnceLock;

const BUILTIN_YAML: &str = include_str!("questions.yaml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// An ordered set of assessment questions.
///
/// Order is the display order for the interactive quiz; scoring is
/// order-insensitive and looks questions up by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The built-in 16-question affiliate-marketing catalog.
    ///
    /// Parsed once from the embedded YAML. The data ships inside the binary,
    /// so a parse failure is a build defect, not a runtime condition.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let questions = serde_saphyr::from_str(BUILTIN_YAML)
                .expect("embedded question catalog must be valid YAML");
            Catalog { questions }
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 16);
    }

    #[test]
    fn test_builtin_catalog_validates() {
        assert!(validate_catalog(Catalog::builtin()).is_ok());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        let question = catalog.find("tech_4").unwrap();
        assert_eq!(question.kind, QuestionKind::Scenario);
        assert_eq!(question.category, Category::Technical);
        assert_eq!(question.correct_answer, Some(0));
        assert_eq!(question.effective_weight(), 2.0);
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(Catalog::builtin().find("psych_99").is_none());
    }

    #[test]
    fn test_section_sizes() {
        let catalog = Catalog::builtin();
        let count = |category: Category| {
            catalog
                .questions()
                .iter()
                .filter(|q| q.category == category)
                .count()
        };
        assert_eq!(count(Category::Psychometric), 5);
        assert_eq!(count(Category::Technical), 5);
        assert_eq!(count(Category::Wiscar), 6);
    }

    #[test]
    fn test_every_wiscar_dimension_covered() {
        let catalog = Catalog::builtin();
        let dims: HashSet<_> = catalog
            .questions()
            .iter()
            .filter(|q| q.category == Category::Wiscar)
            .filter_map(|q| q.subcategory)
            .collect();
        for dim in [
            Subcategory::Will,
            Subcategory::Interest,
            Subcategory::Skill,
            Subcategory::Cognitive,
            Subcategory::AbilityToLearn,
            Subcategory::RealWorldFit,
        ] {
            assert!(dims.contains(&dim), "missing wiscar dimension {:?}", dim);
        }
    }
}
