//! Index declarations for the corpus collections.
//!
//! Two sets: the collation-aware single-field indexes on
//! `manuscript_metadata`, and the lookup indexes the ingestion workflow
//! expects on the dataset collection. Both are declarative and idempotent.

use mongodb::IndexModel;
use mongodb::bson::{Document, doc};
use mongodb::options::{Collation, CollationStrength, IndexOptions};

/// Fields of `manuscript_metadata` indexed with case-insensitive collation.
pub const METADATA_FIELDS: [&str; 10] = [
    "import_date",
    "ee",
    "ee-type",
    "filename",
    "filename_norm",
    "key",
    "key_norm",
    "PDF_downloaded",
    "title",
    "title_concat",
];

/// Collation ignoring case and diacritics (locale `en`, strength 2).
fn case_insensitive_collation() -> Collation {
    Collation::builder()
        .locale("en".to_string())
        .strength(CollationStrength::Secondary)
        .build()
}

/// Ascending collation-aware index models for `manuscript_metadata`.
#[must_use]
pub fn metadata_index_models() -> Vec<IndexModel> {
    METADATA_FIELDS
        .iter()
        .map(|field| {
            let mut keys = Document::new();
            keys.insert(*field, 1);

            IndexModel::builder()
                .keys(keys)
                .options(
                    IndexOptions::builder().collation(case_insensitive_collation()).build(),
                )
                .build()
        })
        .collect()
}

/// Lookup index models for the dataset collection.
///
/// The unique `citing_paper.dblp_id` index doubles as the duplicate check
/// during ingestion; the context index is sparse because contexts only
/// exist in intents mode.
#[must_use]
pub fn dataset_index_models() -> Vec<IndexModel> {
    vec![
        IndexModel::builder()
            .keys(doc! { "citing_paper.dblp_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("citing_paper_dblp_id_unique".to_string())
                    .build(),
            )
            .build(),
        IndexModel::builder()
            .keys(doc! { "cited_papers.dblp_id": 1 })
            .options(IndexOptions::builder().name("cited_papers_dblp_id".to_string()).build())
            .build(),
        IndexModel::builder()
            .keys(doc! { "cited_papers.doi": 1 })
            .options(IndexOptions::builder().name("cited_papers_doi".to_string()).build())
            .build(),
        IndexModel::builder()
            .keys(doc! { "cited_papers.citation_contexts.citation_id": 1 })
            .options(
                IndexOptions::builder()
                    .sparse(true)
                    .name("citation_contexts_citation_id".to_string())
                    .build(),
            )
            .build(),
        IndexModel::builder()
            .keys(doc! { "citing_paper.dblp_id": 1, "citing_paper.doi": 1 })
            .options(IndexOptions::builder().name("citing_paper_composite".to_string()).build())
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_models_cover_every_field() {
        let models = metadata_index_models();
        assert_eq!(models.len(), METADATA_FIELDS.len());

        for (model, field) in models.iter().zip(METADATA_FIELDS) {
            assert_eq!(model.keys.len(), 1);
            assert_eq!(model.keys.get_i32(field).unwrap(), 1);
        }
    }

    #[test]
    fn test_metadata_models_use_secondary_collation() {
        for model in metadata_index_models() {
            let options = model.options.as_ref().unwrap();
            let collation = options.collation.as_ref().unwrap();
            assert_eq!(collation.locale, "en");
            assert_eq!(collation.strength, Some(CollationStrength::Secondary));
        }
    }

    #[test]
    fn test_dataset_models_flags() {
        let models = dataset_index_models();
        assert_eq!(models.len(), 5);

        let named: Vec<_> = models
            .iter()
            .map(|model| model.options.as_ref().unwrap().name.as_deref().unwrap())
            .collect();
        assert_eq!(
            named,
            vec![
                "citing_paper_dblp_id_unique",
                "cited_papers_dblp_id",
                "cited_papers_doi",
                "citation_contexts_citation_id",
                "citing_paper_composite",
            ]
        );

        assert_eq!(models[0].options.as_ref().unwrap().unique, Some(true));
        assert_eq!(models[3].options.as_ref().unwrap().sparse, Some(true));
        assert_eq!(
            models[4].keys,
            doc! { "citing_paper.dblp_id": 1, "citing_paper.doi": 1 }
        );
    }
}
