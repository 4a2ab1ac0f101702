//! Index declaration tests.

use dblp_corpus_tools::indexes::{METADATA_FIELDS, dataset_index_models, metadata_index_models};

#[test]
fn test_metadata_field_list_is_fixed() {
    assert_eq!(
        METADATA_FIELDS,
        [
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
        ]
    );
}

#[test]
fn test_metadata_indexes_are_single_field_ascending() {
    for (model, field) in metadata_index_models().iter().zip(METADATA_FIELDS) {
        assert_eq!(model.keys.len(), 1);
        assert_eq!(model.keys.get_i32(field).unwrap(), 1);
    }
}

#[test]
fn test_only_the_primary_dataset_index_is_unique() {
    let uniques: Vec<_> = dataset_index_models()
        .iter()
        .filter(|model| {
            model.options.as_ref().and_then(|options| options.unique) == Some(true)
        })
        .map(|model| model.keys.clone())
        .collect();

    assert_eq!(uniques, vec![mongodb::bson::doc! { "citing_paper.dblp_id": 1 }]);
}
