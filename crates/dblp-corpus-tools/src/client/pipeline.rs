//! Aggregation pipeline for the citation-count report.

use mongodb::bson::{Document, doc};

/// Pipeline counting linked citations across the dataset collection.
///
/// Per document, filters `cited_papers` to entries where `dblp_id` or `doi`
/// is present and truthy, takes the filtered length, then sums the lengths
/// into a single `total_count` row. A missing `cited_papers` array counts
/// as empty. The whole computation runs server-side.
#[must_use]
pub fn linked_citation_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$project": {
                "count": {
                    "$size": {
                        "$filter": {
                            "input": { "$ifNull": ["$cited_papers", []] },
                            "as": "paper",
                            "cond": {
                                "$or": [
                                    { "$ifNull": ["$$paper.dblp_id", false] },
                                    { "$ifNull": ["$$paper.doi", false] },
                                ]
                            }
                        }
                    }
                }
            }
        },
        doc! {
            "$group": {
                "_id": null,
                "total_count": { "$sum": "$count" }
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_has_project_then_group() {
        let pipeline = linked_citation_pipeline();
        assert_eq!(pipeline.len(), 2);
        assert!(pipeline[0].contains_key("$project"));
        assert!(pipeline[1].contains_key("$group"));
    }

    #[test]
    fn test_filter_keeps_dblp_or_doi() {
        let pipeline = linked_citation_pipeline();
        let filter = pipeline[0]
            .get_document("$project")
            .unwrap()
            .get_document("count")
            .unwrap()
            .get_document("$size")
            .unwrap()
            .get_document("$filter")
            .unwrap();

        assert_eq!(filter.get_str("as").unwrap(), "paper");
        let cond = filter.get_document("cond").unwrap();
        let or = cond.get_array("$or").unwrap();
        assert_eq!(or.len(), 2);

        let input = filter.get_document("input").unwrap();
        let fallback = input.get_array("$ifNull").unwrap();
        assert_eq!(fallback[0], mongodb::bson::Bson::String("$cited_papers".to_string()));
    }

    #[test]
    fn test_group_sums_into_total_count() {
        let pipeline = linked_citation_pipeline();
        let group = pipeline[1].get_document("$group").unwrap();
        assert_eq!(group.get("_id"), Some(&mongodb::bson::Bson::Null));
        assert_eq!(
            group.get_document("total_count").unwrap(),
            &doc! { "$sum": "$count" }
        );
    }
}
