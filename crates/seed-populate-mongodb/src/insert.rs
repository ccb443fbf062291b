//! Batched INSERT logic for MongoDB population.

use crate::error::PopulatorError;
use bson::{doc, Document};
use mongodb::Collection;
use seed_core::Listing;

/// Default batch size for INSERT operations.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Insert a batch of listings into a MongoDB collection.
pub async fn insert_batch(
    collection: &Collection<Document>,
    listings: &[Listing],
) -> Result<u64, PopulatorError> {
    if listings.is_empty() {
        return Ok(0);
    }

    let documents = listings
        .iter()
        .map(bson::to_document)
        .collect::<Result<Vec<Document>, _>>()?;

    let result = collection.insert_many(documents).await?;

    Ok(result.inserted_ids.len() as u64)
}

/// Drop a collection if it exists.
pub async fn drop_collection(collection: &Collection<Document>) -> Result<(), PopulatorError> {
    collection.drop().await?;
    Ok(())
}

/// Get the document count for a collection.
pub async fn count_documents(collection: &Collection<Document>) -> Result<u64, PopulatorError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use listing_generator::ListingGenerator;
    use seed_core::Catalog;

    #[test]
    fn test_generated_listing_converts_to_document() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);
        let listing = generator.next_listing();

        let doc = bson::to_document(&listing).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), listing.id);
        assert_eq!(doc.get_str("bed_type").unwrap(), "Real Bed");
        assert!(doc.get_document("host").is_ok());
        assert!(doc.get_document("address").is_ok());
        // review_scores only serializes when present
        assert_eq!(
            doc.contains_key("review_scores"),
            listing.review_scores.is_some()
        );
    }
}
