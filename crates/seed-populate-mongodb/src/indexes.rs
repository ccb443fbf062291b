//! Secondary index declarations for the listings collection.

use crate::error::PopulatorError;
use bson::{doc, Document};
use mongodb::{Collection, IndexModel};
use tracing::info;

/// The index key specs the demo queries rely on: a geo index on the jittered
/// location, plus plain and compound ascending indexes.
pub fn index_specs() -> Vec<Document> {
    vec![
        doc! { "address.location": "2dsphere" },
        doc! { "price": 1 },
        doc! { "address.country_code": 1 },
        doc! { "property_type": 1, "room_type": 1 },
    ]
}

/// Create all secondary indexes on the collection.
pub async fn create_indexes(collection: &Collection<Document>) -> Result<(), PopulatorError> {
    for keys in index_specs() {
        info!("Creating index: {}", keys);
        let model = IndexModel::builder().keys(keys).build();
        collection.create_index(model).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_specs() {
        let specs = index_specs();

        assert_eq!(specs.len(), 4);
        assert_eq!(specs[0].get_str("address.location").unwrap(), "2dsphere");
        assert_eq!(specs[1].get_i32("price").unwrap(), 1);
        assert_eq!(specs[2].get_i32("address.country_code").unwrap(), 1);
        // Compound index keeps both keys in declaration order
        let compound: Vec<_> = specs[3].keys().collect();
        assert_eq!(compound, vec!["property_type", "room_type"]);
    }
}
