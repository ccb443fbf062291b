//! The synthetic listing document model.
//!
//! Field names and nesting match the seeded MongoDB collection layout, so a
//! `Listing` converts to a BSON document with `bson::to_document` and back.
//! Review dates serialize as real BSON datetimes rather than strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthetic property record, the root unit of generated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Dense sequential identity, unique per run.
    #[serde(rename = "_id")]
    pub id: String,
    pub listing_url: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub interaction: String,
    pub house_rules: String,
    pub property_type: String,
    pub room_type: String,
    pub bed_type: String,
    pub minimum_nights: String,
    pub maximum_nights: String,
    pub cancellation_policy: String,
    pub accommodates: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub number_of_reviews: i32,
    pub bathrooms: f64,
    pub amenities: Vec<String>,
    pub price: i32,
    pub security_deposit: i32,
    pub cleaning_fee: i32,
    pub extra_people: i32,
    pub guests_included: i32,
    pub images: Images,
    pub host: Host,
    pub address: Address,
    /// Absent when the listing has no reviews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_scores: Option<ReviewScores>,
    pub reviews: Vec<Review>,
}

/// Image URLs for a listing. Thumbnail and medium sizes are left empty in
/// the seeded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub thumbnail_url: String,
    pub medium_url: String,
    pub picture_url: String,
    pub xl_picture_url: String,
}

/// Embedded host profile. Each listing carries its own synthetic host; host
/// identities are not shared across listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub host_id: String,
    pub host_url: String,
    pub host_name: String,
    pub host_location: String,
    pub host_about: String,
    pub host_response_time: String,
    pub host_thumbnail_url: String,
    pub host_picture_url: String,
    pub host_neighbourhood: String,
    pub host_response_rate: i32,
    pub host_is_superhost: bool,
    pub host_has_profile_pic: bool,
    pub host_identity_verified: bool,
    pub host_listings_count: i32,
    pub host_total_listings_count: i32,
    pub host_verifications: Vec<String>,
}

/// Denormalized address fields copied from the chosen city record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suburb: String,
    pub government_area: String,
    pub market: String,
    pub country: String,
    pub country_code: String,
    pub location: Location,
}

/// GeoJSON-like point, jittered from the city's canonical coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub location_type: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
    pub is_location_exact: bool,
}

impl Location {
    /// Create a GeoJSON `Point` location.
    pub fn point(coordinates: [f64; 2], is_location_exact: bool) -> Self {
        Self {
            location_type: "Point".to_string(),
            coordinates,
            is_location_exact,
        }
    }
}

/// Per-kind review sub-scores. Only present on listings with at least one
/// review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewScores {
    pub review_scores_accuracy: i32,
    pub review_scores_cleanliness: i32,
    pub review_scores_checkin: i32,
    pub review_scores_communication: i32,
    pub review_scores_location: i32,
    pub review_scores_value: i32,
    pub review_scores_rating: i32,
}

/// One embedded review document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    /// Backreference to the owning listing.
    pub listing_id: String,
    pub reviewer_id: String,
    pub reviewer_name: String,
    pub comments: String,
}
