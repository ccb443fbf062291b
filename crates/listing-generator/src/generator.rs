//! The record assembler and batch driver.

use crate::sample::{date_between, float_range, int_range, jitter_coordinate, pick_one, pick_subset};
use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::catalog::{
    AMENITY_SAMPLE_MAX, AMENITY_SAMPLE_MIN, HOST_VERIFICATION_SAMPLE_MAX,
    HOST_VERIFICATION_SAMPLE_MIN,
};
use seed_core::{Address, Catalog, CityRecord, Host, Images, Listing, Location, Review, ReviewScores};

/// Listing ids are dense sequential strings starting at this offset.
const LISTING_ID_BASE: u64 = 10_000_000;
/// Host ids are drawn from a one-million-wide band above this offset.
const HOST_ID_BASE: i32 = 50_000_000;
const REVIEW_ID_BASE: i32 = 360_000_000;
const REVIEWER_ID_BASE: i32 = 10_000_000;

/// Review dates fall in a fixed window.
fn review_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
    (start, end)
}

/// Listing generator that produces self-consistent synthetic records.
///
/// The generator uses a seeded random number generator, so runs with the
/// same seed and catalog produce identical data. Each record is assembled
/// independently; the only cross-record state is the sequential index that
/// feeds the `_id` scheme.
pub struct ListingGenerator {
    /// Lookup tables, validated at load time
    catalog: Catalog,
    /// Base seed, used when jumping to a start index
    seed: u64,
    rng: StdRng,
    /// Current record index (for incremental generation)
    index: u64,
}

impl ListingGenerator {
    /// Create a new generator with the given catalog and seed.
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Set the starting index for record generation.
    ///
    /// Useful for appending to an already seeded collection: sequential ids
    /// continue from the given index. The RNG is re-seeded from the base
    /// seed and index so resumed runs stay deterministic.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.compute_rng_seed_for_index(index));
        self
    }

    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the next listing record.
    pub fn next_listing(&mut self) -> Listing {
        let index = self.index;
        self.index += 1;

        let id = (LISTING_ID_BASE + index).to_string();

        let city = pick_one(&mut self.rng, &self.catalog.cities).clone();
        let property_type = pick_one(&mut self.rng, &self.catalog.property_types).clone();
        let room_type = pick_one(&mut self.rng, &self.catalog.room_types).clone();

        // Capacity fields anchor to bedrooms for rough internal consistency
        let bedrooms = int_range(&mut self.rng, 1, 5);
        let beds = int_range(&mut self.rng, bedrooms, bedrooms + 2);
        let bathrooms = float_range(&mut self.rng, 1.0, 3.0, 2);
        let accommodates = int_range(&mut self.rng, 2, bedrooms * 2 + 2);

        let price = int_range(&mut self.rng, 40, 450);
        let security_deposit = int_range(&mut self.rng, 50, 500);
        let cleaning_fee = int_range(&mut self.rng, 20, 120);
        let extra_people = int_range(&mut self.rng, 0, 30);
        let guests_included = int_range(&mut self.rng, 1, 4);

        let minimum_nights = *pick_one(&mut self.rng, &self.catalog.minimum_nights_options);
        let maximum_nights = *pick_one(&mut self.rng, &self.catalog.maximum_nights_options);
        let cancellation_policy =
            pick_one(&mut self.rng, &self.catalog.cancellation_policies).clone();

        let number_of_reviews = int_range(&mut self.rng, 0, 180);
        let review_scores = if number_of_reviews > 0 {
            Some(self.sample_review_scores())
        } else {
            None
        };
        let reviews = self.sample_reviews(&id, number_of_reviews);

        let host = self.sample_host(&city);
        let address = self.sample_address(&city);

        let amenities = pick_subset(
            &mut self.rng,
            &self.catalog.amenity_pool,
            AMENITY_SAMPLE_MIN,
            AMENITY_SAMPLE_MAX,
        );

        let summary = pick_one(&mut self.rng, &self.catalog.summaries).clone();
        // Two independently sampled sentences make the longer free text
        let description = format!(
            "{} {}",
            pick_one(&mut self.rng, &self.catalog.summaries),
            pick_one(&mut self.rng, &self.catalog.descriptions)
        );

        Listing {
            listing_url: format!("https://www.airbnb.com/rooms/{id}"),
            name: format!("{property_type} in {} — {bedrooms}BR {room_type}", city.city),
            summary,
            description,
            interaction: "Happy to give local recommendations. Self check-in available."
                .to_string(),
            house_rules: "No parties or events. No smoking inside. Pets allowed with prior approval."
                .to_string(),
            property_type,
            room_type,
            bed_type: "Real Bed".to_string(),
            minimum_nights: minimum_nights.to_string(),
            maximum_nights: maximum_nights.to_string(),
            cancellation_policy,
            accommodates,
            bedrooms,
            beds,
            number_of_reviews,
            bathrooms,
            amenities,
            price,
            security_deposit,
            cleaning_fee,
            extra_people,
            guests_included,
            images: Images {
                thumbnail_url: String::new(),
                medium_url: String::new(),
                picture_url: format!("https://picsum.photos/seed/{id}/800/600"),
                xl_picture_url: format!("https://picsum.photos/seed/{id}x/1200/800"),
            },
            host,
            address,
            review_scores,
            reviews,
            id,
        }
    }

    /// Generate multiple listings as a lazy iterator.
    pub fn listings(&mut self, count: u64) -> ListingIterator<'_> {
        ListingIterator {
            generator: self,
            remaining: count,
        }
    }

    fn sample_review_scores(&mut self) -> ReviewScores {
        ReviewScores {
            review_scores_accuracy: int_range(&mut self.rng, 7, 10),
            review_scores_cleanliness: int_range(&mut self.rng, 7, 10),
            review_scores_checkin: int_range(&mut self.rng, 8, 10),
            review_scores_communication: int_range(&mut self.rng, 8, 10),
            review_scores_location: int_range(&mut self.rng, 8, 10),
            review_scores_value: int_range(&mut self.rng, 7, 10),
            review_scores_rating: int_range(&mut self.rng, 75, 100),
        }
    }

    /// A small number of embedded reviews, never exceeding the listing's
    /// total review count.
    fn sample_reviews(&mut self, listing_id: &str, number_of_reviews: i32) -> Vec<Review> {
        let count = number_of_reviews.min(int_range(&mut self.rng, 0, 5));
        let (start, end) = review_window();

        (0..count)
            .map(|_| Review {
                id: (REVIEW_ID_BASE + int_range(&mut self.rng, 0, 9_999_999)).to_string(),
                date: date_between(&mut self.rng, start, end),
                listing_id: listing_id.to_string(),
                reviewer_id: (REVIEWER_ID_BASE + int_range(&mut self.rng, 0, 9_999_999))
                    .to_string(),
                reviewer_name: pick_one(&mut self.rng, &self.catalog.host_names).clone(),
                comments: pick_one(&mut self.rng, &self.catalog.review_comments).clone(),
            })
            .collect()
    }

    /// Each listing gets its own synthetic host; names may repeat but host
    /// identities are never shared across listings.
    fn sample_host(&mut self, city: &CityRecord) -> Host {
        let host_id = (HOST_ID_BASE + int_range(&mut self.rng, 0, 999_999)).to_string();

        Host {
            host_url: format!("https://www.airbnb.com/users/show/{host_id}"),
            host_name: pick_one(&mut self.rng, &self.catalog.host_names).clone(),
            host_location: format!("{}, {}", city.city, city.country),
            host_about: pick_one(&mut self.rng, &self.catalog.host_abouts).clone(),
            host_response_time: pick_one(&mut self.rng, &self.catalog.host_response_times).clone(),
            host_thumbnail_url: format!("https://i.pravatar.cc/150?u={host_id}"),
            host_picture_url: format!("https://i.pravatar.cc/300?u={host_id}"),
            host_neighbourhood: String::new(),
            host_response_rate: int_range(&mut self.rng, 80, 100),
            host_is_superhost: self.rng.gen_bool(0.3),
            host_has_profile_pic: true,
            host_identity_verified: self.rng.gen_bool(0.8),
            host_listings_count: int_range(&mut self.rng, 1, 8),
            host_total_listings_count: int_range(&mut self.rng, 1, 10),
            host_verifications: pick_subset(
                &mut self.rng,
                &self.catalog.host_verification_options,
                HOST_VERIFICATION_SAMPLE_MIN,
                HOST_VERIFICATION_SAMPLE_MAX,
            ),
            host_id,
        }
    }

    fn sample_address(&mut self, city: &CityRecord) -> Address {
        let coordinates =
            jitter_coordinate(&mut self.rng, city.coords, self.catalog.geo_jitter_radius);

        Address {
            street: format!("{}, {}", city.city, city.country),
            suburb: String::new(),
            government_area: city.city.clone(),
            market: city.market.clone(),
            country: city.country.clone(),
            country_code: city.country_code.clone(),
            location: Location::point(coordinates, self.rng.gen_bool(0.5)),
        }
    }
}

/// Iterator that lazily generates listings.
pub struct ListingIterator<'a> {
    generator: &'a mut ListingGenerator,
    remaining: u64,
}

impl Iterator for ListingIterator<'_> {
    type Item = Listing;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_listing())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListingIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_capacity_invariants() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);

        for listing in generator.listings(200) {
            assert!((1..=5).contains(&listing.bedrooms));
            assert!(listing.beds >= listing.bedrooms);
            assert!(listing.beds <= listing.bedrooms + 2);
            assert!(listing.accommodates >= 2);
            assert!(listing.accommodates <= 2 * listing.bedrooms + 2);
            assert!((1.0..=3.0).contains(&listing.bathrooms));
        }
    }

    #[test]
    fn test_amenities_are_unique_and_from_pool() {
        let catalog = Catalog::builtin();
        let pool: HashSet<_> = catalog.amenity_pool.iter().cloned().collect();
        let mut generator = ListingGenerator::new(catalog, 42);

        for listing in generator.listings(200) {
            assert!(listing.amenities.len() >= 8 && listing.amenities.len() <= 20);

            let unique: HashSet<_> = listing.amenities.iter().cloned().collect();
            assert_eq!(unique.len(), listing.amenities.len());
            assert!(unique.iter().all(|a| pool.contains(a)));
        }
    }

    #[test]
    fn test_review_scores_present_iff_reviewed() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);
        let mut saw_reviewed = false;
        let mut saw_unreviewed = false;

        for listing in generator.listings(500) {
            if listing.number_of_reviews == 0 {
                assert!(listing.review_scores.is_none());
                assert!(listing.reviews.is_empty());
                saw_unreviewed = true;
            } else {
                assert!(listing.review_scores.is_some());
                saw_reviewed = true;
            }
        }
        assert!(saw_reviewed && saw_unreviewed);
    }

    #[test]
    fn test_embedded_reviews_are_bounded() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);

        for listing in generator.listings(500) {
            assert!(listing.reviews.len() <= 5);
            assert!(listing.reviews.len() as i32 <= listing.number_of_reviews);

            for review in &listing.reviews {
                assert_eq!(review.listing_id, listing.id);
            }
        }
    }

    #[test]
    fn test_jitter_stays_within_catalog_radius() {
        let catalog = Catalog::builtin();
        let radius = catalog.geo_jitter_radius;
        let cities = catalog.cities.clone();
        let mut generator = ListingGenerator::new(catalog, 42);

        for listing in generator.listings(200) {
            let city = cities
                .iter()
                .find(|c| c.city == listing.address.government_area)
                .unwrap();
            let [lng, lat] = listing.address.location.coordinates;

            assert!((lng - city.coords[0]).abs() <= radius / 2.0 + 0.00005);
            assert!((lat - city.coords[1]).abs() <= radius / 2.0 + 0.00005);
        }
    }

    #[test]
    fn test_nights_invariant_holds() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);

        for listing in generator.listings(200) {
            let min: i32 = listing.minimum_nights.parse().unwrap();
            let max: i32 = listing.maximum_nights.parse().unwrap();
            assert!(min <= max);
        }
    }

    #[test]
    fn test_sequential_unique_ids() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);
        let listings: Vec<_> = generator.listings(100).collect();

        assert_eq!(listings.len(), 100);
        for (i, listing) in listings.iter().enumerate() {
            assert_eq!(listing.id, (10_000_000 + i as u64).to_string());
            assert_eq!(
                listing.listing_url,
                format!("https://www.airbnb.com/rooms/{}", listing.id)
            );
        }

        let ids: HashSet<_> = listings.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_single_city_single_property_type() {
        let mut catalog = Catalog::builtin();
        catalog.cities.truncate(1);
        catalog.property_types = vec!["Houseboat".to_string()];
        let city = catalog.cities[0].clone();

        let mut generator = ListingGenerator::new(catalog, 7);
        let listing = generator.next_listing();

        assert_eq!(listing.property_type, "Houseboat");
        assert_eq!(listing.address.government_area, city.city);
        assert_eq!(listing.address.country, city.country);
        assert_eq!(listing.address.country_code, city.country_code);
        assert_eq!(listing.address.market, city.market);
        assert_eq!(listing.host.host_location, format!("{}, {}", city.city, city.country));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = ListingGenerator::new(Catalog::builtin(), 42);
        let mut gen2 = ListingGenerator::new(Catalog::builtin(), 42);

        let listings1: Vec<_> = gen1.listings(20).collect();
        let listings2: Vec<_> = gen2.listings(20).collect();

        assert_eq!(listings1, listings2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = ListingGenerator::new(Catalog::builtin(), 1);
        let mut gen2 = ListingGenerator::new(Catalog::builtin(), 2);

        let listings1: Vec<_> = gen1.listings(20).collect();
        let listings2: Vec<_> = gen2.listings(20).collect();

        assert_ne!(listings1, listings2);
    }

    #[test]
    fn test_with_start_index_continues_id_sequence() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42).with_start_index(100);

        assert_eq!(generator.current_index(), 100);
        let listing = generator.next_listing();
        assert_eq!(listing.id, "10000100");
        assert_eq!(generator.current_index(), 101);
    }

    #[test]
    fn test_review_dates_in_window() {
        let (start, end) = review_window();
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);

        for listing in generator.listings(200) {
            for review in &listing.reviews {
                assert!(review.date >= start && review.date <= end);
            }
        }
    }

    #[test]
    fn test_host_verifications_bounded_and_unique() {
        let mut generator = ListingGenerator::new(Catalog::builtin(), 42);

        for listing in generator.listings(200) {
            let verifications = &listing.host.host_verifications;
            assert!(verifications.len() >= 2 && verifications.len() <= 5);

            let unique: HashSet<_> = verifications.iter().collect();
            assert_eq!(unique.len(), verifications.len());
        }
    }
}
