//! Lookup-table catalog for listing generation.
//!
//! The catalog is the read-only reference data every sampled field draws
//! from: city records, property and room types, template sentences, host
//! names and bios, the amenity vocabulary, and the discrete nights option
//! sets. `Catalog::builtin()` matches the demo dataset; a YAML file can
//! override any subset of the tables.
//!
//! Catalogs are validated once at load time so generation itself never has
//! to handle empty pools or inverted bounds.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Unique amenity sample size bounds per listing.
pub const AMENITY_SAMPLE_MIN: usize = 8;
pub const AMENITY_SAMPLE_MAX: usize = 20;

/// Unique host verification sample size bounds per host.
pub const HOST_VERIFICATION_SAMPLE_MIN: usize = 2;
pub const HOST_VERIFICATION_SAMPLE_MAX: usize = 5;

/// Error type for catalog loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A lookup pool has no entries
    #[error("Catalog pool '{0}' is empty")]
    EmptyPool(&'static str),

    /// A lookup pool is too small for unique sampling
    #[error("Catalog pool '{pool}' has {len} entries, need at least {needed}")]
    PoolTooSmall {
        pool: &'static str,
        len: usize,
        needed: usize,
    },

    /// A minimum-nights option exceeds a maximum-nights option
    #[error("minimum_nights option {min} exceeds maximum_nights option {max}")]
    NightsConflict { min: i32, max: i32 },

    /// Geo jitter radius is not a usable value
    #[error("geo_jitter_radius must be finite and non-negative, got {0}")]
    InvalidJitterRadius(f64),
}

/// One city record: denormalized address fields plus the canonical
/// `[longitude, latitude]` pair listings are jittered around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub market: String,
    pub coords: [f64; 2],
}

impl CityRecord {
    fn new(city: &str, country: &str, country_code: &str, coords: [f64; 2]) -> Self {
        Self {
            city: city.to_string(),
            country: country.to_string(),
            country_code: country_code.to_string(),
            // Market label mirrors the city for the built-in records
            market: city.to_string(),
            coords,
        }
    }
}

/// The full set of lookup tables. All fields default to the built-in
/// catalog, so a YAML override only needs to name the tables it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub cities: Vec<CityRecord>,
    pub property_types: Vec<String>,
    pub room_types: Vec<String>,
    pub cancellation_policies: Vec<String>,
    pub summaries: Vec<String>,
    pub descriptions: Vec<String>,
    pub host_names: Vec<String>,
    pub host_abouts: Vec<String>,
    pub host_response_times: Vec<String>,
    pub host_verification_options: Vec<String>,
    pub amenity_pool: Vec<String>,
    pub review_comments: Vec<String>,
    pub minimum_nights_options: Vec<i32>,
    pub maximum_nights_options: Vec<i32>,
    /// Maximum per-axis perturbation applied to city coordinates.
    pub geo_jitter_radius: f64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Load a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Validate the catalog's generation preconditions.
    ///
    /// Checks every pool is non-empty, the unique-sample pools are large
    /// enough, the nights option sets cannot produce a stay window where
    /// the minimum exceeds the maximum, and the jitter radius is usable.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let pools: [(&'static str, usize); 12] = [
            ("cities", self.cities.len()),
            ("property_types", self.property_types.len()),
            ("room_types", self.room_types.len()),
            ("cancellation_policies", self.cancellation_policies.len()),
            ("summaries", self.summaries.len()),
            ("descriptions", self.descriptions.len()),
            ("host_names", self.host_names.len()),
            ("host_abouts", self.host_abouts.len()),
            ("host_response_times", self.host_response_times.len()),
            ("review_comments", self.review_comments.len()),
            ("minimum_nights_options", self.minimum_nights_options.len()),
            ("maximum_nights_options", self.maximum_nights_options.len()),
        ];
        for (name, len) in pools {
            if len == 0 {
                return Err(CatalogError::EmptyPool(name));
            }
        }

        if self.amenity_pool.len() < AMENITY_SAMPLE_MAX {
            return Err(CatalogError::PoolTooSmall {
                pool: "amenity_pool",
                len: self.amenity_pool.len(),
                needed: AMENITY_SAMPLE_MAX,
            });
        }
        if self.host_verification_options.len() < HOST_VERIFICATION_SAMPLE_MAX {
            return Err(CatalogError::PoolTooSmall {
                pool: "host_verification_options",
                len: self.host_verification_options.len(),
                needed: HOST_VERIFICATION_SAMPLE_MAX,
            });
        }

        // The two option sets are sampled independently per record, so the
        // invariant must hold for every cross pairing.
        let largest_min = *self.minimum_nights_options.iter().max().unwrap();
        let smallest_max = *self.maximum_nights_options.iter().min().unwrap();
        if largest_min > smallest_max {
            return Err(CatalogError::NightsConflict {
                min: largest_min,
                max: smallest_max,
            });
        }

        if !self.geo_jitter_radius.is_finite() || self.geo_jitter_radius < 0.0 {
            return Err(CatalogError::InvalidJitterRadius(self.geo_jitter_radius));
        }

        Ok(())
    }

    /// The built-in catalog matching the demo dataset.
    pub fn builtin() -> Self {
        Self {
            cities: vec![
                // Europe
                CityRecord::new("London", "United Kingdom", "GB", [-0.1278, 51.5074]),
                CityRecord::new("Paris", "France", "FR", [2.3522, 48.8566]),
                CityRecord::new("Barcelona", "Spain", "ES", [2.1734, 41.3851]),
                CityRecord::new("Amsterdam", "Netherlands", "NL", [4.9041, 52.3676]),
                CityRecord::new("Lisbon", "Portugal", "PT", [-9.1393, 38.7223]),
                CityRecord::new("Porto", "Portugal", "PT", [-8.6291, 41.1579]),
                CityRecord::new("Berlin", "Germany", "DE", [13.4050, 52.5200]),
                CityRecord::new("Rome", "Italy", "IT", [12.4964, 41.9028]),
                // North America
                CityRecord::new("New York", "United States", "US", [-73.9857, 40.7484]),
                CityRecord::new("Toronto", "Canada", "CA", [-79.3832, 43.6532]),
                CityRecord::new("Vancouver", "Canada", "CA", [-123.1216, 49.2827]),
                CityRecord::new("Montreal", "Canada", "CA", [-73.5674, 45.5017]),
                CityRecord::new("Calgary", "Canada", "CA", [-114.0719, 51.0447]),
                // South America
                CityRecord::new("Buenos Aires", "Argentina", "AR", [-58.3816, -34.6037]),
                CityRecord::new("São Paulo", "Brazil", "BR", [-46.6333, -23.5505]),
                CityRecord::new("Rio de Janeiro", "Brazil", "BR", [-43.1729, -22.9068]),
                CityRecord::new("Bogotá", "Colombia", "CO", [-74.0721, 4.7110]),
                CityRecord::new("Medellín", "Colombia", "CO", [-75.5812, 6.2442]),
                CityRecord::new("Santiago", "Chile", "CL", [-70.6483, -33.4569]),
                CityRecord::new("Lima", "Peru", "PE", [-77.0428, -12.0464]),
                // Asia-Pacific
                CityRecord::new("Tokyo", "Japan", "JP", [139.6917, 35.6895]),
                CityRecord::new("Sydney", "Australia", "AU", [151.2093, -33.8688]),
            ],
            property_types: to_strings(&[
                "Apartment",
                "House",
                "Loft",
                "Condo",
                "Villa",
                "Studio",
                "Townhouse",
                "Cottage",
            ]),
            room_types: to_strings(&["Entire home/apt", "Private room", "Shared room"]),
            cancellation_policies: to_strings(&[
                "flexible",
                "moderate",
                "strict",
                "super_strict_30",
            ]),
            summaries: to_strings(&[
                "A stunning apartment in the heart of the city, steps from top restaurants and museums. Enjoy panoramic views and modern amenities in this beautifully renovated space.",
                "Charming historic home with original architectural details. High ceilings, exposed brick, and a sun-drenched living room make this the perfect urban retreat.",
                "Modern loft-style apartment with floor-to-ceiling windows. Fully equipped kitchen, fast WiFi, and a dedicated workspace ideal for digital nomads.",
                "Cozy boutique retreat in a quiet neighbourhood. Walking distance to parks, cafés, and public transport. Perfect for couples or solo travellers.",
                "Elegant and spacious villa with private garden. Professionally decorated with premium furnishings, offering a luxury stay in an unbeatable location.",
                "Minimalist studio with everything you need. Smart TV, Netflix, espresso machine, and blackout curtains for a restful stay.",
                "Quaint cottage with rustic charm and modern comforts. Fireplace, fully stocked kitchen, and a garden patio ideal for relaxing evenings.",
                "Contemporary condo on a high floor with city skyline views. Gym and pool access included. Business-friendly with concierge service.",
                "Sun-filled townhouse spread across three floors. Pet-friendly, with a private rooftop terrace and dedicated parking.",
                "Welcoming apartment in a lively cultural district. Local galleries, markets, and independent coffee shops right at your doorstep.",
                "Sleek waterfront condo with floor-to-ceiling glass and sweeping harbour views. Fall asleep to the sound of the water and wake up to stunning sunrises.",
                "Bright and airy suite in a heritage building, blending period architecture with contemporary interiors. Exposed stone walls and hardwood floors throughout.",
                "Private garden apartment tucked away on a leafy residential street. A genuine home-away-from-home, ideal for long stays and remote workers.",
                "Rooftop penthouse with 360-degree city views and a private terrace. Entertain, sunbathe, or stargaze from your personal outdoor sanctuary.",
                "Vibrant neighbourhood flat with colourful street art at every corner. Close to the best local food markets, craft beer bars, and live music venues.",
                "Architect-designed open-plan home featuring bespoke furniture and curated original artwork. Sophisticated, calm, and entirely unique.",
                "Tropical hideaway with lush jungle surroundings, a hammock on the veranda, and outdoor shower. The sounds of nature replace the city hum.",
                "Classic brownstone apartment on a tree-lined avenue, lovingly restored with original parquet floors and tall sash windows. The ideal base for city explorers.",
                "Bright mountain-view suite with ski-in access in winter and hiking trails at the door in summer. A four-season retreat with a wood-burning stove.",
                "Bohemian artist studio with high raftered ceilings, skylights, and creative vibes. Located steps from galleries, antique shops, and the weekend flea market.",
            ]),
            descriptions: to_strings(&[
                "The space is thoughtfully designed to balance comfort and style. Natural light floods every room, and the layout ensures plenty of privacy.",
                "Guests will have the entire place to themselves. The open-plan kitchen is well-stocked, and the bedroom features a premium mattress and hotel-quality linens.",
                "A fully self-contained unit with private entrance. The living area opens onto a private balcony with views over the neighbourhood.",
                "High-speed fibre WiFi throughout. Laptop-friendly desks in two rooms. The kitchen includes a barista-grade coffee machine and a full suite of appliances.",
                "The garden is maintained weekly and is perfect for morning coffee or evening wine. Outdoor dining furniture and a BBQ grill are provided.",
                "Ample storage space, a full-size washing machine and dryer, and an iron are available for longer stays.",
                "The bedroom is separated from the living area by solid doors, providing a genuine separation of rest and relaxation zones.",
                "Local artwork curated by the host adorns the walls. Every piece has a story — ask about them at check-in.",
                "The building is serviced by a 24-hour concierge, and secure underground parking is available on request. Contactless self check-in via smart lock.",
                "Floor-to-ceiling bookshelves line the main wall. A curated selection of travel literature and local history books is free for guests to enjoy.",
                "The kitchen is stocked with local spices, fresh coffee, and a welcome basket of regional produce on arrival. A love letter to local food culture.",
                "Heated bathroom floors, rainfall shower, and a deep soaking tub make this one of the most spa-like private rentals in the city.",
                "The terrace faces west for golden-hour sunsets. A telescope, outdoor heaters, and a fire pit are set up year-round for evening gatherings.",
                "Soundproofed walls and blackout blinds ensure complete rest. The building is set back from the road and surrounded by mature trees.",
                "Bike rentals are available through the host at a discount. The neighbourhood is flat and criss-crossed with dedicated cycling lanes.",
                "The host has prepared a detailed digital guidebook with neighbourhood restaurant picks, transport tips, and day-trip suggestions tailored to every interest.",
            ]),
            host_names: to_strings(&[
                "Alice", "Marco", "Sophie", "David", "Yuki", "Elena", "Carlos", "Priya", "Luca",
                "Amara", "James", "Mei", "Valentina", "Sebastián", "Isabelle", "Kwame", "Natasha",
                "Diego", "Aiko", "Camille", "Rafael", "Nadia", "Patrick", "Lucía", "Omar",
                "Ingrid", "Felipe", "Zara", "Hiroshi", "Chloe",
            ]),
            host_abouts: to_strings(&[
                "I love welcoming guests from around the world and sharing local tips. Ask me anything about the neighbourhood!",
                "Superhost for 5 years. I live nearby and am always happy to help make your stay memorable.",
                "Travel enthusiast and interior designer. I put a lot of care into every detail of this space.",
                "Local food blogger and tour guide. I can recommend the best hidden gems in the city.",
                "Architect by profession. This property is my passion project — every corner is intentional.",
                "Born and raised here, I know every shortcut, secret viewpoint, and hole-in-the-wall restaurant. Let me share them with you.",
                "I work in hospitality and bring that professional attention to detail to every stay. Your comfort is my priority.",
                "Passionate about sustainable travel. This property uses solar power, filtered tap water, and 100% recycled linens.",
                "Artist and musician. The apartment reflects my love of colour, texture, and creativity. I hope it inspires you too.",
                "I manage several properties but treat each guest as if they are staying in my own home. Reviews speak for themselves!",
                "Retired teacher and lifelong host. I genuinely enjoy meeting people and love helping guests discover the real city.",
                "Digital nomad for 10 years before settling here. I understand exactly what remote workers need — fast WiFi, a great desk, and strong coffee.",
            ]),
            host_response_times: to_strings(&[
                "within an hour",
                "within a few hours",
                "within a day",
            ]),
            host_verification_options: to_strings(&[
                "email",
                "phone",
                "reviews",
                "government_id",
                "jumio",
            ]),
            amenity_pool: to_strings(&[
                "WiFi",
                "Kitchen",
                "TV",
                "Washing machine",
                "Air conditioning",
                "Heating",
                "Dedicated workspace",
                "Hair dryer",
                "Iron",
                "Hangers",
                "Coffee maker",
                "Microwave",
                "Refrigerator",
                "Dishwasher",
                "Essentials",
                "Shampoo",
                "Hot water",
                "Bed linens",
                "Extra pillows and blankets",
                "First aid kit",
                "Fire extinguisher",
                "Smoke alarm",
                "Carbon monoxide alarm",
                "Long term stays allowed",
                "Self check-in",
                "Lock box",
                "Luggage dropoff allowed",
                "Garden",
                "Balcony",
                "Patio",
                "BBQ grill",
                "Pool",
                "Gym",
                "Elevator",
                "Parking",
                "Pets allowed",
                "Children friendly",
                "Crib",
                "High chair",
            ]),
            review_comments: to_strings(&[
                "Absolutely wonderful place — clean, comfortable, and perfectly located.",
                "The host was incredibly responsive and the apartment exceeded expectations.",
                "Great value for money. Would definitely stay here again.",
                "Exactly as described. The neighbourhood is fantastic and very walkable.",
                "Beautifully decorated space. The bed was incredibly comfortable.",
                "Perfect for our weekend trip. Check-in was seamless and the place was spotless.",
                "Some minor issues with noise from the street but overall a great stay.",
                "Host provided great local tips. The apartment has everything you need.",
            ]),
            minimum_nights_options: vec![1, 2, 3, 5, 7],
            maximum_nights_options: vec![14, 30, 60, 90, 365],
            geo_jitter_radius: 0.05,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().unwrap();

        assert_eq!(catalog.cities.len(), 22);
        assert_eq!(catalog.property_types.len(), 8);
        assert_eq!(catalog.room_types.len(), 3);
        assert_eq!(catalog.amenity_pool.len(), 39);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_builtin() {
        let yaml = r#"
property_types:
  - Bungalow
cities:
  - city: Porto
    country: Portugal
    country_code: PT
    market: Porto
    coords: [-8.6291, 41.1579]
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        catalog.validate().unwrap();

        assert_eq!(catalog.property_types, vec!["Bungalow".to_string()]);
        assert_eq!(catalog.cities.len(), 1);
        // Untouched tables keep the builtin content
        assert_eq!(catalog.room_types, Catalog::builtin().room_types);
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut catalog = Catalog::builtin();
        catalog.summaries.clear();

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyPool("summaries"))
        ));
    }

    #[test]
    fn test_validate_rejects_undersized_amenity_pool() {
        let mut catalog = Catalog::builtin();
        catalog.amenity_pool.truncate(10);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::PoolTooSmall {
                pool: "amenity_pool",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_conflicting_nights_options() {
        let mut catalog = Catalog::builtin();
        catalog.minimum_nights_options.push(30);
        catalog.maximum_nights_options.push(14);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NightsConflict { min: 30, max: 14 })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_jitter_radius() {
        let mut catalog = Catalog::builtin();
        catalog.geo_jitter_radius = -0.1;

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidJitterRadius(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let catalog = Catalog::builtin();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let back = Catalog::from_yaml(&yaml).unwrap();

        assert_eq!(back, catalog);
    }
}
