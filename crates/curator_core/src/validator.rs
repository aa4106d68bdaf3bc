//! crates/curator_core/src/validator.rs
//!
//! The displayability gate for raw catalogue records. Everything the rest of
//! the core knows about catalogue data quality is encoded here, as pure
//! string checks — no network, no mutation.

use crate::domain::{Artwork, CatalogueRecord};

/// Departments whose holdings are flat, displayable art. Matching is by
/// substring against the record's department name.
const ALLOWED_DEPARTMENTS: &[&str] = &[
    "European Paintings",
    "American Paintings and Sculpture",
    "Modern and Contemporary Art",
    "Photographs",
    "Drawings and Prints",
    "Asian Art",
    "Islamic Art",
];

/// Terms marking sculptures, statues and other 3-D object craft.
const EXCLUDED_OBJECT_TERMS: &[&str] = &[
    "sculpture", "statue", "bust", "relief", "marble", "bronze", "ceramic", "vessel", "vase",
    "bowl", "cup", "jar",
];

/// Terms marking accepted 2-D media. At least one must appear.
const ACCEPTED_MEDIUM_TERMS: &[&str] = &[
    "painting", "drawing", "print", "photograph", "sketch", "watercolor", "oil", "canvas",
    "paper", "etching", "lithograph",
];

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |value| value.is_empty())
}

/// Decides whether a raw catalogue record qualifies as a displayable 2-D
/// artwork. The catalogue's keyword search returns many irrelevant and
/// non-image results, so rejection here is expected and frequent.
pub fn is_valid_artwork(record: Option<&CatalogueRecord>) -> bool {
    let Some(record) = record else {
        return false;
    };

    // Must have a full-resolution image.
    if is_missing(&record.primary_image) {
        return false;
    }

    // Must be public domain.
    if record.is_public_domain != Some(true) {
        return false;
    }

    // A shown artwork always has a title.
    if is_missing(&record.title) {
        return false;
    }

    // Only departments holding paintings, photos, and drawings.
    let Some(department) = record.department.as_deref() else {
        return false;
    };
    if department.is_empty()
        || !ALLOWED_DEPARTMENTS
            .iter()
            .any(|allowed| department.contains(allowed))
    {
        return false;
    }

    let combined_text = format!(
        "{} {} {}",
        record.title.as_deref().unwrap_or(""),
        record.object_name.as_deref().unwrap_or(""),
        record.medium.as_deref().unwrap_or(""),
    )
    .to_lowercase();

    // Exclude sculptures, statues, and 3-D objects. The exclusion wins even
    // when department and image checks pass.
    if EXCLUDED_OBJECT_TERMS
        .iter()
        .any(|term| combined_text.contains(term))
    {
        return false;
    }

    // Only 2-D artworks — paintings, drawings, prints, photographs.
    if !ACCEPTED_MEDIUM_TERMS
        .iter()
        .any(|term| combined_text.contains(term))
    {
        return false;
    }

    true
}

/// The sole constructor of `Artwork`: returns `Some` exactly when
/// `is_valid_artwork` accepts the record.
pub fn validate(record: CatalogueRecord) -> Option<Artwork> {
    if !is_valid_artwork(Some(&record)) {
        return None;
    }

    Some(Artwork {
        object_id: record.object_id,
        title: record.title.unwrap_or_default(),
        image_url: record.primary_image.unwrap_or_default(),
        image_url_small: record.primary_image_small,
        department: record.department.unwrap_or_default(),
        medium: record.medium,
        artist_display_name: record.artist_display_name,
        artist_display_bio: record.artist_display_bio,
        artist_nationality: record.artist_nationality,
        object_date: record.object_date,
        dimensions: record.dimensions,
        culture: record.culture,
        period: record.period,
        object_url: record.object_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> CatalogueRecord {
        CatalogueRecord {
            object_id: 436_533,
            title: Some("Wheat Field with Cypresses".to_string()),
            primary_image: Some("https://images.example/wheat-field.jpg".to_string()),
            primary_image_small: Some("https://images.example/wheat-field-small.jpg".to_string()),
            is_public_domain: Some(true),
            department: Some("European Paintings".to_string()),
            object_name: Some("Painting".to_string()),
            medium: Some("Oil on canvas".to_string()),
            ..CatalogueRecord::default()
        }
    }

    #[test]
    fn accepts_a_fully_populated_painting() {
        let artwork = validate(valid_record()).expect("record should validate");
        assert_eq!(artwork.object_id, 436_533);
        assert!(!artwork.title.is_empty());
        assert!(!artwork.image_url.is_empty());
        assert!(!artwork.department.is_empty());
    }

    #[test]
    fn rejects_absent_record() {
        assert!(!is_valid_artwork(None));
    }

    #[test]
    fn rejects_missing_image_regardless_of_other_fields() {
        let mut record = valid_record();
        record.primary_image = Some(String::new());
        assert!(!is_valid_artwork(Some(&record)));

        record.primary_image = None;
        assert!(!is_valid_artwork(Some(&record)));
    }

    #[test]
    fn rejects_non_public_domain() {
        let mut record = valid_record();
        record.is_public_domain = Some(false);
        assert!(!is_valid_artwork(Some(&record)));

        record.is_public_domain = None;
        assert!(!is_valid_artwork(Some(&record)));
    }

    #[test]
    fn rejects_disallowed_department() {
        let mut record = valid_record();
        record.department = Some("Arms and Armor".to_string());
        assert!(!is_valid_artwork(Some(&record)));
    }

    #[test]
    fn department_match_is_by_substring() {
        let mut record = valid_record();
        record.department = Some("The American Paintings and Sculpture Wing".to_string());
        assert!(is_valid_artwork(Some(&record)));
    }

    // The 3-D exclusion wins even when department and image pass.
    #[test]
    fn rejects_bronze_sculpture_medium() {
        let mut record = valid_record();
        record.medium = Some("Bronze sculpture".to_string());
        assert!(!is_valid_artwork(Some(&record)));
    }

    #[test]
    fn rejects_record_without_a_2d_medium_term() {
        let mut record = valid_record();
        record.title = Some("Untitled".to_string());
        record.object_name = Some("Object".to_string());
        record.medium = Some("Mixed media assemblage".to_string());
        assert!(!is_valid_artwork(Some(&record)));
    }

    #[test]
    fn rejects_missing_title() {
        let mut record = valid_record();
        record.title = None;
        assert!(!is_valid_artwork(Some(&record)));
    }

    // "watercolor" in the title is enough when medium is missing entirely.
    #[test]
    fn accepts_medium_terms_from_the_title() {
        let mut record = valid_record();
        record.object_name = None;
        record.medium = None;
        record.title = Some("Watercolor study of a garden".to_string());
        assert!(is_valid_artwork(Some(&record)));
    }
}
