use common::{DiseaseEntry, Severity};

/// Static reference catalogue of the conditions the classifier can report.
pub fn catalogue() -> Vec<DiseaseEntry> {
    vec![
        DiseaseEntry {
            name: "Tomato Early Blight".to_string(),
            crop: "Tomato".to_string(),
            typical_severity: Severity::Severe,
            description: "Fungal disease (Alternaria solani) causing concentric dark \
                          rings on lower leaves that spread upward."
                .to_string(),
            treatment: "Remove affected leaves, rotate crops, and apply a \
                        copper-based fungicide."
                .to_string(),
        },
        DiseaseEntry {
            name: "Tomato Late Blight".to_string(),
            crop: "Tomato".to_string(),
            typical_severity: Severity::Critical,
            description: "Water mold (Phytophthora infestans) producing greasy gray \
                          lesions that can destroy a crop within days."
                .to_string(),
            treatment: "Destroy infected plants immediately and protect the rest \
                        with a systemic fungicide."
                .to_string(),
        },
        DiseaseEntry {
            name: "Coffee Leaf Rust".to_string(),
            crop: "Coffee".to_string(),
            typical_severity: Severity::Severe,
            description: "Orange powdery pustules (Hemileia vastatrix) on leaf \
                          undersides causing premature defoliation."
                .to_string(),
            treatment: "Prune for airflow, plant resistant varieties, and spray \
                        copper fungicide at the first sign of rust."
                .to_string(),
        },
        DiseaseEntry {
            name: "Coffee Berry Disease".to_string(),
            crop: "Coffee".to_string(),
            typical_severity: Severity::Critical,
            description: "Anthracnose (Colletotrichum kahawae) forming dark sunken \
                          lesions on green berries."
                .to_string(),
            treatment: "Apply protective fungicide before the rainy season and \
                        remove mummified berries."
                .to_string(),
        },
        DiseaseEntry {
            name: "Durian Fruit Rot".to_string(),
            crop: "Durian".to_string(),
            typical_severity: Severity::Severe,
            description: "Phytophthora palmivora infection causing brown watery rot \
                          on fruit and trunk cankers."
                .to_string(),
            treatment: "Improve drainage, avoid wounding trees, and apply \
                        phosphonate trunk injections."
                .to_string(),
        },
        DiseaseEntry {
            name: "Durian Leaf Spot".to_string(),
            crop: "Durian".to_string(),
            typical_severity: Severity::Moderate,
            description: "Fungal leaf spots that merge into large necrotic patches \
                          under prolonged humidity."
                .to_string(),
            treatment: "Thin the canopy and apply mancozeb during wet periods."
                .to_string(),
        },
        DiseaseEntry {
            name: "Powdery Mildew".to_string(),
            crop: "Multiple".to_string(),
            typical_severity: Severity::Mild,
            description: "White powdery fungal growth on leaf surfaces, common \
                          across vegetables and ornamentals."
                .to_string(),
            treatment: "Increase air circulation and treat with sulfur or \
                        potassium bicarbonate sprays."
                .to_string(),
        },
        DiseaseEntry {
            name: "Healthy Leaf".to_string(),
            crop: "Multiple".to_string(),
            typical_severity: Severity::Healthy,
            description: "No disease symptoms detected.".to_string(),
            treatment: "No treatment needed. Keep monitoring regularly.".to_string(),
        },
    ]
}

/// Case-insensitive substring search over disease names, crops, and
/// descriptions.
pub fn search(entries: &[DiseaseEntry], query: &str) -> Vec<DiseaseEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.crop.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_not_empty() {
        let entries = catalogue();
        assert!(entries.len() >= 4);
        assert!(entries.iter().any(|e| e.name == "Tomato Early Blight"));
    }

    #[test]
    fn test_search_matches_crop_case_insensitively() {
        let entries = catalogue();
        let hits = search(&entries, "coffee");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.crop == "Coffee"));
    }

    #[test]
    fn test_search_matches_name() {
        let entries = catalogue();
        let hits = search(&entries, "blight");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let entries = catalogue();
        assert_eq!(search(&entries, "  ").len(), entries.len());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let entries = catalogue();
        assert!(search(&entries, "wheat rust").is_empty());
    }
}
