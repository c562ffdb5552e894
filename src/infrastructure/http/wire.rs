// SPDX-License-Identifier: MPL-2.0
//! JSON wire format of the style service.
//!
//! The service speaks a loosely typed dialect: catalog ids come back as
//! numbers, analysis fields may be `null`, and key casing differs between the
//! analysis (`snake_case`) and the recommendations (`camelCase` from the
//! catalog columns). These DTOs absorb that and convert into domain types.

use crate::application::port::{ServiceError, ServiceResult};
use crate::domain::analysis::{AnalysisReport, AnalysisResult, RecommendationItem, Similarity};
use crate::domain::outfit::{GarmentId, OutfitPair};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// POST /analyze
// =============================================================================

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    analysis: AnalysisDto,
    recommendations: Vec<RecommendationDto>,
}

#[derive(Debug, Deserialize)]
struct AnalysisDto {
    #[serde(default, deserialize_with = "nullable")]
    caption: String,
    #[serde(default, deserialize_with = "nullable")]
    season: String,
    #[serde(default, alias = "aestheticCategory", deserialize_with = "nullable")]
    aesthetic_category: String,
    #[serde(default, alias = "aestheticVibe", deserialize_with = "nullable")]
    aesthetic_vibe: String,
    #[serde(default, alias = "displayName", deserialize_with = "nullable")]
    display_name: String,
    #[serde(default, deserialize_with = "nullable")]
    colors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RecommendationDto {
    #[serde(deserialize_with = "flexible_id")]
    id: String,
    #[serde(
        default,
        rename = "productDisplayName",
        alias = "product_display_name",
        deserialize_with = "nullable"
    )]
    product_display_name: String,
    #[serde(
        default,
        rename = "baseColour",
        alias = "base_colour",
        deserialize_with = "nullable"
    )]
    base_colour: String,
    #[serde(default, deserialize_with = "nullable")]
    season: String,
    #[serde(default, alias = "aestheticCategory", deserialize_with = "nullable")]
    aesthetic_category: String,
    similarity: f64,
}

impl From<AnalysisDto> for AnalysisResult {
    fn from(dto: AnalysisDto) -> Self {
        AnalysisResult {
            caption: dto.caption,
            season: dto.season,
            aesthetic_category: dto.aesthetic_category,
            aesthetic_vibe: dto.aesthetic_vibe,
            display_name: dto.display_name,
            colors: dto.colors,
        }
    }
}

impl From<RecommendationDto> for RecommendationItem {
    fn from(dto: RecommendationDto) -> Self {
        RecommendationItem {
            id: dto.id,
            product_display_name: dto.product_display_name,
            base_colour: dto.base_colour,
            season: dto.season,
            aesthetic_category: dto.aesthetic_category,
            similarity: Similarity::new(dto.similarity),
        }
    }
}

/// Decodes a `POST /analyze` success body.
///
/// Both `analysis` and `recommendations` must be present; a body missing
/// either is malformed. Recommendation order is preserved.
pub fn decode_analysis(body: &[u8]) -> ServiceResult<AnalysisReport> {
    let response: AnalyzeResponse =
        serde_json::from_slice(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;

    Ok(AnalysisReport {
        analysis: response.analysis.into(),
        recommendations: response
            .recommendations
            .into_iter()
            .map(RecommendationItem::from)
            .collect(),
    })
}

// =============================================================================
// POST /generate-outfits
// =============================================================================

/// Request body of `POST /generate-outfits`.
#[derive(Debug, Serialize)]
pub struct GenerateOutfitsRequest<'a> {
    pub tops: Vec<&'a str>,
    pub bottoms: Vec<&'a str>,
}

impl<'a> GenerateOutfitsRequest<'a> {
    pub fn new(tops: &'a [GarmentId], bottoms: &'a [GarmentId]) -> Self {
        Self {
            tops: tops.iter().map(GarmentId::as_str).collect(),
            bottoms: bottoms.iter().map(GarmentId::as_str).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateOutfitsResponse {
    #[serde(default, deserialize_with = "nullable")]
    outfits: Vec<OutfitDto>,
}

#[derive(Debug, Deserialize)]
struct OutfitDto {
    #[serde(deserialize_with = "flexible_id")]
    top: String,
    #[serde(deserialize_with = "flexible_id")]
    bottom: String,
}

/// Decodes a `POST /generate-outfits` success body.
///
/// A missing or `null` `outfits` field yields an empty list.
pub fn decode_outfits(body: &[u8]) -> ServiceResult<Vec<OutfitPair>> {
    let response: GenerateOutfitsResponse =
        serde_json::from_slice(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;

    Ok(response
        .outfits
        .into_iter()
        .map(|dto| OutfitPair {
            top: GarmentId::from(dto.top),
            bottom: GarmentId::from(dto.bottom),
        })
        .collect())
}

// =============================================================================
// Field helpers
// =============================================================================

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts an identifier given either as a string or as a JSON number.
fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYZE_BODY: &str = r##"{
        "analysis": {
            "caption": "blue shirt",
            "season": "Summer",
            "aesthetic_category": "Casual",
            "aesthetic_vibe": "Relaxed",
            "display_name": "Blue Oxford Shirt",
            "colors": ["#1e90ff", "#ffffff"]
        },
        "recommendations": [
            {"id": 42, "productDisplayName": "Navy Shirt", "baseColour": "Navy Blue",
             "season": "Summer", "similarity": 0.87},
            {"id": "7", "productDisplayName": "Linen Tee", "baseColour": "White",
             "season": "Summer", "aesthetic_category": "Casual", "similarity": 0.91}
        ]
    }"##;

    #[test]
    fn decode_analysis_maps_all_fields() {
        let report = decode_analysis(ANALYZE_BODY.as_bytes()).expect("valid body");

        assert_eq!(report.analysis.caption, "blue shirt");
        assert_eq!(report.analysis.season, "Summer");
        assert_eq!(report.analysis.aesthetic_category, "Casual");
        assert_eq!(report.analysis.aesthetic_vibe, "Relaxed");
        assert_eq!(report.analysis.display_name, "Blue Oxford Shirt");
        assert_eq!(report.analysis.colors, vec!["#1e90ff", "#ffffff"]);

        let first = &report.recommendations[0];
        assert_eq!(first.id, "42");
        assert_eq!(first.product_display_name, "Navy Shirt");
        assert_eq!(first.base_colour, "Navy Blue");
        assert!(first.aesthetic_category.is_empty());
        assert_eq!(first.similarity.to_string(), "87.0%");
    }

    #[test]
    fn decode_analysis_preserves_service_order() {
        let report = decode_analysis(ANALYZE_BODY.as_bytes()).expect("valid body");
        let ids: Vec<_> = report.recommendations.iter().map(|r| r.id.as_str()).collect();
        // Second item has the higher score but must stay second.
        assert_eq!(ids, vec!["42", "7"]);
    }

    #[test]
    fn decode_analysis_tolerates_null_fields() {
        let body = br#"{"analysis": {"caption": null, "colors": null, "season": "Winter"},
                        "recommendations": []}"#;
        let report = decode_analysis(body).expect("nulls are tolerated");
        assert!(report.analysis.caption.is_empty());
        assert!(report.analysis.colors.is_empty());
        assert_eq!(report.analysis.season, "Winter");
    }

    #[test]
    fn decode_analysis_rejects_missing_recommendations() {
        let body = br#"{"analysis": {"caption": "x"}}"#;
        assert!(matches!(
            decode_analysis(body),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn decode_analysis_rejects_non_json() {
        assert!(matches!(
            decode_analysis(b"<html>Internal Server Error</html>"),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn decode_analysis_rejects_recommendation_without_similarity() {
        let body = br#"{"analysis": {}, "recommendations": [{"id": 1}]}"#;
        assert!(decode_analysis(body).is_err());
    }

    #[test]
    fn decode_analysis_clamps_out_of_range_similarity() {
        let body = br#"{"analysis": {}, "recommendations": [{"id": 1, "similarity": 1.2}]}"#;
        let report = decode_analysis(body).expect("valid body");
        assert_eq!(report.recommendations[0].similarity.to_string(), "100.0%");
    }

    #[test]
    fn decode_outfits_keeps_order_and_normalises_ids() {
        let body = br#"{"outfits": [{"top": "t1", "bottom": "b1"}, {"top": 5, "bottom": "b2"}]}"#;
        let outfits = decode_outfits(body).expect("valid body");
        assert_eq!(outfits.len(), 2);
        assert_eq!(outfits[0].top.as_str(), "t1");
        assert_eq!(outfits[0].bottom.as_str(), "b1");
        assert_eq!(outfits[1].top.as_str(), "5");
    }

    #[test]
    fn decode_outfits_defaults_to_empty() {
        assert!(decode_outfits(b"{}").expect("empty object").is_empty());
        assert!(decode_outfits(br#"{"outfits": null}"#)
            .expect("null outfits")
            .is_empty());
    }

    #[test]
    fn decode_outfits_rejects_wrong_shape() {
        assert!(matches!(
            decode_outfits(br#"{"outfits": "none"}"#),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn generate_request_serializes_both_lists() {
        let tops = vec![GarmentId::new("t1"), GarmentId::new("t2")];
        let bottoms = vec![GarmentId::new("b1")];
        let json = serde_json::to_value(GenerateOutfitsRequest::new(&tops, &bottoms))
            .expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"tops": ["t1", "t2"], "bottoms": ["b1"]})
        );
    }
}
