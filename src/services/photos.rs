//! Photo resolution for generated recipes.
//!
//! Recipe photos are a UX nicety, so resolution never fails: the ladder of
//! search queries is tried in order and ladder exhaustion falls back to a
//! fixed per-category stock photo flagged as a placeholder.

use crate::models::Recipe;
use crate::services::image_search::ImageSearchProvider;
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Regional dish and ingredient names mapped to terms stock-photo indexes
/// actually know.
static KEYWORD_REPLACEMENTS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("chaya", "spinach"),
        ("loroco", "vegetables"),
        ("güisquil", "squash"),
        ("plátano", "banana"),
        ("platano", "banana"),
        ("frijoles", "beans"),
        ("atol", "porridge"),
        ("tamales", "tamales"),
        ("pupusa", "tortilla"),
        ("elote", "corn"),
        ("chiltepe", "chili"),
    ]
    .into_iter()
    .map(|(regional, common)| {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regional)).expect("static pattern");
        (pattern, common)
    })
    .collect()
});

static CUISINE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("guatemalteca", "latin american"),
        ("mexicana", "mexican"),
        ("italiana", "italian"),
        ("española", "spanish"),
        ("asiática", "asian"),
        ("americana", "american"),
    ])
});

const DEFAULT_IMAGES: [(&str, &str); 4] = [
    ("desayuno", "https://images.pexels.com/photos/101533/pexels-photo-101533.jpeg"),
    ("almuerzo", "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg"),
    ("cena", "https://images.pexels.com/photos/262978/pexels-photo-262978.jpeg"),
    ("postre", "https://images.pexels.com/photos/1126359/pexels-photo-1126359.jpeg"),
];

const FALLBACK_CATEGORY: &str = "almuerzo";

/// A resolved recipe photo. `placeholder` is set when the URL is the static
/// category fallback rather than an actual search match.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPhoto {
    pub url: String,
    pub placeholder: bool,
}

#[derive(Debug, Clone)]
pub struct PhotoResolver {
    search: Arc<dyn ImageSearchProvider>,
}

impl PhotoResolver {
    pub fn new(search: Arc<dyn ImageSearchProvider>) -> Self {
        Self { search }
    }

    /// Resolve a photo for one recipe. Tries each candidate query in order,
    /// treating errors and empty result sets alike as tier failures, and
    /// always produces some URL.
    pub async fn resolve(&self, recipe: &Recipe) -> ResolvedPhoto {
        for query in candidate_queries(recipe) {
            match self.search.search(&query).await {
                Ok(Some(url)) => {
                    debug!(%query, %url, "Photo query hit");
                    return ResolvedPhoto {
                        url,
                        placeholder: false,
                    };
                }
                Ok(None) => {
                    debug!(%query, "Photo query matched nothing, trying next tier");
                }
                Err(e) => {
                    warn!(%query, "Photo query failed, trying next tier: {}", e);
                }
            }
        }

        warn!(recipe = %recipe.name, "All photo queries exhausted, using category default");
        ResolvedPhoto {
            url: default_image(&recipe.category).to_string(),
            placeholder: true,
        }
    }

    /// Attach photos to every recipe concurrently. Output order matches
    /// input order and the inputs are left untouched; recipes that already
    /// carry an `image_url` are not re-resolved.
    pub async fn enrich(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        join_all(recipes.iter().map(|recipe| async move {
            if recipe.image_url.is_some() {
                return recipe.clone();
            }
            let photo = self.resolve(recipe).await;
            Recipe {
                image_url: Some(photo.url),
                image_placeholder: photo.placeholder.then_some(true),
                ..recipe.clone()
            }
        }))
        .await
    }
}

/// The fallback ladder, as an ordered list of candidate queries.
///
/// Most-precise first: quoted dish name with and without cuisine, the bare
/// name, then the model's photo keywords (verbatim, then normalized), the
/// primary ingredient, and finally category plus mapped cuisine.
fn candidate_queries(recipe: &Recipe) -> Vec<String> {
    let mut queries = vec![
        format!("\"{}\" {} food", recipe.name, recipe.cuisine),
        format!("\"{}\" food", recipe.name),
        format!("{} food", recipe.name),
    ];

    if let Some(keywords) = recipe.image_keywords.as_deref() {
        queries.push(keywords.to_string());
        let normalized = normalize_keywords(keywords);
        if normalized != keywords.to_lowercase() {
            queries.push(normalized);
        }
    }

    if let Some(ingredient) = recipe.ingredients.first() {
        queries.push(format!(
            "{} food",
            normalize_keywords(&ingredient.name)
        ));
    }

    let cuisine_lower = recipe.cuisine.to_lowercase();
    let mapped_cuisine = match CUISINE_MAP.get(cuisine_lower.as_str()) {
        Some(mapped) => *mapped,
        None => recipe.cuisine.as_str(),
    };
    queries.push(format!("{} {} food", recipe.category, mapped_cuisine));

    queries
}

/// Lowercase the keywords and swap known regional terms for their common
/// English equivalents, whole words only.
fn normalize_keywords(keywords: &str) -> String {
    let mut normalized = keywords.to_lowercase();
    for (pattern, common) in KEYWORD_REPLACEMENTS.iter() {
        normalized = pattern.replace_all(&normalized, *common).into_owned();
    }
    normalized
}

fn default_image(category: &str) -> &'static str {
    DEFAULT_IMAGES
        .iter()
        .find(|(name, _)| *name == category)
        .or_else(|| DEFAULT_IMAGES.iter().find(|(name, _)| *name == FALLBACK_CATEGORY))
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_IMAGES[1].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use crate::services::image_search::FakeImageSearch;

    fn recipe(name: &str, cuisine: &str, category: &str, keywords: Option<&str>) -> Recipe {
        Recipe {
            id: None,
            name: name.to_string(),
            description: None,
            image_keywords: keywords.map(str::to_string),
            ingredients: vec![Ingredient {
                name: "plátano".to_string(),
                amount: "2".to_string(),
                unit: "unidad".to_string(),
            }],
            instructions: vec!["Cocinar".to_string()],
            prep_time: 10,
            cook_time: 20,
            category: category.to_string(),
            cuisine: cuisine.to_string(),
            servings: 4,
            image_url: None,
            image_placeholder: None,
            difficulty: None,
        }
    }

    #[tokio::test]
    async fn first_tier_hit_wins() {
        let mut search = FakeImageSearch::new();
        search.add_hit("mexicana", "https://example.com/tacos.jpg");
        let resolver = PhotoResolver::new(Arc::new(search));

        let photo = resolver
            .resolve(&recipe("Tacos al pastor", "mexicana", "cena", None))
            .await;
        assert_eq!(photo.url, "https://example.com/tacos.jpg");
        assert!(!photo.placeholder);
    }

    #[tokio::test]
    async fn exhausted_ladder_yields_category_default() {
        let resolver = PhotoResolver::new(Arc::new(FakeImageSearch::new()));
        let photo = resolver
            .resolve(&recipe("Mole poblano", "mexicana", "postre", None))
            .await;
        assert_eq!(photo.url, default_image("postre"));
        assert!(photo.placeholder);
    }

    #[tokio::test]
    async fn provider_errors_never_escape_resolve() {
        let resolver = PhotoResolver::new(Arc::new(FakeImageSearch::always_failing()));
        let photo = resolver
            .resolve(&recipe("Pepián", "guatemalteca", "cena", Some("stew")))
            .await;
        assert_eq!(photo.url, default_image("cena"));
        assert!(photo.placeholder);
    }

    #[tokio::test]
    async fn unknown_category_defaults_to_lunch_image() {
        let resolver = PhotoResolver::new(Arc::new(FakeImageSearch::new()));
        let photo = resolver
            .resolve(&recipe("Caldo", "peruana", "merienda", None))
            .await;
        assert_eq!(photo.url, default_image("almuerzo"));
        assert!(photo.placeholder);
    }

    #[tokio::test]
    async fn name_tiers_fail_before_keyword_tier_succeeds() {
        // Tiers 1-3 carry the dish name; they are stubbed to fail so the
        // keyword tier must be the one that answers.
        let mut search = FakeImageSearch::new();
        search.add_failure("Rellenitos");
        search.add_hit("sweet plantain", "https://example.com/rellenitos.jpg");
        let resolver = PhotoResolver::new(Arc::new(search));

        let photo = resolver
            .resolve(&recipe(
                "Rellenitos de Plátano",
                "guatemalteca",
                "postre",
                Some("sweet plantain empanadas guatemalan"),
            ))
            .await;
        assert_eq!(photo.url, "https://example.com/rellenitos.jpg");
        assert!(!photo.placeholder);
    }

    #[tokio::test]
    async fn normalized_keyword_tier_maps_regional_terms() {
        // Verbatim keywords miss; the normalized form (plátano -> banana)
        // is the first query that can hit.
        let mut search = FakeImageSearch::new();
        search.add_hit("banana", "https://example.com/banana.jpg");
        let resolver = PhotoResolver::new(Arc::new(search));

        let photo = resolver
            .resolve(&recipe(
                "Rellenitos",
                "guatemalteca",
                "postre",
                Some("empanadas de plátano dulce"),
            ))
            .await;
        assert_eq!(photo.url, "https://example.com/banana.jpg");
        assert!(!photo.placeholder);
    }

    #[tokio::test]
    async fn resolve_is_deterministic_against_a_fixed_stub() {
        let mut search = FakeImageSearch::new();
        search.add_hit("food", "https://example.com/stable.jpg");
        let resolver = PhotoResolver::new(Arc::new(search));
        let r = recipe("Tamales", "guatemalteca", "cena", None);

        let first = resolver.resolve(&r).await;
        let second = resolver.resolve(&r).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn enrich_isolates_per_recipe_failures() {
        let mut search = FakeImageSearch::new();
        search.add_failure("Fallida");
        search.add_hit("Exitosa", "https://example.com/ok.jpg");
        let resolver = PhotoResolver::new(Arc::new(search));

        let recipes = vec![
            recipe("Fallida", "mexicana", "cena", None),
            recipe("Exitosa", "mexicana", "cena", None),
        ];
        let enriched = resolver.enrich(&recipes).await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].name, "Fallida");
        assert_eq!(enriched[0].image_url.as_deref(), Some(default_image("cena")));
        assert_eq!(enriched[0].image_placeholder, Some(true));
        assert_eq!(enriched[1].image_url.as_deref(), Some("https://example.com/ok.jpg"));
        assert!(enriched[1].image_placeholder.is_none());
        // inputs untouched
        assert!(recipes[0].image_url.is_none());
    }

    #[tokio::test]
    async fn enrich_skips_recipes_with_an_image_already_set() {
        let mut search = FakeImageSearch::new();
        search.add_hit("food", "https://example.com/other.jpg");
        let resolver = PhotoResolver::new(Arc::new(search));

        let mut preset = recipe("Ya resuelta", "mexicana", "cena", None);
        preset.image_url = Some("https://example.com/original.jpg".to_string());

        let enriched = resolver.enrich(&[preset]).await;
        assert_eq!(
            enriched[0].image_url.as_deref(),
            Some("https://example.com/original.jpg")
        );
        assert!(enriched[0].image_placeholder.is_none());
    }

    #[test]
    fn candidate_queries_follow_ladder_order() {
        let r = recipe(
            "Rellenitos de Plátano",
            "guatemalteca",
            "postre",
            Some("empanadas de plátano dulce"),
        );
        let queries = candidate_queries(&r);

        assert_eq!(
            queries,
            vec![
                "\"Rellenitos de Plátano\" guatemalteca food".to_string(),
                "\"Rellenitos de Plátano\" food".to_string(),
                "Rellenitos de Plátano food".to_string(),
                "empanadas de plátano dulce".to_string(),
                "empanadas de banana dulce".to_string(),
                "banana food".to_string(),
                "postre latin american food".to_string(),
            ]
        );
    }

    #[test]
    fn normalized_tier_is_skipped_when_nothing_changes() {
        let r = recipe("Pancakes", "americana", "desayuno", Some("fluffy pancakes"));
        let queries = candidate_queries(&r);
        assert_eq!(queries.iter().filter(|q| q.contains("fluffy")).count(), 1);
    }

    #[test]
    fn normalize_swaps_whole_words_only() {
        assert_eq!(normalize_keywords("Plátano frito"), "banana frito");
        assert_eq!(normalize_keywords("chaya soup"), "spinach soup");
        // substrings are left alone
        assert_eq!(normalize_keywords("platanos"), "platanos");
    }

    #[test]
    fn unmapped_cuisine_passes_through() {
        let r = recipe("Ceviche", "peruana", "almuerzo", None);
        let queries = candidate_queries(&r);
        assert_eq!(queries.last().unwrap(), "almuerzo peruana food");
    }
}
