//! Recipe generation: prompt construction and response parsing.
//!
//! Generation is best-effort end to end. Whatever goes wrong (transport,
//! malformed output, a response that is not an array) the caller gets an
//! empty list and a log line, never an error.

use crate::models::{Recipe, SearchRequest};
use crate::services::completion::CompletionProvider;
use std::sync::Arc;
use tracing::{info, warn};

const SYSTEM_INSTRUCTION: &str = "Eres un asistente que genera recetas en formato JSON válido. \
    Responde SOLO con JSON, sin texto adicional, sin markdown, sin comillas triples.";

#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate three candidate recipes for the given search.
    ///
    /// Category, cuisine, diet and difficulty are passed through to the
    /// prompt verbatim when present; nothing validates the values the model
    /// echoes back.
    pub async fn generate(&self, query: &SearchRequest) -> Vec<Recipe> {
        let prompt = build_prompt(query);

        let raw = match self.provider.complete(SYSTEM_INSTRUCTION, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(provider = self.provider.provider_name(), "Recipe generation failed: {}", e);
                return Vec::new();
            }
        };

        let sliced = match extract_json_array(&raw) {
            Some(sliced) => sliced,
            None => {
                warn!("Model response contains no JSON array, discarding");
                return Vec::new();
            }
        };

        let recipes: Vec<Recipe> = match serde_json::from_str(&sliced) {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("Model response failed recipe-array validation, discarding: {}", e);
                return Vec::new();
            }
        };

        let total = recipes.len();
        let recipes: Vec<Recipe> = recipes.into_iter().filter(Recipe::is_well_formed).collect();
        if recipes.len() < total {
            warn!(
                "Dropped {} generated recipe(s) with empty ingredients or instructions",
                total - recipes.len()
            );
        }

        info!("Generated {} recipe(s)", recipes.len());
        recipes
    }
}

fn build_prompt(query: &SearchRequest) -> String {
    let ingredients_list = if query.ingredients.is_empty() {
        String::new()
    } else {
        format!(
            "usando principalmente estos ingredientes: {}",
            query.ingredients.join(", ")
        )
    };

    let category_filter = query
        .category
        .as_deref()
        .map(|c| format!("de categoría {}", c))
        .unwrap_or_default();
    let cuisine_filter = query
        .cuisine
        .as_deref()
        .map(|c| format!("de cocina {}", c))
        .unwrap_or_default();
    let diet_filter = query
        .diet
        .as_deref()
        .map(|d| format!("aptas para dieta {}", d))
        .unwrap_or_default();
    let difficulty_filter = query
        .difficulty
        .as_deref()
        .map(|d| format!("de dificultad {}", d))
        .unwrap_or_default();

    format!(
        r#"Genera exactamente 3 recetas distintas {category_filter} {cuisine_filter} {diet_filter} {difficulty_filter} {ingredients_list}.

IMPORTANTE: Responde ÚNICAMENTE con un array JSON válido, sin texto adicional, sin markdown, sin explicaciones.

Formato requerido:
[
  {{
    "name": "Nombre de la receta",
    "description": "Breve descripción",
    "imageKeywords": "english photo search terms",
    "ingredients": [
      {{"name": "ingrediente", "amount": "cantidad", "unit": "unidad"}}
    ],
    "instructions": ["paso 1", "paso 2"],
    "prepTime": 15,
    "cookTime": 30,
    "category": "desayuno",
    "cuisine": "mexicana",
    "servings": 4
  }}
]

Las categorías permitidas son: desayuno, almuerzo, cena, postre
En "imageKeywords" escribe términos en inglés para buscar una foto del plato: usa el nombre del plato si es reconocido internacionalmente, o términos descriptivos en inglés si es un plato regional.
Responde solo con el JSON, nada más."#
    )
}

/// Pull the JSON array out of free-form model output.
///
/// Strips code-fence markers, then slices from the first `[` to the last
/// `]`, tolerating preamble and postamble prose. Returns `None` when no
/// array markers are present. Known limitation: a `[` or `]` inside string
/// content before or after the real array widens the slice, which the
/// subsequent parse then rejects.
pub(crate) fn extract_json_array(raw: &str) -> Option<String> {
    let cleaned = raw.trim().replace("```json", "").replace("```", "");
    let start = cleaned.find('[')?;
    let end = cleaned.rfind(']')?;
    if end < start {
        return None;
    }
    Some(cleaned[start..=end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::completion::FakeCompletion;

    const THREE_RECIPES: &str = r#"[
        {"name": "Huevos revueltos con espinaca", "description": "Desayuno clásico",
         "imageKeywords": "scrambled eggs spinach",
         "ingredients": [{"name": "huevo", "amount": "2", "unit": "unidad"},
                         {"name": "espinaca", "amount": "1", "unit": "taza"}],
         "instructions": ["Batir", "Cocinar"],
         "prepTime": 5, "cookTime": 10, "category": "desayuno",
         "cuisine": "guatemalteca", "servings": 2},
        {"name": "Omelette de espinaca", "description": "Rápido",
         "imageKeywords": "spinach omelette",
         "ingredients": [{"name": "huevo", "amount": "3", "unit": "unidad"}],
         "instructions": ["Batir", "Doblar"],
         "prepTime": 5, "cookTime": 8, "category": "desayuno",
         "cuisine": "francesa", "servings": 1},
        {"name": "Tortilla de espinaca", "description": "Al horno",
         "imageKeywords": "spinach frittata",
         "ingredients": [{"name": "huevo", "amount": "4", "unit": "unidad"}],
         "instructions": ["Mezclar", "Hornear"],
         "prepTime": 10, "cookTime": 20, "category": "desayuno",
         "cuisine": "española", "servings": 4}
    ]"#;

    fn breakfast_query() -> SearchRequest {
        SearchRequest {
            ingredients: vec!["huevo".to_string(), "espinaca".to_string()],
            category: Some("desayuno".to_string()),
            cuisine: None,
            diet: None,
            difficulty: None,
        }
    }

    #[tokio::test]
    async fn generates_three_recipes_with_category_passed_through() {
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::always(THREE_RECIPES)));
        let recipes = generator.generate(&breakfast_query()).await;

        assert_eq!(recipes.len(), 3);
        for recipe in &recipes {
            assert_eq!(recipe.category, "desayuno");
            assert!(recipe.is_well_formed());
        }
        assert_eq!(recipes[0].name, "Huevos revueltos con espinaca");
        assert_eq!(recipes[0].prep_time, 5);
        assert_eq!(recipes[0].image_keywords.as_deref(), Some("scrambled eggs spinach"));
    }

    #[tokio::test]
    async fn extracts_array_from_prose_wrapped_response() {
        let wrapped = format!("Claro, aquí tienes las recetas:\n{}\nEspero que te gusten.", THREE_RECIPES);
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::always(&wrapped)));
        assert_eq!(generator.generate(&breakfast_query()).await.len(), 3);
    }

    #[tokio::test]
    async fn extracts_array_from_fenced_response() {
        let fenced = format!("```json\n{}\n```", THREE_RECIPES);
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::always(&fenced)));
        assert_eq!(generator.generate(&breakfast_query()).await.len(), 3);
    }

    #[tokio::test]
    async fn malformed_output_yields_empty_list() {
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::always("no hay recetas hoy")));
        assert!(generator.generate(&breakfast_query()).await.is_empty());
    }

    #[tokio::test]
    async fn non_array_json_yields_empty_list() {
        let generator =
            RecipeGenerator::new(Arc::new(FakeCompletion::always(r#"{"recipes": []}"#)));
        assert!(generator.generate(&breakfast_query()).await.is_empty());
    }

    #[tokio::test]
    async fn element_failing_recipe_shape_discards_whole_batch() {
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::always(
            r#"[{"name": "incompleta"}]"#,
        )));
        assert!(generator.generate(&breakfast_query()).await.is_empty());
    }

    #[tokio::test]
    async fn provider_error_yields_empty_list() {
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::new()));
        assert!(generator.generate(&breakfast_query()).await.is_empty());
    }

    #[tokio::test]
    async fn recipe_without_instructions_is_dropped() {
        let response = r#"[
            {"name": "Sin pasos", "ingredients": [{"name": "x", "amount": "1", "unit": "u"}],
             "instructions": [], "prepTime": 1, "cookTime": 1,
             "category": "cena", "cuisine": "mexicana", "servings": 1},
            {"name": "Completa", "ingredients": [{"name": "x", "amount": "1", "unit": "u"}],
             "instructions": ["paso"], "prepTime": 1, "cookTime": 1,
             "category": "cena", "cuisine": "mexicana", "servings": 1}
        ]"#;
        let generator = RecipeGenerator::new(Arc::new(FakeCompletion::always(response)));
        let recipes = generator.generate(&breakfast_query()).await;
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Completa");
    }

    #[test]
    fn extract_handles_fences_and_prose() {
        assert_eq!(extract_json_array("```json\n[1, 2]\n```").as_deref(), Some("[1, 2]"));
        assert_eq!(extract_json_array("resultado: [1] fin").as_deref(), Some("[1]"));
        assert_eq!(extract_json_array("[]").as_deref(), Some("[]"));
    }

    #[test]
    fn extract_returns_none_without_markers() {
        assert!(extract_json_array("sin corchetes").is_none());
        assert!(extract_json_array("").is_none());
        assert!(extract_json_array("] al revés [").is_none());
    }

    #[test]
    fn prompt_mentions_every_filter() {
        let query = SearchRequest {
            ingredients: vec!["pollo".to_string()],
            category: Some("cena".to_string()),
            cuisine: Some("italiana".to_string()),
            diet: Some("vegetariana".to_string()),
            difficulty: Some("fácil".to_string()),
        };
        let prompt = build_prompt(&query);
        assert!(prompt.contains("de categoría cena"));
        assert!(prompt.contains("de cocina italiana"));
        assert!(prompt.contains("aptas para dieta vegetariana"));
        assert!(prompt.contains("de dificultad fácil"));
        assert!(prompt.contains("pollo"));
        assert!(prompt.contains("imageKeywords"));
    }
}
