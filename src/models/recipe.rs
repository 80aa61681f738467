use serde::{Deserialize, Serialize};

/// One recipe ingredient. `amount` is free text straight from the model and
/// may hold fractional notation like "1/2".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// A generated recipe. Field names on the wire are camelCase to match the
/// model output format and the stored `recipes_data` rows.
///
/// `category` and `difficulty` are carried as free text: the generator asks
/// for a fixed set of values but nothing downstream enforces them, and the
/// default-image table treats unknown categories as lunch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_keywords: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub category: String,
    pub cuisine: String,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Set to `true` when `image_url` is the static per-category stock photo
    /// rather than a search hit, so callers can render it differently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_placeholder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Recipe {
    /// Whether the recipe satisfies the shape every caller may rely on:
    /// at least one ingredient and at least one instruction step.
    pub fn is_well_formed(&self) -> bool {
        !self.ingredients.is_empty() && !self.instructions.is_empty()
    }

    /// Derive a copy rescaled to `new_servings`.
    ///
    /// Only purely numeric amounts are scaled (exact ratio, rounded to two
    /// decimals). Anything else, including fraction notation like "1/2",
    /// passes through unchanged; see `parse_amount` for the fraction-aware
    /// parser, which is deliberately not applied here.
    pub fn adjust_servings(&self, new_servings: u32) -> Recipe {
        let ratio = new_servings as f64 / self.servings as f64;

        let ingredients = self
            .ingredients
            .iter()
            .map(|ingredient| match ingredient.amount.trim().parse::<f64>() {
                Ok(amount) => {
                    let scaled = (amount * ratio * 100.0).round() / 100.0;
                    Ingredient {
                        amount: format_amount(scaled),
                        ..ingredient.clone()
                    }
                }
                Err(_) => ingredient.clone(),
            })
            .collect();

        Recipe {
            servings: new_servings,
            ingredients,
            ..self.clone()
        }
    }
}

/// Render a scaled amount without a trailing ".0" for whole numbers.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Parse a free-text amount into a number, understanding the common cooking
/// fractions ("1/2" -> 0.5, "1 1/2" -> 1.5). Unparseable input yields 0.
pub fn parse_amount(amount: &str) -> f64 {
    const FRACTIONS: [(&str, f64); 5] = [
        ("1/4", 0.25),
        ("1/3", 0.33),
        ("1/2", 0.5),
        ("2/3", 0.67),
        ("3/4", 0.75),
    ];

    for (fraction, decimal) in FRACTIONS {
        if let Some(pos) = amount.find(fraction) {
            let rest = format!("{}{}", &amount[..pos], &amount[pos + fraction.len()..]);
            let whole = rest.trim().parse::<f64>().unwrap_or(0.0);
            return whole + decimal;
        }
    }

    amount.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_amounts(servings: u32, amounts: &[&str]) -> Recipe {
        Recipe {
            id: None,
            name: "Tortilla de patatas".to_string(),
            description: None,
            image_keywords: None,
            ingredients: amounts
                .iter()
                .map(|a| Ingredient {
                    name: "patata".to_string(),
                    amount: a.to_string(),
                    unit: "unidad".to_string(),
                })
                .collect(),
            instructions: vec!["Freír".to_string()],
            prep_time: 10,
            cook_time: 20,
            category: "almuerzo".to_string(),
            cuisine: "española".to_string(),
            servings,
            image_url: None,
            image_placeholder: None,
            difficulty: None,
        }
    }

    #[test]
    fn rescale_scales_numeric_amounts_exactly() {
        let recipe = recipe_with_amounts(4, &["2"]);
        let adjusted = recipe.adjust_servings(6);
        assert_eq!(adjusted.servings, 6);
        assert_eq!(adjusted.ingredients[0].amount, "3");
        // original untouched
        assert_eq!(recipe.ingredients[0].amount, "2");
    }

    #[test]
    fn rescale_leaves_fraction_notation_alone() {
        let recipe = recipe_with_amounts(4, &["1/2"]);
        let adjusted = recipe.adjust_servings(6);
        assert_eq!(adjusted.ingredients[0].amount, "1/2");
    }

    #[test]
    fn rescale_rounds_to_two_decimals() {
        let recipe = recipe_with_amounts(3, &["1"]);
        let adjusted = recipe.adjust_servings(4);
        assert_eq!(adjusted.ingredients[0].amount, "1.33");
    }

    #[test]
    fn rescale_keeps_free_text_amounts() {
        let recipe = recipe_with_amounts(2, &["al gusto"]);
        let adjusted = recipe.adjust_servings(8);
        assert_eq!(adjusted.ingredients[0].amount, "al gusto");
    }

    #[test]
    fn parse_amount_handles_fractions() {
        assert_eq!(parse_amount("1/2"), 0.5);
        assert_eq!(parse_amount("1 1/2"), 1.5);
        assert_eq!(parse_amount("3/4"), 0.75);
        assert_eq!(parse_amount("2"), 2.0);
        assert_eq!(parse_amount("al gusto"), 0.0);
    }

    #[test]
    fn recipe_deserializes_model_output() {
        let json = r#"{
            "name": "Huevos con espinaca",
            "description": "Desayuno rápido",
            "imageKeywords": "scrambled eggs spinach",
            "ingredients": [{"name": "huevo", "amount": "2", "unit": "unidad"}],
            "instructions": ["Batir los huevos", "Cocinar"],
            "prepTime": 5,
            "cookTime": 10,
            "category": "desayuno",
            "cuisine": "guatemalteca",
            "servings": 2
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time, 5);
        assert_eq!(recipe.image_keywords.as_deref(), Some("scrambled eggs spinach"));
        assert!(recipe.is_well_formed());
        assert!(recipe.image_url.is_none());
    }

    #[test]
    fn well_formed_requires_ingredients_and_instructions() {
        let mut recipe = recipe_with_amounts(2, &["1"]);
        assert!(recipe.is_well_formed());
        recipe.instructions.clear();
        assert!(!recipe.is_well_formed());
    }
}
