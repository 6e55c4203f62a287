//! Recipe suggestion helpers.
//!
//! Two stateless backends sit next to the extractor:
//!
//! - a rule-based local fallback mapping common leftovers to a handful of
//!   simple recipes, and
//! - a template "AI" suggestion that only runs when explicitly enabled and
//!   ignores ingredients past their expiry date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Reply when every ingredient is expired or none was given.
pub const NO_VALID_INGREDIENTS: &str =
    "All ingredients are outdated or missing. Update dates to get AI suggestions.";

/// Most suggestions returned by [`fallback_suggest`].
pub const MAX_SUGGESTIONS: usize = 5;

/// One suggested recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub id: String,
    pub title: String,
    pub directions: String,
    /// Relevance in `0.0..=1.0`, higher first.
    pub score: f64,
    pub minutes: u32,
    pub tags: Vec<String>,
}

/// Ingredients (and optional per-ingredient expiry dates) sent by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientsRequest {
    pub ingredients: Vec<String>,
    /// ISO `YYYY-MM-DD` dates paired with `ingredients` by index.
    pub expiries: Vec<String>,
}

impl IngredientsRequest {
    /// Parse a JSON request body leniently.
    ///
    /// Malformed JSON, missing fields and non-array fields all yield empty
    /// lists. Array items are stringified; falsy items (`null`, `false`, `0`,
    /// `""`) become empty strings.
    #[must_use]
    pub fn from_json_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self {
            ingredients: string_list(value.get("ingredients")),
            expiries: string_list(value.get("expiries")),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| match item {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Body of `POST /api/suggest-ai`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SuggestAiResponse {
    /// The AI backend is switched off.
    Disabled { disabled: bool },
    /// Suggestion text (or the "nothing valid" notice).
    Suggestion { ok: bool, text: String },
}

/// Body of `POST /api/suggest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestResponse {
    pub ok: bool,
    pub recipes: Vec<RecipeSuggestion>,
}

/// Trim and lowercase ingredient names, dropping empty ones.
#[must_use]
pub fn normalize_ingredients<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn recipe(id: &str, title: &str, directions: &str, score: f64, minutes: u32, tags: &[&str]) -> RecipeSuggestion {
    RecipeSuggestion {
        id: id.to_string(),
        title: title.to_string(),
        directions: directions.to_string(),
        score,
        minutes,
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

/// Rule-based suggestions for a set of (normalized) ingredient names.
///
/// ```rust
/// use leftover_chef::suggest::fallback_suggest;
///
/// let recipes = fallback_suggest(&["eggs".to_string()]);
/// assert_eq!(recipes[0].title, "Simple Omelette");
/// ```
#[must_use]
pub fn fallback_suggest(ingredients: &[String]) -> Vec<RecipeSuggestion> {
    let have: HashSet<&str> = ingredients.iter().map(String::as_str).collect();
    let tomato = have.contains("tomato") || have.contains("tomatoes");
    let mut out = Vec::new();

    if have.contains("egg") || have.contains("eggs") {
        out.push(recipe(
            "fallback-omelette",
            "Simple Omelette",
            "Beat eggs with salt and pepper, cook in a pan; optionally add chopped veggies or cheese.",
            0.6,
            10,
            &["breakfast", "quick"],
        ));
    }
    if tomato {
        out.push(recipe(
            "fallback-shakshuka",
            "Tomato & Egg Shakshuka",
            "Sauté onion and garlic, add tomatoes and spices, simmer, crack eggs and cook until set.",
            0.55,
            25,
            &["eggs", "tomato"],
        ));
    }
    if have.contains("rice") {
        out.push(recipe(
            "fallback-fried-rice",
            "Veggie Fried Rice",
            "Cook or use day-old rice. Stir-fry veggies, add rice and soy sauce; push aside and scramble an egg; mix.",
            0.5,
            20,
            &["rice"],
        ));
    }
    if have.contains("bread") && tomato {
        out.push(recipe(
            "fallback-panzanella",
            "Panzanella Salad",
            "Toast stale bread, toss with tomatoes, cucumber, onion, olive oil, vinegar, and herbs.",
            0.45,
            15,
            &["salad", "zero-waste"],
        ));
    }
    if have.contains("garlic") && have.contains("pasta") {
        out.push(recipe(
            "fallback-aglio-olio",
            "Garlic Olive Oil Pasta (Aglio e Olio)",
            "Cook pasta. Sauté sliced garlic in oil, add chili flakes, toss pasta and finish with parsley.",
            0.4,
            15,
            &["pasta"],
        ));
    }
    if out.is_empty() && !have.is_empty() {
        out.push(recipe(
            "fallback-salad",
            "Zero-waste Salad",
            "Chop available vegetables, add olive oil or vinegar, salt, pepper, and herbs.",
            0.3,
            10,
            &["salad"],
        ));
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}

/// Whether an ingredient with this expiry is still usable on `today`.
///
/// An empty expiry is always usable. Anything else is compared as a string
/// against `today` in `YYYY-MM-DD` form, so ISO dates order correctly and
/// other spellings order lexically (`"1/2/2020"` is past, `"next week"` is not).
#[must_use]
pub fn is_fresh(expiry: &str, today: NaiveDate) -> bool {
    let expiry = expiry.trim();
    expiry.is_empty() || expiry >= today.format("%Y-%m-%d").to_string().as_str()
}

/// Ingredient names not past their expiry, in request order.
///
/// Names are normalized first; `expiries[i]` then belongs to the i-th
/// remaining name.
#[must_use]
pub fn fresh_ingredients(request: &IngredientsRequest, today: NaiveDate) -> Vec<String> {
    normalize_ingredients(&request.ingredients)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| is_fresh(request.expiries.get(*i).map_or("", String::as_str), today))
        .map(|(_, name)| name)
        .collect()
}

/// Template suggestion text for a non-empty list of fresh ingredients.
#[must_use]
pub fn template_text(fresh: &[String]) -> String {
    let first = fresh.first().map_or("your main ingredient", String::as_str);
    let all = if fresh.is_empty() {
        "your veg".to_string()
    } else {
        fresh.join(", ")
    };

    format!(
        "• Quick Ideas\n  \
         - Combine {first} with pantry basics\n  \
         - Sear in oil, season with salt and pepper\n  \
         - Add acidity with vinegar or soy sauce\n\
         • Pantry Pasta\n  \
         - Boil pasta\n  \
         - Sizzle garlic in oil\n  \
         - Toss with {all} and a splash of cooking water\n\
         • Skillet Toss\n  \
         - Chop ingredients evenly\n  \
         - High heat sauté\n  \
         - Finish with butter and black pepper"
    )
}

/// Template "AI" suggestion.
#[must_use]
pub fn suggest_ai(request: &IngredientsRequest, enabled: bool, today: NaiveDate) -> SuggestAiResponse {
    if !enabled {
        return SuggestAiResponse::Disabled { disabled: true };
    }

    let fresh = fresh_ingredients(request, today);
    let text = if fresh.is_empty() {
        NO_VALID_INGREDIENTS.to_string()
    } else {
        template_text(&fresh)
    };

    SuggestAiResponse::Suggestion { ok: true, text }
}
