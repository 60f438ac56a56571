// ABOUTME: Health-label vocabulary constants shared across catalog, engine, and integration
// ABOUTME: Category names are an external contract; provider names and legacy label patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

/// Fixed category names. Client apps and prompts depend on these strings.
pub mod categories {
    /// Allergy and intolerance labels
    pub const ALLERGY: &str = "allergy";
    /// Dietary preference labels (vegan, keto, ...)
    pub const DIETARY_PREFERENCE: &str = "dietary_preference";
    /// Cuisine labels; routed to the cuisine-type bucket
    pub const CUISINE_TYPE: &str = "cuisine_type";
    /// Nutrition focus labels (low-sugar, high-protein, ...)
    pub const NUTRITION_FOCUS: &str = "nutrition_focus";
}

/// Known external recipe providers
pub mod providers {
    /// Edamam recipe search API
    pub const EDAMAM: &str = "edamam";
    /// Spoonacular recipe API
    pub const SPOONACULAR: &str = "spoonacular";

    /// Providers queried by multi-provider meal planning when the caller names none
    pub const DEFAULT_MULTI_PROVIDER: [&str; 2] = [EDAMAM, SPOONACULAR];
}

/// Query parameter names used by provider recipe search requests
pub mod search_params {
    /// Repeated health label parameter
    pub const HEALTH: &str = "health";
    /// Repeated cuisine type parameter
    pub const CUISINE_TYPE: &str = "cuisineType";
}

/// Free-form label strings recognised when classifying legacy client selections
pub mod legacy {
    /// Labels treated as allergies
    pub const ALLERGY_PATTERNS: &[&str] = &[
        "dairy-free",
        "gluten-free",
        "egg-free",
        "fish-free",
        "shellfish-free",
        "peanut-free",
        "tree-nut-free",
        "soy-free",
        "wheat-free",
        "celery-free",
        "mustard-free",
        "sesame-free",
        "lupine-free",
        "mollusk-free",
        "sulfite-free",
    ];

    /// Labels treated as dietary preferences
    pub const PREFERENCE_PATTERNS: &[&str] = &[
        "vegan",
        "vegetarian",
        "keto-friendly",
        "paleo",
        "alcohol-free",
        "kosher",
        "mediterranean",
        "dash",
        "sugar-conscious",
        "low-sugar",
    ];

    /// Labels treated as cuisine types
    pub const CUISINE_PATTERNS: &[&str] = &[
        "american",
        "asian",
        "chinese",
        "indian",
        "italian",
        "mexican",
        "french",
        "japanese",
        "korean",
        "mediterranean-cuisine",
        "middle-eastern",
    ];
}
