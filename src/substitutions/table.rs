// ABOUTME: Built-in substitution table with ratios, quality tiers, and usage notes
// ABOUTME: Grouped by food family; entries listed best first within each ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::models::Quality::{self, Excellent, Fair, Good};

/// (substitute, ratio, quality, notes)
pub(super) type SubstituteRow = (&'static str, f64, Quality, &'static str);

/// Ingredient followed by its substitutes
pub(super) static SUBSTITUTION_TABLE: &[(&str, &[SubstituteRow])] = &[
    // Dairy
    (
        "butter",
        &[
            ("margarine", 1.0, Excellent, "1:1 ratio, similar texture and flavor"),
            ("coconut oil", 0.75, Good, "Use 3/4 amount, may add slight coconut flavor"),
            ("olive oil", 0.75, Good, "Use 3/4 amount, best for savory dishes"),
            ("vegetable oil", 0.75, Good, "Use 3/4 amount, neutral flavor"),
            ("applesauce", 0.5, Fair, "Use 1/2 amount, adds moisture, best for baking"),
        ],
    ),
    (
        "milk",
        &[
            ("almond milk", 1.0, Excellent, "1:1 ratio, slightly nutty flavor"),
            ("soy milk", 1.0, Excellent, "1:1 ratio, creamy texture"),
            ("oat milk", 1.0, Excellent, "1:1 ratio, neutral flavor"),
            ("coconut milk", 1.0, Good, "1:1 ratio, rich and creamy"),
            ("water", 1.0, Fair, "1:1 ratio, but will be less creamy"),
        ],
    ),
    (
        "heavy cream",
        &[
            ("half and half", 1.0, Excellent, "1:1 ratio, slightly less rich"),
            ("milk + butter", 0.875, Good, "3/4 cup milk + 1/4 cup melted butter"),
            ("coconut cream", 1.0, Good, "1:1 ratio, may add coconut flavor"),
            ("evaporated milk", 1.0, Good, "1:1 ratio, similar richness"),
        ],
    ),
    (
        "sour cream",
        &[
            ("greek yogurt", 1.0, Excellent, "1:1 ratio, similar tangy flavor"),
            ("plain yogurt", 1.0, Good, "1:1 ratio, slightly less tangy"),
            ("buttermilk", 0.75, Fair, "Use 3/4 amount, more liquid"),
            ("cream cheese + milk", 0.5, Fair, "Mix 1/2 cream cheese with milk to thin"),
        ],
    ),
    (
        "cream cheese",
        &[
            ("mascarpone", 1.0, Excellent, "1:1 ratio, richer and sweeter"),
            ("ricotta cheese", 1.0, Good, "1:1 ratio, lighter texture"),
            ("greek yogurt", 1.0, Fair, "1:1 ratio, tangier flavor"),
        ],
    ),
    (
        "mozzarella cheese",
        &[
            ("provolone", 1.0, Excellent, "1:1 ratio, similar melting properties"),
            ("monterey jack", 1.0, Excellent, "1:1 ratio, good melting"),
            ("cheddar cheese", 1.0, Good, "1:1 ratio, stronger flavor"),
            ("swiss cheese", 1.0, Good, "1:1 ratio, nutty flavor"),
        ],
    ),
    (
        "parmesan cheese",
        &[
            ("pecorino romano", 1.0, Excellent, "1:1 ratio, saltier and sharper"),
            ("asiago", 1.0, Excellent, "1:1 ratio, similar nutty flavor"),
            ("grana padano", 1.0, Excellent, "1:1 ratio, milder than parmesan"),
            ("romano cheese", 1.0, Good, "1:1 ratio, sharper flavor"),
        ],
    ),

    // Egg
    (
        "egg",
        &[
            ("flax egg", 1.0, Good, "1 tbsp ground flaxseed + 3 tbsp water per egg"),
            ("chia egg", 1.0, Good, "1 tbsp chia seeds + 3 tbsp water per egg"),
            ("applesauce", 0.25, Fair, "1/4 cup per egg, best for baking"),
            ("banana", 0.25, Fair, "1/4 mashed banana per egg, adds sweetness"),
            ("yogurt", 0.25, Fair, "1/4 cup per egg, adds moisture"),
        ],
    ),
    (
        "eggs",
        &[
            ("flax egg", 1.0, Good, "1 tbsp ground flaxseed + 3 tbsp water per egg"),
            ("chia egg", 1.0, Good, "1 tbsp chia seeds + 3 tbsp water per egg"),
        ],
    ),

    // Flour
    (
        "all-purpose flour",
        &[
            ("whole wheat flour", 0.75, Good, "Use 3/4 amount, denser texture"),
            ("almond flour", 0.25, Fair, "Use 1/4 amount, gluten-free"),
            ("coconut flour", 0.125, Fair, "Use 1/8 amount, very absorbent"),
            ("oat flour", 0.75, Good, "Use 3/4 amount, nutty flavor"),
        ],
    ),
    (
        "flour",
        &[
            ("all-purpose flour", 1.0, Excellent, "1:1 ratio, standard substitution"),
        ],
    ),

    // Sweetener
    (
        "white sugar",
        &[
            ("brown sugar", 1.0, Excellent, "1:1 ratio, adds molasses flavor"),
            ("honey", 0.75, Good, "Use 3/4 amount, reduce liquid by 1/4"),
            ("maple syrup", 0.75, Good, "Use 3/4 amount, reduce liquid by 1/4"),
            ("coconut sugar", 1.0, Excellent, "1:1 ratio, similar to brown sugar"),
            ("stevia", 0.01, Fair, "Use very small amount, much sweeter"),
        ],
    ),
    (
        "brown sugar",
        &[
            ("white sugar + molasses", 1.0, Excellent, "1 cup sugar + 1 tbsp molasses"),
            ("coconut sugar", 1.0, Excellent, "1:1 ratio, similar flavor"),
            ("maple syrup", 0.75, Good, "Use 3/4 amount, reduce liquid"),
        ],
    ),

    // Oil
    (
        "vegetable oil",
        &[
            ("canola oil", 1.0, Excellent, "1:1 ratio, neutral flavor"),
            ("olive oil", 1.0, Good, "1:1 ratio, may add flavor"),
            ("coconut oil", 1.0, Good, "1:1 ratio, solid at room temp"),
            ("avocado oil", 1.0, Excellent, "1:1 ratio, neutral high-heat oil"),
        ],
    ),
    (
        "olive oil",
        &[
            ("vegetable oil", 1.0, Good, "1:1 ratio, neutral flavor"),
            ("canola oil", 1.0, Good, "1:1 ratio, neutral flavor"),
            ("avocado oil", 1.0, Excellent, "1:1 ratio, similar health benefits"),
        ],
    ),

    // Meat
    (
        "chicken",
        &[
            ("turkey", 1.0, Excellent, "1:1 ratio, similar texture and flavor"),
            ("pork", 1.0, Good, "1:1 ratio, slightly richer flavor"),
            ("tofu", 1.0, Fair, "1:1 ratio, vegetarian option"),
            ("tempeh", 1.0, Fair, "1:1 ratio, vegetarian option"),
        ],
    ),
    (
        "chicken breast",
        &[
            ("chicken thighs", 1.0, Excellent, "1:1 ratio, more flavorful and moist"),
            ("turkey breast", 1.0, Excellent, "1:1 ratio, leaner option"),
            ("pork tenderloin", 1.0, Good, "1:1 ratio, similar lean cut"),
        ],
    ),
    (
        "ground beef",
        &[
            ("ground turkey", 1.0, Excellent, "1:1 ratio, leaner option"),
            ("ground chicken", 1.0, Excellent, "1:1 ratio, leaner option"),
            ("ground pork", 1.0, Good, "1:1 ratio, richer flavor"),
            ("lentils", 1.0, Fair, "1:1 ratio, vegetarian option"),
            ("mushrooms", 1.0, Fair, "1:1 ratio, vegetarian option, chop finely"),
        ],
    ),
    (
        "bacon",
        &[
            ("turkey bacon", 1.0, Excellent, "1:1 ratio, leaner option"),
            ("pancetta", 1.0, Excellent, "1:1 ratio, similar cured pork"),
            ("prosciutto", 0.75, Good, "Use 3/4 amount, saltier"),
            ("smoked tempeh", 1.0, Fair, "1:1 ratio, vegetarian option"),
        ],
    ),

    // Seafood
    (
        "salmon",
        &[
            ("trout", 1.0, Excellent, "1:1 ratio, similar texture and flavor"),
            ("arctic char", 1.0, Excellent, "1:1 ratio, similar fatty fish"),
            ("tuna", 1.0, Good, "1:1 ratio, firmer texture"),
            ("cod", 1.0, Fair, "1:1 ratio, milder flavor"),
        ],
    ),
    (
        "shrimp",
        &[
            ("prawns", 1.0, Excellent, "1:1 ratio, essentially the same"),
            ("scallops", 1.0, Good, "1:1 ratio, similar sweet flavor"),
            ("lobster", 1.0, Good, "1:1 ratio, richer flavor"),
            ("chicken", 1.0, Fair, "1:1 ratio, completely different but works in many dishes"),
        ],
    ),

    // Vegetable
    (
        "onion",
        &[
            ("shallots", 1.0, Excellent, "1:1 ratio, milder flavor"),
            ("leeks", 1.0, Good, "1:1 ratio, milder and sweeter"),
            ("scallions", 0.5, Fair, "Use 1/2 amount, milder flavor"),
        ],
    ),
    (
        "garlic",
        &[
            ("garlic powder", 0.125, Good, "1/8 tsp per clove"),
            ("shallots", 2.0, Fair, "Use 2x amount, milder flavor"),
        ],
    ),
    (
        "tomato",
        &[
            ("canned tomatoes", 1.0, Excellent, "1:1 ratio, often more flavorful"),
            ("cherry tomatoes", 1.0, Excellent, "1:1 ratio, sweeter flavor"),
            ("sun-dried tomatoes", 0.25, Good, "Use 1/4 amount, more intense flavor"),
        ],
    ),
    (
        "tomatoes",
        &[
            ("canned tomatoes", 1.0, Excellent, "1:1 ratio, often more flavorful"),
            ("cherry tomatoes", 1.0, Excellent, "1:1 ratio, sweeter flavor"),
        ],
    ),
    (
        "bell pepper",
        &[
            ("poblano pepper", 1.0, Excellent, "1:1 ratio, slightly spicier"),
            ("anaheim pepper", 1.0, Good, "1:1 ratio, mild heat"),
            ("cubanelle pepper", 1.0, Good, "1:1 ratio, similar mild flavor"),
        ],
    ),
    (
        "mushrooms",
        &[
            ("portobello mushrooms", 1.0, Excellent, "1:1 ratio, meatier texture"),
            ("shiitake mushrooms", 1.0, Excellent, "1:1 ratio, more umami flavor"),
            ("cremini mushrooms", 1.0, Excellent, "1:1 ratio, similar to button"),
        ],
    ),

    // Herb and Spice
    (
        "basil",
        &[
            ("oregano", 1.0, Good, "1:1 ratio, stronger flavor"),
            ("thyme", 1.0, Fair, "1:1 ratio, earthier flavor"),
            ("parsley", 1.0, Fair, "1:1 ratio, milder flavor"),
        ],
    ),
    (
        "cilantro",
        &[
            ("parsley", 1.0, Good, "1:1 ratio, milder flavor, no soapy taste"),
            ("basil", 1.0, Fair, "1:1 ratio, different but works in some dishes"),
        ],
    ),
    (
        "parsley",
        &[
            ("cilantro", 1.0, Good, "1:1 ratio, stronger flavor"),
            ("chives", 1.0, Good, "1:1 ratio, milder onion flavor"),
        ],
    ),
    (
        "thyme",
        &[
            ("oregano", 1.0, Excellent, "1:1 ratio, similar Mediterranean flavor"),
            ("rosemary", 0.5, Good, "Use 1/2 amount, stronger flavor"),
            ("marjoram", 1.0, Excellent, "1:1 ratio, milder than oregano"),
        ],
    ),
    (
        "oregano",
        &[
            ("thyme", 1.0, Excellent, "1:1 ratio, earthier flavor"),
            ("marjoram", 1.0, Excellent, "1:1 ratio, milder flavor"),
            ("basil", 1.0, Good, "1:1 ratio, sweeter flavor"),
        ],
    ),

    // Legume
    (
        "black beans",
        &[
            ("kidney beans", 1.0, Excellent, "1:1 ratio, similar texture"),
            ("pinto beans", 1.0, Excellent, "1:1 ratio, creamier texture"),
            ("navy beans", 1.0, Good, "1:1 ratio, smaller and creamier"),
        ],
    ),
    (
        "chickpeas",
        &[
            ("cannellini beans", 1.0, Excellent, "1:1 ratio, similar creamy texture"),
            ("white beans", 1.0, Excellent, "1:1 ratio, similar texture"),
            ("lentils", 1.0, Good, "1:1 ratio, smaller and cook faster"),
        ],
    ),

    // Grain
    (
        "rice",
        &[
            ("quinoa", 1.0, Excellent, "1:1 ratio, higher protein"),
            ("cauliflower rice", 1.0, Good, "1:1 ratio, low-carb option"),
            ("barley", 1.0, Good, "1:1 ratio, chewier texture"),
            ("couscous", 1.0, Good, "1:1 ratio, smaller grains"),
        ],
    ),
    (
        "pasta",
        &[
            ("zucchini noodles", 1.0, Good, "1:1 ratio, low-carb option"),
            ("spaghetti squash", 1.0, Good, "1:1 ratio, low-carb option"),
            ("rice noodles", 1.0, Excellent, "1:1 ratio, gluten-free"),
            ("quinoa pasta", 1.0, Excellent, "1:1 ratio, higher protein"),
        ],
    ),

    // Other Common
    (
        "soy sauce",
        &[
            ("tamari", 1.0, Excellent, "1:1 ratio, gluten-free soy sauce"),
            ("coconut aminos", 1.0, Excellent, "1:1 ratio, sweeter and milder"),
            ("worcestershire sauce", 0.5, Fair, "Use 1/2 amount, different flavor profile"),
        ],
    ),
    (
        "lemon juice",
        &[
            ("lime juice", 1.0, Excellent, "1:1 ratio, slightly different flavor"),
            ("white wine vinegar", 1.0, Good, "1:1 ratio, more acidic"),
            ("apple cider vinegar", 0.75, Fair, "Use 3/4 amount, sweeter"),
        ],
    ),
    (
        "lime juice",
        &[
            ("lemon juice", 1.0, Excellent, "1:1 ratio, slightly different flavor"),
            ("white wine vinegar", 1.0, Good, "1:1 ratio, more acidic"),
        ],
    ),
    (
        "white wine",
        &[
            ("chicken broth", 1.0, Good, "1:1 ratio, no alcohol"),
            ("vegetable broth", 1.0, Good, "1:1 ratio, no alcohol"),
            ("white wine vinegar + water", 0.5, Fair, "1/2 vinegar + 1/2 water"),
        ],
    ),
    (
        "breadcrumbs",
        &[
            ("panko", 1.0, Excellent, "1:1 ratio, crispier texture"),
            ("crushed crackers", 1.0, Excellent, "1:1 ratio, similar texture"),
            ("almond flour", 1.0, Good, "1:1 ratio, gluten-free option"),
        ],
    ),
];
