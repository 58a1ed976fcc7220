// ABOUTME: Built-in synonym table mapping canonical ingredient names to known synonyms
// ABOUTME: Ordered slice so first-writer-wins index construction is deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Canonical name followed by its synonyms, grouped by food family.
///
/// Order matters: when a synonym appears under several canonical names, the first
/// entry claims it. Canonical names always map to themselves regardless of order.
pub static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    // Poultry
    (
        "chicken",
        &[
            "chicken breast",
            "chicken thighs",
            "chicken wings",
            "chicken drumsticks",
            "chicken meat",
            "poultry",
            "chicken fillet",
            "chicken cutlet",
        ],
    ),
    (
        "chicken breast",
        &[
            "chicken",
            "chicken fillet",
            "chicken cutlet",
            "boneless chicken breast",
            "chicken breast fillet",
        ],
    ),
    ("chicken thighs", &["chicken", "chicken thigh", "bone-in chicken thighs"]),
    ("chicken wings", &["chicken", "chicken wing", "wings"]),
    ("turkey", &["turkey breast", "turkey meat", "ground turkey"]),
    ("duck", &["duck breast", "duck meat"]),

    // Beef
    ("beef", &["beef meat", "ground beef", "beef mince", "hamburger meat"]),
    ("ground beef", &["beef", "beef mince", "hamburger meat", "minced beef", "ground meat"]),
    ("beef chuck", &["beef", "chuck roast", "chuck steak", "beef roast"]),
    ("beef sirloin", &["beef", "sirloin steak", "sirloin", "beef steak"]),
    ("steak", &["beef steak", "beef", "sirloin steak", "ribeye", "filet mignon"]),

    // Pork
    ("pork", &["pork meat", "pork chop", "pork tenderloin"]),
    ("bacon", &["bacon strips", "bacon slices", "smoked bacon", "pork bacon"]),
    ("ham", &["ham slices", "deli ham", "cooked ham", "ham meat"]),

    // Seafood
    (
        "salmon",
        &["salmon fillet", "salmon filet", "salmon steak", "fresh salmon", "atlantic salmon"],
    ),
    ("salmon fillet", &["salmon", "salmon filet", "salmon steak"]),
    ("shrimp", &["shrimps", "prawns", "shrimp meat", "fresh shrimp", "frozen shrimp"]),
    ("prawns", &["shrimp", "shrimps", "prawn"]),
    ("fish", &["white fish", "fish fillet", "fish filet", "fish steak"]),
    ("white fish", &["fish", "cod", "tilapia", "halibut", "haddock", "fish fillet"]),
    ("tuna", &["tuna fish", "canned tuna", "fresh tuna", "tuna steak"]),

    // Dairy
    ("milk", &["whole milk", "2% milk", "skim milk", "low-fat milk", "dairy milk"]),
    ("butter", &["salted butter", "unsalted butter", "sweet butter", "butter stick"]),
    ("cheese", &["cheddar cheese", "mozzarella cheese", "cheese slices"]),
    ("cheddar cheese", &["cheese", "cheddar", "sharp cheddar", "mild cheddar"]),
    ("mozzarella cheese", &["cheese", "mozzarella", "fresh mozzarella", "mozzarella ball"]),
    (
        "parmesan cheese",
        &["cheese", "parmesan", "parmigiano reggiano", "grated parmesan", "parmesan grated"],
    ),
    ("feta cheese", &["cheese", "feta", "feta crumbles", "crumbled feta"]),
    ("ricotta cheese", &["cheese", "ricotta", "ricotta cheese"]),
    ("sour cream", &["sour cream", "dairy sour cream", "light sour cream"]),

    // Eggs
    ("egg", &["eggs", "large egg", "whole egg", "fresh egg", "chicken egg"]),
    ("eggs", &["egg", "large eggs", "whole eggs", "fresh eggs"]),

    // Vegetables - Alliums
    ("onion", &["onions", "yellow onion", "white onion", "sweet onion", "cooking onion"]),
    ("onions", &["onion", "yellow onions", "white onions"]),
    ("red onion", &["onion", "red onions", "purple onion"]),
    ("garlic", &["garlic cloves", "fresh garlic", "garlic bulb", "garlic head"]),
    ("green onions", &["onion", "scallions", "spring onions", "green onion", "scallion"]),
    ("scallions", &["onion", "green onions", "spring onions", "green onion"]),
    ("shallots", &["onion", "shallot", "french shallot"]),

    // Vegetables - Nightshades
    ("tomato", &["tomatoes", "fresh tomato", "ripe tomato", "tomato fruit"]),
    ("tomatoes", &["tomato", "fresh tomatoes", "ripe tomatoes"]),
    ("cherry tomatoes", &["tomato", "tomatoes", "cherry tomato", "grape tomatoes"]),
    (
        "bell pepper",
        &[
            "pepper",
            "bell peppers",
            "sweet pepper",
            "capsicum",
            "green pepper",
            "red pepper",
            "yellow pepper",
        ],
    ),
    ("bell peppers", &["pepper", "bell pepper", "sweet peppers", "capsicums"]),
    ("red pepper", &["pepper", "bell pepper", "red bell pepper", "sweet red pepper"]),
    ("green pepper", &["pepper", "bell pepper", "green bell pepper", "sweet green pepper"]),

    // Vegetables - Cruciferous
    ("broccoli", &["broccoli florets", "fresh broccoli", "broccoli head", "broccoli crown"]),
    ("cabbage", &["green cabbage", "white cabbage", "fresh cabbage", "cabbage head"]),
    ("cauliflower", &["cauliflower florets", "fresh cauliflower", "cauliflower head"]),

    // Vegetables - Root
    ("carrot", &["carrots", "fresh carrot", "baby carrot", "carrot sticks"]),
    ("carrots", &["carrot", "fresh carrots", "baby carrots"]),
    ("potato", &["potatoes", "russet potato", "yukon gold potato", "red potato", "baking potato"]),
    ("potatoes", &["potato", "russet potatoes", "yukon gold potatoes", "red potatoes"]),

    // Vegetables - Leafy
    (
        "lettuce",
        &["leaf lettuce", "iceberg lettuce", "romaine lettuce", "lettuce leaves", "salad lettuce"],
    ),
    ("romaine lettuce", &["lettuce", "romaine", "romaine leaves", "cos lettuce"]),
    ("spinach", &["fresh spinach", "baby spinach", "spinach leaves", "leaf spinach"]),
    ("kale", &["fresh kale", "kale leaves", "curly kale", "lacinato kale"]),

    // Vegetables - Other
    ("cucumber", &["cucumbers", "english cucumber", "persian cucumber", "cucumber slices"]),
    ("cucumbers", &["cucumber", "english cucumbers"]),
    ("zucchini", &["zucchinis", "courgette", "summer squash", "zucchini squash"]),
    (
        "mushrooms",
        &[
            "mushroom",
            "button mushrooms",
            "cremini mushrooms",
            "portobello mushrooms",
            "fresh mushrooms",
        ],
    ),
    ("mushroom", &["mushrooms", "button mushroom", "cremini mushroom"]),
    ("celery", &["celery stalks", "celery sticks", "celery ribs", "fresh celery"]),
    ("corn", &["sweet corn", "corn kernels", "corn on the cob", "fresh corn"]),
    ("peas", &["pea", "green peas", "frozen peas", "fresh peas", "sweet peas"]),
    ("pea", &["peas", "green pea", "frozen pea"]),

    // Herbs
    ("basil", &["fresh basil", "basil leaves", "sweet basil", "italian basil"]),
    (
        "parsley",
        &[
            "fresh parsley",
            "parsley leaves",
            "flat-leaf parsley",
            "italian parsley",
            "curly parsley",
        ],
    ),
    ("cilantro", &["fresh cilantro", "coriander", "cilantro leaves", "chinese parsley"]),
    ("coriander", &["cilantro", "fresh coriander", "coriander leaves"]),
    ("oregano", &["dried oregano", "fresh oregano", "oregano leaves"]),
    ("thyme", &["fresh thyme", "thyme leaves", "dried thyme"]),
    ("rosemary", &["fresh rosemary", "rosemary sprigs", "rosemary leaves", "dried rosemary"]),
    ("sage", &["fresh sage", "sage leaves", "dried sage"]),
    ("dill", &["fresh dill", "dill weed", "dill leaves"]),
    ("mint", &["fresh mint", "mint leaves", "spearmint", "peppermint"]),
    ("chives", &["fresh chives", "chive", "chive leaves"]),

    // Spices
    ("salt", &["table salt", "kosher salt", "sea salt", "iodized salt"]),
    ("black pepper", &["pepper", "ground black pepper", "peppercorns", "freshly ground pepper"]),
    ("pepper", &["black pepper", "ground pepper", "peppercorns"]),
    (
        "red pepper flakes",
        &["crushed red pepper", "red chili flakes", "chili flakes", "pepper flakes"],
    ),
    ("chili powder", &["chili powder", "chile powder", "mexican chili powder"]),
    ("cumin", &["ground cumin", "cumin seeds", "cumin powder"]),
    ("paprika", &["sweet paprika", "smoked paprika", "hungarian paprika"]),
    ("cinnamon", &["ground cinnamon", "cinnamon powder", "cinnamon stick"]),
    ("nutmeg", &["ground nutmeg", "nutmeg powder", "whole nutmeg"]),
    ("ginger", &["fresh ginger", "ginger root", "ground ginger", "ginger powder"]),
    ("curry powder", &["curry", "indian curry powder", "madras curry powder"]),

    // Grains & Starches
    ("rice", &["white rice", "long-grain rice", "jasmine rice", "basmati rice", "cooked rice"]),
    ("brown rice", &["rice", "brown rice", "whole grain rice"]),
    ("quinoa", &["quinoa grain", "cooked quinoa", "white quinoa", "red quinoa"]),
    ("pasta", &["noodles", "spaghetti", "penne pasta", "pasta noodles"]),
    ("spaghetti", &["pasta", "spaghetti noodles", "spaghetti pasta"]),
    ("penne pasta", &["pasta", "penne", "penne noodles"]),
    ("linguine", &["pasta", "linguine noodles", "linguini"]),
    ("lasagna noodles", &["pasta", "lasagna sheets", "lasagne noodles", "lasagna pasta"]),
    ("egg noodles", &["pasta", "noodles", "egg pasta", "wide egg noodles"]),
    ("bread", &["bread slices", "bread loaf", "white bread", "whole wheat bread", "sliced bread"]),
    (
        "breadcrumbs",
        &["bread crumbs", "panko breadcrumbs", "italian breadcrumbs", "plain breadcrumbs"],
    ),

    // Legumes
    ("black beans", &["beans", "black bean", "canned black beans", "dried black beans"]),
    (
        "kidney beans",
        &["beans", "kidney bean", "red kidney beans", "canned kidney beans", "dried kidney beans"],
    ),
    ("chickpeas", &["beans", "garbanzo beans", "chickpea", "canned chickpeas", "dried chickpeas"]),
    ("garbanzo beans", &["chickpeas", "chickpea", "garbanzo bean"]),
    ("beans", &["black beans", "kidney beans", "pinto beans", "navy beans"]),

    // Oils & Fats
    ("olive oil", &["extra virgin olive oil", "evoo", "olive oil", "virgin olive oil"]),
    ("vegetable oil", &["canola oil", "cooking oil", "neutral oil", "sunflower oil"]),
    ("canola oil", &["vegetable oil", "rapeseed oil", "cooking oil"]),
    ("sesame oil", &["toasted sesame oil", "sesame seed oil", "asian sesame oil"]),
    ("coconut oil", &["virgin coconut oil", "refined coconut oil", "coconut cooking oil"]),

    // Condiments & Sauces
    ("soy sauce", &["soy", "light soy sauce", "dark soy sauce", "tamari", "japanese soy sauce"]),
    (
        "tomato sauce",
        &["pasta sauce", "marinara sauce", "italian tomato sauce", "tomato pasta sauce"],
    ),
    ("pasta sauce", &["tomato sauce", "marinara sauce", "spaghetti sauce"]),
    ("caesar dressing", &["caesar salad dressing", "caesar", "caesar sauce"]),
    ("lemon juice", &["fresh lemon juice", "lemon", "lemon juice from concentrate"]),
    ("lime juice", &["fresh lime juice", "lime", "lime juice from concentrate"]),
    ("balsamic vinegar", &["balsamic", "balsamic vinaigrette", "aged balsamic"]),
    ("white wine", &["dry white wine", "white cooking wine", "sauvignon blanc", "pinot grigio"]),

    // Sweeteners
    ("sugar", &["white sugar", "granulated sugar", "table sugar", "cane sugar"]),
    ("white sugar", &["sugar", "granulated sugar", "table sugar"]),
    ("brown sugar", &["light brown sugar", "dark brown sugar", "packed brown sugar"]),
    ("honey", &["raw honey", "wildflower honey", "clover honey"]),
    ("maple syrup", &["pure maple syrup", "maple", "grade a maple syrup"]),

    // Baking
    ("flour", &["all-purpose flour", "white flour", "plain flour", "wheat flour"]),
    ("all-purpose flour", &["flour", "white flour", "plain flour", "ap flour"]),
    ("baking powder", &["baking soda substitute", "double-acting baking powder"]),
    ("baking soda", &["sodium bicarbonate", "bicarbonate of soda", "baking soda"]),
    ("vanilla extract", &["vanilla", "pure vanilla extract", "vanilla essence"]),
    (
        "chocolate chips",
        &[
            "chocolate chips",
            "semi-sweet chocolate chips",
            "milk chocolate chips",
            "dark chocolate chips",
        ],
    ),

    // Fruits
    ("avocado", &["avocados", "ripe avocado", "hass avocado", "avocado fruit"]),
    ("avocados", &["avocado", "ripe avocados"]),
    ("lemon", &["lemons", "fresh lemon", "lemon fruit"]),
    ("lime", &["limes", "fresh lime", "lime fruit"]),

    // Nuts & Seeds
    ("almonds", &["almond", "sliced almonds", "almond slivers", "whole almonds"]),
    ("walnuts", &["walnut", "chopped walnuts", "walnut pieces"]),
    ("peanuts", &["peanut", "roasted peanuts", "salted peanuts"]),
    ("sesame seeds", &["sesame", "toasted sesame seeds", "white sesame seeds"]),

    // Canned & Packaged
    (
        "coconut milk",
        &["canned coconut milk", "full-fat coconut milk", "light coconut milk", "coconut cream"],
    ),
    ("beef broth", &["beef stock", "beef bouillon", "beef consomme"]),
    ("chicken broth", &["chicken stock", "chicken bouillon", "chicken consomme"]),
    ("vegetable broth", &["vegetable stock", "vegetable bouillon", "vegetable consomme"]),
    ("taco seasoning", &["taco spice mix", "taco blend", "mexican seasoning"]),
    ("fajita seasoning", &["fajita spice mix", "fajita blend", "fajita marinade"]),

    // Other
    ("pickles", &["pickle", "dill pickles", "pickle slices", "pickled cucumber"]),
    ("pickle", &["pickles", "dill pickle", "pickle slice"]),
    ("croutons", &["crouton", "homemade croutons", "store-bought croutons", "garlic croutons"]),
    ("kalamata olives", &["olives", "kalamata olive", "greek olives", "black olives"]),
    ("olives", &["kalamata olives", "black olives", "green olives", "olive"]),
    ("tortillas", &["tortilla", "flour tortillas", "corn tortillas", "tortilla wraps"]),
    ("tortilla", &["tortillas", "flour tortilla", "corn tortilla"]),
    ("pizza dough", &["dough", "pizza crust", "homemade pizza dough", "store-bought pizza dough"]),
    ("dough", &["pizza dough", "bread dough", "pastry dough"]),
];
