use serde_json::json;

use super::model::ProductRecord;

fn record(id: &str, doc: serde_json::Value) -> ProductRecord {
    ProductRecord::new(id, doc.as_object().cloned().unwrap_or_default())
}

/// The starter menu installed into an empty catalog.
pub fn starter_menu() -> Vec<ProductRecord> {
    vec![
        record(
            "cappuccino",
            json!({
                "name": "Cappuccino",
                "price": 4.50,
                "category": "Coffee",
                "description": "Dark, rich espresso lies in wait under a smoothed and stretched layer of thick milk foam. An alchemy of barista artistry and craft.",
                "image_url": "https://images.unsplash.com/photo-1572442388796-11668a67e53d?auto=format&fit=crop&q=80&w=1000"
            }),
        ),
        record(
            "latte",
            json!({
                "name": "Latte",
                "price": 4.75,
                "category": "Coffee",
                "description": "Our dark, rich espresso balanced with steamed milk and a light layer of foam. A perfect milk-forward warm-up.",
                "image_url": "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?auto=format&fit=crop&q=80&w=1000"
            }),
        ),
        record(
            "classic-americano",
            json!({
                "name": "Classic Americano",
                "price": 3.50,
                "category": "Coffee",
                "description": "Espresso shots topped with hot water create a light layer of crema culminating in this wonderfully rich cup with depth and nuance.",
                "image_url": "https://images.unsplash.com/photo-1497935586351-b67a49e012bf?auto=format&fit=crop&q=80&w=1000"
            }),
        ),
        record(
            "iced-green-tea-lemonade",
            json!({
                "name": "Iced Green Tea Lemonade",
                "price": 4.25,
                "category": "Tea",
                "description": "Green tea blended with mint, lemongrass and lemon verbena, then shaken with ice. A refreshing lift to your day.",
                "image_url": "https://images.unsplash.com/photo-1556679343-c7306c1976bc?auto=format&fit=crop&q=80&w=1000"
            }),
        ),
        record(
            "matcha-latte",
            json!({
                "name": "Matcha Latte",
                "price": 5.25,
                "category": "Tea",
                "description": "Smooth and creamy matcha sweetened just right and served with steamed milk. This favorite will transport your senses to pure green delight.",
                "image_url": "https://images.unsplash.com/photo-1515823662972-da6a2e4d3002?auto=format&fit=crop&q=80&w=1000"
            }),
        ),
        record(
            "chocolate-croissant",
            json!({
                "name": "Chocolate Croissant",
                "price": 3.95,
                "category": "Food",
                "description": "Butter croissant dough wrapped around two mocha-flavored chocolate batons. A timeless classic.",
                "image_url": "https://images.unsplash.com/photo-1555507036-ab1f4038808a?auto=format&fit=crop&q=80&w=1000"
            }),
        ),
    ]
}
