// order_service/src/repository/catalog.rs

use crate::models::NewFood;

const fn item(name: &'static str, price_cents: i64, image: &'static str) -> NewFood {
  NewFood {
    name,
    price_cents,
    image,
  }
}

/// The fixed menu. Seeding preserves this order, so ids run 1..=11 on a fresh store.
pub const SEED_CATALOG: &[NewFood] = &[
  item("Pizza", 1099, "/static/images/pizza.jpg"),
  item("Pasta", 799, "/static/images/pasta.jpg"),
  item("Dosa", 899, "/static/images/dosa.jpg"),
  item("Idly", 549, "/static/images/idly.jpg"),
  item("Poori", 699, "/static/images/poori.jpg"),
  item("Vada", 399, "/static/images/vada.jpeg"),
  item("Meal", 1299, "/static/images/meals.jpeg"),
  item("Fried Rice", 999, "/static/images/friedrice.jpeg"),
  item("Mutton Biryani", 1499, "/static/images/muttonbiriyani.jpeg"),
  item("Veg Biryani", 1199, "/static/images/vegbiriyani.jpg"),
  item("Chicken Biryani", 1399, "/static/images/chickenbiriyni.jpg"),
];
