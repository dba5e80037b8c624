//! Food and meal generators.

use crate::mock::generators::pick;

const FRUITS: &[&str] = &[
	"Apple", "Apricot", "Blackberry", "Blueberry", "Cherry", "Fig", "Grapefruit", "Kiwi", "Mango", "Nectarine", "Papaya", "Peach",
	"Pear", "Plum", "Pomegranate", "Raspberry",
];

const VEGETABLES: &[&str] = &[
	"Artichoke", "Asparagus", "Beetroot", "Broccoli", "Carrot", "Cauliflower", "Celery", "Eggplant", "Kale", "Leek", "Parsnip",
	"Radish", "Spinach", "Squash", "Turnip", "Zucchini",
];

const BREAKFASTS: &[&str] = &[
	"Blueberry pancakes with maple syrup",
	"Buttermilk waffles with berries",
	"Cinnamon oatmeal with raisins",
	"Eggs benedict on an english muffin",
	"French toast with powdered sugar",
	"Granola with yogurt and honey",
	"Mushroom and spinach omelette",
	"Sourdough toast with avocado",
];

const LUNCHES: &[&str] = &[
	"Chicken caesar salad",
	"Grilled cheese with tomato soup",
	"Lentil soup with crusty bread",
	"Pulled pork sandwich with slaw",
	"Quinoa bowl with roasted vegetables",
	"Smoked turkey club on rye",
	"Spicy black bean burrito",
	"Tuna melt with pickles",
];

const DINNERS: &[&str] = &[
	"Baked salmon with lemon butter",
	"Beef stew with root vegetables",
	"Eggplant parmesan with basil",
	"Herb roasted chicken with potatoes",
	"Mushroom risotto with parmesan",
	"Pan seared trout with greens",
	"Spaghetti with garlic and olive oil",
	"Vegetable curry with jasmine rice",
];

const SNACKS: &[&str] = &[
	"Candied pecans", "Cheese and crackers", "Hummus with pita chips", "Kettle corn", "Roasted almonds", "Spiced chickpeas",
	"Trail mix", "Veggie sticks with ranch",
];

const DESSERTS: &[&str] = &[
	"Apple crumble with vanilla ice cream",
	"Carrot cake with cream cheese frosting",
	"Chocolate lava cake",
	"Key lime pie",
	"Lemon meringue tart",
	"Peach cobbler",
	"Sticky toffee pudding",
	"Tiramisu",
];

/// Generate a fruit name.
pub fn fruit() -> String {
	pick(FRUITS).to_owned()
}

/// Generate a vegetable name.
pub fn vegetable() -> String {
	pick(VEGETABLES).to_owned()
}

/// Generate a breakfast dish.
pub fn breakfast() -> String {
	pick(BREAKFASTS).to_owned()
}

/// Generate a lunch dish.
pub fn lunch() -> String {
	pick(LUNCHES).to_owned()
}

/// Generate a dinner dish.
pub fn dinner() -> String {
	pick(DINNERS).to_owned()
}

/// Generate a snack.
pub fn snack() -> String {
	pick(SNACKS).to_owned()
}

/// Generate a dessert.
pub fn dessert() -> String {
	pick(DESSERTS).to_owned()
}

#[cfg(test)]
mod tests {
	use super::{breakfast, dessert, dinner, fruit, lunch, snack, vegetable};

	#[test]
	fn every_food_generator_is_non_empty() {
		for generator in [fruit, vegetable, breakfast, lunch, dinner, snack, dessert] {
			assert!(!generator().is_empty());
		}
	}
}
