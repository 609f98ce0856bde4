//! Menu fixtures.
//!
//! The house menu, used by examples, tests, and the `menu seed` command.

use rust_decimal::dec;
use rustc_hash::FxHashMap;

use crate::menu::{Category, MenuItem};

const SKEWER_DESCRIPTION: &str = "Espeto de 200g, porção de arroz, farofa, mandioca cozida";

/// The full house menu, in display order.
#[must_use]
pub fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Espeto de picanha".to_string(),
            description: SKEWER_DESCRIPTION.to_string(),
            price: dec!(29.90),
            category: Category::Skewer,
        },
        MenuItem {
            id: 2,
            name: "Espeto de frango".to_string(),
            description: SKEWER_DESCRIPTION.to_string(),
            price: dec!(25.90),
            category: Category::Skewer,
        },
        MenuItem {
            id: 3,
            name: "Espeto de coração".to_string(),
            description: SKEWER_DESCRIPTION.to_string(),
            price: dec!(25.90),
            category: Category::Skewer,
        },
        MenuItem {
            id: 4,
            name: "Torta de limão".to_string(),
            description: "Torta com creme de limão e base crocante".to_string(),
            price: dec!(15.00),
            category: Category::Dessert,
        },
        MenuItem {
            id: 5,
            name: "Pudim de leite condensado".to_string(),
            description: "Sobremesa clássica, feita com leite condensado e calda de caramelo"
                .to_string(),
            price: dec!(100.50),
            category: Category::Dessert,
        },
        MenuItem {
            id: 6,
            name: "Molho especial".to_string(),
            description: "Porção do molho especial da casa".to_string(),
            price: dec!(5.00),
            category: Category::Side,
        },
        MenuItem {
            id: 7,
            name: "Refrigerante lata".to_string(),
            description: "Lata 350ml, sabores variados".to_string(),
            price: dec!(6.00),
            category: Category::Drink,
        },
    ]
}

/// The house menu indexed by item id.
#[must_use]
pub fn menu_by_id() -> FxHashMap<u32, MenuItem> {
    menu().into_iter().map(|item| (item.id, item)).collect()
}
