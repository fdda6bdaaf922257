//! Menu items reachable by QR code.

use derive_getters::Getters;
use menugram_core::{ContentRequest, MenuItem, PostType};
use menugram_error::{CatalogError, CatalogErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Item id used when a scan carries no id.
pub const DEFAULT_ITEM_ID: &str = "1";

/// One dish a QR code can point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CatalogItem {
    /// Identifier encoded in the QR code
    id: String,
    /// Dish name
    name: String,
    /// Dish description
    description: String,
    /// Display price
    price: String,
    /// Image reference
    #[builder(default)]
    image: Option<String>,
    /// Restaurant serving the dish
    restaurant_name: String,
    /// Restaurant location
    location: String,
}

impl CatalogItem {
    /// Creates a new catalog item builder.
    pub fn builder() -> CatalogItemBuilder {
        CatalogItemBuilder::default()
    }

    /// The dish as a menu item.
    pub fn menu_item(&self) -> MenuItem {
        MenuItem::new(&self.name, &self.description)
            .with_price(Some(self.price.clone()))
            .with_image(self.image.clone())
    }

    /// A single-item request for this dish.
    ///
    /// Scanned items have no account handle, so the handle is left empty.
    pub fn to_request(&self, style: impl Into<String>, brand_colors: Vec<String>) -> ContentRequest {
        ContentRequest::new(&self.restaurant_name, "", PostType::Single)
            .with_location(&self.location)
            .with_menu_items(vec![self.menu_item()])
            .with_style(style)
            .with_brand_colors(brand_colors)
    }
}

/// Lookup table from QR ids to dishes.
///
/// # Examples
///
/// ```
/// use menugram_studio::MenuCatalog;
///
/// let catalog = MenuCatalog::demo();
/// let item = catalog.resolve(None).unwrap();
/// assert_eq!(item.name(), "Truffle Arancini");
/// assert!(catalog.resolve(Some("99")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    items: Vec<CatalogItem>,
}

impl MenuCatalog {
    /// Catalog over the given items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The three demo dishes served by Svang.
    pub fn demo() -> Self {
        let dish = |id: &str, name: &str, description: &str, price: &str| CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            image: Some("/menu.webp".to_string()),
            restaurant_name: "Svang".to_string(),
            location: "New York, NY".to_string(),
        };
        Self::new(vec![
            dish(
                "1",
                "Truffle Arancini",
                "Delicate truffle arancini with aged parmesan and micro herbs",
                "$24.00",
            ),
            dish(
                "2",
                "Wagyu Beef Tenderloin",
                "Pan-seared wagyu beef with cherry gastrique and seasonal vegetables",
                "$68.00",
            ),
            dish(
                "3",
                "Chocolate Lava Cake",
                "Decadent chocolate soufflé with vanilla bean ice cream",
                "$18.00",
            ),
        ])
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item for a scanned id, [`DEFAULT_ITEM_ID`] when none was scanned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogErrorKind::ItemNotFound`] for unknown ids.
    #[instrument(skip(self))]
    pub fn resolve(&self, id: Option<&str>) -> Result<&CatalogItem, CatalogError> {
        let id = id.unwrap_or(DEFAULT_ITEM_ID);
        let item = self
            .get(id)
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::ItemNotFound(id.to_string())))?;
        debug!(name = %item.name, "Resolved scanned item");
        Ok(item)
    }
}
