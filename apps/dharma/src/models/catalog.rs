use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A concrete job title attached to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub description: String,
}

/// A "true calling": keywords for text matching plus the roles that express it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub careers: Vec<Role>,
}

/// The on-disk shape of one category value. The id lives in the map key.
#[derive(Serialize)]
struct CategoryBodyRef<'a> {
    keywords: &'a [String],
    description: &'a str,
    careers: &'a [Role],
}

#[derive(Deserialize)]
struct CategoryBody {
    keywords: Vec<String>,
    description: String,
    careers: Vec<Role>,
}

/// Ordered category catalog.
///
/// Serialized as a JSON object keyed by category id. Document order is kept
/// on load because the scorer breaks ties by catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(
                &category.id,
                &CategoryBodyRef {
                    keywords: &category.keywords,
                    description: &category.description,
                    careers: &category.careers,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category id to category")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, body)) = access.next_entry::<String, CategoryBody>()? {
                    // Later duplicates replace earlier ones, like a JSON object would.
                    categories.retain(|c: &Category| c.id != id);
                    categories.push(Category {
                        id,
                        keywords: body.keywords,
                        description: body.description,
                        careers: body.careers,
                    });
                }
                Ok(Catalog { categories })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
