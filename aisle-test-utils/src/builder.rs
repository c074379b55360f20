//! Declarative test builder.
//!
//! Configuration methods are queued on the builder and executed in order by `build()`:
//! tables first, then profiles, categories, vendors and templates.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_wedding_tables: bool,

    // Database fixtures to insert
    profiles: Vec<Uuid>,
    categories: Vec<(String, String)>,       // (name, slug)
    vendors: Vec<(String, Option<String>)>,  // (name, category slug)
    templates: Vec<(String, bool)>,          // (id, is_predefined)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_wedding_tables: false,
            profiles: Vec::new(),
            categories: Vec::new(),
            vendors: Vec::new(),
            templates: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates Profile, SeatingTable, Guest, TableChair, TableTemplate, VendorCategory, Vendor
    /// and VendorAccessToken in dependency order.
    pub fn with_wedding_tables(mut self) -> Self {
        self.include_wedding_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aisle_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), aisle_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(VendorCategory)
    ///     .with_table(Vendor)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a profile for the given user ID.
    pub fn with_profile(mut self, user_id: Uuid) -> Self {
        self.profiles.push(user_id);
        self
    }

    /// Insert a vendor category.
    pub fn with_category(mut self, name: &str, slug: &str) -> Self {
        self.categories.push((name.to_string(), slug.to_string()));
        self
    }

    /// Insert a vendor, optionally in the category with the given slug.
    ///
    /// The category must be added via `with_category` before calling this method.
    pub fn with_vendor(mut self, name: &str, category_slug: Option<&str>) -> Self {
        self.vendors
            .push((name.to_string(), category_slug.map(str::to_string)));
        self
    }

    /// Insert a round 60" table template with the given ID.
    pub fn with_template(mut self, id: &str, is_predefined: bool) -> Self {
        self.templates.push((id.to_string(), is_predefined));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Tables created and fixtures inserted
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_wedding_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::SeatingTable),
                schema.create_table_from_entity(entity::prelude::Guest),
                schema.create_table_from_entity(entity::prelude::TableChair),
                schema.create_table_from_entity(entity::prelude::TableTemplate),
                schema.create_table_from_entity(entity::prelude::VendorCategory),
                schema.create_table_from_entity(entity::prelude::Vendor),
                schema.create_table_from_entity(entity::prelude::VendorAccessToken),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for user_id in self.profiles {
            setup.planner().insert_profile(user_id).await?;
        }

        let mut category_ids = Vec::new();
        for (name, slug) in self.categories {
            let category = setup.vendor().insert_category(&name, &slug).await?;
            category_ids.push((slug, category.id));
        }

        for (name, category_slug) in self.vendors {
            let category_id = category_slug.and_then(|slug| {
                category_ids
                    .iter()
                    .find(|(s, _)| *s == slug)
                    .map(|(_, id)| *id)
            });

            setup.vendor().insert_vendor(&name, category_id).await?;
        }

        for (id, is_predefined) in self.templates {
            setup.planner().insert_template(&id, is_predefined).await?;
        }

        Ok(setup)
    }
}
