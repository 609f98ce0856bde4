//! Products service.

use async_trait::async_trait;
use comanda::menu::Category;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::ProductRecord,
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

/// Reject payloads the admin form should never submit.
///
/// The category is already closed at the type level; only the free-form
/// fields need checking here. The same constraints exist on the table, so
/// this is the friendly error, not the enforcement.
fn validate(name: &str, price: rust_decimal::Decimal) -> Result<(), ProductsServiceError> {
    if name.trim().is_empty() {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if price.is_sign_negative() || price.is_zero() {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, category).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: i64) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate(&product.name, product.price)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: i64,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate(&update.name, update.price)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: i64) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, optionally filtered by category.
    async fn list_products(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: i64) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's editable fields.
    async fn update_product(
        &self,
        product: i64,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: i64) -> Result<(), ProductsServiceError>;
}
