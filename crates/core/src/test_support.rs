//! In-memory repositories shared by the service tests.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::brands::{Brand, BrandRepositoryTrait, NewBrand};
use crate::errors::{NotFoundError, Result};
use crate::products::{
    NewProduct, Product, ProductAttribute, ProductRepositoryTrait, ProductUpdate,
};
use crate::quotes::{ConvertedQuote, Quote, QuoteDetails, QuoteRepositoryTrait};
use crate::specifications::{NewSpecification, Specification, SpecificationRepositoryTrait};
use crate::vendors::{NewVendor, Vendor, VendorRepositoryTrait};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn page<T: Clone>(rows: &[T], limit: Option<i64>, offset: Option<i64>) -> Vec<T> {
    let skip = offset.unwrap_or(0) as usize;
    let take = limit.map(|l| l as usize).unwrap_or(usize::MAX);
    rows.iter().skip(skip).take(take).cloned().collect()
}

#[derive(Clone, Default)]
struct IdSequence(Arc<AtomicUsize>);

impl IdSequence {
    fn next(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

// =============================================================================
// Brands
// =============================================================================

#[derive(Clone, Default)]
pub(crate) struct InMemoryBrands {
    rows: Arc<Mutex<Vec<Brand>>>,
    ids: IdSequence,
    pub(crate) last_bounds: Arc<Mutex<Option<(Option<i64>, Option<i64>)>>>,
}

#[async_trait]
impl BrandRepositoryTrait for InMemoryBrands {
    async fn create(&self, new_brand: NewBrand) -> Result<Brand> {
        let brand = Brand {
            id: self.ids.next("brand"),
            name: new_brand.name,
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(brand.clone());
        Ok(brand)
    }

    async fn update_name(&self, brand_id: &str, name: &str) -> Result<Option<Brand>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|b| b.id == brand_id).map(|b| {
            b.name = name.to_string();
            b.updated_at = now();
            b.clone()
        }))
    }

    async fn delete(&self, brand_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| b.id != brand_id);
        Ok(before - rows.len())
    }

    fn get_by_id(&self, brand_id: &str) -> Result<Option<Brand>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|b| b.id == brand_id).cloned())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Brand>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|b| b.name == name).cloned())
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Brand>> {
        *self.last_bounds.lock().unwrap() = Some((limit, offset));
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(page(&rows, limit, offset))
    }

    fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

// =============================================================================
// Vendors
// =============================================================================

#[derive(Clone, Default)]
pub(crate) struct InMemoryVendors {
    rows: Arc<Mutex<Vec<Vendor>>>,
    links: Arc<Mutex<Vec<(String, String)>>>,
    ids: IdSequence,
    pub(crate) brands: InMemoryBrands,
}

impl InMemoryVendors {
    pub(crate) fn with_brands(brands: &InMemoryBrands) -> Self {
        Self {
            brands: brands.clone(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl VendorRepositoryTrait for InMemoryVendors {
    async fn create(&self, new_vendor: NewVendor) -> Result<Vendor> {
        let vendor = Vendor {
            id: self.ids.next("vendor"),
            name: new_vendor.name,
            currency: new_vendor.currency,
            discount_code: new_vendor.discount_code,
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(vendor.clone());
        Ok(vendor)
    }

    async fn update_name(&self, vendor_id: &str, name: &str) -> Result<Option<Vendor>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|v| v.id == vendor_id).map(|v| {
            v.name = name.to_string();
            v.updated_at = now();
            v.clone()
        }))
    }

    async fn delete(&self, vendor_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|v| v.id != vendor_id);
        self.links.lock().unwrap().retain(|(v, _)| v != vendor_id);
        Ok(before - rows.len())
    }

    fn get_by_id(&self, vendor_id: &str) -> Result<Option<Vendor>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|v| v.id == vendor_id).cloned())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Vendor>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|v| v.name == name).cloned())
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Vendor>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(page(&rows, limit, offset))
    }

    fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn add_brand(&self, vendor_id: &str, brand_id: &str) -> Result<()> {
        let mut links = self.links.lock().unwrap();
        let link = (vendor_id.to_string(), brand_id.to_string());
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn remove_brand(&self, vendor_id: &str, brand_id: &str) -> Result<usize> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|(v, b)| !(v == vendor_id && b == brand_id));
        Ok(before - links.len())
    }

    fn list_brands(&self, vendor_id: &str) -> Result<Vec<Brand>> {
        let links = self.links.lock().unwrap().clone();
        let mut brands = Vec::new();
        for (_, brand_id) in links.iter().filter(|(v, _)| v == vendor_id) {
            if let Some(brand) = self.brands.get_by_id(brand_id)? {
                brands.push(brand);
            }
        }
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brands)
    }
}

// =============================================================================
// Specifications
// =============================================================================

#[derive(Clone, Default)]
pub(crate) struct InMemorySpecifications {
    rows: Arc<Mutex<Vec<Specification>>>,
    ids: IdSequence,
    pub(crate) last_bounds: Arc<Mutex<Option<(Option<i64>, Option<i64>)>>>,
}

#[async_trait]
impl SpecificationRepositoryTrait for InMemorySpecifications {
    async fn create(&self, new_specification: NewSpecification) -> Result<Specification> {
        let specification = Specification {
            id: self.ids.next("spec"),
            name: new_specification.name,
            description: new_specification.description,
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(specification.clone());
        Ok(specification)
    }

    async fn update(
        &self,
        specification_id: &str,
        update: NewSpecification,
    ) -> Result<Option<Specification>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|s| s.id == specification_id).map(|s| {
            s.name = update.name;
            s.description = update.description;
            s.updated_at = now();
            s.clone()
        }))
    }

    async fn delete(&self, specification_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != specification_id);
        Ok(before - rows.len())
    }

    fn get_by_id(&self, specification_id: &str) -> Result<Option<Specification>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|s| s.id == specification_id).cloned())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Specification>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|s| s.name == name).cloned())
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Specification>> {
        *self.last_bounds.lock().unwrap() = Some((limit, offset));
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(page(&rows, limit, offset))
    }

    fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Clone, Default)]
pub(crate) struct InMemoryProducts {
    rows: Arc<Mutex<Vec<Product>>>,
    attributes: Arc<Mutex<Vec<ProductAttribute>>>,
    ids: IdSequence,
}

impl InMemoryProducts {
    fn sorted_by_name(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        let mut rows: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| keep(p))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}

#[async_trait]
impl ProductRepositoryTrait for InMemoryProducts {
    async fn create(&self, new_product: NewProduct) -> Result<Product> {
        let product = Product {
            id: self.ids.next("product"),
            name: new_product.name,
            brand_id: new_product.brand_id,
            specification_id: new_product.specification_id,
            sku: new_product.sku,
            description: new_product.description,
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, product_id: &str, update: ProductUpdate) -> Result<Option<Product>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|p| p.id == product_id).map(|p| {
            p.name = update.name;
            p.description = update.description;
            p.specification_id = update.specification_id;
            p.updated_at = now();
            p.clone()
        }))
    }

    async fn delete(&self, product_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != product_id);
        self.attributes
            .lock()
            .unwrap()
            .retain(|a| a.product_id != product_id);
        Ok(before - rows.len())
    }

    fn get_by_id(&self, product_id: &str) -> Result<Option<Product>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == product_id).cloned())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.name == name).cloned())
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Product>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(page(&rows, limit, offset))
    }

    fn list_by_brand(&self, brand_id: &str) -> Result<Vec<Product>> {
        Ok(self.sorted_by_name(|p| p.brand_id == brand_id))
    }

    fn list_by_specification(&self, specification_id: &str) -> Result<Vec<Product>> {
        Ok(self.sorted_by_name(|p| p.specification_id.as_deref() == Some(specification_id)))
    }

    fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn set_attribute(
        &self,
        product_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ProductAttribute> {
        let mut attributes = self.attributes.lock().unwrap();
        attributes.retain(|a| !(a.product_id == product_id && a.name == name));
        let attribute = ProductAttribute {
            product_id: product_id.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            updated_at: now(),
        };
        attributes.push(attribute.clone());
        Ok(attribute)
    }

    async fn remove_attribute(&self, product_id: &str, name: &str) -> Result<usize> {
        let mut attributes = self.attributes.lock().unwrap();
        let before = attributes.len();
        attributes.retain(|a| !(a.product_id == product_id && a.name == name));
        Ok(before - attributes.len())
    }

    fn list_attributes(&self, product_id: &str) -> Result<Vec<ProductAttribute>> {
        let mut rows: Vec<ProductAttribute> = self
            .attributes
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.product_id == product_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

// =============================================================================
// Quotes
// =============================================================================

/// Quote store that resolves the vendor and product join against the
/// in-memory vendor and product repositories. A missing side is a not-found.
#[derive(Clone, Default)]
pub(crate) struct InMemoryQuotes {
    rows: Arc<Mutex<Vec<Quote>>>,
    ids: IdSequence,
    pub(crate) vendors: InMemoryVendors,
    pub(crate) products: InMemoryProducts,
    pub(crate) last_bounds: Arc<Mutex<Option<(Option<i64>, Option<i64>)>>>,
}

impl InMemoryQuotes {
    pub(crate) fn new(vendors: &InMemoryVendors, products: &InMemoryProducts) -> Self {
        Self {
            vendors: vendors.clone(),
            products: products.clone(),
            ..Self::default()
        }
    }

    pub(crate) fn stored(&self) -> Vec<Quote> {
        self.rows.lock().unwrap().clone()
    }

    fn join(&self, quote: Quote) -> Result<QuoteDetails> {
        let vendor = self
            .vendors
            .get_by_id(&quote.vendor_id)?
            .ok_or_else(|| NotFoundError::new("Vendor", &quote.vendor_id))?;
        let product = self
            .products
            .get_by_id(&quote.product_id)?
            .ok_or_else(|| NotFoundError::new("Product", &quote.product_id))?;
        Ok(QuoteDetails {
            quote,
            vendor,
            product,
        })
    }

    fn select(&self, keep: impl Fn(&Quote) -> bool) -> Result<Vec<QuoteDetails>> {
        let rows: Vec<Quote> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(q))
            .cloned()
            .collect();
        rows.into_iter().map(|q| self.join(q)).collect()
    }
}

#[async_trait]
impl QuoteRepositoryTrait for InMemoryQuotes {
    async fn create(&self, quote: ConvertedQuote) -> Result<QuoteDetails> {
        let row = Quote {
            id: self.ids.next("quote"),
            vendor_id: quote.vendor_id,
            product_id: quote.product_id,
            price: quote.price,
            currency: quote.currency,
            converted_price: quote.converted_price,
            conversion_rate: quote.conversion_rate,
            quote_date: quote.quote_date,
            notes: quote.notes,
            created_at: now(),
        };
        let details = self.join(row.clone())?;
        self.rows.lock().unwrap().push(row);
        Ok(details)
    }

    fn get_by_id(&self, quote_id: &str) -> Result<Option<QuoteDetails>> {
        Ok(self.select(|q| q.id == quote_id)?.into_iter().next())
    }

    fn list(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<QuoteDetails>> {
        *self.last_bounds.lock().unwrap() = Some((limit, offset));
        let mut rows = self.select(|_| true)?;
        rows.sort_by(|a, b| b.quote.quote_date.cmp(&a.quote.quote_date));
        Ok(page(&rows, limit, offset))
    }

    fn list_by_product(&self, product_id: &str) -> Result<Vec<QuoteDetails>> {
        self.select(|q| q.product_id == product_id)
    }

    fn list_by_vendor(&self, vendor_id: &str) -> Result<Vec<QuoteDetails>> {
        self.select(|q| q.vendor_id == vendor_id)
    }

    async fn delete(&self, quote_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|q| q.id != quote_id);
        Ok(before - rows.len())
    }

    fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}
