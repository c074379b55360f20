use sea_orm::DatabaseConnection;

use crate::{
    model::vendor::{VendorCategoryDto, VendorDto},
    server::{
        data::vendor::{category::VendorCategoryRepository, vendor::VendorRepository},
        error::{resource::ResourceError, Error},
        model::db::{VendorCategoryModel, VendorModel},
    },
};

pub struct VendorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorService<'a> {
    /// Creates a new instance of [`VendorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every vendor with its category, ordered by name
    pub async fn get_all(&self) -> Result<Vec<VendorDto>, Error> {
        let vendors = VendorRepository::new(self.db)
            .get_all_with_category()
            .await?;

        Ok(vendors
            .into_iter()
            .map(|(vendor, category)| vendor_to_dto(vendor, category))
            .collect())
    }

    /// Gets one vendor with its category
    ///
    /// # Returns
    /// - `Ok(VendorDto)` - Vendor found
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No vendor with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_by_id(&self, id: i32) -> Result<VendorDto, Error> {
        let (vendor, category) = VendorRepository::new(self.db)
            .get_with_category(id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Vendor", id))?;

        Ok(vendor_to_dto(vendor, category))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<VendorDto, Error> {
        let (vendor, category) = VendorRepository::new(self.db)
            .get_by_slug_with_category(slug)
            .await?
            .ok_or_else(|| ResourceError::not_found("Vendor", slug))?;

        Ok(vendor_to_dto(vendor, category))
    }

    /// Lists every category ordered by name
    pub async fn get_categories(&self) -> Result<Vec<VendorCategoryDto>, Error> {
        let categories = VendorCategoryRepository::new(self.db).get_all().await?;

        Ok(categories.into_iter().map(category_to_dto).collect())
    }

    /// Lists the vendors of the category with the given slug
    ///
    /// # Returns
    /// - `Ok(Vec<VendorDto>)` - Vendors ordered by name, possibly empty
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - Unknown category slug
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_by_category_slug(&self, slug: &str) -> Result<Vec<VendorDto>, Error> {
        let category = VendorCategoryRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| ResourceError::not_found("Category", slug))?;

        let vendors = VendorRepository::new(self.db)
            .get_by_category_id(category.id)
            .await?;

        Ok(vendors
            .into_iter()
            .map(|vendor| vendor_to_dto(vendor, Some(category.clone())))
            .collect())
    }
}

pub(crate) fn category_to_dto(category: VendorCategoryModel) -> VendorCategoryDto {
    VendorCategoryDto {
        id: category.id,
        name: category.name,
        slug: category.slug,
        icon: category.icon,
        description: category.description,
    }
}

pub(crate) fn vendor_to_dto(
    vendor: VendorModel,
    category: Option<VendorCategoryModel>,
) -> VendorDto {
    VendorDto {
        id: vendor.id,
        name: vendor.name,
        slug: vendor.slug,
        category_id: vendor.category_id,
        category: category.map(category_to_dto),
        description: vendor.description,
        contact_info: vendor.contact_info,
        social_media: vendor.social_media,
        pricing_details: vendor.pricing_details,
        gallery_images: vendor.gallery_images,
        availability: vendor.availability,
        services_offered: vendor.services_offered,
        amenities: vendor.amenities,
        faq: vendor.faq,
        is_featured: vendor.is_featured,
        is_hidden: vendor.is_hidden,
        created_at: vendor.created_at,
        updated_at: vendor.updated_at,
    }
}
