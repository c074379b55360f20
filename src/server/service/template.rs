use sea_orm::DatabaseConnection;

use crate::{
    model::seating::{TableTemplateDto, TableTemplateInputDto},
    server::{
        data::seating::template::TableTemplateRepository,
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::TableTemplateModel,
        service::seating::{validate_layout, validate_seats},
        util::slug::is_valid_slug,
    },
};

pub struct TableTemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableTemplateService<'a> {
    /// Creates a new instance of [`TableTemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all templates, predefined templates first then by name
    pub async fn get_all(&self) -> Result<Vec<TableTemplateDto>, Error> {
        let templates = TableTemplateRepository::new(self.db).get_all().await?;

        Ok(templates.into_iter().map(template_to_dto).collect())
    }

    pub async fn get(&self, id: &str) -> Result<TableTemplateDto, Error> {
        let template = TableTemplateRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Table template", id))?;

        Ok(template_to_dto(template))
    }

    /// Creates or replaces a custom template
    ///
    /// # Returns
    /// - `Ok(TableTemplateDto)` - The stored template
    /// - `Err(Error::ValidationError)` - Malformed ID, empty name, bad dimensions or seat count
    /// - `Err(Error::ResourceError(ResourceError::PredefinedTemplate))` - `id` names a
    ///   predefined template
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn upsert(
        &self,
        id: &str,
        request: TableTemplateInputDto,
    ) -> Result<TableTemplateDto, Error> {
        if !is_valid_slug(id) {
            return Err(ValidationError::InvalidTemplateId(id.to_string()).into());
        }

        let layout = validate_layout(request.name, request.shape, request.width, request.length)?;
        validate_seats(request.seats)?;

        let repo = TableTemplateRepository::new(self.db);

        if let Some(existing) = repo.get(id).await? {
            if existing.is_predefined {
                return Err(ResourceError::PredefinedTemplate(id.to_string()).into());
            }
        }

        let template = repo
            .upsert(TableTemplateModel {
                id: id.to_string(),
                name: layout.name,
                shape: layout.shape,
                width: layout.width,
                length: layout.length,
                seats: request.seats,
                is_predefined: false,
            })
            .await?;

        Ok(template_to_dto(template))
    }

    /// Deletes a custom template
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let repo = TableTemplateRepository::new(self.db);

        let template = repo
            .get(id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Table template", id))?;

        if template.is_predefined {
            return Err(ResourceError::PredefinedTemplate(id.to_string()).into());
        }

        repo.delete_custom(id).await?;

        Ok(())
    }
}

fn template_to_dto(template: TableTemplateModel) -> TableTemplateDto {
    TableTemplateDto {
        id: template.id,
        name: template.name,
        shape: template.shape,
        width: template.width,
        length: template.length,
        seats: template.seats,
        is_predefined: template.is_predefined,
    }
}
