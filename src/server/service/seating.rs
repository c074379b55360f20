use std::collections::HashMap;

use entity::sea_orm_active_enums::TableShape;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::seating::{
        CreateSeatingTableDto, SeatingTableDto, TableChairDto, UpdateSeatingTableDto,
    },
    server::{
        data::{
            guest::GuestRepository,
            profile::ProfileRepository,
            seating::{
                chair::TableChairRepository,
                table::{SeatingTableRepository, TableLayout},
                template::TableTemplateRepository,
            },
        },
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::{SeatingTableModel, TableChairModel},
    },
};

/// Largest number of chairs a table may be created with.
pub const MAX_SEATS: i32 = 100;

pub struct SeatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatingService<'a> {
    /// Creates a new instance of [`SeatingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's tables ordered by ID, each with its chairs
    pub async fn get_tables(&self, user_id: Uuid) -> Result<Vec<SeatingTableDto>, Error> {
        let tables = SeatingTableRepository::new(self.db).get_many(user_id).await?;
        let chairs = TableChairRepository::new(self.db)
            .get_by_table_ids(tables.iter().map(|t| t.id).collect())
            .await?;

        let mut chairs_by_table: HashMap<i32, Vec<TableChairModel>> = HashMap::new();
        for chair in chairs {
            chairs_by_table.entry(chair.table_id).or_default().push(chair);
        }

        Ok(tables
            .into_iter()
            .map(|table| {
                let chairs = chairs_by_table.remove(&table.id).unwrap_or_default();
                table_to_dto(table, chairs)
            })
            .collect())
    }

    pub async fn get_table(&self, user_id: Uuid, table_id: i32) -> Result<SeatingTableDto, Error> {
        let table = SeatingTableRepository::new(self.db)
            .get(user_id, table_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Table", table_id))?;

        let chairs = TableChairRepository::new(self.db)
            .get_by_table_ids(vec![table.id])
            .await?;

        Ok(table_to_dto(table, chairs))
    }

    /// Creates a table and its empty chairs in one transaction
    ///
    /// When `template_id` is given the template's shape, dimensions, name and seat count are
    /// used for any field the request leaves out.
    ///
    /// # Returns
    /// - `Ok(SeatingTableDto)` - Table created with `seats` chairs
    /// - `Err(Error::ValidationError)` - Missing layout, empty name, bad dimensions or seat count
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - Unknown template or no profile
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn create_table(
        &self,
        user_id: Uuid,
        request: CreateSeatingTableDto,
    ) -> Result<SeatingTableDto, Error> {
        let template = match &request.template_id {
            Some(template_id) => Some(
                TableTemplateRepository::new(self.db)
                    .get(template_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Table template", template_id))?,
            ),
            None => None,
        };

        let name = request
            .name
            .or_else(|| template.as_ref().map(|t| t.name.clone()))
            .unwrap_or_default();
        let shape = request.shape.or(template.as_ref().map(|t| t.shape));
        let width = request.width.or(template.as_ref().map(|t| t.width));
        let length = request.length.or(template.as_ref().map(|t| t.length));
        let seats = request
            .seats
            .or(template.as_ref().map(|t| t.seats))
            .unwrap_or(0);

        let (shape, width, length) = match (shape, width, length) {
            (Some(shape), Some(width), Some(length)) => (shape, width, length),
            _ => return Err(ValidationError::MissingTableLayout.into()),
        };

        let layout = validate_layout(name, shape, width, length)?;
        let seats = validate_seats(seats)?;

        if ProfileRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(ResourceError::not_found("Profile", user_id).into());
        }

        let txn = self.db.begin().await?;

        let table = SeatingTableRepository::new(&txn)
            .create(user_id, layout)
            .await?;
        let chairs = TableChairRepository::new(&txn)
            .create_many(user_id, table.id, seats)
            .await?;

        txn.commit().await?;

        Ok(table_to_dto(table, chairs))
    }

    pub async fn update_table(
        &self,
        user_id: Uuid,
        table_id: i32,
        request: UpdateSeatingTableDto,
    ) -> Result<SeatingTableDto, Error> {
        let layout = validate_layout(request.name, request.shape, request.width, request.length)?;

        let table = SeatingTableRepository::new(self.db)
            .update(user_id, table_id, layout)
            .await?
            .ok_or_else(|| ResourceError::not_found("Table", table_id))?;

        let chairs = TableChairRepository::new(self.db)
            .get_by_table_ids(vec![table.id])
            .await?;

        Ok(table_to_dto(table, chairs))
    }

    /// Deletes a table, its chairs go with it and its guests become unassigned
    pub async fn delete_table(&self, user_id: Uuid, table_id: i32) -> Result<(), Error> {
        let result = SeatingTableRepository::new(self.db)
            .delete(user_id, table_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Table", table_id).into());
        }

        Ok(())
    }

    /// Adds one empty chair to a table
    pub async fn add_chair(&self, user_id: Uuid, table_id: i32) -> Result<TableChairDto, Error> {
        SeatingTableRepository::new(self.db)
            .get(user_id, table_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Table", table_id))?;

        let chair = TableChairRepository::new(self.db)
            .create(user_id, table_id)
            .await?;

        Ok(chair_to_dto(chair))
    }

    pub async fn delete_chair(&self, user_id: Uuid, chair_id: i32) -> Result<(), Error> {
        let result = TableChairRepository::new(self.db)
            .delete(user_id, chair_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Chair", chair_id).into());
        }

        Ok(())
    }

    /// Puts a guest on a chair, replacing whoever sat there
    ///
    /// Does not clear other chairs the guest may already occupy, see [`Self::move_guest`].
    pub async fn assign_guest(
        &self,
        user_id: Uuid,
        chair_id: i32,
        guest_id: i32,
    ) -> Result<TableChairDto, Error> {
        GuestRepository::new(self.db)
            .get(user_id, guest_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Guest", guest_id))?;

        let chair = TableChairRepository::new(self.db)
            .set_guest(user_id, chair_id, Some(guest_id))
            .await?
            .ok_or_else(|| ResourceError::not_found("Chair", chair_id))?;

        Ok(chair_to_dto(chair))
    }

    pub async fn unassign_guest(
        &self,
        user_id: Uuid,
        chair_id: i32,
    ) -> Result<TableChairDto, Error> {
        let chair = TableChairRepository::new(self.db)
            .set_guest(user_id, chair_id, None)
            .await?
            .ok_or_else(|| ResourceError::not_found("Chair", chair_id))?;

        Ok(chair_to_dto(chair))
    }

    /// Moves a guest onto a chair in one transaction
    ///
    /// Every chair currently holding the guest is cleared, the guest is seated on `chair_id`
    /// and the guest's table is set to the chair's table.
    pub async fn move_guest(
        &self,
        user_id: Uuid,
        chair_id: i32,
        guest_id: i32,
    ) -> Result<TableChairDto, Error> {
        let txn = self.db.begin().await?;

        let chair_repo = TableChairRepository::new(&txn);
        let guest_repo = GuestRepository::new(&txn);

        let chair = chair_repo
            .get(user_id, chair_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Chair", chair_id))?;
        guest_repo
            .get(user_id, guest_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Guest", guest_id))?;

        chair_repo.clear_guest(user_id, guest_id).await?;
        let chair = chair_repo
            .set_guest(user_id, chair.id, Some(guest_id))
            .await?
            .ok_or_else(|| ResourceError::not_found("Chair", chair_id))?;
        guest_repo
            .set_table(user_id, guest_id, Some(chair.table_id))
            .await?;

        txn.commit().await?;

        Ok(chair_to_dto(chair))
    }
}

/// Checks a table layout and returns it ready to store
///
/// # Returns
/// - `Ok(TableLayout)` - Name is non-empty, width and length are finite and positive
/// - `Err(ValidationError)` - The first field that failed
pub(crate) fn validate_layout(
    name: String,
    shape: TableShape,
    width: f64,
    length: f64,
) -> Result<TableLayout, ValidationError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::EmptyField("name"));
    }

    validate_dimension("width", width)?;
    validate_dimension("length", length)?;

    Ok(TableLayout {
        name,
        shape,
        width,
        length,
    })
}

fn validate_dimension(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositiveDimension { field, value });
    }

    Ok(())
}

pub(crate) fn validate_seats(seats: i32) -> Result<usize, ValidationError> {
    if !(0..=MAX_SEATS).contains(&seats) {
        return Err(ValidationError::SeatCountOutOfRange {
            value: seats,
            max: MAX_SEATS,
        });
    }

    Ok(seats as usize)
}

fn chair_to_dto(chair: TableChairModel) -> TableChairDto {
    TableChairDto {
        id: chair.id,
        table_id: chair.table_id,
        guest_id: chair.guest_id,
    }
}

fn table_to_dto(table: SeatingTableModel, chairs: Vec<TableChairModel>) -> SeatingTableDto {
    SeatingTableDto {
        id: table.id,
        name: table.name,
        shape: table.shape,
        width: table.width,
        length: table.length,
        created_at: table.created_at,
        updated_at: table.updated_at,
        chairs: chairs.into_iter().map(chair_to_dto).collect(),
    }
}
