use crate::dto::driver_dto::DriverInput;
use crate::models::driver::Driver;
use crate::utils::errors::AppError;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

pub struct DriverRepository {
    pool: SqlitePool,
}

impl DriverRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insertar un driver y devolver el id asignado por SQLite
    pub async fn create(
        &self,
        input: &DriverInput,
        photo_url: Option<&str>,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO drivers (name, mobile, joining_date, present_address, permanent_address, photo_url, current_car_no, past_car_no)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.mobile)
        .bind(&input.joining_date)
        .bind(&input.present_address)
        .bind(&input.permanent_address)
        .bind(photo_url)
        .bind(&input.current_car_no)
        .bind(&input.past_car_no)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("🆕 Driver {} insertado", id);
        Ok(id)
    }

    /// Reemplazar los campos mutables; `photo_url` solo se toca si llega una foto nueva.
    /// No verifica que el id exista: devuelve las filas afectadas.
    pub async fn update(
        &self,
        id: i64,
        input: &DriverInput,
        photo_url: Option<&str>,
    ) -> Result<u64, AppError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE drivers SET name = ");
        builder
            .push_bind(&input.name)
            .push(", mobile = ")
            .push_bind(&input.mobile)
            .push(", joining_date = ")
            .push_bind(&input.joining_date)
            .push(", present_address = ")
            .push_bind(&input.present_address)
            .push(", permanent_address = ")
            .push_bind(&input.permanent_address)
            .push(", current_car_no = ")
            .push_bind(&input.current_car_no)
            .push(", past_car_no = ")
            .push_bind(&input.past_car_no);

        if let Some(photo_url) = photo_url {
            builder.push(", photo_url = ").push_bind(photo_url);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        debug!("✏️ Driver {} actualizado ({} filas)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    /// Listar drivers, más nuevos primero. Con `search` filtra por subcadena
    /// en `name` o `mobile` (LIKE de SQLite, sin distinguir mayúsculas ASCII).
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Driver>, AppError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM drivers");

        if let Some(term) = search.filter(|term| !term.is_empty()) {
            let pattern = like_pattern(term);
            builder
                .push(" WHERE name LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR mobile LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\'");
        }

        builder.push(" ORDER BY id DESC");

        let drivers = builder
            .build_query_as::<Driver>()
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }
}

/// `%term%` con los comodines de LIKE escapados para que el término sea literal
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
