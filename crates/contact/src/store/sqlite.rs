use std::str::FromStr;

use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::InquiryStore;
use crate::{ContactInquiry, InquiryRow, Result, table};

const COLUMNS: [table::ContactInquiry; 7] = [
    table::ContactInquiry::Id,
    table::ContactInquiry::Name,
    table::ContactInquiry::Email,
    table::ContactInquiry::Phone,
    table::ContactInquiry::Service,
    table::ContactInquiry::Message,
    table::ContactInquiry::CreatedAt,
];

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens `url`, creating the database file when missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the inquiry table and its index. Safe to run repeatedly.
    pub async fn migrate(&self) -> Result<()> {
        let create_table = table::create_table().build(SqliteQueryBuilder);
        sqlx::query(&create_table).execute(&self.pool).await?;

        let create_index = table::create_created_at_index().build(SqliteQueryBuilder);
        sqlx::query(&create_index).execute(&self.pool).await?;

        tracing::info!("contact_inquiry schema is up to date");

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl InquiryStore for SqliteStore {
    async fn insert(&self, inquiry: &ContactInquiry) -> Result<()> {
        let statement = Query::insert()
            .into_table(table::ContactInquiry::Table)
            .columns(COLUMNS)
            .values_panic([
                inquiry.id.to_owned().into(),
                inquiry.name.to_owned().into(),
                inquiry.email.to_owned().into(),
                inquiry.phone.to_owned().into(),
                inquiry.service.to_string().into(),
                inquiry.message.to_owned().into(),
                inquiry.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<ContactInquiry>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(table::ContactInquiry::Table)
            // Insertion order; created_at only has second precision.
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .limit(limit as u64)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, InquiryRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ContactInquiry::from).collect())
    }

    async fn find(&self, id: &str) -> Result<Option<ContactInquiry>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(table::ContactInquiry::Table)
            .and_where(Expr::col(table::ContactInquiry::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, InquiryRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ContactInquiry::from))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
