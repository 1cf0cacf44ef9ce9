use sea_query::{ColumnDef, Iden, Index, IndexCreateStatement, Table, TableCreateStatement};

#[derive(Iden, Clone, Copy)]
pub enum ContactInquiry {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Service,
    Message,
    CreatedAt,
}

pub fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ContactInquiry::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(ContactInquiry::Id)
                .string()
                .not_null()
                .string_len(36)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ContactInquiry::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ContactInquiry::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(ColumnDef::new(ContactInquiry::Phone).string().string_len(20))
        .col(
            ColumnDef::new(ContactInquiry::Service)
                .string()
                .not_null()
                .string_len(30),
        )
        .col(
            ColumnDef::new(ContactInquiry::Message)
                .string()
                .not_null()
                .string_len(2000),
        )
        .col(
            ColumnDef::new(ContactInquiry::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

pub fn create_created_at_index() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name("idx_contact_inquiry_created_at")
        .table(ContactInquiry::Table)
        .col(ContactInquiry::CreatedAt)
        .to_owned()
}
